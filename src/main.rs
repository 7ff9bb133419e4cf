mod api;
mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod fetch;
mod filter;
mod logging;
mod models;
mod session;
mod ui;
mod view;
mod workers;

use crate::config::{Config, get_config_path, resolve_api_url};
use crate::filter::ReviewFilter;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::InitialView;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the review-analysis API
    #[arg(long, global = true, env = "REVIEWS_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Paint a solid background colour behind the TUI
    #[arg(long = "with-background", global = true, action = clap::ArgAction::SetTrue)]
    with_background: bool,

    /// Command to execute; defaults to the dashboard
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show sentiment, feature, summary and discrepancy panels
    Dashboard {
        /// Print the view as text and exit instead of starting the TUI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,
    },
    /// Browse review cards by filter
    Reviews {
        /// One of all, positive, negative, neutral, slang, discrepancies
        #[arg(long, default_value = "all")]
        filter: String,

        /// Print the view as text and exit instead of starting the TUI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,
    },
    /// Save the API URL and display options, or reset them
    Config {
        /// Delete the saved configuration
        #[arg(long, action = clap::ArgAction::SetTrue)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    let config = Config::load_or_default(&config_path);

    let command = args.command.unwrap_or(Command::Dashboard { headless: false });
    let (initial, headless) = match command {
        Command::Config { reset } => {
            if reset {
                Config::clear(&config_path)?;
                print_cmd_success!("Configuration reset", "{}", config_path.display());
                return Ok(());
            }
            let updated = Config {
                api_url: resolve_api_url(args.api_url, &config),
                with_background_color: args.with_background || config.with_background_color,
            };
            updated
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Configuration saved", "{}", config_path.display());
            print_cmd_info!("API URL", "{}", updated.api_url);
            return Ok(());
        }
        Command::Dashboard { headless } => (InitialView::Dashboard, headless),
        Command::Reviews { filter, headless } => (
            InitialView::Reviews(ReviewFilter::from_value(&filter)),
            headless,
        ),
    };

    let api_url = resolve_api_url(args.api_url, &config);
    let with_background = args.with_background || config.with_background_color;
    let session = setup_session(api_url, with_background);

    if headless {
        if run_headless_mode(session, initial).await.is_err() {
            // The failure is already on stderr
            std::process::exit(1);
        }
        Ok(())
    } else {
        run_tui_mode(session, initial).await
    }
}
