//! Headless mode execution
//!
//! Fetches one view, prints it as plain text and exits.

use super::{SessionData, messages::print_session_starting};
use crate::api::error::{FetchError, unavailable_message};
use crate::error_classifier::ErrorClassifier;
use crate::fetch::{fetch_dashboard, fetch_reviews};
use crate::logging::init_headless_logger;
use crate::ui::InitialView;
use crate::view::text::{dashboard_report, reviews_report};
use log::{LevelFilter, log};

fn log_failure(err: &FetchError) {
    let filter: LevelFilter = ErrorClassifier::new().classify_fetch_error(err).into();
    if let Some(level) = filter.to_level() {
        log!(level, "{}", err);
    }
}

/// Renders `initial` to a string, or the single user-facing error message.
pub async fn render_view(session: &SessionData, initial: InitialView) -> Result<String, FetchError> {
    match initial {
        InitialView::Dashboard => {
            let data = fetch_dashboard(session.api.as_ref()).await?;
            Ok(dashboard_report(&data))
        }
        InitialView::Reviews(filter) => {
            let reviews = fetch_reviews(session.api.as_ref(), filter).await?;
            Ok(reviews_report(filter, &reviews))
        }
    }
}

/// Runs the application in headless mode
///
/// # Returns
/// * `Ok(())` - the view was fetched and printed
/// * `Err` - any request failed; the user-facing message has already been
///   printed to stderr, so callers only need to exit
pub async fn run_headless_mode(
    session: SessionData,
    initial: InitialView,
) -> Result<(), FetchError> {
    init_headless_logger();
    print_session_starting("headless", &session.api_url);

    if let InitialView::Reviews(filter) = initial {
        println!("Filter: {}", filter.label());
    }

    match render_view(&session, initial).await {
        Ok(report) => {
            print!("{}", report);
            Ok(())
        }
        Err(err) => {
            log_failure(&err);
            crate::print_cmd_error!(&unavailable_message(&session.api_url));
            Err(err)
        }
    }
}
