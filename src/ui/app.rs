//! Main application state and UI loop
//!
//! Owns the active view, starts its fetches and routes worker results back to it

use crate::api::ReviewsApi;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, MAX_ACTIVITY_LOGS, ui::input_poll_interval};
use crate::error_classifier::ErrorClassifier;
use crate::events::{AppEvent, Event as ActivityEvent, FetchCompletion, FetchOutcome, ViewKind};
use crate::filter::ReviewFilter;
use crate::ui::components::{activity, footer, header};
use crate::ui::dashboard::renderer::discrepancy_text_width;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::reviews::renderer::card_columns;
use crate::ui::reviews::{ReviewsState, render_reviews};
use crate::workers::{EventSender, spawn_dashboard_fetch, spawn_reviews_fetch};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The view the UI opens on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InitialView {
    Dashboard,
    Reviews(ReviewFilter),
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    Dashboard(Box<DashboardState>),
    Reviews(Box<ReviewsState>),
}

impl Screen {
    pub fn kind(&self) -> ViewKind {
        match self {
            Screen::Dashboard(_) => ViewKind::Dashboard,
            Screen::Reviews(_) => ViewKind::Reviews,
        }
    }
}

/// Whether the UI loop should keep running after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    api: Arc<dyn ReviewsApi>,

    /// Base URL shown in the header and in error messages.
    api_url: String,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Handed to fetch workers.
    event_sender: EventSender,

    /// Receives events from fetch workers.
    event_receiver: mpsc::Receiver<AppEvent>,

    /// Recent fetch activity, newest last.
    activity_logs: VecDeque<ActivityEvent>,

    /// Generation for the next fetch, unique across both views.
    next_generation: u64,

    error_classifier: ErrorClassifier,

    /// Whether to paint a solid background behind the UI.
    with_background_color: bool,

    /// Frame counter driving the loading spinner.
    tick: usize,

    /// Terminal area of the last drawn frame, used to bound scrolling.
    viewport: Rect,
}

impl App {
    /// Creates the app and starts the first fetch for `initial`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(
        api: Arc<dyn ReviewsApi>,
        api_url: String,
        initial: InitialView,
        with_background_color: bool,
    ) -> Self {
        let (sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let mut app = Self {
            api,
            api_url,
            current_screen: Screen::Dashboard(Box::new(DashboardState::new())),
            event_sender: EventSender::new(sender),
            event_receiver,
            activity_logs: VecDeque::with_capacity(MAX_ACTIVITY_LOGS),
            next_generation: 0,
            error_classifier: ErrorClassifier::new(),
            with_background_color,
            tick: 0,
            viewport: Rect::default(),
        };
        match initial {
            InitialView::Dashboard => app.show_dashboard(),
            InitialView::Reviews(filter) => app.show_reviews(filter),
        }
        app
    }

    fn allocate_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Activates the dashboard with a fresh load. Replacing the screen drops
    /// the previous view's state, which cancels its in-flight fetch.
    pub fn show_dashboard(&mut self) {
        let generation = self.allocate_generation();
        let mut state = DashboardState::new();
        let ticket = state.begin_fetch(generation);
        self.current_screen = Screen::Dashboard(Box::new(state));
        spawn_dashboard_fetch(self.api.clone(), ticket, self.event_sender.clone());
    }

    /// Activates the reviews view for `filter` with a fresh load.
    pub fn show_reviews(&mut self, filter: ReviewFilter) {
        let generation = self.allocate_generation();
        let mut state = ReviewsState::new(filter);
        let ticket = state.begin_fetch(generation);
        self.current_screen = Screen::Reviews(Box::new(state));
        spawn_reviews_fetch(self.api.clone(), filter, ticket, self.event_sender.clone());
    }

    /// Refetches the active view in place.
    pub fn reload(&mut self) {
        let generation = self.allocate_generation();
        match &mut self.current_screen {
            Screen::Dashboard(state) => {
                let ticket = state.begin_fetch(generation);
                spawn_dashboard_fetch(self.api.clone(), ticket, self.event_sender.clone());
            }
            Screen::Reviews(state) => {
                let ticket = state.begin_fetch(generation);
                let filter = state.filter();
                spawn_reviews_fetch(self.api.clone(), filter, ticket, self.event_sender.clone());
            }
        }
    }

    /// Changes the reviews filter. Selecting the active filter does nothing.
    pub fn select_filter(&mut self, filter: ReviewFilter) {
        let generation = self.allocate_generation();
        if let Screen::Reviews(state) = &mut self.current_screen {
            if state.filter() == filter {
                return;
            }
            let ticket = state.select_filter(filter, generation);
            spawn_reviews_fetch(self.api.clone(), filter, ticket, self.event_sender.clone());
        }
    }

    fn push_activity(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Applies one worker event to the app state.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Activity(event) => self.push_activity(event),
            AppEvent::Fetched(completion) => self.apply_completion(completion),
        }
    }

    fn apply_completion(&mut self, completion: FetchCompletion) {
        let FetchCompletion {
            generation,
            outcome,
        } = completion;

        let (view, summary) = match &outcome {
            FetchOutcome::Dashboard(Ok(data)) => (
                ViewKind::Dashboard,
                Ok(format!(
                    "Dashboard loaded ({} reviews)",
                    data.summary.total_reviews
                )),
            ),
            FetchOutcome::Reviews(Ok(reviews)) => (
                ViewKind::Reviews,
                Ok(format!("Loaded {} reviews", reviews.len())),
            ),
            FetchOutcome::Dashboard(Err(e)) => (
                ViewKind::Dashboard,
                Err((e.to_string(), self.error_classifier.classify_fetch_error(e))),
            ),
            FetchOutcome::Reviews(Err(e)) => (
                ViewKind::Reviews,
                Err((e.to_string(), self.error_classifier.classify_fetch_error(e))),
            ),
        };

        let applied = match (&mut self.current_screen, outcome) {
            (Screen::Dashboard(state), FetchOutcome::Dashboard(result)) => {
                state.apply(generation, result, &self.api_url)
            }
            (Screen::Reviews(state), FetchOutcome::Reviews(result)) => {
                state.apply(generation, result, &self.api_url)
            }
            _ => false,
        };
        if !applied {
            debug!("Dropped stale {} result (generation {})", view, generation);
            return;
        }

        let event = match summary {
            Ok(msg) => ActivityEvent::success(view, msg),
            Err((msg, level)) => ActivityEvent::error(view, msg, level),
        };
        self.push_activity(event);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('r') => self.reload(),
            KeyCode::Tab => match self.current_screen.kind() {
                ViewKind::Dashboard => self.show_reviews(ReviewFilter::default()),
                ViewKind::Reviews => self.show_dashboard(),
            },
            KeyCode::Char('1') if self.current_screen.kind() != ViewKind::Dashboard => {
                self.show_dashboard()
            }
            KeyCode::Char('2') if self.current_screen.kind() != ViewKind::Reviews => {
                self.show_reviews(ReviewFilter::default())
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Screen::Reviews(state) = &self.current_screen {
                    let next = state.filter().next();
                    self.select_filter(next);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Screen::Reviews(state) = &self.current_screen {
                    let previous = state.filter().previous();
                    self.select_filter(previous);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let body = body_area(self.viewport);
                match &mut self.current_screen {
                    Screen::Dashboard(state) => state.scroll_down(discrepancy_text_width(body)),
                    Screen::Reviews(state) => state.scroll_down(card_columns(body)),
                }
            }
            KeyCode::Up | KeyCode::Char('k') => match &mut self.current_screen {
                Screen::Dashboard(state) => state.scroll_up(),
                Screen::Reviews(state) => state.scroll_up(),
            },
            _ => {}
        }
        KeyOutcome::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the active view.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Apply everything the workers have reported since the last frame
        while let Ok(event) = app.event_receiver.try_recv() {
            app.handle_event(event);
        }

        app.tick = app.tick.wrapping_add(1);
        app.viewport = terminal.draw(|f| render(f, &app))?.area;

        if event::poll(input_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Splits the terminal into header, body, activity line and footer.
fn chrome_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area)
}

/// Area the active view is drawn into.
fn body_area(area: Rect) -> Rect {
    chrome_layout(area)[1]
}

/// Renders the chrome and the active view.
fn render(f: &mut Frame, app: &App) {
    if app.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let chunks = chrome_layout(f.area());

    let view = app.current_screen.kind();
    header::render_header(f, chunks[0], view, &app.api_url);
    match &app.current_screen {
        Screen::Dashboard(state) => render_dashboard(f, chunks[1], state, app.tick),
        Screen::Reviews(state) => render_reviews(f, chunks[1], state, app.tick),
    }
    activity::render_activity_line(f, chunks[2], &app.activity_logs);
    footer::render_footer(f, chunks[3], view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockReviewsApi;
    use crate::api::error::FetchError;
    use crate::api::request::ReviewQuery;
    use crate::events::EventType;
    use crate::models::Review;
    use crate::ui::view_state::ViewStatus;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    const URL: &str = "http://127.0.0.1:5000";

    fn review(text: &str, slang: &[&str]) -> Review {
        Review {
            rating: 3,
            review: text.to_string(),
            sentiment: None,
            slang_words: slang.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feeds worker events into the app until `done` holds.
    async fn pump_until(app: &mut App, done: impl Fn(&App) -> bool) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !done(app) {
                match app.event_receiver.recv().await {
                    Some(event) => app.handle_event(event),
                    None => break,
                }
            }
        })
        .await
        .expect("timed out waiting for worker events");
    }

    fn reviews_ready(app: &App) -> bool {
        matches!(&app.current_screen, Screen::Reviews(state) if matches!(state.status(), ViewStatus::Ready(_)))
    }

    #[tokio::test]
    async fn test_filter_change_shows_only_new_results() {
        let mut api = MockReviewsApi::new();
        api.expect_reviews()
            .withf(|query| *query == ReviewQuery::All)
            .times(0..=1)
            .returning(|_| Ok(vec![review("one", &[]), review("two", &[])]));
        api.expect_reviews()
            .withf(|query| *query == ReviewQuery::WithSlang)
            .times(1)
            .returning(|_| Ok(vec![review("that was lit", &["lit"])]));

        let mut app = App::new(
            Arc::new(api),
            URL.to_string(),
            InitialView::Reviews(ReviewFilter::All),
            false,
        );
        app.select_filter(ReviewFilter::Slang);
        pump_until(&mut app, reviews_ready).await;

        let Screen::Reviews(state) = &app.current_screen else {
            panic!("expected reviews screen");
        };
        assert_eq!(state.filter(), ReviewFilter::Slang);
        assert_eq!(state.reviews().len(), 1);
        assert_eq!(state.reviews()[0].slang_words, vec!["lit"]);
    }

    #[tokio::test]
    async fn test_failed_dashboard_load_records_error_activity() {
        let mut api = MockReviewsApi::new();
        api.expect_sentiment_distribution().returning(|| {
            Err(FetchError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        api.expect_extracted_features()
            .returning(|| Ok(Default::default()));
        api.expect_rating_discrepancies().returning(|| Ok(Vec::new()));
        api.expect_rating_summary().returning(|| {
            Err(FetchError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let mut app = App::new(Arc::new(api), URL.to_string(), InitialView::Dashboard, false);
        pump_until(&mut app, |app| {
            matches!(&app.current_screen, Screen::Dashboard(state) if !matches!(state.status(), ViewStatus::Loading))
        })
        .await;

        let Screen::Dashboard(state) = &app.current_screen else {
            panic!("expected dashboard screen");
        };
        assert!(state.data().is_none());
        match state.status() {
            ViewStatus::Error(msg) => assert!(msg.contains(URL)),
            other => panic!("expected error, got {:?}", other),
        }
        let last = app.activity_logs.back().unwrap();
        assert_eq!(last.event_type, EventType::Error);
        assert_eq!(last.view, ViewKind::Dashboard);
    }

    #[tokio::test]
    async fn test_tab_switches_view_and_drops_stale_result() {
        let mut api = MockReviewsApi::new();
        api.expect_sentiment_distribution()
            .returning(|| Ok(Default::default()));
        api.expect_extracted_features()
            .returning(|| Ok(Default::default()));
        api.expect_rating_discrepancies().returning(|| Ok(Vec::new()));
        api.expect_rating_summary().returning(|| {
            Err(FetchError::Http {
                status: 404,
                message: String::new(),
            })
        });
        api.expect_reviews()
            .returning(|_| Ok(vec![review("fine", &[])]));

        let mut app = App::new(Arc::new(api), URL.to_string(), InitialView::Dashboard, false);
        assert_eq!(app.handle_key(press(KeyCode::Tab)), KeyOutcome::Continue);
        assert_eq!(app.current_screen.kind(), ViewKind::Reviews);

        pump_until(&mut app, reviews_ready).await;
        assert_eq!(app.current_screen.kind(), ViewKind::Reviews);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut api = MockReviewsApi::new();
        api.expect_reviews().returning(|_| Ok(Vec::new()));
        let mut app = App::new(
            Arc::new(api),
            URL.to_string(),
            InitialView::Reviews(ReviewFilter::All),
            false,
        );
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), KeyOutcome::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Esc)), KeyOutcome::Quit);
    }

    #[tokio::test]
    async fn test_render_shows_header_and_footer() {
        let mut api = MockReviewsApi::new();
        api.expect_reviews().returning(|_| Ok(Vec::new()));
        let app = App::new(
            Arc::new(api),
            URL.to_string(),
            InitialView::Reviews(ReviewFilter::Neutral),
            true,
        );

        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("REVIEWS ANALYSIS"));
        assert!(screen.contains(URL));
        assert!(screen.contains("Neutral Reviews"));
        assert!(screen.contains("[Q] Quit"));
    }

    #[tokio::test]
    async fn test_card_scroll_uses_drawn_grid_width() {
        let mut api = MockReviewsApi::new();
        api.expect_reviews().returning(|_| {
            Ok((0..6).map(|i| review(&format!("card {}", i), &[])).collect())
        });
        let mut app = App::new(
            Arc::new(api),
            URL.to_string(),
            InitialView::Reviews(ReviewFilter::All),
            false,
        );
        pump_until(&mut app, reviews_ready).await;

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        app.viewport = terminal.draw(|f| render(f, &app)).unwrap().area;

        for _ in 0..10 {
            app.handle_key(press(KeyCode::Down));
        }
        let Screen::Reviews(state) = &app.current_screen else {
            panic!("expected reviews screen");
        };
        // Three columns at this width, so six cards make two rows
        assert_eq!(state.scroll_row(), 1);

        app.handle_key(press(KeyCode::Up));
        let Screen::Reviews(state) = &app.current_screen else {
            panic!("expected reviews screen");
        };
        assert_eq!(state.scroll_row(), 0);
    }
}
