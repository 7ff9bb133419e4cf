//! Background fetch tasks
//!
//! Each view activation spawns one task. The task races its fetch against the
//! ticket's cancellation token and only reports back if it was not superseded.

use super::core::EventSender;
use crate::api::ReviewsApi;
use crate::events::{Event, FetchCompletion, FetchOutcome, ViewKind};
use crate::fetch::{fetch_dashboard, fetch_reviews};
use crate::filter::ReviewFilter;
use crate::ui::view_state::FetchTicket;
use log::debug;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub fn spawn_dashboard_fetch(
    api: Arc<dyn ReviewsApi>,
    ticket: FetchTicket,
    events: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        events
            .send_activity(Event::refresh(
                ViewKind::Dashboard,
                "Fetching dashboard data...".to_string(),
            ))
            .await;

        tokio::select! {
            biased;

            _ = ticket.token.cancelled() => {
                debug!("Dashboard fetch {} superseded", ticket.generation);
            }
            result = fetch_dashboard(api.as_ref()) => {
                events
                    .send_completion(FetchCompletion {
                        generation: ticket.generation,
                        outcome: FetchOutcome::Dashboard(result),
                    })
                    .await;
            }
        }
    })
}

pub fn spawn_reviews_fetch(
    api: Arc<dyn ReviewsApi>,
    filter: ReviewFilter,
    ticket: FetchTicket,
    events: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        events
            .send_activity(Event::refresh(
                ViewKind::Reviews,
                format!("Fetching {}", filter.source().request().path_and_query()),
            ))
            .await;

        tokio::select! {
            biased;

            _ = ticket.token.cancelled() => {
                debug!("Reviews fetch {} ({}) superseded", ticket.generation, filter);
            }
            result = fetch_reviews(api.as_ref(), filter) => {
                events
                    .send_completion(FetchCompletion {
                        generation: ticket.generation,
                        outcome: FetchOutcome::Reviews(result),
                    })
                    .await;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockReviewsApi;
    use crate::events::{AppEvent, EventType};
    use crate::models::Review;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_reviews_fetch_reports_completion() {
        let mut api = MockReviewsApi::new();
        api.expect_reviews().times(1).returning(|_| {
            Ok(vec![Review {
                rating: 4,
                review: "solid".to_string(),
                sentiment: None,
                slang_words: Vec::new(),
            }])
        });
        let (tx, mut rx) = mpsc::channel(8);
        let ticket = FetchTicket {
            generation: 9,
            token: CancellationToken::new(),
        };

        spawn_reviews_fetch(Arc::new(api), ReviewFilter::All, ticket, EventSender::new(tx))
            .await
            .unwrap();

        match rx.recv().await {
            Some(AppEvent::Activity(event)) => {
                assert_eq!(event.event_type, EventType::Refresh);
                assert_eq!(event.view, ViewKind::Reviews);
                assert_eq!(event.msg, "Fetching /reviews");
            }
            other => panic!("expected refresh activity, got {:?}", other),
        }
        match rx.recv().await {
            Some(AppEvent::Fetched(completion)) => {
                assert_eq!(completion.generation, 9);
                assert!(matches!(completion.outcome, FetchOutcome::Reviews(Ok(ref r)) if r.len() == 1));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[tokio::test]
    /// A ticket cancelled before the task runs never reports a completion.
    async fn test_cancelled_fetch_reports_nothing() {
        let mut api = MockReviewsApi::new();
        api.expect_sentiment_distribution().times(0..=1).returning(|| Ok(Default::default()));
        api.expect_extracted_features().times(0..=1).returning(|| Ok(Default::default()));
        api.expect_rating_discrepancies().times(0..=1).returning(|| Ok(Vec::new()));
        api.expect_rating_summary().times(0..=1).returning(|| {
            Err(crate::api::error::FetchError::Http {
                status: 500,
                message: String::new(),
            })
        });
        let (tx, mut rx) = mpsc::channel(8);
        let token = CancellationToken::new();
        token.cancel();
        let ticket = FetchTicket {
            generation: 1,
            token,
        };

        spawn_dashboard_fetch(Arc::new(api), ticket, EventSender::new(tx))
            .await
            .unwrap();

        assert!(matches!(rx.recv().await, Some(AppEvent::Activity(_))));
        assert!(rx.recv().await.is_none());
    }
}
