//! Core worker utilities

use crate::events::{AppEvent, Event, FetchCompletion};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<AppEvent>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<AppEvent>) -> Self {
        Self { sender }
    }

    pub async fn send_activity(&self, event: Event) {
        let _ = self.sender.send(AppEvent::Activity(event)).await;
    }

    pub async fn send_completion(&self, completion: FetchCompletion) {
        let _ = self.sender.send(AppEvent::Fetched(completion)).await;
    }
}
