//! Event System
//!
//! Messages sent from fetch workers to the UI loop, and the activity log entries
//! derived from them.

use crate::api::error::FetchError;
use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{DashboardData, Review};
use chrono::Local;
use std::fmt::Display;

/// The view an event belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum ViewKind {
    Dashboard,
    Reviews,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// One line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub view: ViewKind,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(view: ViewKind, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            view,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(view: ViewKind, msg: String) -> Self {
        Self::new(view, msg, EventType::Refresh, LogLevel::Debug)
    }

    pub fn success(view: ViewKind, msg: String) -> Self {
        Self::new(view, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(view: ViewKind, msg: String, log_level: LogLevel) -> Self {
        Self::new(view, msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show outcomes; request chatter only when RUST_LOG asks for it
        if self.event_type != EventType::Refresh || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.view, self.msg
        )
    }
}

/// Payload produced by a finished fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    Dashboard(Result<DashboardData, FetchError>),
    Reviews(Result<Vec<Review>, FetchError>),
}

/// A finished fetch, tagged with the generation of the request that produced it.
#[derive(Debug)]
pub struct FetchCompletion {
    pub generation: u64,
    pub outcome: FetchOutcome,
}

/// Everything the UI loop receives from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    Activity(Event),
    Fetched(FetchCompletion),
}
