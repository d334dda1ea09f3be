//! Transient toast notifications, plus the short history the header bell
//! lists after the toasts themselves are gone.

use crate::backend::session::{Notice, Severity};
use chrono::{DateTime, Local};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::collections::VecDeque;

/// Notices kept for the bell.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "toast",
            Self::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: DateTime<Local>,
}

impl Toast {
    /// How long ago the toast was raised, relative to `now`.
    pub fn age_label(&self, now: DateTime<Local>) -> String {
        let secs = (now - self.created_at).num_seconds().max(0);
        match secs {
            0..60 => "just now".to_string(),
            60..3600 => format!("{} min ago", secs / 60),
            3600..86400 => format!("{} h ago", secs / 3600),
            _ => self.created_at.format("%b %e, %H:%M").to_string(),
        }
    }
}

/// Text for the bell's count badge, `None` when nothing is unread.
pub fn unread_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

impl From<Severity> for ToastVariant {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Default,
            Severity::Warning => Self::Destructive,
        }
    }
}

/// Visible toasts, newest-first history and the id counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    history: VecDeque<Toast>,
    unread: usize,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.push_at(notice, Local::now())
    }

    fn push_at(&mut self, notice: Notice, created_at: DateTime<Local>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let toast = Toast {
            id,
            title: notice.title,
            description: notice.description,
            variant: notice.severity.into(),
            created_at,
        };
        self.history.push_front(toast.clone());
        self.history.truncate(HISTORY_LIMIT);
        self.unread = (self.unread + 1).min(HISTORY_LIMIT);
        self.items.push(toast);
        id
    }

    /// Returns whether a toast was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Newest first. Dismissing a toast does not remove it from here.
    pub fn recent(&self) -> impl Iterator<Item = &Toast> {
        self.history.iter()
    }

    pub fn unread(&self) -> usize {
        self.unread
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }
}

/// Handle to the app-wide toast queue, provided as context.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    timeout_ms: u64,
}

impl Toasts {
    pub fn new(queue: Signal<ToastQueue>, timeout_ms: u64) -> Self {
        Self { queue, timeout_ms }
    }

    /// Shows a toast and schedules its removal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        log::debug!("Toast: {} - {}", notice.title, notice.description);
        let id = self.queue.write().push(notice);
        let mut queue = self.queue;
        let timeout = self.timeout_ms;
        if timeout > 0 {
            // Outlives the component that raised it, e.g. across a redirect.
            spawn_forever(async move {
                tokio::time::sleep(std::time::Duration::from_millis(timeout)).await;
                queue.write().dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    pub fn items(&self) -> Vec<Toast> {
        self.queue.read().items().to_vec()
    }

    pub fn recent(&self) -> Vec<Toast> {
        self.queue.read().recent().cloned().collect()
    }

    pub fn unread(&self) -> usize {
        self.queue.read().unread()
    }

    pub fn mark_read(&mut self) {
        if self.queue.peek().unread() > 0 {
            self.queue.write().mark_read();
        }
    }
}
