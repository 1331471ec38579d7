//! Toast notifications
//!
//! Every repository or session error ends up here as a transient,
//! dismissible notice; nothing is fatal and nothing is retried.

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One dismissible notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of active notices, newest last
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&mut self, message: impl Into<String>) {
        self.items.push(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.items.push(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    /// Removes one notice by position
    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent notice, if any
    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }
}
