//! Transient app-wide notices.
//!
//! Keeps presentation-only feedback (the "account created", "auth failed"
//! banners) out of the domain state so flows can report outcomes without
//! knowing which page renders them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a notice, used only for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single dismissible message shown by the notice banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// UI state shared across pages. Only the most recent notice is kept.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
}
