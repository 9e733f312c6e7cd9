//! Application error value with a stable machine-readable code.
//!
//! [`AppError`] is a plain immutable record. Call sites raise it the usual
//! Rust way, by returning `Err(AppError)` and propagating with `?`, or carry
//! it as the failure side of an [`Either`](crate::Either).

use thiserror::Error;

/// Construction options for [`AppError`].
///
/// `code` is expected to be a short, stable, non-localised identifier such as
/// `E_BAD_INPUT`. Its format is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppErrorOptions {
    /// Stable identifier for programmatic matching.
    pub code: String,
    /// Optional supplementary text for diagnostics.
    pub detail: Option<String>,
}

impl AppErrorOptions {
    /// Options carrying only a code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: None,
        }
    }

    /// Attach supplementary detail text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Named application error: a message, a stable code and optional detail.
///
/// ## Invariants
/// - Fields never change after construction; builders consume `self`.
/// - An absent detail is `None`, never an empty string.
///
/// # Examples
/// ```
/// use app_either::{AppError, AppErrorOptions};
///
/// let err = AppError::new("bad input", AppErrorOptions::new("E_BAD_INPUT"));
/// assert_eq!(err.message(), "bad input");
/// assert_eq!(err.code(), "E_BAD_INPUT");
/// assert!(err.detail().is_none());
/// assert_eq!(err.to_string(), "bad input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    message: String,
    code: String,
    detail: Option<String>,
}

impl AppError {
    /// Type identity reported by [`AppError::name`].
    pub const NAME: &'static str = "AppError";

    /// Build an error from a message and its options.
    #[must_use]
    pub fn new(message: impl Into<String>, options: AppErrorOptions) -> Self {
        let AppErrorOptions { code, detail } = options;
        Self {
            message: message.into(),
            code,
            detail,
        }
    }

    /// Shorthand for an error without detail.
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(message, AppErrorOptions::new(code))
    }

    /// Attach supplementary detail text.
    ///
    /// # Examples
    /// ```
    /// use app_either::AppError;
    ///
    /// let err = AppError::with_code("bad input", "E_BAD_INPUT").with_detail("field x");
    /// assert_eq!(err.detail(), Some("field x"));
    /// ```
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Human-readable message, also used as the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Supplementary detail, if any was supplied.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Name distinguishing this error from generic errors in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }
}
