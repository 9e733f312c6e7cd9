//! Structured error values for application code.
//!
//! This crate provides two small primitives:
//!
//! - [`AppError`], a named error carrying a human-readable message, a stable
//!   machine-readable code and optional detail text.
//! - [`Either`], a closed sum of a failure (`Left`) and a success (`Right`)
//!   with combinators for transforming either side without early returns.
//!
//! The two are independent. `Either` is generic and knows nothing about
//! `AppError`, although `Either<AppError, T>` is the usual pairing.
//!
//! # Features
//!
//! - `tracing`: adds `AppError::report` and `Either::report_left`, which emit
//!   a `tracing` event on request. Disabled by default.
//!
//! # Example
//!
//! ```
//! use app_either::{AppError, Either, left, right};
//!
//! fn checked_div(a: i32, b: i32) -> Either<AppError, i32> {
//!     if b == 0 {
//!         left(AppError::with_code("division by zero", "E_DIV_ZERO").with_detail(format!("{a} / 0")))
//!     } else {
//!         right(a / b)
//!     }
//! }
//!
//! assert_eq!(checked_div(12, 4).map(|q| q + 1), right(4));
//!
//! let code = checked_div(1, 0).fold(|err| err.code().to_owned(), |q| q.to_string());
//! assert_eq!(code, "E_DIV_ZERO");
//! ```

mod either;
mod error;
#[cfg(feature = "tracing")]
mod report;

pub use either::{Either, left, right};
pub use error::{AppError, AppErrorOptions};
