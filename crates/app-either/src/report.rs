//! Explicit reporting of application errors through `tracing`.
//!
//! Nothing in this crate logs on its own. These helpers emit an event only
//! when the caller asks for one.

use tracing::error;

use crate::{AppError, Either};

impl AppError {
    /// Emit one `error`-level event describing this error.
    pub fn report(&self) {
        error!(
            name = self.name(),
            code = %self.code(),
            detail = self.detail(),
            "{}",
            self.message()
        );
    }
}

impl<R> Either<AppError, R> {
    /// Report a `Left` payload and hand the value back unchanged.
    #[must_use]
    pub fn report_left(self) -> Self {
        if let Self::Left(err) = &self {
            err.report();
        }
        self
    }
}
