//! A value that is either a failure (`Left`) or a success (`Right`).
//!
//! [`Either`] lets a function return its failure as data instead of
//! propagating it with `?`. Callers decide what to do with the failure by
//! matching, by eliminating both sides with [`Either::fold`], or by carrying
//! on with [`Either::map`] and [`Either::map_left`].
//!
//! A chain of `map` calls short-circuits once a stage yields a `Left`: the
//! remaining closures are skipped and the failure payload travels through
//! untouched.
//!
//! # Examples
//!
//! ```
//! use app_either::{Either, left, right};
//!
//! fn parse_port(raw: &str) -> Either<String, u16> {
//!     match raw.parse() {
//!         Ok(port) => right(port),
//!         Err(_) => left(format!("'{raw}' is not a port")),
//!     }
//! }
//!
//! let doubled = parse_port("4000").map(|port| u32::from(port) * 2);
//! assert_eq!(doubled, right(8000));
//!
//! let message = parse_port("http").map(|port| u32::from(port) * 2).fold(
//!     |err| err,
//!     |port| port.to_string(),
//! );
//! assert_eq!(message, "'http' is not a port");
//! ```

/// One of two alternatives: a failure payload `L` or a success payload `R`.
///
/// ## Invariants
/// - An instance holds exactly one variant for its whole lifetime. No method
///   takes `&mut self`; every transformation consumes the receiver and builds
///   a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

/// Wraps `value` as a failure.
///
/// The success type `R` is left to inference, so a `left(..)` fits wherever
/// an `Either<L, R>` is expected, whatever `R` the surrounding code uses.
///
/// # Examples
///
/// ```
/// use app_either::{Either, left};
///
/// let failed: Either<&str, u32> = left("missing");
/// assert!(failed.is_left());
/// ```
#[must_use]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Wraps `value` as a success.
///
/// Takes its type parameters in the same order as [`left`], with the
/// failure type `L` left to inference.
///
/// # Examples
///
/// ```
/// use app_either::{Either, right};
///
/// let done: Either<String, u32> = right(7);
/// assert!(done.is_right());
/// ```
#[must_use]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// Returns `true` when this is the failure variant.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` when this is the success variant.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into the failure payload, discarding a success.
    #[must_use]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into the success payload, discarding a failure.
    #[must_use]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the payload without consuming the receiver.
    #[must_use]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the success payload.
    ///
    /// A `Left` passes through unchanged and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_either::{Either, left, right};
    ///
    /// let ok: Either<&str, i32> = right(2);
    /// assert_eq!(ok.map(|x| x + 1).map(|x| x * 3), right(9));
    ///
    /// let failed: Either<&str, i32> = left("err");
    /// assert_eq!(failed.map(|x| x + 1), left("err"));
    /// ```
    #[must_use]
    pub fn map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Transforms the failure payload.
    ///
    /// A `Right` passes through unchanged and `f` is not called.
    #[must_use]
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Feeds the success payload into a stage that may itself fail.
    ///
    /// A `Left` passes through unchanged and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_either::{Either, left, right};
    ///
    /// fn halve(value: u32) -> Either<String, u32> {
    ///     if value % 2 == 0 {
    ///         right(value / 2)
    ///     } else {
    ///         left(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(right(12).and_then(halve).and_then(halve), right(3));
    /// assert_eq!(
    ///     right(12).and_then(halve).and_then(halve).and_then(halve),
    ///     left("3 is odd".to_owned()),
    /// );
    /// ```
    #[must_use]
    pub fn and_then<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => f(value),
        }
    }

    /// Swaps the variants, turning a failure into a success and vice versa.
    #[must_use]
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Eliminates the `Either` into a single type.
    ///
    /// Exactly one of the two closures runs: `on_left` for a failure,
    /// `on_right` for a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_either::{Either, right};
    ///
    /// let value: Either<String, u8> = right(4);
    /// let text = value.fold(|err| format!("failed: {err}"), |n| format!("got {n}"));
    /// assert_eq!(text, "got 4");
    /// ```
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the success payload, recovering a failure through `f`.
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, |value| value)
    }

    /// Converts into a [`Result`] so the failure can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the failure payload when this is a `Left`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}
