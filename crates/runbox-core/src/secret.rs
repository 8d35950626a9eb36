//! Secret marker for automatic redaction
//!
//! The `Secret<T>` wrapper ensures the recorded API credential is never
//! accidentally logged or displayed.

use std::fmt;

/// Wrapper for secret data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use runbox_core::Secret;
///
/// let token = Secret::new("ak_0123456789");
/// assert_eq!(format!("{:?}", token), "***REDACTED***");
///
/// // Access the actual value only where authentication happens
/// assert_eq!(token.expose(), &"ak_0123456789");
/// ```
pub struct Secret<T>(T);

impl<T> Secret<T> {
    /// Wrap a secret value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying secret value
    ///
    /// Use sparingly; the only expected caller is the HTTP client attaching
    /// the bearer header.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Secret<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
