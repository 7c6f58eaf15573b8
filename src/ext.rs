//! `Result` adapters for attaching permanence at the point of failure.

use crate::classification::Classify;
use crate::foreign::{BoxError, Unclassified};
use crate::wrap::{MadePermanent, WithMessage, Wrapped};

/// Extension methods for `Result` values whose error is [`Classify`].
///
/// `Ok` values pass through untouched.
///
/// ```
/// use permerror::{classify, Classification, ResultExt};
///
/// fn connect() -> Result<(), std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::Other, "no route"))
/// }
///
/// let err = connect().with_message("dialing backend").unwrap_err();
/// assert_eq!(err.to_string(), "dialing backend: no route");
/// assert_eq!(classify(&err), Classification::Permanent);
/// ```
pub trait ResultExt<T> {
    /// Forces the error to be permanent.
    fn permanent(self) -> Result<T, MadePermanent>;

    /// Wraps the error so it is permanent unless its root cause is temporary.
    fn wrap_err(self) -> Result<T, Wrapped>;

    /// Wraps the error behind a message prefix.
    fn with_message<M>(self, msg: M) -> Result<T, WithMessage>
    where
        M: Into<String>;

    /// Like [`ResultExt::with_message`], building the prefix only on error.
    fn with_message_lazy<M, F>(self, f: F) -> Result<T, WithMessage>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Classify,
{
    fn permanent(self) -> Result<T, MadePermanent> {
        self.map_err(MadePermanent::new)
    }

    fn wrap_err(self) -> Result<T, Wrapped> {
        self.map_err(Wrapped::new)
    }

    fn with_message<M>(self, msg: M) -> Result<T, WithMessage>
    where
        M: Into<String>,
    {
        self.map_err(|err| WithMessage::new(err, msg))
    }

    fn with_message_lazy<M, F>(self, f: F) -> Result<T, WithMessage>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|err| WithMessage::new(err, f()))
    }
}

/// Adopts any error type as [`Unclassified`], so the [`ResultExt`] adapters apply.
///
/// ```
/// use permerror::{classify, Classification, ResultExt, StdResultExt};
///
/// let parsed: Result<u16, _> = "70000".parse::<u16>();
/// let err = parsed.unclassified().with_message("port").unwrap_err();
/// assert!(err.to_string().starts_with("port: "));
/// assert_eq!(classify(&err), Classification::Permanent);
/// ```
pub trait StdResultExt<T> {
    /// Maps the error into [`Unclassified`].
    fn unclassified(self) -> Result<T, Unclassified>;
}

impl<T, E> StdResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn unclassified(self) -> Result<T, Unclassified> {
        self.map_err(Unclassified::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{classify, Classification};

    #[derive(Debug, thiserror::Error)]
    #[error("busy")]
    struct Busy;

    impl Classify for Busy {
        fn temporary(&self) -> Option<bool> {
            Some(true)
        }
    }

    fn busy() -> Result<u32, Busy> {
        Err(Busy)
    }

    #[test]
    fn test_ok_passes_through() {
        let ok: Result<u32, Busy> = Ok(7);
        assert_eq!(ok.with_message("unused").ok(), Some(7));
    }

    #[test]
    fn test_permanent() {
        let err = busy().permanent().unwrap_err();
        assert_eq!(classify(&err), Classification::Permanent);
        assert_eq!(err.to_string(), "busy");
    }

    #[test]
    fn test_wrap_err() {
        let err = busy().wrap_err().unwrap_err();
        assert_eq!(classify(&err), Classification::Temporary);
    }

    #[test]
    fn test_with_message() {
        let err = busy().with_message("polling").unwrap_err();
        assert_eq!(err.to_string(), "polling: busy");
        assert_eq!(classify(&err), Classification::Temporary);
    }

    #[test]
    fn test_unclassified_then_wrapped() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result.unclassified().wrap_err().unwrap_err();
        assert_eq!(classify(&err), Classification::Permanent);
        assert_eq!(err.to_string(), std::fmt::Error.to_string());

        let ok: Result<u8, std::fmt::Error> = Ok(2);
        assert_eq!(ok.unclassified().ok(), Some(2));
    }

    #[test]
    fn test_with_message_lazy_is_not_called_on_ok() {
        let ok: Result<u32, Busy> = Ok(1);
        let result = ok.with_message_lazy(|| -> String { panic!("should not build message") });
        assert_eq!(result.ok(), Some(1));

        let err = busy()
            .with_message_lazy(|| format!("attempt {}", 3))
            .unwrap_err();
        assert_eq!(err.to_string(), "attempt 3: busy");
    }
}
