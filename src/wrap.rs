//! Error values that carry permanence.
//!
//! Four shapes are provided:
//!
//! - [`PermanentError`]: a leaf message that is always permanent.
//! - [`MadePermanent`]: wraps a cause and is always permanent, whatever the cause says.
//! - [`Wrapped`]: wraps a cause and is temporary only if the root cause says so.
//! - [`WithMessage`]: like [`Wrapped`], with a message prefix.
//!
//! # Unknown means permanent
//!
//! The conditional wrappers classify the *root* of their cause. A root
//! cause that cannot say whether it is temporary makes the wrapper
//! permanent. Only an explicit "temporary" from the root cause makes a
//! wrapper temporary. Inverting this would turn every opaque failure into
//! an endless retry.
//!
//! Every value is immutable and owns its cause. A missing cause cannot be
//! expressed: constructors take the cause by value.

use std::error::Error;
use std::fmt;

use crate::classification::{resolve_root, Classify};

/// A leaf error that is always permanent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{msg}")]
pub struct PermanentError {
    msg: String,
}

impl PermanentError {
    /// Creates a permanent error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl Classify for PermanentError {
    fn temporary(&self) -> Option<bool> {
        Some(false)
    }
}

/// Wraps a cause and forces it to be permanent.
///
/// Displays as the cause.
#[derive(Debug)]
pub struct MadePermanent {
    cause: Box<dyn Classify>,
}

impl MadePermanent {
    /// Wraps `cause`.
    pub fn new<E: Classify>(cause: E) -> Self {
        Self::from_boxed(Box::new(cause))
    }

    /// Wraps an already boxed cause.
    pub fn from_boxed(cause: Box<dyn Classify>) -> Self {
        Self { cause }
    }

    /// Unwraps one level, returning the cause.
    pub fn into_cause(self) -> Box<dyn Classify> {
        self.cause
    }
}

impl fmt::Display for MadePermanent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl Error for MadePermanent {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_std_error())
    }
}

impl Classify for MadePermanent {
    fn temporary(&self) -> Option<bool> {
        Some(false)
    }

    fn inner(&self) -> Option<&dyn Classify> {
        Some(self.cause.as_ref())
    }
}

/// Wraps a cause and is permanent unless the root cause is temporary.
///
/// Displays as the cause.
#[derive(Debug)]
pub struct Wrapped {
    cause: Box<dyn Classify>,
}

impl Wrapped {
    /// Wraps `cause`.
    pub fn new<E: Classify>(cause: E) -> Self {
        Self::from_boxed(Box::new(cause))
    }

    /// Wraps an already boxed cause.
    pub fn from_boxed(cause: Box<dyn Classify>) -> Self {
        Self { cause }
    }

    /// Unwraps one level, returning the cause.
    pub fn into_cause(self) -> Box<dyn Classify> {
        self.cause
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_std_error())
    }
}

impl Classify for Wrapped {
    fn temporary(&self) -> Option<bool> {
        Some(root_is_temporary(self.cause.as_ref()))
    }

    fn inner(&self) -> Option<&dyn Classify> {
        Some(self.cause.as_ref())
    }
}

/// Wraps a cause behind a message prefix.
///
/// Displays as `"<msg>: <cause>"` and classifies like [`Wrapped`].
#[derive(Debug)]
pub struct WithMessage {
    msg: String,
    cause: Box<dyn Classify>,
}

impl WithMessage {
    /// Wraps `cause` with the prefix `msg`.
    pub fn new<E: Classify>(cause: E, msg: impl Into<String>) -> Self {
        Self::from_boxed(Box::new(cause), msg)
    }

    /// Wraps an already boxed cause with the prefix `msg`.
    pub fn from_boxed(cause: Box<dyn Classify>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            cause,
        }
    }

    /// Returns the prefix, without the cause's message.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Unwraps one level, returning the cause.
    pub fn into_cause(self) -> Box<dyn Classify> {
        self.cause
    }
}

impl fmt::Display for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.msg, self.cause)
    }
}

impl Error for WithMessage {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_std_error())
    }
}

impl Classify for WithMessage {
    fn temporary(&self) -> Option<bool> {
        Some(root_is_temporary(self.cause.as_ref()))
    }

    fn inner(&self) -> Option<&dyn Classify> {
        Some(self.cause.as_ref())
    }
}

// Unknown collapses to permanent here.
fn root_is_temporary(cause: &dyn Classify) -> bool {
    let (root, classification) = resolve_root(cause);
    if classification.is_unknown() {
        tracing::trace!(
            root = %root,
            "root cause has no classification, treating as permanent"
        );
    }
    classification.or_permanent().is_temporary()
}

/// Returns a leaf error with `msg` that is always permanent.
pub fn new_error(msg: impl Into<String>) -> PermanentError {
    PermanentError::new(msg)
}

/// Forces `cause` to be permanent.
pub fn make_permanent<E: Classify>(cause: E) -> MadePermanent {
    MadePermanent::new(cause)
}

/// Wraps `cause`, permanent unless its root cause is temporary.
pub fn wrap<E: Classify>(cause: E) -> Wrapped {
    Wrapped::new(cause)
}

/// Wraps `cause` with a message prefix, permanent unless its root cause is temporary.
pub fn with_message<E: Classify>(cause: E, msg: impl Into<String>) -> WithMessage {
    WithMessage::new(cause, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{classify, Classification};

    #[derive(Debug, thiserror::Error)]
    #[error("unknown")]
    struct Unclassified;

    impl Classify for Unclassified {}

    #[derive(Debug, thiserror::Error)]
    #[error("temp")]
    struct Temp;

    impl Classify for Temp {
        fn temporary(&self) -> Option<bool> {
            Some(true)
        }
    }

    #[test]
    fn test_new_error() {
        let err = new_error("yup");
        assert_eq!(err.to_string(), "yup");
        assert_eq!(err.message(), "yup");
        assert_eq!(err.temporary(), Some(false));
        assert!(err.inner().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_make_permanent_overrides_temporary_cause() {
        let err = make_permanent(Temp);
        assert_eq!(err.to_string(), "temp");
        assert_eq!(classify(&err), Classification::Permanent);
        assert!(err.inner().is_some_and(|c| c.is::<Temp>()));
    }

    #[test]
    fn test_wrap_follows_cause() {
        assert_eq!(classify(&wrap(Temp)), Classification::Temporary);
        assert_eq!(classify(&wrap(Unclassified)), Classification::Permanent);
        assert_eq!(classify(&wrap(new_error("p"))), Classification::Permanent);
    }

    #[test]
    fn test_with_message_prefixes() {
        let err = with_message(Temp, "message");
        assert_eq!(err.to_string(), "message: temp");
        assert_eq!(err.message(), "message");
        assert_eq!(classify(&err), Classification::Temporary);
    }

    #[test]
    fn test_wrappers_report_std_source() {
        let err = wrap(Temp);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("temp"));
        assert!(err.source().is_some_and(|s| s.is::<Temp>()));
    }

    #[test]
    fn test_into_cause() {
        let cause = with_message(Unclassified, "m").into_cause();
        assert!(cause.is::<Unclassified>());
        let cause = make_permanent(Temp).into_cause();
        assert!(cause.is::<Temp>());
        let cause = wrap(Temp).into_cause();
        assert!(cause.is::<Temp>());
    }

    #[test]
    fn test_from_boxed() {
        let boxed: Box<dyn Classify> = Box::new(Temp);
        let err = Wrapped::from_boxed(boxed);
        assert_eq!(classify(&err), Classification::Temporary);
    }
}
