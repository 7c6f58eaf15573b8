//! Classification for errors that do not implement [`Classify`].
//!
//! Foreign errors (`serde_json::Error`, `std::fmt::Error`, boxed errors and
//! so on) cannot implement [`Classify`] outside their own crate.
//! [`Unclassified`] adopts any of them as an error without the `temporary`
//! capability, so they classify as `Unknown` and every conditional wrapper
//! around them is permanent.
//!
//! ```
//! use std::error::Error;
//!
//! use permerror::{classify, classify_std, wrap_std, Classification};
//!
//! let cause: Box<dyn Error + Send + Sync> = "unknown".into();
//! let err = wrap_std(cause);
//! assert_eq!(err.to_string(), "unknown");
//! assert_eq!(classify(&err), Classification::Permanent);
//!
//! assert_eq!(classify_std(&std::fmt::Error), Classification::Unknown);
//! ```

use std::error::Error;
use std::fmt;

use crate::classification::{classify, Classification, Classify};
use crate::wrap::{MadePermanent, PermanentError, WithMessage, Wrapped};

/// Boxed form accepted by the adapters. Strings convert into it too.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Any error, adopted without the `temporary` capability.
///
/// Its message and `source()` are those of the adopted error. Errors that
/// already implement [`Classify`] should be handed to the constructors
/// directly: adopting them here hides their classification.
#[derive(Debug)]
pub struct Unclassified(BoxError);

impl Unclassified {
    /// Adopts `err`.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self(err.into())
    }

    /// Returns the adopted error.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Returns the adopted error, consuming the adapter.
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl From<BoxError> for Unclassified {
    fn from(err: BoxError) -> Self {
        Self(err)
    }
}

impl fmt::Display for Unclassified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Unclassified {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl Classify for Unclassified {}

/// Views a plain `std::error::Error` as [`Classify`] when its concrete type
/// is one this crate knows.
///
/// Recognized: the four error shapes of this crate, [`Unclassified`] and
/// `std::io::Error`.
pub fn as_classify<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn Classify> {
    if let Some(e) = err.downcast_ref::<PermanentError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<MadePermanent>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<Wrapped>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<WithMessage>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<Unclassified>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<std::io::Error>() {
        return Some(e);
    }
    None
}

/// Classifies any `std::error::Error`, without following its causes.
///
/// Errors of a type this crate does not recognize are `Unknown`.
pub fn classify_std(err: &(dyn Error + 'static)) -> Classification {
    match as_classify(err) {
        Some(classifiable) => classify(classifiable),
        None => Classification::Unknown,
    }
}

/// Forces any error to be permanent.
pub fn make_permanent_std<E>(cause: E) -> MadePermanent
where
    E: Into<BoxError>,
{
    MadePermanent::new(Unclassified::new(cause))
}

/// Wraps any error. Its permanence is unknown, so the result is permanent.
pub fn wrap_std<E>(cause: E) -> Wrapped
where
    E: Into<BoxError>,
{
    Wrapped::new(Unclassified::new(cause))
}

/// Wraps any error behind a message prefix. The result is permanent.
pub fn with_message_std<E>(cause: E, msg: impl Into<String>) -> WithMessage
where
    E: Into<BoxError>,
{
    WithMessage::new(Unclassified::new(cause), msg)
}
