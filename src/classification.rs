//! Temporary/permanent classification of errors.
//!
//! Any error can take part in classification by implementing [`Classify`].
//! The `temporary` capability is optional: an empty impl declares an error
//! whose permanence is unknown, which [`classify`] reports as
//! [`Classification::Unknown`].

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// Gives trait objects access to themselves as a plain `std::error::Error`.
///
/// Implemented for every sized error type, so it never needs to be written by hand.
pub trait AsStdError {
    /// Returns `self` as a `std::error::Error` trait object.
    fn as_std_error(&self) -> &(dyn Error + Send + Sync + 'static);
}

impl<T> AsStdError for T
where
    T: Error + Send + Sync + 'static,
{
    fn as_std_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }
}

/// An error that can be asked whether it is temporary.
///
/// Both methods are optional capabilities. The defaults report that the
/// error cannot assert its permanence and wraps nothing.
///
/// # Examples
///
/// ```
/// use permerror::{classify, Classification, Classify};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("connection refused")]
/// struct Refused;
///
/// impl Classify for Refused {
///     fn temporary(&self) -> Option<bool> {
///         Some(true)
///     }
/// }
///
/// assert_eq!(classify(&Refused), Classification::Temporary);
/// ```
pub trait Classify: Error + AsStdError + Send + Sync + 'static {
    /// Whether this error is temporary.
    ///
    /// `None` means the capability is absent, not that the error is permanent.
    fn temporary(&self) -> Option<bool> {
        None
    }

    /// The error this one wraps, if any.
    fn inner(&self) -> Option<&dyn Classify> {
        None
    }
}

impl dyn Classify {
    /// Returns true if the concrete type behind this trait object is `T`.
    pub fn is<T: Classify>(&self) -> bool {
        self.as_std_error().is::<T>()
    }

    /// Downcasts to the concrete error type, if it is `T`.
    pub fn downcast_ref<T: Classify>(&self) -> Option<&T> {
        self.as_std_error().downcast_ref::<T>()
    }
}

impl Classify for std::io::Error {}

/// The outcome of classifying an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// The error does not say whether it is temporary.
    #[default]
    Unknown,
    /// Retrying may succeed.
    Temporary,
    /// Retrying will not help.
    Permanent,
}

impl Classification {
    /// Maps the optional `temporary` capability onto a classification.
    pub fn from_capability(temporary: Option<bool>) -> Self {
        match temporary {
            None => Classification::Unknown,
            Some(true) => Classification::Temporary,
            Some(false) => Classification::Permanent,
        }
    }

    /// Returns true for [`Classification::Temporary`].
    pub fn is_temporary(self) -> bool {
        self == Classification::Temporary
    }

    /// Returns true for [`Classification::Permanent`].
    pub fn is_permanent(self) -> bool {
        self == Classification::Permanent
    }

    /// Returns true for [`Classification::Unknown`].
    pub fn is_unknown(self) -> bool {
        self == Classification::Unknown
    }

    /// Collapses `Unknown` into `Permanent`.
    ///
    /// An error that cannot say it is temporary is treated as permanent.
    /// Only an explicit `Temporary` survives.
    pub fn or_permanent(self) -> Self {
        match self {
            Classification::Temporary => Classification::Temporary,
            Classification::Permanent | Classification::Unknown => Classification::Permanent,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Unknown => "unknown",
            Classification::Temporary => "temporary",
            Classification::Permanent => "permanent",
        };
        f.write_str(name)
    }
}

/// Classifies exactly the error given, without following its causes.
pub fn classify(err: &dyn Classify) -> Classification {
    Classification::from_capability(err.temporary())
}

/// Classifies the root cause of `err`.
///
/// Walks `inner()` links until none is left and classifies that error.
/// The result may still be `Unknown`; callers decide how to treat it.
pub fn classify_root(err: &dyn Classify) -> Classification {
    resolve_root(err).1
}

/// Finds the root cause of `err` and classifies it, walking the chain once.
pub(crate) fn resolve_root(err: &dyn Classify) -> (&dyn Classify, Classification) {
    let mut depth = 0usize;
    let mut root = err;
    for link in Chain::new(err).skip(1) {
        root = link;
        depth += 1;
    }

    let classification = classify(root);
    tracing::trace!(
        depth,
        classification = %classification,
        root = %root,
        "classified root cause"
    );
    (root, classification)
}
