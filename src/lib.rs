//! Permerror - errors that know whether retrying can help
//!
//! Errors are marked as temporary (worth retrying) or permanent, and
//! callers such as a dialer can ask [`classify`] without knowing the
//! concrete error type.
//!
//! - [`new_error`] builds a leaf error that is always permanent.
//! - [`make_permanent`] forces any error to be permanent.
//! - [`wrap`] and [`with_message`] wrap an error and stay permanent unless
//!   the root cause says it is temporary.
//!
//! Errors from other crates go through [`Unclassified`] or the `_std`
//! constructors ([`wrap_std`], [`with_message_std`], [`make_permanent_std`]),
//! and [`classify_std`] accepts any `std::error::Error`.
//!
//! A root cause that does not classify itself makes the conditional
//! wrappers **permanent**, never temporary.
//!
//! ```
//! use permerror::{classify, new_error, wrap, with_message, Classification, Classify};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("connection reset")]
//! struct Reset;
//!
//! impl Classify for Reset {
//!     fn temporary(&self) -> Option<bool> {
//!         Some(true)
//!     }
//! }
//!
//! let err = with_message(Reset, "dial");
//! assert_eq!(err.to_string(), "dial: connection reset");
//! assert_eq!(classify(&err), Classification::Temporary);
//!
//! assert_eq!(classify(&wrap(new_error("bad certificate"))), Classification::Permanent);
//! ```

pub mod chain;
pub mod classification;
pub mod ext;
pub mod foreign;
pub mod wrap;

// Re-export main types for convenient access
pub use chain::{chain, root_cause, Chain};
pub use classification::{classify, classify_root, AsStdError, Classification, Classify};
pub use ext::{ResultExt, StdResultExt};
pub use foreign::{
    as_classify, classify_std, make_permanent_std, with_message_std, wrap_std, BoxError,
    Unclassified,
};
pub use wrap::{
    make_permanent, new_error, with_message, wrap, MadePermanent, PermanentError, WithMessage,
    Wrapped,
};
