//! DNS MX resolution with a bounded wait.
//!
//! [`resolve_mx`] issues a single lookup through a [`LookupMx`] implementation,
//! races it against a timer and turns whatever settles first into a
//! [`ValidationResult`](crate::ValidationResult). Nothing is retried.

mod error;
mod resolver;
mod types;

pub use error::MxError;
pub use resolver::{DEFAULT_TIMEOUT, LookupMx, resolve_mx, system_resolver};
pub use types::{LookupFailure, LookupFailureKind, MxRecord};

pub(crate) use resolver::domain_of;
