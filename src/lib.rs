#![forbid(unsafe_code)]
//! mailsift — e-mail address validation: format, disposable domains, MX records.
//!
//! Checks run cheapest first and stop at the first failure:
//!
//! 1. [`is_email_format_valid`]: syntax (no I/O);
//! 2. [`Blacklist::is_blacklisted`]: domain or parent domain on the disposable list;
//! 3. [`resolve_mx`]: one MX lookup raced against a timeout.
//!
//! Batch validation ([`EmailChecker::check_emails`]) resolves each distinct
//! domain once and maps the outcome back onto every address.
//!
//! Outcomes are data: every call yields a [`ValidationResult`], DNS failures
//! included.

pub mod blacklist;
pub mod checker;
pub mod format;
pub mod mx;
pub mod options;
pub mod result;

pub use blacklist::{Blacklist, BlacklistError, domain_suffixes, is_blacklisted};
pub use checker::{EmailChecker, check_email, check_emails, is_mx_record_valid};
pub use format::is_email_format_valid;
pub use mx::{
    DEFAULT_TIMEOUT, LookupFailure, LookupFailureKind, LookupMx, MxError, MxRecord, resolve_mx,
    system_resolver,
};
pub use options::{DEFAULT_CONCURRENCY, ValidationOptions};
pub use result::{InvalidReason, ValidationResult, Verdict};
