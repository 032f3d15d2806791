//! Entry points that need no setup: bundled blacklist, host DNS settings.
//!
//! Each call builds a fresh resolver from the host configuration. Callers
//! validating addresses in a loop should build one
//! [`EmailChecker::from_system_conf`] and reuse it.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;
use trust_dns_resolver::TokioAsyncResolver;

use super::EmailChecker;
use crate::blacklist::Blacklist;
use crate::mx::{LookupFailure, LookupMx, MxRecord, system_resolver};
use crate::result::ValidationResult;

/// Host resolver, or the reason it could not be built. A broken DNS setup
/// surfaces as a raw-message rejection on the addresses that reach the MX
/// stage instead of failing the call.
enum SystemResolver {
    Ready(TokioAsyncResolver),
    Unavailable(String),
}

impl SystemResolver {
    fn load() -> Self {
        match system_resolver() {
            Ok(resolver) => Self::Ready(resolver),
            Err(err) => {
                warn!(error = %err, "system DNS resolver unavailable");
                Self::Unavailable(err.to_string())
            }
        }
    }
}

#[async_trait]
impl LookupMx for SystemResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupFailure> {
        match self {
            Self::Ready(resolver) => resolver.lookup_mx(domain).await,
            Self::Unavailable(message) => Err(LookupFailure::other(message.clone())),
        }
    }
}

fn system_checker() -> EmailChecker<SystemResolver> {
    EmailChecker::new(SystemResolver::load(), Blacklist::bundled())
}

/// MX check for the domain of `email` (default timeout: 3 s).
pub async fn is_mx_record_valid(email: &str, timeout: Option<Duration>) -> ValidationResult {
    system_checker().is_mx_record_valid(email, timeout).await
}

/// Format, blacklist and MX check of a single address.
///
/// Reads the host DNS configuration on every call; for repeated checks keep an
/// [`EmailChecker`] around instead:
///
/// ```no_run
/// # async fn demo() -> Result<(), mailsift::MxError> {
/// let checker = mailsift::EmailChecker::from_system_conf()?;
/// for email in ["a@example.com", "b@example.org"] {
///     let result = checker.check_email(email).await;
///     println!("{email}: {}", result.message().unwrap_or("valid"));
/// }
/// # Ok(())
/// # }
/// ```
pub async fn check_email(email: &str) -> ValidationResult {
    system_checker().check_email(email).await
}

/// Batch variant of [`check_email`]; see [`EmailChecker::check_emails`].
pub async fn check_emails<S: AsRef<str>>(
    emails: &[S],
    concurrency: Option<usize>,
) -> Vec<ValidationResult> {
    if emails.is_empty() {
        return Vec::new();
    }
    system_checker().check_emails(emails, concurrency).await
}
