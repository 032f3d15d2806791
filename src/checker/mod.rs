//! Address validation pipeline.
//!
//! [`EmailChecker`] runs the format check, the blacklist check and the MX
//! lookup in that order and stops at the first failure, so DNS is never
//! queried for a malformed or blacklisted address.

mod batch;
mod system;

pub use system::{check_email, check_emails, is_mx_record_valid};

use std::sync::Arc;
use std::time::Duration;

use trust_dns_resolver::TokioAsyncResolver;

use crate::blacklist::Blacklist;
use crate::format::is_email_format_valid;
use crate::mx::{LookupMx, MxError, domain_of, resolve_mx, system_resolver};
use crate::options::ValidationOptions;
use crate::result::{InvalidReason, ValidationResult};

/// Validator bound to one DNS resolver and one blacklist.
///
/// Cloning is cheap: the resolver and the blacklist are shared.
pub struct EmailChecker<R> {
    resolver: Arc<R>,
    blacklist: Arc<Blacklist>,
    options: ValidationOptions,
}

impl<R> Clone for EmailChecker<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            blacklist: Arc::clone(&self.blacklist),
            options: self.options.clone(),
        }
    }
}

impl EmailChecker<TokioAsyncResolver> {
    /// Uses the host's DNS configuration and the bundled blacklist.
    pub fn from_system_conf() -> Result<Self, MxError> {
        Ok(Self::new(system_resolver()?, Blacklist::bundled()))
    }
}

impl<R: LookupMx> EmailChecker<R> {
    pub fn new(resolver: R, blacklist: Blacklist) -> Self {
        Self::from_shared(Arc::new(resolver), Arc::new(blacklist))
    }

    pub fn from_shared(resolver: Arc<R>, blacklist: Arc<Blacklist>) -> Self {
        Self {
            resolver,
            blacklist,
            options: ValidationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn is_email_format_valid(&self, email: &str) -> bool {
        is_email_format_valid(email)
    }

    pub fn is_blacklisted(&self, email: &str) -> bool {
        self.blacklist.is_blacklisted(email)
    }

    /// MX check for the domain of `email`. `timeout` overrides the configured
    /// one for this call.
    pub async fn is_mx_record_valid(
        &self,
        email: &str,
        timeout: Option<Duration>,
    ) -> ValidationResult {
        let timeout = timeout.unwrap_or_else(|| self.options.timeout());
        resolve_mx(&*self.resolver, domain_of(email), timeout).await
    }

    /// Validates a single address. The returned result carries no `email`.
    pub async fn check_email(&self, email: &str) -> ValidationResult {
        if !is_email_format_valid(email) {
            return ValidationResult::invalid(InvalidReason::InvalidFormat);
        }

        if !self.options.skip_blacklist && self.blacklist.is_blacklisted(email) {
            return ValidationResult::invalid(InvalidReason::Blacklist);
        }

        if self.options.skip_dns {
            return ValidationResult::valid_unchecked();
        }

        self.is_mx_record_valid(email, None).await
    }
}
