use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use trust_dns_resolver::{
    TokioAsyncResolver,
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

use super::{LookupFailure, LookupFailureKind, MxError, MxRecord};
use crate::result::{InvalidReason, ValidationResult};

/// How long [`resolve_mx`] waits for an answer when no timeout is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3_000);

/// Source of MX answers.
///
/// Implementations return the raw record list; sorting, de-duplication and
/// classification happen in [`resolve_mx`].
#[async_trait]
pub trait LookupMx: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupFailure>;
}

#[async_trait]
impl<T> LookupMx for Arc<T>
where
    T: LookupMx + ?Sized,
{
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupFailure> {
        (**self).lookup_mx(domain).await
    }
}

#[async_trait]
impl LookupMx for TokioAsyncResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupFailure> {
        let lookup = self.mx_lookup(domain).await.map_err(failure_from)?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect())
    }
}

/// Resolver built from the host's DNS configuration (`/etc/resolv.conf` on
/// Unix).
pub fn system_resolver() -> Result<TokioAsyncResolver, MxError> {
    TokioAsyncResolver::tokio_from_system_conf().map_err(MxError::resolver_init)
}

/// Looks up the MX records of `domain`, giving up after `timeout`.
///
/// Outcomes:
/// - records present and none null: valid, records attached (sorted by
///   priority);
/// - at least one null record: `null-mx`, records attached;
/// - empty answer: `no-mx`;
/// - NXDOMAIN, no data or SERVFAIL: `not-found`;
/// - any other resolver error, or a domain that cannot be normalized: the raw
///   error message;
/// - no answer within `timeout`: `timeout`. A late answer is dropped.
pub async fn resolve_mx<R>(resolver: &R, domain: &str, timeout: Duration) -> ValidationResult
where
    R: LookupMx + ?Sized,
{
    let ascii = match normalize_domain(domain) {
        Ok(ascii) => ascii,
        Err(err) => {
            debug!(domain, error = %err, "MX lookup not dispatched");
            return ValidationResult::invalid(InvalidReason::Dns(err.to_string()));
        }
    };

    debug!(domain = %ascii, timeout_ms = timeout.as_millis() as u64, "dispatching MX lookup");
    match tokio::time::timeout(timeout, resolver.lookup_mx(&ascii)).await {
        Ok(Ok(records)) => classify_records(&ascii, records),
        Ok(Err(failure)) => classify_failure(&ascii, failure),
        Err(_) => {
            warn!(domain = %ascii, timeout_ms = timeout.as_millis() as u64, "MX lookup timed out");
            ValidationResult::invalid(InvalidReason::Timeout)
        }
    }
}

fn classify_records(domain: &str, mut records: Vec<MxRecord>) -> ValidationResult {
    records.sort();
    records.dedup();

    if records.is_empty() {
        debug!(domain, "no MX records");
        ValidationResult::invalid(InvalidReason::NoMx)
    } else if records.iter().any(MxRecord::is_null) {
        debug!(domain, records = records.len(), "null MX record");
        ValidationResult::invalid_with_records(InvalidReason::NullMx, records)
    } else {
        debug!(domain, records = records.len(), "MX records found");
        ValidationResult::valid(records)
    }
}

fn classify_failure(domain: &str, failure: LookupFailure) -> ValidationResult {
    match failure.kind {
        LookupFailureKind::NotFound
        | LookupFailureKind::NoData
        | LookupFailureKind::ServerFailure => {
            debug!(domain, kind = ?failure.kind, "domain has no usable DNS answer");
            ValidationResult::invalid(InvalidReason::NotFound)
        }
        LookupFailureKind::Other => {
            warn!(domain, error = %failure, "MX lookup failed");
            ValidationResult::invalid(InvalidReason::Dns(failure.message))
        }
    }
}

pub(crate) fn failure_from(err: ResolveError) -> LookupFailure {
    let kind = match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
            ResponseCode::NXDomain => LookupFailureKind::NotFound,
            ResponseCode::ServFail => LookupFailureKind::ServerFailure,
            _ => LookupFailureKind::NoData,
        },
        _ => LookupFailureKind::Other,
    };
    LookupFailure::new(kind, err.to_string())
}

/// Domain part of an address: everything after the first `@`, or the empty
/// string when there is none.
pub(crate) fn domain_of(email: &str) -> &str {
    email.split_once('@').map(|(_, domain)| domain).unwrap_or_default()
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, MxError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(MxError::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(MxError::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    // nom absolu DNS: on retire le point final
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}
