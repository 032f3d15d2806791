use thiserror::Error;

/// One MX answer. Lower `priority` is preferred.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MxRecord {
    pub priority: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(priority: u16, exchange: impl Into<String>) -> Self {
        Self {
            priority,
            exchange: exchange.into(),
        }
    }

    /// A null MX (RFC 7505) has an empty or root (`.`) exchange and means the
    /// domain accepts no mail.
    pub fn is_null(&self) -> bool {
        self.exchange.is_empty() || self.exchange == "."
    }
}

/// Classification of a failed MX lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailureKind {
    /// NXDOMAIN: the domain does not exist.
    NotFound,
    /// The domain exists but has no records of the requested type.
    NoData,
    /// SERVFAIL from the upstream server.
    ServerFailure,
    Other,
}

/// Error reported by a [`LookupMx`](super::LookupMx) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupFailure {
    pub kind: LookupFailureKind,
    pub message: String,
}

impl LookupFailure {
    pub fn new(kind: LookupFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(LookupFailureKind::NotFound, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(LookupFailureKind::Other, message)
    }
}
