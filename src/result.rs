use std::fmt;

use crate::mx::MxRecord;

/// Why an address was rejected.
///
/// The set is closed except for [`InvalidReason::Dns`], which carries the
/// resolver's own message for failures that fit none of the other codes.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    InvalidFormat,
    Blacklist,
    NotFound,
    NoMx,
    NullMx,
    Timeout,
    Dns(String),
}

impl InvalidReason {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidFormat => "invalid-format",
            Self::Blacklist => "blacklist",
            Self::NotFound => "not-found",
            Self::NoMx => "no-mx",
            Self::NullMx => "null-mx",
            Self::Timeout => "timeout",
            Self::Dns(message) => message,
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(InvalidReason),
}

/// Outcome of validating one address.
///
/// `mx_records` is set for valid results and for `null-mx` rejections (so the
/// offending records can be inspected); it is `None` otherwise. `email` is
/// only filled in by batch validation.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub email: Option<String>,
    pub verdict: Verdict,
    pub mx_records: Option<Vec<MxRecord>>,
}

impl ValidationResult {
    pub fn valid(mx_records: Vec<MxRecord>) -> Self {
        Self {
            email: None,
            verdict: Verdict::Valid,
            mx_records: Some(mx_records),
        }
    }

    /// Valid without any DNS evidence (DNS checks disabled).
    pub(crate) fn valid_unchecked() -> Self {
        Self {
            email: None,
            verdict: Verdict::Valid,
            mx_records: None,
        }
    }

    pub fn invalid(reason: InvalidReason) -> Self {
        Self {
            email: None,
            verdict: Verdict::Invalid(reason),
            mx_records: None,
        }
    }

    pub(crate) fn invalid_with_records(reason: InvalidReason, mx_records: Vec<MxRecord>) -> Self {
        Self {
            email: None,
            verdict: Verdict::Invalid(reason),
            mx_records: Some(mx_records),
        }
    }

    /// Attaches the address this result was computed for.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.verdict, Verdict::Valid)
    }

    pub fn reason(&self) -> Option<&InvalidReason> {
        match &self.verdict {
            Verdict::Valid => None,
            Verdict::Invalid(reason) => Some(reason),
        }
    }

    /// The reason code as text (`"invalid-format"`, `"timeout"`, ...).
    pub fn message(&self) -> Option<&str> {
        self.reason().map(InvalidReason::as_str)
    }

    pub fn mx_records(&self) -> &[MxRecord] {
        self.mx_records.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes() {
        assert_eq!(InvalidReason::InvalidFormat.as_str(), "invalid-format");
        assert_eq!(InvalidReason::NullMx.to_string(), "null-mx");
        assert_eq!(
            InvalidReason::Dns("connection refused".into()).as_str(),
            "connection refused"
        );
    }

    #[test]
    fn accessors() {
        let ok = ValidationResult::valid(vec![MxRecord::new(10, "mx.example.com")]);
        assert!(ok.is_valid());
        assert_eq!(ok.message(), None);
        assert_eq!(ok.mx_records().len(), 1);

        let rejected = ValidationResult::invalid(InvalidReason::Timeout).with_email("a@b.co");
        assert!(!rejected.is_valid());
        assert_eq!(rejected.message(), Some("timeout"));
        assert_eq!(rejected.email.as_deref(), Some("a@b.co"));
        assert!(rejected.mx_records().is_empty());
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn serializes_with_camel_case_fields() {
        let result = ValidationResult::invalid(InvalidReason::NoMx).with_email("a@b.co");
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["verdict"]["invalid"], "no-mx");
        assert!(json["mxRecords"].is_null());
    }
}
