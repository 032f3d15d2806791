//! Syntactic e-mail address check.
//!
//! The grammar is a practical subset of RFC 5321/5322: a dot-separated local
//! part made of atoms or quoted strings, then `@`, then either a dotted host
//! name or a bracketed IPv4 literal. The address is lower-cased before the
//! check, so every rule below is written against lower-case input.

mod domain;
mod local;

use std::sync::LazyLock;

use regex::Regex;

use domain::{domain_pattern, labels_within_limit};
use local::{local_pattern, quoted_len};

/// Maximum length of the whole address (RFC 5321, path minus the brackets).
pub(crate) const MAX_ADDRESS_LEN: usize = 254;
/// Maximum length of the local part (RFC 5321 §4.5.3.1.1).
pub(crate) const MAX_LOCAL_LEN: usize = 64;

static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "^(?P<local>{})@(?P<domain>{})$",
        local_pattern(),
        domain_pattern()
    );
    Regex::new(&pattern).unwrap_or_else(|err| panic!("address grammar must compile: {err}"))
});

/// Returns `true` when `email` is a syntactically valid address.
///
/// Empty input is rejected. Bare IP domains (`user@127.0.0.1`) are rejected
/// because the top-level label must start with a letter; a bracketed IPv4
/// literal (`user@[127.0.0.1]`) is accepted. The `IPv6:` tag is matched
/// against the lower-cased input and therefore never accepted.
pub fn is_email_format_valid(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }

    let lowered = email.to_lowercase();
    if quoted_len(&lowered) > MAX_ADDRESS_LEN {
        return false;
    }

    let Some(caps) = ADDRESS.captures(&lowered) else {
        return false;
    };

    if quoted_len(&caps["local"]) > MAX_LOCAL_LEN {
        return false;
    }

    labels_within_limit(&caps["domain"])
}
