/// Longest host name label accepted (RFC 1035 §2.3.4).
pub(crate) const MAX_LABEL_LEN: usize = 63;

const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";

/// Host name (`label.` groups then a top-level label starting with a letter,
/// or a punycode top-level label) or a bracketed IPv4 literal.
pub(crate) fn domain_pattern() -> String {
    let host = r"(?:(?:xn--)?[a-z0-9]+(?:-[a-z0-9]+)*\.)+(?:[a-z][a-z0-9]*|xn--[a-z0-9]+)(?:-[a-z0-9]+)*";
    let literal = format!(r"\[{OCTET}(?:\.{OCTET}){{3}}\]");
    format!("(?:{host}|{literal})")
}

/// Labels of a host name must stay within [`MAX_LABEL_LEN`]; address
/// literals are not subject to the limit.
pub(crate) fn labels_within_limit(domain: &str) -> bool {
    if domain.starts_with('[') {
        return true;
    }
    domain.split('.').all(|label| label.len() <= MAX_LABEL_LEN)
}
