/// Unquoted word: RFC 5322 `atext` restricted to lower-case ASCII.
const ATOM: &str = r"[\x21\x23-\x27\x2A\x2B\x2D\x2F-\x39\x3D\x3F\x5E-\x7E]+";

/// Quoted word: printable ASCII other than `"` and `\`, obsolete control
/// characters, or a backslash-escaped pair.
const QUOTED: &str = r#""(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\\[\x00-\x7F])*""#;

/// Local part: one or more words separated by single dots.
pub(crate) fn local_pattern() -> String {
    let word = format!("(?:{ATOM}|{QUOTED})");
    format!(r"{word}(?:\.{word})*")
}

/// Length used for the RFC limits: quote characters are not counted and an
/// escaped pair counts once.
pub(crate) fn quoted_len(s: &str) -> usize {
    let mut units = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {}
            '\\' => {
                // paire échappée: une seule unité
                chars.next();
                units += 1;
            }
            _ => units += 1,
        }
    }
    units
}
