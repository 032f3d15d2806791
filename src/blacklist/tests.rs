use std::io::Cursor;

use super::{Blacklist, BlacklistError, domain_suffixes, is_blacklisted};

const FIXTURE: [&str; 9] = [
    "0-00.usa.cc",
    "10minutemail.com",
    "guerrillamail.com",
    "tempmail.org",
    "mailinator.com",
    "33mail.com",
    "dispostable.com",
    "throwaway.email",
    "temp-mail.org",
];

fn fixture() -> Blacklist {
    Blacklist::from_domains(FIXTURE)
}

#[test]
fn suffixes_drop_leftmost_label() {
    let suffixes: Vec<_> = domain_suffixes("sub.domain.com").collect();
    assert_eq!(suffixes, ["sub.domain.com", "domain.com", "com"]);

    let deep: Vec<_> = domain_suffixes("mail.sub.domain.co.uk").collect();
    assert_eq!(
        deep,
        [
            "mail.sub.domain.co.uk",
            "sub.domain.co.uk",
            "domain.co.uk",
            "co.uk",
            "uk"
        ]
    );
}

#[test]
fn suffixes_of_single_label() {
    let suffixes: Vec<_> = domain_suffixes("localhost").collect();
    assert_eq!(suffixes, ["localhost"]);
}

#[test]
fn listed_domain_and_subdomains_are_blacklisted() {
    let list = fixture();
    assert!(list.is_blacklisted("test@10minutemail.com"));
    assert!(list.is_blacklisted("test@mail.10minutemail.com"));
    assert!(list.is_blacklisted("test@a.b.0-00.usa.cc"));
}

#[test]
fn parent_of_listed_domain_is_not_blacklisted() {
    let list = fixture();
    assert!(!list.is_blacklisted("test@usa.cc"));
    assert!(!list.is_blacklisted("test@gmail.com"));
    assert!(!list.is_blacklisted("test@not10minutemail.com"));
}

#[test]
fn quoted_at_sign_shifts_the_domain() {
    let list = fixture();
    assert!(!list.is_blacklisted("\"x@y\"@10minutemail.com"));
    assert!(list.is_blacklisted("\"xy\"@10minutemail.com"));
}

#[test]
fn domain_is_case_folded() {
    assert!(fixture().is_blacklisted("Test@Mail.10MinuteMail.COM"));
}

#[test]
fn address_without_at_is_not_blacklisted() {
    assert!(!fixture().is_blacklisted("10minutemail.com"));
    assert!(!fixture().is_blacklisted(""));
}

#[test]
fn bundled_list_covers_known_providers() {
    let list = Blacklist::bundled();
    assert!(!list.is_empty());
    for domain in FIXTURE {
        assert!(list.contains(domain), "{domain} missing from bundled list");
    }
    assert!(is_blacklisted("someone@yopmail.com"));
    assert!(!is_blacklisted("someone@gmail.com"));
}

#[test]
fn repeated_checks_agree() {
    let list = fixture();
    let first = list.is_blacklisted("user@inbox.mailinator.com");
    for _ in 0..10 {
        assert_eq!(list.is_blacklisted("user@inbox.mailinator.com"), first);
    }
}

#[test]
fn reader_skips_comments_and_blank_lines() {
    let input = "# disposable providers\n\nExample.ORG.\n  spam.test  # inline note\n";
    let list = Blacklist::from_reader(Cursor::new(input)).expect("list parses");
    assert_eq!(list.len(), 2);
    assert!(list.contains("example.org"));
    assert!(list.contains("spam.test"));
    assert!(list.is_blacklisted("x@eu.spam.test"));
}

#[test]
fn missing_file_reports_path() {
    let err = Blacklist::from_path("/nonexistent/mailsift/blacklist.txt")
        .expect_err("missing file should fail");
    assert!(matches!(err, BlacklistError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/mailsift/blacklist.txt"));
}

#[test]
fn debug_shows_source_and_size() {
    let rendered = format!("{:?}", fixture());
    assert_eq!(rendered, "Blacklist { source: \"owned\", len: 9 }");
}
