//! Disposable-domain lookup.
//!
//! A [`Blacklist`] is an immutable set of domains. Listing a domain also
//! covers every sub-domain below it: `mail.example.com` is blacklisted as soon
//! as `example.com` is.

mod data;
mod error;

pub use error::BlacklistError;

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use data::BUNDLED_DOMAINS;

#[derive(Clone)]
enum Domains {
    Bundled(&'static phf::Set<&'static str>),
    Owned(HashSet<String>),
}

/// Immutable set of blacklisted domains.
#[derive(Clone)]
pub struct Blacklist {
    domains: Domains,
}

impl Blacklist {
    /// The list compiled into the crate.
    pub fn bundled() -> Self {
        Self {
            domains: Domains::Bundled(&BUNDLED_DOMAINS),
        }
    }

    /// Builds a list from arbitrary entries. Entries are trimmed,
    /// lower-cased and stripped of a trailing dot; empty entries are skipped.
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .filter_map(|domain| normalize_entry(domain.as_ref()))
            .collect();
        Self {
            domains: Domains::Owned(domains),
        }
    }

    /// Reads one domain per line. Blank lines and `#` comments are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BlacklistError> {
        let mut domains = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(BlacklistError::read)?;
            let entry = line.split('#').next().unwrap_or_default();
            if let Some(domain) = normalize_entry(entry) {
                domains.insert(domain);
            }
        }
        Ok(Self {
            domains: Domains::Owned(domains),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BlacklistError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| BlacklistError::io(path, err))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        match &self.domains {
            Domains::Bundled(set) => set.len(),
            Domains::Owned(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact membership test for an already lower-cased domain.
    pub fn contains(&self, domain: &str) -> bool {
        match &self.domains {
            Domains::Bundled(set) => set.contains(domain),
            Domains::Owned(set) => set.contains(domain),
        }
    }

    /// Returns `true` when the domain of `email` (text after the first `@`),
    /// or any of its parent domains, is listed. Addresses without `@` are
    /// never blacklisted.
    ///
    /// The split ignores quoting: `"x@y"@10minutemail.com` yields the domain
    /// `y"@10minutemail.com`, which matches no entry.
    pub fn is_blacklisted(&self, email: &str) -> bool {
        let Some((_, domain)) = email.split_once('@') else {
            return false;
        };
        let domain = domain.to_ascii_lowercase();
        domain_suffixes(&domain).any(|suffix| self.contains(suffix))
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Debug for Blacklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.domains {
            Domains::Bundled(_) => "bundled",
            Domains::Owned(_) => "owned",
        };
        f.debug_struct("Blacklist")
            .field("source", &source)
            .field("len", &self.len())
            .finish()
    }
}

/// Yields `domain` and each parent obtained by dropping the leftmost label:
/// `a.b.c`, `b.c`, `c`.
pub fn domain_suffixes(domain: &str) -> impl Iterator<Item = &str> + '_ {
    std::iter::successors(Some(domain), |current| {
        current.split_once('.').map(|(_, parent)| parent)
    })
}

/// Checks `email` against the bundled list.
pub fn is_blacklisted(email: &str) -> bool {
    Blacklist::bundled().is_blacklisted(email)
}

fn normalize_entry(entry: &str) -> Option<String> {
    let trimmed = entry.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests;
