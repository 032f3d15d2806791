use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, trace};

use super::EmailChecker;
use crate::mx::LookupMx;
use crate::result::{InvalidReason, ValidationResult};

/// Addresses sharing one (lower-cased) domain.
struct DomainGroup<'a> {
    domain: String,
    /// First address seen for the domain; its result stands for the group.
    representative: &'a str,
    members: Vec<&'a str>,
}

/// Domains of a batch in first-appearance order.
struct DomainGroups<'a> {
    groups: Vec<DomainGroup<'a>>,
    /// Group of each input address, `None` when it has no domain.
    assignment: Vec<Option<usize>>,
}

impl<'a> DomainGroups<'a> {
    fn build<S: AsRef<str>>(emails: &'a [S]) -> Self {
        let mut groups: Vec<DomainGroup<'a>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut assignment = Vec::with_capacity(emails.len());

        for email in emails {
            let email = email.as_ref();
            let Some(domain) = grouping_key(email) else {
                assignment.push(None);
                continue;
            };

            let slot = match index.get(&domain) {
                Some(&slot) => slot,
                None => {
                    let slot = groups.len();
                    index.insert(domain.clone(), slot);
                    groups.push(DomainGroup {
                        domain,
                        representative: email,
                        members: Vec::new(),
                    });
                    slot
                }
            };
            groups[slot].members.push(email);
            assignment.push(Some(slot));
        }

        Self { groups, assignment }
    }

    fn len(&self) -> usize {
        self.groups.len()
    }

    /// One result per input address, in input order, with the address
    /// attached.
    fn remap<S: AsRef<str>>(
        &self,
        emails: &[S],
        outcomes: &[ValidationResult],
    ) -> Vec<ValidationResult> {
        emails
            .iter()
            .zip(&self.assignment)
            .map(|(email, slot)| {
                let result = match slot {
                    Some(slot) => outcomes[*slot].clone(),
                    None => ValidationResult::invalid(InvalidReason::InvalidFormat),
                };
                result.with_email(email.as_ref())
            })
            .collect()
    }
}

/// Lower-cased text after the first `@`; `None` when missing or empty.
fn grouping_key(email: &str) -> Option<String> {
    let (_, domain) = email.split_once('@')?;
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_lowercase())
    }
}

impl<R: LookupMx> EmailChecker<R> {
    /// Validates many addresses, resolving each distinct domain once.
    ///
    /// The first address seen for a domain is validated and its result is
    /// reused for every address of that domain, so a malformed first address
    /// marks its domain-mates `invalid-format` as well. Domains are processed
    /// in waves of at most `concurrency` (default from the options, minimum
    /// one); a wave completes before the next starts. The output has one
    /// result per input, in input order, each carrying its address.
    pub async fn check_emails<S: AsRef<str>>(
        &self,
        emails: &[S],
        concurrency: Option<usize>,
    ) -> Vec<ValidationResult> {
        let concurrency = concurrency.unwrap_or(self.options.concurrency).max(1);
        let groups = DomainGroups::build(emails);
        debug!(
            addresses = emails.len(),
            domains = groups.len(),
            concurrency,
            "batch validation"
        );

        let mut outcomes = Vec::with_capacity(groups.len());
        // une vague se termine avant que la suivante ne parte
        for (wave, chunk) in groups.groups.chunks(concurrency).enumerate() {
            trace!(wave, size = chunk.len(), "dispatching wave");
            let settled = join_all(chunk.iter().map(|group| {
                trace!(
                    domain = %group.domain,
                    members = group.members.len(),
                    "validating representative"
                );
                self.check_email(group.representative)
            }))
            .await;
            outcomes.extend(settled);
        }

        groups.remap(emails, &outcomes)
    }
}
