use smallvec::SmallVec;
use zonehost_domain::name::fqdn;
use zonehost_domain::{Question, RecordType, ResourceRecord, Zone};

/// Number of trailing remainder elements the wildcard walk looks at.
pub const WILDCARD_DEPTH: usize = 3;

/// What a zone has to say about one question before the reply is assembled.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ZoneAnswer {
    pub answers: Vec<ResourceRecord>,
    /// Delegation NS records found at the query name.
    pub authorities: Vec<ResourceRecord>,
    pub answer_known: bool,
    /// Some record, of any type, exists at the name or at a wildcard candidate.
    pub rrset_exists: bool,
    /// The reply must not get the zone's NS set in its authority section.
    pub no_authority: bool,
}

/// Exact, wildcard and CNAME/NS lookups inside one matched zone.
pub struct ZoneLookup<'a> {
    zone: &'a Zone,
    cut: &'a str,
}

impl<'a> ZoneLookup<'a> {
    pub fn new(zone: &'a Zone, cut: &'a str) -> Self {
        Self { zone, cut }
    }

    /// `qname` is the normalized form of `question.name`.
    pub fn resolve(&self, qname: &str, question: &Question) -> ZoneAnswer {
        let mut found = ZoneAnswer::default();

        self.direct(qname, question, &mut found);
        if !found.answer_known {
            self.wildcard(qname, question, &mut found);
        }
        if !found.answer_known && found.rrset_exists {
            self.alias_or_delegation(qname, question, &mut found);
        }

        found
    }

    fn direct(&self, qname: &str, question: &Question, found: &mut ZoneAnswer) {
        for record in self.zone.records_at(qname, question.class) {
            found.rrset_exists = true;
            if record.record_type() == question.record_type {
                found.answers.push(record.clone());
                found.answer_known = true;
            }
        }
    }

    fn wildcard(&self, qname: &str, question: &Question, found: &mut ZoneAnswer) {
        let owner = fqdn(&question.name);

        for candidate in wildcard_candidates(qname, self.cut) {
            for record in self.zone.records_at(&candidate, question.class) {
                found.rrset_exists = true;
                if record.record_type() == question.record_type {
                    found.answers.push(record.with_owner(&owner));
                    found.answer_known = true;
                }
            }
            if found.answer_known {
                break;
            }

            if found.rrset_exists {
                for record in self
                    .zone
                    .rrset(&candidate, RecordType::CNAME, question.class)
                {
                    found.answers.push(record.with_owner(&owner));
                    found.answer_known = true;
                }
            }
            if found.answer_known {
                break;
            }
        }
    }

    fn alias_or_delegation(&self, qname: &str, question: &Question, found: &mut ZoneAnswer) {
        let cnames: Vec<ResourceRecord> = self
            .zone
            .rrset(qname, RecordType::CNAME, question.class)
            .cloned()
            .collect();
        if !cnames.is_empty() {
            found.answers.extend(cnames);
            found.answer_known = true;
            found.no_authority = true;
            return;
        }

        if qname == self.cut {
            return;
        }
        let delegation: Vec<ResourceRecord> = self
            .zone
            .rrset(qname, RecordType::NS, question.class)
            .cloned()
            .collect();
        if !delegation.is_empty() {
            found.authorities = delegation;
            found.answer_known = true;
            found.no_authority = true;
        }
    }
}

/// Wildcard owners tried for `qname` inside the zone cut `cut`, most specific first.
///
/// The part of the name below the cut is split on `.`; only its last
/// [`WILDCARD_DEPTH`] elements take part, so at most two candidates come out
/// however deep the name is. `a.b.example.com.` under `example.com.` yields
/// `*.b.example.com.` then `*.example.com.`.
pub fn wildcard_candidates(qname: &str, cut: &str) -> SmallVec<[String; WILDCARD_DEPTH]> {
    let remainder = qname.strip_suffix(cut).unwrap_or(qname);
    let labels: SmallVec<[&str; 8]> = remainder.split('.').collect();
    let window = &labels[labels.len().saturating_sub(WILDCARD_DEPTH)..];

    (1..window.len())
        .map(|i| format!("*.{}{}", window[i..].join("."), cut))
        .collect()
}
