use crate::services::ZoneAnswer;
use rustc_hash::FxHashSet;
use zonehost_domain::name::normalize_name;
use zonehost_domain::{
    RecordClass, RecordType, ReplyMessage, ResourceRecord, ResponseCode, ZoneCollection,
    ZoneMatch,
};

/// Turns a [`ZoneAnswer`] into the final sections of a local reply.
pub struct ResponseAssembler<'a> {
    zones: &'a ZoneCollection,
}

impl<'a> ResponseAssembler<'a> {
    pub fn new(zones: &'a ZoneCollection) -> Self {
        Self { zones }
    }

    /// Fills answer, authority and additional sections and sets the rcode.
    pub fn assemble(&self, reply: &mut ReplyMessage, matched: ZoneMatch<'_>, found: ZoneAnswer) {
        let zone = matched.zone;
        reply.answers = found.answers;
        reply.authorities = found.authorities;

        if !found.answer_known {
            if !found.rrset_exists {
                reply.rcode = ResponseCode::NXDomain;
            }
            reply.authorities = zone.soa();
        } else if !found.no_authority {
            for ns in zone.rrset(matched.cut, RecordType::NS, RecordClass::IN) {
                reply.authorities.push(ns.clone());
                if let Some(target) = ns.data.target() {
                    self.push_glue(target, &mut reply.additionals);
                }
            }
        }

        for record in &reply.answers {
            if matches!(record.record_type(), RecordType::CNAME | RecordType::SRV) {
                if let Some(target) = record.data.target() {
                    self.push_glue(target, &mut reply.additionals);
                }
            }
        }

        dedup_records(&mut reply.answers);
        dedup_records(&mut reply.additionals);
    }

    /// Appends the A then AAAA records of `target` from whichever zone serves it.
    fn push_glue(&self, target: &str, additionals: &mut Vec<ResourceRecord>) {
        let target = normalize_name(target);
        let Some(serving) = self.zones.find(&target, RecordType::A) else {
            return;
        };
        for record_type in [RecordType::A, RecordType::AAAA] {
            additionals.extend(
                serving
                    .zone
                    .rrset(&target, record_type, RecordClass::IN)
                    .cloned(),
            );
        }
    }
}

/// Drops records equal to an earlier one (owner, class and data; TTL ignored).
pub fn dedup_records(records: &mut Vec<ResourceRecord>) {
    let mut seen = FxHashSet::default();
    records.retain(|r| seen.insert((r.name.to_ascii_lowercase(), r.class, r.data.clone())));
}
