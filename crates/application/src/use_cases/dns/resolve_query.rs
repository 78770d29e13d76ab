use crate::ports::{QueryMetricsSink, RecursiveResolver, ZoneProvider};
use crate::services::{ResponseAssembler, ZoneLookup};
use std::sync::Arc;
use tracing::{debug, warn};
use zonehost_domain::name::normalize_name;
use zonehost_domain::{QueryMessage, ReplyMessage, ResponseCode};

/// Result of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Reply built from local zone data, or a local error reply.
    Local(ReplyMessage),
    /// Upstream reply, to be written back unmodified.
    Forwarded(Vec<u8>),
}

impl QueryOutcome {
    pub fn local(&self) -> Option<&ReplyMessage> {
        match self {
            QueryOutcome::Local(reply) => Some(reply),
            QueryOutcome::Forwarded(_) => None,
        }
    }
}

/// The resolution engine: one run per query, no state kept between runs.
pub struct ResolveQueryUseCase {
    zones: Arc<dyn ZoneProvider>,
    recursor: Option<Arc<dyn RecursiveResolver>>,
    metrics: Arc<dyn QueryMetricsSink>,
}

impl ResolveQueryUseCase {
    pub fn new(zones: Arc<dyn ZoneProvider>, metrics: Arc<dyn QueryMetricsSink>) -> Self {
        Self {
            zones,
            recursor: None,
            metrics,
        }
    }

    pub fn with_recursion(mut self, recursor: Arc<dyn RecursiveResolver>) -> Self {
        self.recursor = Some(recursor);
        self
    }

    /// Never fails: every error condition becomes a reply rcode.
    pub async fn execute(&self, query: &QueryMessage) -> QueryOutcome {
        let [question] = query.questions.as_slice() else {
            debug!(
                id = query.id,
                questions = query.questions.len(),
                "Rejecting query without exactly one question"
            );
            return self.local("", ReplyMessage::format_error(query));
        };

        let qname = normalize_name(&question.name);
        let zones = self.zones.snapshot();

        let Some(matched) = zones.find(&qname, question.record_type) else {
            if let Some(recursor) = &self.recursor {
                return self.recurse(recursor.as_ref(), query, "", &qname).await;
            }
            debug!(domain = %qname, "No zone for query, refusing");
            return self.local("", ReplyMessage::with_rcode(query, ResponseCode::Refused));
        };

        self.zones.record_hit(matched.cut);

        let found = ZoneLookup::new(matched.zone, matched.cut).resolve(&qname, question);

        if !found.answer_known {
            if let Some(recursor) = &self.recursor {
                return self
                    .recurse(recursor.as_ref(), query, matched.cut, &qname)
                    .await;
            }
        }

        let mut reply = ReplyMessage::reply_to(query);
        reply.authoritative = true;
        reply.recursion_available = false;
        ResponseAssembler::new(&zones).assemble(&mut reply, matched, found);

        debug!(
            domain = %qname,
            zone = %matched.cut,
            record_type = %question.record_type,
            rcode = %reply.rcode,
            answers = reply.answers.len(),
            "Answered from zone data"
        );

        self.local(matched.cut, reply)
    }

    fn local(&self, zone: &str, reply: ReplyMessage) -> QueryOutcome {
        self.metrics.record_query(zone, reply.rcode);
        QueryOutcome::Local(reply)
    }

    async fn recurse(
        &self,
        recursor: &dyn RecursiveResolver,
        query: &QueryMessage,
        zone: &str,
        qname: &str,
    ) -> QueryOutcome {
        match recursor.exchange(&query.raw).await {
            Ok(bytes) => {
                let rcode =
                    ResponseCode::from_wire_header(&bytes).unwrap_or(ResponseCode::ServFail);
                debug!(domain = %qname, rcode = %rcode, "Forwarded recursive reply");
                self.metrics.record_query(zone, rcode);
                QueryOutcome::Forwarded(bytes)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %qname,
                    upstream = %recursor.upstream(),
                    "Recursive exchange failed"
                );
                self.local(zone, ReplyMessage::with_rcode(query, ResponseCode::ServFail))
            }
        }
    }
}
