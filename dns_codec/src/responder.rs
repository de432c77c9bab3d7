use tracing::{debug, warn};

use crate::{class::Class, dns_message::DNSMessage, record_type::RecordType};

/// What a zone knows about a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// IPv4 address text, `None` if the zone has no matching A/IN record.
    pub rdata: Option<String>,
    pub ttl: u32,
}

/// The record store the responder answers from.
pub trait ZoneLookup {
    /// Finds an exact-name match for an A record in class IN.
    fn lookup(&self, name: &str, type_: RecordType, class: Class) -> Lookup;
}

/// Answers a decoded query from `zone`.
pub fn respond<Z: ZoneLookup + ?Sized>(query: &DNSMessage, zone: &Z) -> DNSMessage {
    let Some(question) = query.question() else {
        return DNSMessage::response(query, None, 0);
    };

    let name = question.name();
    if question.type_() != RecordType::A || question.class() != Class::In {
        warn!(
            %name,
            type_ = %question.type_(),
            class = %question.class(),
            "only A queries in class IN are answered"
        );
    }

    let Lookup { rdata, ttl } = zone.lookup(&name, question.type_(), question.class());
    debug!(%name, rdata = ?rdata, ttl, "zone lookup");

    DNSMessage::response(query, rdata.as_deref(), ttl)
}

/// Decodes one datagram and returns the reply to send, if any.
///
/// Datagrams too short to carry a header, and responses, get no reply.
pub fn handle_datagram<Z: ZoneLookup + ?Sized>(data: &[u8], zone: &Z) -> Option<Vec<u8>> {
    let query = match DNSMessage::from_bytes(data) {
        Ok(query) => query,
        Err(err) => {
            warn!(len = data.len(), error = %err, "dropping datagram");
            return None;
        }
    };
    if query.flags().qr {
        warn!(id = query.header().id(), "dropping response received as a query");
        return None;
    }
    debug!("received query\n{}", query);

    let response = respond(&query, zone);
    debug!("sending response\n{}", response);

    Some(response.into_bytes())
}
