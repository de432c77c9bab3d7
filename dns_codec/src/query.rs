use rand::Rng;

use crate::{
    class::Class,
    constants::{DNS_HEADER_SIZE, DNS_QUESTION_SIZE},
    dns_header::DNSHeader,
    dns_question::DNSQuestion,
    error::Result,
    record_type::RecordType,
};

/// Builds a single-question query with a random ID.
pub fn build_query(domain_name: &str, record_type: RecordType, flags: u16) -> Result<Vec<u8>> {
    let id = rand::thread_rng().gen_range(0..=u16::MAX);
    let header = DNSHeader::new(id, flags);

    let question = DNSQuestion::for_name(domain_name, record_type, Class::In)?;

    let mut bytes =
        Vec::with_capacity(DNS_HEADER_SIZE + question.wire_name().len() + DNS_QUESTION_SIZE);
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend(question.to_bytes());

    Ok(bytes)
}
