use std::net::Ipv4Addr;

use crate::{
    class::Class,
    dns_question::DNSQuestion,
    error::{DnsError, Result},
    name::{decode_name, name_to_string},
    record_data::{parse_ipv4, RecordData},
    record_type::RecordType,
    wire::WireReader,
};

/// A resource record in the answer section. Names are never compressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSRecord {
    name: Vec<u8>,
    type_: RecordType,
    class: Class,
    ttl: u32,
    data: RecordData,
}

impl DNSRecord {
    /// Answers an A question with `rdata`, a dotted-quad IPv4 address.
    ///
    /// Fails with [`DnsError::Format`] if the question is not for an A record
    /// or `rdata` is not four decimal octets in range.
    pub fn a_record(question: &DNSQuestion, ttl: u32, rdata: &str) -> Result<Self> {
        if question.type_() != RecordType::A {
            return Err(DnsError::Format(format!(
                "cannot answer a {} question with an A record",
                question.type_()
            )));
        }

        Ok(DNSRecord {
            name: question.wire_name().to_vec(),
            type_: question.type_(),
            class: question.class(),
            ttl,
            data: RecordData::A(parse_ipv4(rdata)?),
        })
    }

    pub fn wire_name(&self) -> &[u8] {
        &self.name
    }
    pub fn name(&self) -> String {
        name_to_string(&self.name)
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> Class {
        self.class
    }
    pub fn ttl(&self) -> u32 {
        self.ttl
    }
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let data = self.data.to_bytes();

        [
            self.name.clone(),
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
            self.ttl.to_be_bytes().to_vec(),
            (data.len() as u16).to_be_bytes().to_vec(),
            data,
        ]
        .concat()
    }

    pub fn parse(reader: &mut WireReader) -> Result<Self> {
        let name = decode_name(reader)?;
        let type_ = RecordType::from(reader.read_u16()?);
        let class = Class::from(reader.read_u16()?);
        let ttl = reader.read_u32()?;
        let data_length = reader.read_u16()?;
        let rdata = reader.read_bytes(data_length as usize)?;

        let data = match (type_, rdata) {
            (RecordType::A, &[a, b, c, d]) => RecordData::A(Ipv4Addr::new(a, b, c, d)),
            _ => RecordData::Other(rdata.to_vec()),
        };

        Ok(DNSRecord {
            name,
            type_,
            class,
            ttl,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(name: &str, type_: RecordType) -> DNSQuestion {
        DNSQuestion::for_name(name, type_, Class::In).unwrap()
    }

    #[test]
    fn test_encode_a_record() {
        let record =
            DNSRecord::a_record(&question("foo.example.com", RecordType::A), 300, "10.0.0.1")
                .unwrap();

        let mut expected = question("foo.example.com", RecordType::A).to_bytes();
        expected.extend_from_slice(&[0, 0, 1, 44, 0, 4, 10, 0, 0, 1]);
        assert_eq!(record.to_bytes(), expected);
    }

    #[test]
    fn test_out_of_range_octet() {
        let result = DNSRecord::a_record(&question("foo.com", RecordType::A), 60, "999.1.1.1");
        assert!(matches!(result, Err(DnsError::Format(_))));
    }

    #[test]
    fn test_only_answers_a_questions() {
        let result = DNSRecord::a_record(&question("foo.com", RecordType::AAAA), 60, "1.1.1.1");
        assert!(matches!(result, Err(DnsError::Format(_))));
    }

    #[test]
    fn test_parse_round_trip() {
        let record =
            DNSRecord::a_record(&question("www.example.org", RecordType::A), 86400, "192.0.2.7")
                .unwrap();
        let bytes = record.to_bytes();
        let mut reader = WireReader::new(&bytes);

        let parsed = DNSRecord::parse(&mut reader).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.data().as_a(), Some(&Ipv4Addr::new(192, 0, 2, 7)));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_parse_other_data() {
        let mut bytes = vec![0];
        bytes.extend_from_slice(&[0, 16, 0, 1, 0, 0, 0, 5, 0, 3, 2, b'h', b'i']);
        let parsed = DNSRecord::parse(&mut WireReader::new(&bytes)).unwrap();

        assert_eq!(parsed.type_(), RecordType::Unknown(16));
        assert_eq!(parsed.ttl(), 5);
        assert_eq!(parsed.data(), &RecordData::Other(vec![2, b'h', b'i']));
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_parse_truncated_rdata() {
        let bytes = [0, 0, 1, 0, 1, 0, 0, 0, 5, 0, 4, 127, 0];
        assert!(matches!(
            DNSRecord::parse(&mut WireReader::new(&bytes)),
            Err(DnsError::UnexpectedEof { .. })
        ));
    }
}
