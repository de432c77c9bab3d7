use std::{fmt, str::FromStr};

use crate::error::DnsError;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum RecordType {
    // Bunch more can be found here.. https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.2
    #[default]
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    AAAA,
    Unknown(u16),
}

const RECORD_TYPES: [(RecordType, u16, &str); 6] = [
    (RecordType::A, 1, "A"),
    (RecordType::NS, 2, "NS"),
    (RecordType::CNAME, 5, "CNAME"),
    (RecordType::SOA, 6, "SOA"),
    (RecordType::PTR, 12, "PTR"),
    (RecordType::AAAA, 28, "AAAA"),
];

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        RECORD_TYPES
            .iter()
            .find(|(_, code, _)| *code == value)
            .map(|(record_type, _, _)| *record_type)
            .unwrap_or(RecordType::Unknown(value))
    }
}

impl From<RecordType> for u16 {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Unknown(code) => code,
            known => RECORD_TYPES
                .iter()
                .find(|(record_type, _, _)| *record_type == known)
                .map(|(_, code, _)| *code)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = RECORD_TYPES
            .iter()
            .find(|(record_type, _, _)| record_type == self)
            .map(|(_, _, name)| *name);

        match name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", u16::from(*self)),
        }
    }
}

impl FromStr for RecordType {
    type Err = DnsError;

    /// Accepts a symbolic name (any case) or a decimal type code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((record_type, _, _)) = RECORD_TYPES
            .iter()
            .find(|(_, _, name)| name.eq_ignore_ascii_case(s))
        {
            return Ok(*record_type);
        }

        s.parse::<u16>()
            .map(RecordType::from)
            .map_err(|_| DnsError::Format(format!("Unknown record type: {}", s)))
    }
}
