use std::{fmt, net::Ipv4Addr};

use crate::error::{DnsError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Other(Vec<u8>),
}

impl RecordData {
    pub fn as_a(&self) -> Option<&Ipv4Addr> {
        match self {
            RecordData::A(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RecordData::A(ip) => ip.octets().to_vec(),
            RecordData::Other(data) => data.clone(),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            // RFC 3597 generic form
            RecordData::Other(data) => {
                write!(f, "\\# {}", data.len())?;
                if !data.is_empty() {
                    f.write_str(" ")?;
                    for byte in data {
                        write!(f, "{:02x}", byte)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Parses exactly four dot-separated decimal octets, each 0-255.
pub fn parse_ipv4(rdata: &str) -> Result<Ipv4Addr> {
    let octets = rdata
        .split('.')
        .map(parse_octet)
        .collect::<Option<Vec<u8>>>();

    match octets.as_deref() {
        Some(&[a, b, c, d]) => Ok(Ipv4Addr::new(a, b, c, d)),
        _ => Err(DnsError::Format(format!(
            "rdata {:?} is not a dotted-quad IPv4 address",
            rdata
        ))),
    }
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
