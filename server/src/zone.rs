//! Flat zone files.
//!
//! One record per line, `<hostname> <ttl> <class> <type> <ipv4>`. A line
//! holding a single number sets the default TTL used for negative answers.
//! Blank lines and lines starting with `;` or `#` are skipped.

use std::{collections::HashMap, fs, path::Path, str::FromStr};

use dns_codec::{Class, Lookup, RecordType, ZoneLookup};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("failed to read zone file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: only IN A records are supported, found {class} {type_}")]
    UnsupportedRecord {
        line: usize,
        class: String,
        type_: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ZoneRecord {
    ttl: u32,
    rdata: String,
}

#[derive(Debug, Default, Clone)]
pub struct Zone {
    default_ttl: u32,
    records: HashMap<String, ZoneRecord>,
}

impl Zone {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ZoneError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ZoneError::Io {
            path: path.display().to_string(),
            source,
        })?;

        text.parse()
    }

    pub fn default_ttl(&self) -> u32 {
        self.default_ttl
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_ttl(text: &str, line: usize) -> Result<u32, ZoneError> {
    text.parse().map_err(|_| ZoneError::Malformed {
        line,
        reason: format!("invalid TTL {:?}", text),
    })
}

impl FromStr for Zone {
    type Err = ZoneError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut zone = Zone::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            match fields.as_slice() {
                [ttl] => zone.default_ttl = parse_ttl(ttl, line)?,
                [name, ttl, class, type_, rdata] => {
                    if !class.eq_ignore_ascii_case("IN") || !type_.eq_ignore_ascii_case("A") {
                        return Err(ZoneError::UnsupportedRecord {
                            line,
                            class: class.to_string(),
                            type_: type_.to_string(),
                        });
                    }

                    // question names never carry the root dot
                    let name = name.strip_suffix('.').unwrap_or(*name);
                    let record = ZoneRecord {
                        ttl: parse_ttl(ttl, line)?,
                        rdata: rdata.to_string(),
                    };
                    if zone.records.insert(name.to_string(), record).is_some() {
                        debug!(line, name, "duplicate record replaces earlier entry");
                    }
                }
                fields => {
                    return Err(ZoneError::Malformed {
                        line,
                        reason: format!("expected 1 or 5 fields, found {}", fields.len()),
                    })
                }
            }
        }

        Ok(zone)
    }
}

impl ZoneLookup for Zone {
    fn lookup(&self, name: &str, type_: RecordType, class: Class) -> Lookup {
        let record = match (type_, class) {
            (RecordType::A, Class::In) => self.records.get(name),
            _ => None,
        };

        match record {
            Some(record) => Lookup {
                rdata: Some(record.rdata.clone()),
                ttl: record.ttl,
            },
            None => Lookup {
                rdata: None,
                ttl: self.default_ttl,
            },
        }
    }
}
