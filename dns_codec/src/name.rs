use crate::{
    constants::{LABEL_TYPE_MASK, MAX_LABEL_LENGTH, MAX_NAME_LENGTH},
    error::{DnsError, Result},
    wire::WireReader,
};

/// Reads one uncompressed name and returns its wire form.
pub fn decode_name(reader: &mut WireReader) -> Result<Vec<u8>> {
    let mut wire = vec![];

    loop {
        let offset = reader.position();
        let length = reader.read_u8()?;
        if length & LABEL_TYPE_MASK != 0 {
            return Err(DnsError::CompressionPointer { offset });
        }

        wire.push(length);
        if length == 0 {
            return Ok(wire);
        }

        wire.extend_from_slice(reader.read_bytes(length as usize)?);
        // leave room for the terminating zero
        if wire.len() + 1 > MAX_NAME_LENGTH {
            return Err(DnsError::NameTooLong {
                length: wire.len() + 1,
            });
        }
    }
}

/// Decodes the name starting at `offset`, returning its text form and the
/// offset just past the terminating zero byte.
pub fn decode_name_at(data: &[u8], offset: usize) -> Result<(String, usize)> {
    let mut reader = WireReader::at(data, offset);
    let wire = decode_name(&mut reader)?;

    Ok((name_to_string(&wire), reader.position()))
}

/// Renders a wire-form name as dotted text, one char per label byte. The
/// root name is `""`.
pub fn name_to_string(wire: &[u8]) -> String {
    let mut labels = vec![];
    let mut pos = 0;

    while let Some(&length) = wire.get(pos) {
        if length == 0 {
            break;
        }
        let end = (pos + 1 + length as usize).min(wire.len());
        let label: String = wire[pos + 1..end].iter().map(|&byte| char::from(byte)).collect();
        labels.push(label);
        pos = end;
    }

    labels.join(".")
}

/// Encodes a dotted name into wire form.
///
/// `""` and `"."` are the root name, and a single trailing dot is ignored.
/// Every char is one label byte, so only chars up to U+00FF are accepted.
/// Every label must be 1 to 63 bytes and the whole name at most 255 bytes.
pub fn encode_name(domain_name: &str) -> Result<Vec<u8>> {
    if domain_name.is_empty() || domain_name == "." {
        return Ok(vec![0]);
    }

    let mut labels = parse_labels(domain_name)?;
    if labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
    }

    let mut bytes = vec![];
    for label in labels {
        if label.is_empty() {
            return Err(DnsError::EmptyLabel {
                name: domain_name.to_string(),
            });
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(DnsError::LabelTooLong {
                length: label.len(),
            });
        }
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(&label);
    }
    // Add a 0 byte to terminate the name
    bytes.push(0);

    if bytes.len() > MAX_NAME_LENGTH {
        return Err(DnsError::NameTooLong {
            length: bytes.len(),
        });
    }

    Ok(bytes)
}

fn parse_labels(domain_name: &str) -> Result<Vec<Vec<u8>>> {
    domain_name
        .split('.')
        .map(|label| {
            label
                .chars()
                .map(|c| {
                    u8::try_from(c).map_err(|_| {
                        DnsError::Format(format!("{:?} does not fit in a label byte", c))
                    })
                })
                .collect::<Result<Vec<u8>>>()
        })
        .collect()
}
