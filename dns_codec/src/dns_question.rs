use crate::{
    class::Class,
    error::Result,
    name::{decode_name, encode_name, name_to_string},
    record_type::RecordType,
    wire::WireReader,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSQuestion {
    // wire form, terminating zero included
    name: Vec<u8>,
    type_: RecordType,
    class: Class,
}

impl DNSQuestion {
    pub fn new(name: Vec<u8>, type_: RecordType, class: Class) -> Self {
        Self { name, type_, class }
    }

    /// Builds a question from a dotted name.
    pub fn for_name(domain_name: &str, type_: RecordType, class: Class) -> Result<Self> {
        Ok(Self::new(encode_name(domain_name)?, type_, class))
    }

    /// Reads a name followed by the 2-byte type and class.
    pub fn decode(reader: &mut WireReader) -> Result<Self> {
        let name = decode_name(reader)?;
        let type_ = reader.read_u16()?.into();
        let class = reader.read_u16()?.into();

        Ok(Self { name, type_, class })
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

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.name.clone(),
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
        ]
        .concat()
    }
}
