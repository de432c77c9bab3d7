use crate::{
    constants::DNS_HEADER_SIZE,
    error::DnsError,
    flags::Flags,
    wire::{read_u16, write_u16},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DNSHeader {
    id: u16,
    flags: u16,
    num_questions: u16,
    num_answers: u16,
    num_authorities: u16,
    num_additionals: u16,
}

impl DNSHeader {
    /// Header of an outgoing query carrying a single question.
    pub fn new(id: u16, flags: u16) -> Self {
        Self {
            id,
            flags,
            num_questions: 1,
            ..Default::default()
        }
    }

    /// Header of a response: no authority or additional records.
    pub fn response(id: u16, flags: Flags, num_questions: u16, num_answers: u16) -> Self {
        Self {
            id,
            flags: flags.into(),
            num_questions,
            num_answers,
            ..Default::default()
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }
    pub fn flags_word(&self) -> u16 {
        self.flags
    }
    pub fn flags(&self) -> Flags {
        Flags::from(self.flags)
    }
    pub fn num_questions(&self) -> u16 {
        self.num_questions
    }
    pub fn num_answers(&self) -> u16 {
        self.num_answers
    }
    pub fn num_authorities(&self) -> u16 {
        self.num_authorities
    }
    pub fn num_additionals(&self) -> u16 {
        self.num_additionals
    }

    /// Writes the header into the first 12 bytes of `buf`.
    ///
    /// # Panics
    ///
    /// If `buf` is shorter than 12 bytes.
    pub fn write_to(&self, buf: &mut [u8]) {
        write_u16(buf, 0, self.id);
        write_u16(buf, 2, self.flags);
        write_u16(buf, 4, self.num_questions);
        write_u16(buf, 6, self.num_answers);
        write_u16(buf, 8, self.num_authorities);
        write_u16(buf, 10, self.num_additionals);
    }

    pub fn to_bytes(&self) -> [u8; DNS_HEADER_SIZE] {
        let mut bytes = [0; DNS_HEADER_SIZE];
        self.write_to(&mut bytes);
        bytes
    }
}

impl TryFrom<&[u8]> for DNSHeader {
    type Error = DnsError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() < DNS_HEADER_SIZE {
            return Err(DnsError::BufferTooShort {
                expected: DNS_HEADER_SIZE,
                actual: value.len(),
            });
        }

        // Each of the 6 fields is a 2-byte integer, so there are 12 bytes in all to read.
        Ok(DNSHeader {
            id: read_u16(value, 0),
            flags: read_u16(value, 2),
            num_questions: read_u16(value, 4),
            num_answers: read_u16(value, 6),
            num_authorities: read_u16(value, 8),
            num_additionals: read_u16(value, 10),
        })
    }
}
