use std::fmt;

use tracing::warn;

use crate::{
    class::Class,
    constants::{DNS_HEADER_SIZE, OPCODE_QUERY, UDP_DNS_MESSAGE_SIZE},
    dns_header::DNSHeader,
    dns_question::DNSQuestion,
    dns_record::DNSRecord,
    error::{DnsError, Result},
    flags::{Flags, ResponseCode},
    record_type::RecordType,
    wire::WireReader,
};

/// Why the question section of a message was not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    QuestionCount(u16),
    Question(DnsError),
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsupported::QuestionCount(count) => {
                write!(f, "{} questions, only a single question is supported", count)
            }
            Unsupported::Question(err) => write!(f, "question section: {}", err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// Decoded from received bytes.
    Query,
    /// Built by [`DNSMessage::response`]; `answer` is `None` for a name error.
    Response { answer: Option<DNSRecord> },
}

/// A message holding at most one question.
#[derive(Debug, Clone)]
pub struct DNSMessage {
    header: DNSHeader,
    question: Option<DNSQuestion>,
    kind: MessageKind,
    unsupported: Option<Unsupported>,
    bytes: Vec<u8>,
    // offset of the answer section within `bytes`
    answers_offset: usize,
}

impl DNSMessage {
    /// Decodes a received datagram.
    ///
    /// Only a buffer too short to hold the header is an error.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = DNSHeader::try_from(data)?;
        let mut reader = WireReader::at(data, DNS_HEADER_SIZE);

        let (question, unsupported) = match header.num_questions() {
            1 => match DNSQuestion::decode(&mut reader) {
                Ok(question) => (Some(question), None),
                Err(err) => {
                    warn!(id = header.id(), error = %err, "skipping undecodable question section");
                    (None, Some(Unsupported::Question(err)))
                }
            },
            count => {
                warn!(id = header.id(), count, "unexpected number of questions");
                (None, Some(Unsupported::QuestionCount(count)))
            }
        };

        Ok(DNSMessage {
            header,
            question,
            kind: MessageKind::Query,
            unsupported,
            bytes: data.to_vec(),
            answers_offset: reader.position(),
        })
    }

    /// Builds the response to `query`.
    ///
    /// `rdata` is the zone's IPv4 address for the question, `None` on a miss.
    /// Rdata that does not parse as an address, or an answer that would push
    /// the response past 512 bytes, is treated as a miss.
    pub fn response(query: &DNSMessage, rdata: Option<&str>, ttl: u32) -> Self {
        let answer = match (&query.question, rdata) {
            (Some(question), Some(rdata)) => match DNSRecord::a_record(question, ttl, rdata) {
                Ok(record) => {
                    let len = DNS_HEADER_SIZE + question.to_bytes().len() + record.to_bytes().len();
                    if len > UDP_DNS_MESSAGE_SIZE {
                        warn!(name = %question.name(), len, "answer does not fit in a UDP message");
                        None
                    } else {
                        Some(record)
                    }
                }
                Err(err) => {
                    warn!(name = %question.name(), rdata, error = %err, "zone data is not a usable answer");
                    None
                }
            },
            _ => None,
        };

        let rcode = match answer {
            Some(_) => ResponseCode::NoError,
            None => ResponseCode::NxDomain,
        };
        let header = DNSHeader::response(
            query.header.id(),
            Flags::for_response(query.flags(), rcode),
            u16::from(query.question.is_some()),
            u16::from(answer.is_some()),
        );

        let mut bytes = header.to_bytes().to_vec();
        if let Some(question) = &query.question {
            bytes.extend(question.to_bytes());
        }
        let answers_offset = bytes.len();
        if let Some(record) = &answer {
            bytes.extend(record.to_bytes());
        }

        DNSMessage {
            header,
            question: query.question.clone(),
            kind: MessageKind::Response { answer },
            unsupported: query.unsupported.clone(),
            bytes,
            answers_offset,
        }
    }

    pub fn header(&self) -> &DNSHeader {
        &self.header
    }
    pub fn flags(&self) -> Flags {
        self.header.flags()
    }
    pub fn question(&self) -> Option<&DNSQuestion> {
        self.question.as_ref()
    }
    pub fn question_name(&self) -> Option<String> {
        self.question.as_ref().map(DNSQuestion::name)
    }
    pub fn question_type(&self) -> Option<RecordType> {
        self.question.as_ref().map(DNSQuestion::type_)
    }
    pub fn question_class(&self) -> Option<Class> {
        self.question.as_ref().map(DNSQuestion::class)
    }
    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }
    pub fn unsupported(&self) -> Option<&Unsupported> {
        self.unsupported.as_ref()
    }

    /// The answer this server put in a response.
    pub fn answer(&self) -> Option<&DNSRecord> {
        match &self.kind {
            MessageKind::Response { answer } => answer.as_ref(),
            MessageKind::Query => None,
        }
    }

    /// Parses the first answer record following the question, for messages
    /// received from another server.
    pub fn decode_answer(&self) -> Result<Option<DNSRecord>> {
        if self.question.is_none() || self.header.num_answers() == 0 {
            return Ok(None);
        }

        let mut reader = WireReader::at(&self.bytes, self.answers_offset);
        DNSRecord::parse(&mut reader).map(Some)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn classify(flags: Flags) -> &'static str {
    match (flags.qr, flags.opcode, flags.rcode) {
        (false, OPCODE_QUERY, _) => "Standard Query",
        (true, _, ResponseCode::NoError) => "Standard Response",
        (true, _, ResponseCode::NxDomain) => "Response NXDomain",
        _ => "Unexpected QR/opcode",
    }
}

impl fmt::Display for DNSMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = self.flags();

        writeln!(f, "ID: 0x{:04X}", self.header.id())?;
        writeln!(f, "Flags: 0x{:04X}", self.header.flags_word())?;
        writeln!(f, "- {}", classify(flags))?;
        if flags.rd {
            writeln!(f, "- Recursion Requested")?;
        }
        if flags.ra {
            writeln!(f, "- Recursion Available")?;
        }
        writeln!(f, "# Questions: {}", self.header.num_questions())?;
        writeln!(f, "# Answers: {}", self.header.num_answers())?;
        writeln!(f, "# Authority RRs: {}", self.header.num_authorities())?;
        writeln!(f, "# Additional RRs: {}", self.header.num_additionals())?;

        if let Some(question) = &self.question {
            writeln!(f, "Questions:")?;
            writeln!(
                f,
                "- {}, {}, {}",
                question.name(),
                question.type_(),
                question.class()
            )?;
        }
        if let Some(unsupported) = &self.unsupported {
            writeln!(f, "Unsupported: {}", unsupported)?;
        }
        if let Some(answer) = self.answer() {
            writeln!(f, "Answers:")?;
            writeln!(
                f,
                "- {}, {}, {}, {}, {}",
                answer.name(),
                answer.type_(),
                answer.class(),
                answer.ttl(),
                answer.data()
            )?;
        }

        Ok(())
    }
}
