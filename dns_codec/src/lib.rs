pub mod class;
pub mod constants;
pub mod dns_header;
pub mod dns_message;
pub mod dns_question;
pub mod dns_record;
pub mod error;
pub mod flags;
pub mod name;
pub mod query;
pub mod record_data;
pub mod record_type;
pub mod responder;
pub mod wire;

pub use class::Class;
pub use dns_header::DNSHeader;
pub use dns_message::{DNSMessage, MessageKind, Unsupported};
pub use dns_question::DNSQuestion;
pub use dns_record::DNSRecord;
pub use error::{DnsError, Result};
pub use flags::{Flags, ResponseCode};
pub use query::build_query;
pub use record_data::RecordData;
pub use record_type::RecordType;
pub use responder::{handle_datagram, respond, Lookup, ZoneLookup};
