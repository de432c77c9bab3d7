pub const UDP_DNS_MESSAGE_SIZE: usize = 512;
pub const DNS_HEADER_SIZE: usize = 12;
// type + class following the question name
pub const DNS_QUESTION_SIZE: usize = 4;
// https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_NAME_LENGTH: usize = 255;
// The top two bits of a length byte mark a pointer or an extended label type.
pub const LABEL_TYPE_MASK: u8 = 0b1100_0000;
// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
pub const RECURSION_DESIRED: u16 = 1 << 8;
pub const OPCODE_QUERY: u8 = 0;
