use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Unknown(u8),
}

impl From<u8> for ResponseCode {
    fn from(value: u8) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            _ => ResponseCode::Unknown(value),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(value: ResponseCode) -> Self {
        match value {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => f.write_str("NOERROR"),
            ResponseCode::FormErr => f.write_str("FORMERR"),
            ResponseCode::ServFail => f.write_str("SERVFAIL"),
            ResponseCode::NxDomain => f.write_str("NXDOMAIN"),
            ResponseCode::NotImp => f.write_str("NOTIMP"),
            ResponseCode::Refused => f.write_str("REFUSED"),
            ResponseCode::Unknown(code) => write!(f, "RCODE{}", code),
        }
    }
}

/// Decoded flags. `opcode` and `rcode` hold 4 bits, `z` the 3 reserved bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Flags {
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: ResponseCode,
}

impl Flags {
    /// Flags of an authoritative answer to a query carrying `query` flags.
    ///
    /// Opcode and RD are copied; RA, TC and the reserved bits are cleared.
    pub fn for_response(query: Flags, rcode: ResponseCode) -> Self {
        Flags {
            qr: true,
            opcode: query.opcode,
            aa: true,
            tc: false,
            rd: query.rd,
            ra: false,
            z: 0,
            rcode,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::from(0)
    }
}

fn bit(word: u16, position: u16) -> bool {
    word >> position & 0x1 == 1
}

impl From<u16> for Flags {
    fn from(word: u16) -> Self {
        Flags {
            qr: bit(word, 15),
            opcode: (word >> 11 & 0xf) as u8,
            aa: bit(word, 10),
            tc: bit(word, 9),
            rd: bit(word, 8),
            ra: bit(word, 7),
            z: (word >> 4 & 0x7) as u8,
            rcode: ResponseCode::from((word & 0xf) as u8),
        }
    }
}

impl From<Flags> for u16 {
    fn from(flags: Flags) -> Self {
        u16::from(flags.qr) << 15
            | u16::from(flags.opcode & 0xf) << 11
            | u16::from(flags.aa) << 10
            | u16::from(flags.tc) << 9
            | u16::from(flags.rd) << 8
            | u16::from(flags.ra) << 7
            | u16::from(flags.z & 0x7) << 4
            | u16::from(u8::from(flags.rcode) & 0xf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_standard_query() {
        // RD set, as sent by dig
        let flags = Flags::from(0x0100);

        assert!(!flags.qr);
        assert_eq!(flags.opcode, 0);
        assert!(flags.rd);
        assert!(!flags.ra);
        assert_eq!(flags.rcode, ResponseCode::NoError);
    }

    #[test]
    fn test_decode_every_field() {
        let flags = Flags::from(0b1_0010_1_1_1_1_101_0011);

        assert_eq!(
            flags,
            Flags {
                qr: true,
                opcode: 2,
                aa: true,
                tc: true,
                rd: true,
                ra: true,
                z: 0b101,
                rcode: ResponseCode::NxDomain,
            }
        );
    }

    #[test]
    fn test_round_trip_every_word() {
        for word in 0..=u16::MAX {
            assert_eq!(u16::from(Flags::from(word)), word);
        }
    }

    #[test]
    fn test_response_policy() {
        let query = Flags::from(0b0_0000_0_0_1_1_111_0000);

        let found = Flags::for_response(query, ResponseCode::NoError);
        assert_eq!(u16::from(found), 0x8500);

        let missing = Flags::for_response(query, ResponseCode::NxDomain);
        assert_eq!(u16::from(missing), 0x8503);
        assert_eq!(missing.z, 0);
        assert!(!missing.ra);
    }

    #[test]
    fn test_response_copies_opcode() {
        let query = Flags::from(0x2000); // opcode 4 (NOTIFY), RD clear
        let response = Flags::for_response(query, ResponseCode::NoError);

        assert_eq!(response.opcode, 4);
        assert!(!response.rd);
        assert_eq!(u16::from(response), 0xA400);
    }
}
