use std::net::Ipv4Addr;

use dns_codec::{
    constants::RECURSION_DESIRED, name, Class, DNSHeader, DNSMessage, Flags, MessageKind,
    RecordType, ResponseCode, Unsupported,
};

fn query(name: &str) -> DNSMessage {
    let bytes = dns_codec::build_query(name, RecordType::A, RECURSION_DESIRED).unwrap();
    DNSMessage::from_bytes(&bytes).unwrap()
}

#[test]
fn test_found_answer_on_the_wire() {
    let query = query("foo.example.com");
    let response = DNSMessage::response(&query, Some("10.0.0.1"), 300);
    let bytes = response.as_bytes();

    let header = DNSHeader::try_from(bytes).unwrap();
    let flags = Flags::from(header.flags_word());
    assert!(flags.qr);
    assert!(flags.aa);
    assert_eq!(flags.rcode, ResponseCode::NoError);
    assert_eq!(header.num_answers(), 1);

    // header, echoed question, then NAME TYPE CLASS TTL RDLENGTH RDATA
    let (answer_name, next) = name::decode_name_at(bytes, query.len()).unwrap();
    assert_eq!(answer_name, "foo.example.com");
    assert_eq!(
        &bytes[next..],
        &[0, 1, 0, 1, 0, 0, 1, 44, 0, 4, 10, 0, 0, 1]
    );
}

#[test]
fn test_missing_name_echoes_question() {
    let query = query("absent.example.com");
    let response = DNSMessage::response(&query, None, 300);

    assert_eq!(response.flags().rcode, ResponseCode::NxDomain);
    assert_eq!(response.header().num_answers(), 0);
    assert_eq!(&response.as_bytes()[12..], &query.as_bytes()[12..]);
}

#[test]
fn test_response_decodes_as_consistent_message() {
    let query = query("www.example.net");
    let response = DNSMessage::response(&query, Some("192.0.2.44"), 3600);
    let decoded = DNSMessage::from_bytes(response.as_bytes()).unwrap();

    assert_eq!(decoded.kind(), &MessageKind::Query);
    assert_eq!(decoded.header(), response.header());
    assert_eq!(decoded.question(), query.question());
    let rendered = response.to_string();
    let (without_answer, _) = rendered.split_once("Answers:\n").unwrap();
    assert_eq!(decoded.to_string(), without_answer);

    let answer = decoded.decode_answer().unwrap().unwrap();
    assert_eq!(answer.data().as_a(), Some(&Ipv4Addr::new(192, 0, 2, 44)));
    assert_eq!(answer.ttl(), 3600);
    assert_eq!(Some(&answer), response.answer());
}

#[test]
fn test_query_name_bytes_are_echoed() {
    // mixed case and a byte outside printable ASCII survive unchanged
    let mut bytes = vec![0x42, 0x42, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0];
    bytes.extend_from_slice(&[3, b'F', 0xe9, b'o', 3, b'C', b'o', b'M', 0, 0, 1, 0, 1]);
    let query = DNSMessage::from_bytes(&bytes).unwrap();

    assert_eq!(query.question_name().as_deref(), Some("F\u{e9}o.CoM"));

    let response = DNSMessage::response(&query, None, 60);
    assert_eq!(&response.as_bytes()[12..], &bytes[12..]);
}

#[test]
fn test_multiple_questions_do_not_panic() {
    let mut bytes = vec![0, 9, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0];
    for _ in 0..2 {
        bytes.extend(name::encode_name("foo.example.com").unwrap());
        bytes.extend_from_slice(&[0, 1, 0, 1]);
    }
    let query = DNSMessage::from_bytes(&bytes).unwrap();

    assert_eq!(query.unsupported(), Some(&Unsupported::QuestionCount(2)));
    assert_eq!(query.question_name(), None);
    assert_eq!(query.header().id(), 9);
    assert!(query.flags().rd);

    let response = DNSMessage::response(&query, None, 0);
    assert_eq!(response.flags().rcode, ResponseCode::NxDomain);
    assert_eq!(response.len(), 12);
    assert!(response.to_string().contains("Unsupported: 2 questions"));
}

#[test]
fn test_truncated_question_is_unsupported() {
    let mut bytes = vec![0, 9, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0];
    bytes.extend_from_slice(&[3, b'f', b'o', b'o', 0, 0, 1]);
    let query = DNSMessage::from_bytes(&bytes).unwrap();

    assert!(matches!(
        query.unsupported(),
        Some(Unsupported::Question(dns_codec::DnsError::UnexpectedEof { .. }))
    ));
    assert_eq!(query.question_class(), None::<Class>);
}
