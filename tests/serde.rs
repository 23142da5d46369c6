//! JSON round-trips for the `serde` feature.

use netsyntax::{Cidr, Domain, EmailAddress, MediaType, Port, Uri, Uuid, Visa};

#[test]
fn entities_serialize_as_strings() {
    let addr = EmailAddress::parse("user@example.com").unwrap();
    assert_eq!(serde_json::to_string(&addr).unwrap(), "\"user@example.com\"");

    let uri = Uri::parse("https://example.com/a?b#c").unwrap();
    assert_eq!(serde_json::to_string(&uri).unwrap(), "\"https://example.com/a?b#c\"");
}

#[test]
fn port_serializes_as_number() {
    let port = Port::new(8080);
    assert_eq!(serde_json::to_string(&port).unwrap(), "8080");
    let back: Port = serde_json::from_str("443").unwrap();
    assert_eq!(back.value(), 443);
}

#[test]
fn deserialize_runs_the_grammar() {
    let domain: Domain = serde_json::from_str("\"example.com\"").unwrap();
    assert_eq!(domain.labels().count(), 2);

    let err = serde_json::from_str::<Domain>("\"example..com\"").unwrap_err();
    assert!(err.to_string().contains("invalid sequence"));

    assert!(serde_json::from_str::<Cidr>("\"10.0.0.0/33\"").is_err());
    assert!(serde_json::from_str::<Uuid>("\"00000000-0000-0000-0000-000000000000\"").is_err());
}

#[test]
fn roundtrip_in_a_struct() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Record {
        contact: EmailAddress,
        homepage: Uri,
        kind: MediaType,
        card: Visa,
    }

    let json = r#"{
        "contact": "\"john..doe\"@example.com",
        "homepage": "http://[::1]:8080/",
        "kind": "application/vnd.api+json; charset=utf-8",
        "card": "4111111111111111"
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert!(record.contact.local_part().has_quotes());
    assert_eq!(record.homepage.port().map(Port::value), Some(8080));
    assert_eq!(record.kind.suffix(), Some("json"));

    let again: Record = serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
    assert_eq!(again.contact, record.contact);
    assert_eq!(again.card.as_str(), "4111111111111111");
}
