//! Property-based tests validating the parsers against their grammars.
//!
//! These tests generate random inputs that satisfy each grammar and verify
//! the parser accepts them, decomposes them as generated, and accepts its
//! own stored text again.

use std::net::{Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;

use netsyntax::{
    Cidr, Domain, EmailAddress, IpAddress, LuhnNumber, NilUuid, Port, Uri, Uuid, luhn,
    MAX_DOMAIN_LENGTH, MAX_IPV4_PREFIX, MAX_IPV6_PREFIX, MAX_LABEL_LENGTH,
};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
    const LOCAL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!#$&'*+=?^_`{|}~-";
    const UNRESERVED: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~";
    const SCHEMES: &[&str] = &["http", "https", "ftp", "cap", "nfs"];

    fn text(chars: &'static [u8], len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(chars), len)
            .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
    }

    /// A label that starts with a letter and ends with a letter or digit.
    pub fn dns_label() -> impl Strategy<Value = String> {
        (
            prop::sample::select(LETTERS),
            text(LABEL_CHARS, 0..=18),
            prop::sample::select(ALPHANUMERIC),
        )
            .prop_map(|(first, middle, last)| format!("{}{middle}{}", char::from(first), char::from(last)))
    }

    /// A domain of 1 to 4 labels.
    pub fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(dns_label(), 1..=4).prop_map(|labels| labels.join("."))
    }

    pub fn ipv4() -> impl Strategy<Value = String> {
        any::<[u8; 4]>().prop_map(|octets| Ipv4Addr::from(octets).to_string())
    }

    pub fn ipv6() -> impl Strategy<Value = String> {
        any::<[u16; 8]>().prop_map(|segments| Ipv6Addr::from(segments).to_string())
    }

    /// Dot-separated atoms of simple local-part characters.
    pub fn local_part() -> impl Strategy<Value = String> {
        prop::collection::vec(text(LOCAL_CHARS, 1..=8), 1..=3).prop_map(|atoms| atoms.join("."))
    }

    pub fn email() -> impl Strategy<Value = String> {
        (local_part(), domain()).prop_map(|(local, domain)| format!("{local}@{domain}"))
    }

    pub fn path() -> impl Strategy<Value = Option<String>> {
        prop::option::of(
            prop::collection::vec(text(UNRESERVED, 0..=8), 1..=4)
                .prop_map(|segments| format!("/{}", segments.join("/"))),
        )
    }

    pub fn query() -> impl Strategy<Value = Option<String>> {
        prop::option::of(
            (text(ALPHANUMERIC, 1..=6), text(UNRESERVED, 0..=8)).prop_map(|(k, v)| format!("{k}={v}")),
        )
    }

    pub fn fragment() -> impl Strategy<Value = Option<String>> {
        prop::option::of(text(UNRESERVED, 0..=10))
    }

    /// A generic URI and the components it was built from.
    pub fn generic_uri() -> impl Strategy<Value = (String, String, Option<u16>, Option<String>, Option<String>, Option<String>)> {
        (
            prop::sample::select(SCHEMES),
            domain(),
            prop::option::of(any::<u16>()),
            path(),
            query(),
            fragment(),
        )
            .prop_map(|(scheme, host, port, path, query, fragment)| {
                let mut uri = format!("{scheme}://{host}");
                if let Some(port) = port {
                    uri.push_str(&format!(":{port}"));
                }
                if let Some(path) = &path {
                    uri.push_str(path);
                }
                if let Some(query) = &query {
                    uri.push_str(&format!("?{query}"));
                }
                if let Some(fragment) = &fragment {
                    uri.push_str(&format!("#{fragment}"));
                }
                (uri, host, port, path, query, fragment)
            })
    }

    /// Digits followed by their Luhn check digit.
    pub fn luhn_number() -> impl Strategy<Value = String> {
        text(b"0123456789", 1..=18).prop_map(|payload| {
            let sum: u32 = payload
                .bytes()
                .rev()
                .enumerate()
                .map(|(i, b)| {
                    let d = u32::from(b - b'0');
                    if i % 2 == 0 {
                        let doubled = d * 2;
                        if doubled > 9 { doubled - 9 } else { doubled }
                    } else {
                        d
                    }
                })
                .sum();
            format!("{payload}{}", (10 - sum % 10) % 10)
        })
    }
}

mod domain_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_domains_parse(d in domain()) {
            let parsed = Domain::parse(&d);
            prop_assert!(parsed.is_ok(), "failed to parse domain '{}': {:?}", d, parsed);
        }

        #[test]
        fn domain_labels_match_input(d in domain()) {
            let parsed = Domain::parse(&d).unwrap();
            let labels: Vec<&str> = d.split('.').collect();
            prop_assert_eq!(parsed.labels().collect::<Vec<_>>(), labels);
        }

        #[test]
        fn doubled_dot_is_rejected(a in dns_label(), b in dns_label()) {
            let bad = format!("{a}..{b}");
            prop_assert!(Domain::parse(&bad).is_err());
        }
    }
}

mod network_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn every_u16_is_a_port(n in any::<u16>()) {
            let port = Port::parse(&n.to_string()).unwrap();
            prop_assert_eq!(port.value(), n);
        }

        #[test]
        fn ports_above_range_fail(n in 65_536u32..10_000_000) {
            prop_assert!(Port::parse(&n.to_string()).is_err());
        }

        #[test]
        fn ip_family_dispatch(v4 in ipv4(), v6 in ipv6()) {
            prop_assert!(IpAddress::parse(&v4).unwrap().is_ipv4());
            prop_assert!(IpAddress::parse(&v6).unwrap().is_ipv6());
        }

        #[test]
        fn cidr_prefixes_within_bounds(v4 in ipv4(), v6 in ipv6(), p4 in 0..=MAX_IPV4_PREFIX, p6 in 0..=MAX_IPV6_PREFIX) {
            let block = Cidr::parse(&format!("{v4}/{p4}")).unwrap();
            prop_assert_eq!(block.prefix(), p4);
            prop_assert!(!block.is_ipv6());

            let block = Cidr::parse(&format!("{v6}/{p6}")).unwrap();
            prop_assert_eq!(block.prefix(), p6);
            prop_assert!(block.is_ipv6());
        }

        #[test]
        fn cidr_prefixes_out_of_bounds(v4 in ipv4(), p in 33u32..100_000) {
            let input = format!("{v4}/{p}");
            prop_assert!(Cidr::parse(&input).is_err());
        }

        #[test]
        fn literal_host_uris(v6 in ipv6(), port in any::<u16>()) {
            let uri = Uri::parse(&format!("http://[{v6}]:{port}/")).unwrap();
            prop_assert!(uri.host().unwrap().is_literal());
            prop_assert_eq!(uri.port().map(Port::value), Some(port));
        }
    }
}

mod identifier_tests {
    use super::strategies::*;
    use super::*;

    const DASHES: &[usize] = &[8, 13, 18, 23];

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn hyphenated_uuids_parse(bits in 1u128..) {
            let text = uuid::Uuid::from_u128(bits).hyphenated().to_string();
            let parsed = Uuid::parse(&text).unwrap();
            prop_assert_eq!(parsed.as_uuid().as_u128(), bits);

            let upper = text.to_uppercase();
            prop_assert!(Uuid::parse(&upper).is_ok());
            prop_assert!(NilUuid::parse(&text).is_err());
        }

        #[test]
        fn uuid_without_a_dash_fails(bits in 1u128.., dash in prop::sample::select(DASHES)) {
            let mut text = uuid::Uuid::from_u128(bits).hyphenated().to_string();
            text.replace_range(dash..=dash, "0");
            prop_assert!(Uuid::parse(&text).is_err());
        }

        #[test]
        fn luhn_numbers_parse(number in luhn_number()) {
            prop_assert!(luhn(&number));
            prop_assert!(LuhnNumber::parse(&number).is_ok());
        }

        #[test]
        fn wrong_check_digit_fails(number in luhn_number()) {
            let (payload, check) = number.split_at(number.len() - 1);
            let check: u32 = check.parse().unwrap();
            let wrong = format!("{payload}{}", (check + 1) % 10);
            prop_assert!(!luhn(&wrong));
        }
    }
}

mod email_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_addresses_parse(addr in email()) {
            let parsed = EmailAddress::parse(&addr);
            prop_assert!(parsed.is_ok(), "failed to parse address '{}': {:?}", addr, parsed);
        }

        #[test]
        fn address_splits_at_last_at(local in local_part(), domain in domain()) {
            let addr = EmailAddress::parse(&format!("{local}@{domain}")).unwrap();
            prop_assert_eq!(addr.local_part().as_str(), local.as_str());
            prop_assert_eq!(addr.domain().as_str(), domain.as_str());
        }

        #[test]
        fn quoted_local_parts_parse(inner in "[a-z .@,:;]{1,20}", domain in domain()) {
            let addr = format!("\"{inner}\"@{domain}");
            let parsed = EmailAddress::parse(&addr).unwrap();
            prop_assert!(parsed.local_part().has_quotes());
        }

        #[test]
        fn roundtrip_revalidates(addr in email()) {
            let parsed = EmailAddress::parse(&addr).unwrap();
            let again = EmailAddress::parse(parsed.as_str()).unwrap();
            prop_assert_eq!(parsed, again);
        }
    }
}

mod uri_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn generic_uris_decompose((uri, host, port, path, query, fragment) in generic_uri()) {
            let parsed = Uri::parse(&uri);
            prop_assert!(parsed.is_ok(), "failed to parse URI '{}': {:?}", uri, parsed);
            let parsed = parsed.unwrap();

            prop_assert_eq!(parsed.host().map(|h| h.as_str()), Some(host.as_str()));
            prop_assert_eq!(parsed.port().map(Port::value), port);
            prop_assert_eq!(parsed.path().map(|p| p.as_str()), path.as_deref());
            prop_assert_eq!(parsed.query().map(|q| q.as_str()), query.as_deref());
            prop_assert_eq!(parsed.fragment().map(|f| f.as_str()), fragment.as_deref());
        }

        #[test]
        fn parsing_is_deterministic((uri, ..) in generic_uri()) {
            prop_assert_eq!(Uri::parse(&uri), Uri::parse(&uri));
        }

        #[test]
        fn roundtrip_revalidates((uri, ..) in generic_uri()) {
            let parsed = Uri::parse(&uri).unwrap();
            let again = Uri::parse(&parsed.to_string()).unwrap();
            prop_assert_eq!(parsed, again);
        }

        #[test]
        fn mailto_embeds_address(addr in email(), subject in "[a-zA-Z0-9]{0,10}") {
            let uri = Uri::parse(&format!("mailto:{addr}?subject={subject}")).unwrap();
            prop_assert_eq!(uri.address().map(|a| a.as_str()), Some(addr.as_str()));
        }
    }
}

mod robustness_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn parsers_never_panic(s in "\\PC{0,80}") {
            let _ = Domain::parse(&s);
            let _ = EmailAddress::parse(&s);
            let _ = Uri::parse(&s);
            let _ = Cidr::parse(&s);
            let _ = Uuid::parse(&s);
            let _ = Port::parse(&s);
            let _ = netsyntax::MediaType::parse(&s);
        }

        #[test]
        fn urlish_inputs_never_panic(s in "(http|mailto|cid)://[a-z0-9@:/?#\\[\\]%.\"()]{0,40}") {
            let first = Uri::parse(&s);
            prop_assert_eq!(first, Uri::parse(&s));
        }
    }
}

mod boundary_tests {
    use super::*;

    #[test]
    fn domain_at_max_length_parses() {
        let label = "a".repeat(MAX_LABEL_LENGTH);
        let name = [label.as_str(); 4].join(".");
        assert_eq!(name.len(), MAX_DOMAIN_LENGTH);
        assert!(Domain::parse(&name).is_ok());
    }

    #[test]
    fn domain_over_max_length_fails() {
        let label = "a".repeat(MAX_LABEL_LENGTH);
        let name = format!("b{}", [label.as_str(); 4].join("."));
        assert_eq!(name.len(), MAX_DOMAIN_LENGTH + 1);
        assert!(Domain::parse(&name).is_err());
    }

    #[test]
    fn label_at_max_length_parses() {
        let name = format!("{}.example", "x".repeat(MAX_LABEL_LENGTH));
        assert!(Domain::parse(&name).is_ok());
    }

    #[test]
    fn label_over_max_length_fails() {
        let name = format!("{}.example", "x".repeat(MAX_LABEL_LENGTH + 1));
        assert!(Domain::parse(&name).is_err());
    }

    #[test]
    fn port_bounds() {
        assert!(Port::parse("0").is_ok());
        assert!(Port::parse("65535").is_ok());
        assert!(Port::parse("65536").is_err());
        assert!(Port::parse("").is_err());
        assert!(Port::parse("12a").is_err());
    }

    #[test]
    fn cidr_examples() {
        let block = Cidr::parse("192.168.0.0/24").unwrap();
        assert_eq!(block.prefix(), 24);
        assert!(!block.is_ipv6());
        assert!(Cidr::parse("::1/129").is_err());
        assert!(Cidr::parse("10.0.0.1/33").is_err());
    }

    #[test]
    fn empty_remainder_after_scheme_fails() {
        assert!(Uri::parse("foo:").is_err());
        assert!(Uri::parse("http:").is_err());
    }
}
