// Property-based tests for flow markers carried inside identifiers

use checkout_mock::flows::services::{FlowMarker, IdentifierCodec};
use checkout_mock::flows::FlowCase;
use proptest::prelude::*;

fn any_flow() -> impl Strategy<Value = FlowCase> {
    prop::sample::select(FlowCase::ALL.to_vec())
}

fn digits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Every catalog entry survives a trip through both identifier kinds
#[test]
fn test_catalog_encodes_into_both_identifiers() {
    for flow in FlowCase::ALL {
        for codec in [IdentifierCodec::rpt_id(), IdentifierCodec::transaction_id()] {
            let identifier = codec.encode(flow, flow.sub_variant());

            assert_eq!(identifier.len(), codec.layout().total_len);
            assert!(identifier.bytes().all(|b| b.is_ascii_digit()));
            assert_eq!(
                codec.decode(&identifier),
                FlowMarker::new(flow, flow.sub_variant()),
                "{} did not survive {}",
                flow,
                codec.layout().name
            );
        }
    }
}

#[test]
fn test_rpt_id_keeps_domain_prefix() {
    let rpt_id = IdentifierCodec::rpt_id().encode(FlowCase::FailCalculateFee, None);
    assert!(rpt_id.starts_with("77777777777"));
    assert_eq!(rpt_id.len(), 29);
}

proptest! {
    /// Decoding never panics, whatever the client sends
    #[test]
    fn prop_decode_total(input in ".{0,40}") {
        let _ = IdentifierCodec::rpt_id().decode(&input);
        let _ = IdentifierCodec::transaction_id().decode(&input);
    }

    /// Only the marker matters: any domain prefix and filler decode the same
    #[test]
    fn prop_rpt_id_marker_wins_over_surrounding_digits(
        flow in any_flow(),
        lead in digits(11),
        filler in digits(14),
    ) {
        let marker = format!("{:02}00", flow.code());
        let rpt_id = format!("{}{}{}", lead, marker, filler);

        prop_assert_eq!(IdentifierCodec::rpt_id().decode(&rpt_id).flow, flow);
    }

    #[test]
    fn prop_transaction_id_with_random_filler(flow in any_flow(), filler in digits(28)) {
        let variant_code = flow.sub_variant().map_or(0, |v| v.code());
        let transaction_id = format!("{:02}{:02}{}", flow.code(), variant_code, filler);

        let decoded = IdentifierCodec::transaction_id().decode(&transaction_id);
        prop_assert_eq!(decoded, FlowMarker::new(flow, flow.sub_variant()));
    }

    /// Wrong length reads as the default flow
    #[test]
    fn prop_wrong_length_is_default(flow in any_flow(), extra in 1usize..5) {
        let mut rpt_id = IdentifierCodec::rpt_id().encode(flow, None);
        rpt_id.push_str(&"9".repeat(extra));

        prop_assert_eq!(IdentifierCodec::rpt_id().decode(&rpt_id), FlowMarker::default());
    }

    /// Unknown flow codes read as the default flow
    #[test]
    fn prop_unknown_flow_code_is_default(code in 0u8..100, filler in digits(28)) {
        prop_assume!(FlowCase::from_code(code).is_none());
        let transaction_id = format!("{:02}00{}", code, filler);

        prop_assert_eq!(
            IdentifierCodec::transaction_id().decode(&transaction_id),
            FlowMarker::default()
        );
    }
}
