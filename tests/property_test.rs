use mgraph::{Dialect, parse, parse_as};
use proptest::prelude::*;

fn header() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("graph TD"),
        Just("flowchart LR"),
        Just("sequenceDiagram"),
        Just("gantt"),
        Just("classDiagram"),
        Just("stateDiagram-v2"),
    ]
}

/// Lines built from the characters the dialects care about.
fn diagram() -> impl Strategy<Value = String> {
    (
        header(),
        prop::collection::vec("[A-Za-z0-9_ \\[\\]{}()<>|:*+#~,.=>-]{0,24}", 0..12),
    )
        .prop_map(|(header, lines)| {
            let mut text = header.to_string();
            for line in lines {
                text.push('\n');
                text.push_str(&line);
            }
            text
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_parse_is_total_on_arbitrary_text(input in ".{0,256}") {
        let graph = parse(&input);
        prop_assert!(graph.to_json(false).is_ok());
    }

    #[test]
    fn prop_edge_endpoints_resolve(input in diagram()) {
        for dialect in Dialect::ALL {
            let graph = parse_as(&input, dialect);
            for edge in &graph.edges {
                prop_assert!(graph.node(&edge.source).is_some(), "{dialect}: missing {}", edge.source);
                prop_assert!(graph.node(&edge.target).is_some(), "{dialect}: missing {}", edge.target);
            }
        }
    }

    #[test]
    fn prop_node_ids_are_unique(input in diagram()) {
        let graph = parse(&input);
        let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn prop_parse_is_deterministic(input in diagram()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }
}
