//! Validation scenarios.

use codegraph_tests::prelude::*;

mod conforming {
    use super::*;

    pub fn scenario() -> Scenario {
        // URL bullets are not nodes
        Scenario::new("vault").fixture("vault.cg").validate(|e| e.ok(6, 6))
    }

    #[test]
    fn test_conforming_graph_passes() {
        scenario().run().unwrap();
    }
}

mod violations {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("malformed")
            .fixture("malformed.cg")
            .validate(|e| {
                e.violations(&[
                    "node type not in schema: ROLE (ROLE:admin)",
                    "node type not in schema: ROLE (ROLE:owner)",
                    "02_edges.md:4: edge type not in schema: MINTS",
                    "02_edges.md:4: missing src node: FUNC:ghost",
                    "02_edges.md:4: missing dst node: ASSET:dai",
                    "02_edges.md:7: missing dst node: FUNC:g",
                ])
            })
    }

    #[test]
    fn test_violations_in_report_order() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_skipped_bullets_are_not_reported() {
        Scenario::new("malformed_lines")
            .fixture("malformed.cg")
            .validate(|e| e.violation_count(6).violation_matching(r"^02_edges\.md:[47]: "))
            .run()
            .unwrap();
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_graph_passes() {
        Scenario::new("empty")
            .fixture_source("--# 00_schema.md\n--# 01_nodes.md\n--# 02_edges.md\n")
            .unwrap()
            .validate(|e| e.ok(0, 0))
            .run()
            .unwrap();
    }

    #[test]
    fn test_round_trip_declared_graph() {
        Scenario::new("round_trip")
            .fixture_source(
                r#"
--# 00_schema.md
## Node Types
- FUNC
- ROLE
## Edge Types
- REQUIRES_ROLE
--# 01_nodes.md
- FUNC:pause
- ROLE:guardian
--# 02_edges.md
- REQUIRES_ROLE | FUNC:pause -> ROLE:guardian
"#,
            )
            .unwrap()
            .validate(|e| e.ok(2, 1))
            .run()
            .unwrap();
    }

    #[test]
    fn test_other_section_ends_edge_types() {
        Scenario::new("notes_section")
            .fixture_source(
                r#"
--# 00_schema.md
## Edge Types
- CALLS
## Notes
- DELEGATES
--# 01_nodes.md
--# 02_edges.md
- DELEGATES | A:x -> A:y
"#,
            )
            .unwrap()
            .validate(|e| {
                e.violation_matching("edge type not in schema: DELEGATES")
                    .violation_count(3)
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_missing_edges_document() {
        Scenario::new("missing_edges")
            .fixture_source("--# 00_schema.md\n--# 01_nodes.md\n")
            .unwrap()
            .validate(|e| e.missing_file())
            .run()
            .unwrap();
    }
}
