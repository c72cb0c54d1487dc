//! Triage scenarios.

use codegraph_tests::prelude::*;

mod ranking {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("vault")
            .fixture("vault.cg")
            .triage(
                |c| c,
                |e| {
                    e.report(&[
                        "# Triage (higher first)",
                        "- FUNC:withdraw | value_edges=1 assets=ASSET:usdc calls=0 writes=1 reads=0 roles=none",
                        "- FUNC:deposit | value_edges=1 assets=ASSET:usdc calls=0 writes=0 reads=1 roles=none",
                        "- FUNC:sweep | value_edges=1 assets=ASSET:usdc calls=0 writes=0 reads=0 roles=ROLE:admin",
                    ])
                },
            )
            .triage(|c| c.with_limit(1), |e| e.ranked(&["FUNC:withdraw"]))
            .triage(
                |c| c.permissionless_only(true),
                |e| e.ranked(&["FUNC:withdraw", "FUNC:deposit"]).without("FUNC:sweep"),
            )
    }

    #[test]
    fn test_vault_ranking() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_equal_statistics_rank_by_descending_identifier() {
        Scenario::new("ties")
            .fixture("ties.cg")
            .triage(
                |c| c,
                |e| e.ranked(&["FUNC:gamma", "FUNC:beta", "FUNC:alpha"]),
            )
            .triage(|c| c.with_limit(1), |e| e.ranked(&["FUNC:gamma"]))
            .run()
            .unwrap();
    }

    #[test]
    fn test_custom_value_edges() {
        // With EXT_CALLS as the only value edge, TRANSFERS counts nowhere
        Scenario::new("custom_value_edges")
            .fixture("ties.cg")
            .triage(
                |c| c.with_labels(TriageLabels::new().with_value_edges(["EXT_CALLS"])),
                |e| {
                    e.line("- FUNC:alpha | value_edges=0 assets=none calls=0 writes=0 reads=0 roles=none")
                },
            )
            .run()
            .unwrap();
    }
}

mod label_map {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("label_map")
            .fixture("label_map.cg")
            .validate(|e| e.ok(3, 3))
            .triage(
                |c| c,
                |e| {
                    e.ranked(&["FUNC:a", "FUNC:b"]).line(
                        "- FUNC:a | value_edges=0 assets=none calls=0 writes=2 reads=0 roles=none",
                    )
                },
            )
            .triage_without_label_map(|c| c, |e| e.ranked(&["FUNC:b", "FUNC:a"]))
    }

    #[test]
    fn test_label_map_translates_defaults() {
        scenario().run().unwrap();
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_malformed_bullets_contribute_nothing() {
        Scenario::new("malformed")
            .fixture("malformed.cg")
            .triage(
                |c| c,
                |e| {
                    e.report(&[
                        "# Triage (higher first)",
                        "- FUNC:f | value_edges=2 assets=ASSET:usdc calls=0 writes=0 reads=0 roles=none",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_no_functions() {
        Scenario::new("no_functions")
            .fixture_source(
                "--# 00_schema.md\n--# 01_nodes.md\n- ASSET:eth\n--# 02_edges.md\n",
            )
            .unwrap()
            .triage(|c| c, |e| e.empty())
            .run()
            .unwrap();
    }
}
