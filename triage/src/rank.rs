//! Triage ranking.

use codegraph_core::NodeId;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::config::TriageConfig;
use crate::stats::FuncStats;

/// Composite ranking key, compared field by field in declaration order.
///
/// Ranking sorts descending on the whole key, identifier included, so among
/// functions with equal statistics the greater identifier comes first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    pub value_edges: usize,
    pub asset_count: usize,
    pub call_edges: usize,
    pub writes: usize,
    pub reads: usize,
    pub func: NodeId,
}

impl RankKey {
    pub fn new(func: &NodeId, stats: &FuncStats) -> Self {
        Self {
            value_edges: stats.value_edges,
            asset_count: stats.assets.len(),
            call_edges: stats.call_edges,
            writes: stats.writes,
            reads: stats.reads,
            func: func.clone(),
        }
    }
}

/// One ranked function with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedFunction {
    pub func: NodeId,
    pub value_edges: usize,
    pub assets: Vec<String>,
    pub calls: usize,
    pub writes: usize,
    pub reads: usize,
    pub roles: Vec<String>,
}

impl RankedFunction {
    fn new(func: NodeId, stats: FuncStats) -> Self {
        Self {
            func,
            value_edges: stats.value_edges,
            assets: stats.assets.into_iter().collect(),
            calls: stats.call_edges,
            writes: stats.writes,
            reads: stats.reads,
            roles: stats.roles.into_iter().collect(),
        }
    }
}

/// Filter, order and cap function statistics.
pub fn rank(stats: BTreeMap<NodeId, FuncStats>, config: &TriageConfig) -> Vec<RankedFunction> {
    let mut ranked: Vec<(RankKey, NodeId, FuncStats)> = stats
        .into_iter()
        .filter(|(func, stats)| {
            let keep = !config.permissionless_only || stats.is_permissionless();
            if !keep {
                log::trace!("triage: {func} requires a role, skipped");
            }
            keep
        })
        .map(|(func, stats)| (RankKey::new(&func, &stats), func, stats))
        .collect();

    ranked.sort_by(|(a, ..), (b, ..)| Reverse(a).cmp(&Reverse(b)));
    ranked.truncate(config.limit);

    ranked
        .into_iter()
        .map(|(_, func, stats)| RankedFunction::new(func, stats))
        .collect()
}
