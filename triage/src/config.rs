//! Triage configuration.

use codegraph_registry::LabelMap;
use std::collections::BTreeSet;

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_FUNC_TYPE: &str = "FUNC";
pub const DEFAULT_ASSET_TYPE: &str = "ASSET";
pub const DEFAULT_VALUE_EDGES: &str = "TRANSFERS,MINTS,BURNS,COLLECTS_FEE";
pub const DEFAULT_CALL_EDGES: &str = "EXT_CALLS,DELEGATECALLS,STATICCALLS";
pub const DEFAULT_READS_EDGE: &str = "READS";
pub const DEFAULT_WRITES_EDGE: &str = "WRITES";
pub const DEFAULT_ROLE_EDGE: &str = "REQUIRES_ROLE";

/// Split a comma-separated label list, trimming entries and dropping empties.
pub fn parse_label_list(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Node and edge labels triage looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageLabels {
    /// Node type of function nodes.
    pub func_type: String,
    /// Node type of asset nodes.
    pub asset_type: String,
    /// Edge types that move, create or destroy value.
    pub value_edges: BTreeSet<String>,
    /// Edge types that call out.
    pub call_edges: BTreeSet<String>,
    pub reads_edge: String,
    pub writes_edge: String,
    /// Edge type naming a required role.
    pub role_edge: String,
}

impl Default for TriageLabels {
    fn default() -> Self {
        Self {
            func_type: DEFAULT_FUNC_TYPE.to_string(),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            value_edges: parse_label_list(DEFAULT_VALUE_EDGES),
            call_edges: parse_label_list(DEFAULT_CALL_EDGES),
            reads_edge: DEFAULT_READS_EDGE.to_string(),
            writes_edge: DEFAULT_WRITES_EDGE.to_string(),
            role_edge: DEFAULT_ROLE_EDGE.to_string(),
        }
    }
}

impl TriageLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_func_type(mut self, label: impl Into<String>) -> Self {
        self.func_type = label.into();
        self
    }

    pub fn with_asset_type(mut self, label: impl Into<String>) -> Self {
        self.asset_type = label.into();
        self
    }

    pub fn with_value_edges<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_edges = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_call_edges<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call_edges = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reads_edge(mut self, label: impl Into<String>) -> Self {
        self.reads_edge = label.into();
        self
    }

    pub fn with_writes_edge(mut self, label: impl Into<String>) -> Self {
        self.writes_edge = label.into();
        self
    }

    pub fn with_role_edge(mut self, label: impl Into<String>) -> Self {
        self.role_edge = label.into();
        self
    }

    /// Translate every label through the label map.
    ///
    /// Applied once, to all labels, before any graph computation.
    pub fn resolved_with(&self, map: &LabelMap) -> Self {
        let one = |label: &str| map.resolve(label).to_string();
        let set = |labels: &BTreeSet<String>| -> BTreeSet<String> {
            labels.iter().map(|l| one(l)).collect()
        };
        let resolved = Self {
            func_type: one(&self.func_type),
            asset_type: one(&self.asset_type),
            value_edges: set(&self.value_edges),
            call_edges: set(&self.call_edges),
            reads_edge: one(&self.reads_edge),
            writes_edge: one(&self.writes_edge),
            role_edge: one(&self.role_edge),
        };
        if resolved != *self {
            log::debug!("triage labels after label map: {resolved:?}");
        }
        resolved
    }
}

/// Options of one triage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    /// Maximum number of ranked entries.
    pub limit: usize,
    /// Drop functions that require any role.
    pub permissionless_only: bool,
    pub labels: TriageLabels,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            permissionless_only: false,
            labels: TriageLabels::default(),
        }
    }
}

impl TriageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn permissionless_only(mut self, enabled: bool) -> Self {
        self.permissionless_only = enabled;
        self
    }

    pub fn with_labels(mut self, labels: TriageLabels) -> Self {
        self.labels = labels;
        self
    }
}
