//! Command line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use codegraph_parser::layout::DEFAULT_DIR;
use codegraph_triage::{parse_label_list, TriageConfig, TriageLabels};

#[derive(Parser, Debug)]
#[command(name = "codegraph", version)]
#[command(about = "Validate and triage a layered codegraph SSOT (schema/nodes/edges).", long_about = None)]
pub struct Cli {
    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate nodes and edges against the schema.
    Validate(ValidateArgs),
    /// Rank functions by value-touch and privilege signals.
    Triage(TriageArgs),
    /// Scaffold an investigation workspace. Existing files are never touched.
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the codegraph directory.
    #[arg(default_value = DEFAULT_DIR)]
    pub codegraph_dir: PathBuf,

    /// Print the result as JSON on stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TriageArgs {
    /// Path to the codegraph directory.
    #[arg(default_value = DEFAULT_DIR)]
    pub codegraph_dir: PathBuf,

    /// Max functions to print.
    #[arg(long, default_value_t = codegraph_triage::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Only include funcs with no explicit role requirement edges.
    #[arg(long, default_value_t = false)]
    pub permissionless_only: bool,

    /// Ignore any label map in 00_schema.md (use the given canonical names).
    #[arg(long, default_value_t = false)]
    pub no_label_map: bool,

    /// Node type prefix for function nodes.
    #[arg(long, default_value = codegraph_triage::DEFAULT_FUNC_TYPE)]
    pub func_type: String,

    /// Node type prefix for asset nodes.
    #[arg(long, default_value = codegraph_triage::DEFAULT_ASSET_TYPE)]
    pub asset_type: String,

    /// Comma-separated edge types to treat as value-touch signals.
    #[arg(long, default_value = codegraph_triage::DEFAULT_VALUE_EDGES)]
    pub value_edges: String,

    /// Comma-separated edge types to treat as call signals.
    #[arg(long, default_value = codegraph_triage::DEFAULT_CALL_EDGES)]
    pub call_edges: String,

    /// Edge type representing reads.
    #[arg(long, default_value = codegraph_triage::DEFAULT_READS_EDGE)]
    pub reads_edge: String,

    /// Edge type representing writes.
    #[arg(long, default_value = codegraph_triage::DEFAULT_WRITES_EDGE)]
    pub writes_edge: String,

    /// Edge type representing explicit privilege requirements.
    #[arg(long, default_value = codegraph_triage::DEFAULT_ROLE_EDGE)]
    pub role_edge: String,

    /// Print the ranked entries as JSON on stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl TriageArgs {
    /// Arguments with every option at its default.
    pub fn new(codegraph_dir: impl Into<PathBuf>) -> Self {
        let labels = TriageLabels::default();
        Self {
            codegraph_dir: codegraph_dir.into(),
            limit: codegraph_triage::DEFAULT_LIMIT,
            permissionless_only: false,
            no_label_map: false,
            func_type: labels.func_type,
            asset_type: labels.asset_type,
            value_edges: codegraph_triage::DEFAULT_VALUE_EDGES.to_string(),
            call_edges: codegraph_triage::DEFAULT_CALL_EDGES.to_string(),
            reads_edge: labels.reads_edge,
            writes_edge: labels.writes_edge,
            role_edge: labels.role_edge,
            json: false,
        }
    }

    /// Labels as given on the command line, before label map resolution.
    pub fn labels(&self) -> TriageLabels {
        TriageLabels::new()
            .with_func_type(&self.func_type)
            .with_asset_type(&self.asset_type)
            .with_value_edges(parse_label_list(&self.value_edges))
            .with_call_edges(parse_label_list(&self.call_edges))
            .with_reads_edge(&self.reads_edge)
            .with_writes_edge(&self.writes_edge)
            .with_role_edge(&self.role_edge)
    }

    /// Run options, with `labels` already resolved.
    pub fn config(&self, labels: TriageLabels) -> TriageConfig {
        TriageConfig::new()
            .with_limit(self.limit)
            .permissionless_only(self.permissionless_only)
            .with_labels(labels)
    }
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Workspace root. Files are created only if missing.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}
