//! `codegraph init`: scaffold an investigation workspace.
//!
//! Creates the codegraph documents, the analysis layer documents and the
//! ledgers under a workspace root. Additive only: an existing path is never
//! rewritten, so running it twice changes nothing.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codegraph_parser::layout::{DEFAULT_DIR, EDGES_FILE, NODES_FILE, SCHEMA_FILE};

use crate::args::InitArgs;
use crate::Exit;

const LAYERS_DIR: &str = "layers";
const DIAGRAMS_DIR: &str = "diagrams";

const SCHEMA_TEMPLATE: &str = "# Codegraph Schema (SSOT)\n\n\
## Node Types\n\n\
- \n\n\
## Edge Types\n\n\
- \n\n\
## Label Map (optional)\n\n\
- CANONICAL -> ACTUAL\n";

const NODES_TEMPLATE: &str = "# Codegraph Nodes (SSOT)\n\n- \n";

const EDGES_TEMPLATE: &str = "# Codegraph Edges (SSOT)\n\n- EDGE_TYPE | SRC -> DST | attrs...\n";

const LAYERS: [(&str, &str); 22] = [
    ("L1_repo.md", "# L1 — Repository Inventory\n"),
    ("L2_catalog.md", "# L2 — Module Catalog\n"),
    ("L3_types.md", "# L3 — Type System\n"),
    ("L4_inheritance.md", "# L4 — Inheritance + Overrides\n"),
    ("L5_external_surface.md", "# L5 — External Surface\n"),
    ("L6_deployment_topology.md", "# L6 — Deployment + Topology\n"),
    ("L7_authority.md", "# L7 — Authority\n"),
    ("L8_storage.md", "# L8 — Storage\n"),
    ("L9_function_semantics.md", "# L9 — Function Semantics\n"),
    ("L10_call_graph.md", "# L10 — Call Graph\n"),
    ("L11_value_accounting.md", "# L11 — Value + Accounting\n"),
    ("L12_external_systems.md", "# L12 — External Systems + Trust Assumptions\n"),
    ("L13_state_machine.md", "# L13 — State Machine\n"),
    ("L14_invariants.md", "# L14 — Invariants\n"),
    ("L15_attack_surface.md", "# L15 — Attack Surface (permissionless)\n"),
    ("L16_primitives.md", "# L16 — Exploit Primitives (capability-first)\n"),
    ("L17_falsifiers.md", "# L17 — Falsifiers + Proofs\n"),
    ("L18_learnings.md", "# L18 — Learnings + Mutation\n"),
    ("L19_control_plane.md", "# L19 — Control Plane Objective Map\n"),
    ("L20_approval_surface.md", "# L20 — Approval Surface Objective Map\n"),
    ("L21_ordering_model.md", "# L21 — Ordering Model\n"),
    ("L22_cycle_mining.md", "# L22 — Cycle Mining\n"),
];

const HYPOTHESIS_LEDGER: &str = "# Hypothesis Ledger\n\n\
| scenarioId | targetStateX | targetAssetsAndCustody | permissionlessPreconditions | routeSketch | evidencePointers | falsifier | status | measurableDelta | exitMeasurement | costAndCapital | capitalMinimizationPlan | whatKilledIt | newLeverLearned | nextMutation |\n\
|---|---|---|---|---|---|---|---|---|---|---|---|---|---|---|\n";

const UNKNOWNS_LEDGER: &str = "# Unknowns Ledger\n\n- \n";

const RESUME_PACK: &str = "# Resume Pack\n\n\
## Fork Metadata\n\n\
- chain:\n\
- chainId:\n\
- RPC provider:\n\
- DEV_FORK_BLOCK:\n\
- PROMOTION_FORK_BLOCK:\n\n\
## Portfolio Snapshot\n\n\
- target states X:\n\
- live hypotheses (3 per X):\n\n\
## Last 3 Falsifier Results\n\n\
- \n\n\
## Next 3 Mutations (specific)\n\n\
- \n\n\
## Missing Hard Requirements (if any)\n\n\
- \n";

const DEPLOYMENT_SNAPSHOT: &str = "# Deployment Snapshot\n\n- \n";

/// Paths created by one scaffold run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub created: Vec<PathBuf>,
}

impl ScaffoldReport {
    /// Created paths relative to the root where possible.
    pub fn relative(&self) -> impl Iterator<Item = &Path> {
        self.created
            .iter()
            .map(|p| p.strip_prefix(&self.root).unwrap_or(p.as_path()))
    }
}

fn create_dir_if_missing(path: PathBuf, report: &mut ScaffoldReport) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
        report.created.push(path);
    }
    Ok(())
}

fn write_if_missing(path: PathBuf, content: &str, report: &mut ScaffoldReport) -> io::Result<()> {
    if path.exists() {
        log::debug!("{} exists, left untouched", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    report.created.push(path);
    Ok(())
}

/// Create every missing scaffold path under `root`.
pub fn scaffold(root: &Path) -> io::Result<ScaffoldReport> {
    let mut report = ScaffoldReport {
        root: root.to_path_buf(),
        created: Vec::new(),
    };
    let codegraph = root.join(DEFAULT_DIR);
    let layers = codegraph.join(LAYERS_DIR);

    create_dir_if_missing(codegraph.clone(), &mut report)?;
    create_dir_if_missing(layers.clone(), &mut report)?;
    create_dir_if_missing(codegraph.join(DIAGRAMS_DIR), &mut report)?;

    write_if_missing(codegraph.join(SCHEMA_FILE), SCHEMA_TEMPLATE, &mut report)?;
    write_if_missing(codegraph.join(NODES_FILE), NODES_TEMPLATE, &mut report)?;
    write_if_missing(codegraph.join(EDGES_FILE), EDGES_TEMPLATE, &mut report)?;

    for (file, header) in LAYERS {
        write_if_missing(layers.join(file), header, &mut report)?;
    }

    write_if_missing(root.join("hypothesis_ledger.md"), HYPOTHESIS_LEDGER, &mut report)?;
    write_if_missing(root.join("unknowns.md"), UNKNOWNS_LEDGER, &mut report)?;
    write_if_missing(root.join("resume_pack.md"), RESUME_PACK, &mut report)?;
    write_if_missing(
        root.join("deployment_snapshot.md"),
        DEPLOYMENT_SNAPSHOT,
        &mut report,
    )?;

    Ok(report)
}

pub fn run(args: &InitArgs, out: &mut dyn Write) -> Result<Exit> {
    let root = std::path::absolute(&args.path)
        .with_context(|| format!("invalid workspace path {}", args.path.display()))?;
    let report = scaffold(&root)
        .with_context(|| format!("failed to scaffold workspace at {}", root.display()))?;

    if report.created.is_empty() {
        writeln!(out, "No changes (all scaffold files already exist).")?;
        return Ok(Exit::Ok);
    }

    writeln!(out, "Scaffold created:")?;
    for path in report.relative() {
        writeln!(out, "- {}", path.display())?;
    }
    Ok(Exit::Ok)
}
