//! Report lines shared by the command surface.
//!
//! Downstream readers parse these reports, so the exact text is fixed here.

/// First line of a successful validation.
pub const VALIDATION_OK: &str = "codegraph validation: OK";

/// First line of a failed validation.
pub const VALIDATION_FAIL: &str = "codegraph validation: FAIL";

/// Header line of the triage report.
pub const TRIAGE_HEADER: &str = "# Triage (higher first)";

/// Printed instead of entries when no function qualifies for triage.
pub const TRIAGE_EMPTY: &str = "- (no FUNC nodes found in SSOT; triage requires FUNC nodes + value edges like TRANSFERS/MINTS/BURNS/COLLECTS_FEE)";

/// Placeholder for an empty label list in a triage entry.
pub const NONE_MARKER: &str = "none";
