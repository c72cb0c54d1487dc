//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use codegraph_triage::TriageConfig;

use crate::assertion::{TriageExpectation, ValidationExpectation};
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::Fixture;
use crate::runner::Runner;

/// One check run against the fixture.
#[derive(Debug)]
enum Check {
    Validate(ValidationExpectation),
    Triage {
        config: TriageConfig,
        use_label_map: bool,
        expect: TriageExpectation,
    },
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the fixture file, relative to the base path.
    fixture_path: Option<PathBuf>,
    /// Inline fixture.
    fixture: Option<Fixture>,
    checks: Vec<Check>,
    /// Directory relative fixture paths resolve against.
    base_path: PathBuf,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture_path: None,
            fixture: None,
            checks: Vec::new(),
            base_path: fixtures_root(),
        }
    }

    /// Set the fixture file path (relative to fixtures/).
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture_path = Some(path.into());
        self
    }

    /// Use an inline fixture.
    pub fn fixture_source(mut self, source: &str) -> ScenarioResult<Self> {
        self.fixture = Some(Fixture::parse(source)?);
        Ok(self)
    }

    /// Validate the fixture.
    pub fn validate<F>(mut self, expect: F) -> Self
    where
        F: FnOnce(ValidationExpectation) -> ValidationExpectation,
    {
        self.checks
            .push(Check::Validate(expect(ValidationExpectation::new())));
        self
    }

    /// Triage the fixture with the label map applied.
    pub fn triage<C, F>(self, config: C, expect: F) -> Self
    where
        C: FnOnce(TriageConfig) -> TriageConfig,
        F: FnOnce(TriageExpectation) -> TriageExpectation,
    {
        self.push_triage(config, expect, true)
    }

    /// Triage the fixture ignoring the label map.
    pub fn triage_without_label_map<C, F>(self, config: C, expect: F) -> Self
    where
        C: FnOnce(TriageConfig) -> TriageConfig,
        F: FnOnce(TriageExpectation) -> TriageExpectation,
    {
        self.push_triage(config, expect, false)
    }

    fn push_triage<C, F>(mut self, config: C, expect: F, use_label_map: bool) -> Self
    where
        C: FnOnce(TriageConfig) -> TriageConfig,
        F: FnOnce(TriageExpectation) -> TriageExpectation,
    {
        self.checks.push(Check::Triage {
            config: config(TriageConfig::new()),
            use_label_map,
            expect: expect(TriageExpectation::new()),
        });
        self
    }

    fn load_fixture(&self) -> ScenarioResult<Fixture> {
        if let Some(fixture) = &self.fixture {
            return Ok(fixture.clone());
        }
        match &self.fixture_path {
            Some(path) => Fixture::load(&self.resolve_path(path)),
            None => Err(ScenarioError::missing_fixture(&self.name)),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Run every check in order, stopping at the first failure.
    pub fn run(&self) -> ScenarioResult<()> {
        let runner = Runner::new(&self.load_fixture()?)?;
        for check in &self.checks {
            match check {
                Check::Validate(expect) => expect.verify(&runner.validate())?,
                Check::Triage {
                    config,
                    use_label_map,
                    expect,
                } => expect.verify(&runner.triage(config, *use_label_map))?,
            }
        }
        Ok(())
    }
}

/// The fixtures directory of this crate.
fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_without_fixture_fails() {
        let err = Scenario::new("nothing").run().unwrap_err();

        assert!(matches!(err, ScenarioError::MissingFixture { .. }));
    }

    #[test]
    fn test_inline_scenario() {
        Scenario::new("inline")
            .fixture_source(
                "--# 00_schema.md\n--# 01_nodes.md\n--# 02_edges.md\n",
            )
            .unwrap()
            .validate(|e| e.ok(0, 0))
            .triage(|c| c, |e| e.empty())
            .run()
            .unwrap();
    }
}
