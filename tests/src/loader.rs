//! Loader for fixture files.
//!
//! A fixture holds a whole codegraph directory in one file. Each document
//! starts after a `--# <file name>` marker line and runs until the next
//! marker. Document text is kept verbatim so line numbers match what the
//! document would have on its own.

use std::path::Path;

use tempfile::TempDir;

use crate::error::{ScenarioError, ScenarioResult};

/// A parsed fixture file.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    /// Documents as (file name, content), in order of appearance.
    files: Vec<(String, String)>,
}

impl Fixture {
    /// Parse a fixture from a string.
    pub fn parse(source: &str) -> ScenarioResult<Self> {
        let mut files: Vec<(String, String)> = Vec::new();
        let mut current: Option<(String, String)> = None;

        for line in source.lines() {
            if let Some(suffix) = line.strip_prefix("--#") {
                if let Some(done) = current.take() {
                    files.push(done);
                }
                let name = suffix.trim().to_string();
                if name.is_empty() {
                    return Err(ScenarioError::fixture_parse(
                        "<inline>",
                        "empty file name after --#",
                    ));
                }
                if files.iter().any(|(existing, _)| *existing == name) {
                    return Err(ScenarioError::fixture_parse(
                        "<inline>",
                        format!("duplicate file {name}"),
                    ));
                }
                current = Some((name, String::new()));
            } else if let Some((_, content)) = current.as_mut() {
                content.push_str(line);
                content.push('\n');
            }
            // Lines before the first marker are fixture comments
        }

        if let Some(done) = current {
            files.push(done);
        }

        Ok(Self { files })
    }

    /// Load and parse a fixture file from disk.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ScenarioError::file(path, e))?;
        Self::parse(&source).map_err(|e| ScenarioError::fixture_parse(path, e.to_string()))
    }

    /// Write every document into a fresh temporary directory.
    pub fn materialize(&self) -> ScenarioResult<TempDir> {
        let dir = tempfile::tempdir().map_err(|e| ScenarioError::file("<tempdir>", e))?;
        for (name, content) in &self.files {
            let path = dir.path().join(name);
            std::fs::write(&path, content).map_err(|e| ScenarioError::file(&path, e))?;
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fixture() {
        let source = r#"fixture comment, ignored
--# 00_schema.md
## Node Types
- FUNC

--# 01_nodes.md
- FUNC:f
--# 02_edges.md
"#;

        let fixture = Fixture::parse(source).unwrap();

        assert_eq!(
            fixture.files,
            vec![
                ("00_schema.md".to_string(), "## Node Types\n- FUNC\n\n".to_string()),
                ("01_nodes.md".to_string(), "- FUNC:f\n".to_string()),
                ("02_edges.md".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_rejects_empty_and_duplicate_names() {
        assert!(Fixture::parse("--#\n- a\n").is_err());
        assert!(Fixture::parse("--# a.md\n--# a.md\n").is_err());
    }

    #[test]
    fn test_materialize_writes_documents() {
        let fixture = Fixture::parse("--# 01_nodes.md\n- FUNC:f\n").unwrap();

        let dir = fixture.materialize().unwrap();

        let written = std::fs::read_to_string(dir.path().join("01_nodes.md")).unwrap();
        assert_eq!(written, "- FUNC:f\n");
        assert!(!dir.path().join("02_edges.md").exists());
    }
}
