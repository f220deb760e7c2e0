//! JSON interchange for issue sets.
//!
//! The store itself never touches a file; this is the loader the CLI uses
//! to construct records and write query results back out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Issue;

/// Loads an issue set from a JSON file. A missing file is an empty set.
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    if !path.exists() {
        debug!(path = %path.display(), "issue file missing, starting empty");
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let issues: Vec<Issue> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(count = issues.len(), "loaded issues");
    Ok(issues)
}

pub fn save_issues(path: &Path, issues: &[Issue]) -> Result<()> {
    let raw = serde_json::to_string_pretty(issues)?;
    fs::write(path, raw).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(count = issues.len(), "saved issues");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn issue(id: i64, name: &str) -> Issue {
        Issue {
            id,
            name: name.to_string(),
            age_days: 10,
            author: "A1".to_string(),
            labels: ["L1".to_string(), "L2".to_string()].into_iter().collect(),
            project: "P1".to_string(),
            milestone: "M1".to_string(),
            assignee: "As1".to_string(),
            open: true,
        }
    }

    #[test]
    fn test_missing_file_is_empty_set() {
        let dir = tempdir().unwrap();
        let issues = load_issues(&dir.path().join("absent.json")).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("issues.json");
        let issues = vec![issue(1, "first"), issue(2, "second")];

        save_issues(&path, &issues).unwrap();
        assert_eq!(load_issues(&path).unwrap(), issues);
    }

    #[test]
    fn test_save_overwrites_previous_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("issues.json");

        save_issues(&path, &[issue(1, "first"), issue(2, "second")]).unwrap();
        save_issues(&path, &[issue(3, "third")]).unwrap();

        let loaded = load_issues(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 3);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("issues.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load_issues(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
