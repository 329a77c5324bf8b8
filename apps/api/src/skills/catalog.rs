use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

/// On-disk shape of `skills.json`: either a bare array or `{"skills": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkillsFile {
    Bare(Vec<String>),
    Wrapped { skills: Vec<String> },
}

impl SkillsFile {
    fn into_skills(self) -> Vec<String> {
        match self {
            SkillsFile::Bare(skills) | SkillsFile::Wrapped { skills } => skills,
        }
    }
}

/// The fixed vocabulary of recognized skills.
///
/// Built once at startup and never mutated. Clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct SkillList(Arc<[String]>);

impl SkillList {
    /// Builds a list from raw entries, dropping blanks and exact duplicates (first wins).
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.trim().is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        SkillList(skills.into())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: SkillsFile = serde_json::from_str(raw)
            .context("skills file must be a JSON array of strings or {\"skills\": [...]}")?;
        let entries = file.into_skills();
        let total = entries.len();
        let list = Self::new(entries);
        if list.len() < total {
            warn!(
                "Dropped {} blank or duplicate skill entries",
                total - list.len()
            );
        }
        Ok(list)
    }

    /// Reads and parses the skill catalog at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file '{}'", path.display()))?;
        let list = Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse skills file '{}'", path.display()))?;
        info!("Loaded {} skills from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_bare_array() {
        let list = SkillList::from_json_str(r#"["Python", "SQL", "Docker"]"#).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_parses_wrapped_object() {
        let list = SkillList::from_json_str(r#"{"skills": ["Rust", "Go"]}"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().next(), Some("Rust"));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(SkillList::from_json_str(r#"{"keywords": ["Rust"]}"#).is_err());
        assert!(SkillList::from_json_str(r#"[1, 2, 3]"#).is_err());
        assert!(SkillList::from_json_str("not json").is_err());
    }

    #[test]
    fn test_drops_blank_and_duplicate_entries() {
        let list = SkillList::new(["SQL", "", "  ", "SQL", "sql"]);
        // Case variants are distinct entries; only exact repeats collapse.
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["SQL", "sql"]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let list = SkillList::from_json_str("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"skills": ["Kubernetes", "Terraform"]}}"#).unwrap();

        let list = SkillList::load(file.path()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = SkillList::load(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }

    #[test]
    fn test_clones_share_storage() {
        let list = SkillList::new(["Rust"]);
        let clone = list.clone();
        assert!(Arc::ptr_eq(&list.0, &clone.0));
    }
}
