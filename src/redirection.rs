//! Redirection rules loaded at startup.
//!
//! The rules file holds one `source,destination` pair per line. Blank lines
//! are skipped and a later rule for the same source replaces an earlier one.
//! Sources are matched without their leading `/`, so `aboutus.html` and
//! `/aboutus.html` name the same resource.

use indexmap::IndexMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Rule written when no rules file exists yet.
pub const DEFAULT_RULE: &str = "aboutus.html,aboutus2.html";

#[derive(Debug, Error)]
pub enum RedirectionError {
    #[error("failed to access redirection rules: {0}")]
    Io(#[from] io::Error),

    #[error("malformed redirection rule on line {line}: {content:?}")]
    MalformedRule { line: usize, content: String },
}

#[derive(Debug, Clone, Default)]
pub struct RedirectionTable {
    rules: IndexMap<String, String>,
}

impl RedirectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, RedirectionError> {
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        tracing::info!(path = %path.display(), rules = table.len(), "loaded redirection rules");
        Ok(table)
    }

    pub fn parse(content: &str) -> Result<Self, RedirectionError> {
        let mut table = Self::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let malformed = || RedirectionError::MalformedRule {
                line: i + 1,
                content: line.to_string(),
            };

            let (source, destination) = line.split_once(',').ok_or_else(malformed)?;
            let (source, destination) = (source.trim(), destination.trim());
            if source.is_empty() || destination.is_empty() {
                return Err(malformed());
            }

            table.insert(source, destination);
        }

        Ok(table)
    }

    pub fn insert(&mut self, source: &str, destination: &str) {
        self.rules
            .insert(normalize(source).to_string(), destination.to_string());
    }

    /// Destination for a target resource, as written in the rules file.
    pub fn lookup(&self, target: &str) -> Option<&str> {
        self.rules.get(normalize(target)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn normalize(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Creates the rules file with [`DEFAULT_RULE`] unless it already exists.
///
/// Returns `true` when the file was created.
pub fn ensure_rules_file(path: &Path) -> Result<bool, RedirectionError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            tracing::info!(path = %path.display(), "redirection rules file already exists");
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    writeln!(file, "{DEFAULT_RULE}")?;
    tracing::info!(path = %path.display(), "created redirection rules file");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_and_skips_blank_lines() {
        let table = RedirectionTable::parse("aboutus.html,aboutus2.html\r\n\r\n  /old , /new  \n").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/aboutus.html"), Some("aboutus2.html"));
        assert_eq!(table.lookup("old"), Some("/new"));
        assert_eq!(table.lookup("/missing.html"), None);
    }

    #[test]
    fn later_rule_replaces_earlier() {
        let table = RedirectionTable::parse("a.html,b.html\n/a.html,c.html\n").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("/a.html"), Some("c.html"));
    }

    #[test]
    fn rejects_rule_without_comma() {
        let err = RedirectionTable::parse("a.html,b.html\nbroken\n").unwrap_err();
        assert!(matches!(err, RedirectionError::MalformedRule { line: 2, .. }));
    }

    #[test]
    fn rejects_rule_with_empty_side() {
        assert!(RedirectionTable::parse(",b.html").is_err());
        assert!(RedirectionTable::parse("a.html, ").is_err());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = RedirectionTable::parse("About.html,b.html").unwrap();
        assert_eq!(table.lookup("/about.html"), None);
    }

    #[test]
    fn creates_rules_file_only_once() {
        let path = std::env::temp_dir().join(format!("redirnet-rules-{}.txt", std::process::id()));
        let _ = fs::remove_file(&path);

        assert!(ensure_rules_file(&path).unwrap());
        fs::write(&path, "x.html,y.html\n").unwrap();
        assert!(!ensure_rules_file(&path).unwrap());

        let table = RedirectionTable::load(&path).unwrap();
        assert_eq!(table.lookup("/x.html"), Some("y.html"));
        assert_eq!(table.lookup("/aboutus.html"), None);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn default_rule_round_trips_through_file() {
        let path =
            std::env::temp_dir().join(format!("redirnet-default-{}.txt", std::process::id()));
        let _ = fs::remove_file(&path);

        ensure_rules_file(&path).unwrap();
        let table = RedirectionTable::load(&path).unwrap();
        assert_eq!(table.lookup("/aboutus.html"), Some("aboutus2.html"));

        fs::remove_file(&path).unwrap();
    }
}
