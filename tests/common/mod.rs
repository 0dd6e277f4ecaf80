/*!
 * Common test utilities for the yakugo test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use yakugo::glossary::{Definition, Term};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A minimal term: headword plus a single definition
pub fn make_term(id: &str, name: &str) -> Term {
    Term {
        id: id.to_string(),
        name: name.to_string(),
        aliases: None,
        definitions: vec![Definition {
            text: format!("definition of {}", name),
            reference: None,
        }],
        related_terms: None,
        example: None,
        note: None,
    }
}

/// A term exercising every optional field
pub fn make_full_term(id: &str, name: &str) -> Term {
    Term {
        id: id.to_string(),
        name: name.to_string(),
        aliases: Some(vec![format!("{} alias", name)]),
        definitions: vec![Definition {
            text: format!("definition of {}", name),
            reference: Some("ISO/IEC 2382".to_string()),
        }],
        related_terms: Some(vec!["program".to_string(), "data".to_string()]),
        example: Some(format!("an example using {}", name)),
        note: Some(format!("a note about {}", name)),
    }
}

/// A term with several definitions
pub fn make_multi_definition_term(id: &str, name: &str, definition_count: usize) -> Term {
    Term {
        id: id.to_string(),
        name: name.to_string(),
        aliases: None,
        definitions: (1..=definition_count)
            .map(|i| Definition {
                text: format!("definition {} of {}", i, name),
                reference: None,
            })
            .collect(),
        related_terms: None,
        example: None,
        note: None,
    }
}
