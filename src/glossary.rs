/*!
 * Glossary dataset handling.
 *
 * This module contains the value types for glossary terms and their
 * translated counterparts, along with dataset loading/saving and the
 * source-content digest used for checkpoint staleness detection.
 */

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::Path;

use crate::file_utils::FileManager;

/// A single definition within a glossary term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition text
    pub text: String,

    /// Source reference for the definition, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A glossary entry in the source dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Unique, stable identifier (a dotted clause number)
    pub id: String,

    /// The headword
    pub name: String,

    /// Alternative names, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    /// Definitions; at least one entry
    pub definitions: Vec<Definition>,

    /// Cross-referenced terms ("confer"), if any
    #[serde(rename = "relatedTerms", skip_serializing_if = "Option::is_none")]
    pub related_terms: Option<Vec<String>>,

    /// Usage example, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Editorial note, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Term {
    /// Digest of all translatable content, used to detect checkpoint
    /// entries that no longer match the current dataset.
    pub fn source_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.id.as_bytes());
        hasher.update([0x1f]);
        hasher.update(self.name.as_bytes());
        for alias in self.aliases.iter().flatten() {
            hasher.update([0x1f]);
            hasher.update(alias.as_bytes());
        }
        for definition in &self.definitions {
            hasher.update([0x1f]);
            hasher.update(definition.text.as_bytes());
        }
        for related in self.related_terms.iter().flatten() {
            hasher.update([0x1f]);
            hasher.update(related.as_bytes());
        }
        if let Some(example) = &self.example {
            hasher.update([0x1f]);
            hasher.update(example.as_bytes());
        }
        if let Some(note) = &self.note {
            hasher.update([0x1f]);
            hasher.update(note.as_bytes());
        }
        let digest = hasher.finalize();
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// A definition together with its Japanese translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedDefinition {
    /// Original definition text
    pub text: String,

    /// Translated definition text
    pub text_ja: String,

    /// Source reference, carried over unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A glossary entry with Japanese counterparts for every translatable field.
///
/// Structural parallelism invariant: every optional `_ja` field is present
/// exactly when its source field is present, with matching cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedTerm {
    /// Unique, stable identifier
    pub id: String,

    /// The headword
    pub name: String,

    /// Translated headword
    pub name_ja: String,

    /// Alternative names, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    /// Translated aliases; same length and order as `aliases`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases_ja: Option<Vec<String>>,

    /// Definitions with translations
    pub definitions: Vec<TranslatedDefinition>,

    /// Cross-referenced terms, if any
    #[serde(rename = "relatedTerms", skip_serializing_if = "Option::is_none")]
    pub related_terms: Option<Vec<String>>,

    /// Translated cross-references; same length and order as `relatedTerms`
    #[serde(rename = "relatedTerms_ja", skip_serializing_if = "Option::is_none")]
    pub related_terms_ja: Option<Vec<String>>,

    /// Usage example, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Translated example; present iff `example` is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_ja: Option<String>,

    /// Editorial note, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Translated note; present iff `note` is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_ja: Option<String>,

    /// Digest of the source term content at translation time.
    /// Absent in checkpoints produced outside this pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_digest: Option<String>,
}

/// Load the source dataset from a JSON array file.
///
/// Enforces the dataset invariants: ids are unique and every term has at
/// least one definition. Violations abort the run before any translation.
pub fn load_terms<P: AsRef<Path>>(path: P) -> Result<Vec<Term>> {
    let path = path.as_ref();
    let content = FileManager::read_to_string(path)?;
    let terms: Vec<Term> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset as a JSON array of terms: {:?}", path))?;

    let mut seen = HashSet::new();
    for term in &terms {
        if !seen.insert(term.id.as_str()) {
            return Err(anyhow!("Duplicate term id in dataset: {}", term.id));
        }
        if term.definitions.is_empty() {
            return Err(anyhow!("Term {} has no definitions", term.id));
        }
    }

    Ok(terms)
}

/// Load a translated dataset (output or checkpoint file)
pub fn load_translated_terms<P: AsRef<Path>>(path: P) -> Result<Vec<TranslatedTerm>> {
    let path = path.as_ref();
    let content = FileManager::read_to_string(path)?;
    serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse translated dataset as a JSON array: {:?}",
            path
        )
    })
}

/// Save a translated dataset as a pretty-printed JSON array, atomically
pub fn save_translated_terms<P: AsRef<Path>>(path: P, terms: &[TranslatedTerm]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(terms).context("Failed to serialize translated terms")?;
    FileManager::write_atomic(path, &json)
}
