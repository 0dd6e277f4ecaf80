/*!
 * Structural integrity checks.
 *
 * Verifies the translated dataset is structurally parallel to its source:
 * matching id sets, required fields present, and every optional `_ja`
 * field mirroring its source field in presence and cardinality.
 */

use std::collections::HashSet;

use crate::glossary::{Term, TranslatedTerm};

use super::Findings;

/// Run the structural pass
pub fn check(original: &[Term], translated: &[TranslatedTerm]) -> Findings {
    let mut findings = Findings::default();

    if original.len() != translated.len() {
        findings.errors.push(format!(
            "Dataset length mismatch: {} original terms, {} translated terms",
            original.len(),
            translated.len()
        ));
    }

    let original_ids: HashSet<&str> = original.iter().map(|t| t.id.as_str()).collect();
    let translated_ids: HashSet<&str> = translated.iter().map(|t| t.id.as_str()).collect();

    for term in original {
        if !translated_ids.contains(term.id.as_str()) {
            findings
                .errors
                .push(format!("Term {} is missing from the translated dataset", term.id));
        }
    }
    for term in translated {
        if !original_ids.contains(term.id.as_str()) {
            findings
                .warnings
                .push(format!("Translated term {} has no counterpart in the original dataset", term.id));
        }
    }

    for term in translated {
        check_term(term, &mut findings);
    }

    findings
}

/// Required fields and `_ja` parallelism within one translated term
fn check_term(term: &TranslatedTerm, findings: &mut Findings) {
    if term.id.trim().is_empty() {
        findings.errors.push("Translated term with empty id".to_string());
        return;
    }
    if term.name.trim().is_empty() {
        findings
            .errors
            .push(format!("Term {}: required field 'name' is missing", term.id));
    }
    if term.definitions.is_empty() {
        findings
            .errors
            .push(format!("Term {}: definitions must not be empty", term.id));
    }
    for (i, definition) in term.definitions.iter().enumerate() {
        if definition.text.trim().is_empty() {
            findings.errors.push(format!(
                "Term {}: definition[{}] is missing required field 'text'",
                term.id, i
            ));
        }
    }

    check_parallel_list(term, "aliases", &term.aliases, &term.aliases_ja, findings);
    check_parallel_list(
        term,
        "relatedTerms",
        &term.related_terms,
        &term.related_terms_ja,
        findings,
    );

    if term.example.is_some() && term.example_ja.is_none() {
        findings.errors.push(format!(
            "Term {}: example is present but example_ja is missing",
            term.id
        ));
    }
    if term.example.is_none() && term.example_ja.is_some() {
        findings.errors.push(format!(
            "Term {}: example_ja is present without a source example",
            term.id
        ));
    }
    if term.note.is_some() && term.note_ja.is_none() {
        findings
            .errors
            .push(format!("Term {}: note is present but note_ja is missing", term.id));
    }
    if term.note.is_none() && term.note_ja.is_some() {
        findings
            .errors
            .push(format!("Term {}: note_ja is present without a source note", term.id));
    }
}

/// Presence and cardinality must match exactly between a source list and
/// its `_ja` counterpart; index i of the source maps to index i of the
/// translation.
fn check_parallel_list(
    term: &TranslatedTerm,
    field: &str,
    source: &Option<Vec<String>>,
    translated: &Option<Vec<String>>,
    findings: &mut Findings,
) {
    match (source, translated) {
        (Some(source), Some(translated)) if source.len() != translated.len() => {
            findings.errors.push(format!(
                "Term {}: {} has {} entries but {}_ja has {}",
                term.id,
                field,
                source.len(),
                field,
                translated.len()
            ));
        }
        (Some(_), None) => {
            findings.errors.push(format!(
                "Term {}: {} is present but {}_ja is missing",
                term.id, field, field
            ));
        }
        (None, Some(_)) => {
            findings.errors.push(format!(
                "Term {}: {}_ja is present without a source {}",
                term.id, field, field
            ));
        }
        _ => {}
    }
}
