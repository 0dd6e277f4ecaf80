/*!
 * Content checks on translated values.
 *
 * Empty translations of required fields are errors. Identical-to-source
 * values are warnings only: acronyms and proper nouns can legitimately
 * survive translation unchanged, but in bulk they are the signature of
 * the fallback path. The suspicious-pattern scan flags context-template
 * remnants, implausible length ratios, and raw markup characters.
 */

use crate::glossary::TranslatedTerm;
use crate::translation::context;

use super::Findings;

/// `name_ja` more than this many times longer than `name` is suspicious
const MAX_NAME_LENGTH_RATIO: usize = 3;

/// Raw markup characters that should not survive into a translation
const MARKUP_CHARS: [char; 3] = ['&', '<', '>'];

/// Run the content pass
pub fn check(translated: &[TranslatedTerm]) -> Findings {
    let mut findings = Findings::default();

    for term in translated {
        if term.name_ja.trim().is_empty() {
            findings
                .errors
                .push(format!("Term {}: name_ja is empty", term.id));
        } else if term.name_ja == term.name {
            findings
                .warnings
                .push(format!("Term {}: name_ja is identical to the original", term.id));
        }

        for (i, definition) in term.definitions.iter().enumerate() {
            if definition.text_ja.trim().is_empty() {
                findings
                    .errors
                    .push(format!("Term {}: definition[{}].text_ja is empty", term.id, i));
            } else if definition.text_ja == definition.text {
                findings.warnings.push(format!(
                    "Term {}: definition[{}].text_ja is identical to the original",
                    term.id, i
                ));
            }
        }

        scan_suspicious_patterns(term, &mut findings);
    }

    findings
}

/// Pattern heuristics over every translated value of one term
fn scan_suspicious_patterns(term: &TranslatedTerm, findings: &mut Findings) {
    for (field, value) in translated_values(term) {
        if context::contains_remnant(value) {
            findings.warnings.push(format!(
                "Term {}: {} contains a context prefix remnant",
                term.id, field
            ));
        }
    }

    let name_len = term.name.chars().count();
    let name_ja_len = term.name_ja.chars().count();
    if name_len > 0 && name_ja_len > name_len * MAX_NAME_LENGTH_RATIO {
        findings.warnings.push(format!(
            "Term {}: name_ja is {}x longer than name ({} vs {} chars)",
            term.id,
            MAX_NAME_LENGTH_RATIO,
            name_ja_len,
            name_len
        ));
    }

    if term.name_ja.chars().any(|c| MARKUP_CHARS.contains(&c)) {
        findings.warnings.push(format!(
            "Term {}: name_ja contains raw markup characters",
            term.id
        ));
    }
}

/// All translated string values of a term, labeled by field
fn translated_values(term: &TranslatedTerm) -> Vec<(String, &str)> {
    let mut values = vec![("name_ja".to_string(), term.name_ja.as_str())];
    for (i, alias) in term.aliases_ja.iter().flatten().enumerate() {
        values.push((format!("aliases_ja[{}]", i), alias.as_str()));
    }
    for (i, definition) in term.definitions.iter().enumerate() {
        values.push((format!("definition[{}].text_ja", i), definition.text_ja.as_str()));
    }
    for (i, related) in term.related_terms_ja.iter().flatten().enumerate() {
        values.push((format!("relatedTerms_ja[{}]", i), related.as_str()));
    }
    if let Some(example) = &term.example_ja {
        values.push(("example_ja".to_string(), example.as_str()));
    }
    if let Some(note) = &term.note_ja {
        values.push(("note_ja".to_string(), note.as_str()));
    }
    values
}
