/*!
 * Completeness checks across datasets.
 *
 * For every optional field present on an original term, the matching
 * translated term must carry the `_ja` counterpart. These findings are
 * deliberately warnings, never errors: the fallback policy can satisfy
 * structural parity with untranslated content, which is a review concern
 * rather than a contract violation.
 */

use std::collections::HashMap;

use crate::glossary::{Term, TranslatedTerm};

use super::Findings;

/// Run the completeness pass
pub fn check(original: &[Term], translated: &[TranslatedTerm]) -> Findings {
    let mut findings = Findings::default();

    let by_id: HashMap<&str, &TranslatedTerm> =
        translated.iter().map(|t| (t.id.as_str(), t)).collect();

    for term in original {
        // Missing terms are reported by the structural pass
        let Some(counterpart) = by_id.get(term.id.as_str()) else {
            continue;
        };

        if term.aliases.is_some() && counterpart.aliases_ja.is_none() {
            findings
                .warnings
                .push(format!("Term {}: aliases were not translated", term.id));
        }
        if term.related_terms.is_some() && counterpart.related_terms_ja.is_none() {
            findings
                .warnings
                .push(format!("Term {}: relatedTerms were not translated", term.id));
        }
        if term.example.is_some() && counterpart.example_ja.is_none() {
            findings
                .warnings
                .push(format!("Term {}: example was not translated", term.id));
        }
        if term.note.is_some() && counterpart.note_ja.is_none() {
            findings
                .warnings
                .push(format!("Term {}: note was not translated", term.id));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::{Definition, TranslatedDefinition};

    fn term_with_note(id: &str) -> Term {
        Term {
            id: id.to_string(),
            name: "software".to_string(),
            aliases: None,
            definitions: vec![Definition {
                text: "programs".to_string(),
                reference: None,
            }],
            related_terms: None,
            example: None,
            note: Some("a note".to_string()),
        }
    }

    fn translated_without_note(id: &str) -> TranslatedTerm {
        TranslatedTerm {
            id: id.to_string(),
            name: "software".to_string(),
            name_ja: "ソフトウェア".to_string(),
            aliases: None,
            aliases_ja: None,
            definitions: vec![TranslatedDefinition {
                text: "programs".to_string(),
                text_ja: "プログラム".to_string(),
                reference: None,
            }],
            related_terms: None,
            related_terms_ja: None,
            example: None,
            example_ja: None,
            note: None,
            note_ja: None,
            source_digest: None,
        }
    }

    #[test]
    fn test_check_withUntranslatedNote_shouldWarnOnly() {
        let findings = check(&[term_with_note("1.1")], &[translated_without_note("1.1")]);
        assert!(findings.errors.is_empty());
        assert!(findings
            .warnings
            .iter()
            .any(|w| w.contains("note was not translated")));
    }

    #[test]
    fn test_check_withMissingTerm_shouldNotReport() {
        // Missing ids belong to the structural pass
        let findings = check(&[term_with_note("1.1")], &[]);
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_check_withCompleteTranslation_shouldFindNothing() {
        let mut t = translated_without_note("1.1");
        t.note = Some("a note".to_string());
        t.note_ja = Some("注記".to_string());
        let findings = check(&[term_with_note("1.1")], &[t]);
        assert!(findings.warnings.is_empty());
    }
}
