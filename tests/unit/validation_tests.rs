/*!
 * Tests for the validation engine over realistic dataset pairs
 */

use yakugo::glossary::{Term, TranslatedDefinition, TranslatedTerm};
use yakugo::validation::ValidationService;

use crate::common;

/// A faithful hand-made translation of a term
fn translate_term(term: &Term) -> TranslatedTerm {
    TranslatedTerm {
        id: term.id.clone(),
        name: term.name.clone(),
        name_ja: format!("{}の訳", term.name),
        aliases: term.aliases.clone(),
        aliases_ja: term
            .aliases
            .as_ref()
            .map(|a| a.iter().map(|s| format!("{}の訳", s)).collect()),
        definitions: term
            .definitions
            .iter()
            .map(|d| TranslatedDefinition {
                text: d.text.clone(),
                text_ja: format!("{}の訳", d.text),
                reference: d.reference.clone(),
            })
            .collect(),
        related_terms: term.related_terms.clone(),
        related_terms_ja: term
            .related_terms
            .as_ref()
            .map(|r| r.iter().map(|s| format!("{}の訳", s)).collect()),
        example: term.example.clone(),
        example_ja: term.example.as_ref().map(|e| format!("{}の訳", e)),
        note: term.note.clone(),
        note_ja: term.note.as_ref().map(|n| format!("{}の訳", n)),
        source_digest: Some(term.source_digest()),
    }
}

#[test]
fn test_validate_withFaithfulTranslation_shouldPassWithoutFindings() {
    let original = vec![
        common::make_term("1.1", "software"),
        common::make_full_term("1.2", "hardware"),
        common::make_multi_definition_term("1.3", "system", 3),
    ];
    let translated: Vec<_> = original.iter().map(translate_term).collect();

    let result = ValidationService::new().validate(&original, &translated);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.statistics.translated_terms, 3);
}

#[test]
fn test_validate_withDroppedAlias_shouldErrorOnParallelism() {
    let original = vec![common::make_full_term("1.1", "software")];
    let mut translated: Vec<_> = original.iter().map(translate_term).collect();
    translated[0].aliases_ja = None;

    let result = ValidationService::new().validate(&original, &translated);

    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("aliases")));
}

#[test]
fn test_validate_withFallbackTranslations_shouldWarnButStayValid() {
    let original = vec![common::make_term("1.1", "software")];
    let mut translated: Vec<_> = original.iter().map(translate_term).collect();
    // Fallback signature: translation identical to the source
    translated[0].name_ja = translated[0].name.clone();

    let result = ValidationService::new().validate(&original, &translated);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("identical to the original")));
}

#[test]
fn test_validate_withDuplicateHeadwordTranslations_shouldWarn() {
    let original = vec![
        common::make_term("1.1", "software"),
        common::make_term("1.2", "program"),
    ];
    let mut translated: Vec<_> = original.iter().map(translate_term).collect();
    translated[1].name_ja = translated[0].name_ja.clone();

    let result = ValidationService::new().validate(&original, &translated);

    assert!(result.is_valid);
    let warning = result
        .warnings
        .iter()
        .find(|w| w.contains("Duplicate translation"))
        .unwrap();
    assert!(warning.contains("1.1") && warning.contains("1.2"));
}

#[test]
fn test_renderReport_shouldIncludeStatisticsAndStatus() {
    let original = vec![
        common::make_term("1.1", "software"),
        common::make_term("1.2", "hardware"),
    ];
    let translated = vec![translate_term(&original[0])];

    let result = ValidationService::new().validate(&original, &translated);
    let report = result.render_report();

    assert!(report.contains("Status: INVALID"));
    assert!(report.contains("Total terms:          2"));
    assert!(report.contains("Missing translations: 1"));
    assert!(report.contains("Completion rate:      50.0%"));
    assert!(report.contains("[ERROR]"));
}

#[test]
fn test_loadFailure_shouldRenderAsInvalidReport() {
    let result = ValidationService::new().load_failure("expected value at line 1 column 1");
    let report = result.render_report();
    assert!(report.contains("Status: INVALID"));
    assert!(report.contains("Failed to load translated dataset"));
}
