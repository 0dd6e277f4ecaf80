/*!
 * Tests for dataset loading, saving and the source digest
 */

use yakugo::glossary::{self, TranslatedDefinition, TranslatedTerm};

use crate::common;

#[test]
fn test_loadTerms_withValidDataset_shouldParseAllFields() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        dir.path(),
        "glossary.json",
        r#"[
            {
                "id": "3.1",
                "name": "algorithm",
                "aliases": ["procedure"],
                "definitions": [
                    {"text": "finite set of rules", "reference": "ISO 2382"}
                ],
                "relatedTerms": ["program"],
                "example": "sorting",
                "note": "editorial note"
            }
        ]"#,
    )
    .unwrap();

    let terms = glossary::load_terms(&path).unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].id, "3.1");
    assert_eq!(terms[0].aliases.as_deref(), Some(&["procedure".to_string()][..]));
    assert_eq!(terms[0].related_terms.as_deref(), Some(&["program".to_string()][..]));
    assert_eq!(terms[0].definitions[0].reference.as_deref(), Some("ISO 2382"));
}

#[test]
fn test_loadTerms_withMalformedJson_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(dir.path(), "glossary.json", "{ not an array").unwrap();
    assert!(glossary::load_terms(&path).is_err());
}

#[test]
fn test_loadTerms_withMissingFile_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    assert!(glossary::load_terms(dir.path().join("absent.json")).is_err());
}

#[test]
fn test_saveAndLoadTranslatedTerms_shouldRoundTrip() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("glossary_ja.json");

    let terms = vec![TranslatedTerm {
        id: "3.1".to_string(),
        name: "algorithm".to_string(),
        name_ja: "アルゴリズム".to_string(),
        aliases: None,
        aliases_ja: None,
        definitions: vec![TranslatedDefinition {
            text: "finite set of rules".to_string(),
            text_ja: "有限の規則の集合".to_string(),
            reference: Some("ISO 2382".to_string()),
        }],
        related_terms: None,
        related_terms_ja: None,
        example: None,
        example_ja: None,
        note: None,
        note_ja: None,
        source_digest: Some("abc123".to_string()),
    }];

    glossary::save_translated_terms(&path, &terms).unwrap();
    let loaded = glossary::load_translated_terms(&path).unwrap();
    assert_eq!(loaded, terms);
}

#[test]
fn test_sourceDigest_shouldCoverOptionalFields() {
    let a = common::make_full_term("3.1", "algorithm");
    let mut b = common::make_full_term("3.1", "algorithm");
    assert_eq!(a.source_digest(), b.source_digest());

    b.note = Some("a different note".to_string());
    assert_ne!(a.source_digest(), b.source_digest());
}
