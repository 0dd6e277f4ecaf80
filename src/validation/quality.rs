/*!
 * Cross-term quality heuristics.
 *
 * Groups headword translations to surface collisions (distinct terms
 * collapsing onto one Japanese rendering) and flags translations that
 * are implausibly short relative to their source headword.
 */

use std::collections::BTreeMap;

use crate::glossary::TranslatedTerm;

use super::Findings;

/// A `name_ja` under this many characters for a `name` over
/// `LONG_NAME_THRESHOLD` characters is suspicious
const SHORT_TRANSLATION_THRESHOLD: usize = 2;
const LONG_NAME_THRESHOLD: usize = 5;

/// Run the quality-heuristics pass
pub fn check(translated: &[TranslatedTerm]) -> Findings {
    let mut findings = Findings::default();

    // BTreeMap keeps duplicate reports in a deterministic order
    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for term in translated {
        let normalized = term.name_ja.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        groups.entry(normalized).or_default().push(term.id.as_str());
    }

    for (name_ja, ids) in &groups {
        if ids.len() > 1 {
            findings.warnings.push(format!(
                "Duplicate translation {:?} shared by terms: {}",
                name_ja,
                ids.join(", ")
            ));
        }
    }

    for term in translated {
        let name_len = term.name.chars().count();
        let name_ja_len = term.name_ja.trim().chars().count();
        if name_ja_len < SHORT_TRANSLATION_THRESHOLD && name_len > LONG_NAME_THRESHOLD {
            findings.warnings.push(format!(
                "Term {}: name_ja ({} chars) is suspiciously short for name ({} chars)",
                term.id, name_ja_len, name_len
            ));
        }
    }

    findings
}
