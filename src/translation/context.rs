/*!
 * Context wrapping for translation requests.
 *
 * The browser's translator does poorly on short professional terms in
 * isolation, so each request is prefixed with a fixed Japanese instruction
 * identifying the domain. The prefix must not leak into stored results:
 * `unwrap` strips it back off by literal prefix matching against the
 * renderings the translator is known to produce (it may rewrite the colon
 * or spacing), not by structural parsing.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Domain-disambiguation phrase, without the trailing colon
const CONTEXT_PHRASE: &str = "システム・ソフトウェア開発の専門用語としての文脈における用語の説明";

/// Prefix renderings the translator has been observed to emit.
/// Ordered longest-first so the most specific variant wins.
static KNOWN_PREFIXES: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        format!("{}： ", CONTEXT_PHRASE),
        format!("{}：", CONTEXT_PHRASE),
        format!("{}: ", CONTEXT_PHRASE),
        format!("{}:", CONTEXT_PHRASE),
    ]
});

/// Matches any remnant of the context phrase anywhere in a string.
/// Used by the validator as a substring scan, which is deliberately more
/// lenient than the prefix matching in [`unwrap`].
static REMNANT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}[：:]?", regex::escape(CONTEXT_PHRASE)))
        .expect("context remnant pattern is valid")
});

/// Prepend the domain context to a piece of text
pub fn wrap(text: &str) -> String {
    format!("{}：{}", CONTEXT_PHRASE, text)
}

/// Strip the context prefix from a translated result.
///
/// If none of the known renderings match (the translator altered the
/// context beyond recognition), the text is returned unchanged; the
/// validator later flags remnants via substring search.
pub fn unwrap(translated: &str) -> String {
    for prefix in KNOWN_PREFIXES.iter() {
        if let Some(rest) = translated.strip_prefix(prefix.as_str()) {
            return rest.trim_start().to_string();
        }
    }
    translated.to_string()
}

/// Whether a stored translation still contains a context remnant
pub fn contains_remnant(text: &str) -> bool {
    REMNANT_PATTERN.is_match(text)
}
