/*!
 * Tests for context wrapping of translation requests
 */

use yakugo::translation::context;

const PHRASE: &str = "システム・ソフトウェア開発の専門用語としての文脈における用語の説明";

#[test]
fn test_wrapUnwrap_shouldRoundTripWhenPrefixSurvives() {
    let wrapped = context::wrap("algorithm");
    assert!(wrapped.starts_with(PHRASE));
    assert_eq!(context::unwrap(&wrapped), "algorithm");
}

#[test]
fn test_unwrap_shouldTolerateColonRewrites() {
    // The translator may rewrite the colon or add spacing
    for rendering in [
        format!("{}：アルゴリズム", PHRASE),
        format!("{}： アルゴリズム", PHRASE),
        format!("{}:アルゴリズム", PHRASE),
        format!("{}: アルゴリズム", PHRASE),
    ] {
        assert_eq!(context::unwrap(&rendering), "アルゴリズム");
    }
}

#[test]
fn test_unwrap_withRewrittenPhrase_shouldLeaveTextUntouched() {
    let mangled = "ソフトウェア開発用語の説明：アルゴリズム";
    assert_eq!(context::unwrap(mangled), mangled);
}

#[test]
fn test_containsRemnant_shouldCatchWhatUnwrapMissed() {
    // Phrase embedded mid-string: unwrap leaves it, the scan flags it
    let text = format!("アルゴリズム（{}）", PHRASE);
    assert_eq!(context::unwrap(&text), text);
    assert!(context::contains_remnant(&text));
}
