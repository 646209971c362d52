//! English morphology for generated translations.
//!
//! Glosses are short lowercase English words, sometimes with `/`-separated
//! alternatives (`sit/live/stay`). Only the forms the translations need are
//! produced: plurals after `ngā` and gerunds for continuous verbs.

/// Nouns whose plural is not formed with `s`.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[("person", "people"), ("child", "children")];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Plural form of an English noun gloss.
///
/// ```
/// use tereo_grammar::morphology::pluralize;
/// assert_eq!(pluralize("person"), "people");
/// assert_eq!(pluralize("cat"), "cats");
/// ```
#[must_use]
pub fn pluralize(noun: &str) -> String {
    IRREGULAR_PLURALS
        .iter()
        .find(|(singular, _)| *singular == noun)
        .map_or_else(|| format!("{noun}s"), |(_, plural)| (*plural).to_string())
}

/// Whether a word has the short consonant-vowel-consonant shape whose final
/// consonant doubles before `-ing` (`sit` -> `sitting`).
fn is_short_closed(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let (onset, tail) = chars.split_at(n - 2);
    onset.iter().all(|&c| !is_vowel(c)) && is_vowel(tail[0]) && !is_vowel(tail[1])
}

/// Continuous (`-ing`) form of an English verb gloss.
///
/// Only the first `/`-separated alternative is used. A trailing `e` is
/// dropped, a short closed syllable doubles its final consonant, and anything
/// else takes `ing` directly.
///
/// ```
/// use tereo_grammar::morphology::gerund;
/// assert_eq!(gerund("sit/live/stay"), "sitting");
/// assert_eq!(gerund("rest"), "resting");
/// ```
#[must_use]
pub fn gerund(verb: &str) -> String {
    let base = verb.split('/').next().unwrap_or(verb).trim();
    if let Some(stem) = base.strip_suffix('e') {
        return format!("{stem}ing");
    }
    if is_short_closed(base) {
        if let Some(last) = base.chars().last() {
            return format!("{base}{last}ing");
        }
    }
    format!("{base}ing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_plurals() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("teacher"), "teachers");
    }

    #[test]
    fn gerunds_for_catalog_verbs() {
        assert_eq!(gerund("go"), "going");
        assert_eq!(gerund("eat/food"), "eating");
        assert_eq!(gerund("sit/live/stay"), "sitting");
        assert_eq!(gerund("run"), "running");
        assert_eq!(gerund("work/do"), "working");
        assert_eq!(gerund("learn/teach"), "learning");
        assert_eq!(gerund("rest"), "resting");
    }

    #[test]
    fn gerund_drops_final_e() {
        assert_eq!(gerund("make"), "making");
        assert_eq!(gerund("live"), "living");
    }

    #[test]
    fn short_closed_shape() {
        assert!(is_short_closed("sit"));
        assert!(is_short_closed("stop"));
        assert!(!is_short_closed("eat"));
        assert!(!is_short_closed("go"));
        assert!(!is_short_closed("rest"));
    }
}
