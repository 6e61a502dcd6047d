//! Suffix rule tables for the Brazilian Portuguese stemmer.
//!
//! The stemmer is a fixed sequence of [`RuleGroup`]s. A group is an ordered
//! slice of [`SuffixRule`]s; the first rule that matches rewrites the word and
//! the group stops. A rule only matches when its suffix lies inside a region
//! of the word ([`Region`]). Regions start a few letters into the word, so
//! they are what keeps long suffixes from being stripped off short words.
//!
//! Regions are computed once, on the word as it entered the stemmer. Later
//! groups still test the original regions but rewrite the current word, and
//! a rewrite only happens when the current word still ends with the text to
//! strip.
//!
//! ```text
//! standard_suffix ──fired──────────────┐
//!       │ no                           ▼
//!   verb_suffix ──fired──────────► residual_ci ──┐
//!       │ no                                     ▼
//!   residual_vowel ─────────────────────────► residual_e
//! ```

use std::fmt;

/// Vowels used to compute word regions.
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Region of the word a suffix must fall in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Region after the first non-vowel that follows a vowel.
    R1,
    /// R1 of R1.
    R2,
    /// If the second letter is a consonant, the region after the next vowel.
    /// If the first two letters are vowels, the region after the next
    /// consonant. Otherwise the region after the third letter.
    Rv,
}

/// The R1, R2 and RV regions of a word. A region is `None` when the word is
/// too short to have one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Regions {
    pub r1: Option<String>,
    pub r2: Option<String>,
    pub rv: Option<String>,
}

impl Regions {
    /// Compute the regions of `word`.
    pub fn of(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let r1 = r1_start(&chars).map(|start| chars[start..].iter().collect::<String>());
        let r2 = r1.as_deref().and_then(|r1| {
            let r1_chars: Vec<char> = r1.chars().collect();
            r1_start(&r1_chars).map(|start| r1_chars[start..].iter().collect())
        });
        let rv = rv_start(&chars).map(|start| chars[start..].iter().collect());

        Regions { r1, r2, rv }
    }

    /// Get one region.
    pub fn get(&self, region: Region) -> Option<&str> {
        match region {
            Region::R1 => self.r1.as_deref(),
            Region::R2 => self.r2.as_deref(),
            Region::Rv => self.rv.as_deref(),
        }
    }
}

/// Start of R1. The final letter never counts as the non-vowel that opens
/// the region.
fn r1_start(chars: &[char]) -> Option<usize> {
    let last = chars.len().checked_sub(1)?;

    let vowel = (0..last).find(|&i| is_vowel(chars[i]))?;
    let consonant = (vowel..last).find(|&i| !is_vowel(chars[i]))?;

    Some(consonant + 1)
}

fn rv_start(chars: &[char]) -> Option<usize> {
    let last = chars.len().checked_sub(1)?;

    if last > 0 && !is_vowel(chars[1]) {
        if let Some(vowel) = (2..last).find(|&i| is_vowel(chars[i])) {
            return Some(vowel + 1);
        }
    }

    if last > 1 && is_vowel(chars[0]) && is_vowel(chars[1]) {
        if let Some(consonant) = (2..last).find(|&i| !is_vowel(chars[i])) {
            return Some(consonant + 1);
        }
    }

    (last > 2).then_some(3)
}

/// One entry of a rule group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix the region must end with.
    pub suffix: &'static str,
    /// Region that must contain the suffix.
    pub region: Region,
    /// Ending the current word must have for the rule to match. Empty when
    /// the region test is enough.
    pub context: &'static str,
    /// Text removed from the end of the word.
    pub strip: &'static str,
    /// Text appended after stripping.
    pub replacement: &'static str,
}

impl SuffixRule {
    /// Strip `suffix` when it lies in `region`.
    pub const fn remove(suffix: &'static str, region: Region) -> Self {
        SuffixRule {
            suffix,
            region,
            context: "",
            strip: suffix,
            replacement: "",
        }
    }

    /// Replace `suffix` with `replacement` when it lies in `region`.
    pub const fn replace(suffix: &'static str, region: Region, replacement: &'static str) -> Self {
        SuffixRule {
            suffix,
            region,
            context: "",
            strip: suffix,
            replacement,
        }
    }

    /// Match `suffix` without changing the word. The group still counts as
    /// fired, which decides the residual groups that run afterwards.
    pub const fn keep(suffix: &'static str, region: Region) -> Self {
        SuffixRule {
            suffix,
            region,
            context: "",
            strip: "",
            replacement: "",
        }
    }

    /// Strip `strip` and append `replacement` when `suffix` lies in `region`
    /// and the word ends with `context`.
    pub const fn contextual(
        suffix: &'static str,
        region: Region,
        context: &'static str,
        strip: &'static str,
        replacement: &'static str,
    ) -> Self {
        SuffixRule {
            suffix,
            region,
            context,
            strip,
            replacement,
        }
    }

    /// Check whether the rule applies to `word`.
    pub fn matches(&self, word: &str, regions: &Regions) -> bool {
        regions
            .get(self.region)
            .is_some_and(|region| region.ends_with(self.suffix))
            && word.ends_with(self.context)
    }

    /// Rewrite the end of `word`. Leaves it untouched when it no longer ends
    /// with the text to strip.
    pub fn rewrite(&self, word: &mut String) {
        if let Some(stem_len) = word.strip_suffix(self.strip).map(str::len) {
            word.truncate(stem_len);
            word.push_str(self.replacement);
        }
    }
}

/// An ordered stage of the stemmer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuleGroup {
    /// Stage name, used in logs.
    pub name: &'static str,
    /// Rules in priority order.
    pub rules: &'static [SuffixRule],
}

impl RuleGroup {
    /// Find the first rule that matches `word`.
    pub fn find(&self, word: &str, regions: &Regions) -> Option<&'static SuffixRule> {
        self.rules.iter().find(|rule| rule.matches(word, regions))
    }

    /// Apply the first matching rule. Returns whether a rule fired.
    pub fn apply(&self, word: &mut String, regions: &Regions) -> bool {
        match self.find(word, regions) {
            Some(rule) => {
                rule.rewrite(word);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleGroup")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}

use Region::{R1, R2, Rv};

/// Noun, adjective and adverb suffixes.
pub static STANDARD_SUFFIX: RuleGroup = RuleGroup {
    name: "standard_suffix",
    rules: &[
        SuffixRule::replace("uciones", R2, "u"),
        SuffixRule::remove("imentos", R2),
        SuffixRule::remove("amentos", R2),
        SuffixRule::remove("adores", R2),
        SuffixRule::remove("adoras", R2),
        SuffixRule::keep("logias", R2),
        SuffixRule::replace("encias", R2, "ente"),
        SuffixRule::remove("amente", R1),
        SuffixRule::remove("idades", R2),
        SuffixRule::remove("acoes", R2),
        SuffixRule::remove("imento", R2),
        SuffixRule::remove("amento", R2),
        SuffixRule::remove("adora", R2),
        SuffixRule::remove("ismos", R2),
        SuffixRule::remove("istas", R2),
        SuffixRule::replace("logia", R2, "log"),
        SuffixRule::replace("ucion", R2, "u"),
        SuffixRule::replace("encia", R2, "ente"),
        SuffixRule::remove("mente", R2),
        SuffixRule::remove("idade", R2),
        SuffixRule::remove("acao", R2),
        SuffixRule::remove("ezas", R2),
        SuffixRule::remove("icos", R2),
        SuffixRule::remove("icas", R2),
        SuffixRule::remove("ismo", R2),
        SuffixRule::remove("avel", R2),
        SuffixRule::remove("ivel", R2),
        SuffixRule::remove("ista", R2),
        SuffixRule::remove("osos", R2),
        SuffixRule::remove("osas", R2),
        SuffixRule::remove("ador", R2),
        SuffixRule::remove("ivas", R2),
        SuffixRule::remove("ivos", R2),
        SuffixRule::contextual("iras", Rv, "eiras", "iras", "ir"),
        SuffixRule::remove("eza", R2),
        SuffixRule::remove("ico", R2),
        SuffixRule::remove("ica", R2),
        SuffixRule::remove("oso", R2),
        SuffixRule::remove("osa", R2),
        SuffixRule::remove("iva", R2),
        SuffixRule::remove("ivo", R2),
        SuffixRule::contextual("ira", Rv, "eira", "ira", "ir"),
    ],
};

/// Verb endings, tried only when no standard suffix matched.
pub static VERB_SUFFIX: RuleGroup = RuleGroup {
    name: "verb_suffix",
    rules: &[
        SuffixRule::remove("issemos", Rv),
        SuffixRule::remove("essemos", Rv),
        SuffixRule::remove("assemos", Rv),
        SuffixRule::remove("ariamos", Rv),
        SuffixRule::remove("eriamos", Rv),
        SuffixRule::remove("iriamos", Rv),
        SuffixRule::remove("iremos", Rv),
        SuffixRule::remove("eremos", Rv),
        SuffixRule::remove("aremos", Rv),
        SuffixRule::remove("avamos", Rv),
        SuffixRule::remove("iramos", Rv),
        SuffixRule::remove("eramos", Rv),
        SuffixRule::remove("aramos", Rv),
        SuffixRule::remove("asseis", Rv),
        SuffixRule::remove("esseis", Rv),
        SuffixRule::remove("isseis", Rv),
        SuffixRule::remove("arieis", Rv),
        SuffixRule::remove("erieis", Rv),
        SuffixRule::remove("irieis", Rv),
        SuffixRule::remove("irmos", Rv),
        SuffixRule::remove("iamos", Rv),
        SuffixRule::remove("armos", Rv),
        SuffixRule::remove("ermos", Rv),
        SuffixRule::remove("areis", Rv),
        SuffixRule::remove("ereis", Rv),
        SuffixRule::remove("ireis", Rv),
        SuffixRule::remove("asses", Rv),
        SuffixRule::remove("esses", Rv),
        SuffixRule::remove("isses", Rv),
        SuffixRule::remove("astes", Rv),
        SuffixRule::remove("assem", Rv),
        SuffixRule::remove("essem", Rv),
        SuffixRule::remove("issem", Rv),
        SuffixRule::remove("ardes", Rv),
        SuffixRule::remove("erdes", Rv),
        SuffixRule::remove("irdes", Rv),
        SuffixRule::remove("ariam", Rv),
        SuffixRule::remove("eriam", Rv),
        SuffixRule::remove("iriam", Rv),
        SuffixRule::remove("arias", Rv),
        SuffixRule::remove("erias", Rv),
        SuffixRule::remove("irias", Rv),
        SuffixRule::remove("estes", Rv),
        SuffixRule::remove("istes", Rv),
        SuffixRule::remove("aveis", Rv),
        SuffixRule::remove("aria", Rv),
        SuffixRule::remove("eria", Rv),
        SuffixRule::remove("iria", Rv),
        SuffixRule::remove("asse", Rv),
        SuffixRule::remove("esse", Rv),
        SuffixRule::remove("isse", Rv),
        SuffixRule::remove("aste", Rv),
        SuffixRule::remove("este", Rv),
        SuffixRule::remove("iste", Rv),
        SuffixRule::remove("arei", Rv),
        SuffixRule::remove("erei", Rv),
        SuffixRule::remove("irei", Rv),
        SuffixRule::remove("aram", Rv),
        SuffixRule::remove("eram", Rv),
        SuffixRule::remove("iram", Rv),
        SuffixRule::remove("avam", Rv),
        SuffixRule::remove("arem", Rv),
        SuffixRule::remove("erem", Rv),
        SuffixRule::remove("irem", Rv),
        SuffixRule::remove("ando", Rv),
        SuffixRule::remove("endo", Rv),
        SuffixRule::remove("indo", Rv),
        SuffixRule::remove("arao", Rv),
        SuffixRule::remove("erao", Rv),
        SuffixRule::remove("irao", Rv),
        SuffixRule::remove("adas", Rv),
        SuffixRule::remove("idas", Rv),
        SuffixRule::remove("aras", Rv),
        SuffixRule::remove("eras", Rv),
        SuffixRule::remove("iras", Rv),
        SuffixRule::remove("avas", Rv),
        SuffixRule::remove("ares", Rv),
        SuffixRule::remove("eres", Rv),
        SuffixRule::remove("ires", Rv),
        SuffixRule::remove("ados", Rv),
        SuffixRule::remove("idos", Rv),
        SuffixRule::remove("amos", Rv),
        SuffixRule::remove("emos", Rv),
        SuffixRule::remove("imos", Rv),
        SuffixRule::remove("ieis", Rv),
        SuffixRule::remove("ada", Rv),
        SuffixRule::remove("ida", Rv),
        SuffixRule::remove("ara", Rv),
        SuffixRule::remove("era", Rv),
        // "-ira" verb forms are recognized but kept whole.
        SuffixRule::keep("ira", Rv),
        SuffixRule::remove("iam", Rv),
        SuffixRule::remove("ado", Rv),
        SuffixRule::remove("ido", Rv),
        SuffixRule::remove("ias", Rv),
        SuffixRule::remove("ais", Rv),
        SuffixRule::remove("eis", Rv),
        SuffixRule::remove("ear", Rv),
        SuffixRule::remove("ia", Rv),
        SuffixRule::remove("ei", Rv),
        SuffixRule::remove("am", Rv),
        SuffixRule::remove("em", Rv),
        SuffixRule::remove("ar", Rv),
        SuffixRule::remove("er", Rv),
        SuffixRule::remove("ir", Rv),
        SuffixRule::remove("as", Rv),
        SuffixRule::remove("es", Rv),
        SuffixRule::remove("is", Rv),
        SuffixRule::remove("eu", Rv),
        SuffixRule::remove("iu", Rv),
        SuffixRule::remove("ou", Rv),
    ],
};

/// Runs after a standard or verb suffix was handled.
pub static RESIDUAL_CI: RuleGroup = RuleGroup {
    name: "residual_ci",
    rules: &[SuffixRule::contextual("ci", Rv, "", "i", "")],
};

/// Runs when neither the standard nor the verb group fired.
pub static RESIDUAL_VOWEL: RuleGroup = RuleGroup {
    name: "residual_vowel",
    rules: &[
        SuffixRule::remove("os", Rv),
        SuffixRule::remove("a", Rv),
        SuffixRule::remove("i", Rv),
        SuffixRule::remove("o", Rv),
    ],
};

/// Final `-e` cleanup; `-gue` and `-cie` also lose the letter before the `e`.
pub static RESIDUAL_E: RuleGroup = RuleGroup {
    name: "residual_e",
    rules: &[
        SuffixRule::contextual("gue", Rv, "", "ue", ""),
        SuffixRule::contextual("cie", Rv, "", "ie", ""),
        SuffixRule::remove("e", Rv),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions() {
        let regions = Regions::of("boataria");
        assert_eq!(regions.r1.as_deref(), Some("aria"));
        assert_eq!(regions.r2.as_deref(), Some("ia"));
        assert_eq!(regions.rv.as_deref(), Some("taria"));

        let regions = Regions::of("brasilia");
        assert_eq!(regions.r1.as_deref(), Some("ilia"));
        assert_eq!(regions.r2.as_deref(), Some("ia"));
        assert_eq!(regions.rv.as_deref(), Some("silia"));

        let regions = Regions::of("quintessencia");
        assert_eq!(regions.r1.as_deref(), Some("tessencia"));
        assert_eq!(regions.r2.as_deref(), Some("sencia"));
        assert_eq!(regions.rv.as_deref(), Some("ntessencia"));
    }

    #[test]
    fn test_rv_with_two_leading_vowels() {
        // Both leading letters are vowels: RV starts after the next consonant.
        assert_eq!(Regions::of("aurora").rv.as_deref(), Some("ora"));
    }

    #[test]
    fn test_short_words_have_no_regions() {
        assert_eq!(Regions::of("boa"), Regions::default());
        assert_eq!(Regions::of(""), Regions::default());
        assert_eq!(Regions::of("aei"), Regions::default());
    }

    #[test]
    fn test_group_first_match_wins() {
        let regions = Regions::of("bocadas");
        let rule = VERB_SUFFIX.find("bocadas", &regions).unwrap();
        // "adas" is listed before "as".
        assert_eq!(rule.suffix, "adas");

        let mut word = "bocadas".to_string();
        assert!(VERB_SUFFIX.apply(&mut word, &regions));
        assert_eq!(word, "boc");
    }

    #[test]
    fn test_region_guard_blocks_short_stems() {
        // "ica" is a standard suffix but lies outside R2 here.
        let regions = Regions::of("quimica");
        assert!(STANDARD_SUFFIX.find("quimica", &regions).is_none());
    }

    #[test]
    fn test_keep_rule_fires_without_rewriting() {
        let rule = SuffixRule::keep("logias", R2);
        let mut word = "antropologias".to_string();
        assert!(rule.matches(&word, &Regions::of("antropologias")));
        rule.rewrite(&mut word);
        assert_eq!(word, "antropologias");
    }

    #[test]
    fn test_rewrite_requires_current_ending() {
        let rule = SuffixRule::remove("e", Rv);
        let mut word = "boat".to_string();
        rule.rewrite(&mut word);
        assert_eq!(word, "boat");
    }

    #[test]
    fn test_residual_e_context() {
        let regions = Regions::of("sangue");
        let mut word = "sangue".to_string();
        assert!(RESIDUAL_E.apply(&mut word, &regions));
        assert_eq!(word, "sang");
    }

    #[test]
    fn test_residual_e_reads_original_rv() {
        // RV of "ergue" is just "e", so only the "e" goes.
        let regions = Regions::of("ergue");
        assert_eq!(regions.rv.as_deref(), Some("e"));
        let mut word = "ergue".to_string();
        assert!(RESIDUAL_E.apply(&mut word, &regions));
        assert_eq!(word, "ergu");

        let regions = Regions::of("especie");
        let mut word = "especie".to_string();
        assert!(RESIDUAL_E.apply(&mut word, &regions));
        assert_eq!(word, "espec");
    }

    #[test]
    fn test_residual_ci_reads_original_rv() {
        // After "ei" is stripped the word ends in "ci", but RV ("nciei") does not.
        let regions = Regions::of("anunciei");
        let mut word = "anunciei".to_string();
        assert!(VERB_SUFFIX.apply(&mut word, &regions));
        assert_eq!(word, "anunci");
        assert!(!RESIDUAL_CI.apply(&mut word, &regions));
        assert_eq!(word, "anunci");

        let regions = Regions::of("rapaci");
        assert_eq!(regions.rv.as_deref(), Some("aci"));
        let mut word = "rapaci".to_string();
        assert!(RESIDUAL_CI.apply(&mut word, &regions));
        assert_eq!(word, "rapac");
    }

    #[test]
    fn test_no_duplicate_rules_within_group() {
        for group in [
            &STANDARD_SUFFIX,
            &VERB_SUFFIX,
            &RESIDUAL_CI,
            &RESIDUAL_VOWEL,
            &RESIDUAL_E,
        ] {
            for (i, rule) in group.rules.iter().enumerate() {
                assert!(
                    !group.rules[..i].contains(rule),
                    "{} repeats {:?}",
                    group.name,
                    rule
                );
            }
        }
    }
}
