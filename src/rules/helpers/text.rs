//! Text utilities shared by evaluators that look at the raw question.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase and strip diacritics ("Prédio" -> "predio").
///
/// Text is decomposed first, so precomposed and combining-mark spellings fold
/// to the same string.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

/// What the question says about buildings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildingMention {
    None,
    /// "prédio"/"predio" appears; `numbers` holds any building numbers written
    /// right after it (possibly empty).
    Some { numbers: Vec<u32> },
}

impl BuildingMention {
    pub fn scan(question: &str) -> Self {
        let folded = fold_diacritics(question);
        if !folded.contains("predio") {
            return BuildingMention::None;
        }

        let numbers = regex!(r"predio\s*(?:n[o.º°]*\s*)?(\d+)")
            .captures_iter(&folded)
            .filter_map(|caps| caps[1].parse().ok())
            .collect();
        BuildingMention::Some { numbers }
    }

    pub fn mentions(&self, building: u32) -> bool {
        match self {
            BuildingMention::None => false,
            BuildingMention::Some { numbers } => numbers.contains(&building),
        }
    }
}
