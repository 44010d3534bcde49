//! Completion-suggester keyword derivation.

use crate::catalog::item::non_blank;

/// Words shorter than this (in characters) are not worth suggesting.
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 2;

/// Derive completion inputs for a product.
///
/// The name is split on whitespace runs; words of at least `min_len`
/// characters are kept once each, in order of first appearance. A non-blank
/// brand and then a non-blank category are appended, trimmed, whether or not
/// they already appear among the name words.
pub fn suggestion_inputs(
    name: &str,
    brand: Option<&str>,
    category: Option<&str>,
    min_len: usize,
) -> Vec<String> {
    let mut inputs: Vec<String> = Vec::new();

    for word in name.split_whitespace() {
        if word.chars().count() < min_len {
            continue;
        }
        if !inputs.iter().any(|w| w == word) {
            inputs.push(word.to_string());
        }
    }

    if let Some(brand) = non_blank(brand) {
        inputs.push(brand.to_string());
    }
    if let Some(category) = non_blank(category) {
        inputs.push(category.to_string());
    }

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_filters_short_words() {
        let inputs = suggestion_inputs(
            "RIMOWA 21寸托运箱拉杆箱 SALSA AIR系列果绿色",
            None,
            None,
            DEFAULT_MIN_KEYWORD_LEN,
        );
        assert_eq!(inputs, vec!["RIMOWA", "21寸托运箱拉杆箱", "SALSA", "AIR系列果绿色"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // "箱" is three bytes but one character.
        let inputs = suggestion_inputs("箱 包包 a", None, None, 2);
        assert_eq!(inputs, vec!["包包"]);
    }

    #[test]
    fn test_deduplicates_keeping_first_occurrence() {
        let inputs = suggestion_inputs("red  shoe\tred\nshoe boot", None, None, 2);
        assert_eq!(inputs, vec!["red", "shoe", "boot"]);
    }

    #[test]
    fn test_appends_brand_then_category() {
        let inputs = suggestion_inputs("Nike Air Max", Some(" Nike "), Some("Sneakers"), 2);
        assert_eq!(inputs, vec!["Nike", "Air", "Max", "Nike", "Sneakers"]);
    }

    #[test]
    fn test_blank_metadata_skipped() {
        let inputs = suggestion_inputs("Lamp", Some("  "), Some(""), 2);
        assert_eq!(inputs, vec!["Lamp"]);
    }

    #[test]
    fn test_empty_name() {
        assert!(suggestion_inputs("   ", None, None, 2).is_empty());
    }
}
