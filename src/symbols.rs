use unicode_segmentation::UnicodeSegmentation;

/// One user-perceived character of the entered text.
pub type Symbol = String;

/// Splits raw input into the symbols that get sorted.
///
/// Text is split on extended grapheme clusters and every cluster made only
/// of whitespace is dropped, so `"b a"` and `"ba"` sort the same sequence.
pub fn parse_symbols(input: &str) -> Vec<Symbol> {
    input
        .graphemes(true)
        .filter(|g| !g.chars().all(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("BA", &["B", "A"])]
    #[case("I N\tS\nE", &["I", "N", "S", "E"])]
    #[case("e\u{301}a", &["e\u{301}", "a"])]
    fn splits_into_graphemes_without_whitespace(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_symbols(input), expected);
    }

    #[test]
    fn counts_default_input() {
        assert_eq!(parse_symbols("INSERTIONSORT").len(), 13);
    }
}
