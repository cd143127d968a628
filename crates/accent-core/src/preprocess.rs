use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lookup-key preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Normalize a headword or query into an index key
pub fn normalize_key(text: &str) -> String {
    DefaultPreprocessor.process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_folds_width() {
        assert_eq!(normalize_key("  ｶﾀｶﾅ\n"), "カタカナ");
        assert_eq!(normalize_key("ＡＢＣ"), "ABC");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(normalize_key(" \t\r\n"), "");
        assert_eq!(normalize_key("\u{3000}"), "");
    }
}
