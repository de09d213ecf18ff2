//! Han character detection.
use std::ops::RangeInclusive;

use unicode_script::{Script, UnicodeScript};

/// CJK Unified Ideographs as they were in Unicode 2.0 to 4.0.
///
/// Newer ideographs (U+9FA6 onwards, extension blocks) are not in this range.
pub const HAN_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FA5}';

/// `true` if `c` is in [HAN_RANGE].
pub fn is_han(c: char) -> bool {
    HAN_RANGE.contains(&c)
}

/// Decides which characters are worth a radical lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Classifier {
    /// [HAN_RANGE] only.
    #[default]
    Legacy,
    /// Any character of the Han script, extension blocks included.
    HanScript,
}

impl Classifier {
    pub fn classify(&self, c: char) -> bool {
        match self {
            Self::Legacy => is_han(c),
            Self::HanScript => c.script() == Script::Han,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_bounds() {
        assert!(is_han('\u{4E00}'));
        assert!(is_han('\u{9FA5}'));
        assert!(is_han('中'));
        assert!(!is_han('\u{4DFF}'));
        assert!(!is_han('\u{9FA6}'));
    }

    #[test]
    fn non_han() {
        for c in ['A', '1', ' ', '。', 'é', 'あ', '한'] {
            assert!(!Classifier::Legacy.classify(c), "{c:?}");
            assert!(!Classifier::HanScript.classify(c), "{c:?}");
        }
    }

    #[test]
    fn han_script_is_wider() {
        // U+9FA6 and extension B
        for c in ['\u{9FA6}', '\u{20000}'] {
            assert!(!Classifier::Legacy.classify(c));
            assert!(Classifier::HanScript.classify(c));
        }
    }
}
