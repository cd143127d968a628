use accent_core::{Error, Result};

use crate::kana;

/// Marks the mora after which pitch falls, e.g. "ハ＼シ"
const DROP_MARKS: [char; 2] = ['＼', '\\'];
/// Marks a word without a drop, e.g. "ハシ▔"
const FLAT_MARKS: [char; 2] = ['▔', '￣'];
/// Longest word a pattern may describe
pub const MAX_MORAE: usize = 32;

/// Parsed pitch-accent pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchPattern {
    pub mora_count: usize,
    /// Mora index after which pitch falls (0 = heiban)
    pub drop_position: usize,
    /// Kana per mora, empty for numeric patterns
    pub morae: Vec<String>,
}

impl PitchPattern {
    /// Parse numeric ("2", "0/3") or kana ("ハシ＼", "サクラ▔") notation
    pub fn parse(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_pattern(pattern, "empty pattern"));
        }

        if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            Self::parse_numeric(pattern, trimmed)
        } else {
            Self::parse_kana(pattern, trimmed)
        }
    }

    /// Build a pattern from counts, checking `drop_position <= mora_count`
    pub fn from_counts(mora_count: usize, drop_position: usize) -> Result<Self> {
        Self::checked(&format!("{drop_position}/{mora_count}"), mora_count, drop_position)
    }

    fn checked(pattern: &str, mora_count: usize, drop_position: usize) -> Result<Self> {
        if mora_count == 0 {
            return Err(Error::invalid_pattern(pattern, "pattern has no morae"));
        }
        if mora_count > MAX_MORAE {
            return Err(Error::invalid_pattern(
                pattern,
                format!("mora count {mora_count} exceeds {MAX_MORAE}"),
            ));
        }
        if drop_position > mora_count {
            return Err(Error::invalid_pattern(
                pattern,
                format!("drop position {drop_position} exceeds mora count {mora_count}"),
            ));
        }

        Ok(Self {
            mora_count,
            drop_position,
            morae: Vec::new(),
        })
    }

    fn parse_numeric(pattern: &str, body: &str) -> Result<Self> {
        let (drop, morae) = match body.split_once('/') {
            Some((drop, morae)) => (drop.trim(), Some(morae.trim())),
            None => (body, None),
        };

        let drop_position: usize = drop
            .parse()
            .map_err(|_| Error::invalid_pattern(pattern, format!("not a drop position: {drop:?}")))?;

        let mora_count = match morae {
            Some(morae) => morae.parse().map_err(|_| {
                Error::invalid_pattern(pattern, format!("not a mora count: {morae:?}"))
            })?,
            // A bare accent type describes the shortest word that can carry it
            None => drop_position.max(1),
        };

        Self::checked(pattern, mora_count, drop_position)
    }

    fn parse_kana(pattern: &str, body: &str) -> Result<Self> {
        let mut morae: Vec<String> = Vec::new();
        let mut drop = None;
        let mut flat = false;

        for c in body.chars() {
            if c.is_whitespace() {
                continue;
            } else if DROP_MARKS.contains(&c) {
                if morae.is_empty() {
                    return Err(Error::invalid_pattern(pattern, "drop marker before first mora"));
                }
                if drop.is_some() {
                    return Err(Error::invalid_pattern(pattern, "more than one drop marker"));
                }
                drop = Some(morae.len());
            } else if FLAT_MARKS.contains(&c) {
                flat = true;
            } else if kana::is_kana(c) || kana::attaches_to_previous(c) {
                if !kana::push_mora_char(&mut morae, c) {
                    return Err(Error::invalid_pattern(
                        pattern,
                        format!("{c:?} has no mora to attach to"),
                    ));
                }
            } else {
                return Err(Error::invalid_pattern(
                    pattern,
                    format!("unexpected character {c:?}"),
                ));
            }
        }

        if flat && drop.is_some() {
            return Err(Error::invalid_pattern(
                pattern,
                "both drop and flat markers present",
            ));
        }

        let mut parsed = Self::checked(pattern, morae.len(), drop.unwrap_or(0))?;
        parsed.morae = morae;
        Ok(parsed)
    }

    pub fn pattern_type(&self) -> PatternType {
        match self.drop_position {
            0 => PatternType::Heiban,
            1 => PatternType::Atamadaka,
            d if d == self.mora_count => PatternType::Odaka,
            _ => PatternType::Nakadaka,
        }
    }

    /// Pitch of the 1-based mora `index`
    pub fn is_high(&self, index: usize) -> bool {
        if index <= 1 {
            return self.drop_position == 1;
        }
        self.drop_position == 0 || index <= self.drop_position
    }

    /// Whether the 1-based mora `index` is written devoiced
    pub fn is_devoiced(&self, index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|i| self.morae.get(i))
            .is_some_and(|mora| kana::is_devoiced(mora))
    }

    /// Pitch of a particle following the word
    pub fn particle_is_high(&self) -> bool {
        self.drop_position == 0
    }

    /// High/low per mora, in order
    pub fn contour(&self) -> Vec<bool> {
        (1..=self.mora_count).map(|i| self.is_high(i)).collect()
    }

    /// Canonical "drop/morae" form
    pub fn notation(&self) -> String {
        format!("{}/{}", self.drop_position, self.mora_count)
    }

    /// Get pattern type name
    pub fn type_name(&self) -> &'static str {
        self.pattern_type().as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternType {
    Heiban,     // 平板型 - flat (no drop)
    Atamadaka,  // 頭高型 - head-high (drop after 1st mora)
    Nakadaka,   // 中高型 - mid-high (drop in middle)
    Odaka,      // 尾高型 - tail-high (drop at end)
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Heiban => "Heiban (Flat)",
            PatternType::Atamadaka => "Atamadaka (Head-high)",
            PatternType::Nakadaka => "Nakadaka (Mid-high)",
            PatternType::Odaka => "Odaka (Tail-high)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(pattern: &str) -> bool {
        matches!(PitchPattern::parse(pattern), Err(Error::InvalidPattern { .. }))
    }

    #[test]
    fn bare_accent_type() {
        let p = PitchPattern::parse("2").unwrap();
        assert_eq!((p.mora_count, p.drop_position), (2, 2));
        assert_eq!(p.pattern_type(), PatternType::Odaka);
        assert_eq!(p.contour(), vec![false, true]);
        assert!(!p.particle_is_high());

        let flat = PitchPattern::parse("0").unwrap();
        assert_eq!((flat.mora_count, flat.drop_position), (1, 0));
        assert!(flat.particle_is_high());
    }

    #[test]
    fn explicit_mora_count() {
        let p = PitchPattern::parse(" 2 / 4 ").unwrap();
        assert_eq!(p.pattern_type(), PatternType::Nakadaka);
        assert_eq!(p.contour(), vec![false, true, false, false]);
        assert_eq!(p.notation(), "2/4");

        let head = PitchPattern::parse("1/3").unwrap();
        assert_eq!(head.pattern_type(), PatternType::Atamadaka);
        assert_eq!(head.contour(), vec![true, false, false]);

        let flat = PitchPattern::parse("0/3").unwrap();
        assert_eq!(flat.type_name(), "Heiban (Flat)");
        assert_eq!(flat.contour(), vec![false, true, true]);
    }

    #[test]
    fn drop_beyond_word_is_rejected() {
        assert!(invalid("3/2"));
        assert!(invalid("0/0"));
        assert!(PitchPattern::from_counts(2, 3).is_err());
        assert!(PitchPattern::from_counts(2, 2).is_ok());
    }

    #[test]
    fn oversized_words_are_rejected() {
        assert!(PitchPattern::parse("32").is_ok());
        assert!(PitchPattern::parse("0/32").is_ok());
        assert!(invalid("33"));
        assert!(invalid("0/33"));
        assert!(invalid("1000000000"));
        assert!(invalid("18446744073709551615"));
        assert!(invalid("0/18446744073709551615"));
        assert!(invalid(&"ア".repeat(MAX_MORAE + 1)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(invalid(""));
        assert!(invalid("   "));
        assert!(invalid("2/x"));
        assert!(invalid("2a"));
        assert!(invalid("-1"));
        assert!(invalid("橋"));
    }

    #[test]
    fn kana_with_drop_marker() {
        let p = PitchPattern::parse("ハ＼シ").unwrap();
        assert_eq!(p.morae, vec!["ハ", "シ"]);
        assert_eq!(p.drop_position, 1);

        let p = PitchPattern::parse("アブラ\\ケ\u{309A}").unwrap();
        assert_eq!(p.mora_count, 4);
        assert_eq!(p.drop_position, 3);
        assert_eq!(p.morae[3], "ケ\u{309A}");

        let p = PitchPattern::parse("キョ＼ウ").unwrap();
        assert_eq!(p.mora_count, 2);
        assert_eq!(p.drop_position, 1);
    }

    #[test]
    fn kana_flat_and_unmarked() {
        let p = PitchPattern::parse("サクラ▔").unwrap();
        assert_eq!((p.mora_count, p.drop_position), (3, 0));
        let p = PitchPattern::parse("サクラ").unwrap();
        assert_eq!(p.pattern_type(), PatternType::Heiban);
    }

    #[test]
    fn kana_with_devoiced_mora() {
        let p = PitchPattern::parse("㋖ク＼").unwrap();
        assert_eq!(p.morae, vec!["㋖", "ク"]);
        assert!(p.is_devoiced(1));
        assert!(!p.is_devoiced(2));
        assert!(!p.is_devoiced(0));

        let p = PitchPattern::parse("シ⃝タ").unwrap();
        assert_eq!(p.mora_count, 2);
        assert!(p.is_devoiced(1));
        assert!(!PitchPattern::parse("2").unwrap().is_devoiced(1));
    }

    #[test]
    fn kana_marker_misuse() {
        assert!(invalid("＼ハシ"));
        assert!(invalid("ハ＼シ＼"));
        assert!(invalid("ハ＼シ▔"));
        assert!(invalid("ャハ"));
        assert!(invalid("\u{20DD}ハ"));
        assert!(invalid("ハシabc"));
    }
}
