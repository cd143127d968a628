use unicode_normalization::UnicodeNormalization;

/// Small kana that share a mora with the kana before them
const SMALL_KANA: &str = "ぁぃぅぇぉゃゅょゎァィゥェォャュョヮ";

/// Combining dakuten/handakuten, half-width sound marks and the enclosing circle
const COMBINING: [char; 5] = ['\u{3099}', '\u{309A}', '\u{FF9E}', '\u{FF9F}', '\u{20DD}'];

const ENCLOSING_CIRCLE: char = '\u{20DD}';

/// Katakana with a circled form, in the order of U+32D0..
const CIRCLED_BASE: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワ";
const CIRCLED_START: u32 = 0x32D0;

/// Whether `c` extends the previous mora instead of starting one
pub fn attaches_to_previous(c: char) -> bool {
    SMALL_KANA.contains(c) || COMBINING.contains(&c)
}

/// Hiragana, katakana, the long-vowel mark and circled katakana
pub fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{3096}'
        | '\u{30A1}'..='\u{30FA}'
        | 'ー'
        | '\u{32D0}'..='\u{32FE}')
}

/// Add `c` to the morae read so far. False when `c` must attach to a
/// previous mora and there is none.
pub fn push_mora_char(morae: &mut Vec<String>, c: char) -> bool {
    if !attaches_to_previous(c) {
        morae.push(c.to_string());
        return true;
    }

    match morae.last_mut() {
        Some(last) => {
            last.push(c);
            true
        }
        None => false,
    }
}

/// Devoiced morae are written circled: "㋖" or "き⃝"
pub fn is_devoiced(mora: &str) -> bool {
    mora.chars()
        .any(|c| c == ENCLOSING_CIRCLE || ('\u{32D0}'..='\u{32FE}').contains(&c))
}

/// Circle every kana in `text`. Katakana with a circled form use it, with
/// voiced marks kept as half-width ﾞ/ﾟ; anything else gets U+20DD.
pub fn to_circle(text: &str) -> String {
    let mut circled = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        let mut parts = std::iter::once(c).nfd();
        let base = parts.next().unwrap_or(c);
        let mark = match parts.next() {
            None => Some(None),
            Some('\u{3099}') => Some(Some('ﾞ')),
            Some('\u{309A}') => Some(Some('ﾟ')),
            Some(_) => None,
        };

        match (circled_katakana(base), mark) {
            (Some(circle), Some(mark)) => {
                circled.push(circle);
                circled.extend(mark);
            }
            _ => {
                circled.push(c);
                circled.push(ENCLOSING_CIRCLE);
            }
        }
    }

    circled
}

/// Label for a mora: devoiced morae written with U+20DD are redrawn in
/// circled form, everything else is returned as is
pub fn circle_mora(mora: &str) -> String {
    if !mora.contains(ENCLOSING_CIRCLE) {
        return mora.to_string();
    }

    let plain: String = mora
        .chars()
        .filter(|&c| c != ENCLOSING_CIRCLE)
        .nfc()
        .collect();
    let mut chars = plain.chars();
    match chars.next() {
        Some(head) => {
            let mut label = to_circle(&head.to_string());
            label.extend(chars);
            label
        }
        None => mora.to_string(),
    }
}

fn circled_katakana(c: char) -> Option<char> {
    let index = CIRCLED_BASE.chars().position(|base| base == c)?;
    char::from_u32(CIRCLED_START + index as u32)
}

/// Fold katakana to hiragana so either script matches a reading
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}
