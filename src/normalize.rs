//! Traditional to simplified Chinese text normalization.
//!
//! Normalization is a character-by-character substitution through a static
//! table. Characters without an entry pass through unchanged, so text that is
//! already simplified, punctuation and Latin text are left as they are.

use std::collections::HashMap;

use lazy_static::lazy_static;

mod table;

use table::TRADITIONAL_TO_SIMPLIFIED;

lazy_static! {
    static ref T2S: HashMap<char, char> = TRADITIONAL_TO_SIMPLIFIED.iter().copied().collect();
}

/// Map a single character to its simplified form.
pub fn simplify_char(c: char) -> char {
    T2S.get(&c).copied().unwrap_or(c)
}

/// Whether the character has a simplified counterpart in the table.
pub fn is_traditional(c: char) -> bool {
    T2S.contains_key(&c)
}

/// Convert traditional characters in `text` to simplified ones.
pub fn to_simplified(text: &str) -> String {
    text.chars().map(simplify_char).collect()
}

/// Convert every entry of `lines`, keeping order and length.
pub fn to_simplified_all(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| to_simplified(line)).collect()
}

/// Number of entries in the character table.
pub fn table_len() -> usize {
    T2S.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(to_simplified("靜夜思"), "静夜思");
        assert_eq!(to_simplified("國學經典"), "国学经典");
        assert_eq!(to_simplified("春眠不覺曉，處處聞啼鳥。"), "春眠不觉晓，处处闻啼鸟。");
    }

    #[test]
    fn test_common_poem_characters() {
        assert_eq!(
            to_simplified("兩個黃鸝鳴翠柳 醉臥沙場 裏 覽 詢 謂 迴 週 閒"),
            "两个黄鹂鸣翠柳 醉卧沙场 里 览 询 谓 回 周 闲"
        );
        assert_eq!(to_simplified("葡萄美酒夜光杯，欲飲琵琶馬上催。"), "葡萄美酒夜光杯，欲饮琵琶马上催。");
    }

    #[test]
    fn test_unmapped_text_is_identity() {
        for text in ["李白", "床前明月光", "hello, world", "", "123 !?", "静夜思"] {
            assert_eq!(to_simplified(text), text);
        }
    }

    #[test]
    fn test_idempotent_over_table() {
        let all: String = TRADITIONAL_TO_SIMPLIFIED.iter().map(|(t, _)| *t).collect();
        let once = to_simplified(&all);
        assert_eq!(to_simplified(&once), once);
        assert!(once.chars().all(|c| !is_traditional(c)));
    }

    #[test]
    fn test_table_has_no_chains() {
        for (traditional, simplified) in TRADITIONAL_TO_SIMPLIFIED {
            assert_ne!(traditional, simplified);
            assert!(
                !is_traditional(*simplified),
                "{simplified} is both a target and a key"
            );
        }
        assert_eq!(table_len(), TRADITIONAL_TO_SIMPLIFIED.len());
    }

    #[test]
    fn test_all_preserves_order_and_length() {
        let lines = vec![
            "白日依山盡".to_string(),
            String::new(),
            "黃河入海流".to_string(),
        ];
        let converted = to_simplified_all(&lines);
        assert_eq!(converted, vec!["白日依山尽", "", "黄河入海流"]);
    }

    #[test]
    fn test_char_count_is_preserved() {
        let text = "歸來見天子，天子坐明堂。";
        assert_eq!(to_simplified(text).chars().count(), text.chars().count());
    }
}
