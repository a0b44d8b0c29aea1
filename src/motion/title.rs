use crate::models::LetterUnit;

pub const WORD_DELAY_SECS: f64 = 0.1;
pub const LETTER_DELAY_SECS: f64 = 0.03;

/// Reveal springs for title letters
pub const LETTER_STIFFNESS: f64 = 150.0;
pub const LETTER_DAMPING: f64 = 25.0;

pub fn reveal_delay(word_index: usize, letter_index: usize) -> f64 {
    word_index as f64 * WORD_DELAY_SECS + letter_index as f64 * LETTER_DELAY_SECS
}

/// Break a title into letters with staggered reveal delays. Runs of whitespace
/// separate words and are otherwise dropped.
pub fn sequence(title: &str) -> Vec<LetterUnit> {
    title
        .split_whitespace()
        .enumerate()
        .flat_map(|(word_index, word)| {
            word.chars()
                .enumerate()
                .map(move |(letter_index, glyph)| LetterUnit {
                    word_index,
                    letter_index,
                    glyph,
                    delay_secs: reveal_delay(word_index, letter_index),
                })
        })
        .collect()
}

/// Regroup a sequence into its words, in order.
pub fn words(units: &[LetterUnit]) -> Vec<&[LetterUnit]> {
    units
        .chunk_by(|a, b| a.word_index == b.word_index)
        .collect()
}
