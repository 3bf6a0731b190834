//! Letter timing and scroll drift for the hero.

use crate::config::{HERO_PARALLAX_FACTOR, LETTER_STAGGER_SECS};

/// Animation delay in seconds for every letter of `word`, continuing the
/// stagger after `offset` letters already shown.
pub fn letter_delays(word: &str, offset: usize) -> Vec<(char, f64)> {
    word.chars()
        .enumerate()
        .map(|(i, c)| (c, (i + offset) as f64 * LETTER_STAGGER_SECS))
        .collect()
}

pub fn letter_style(delay_secs: f64) -> String {
    format!("animation-delay: {:.2}s;", delay_secs)
}

pub fn hero_parallax_style(scroll_y: f64) -> String {
    format!("transform: translateY({:.2}px);", scroll_y * HERO_PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_word_continues_the_stagger() {
        let first = letter_delays("DIGITAL", 0);
        let second = letter_delays("DESIGNER", first.len());
        assert_eq!(first.len(), 7);
        assert_eq!(first[0], ('D', 0.0));
        assert_eq!(second[0].0, 'D');
        assert!((second[0].1 - 0.63).abs() < 1e-9);
        assert_eq!(letter_style(second[0].1), "animation-delay: 0.63s;");
        assert_eq!(letter_style(second[7].1), "animation-delay: 1.26s;");
    }

    #[test]
    fn hero_drifts_at_a_quarter_of_scroll_speed() {
        assert_eq!(hero_parallax_style(0.0), "transform: translateY(0.00px);");
        assert_eq!(hero_parallax_style(400.0), "transform: translateY(100.00px);");
        assert_eq!(hero_parallax_style(2.0), "transform: translateY(0.50px);");
    }
}
