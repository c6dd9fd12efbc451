//! One-shot fade-in for cards as they scroll into view.

use crate::config::RevealSettings;

/// Stagger for the card at `index`, in seconds, rounded to whole milliseconds
/// so `3 × 0.1` prints as `0.3`.
pub fn transition_delay(index: usize, settings: &RevealSettings) -> f64 {
    (index as f64 * settings.stagger_secs * 1000.0).round() / 1000.0
}

/// Inline style for a card; the transition is always present so the move to
/// the resting state animates.
pub fn reveal_style(revealed: bool, index: usize, settings: &RevealSettings) -> String {
    let (opacity, offset) = if revealed { (1, 0) } else { (0, settings.offset_px) };
    let delay = transition_delay(index, settings);
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {d}s ease-out, transform {d}s ease-out; \
         transition-delay: {delay}s;",
        d = settings.duration_secs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_staggered_by_index() {
        let settings = RevealSettings::default();
        assert_eq!(transition_delay(0, &settings), 0.0);
        assert_eq!(transition_delay(3, &settings), 0.3);
    }

    #[test]
    fn hidden_cards_sit_lower_and_transparent() {
        let style = reveal_style(false, 2, &RevealSettings::default());
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateY(30px)"));
        assert!(style.contains("transition-delay: 0.2s;"));
        assert!(style.contains("opacity 0.6s ease-out"));
    }

    #[test]
    fn finer_stagger_keeps_exact_delays() {
        let settings = RevealSettings { stagger_secs: 0.05, ..RevealSettings::default() };
        assert!(reveal_style(false, 3, &settings).contains("transition-delay: 0.15s;"));
        assert!(reveal_style(false, 7, &settings).contains("transition-delay: 0.35s;"));
        let tenth = RevealSettings::default();
        assert!(reveal_style(false, 3, &tenth).contains("transition-delay: 0.3s;"));
        assert!(reveal_style(false, 0, &tenth).contains("transition-delay: 0s;"));
    }

    #[test]
    fn revealed_cards_rest_in_place() {
        let style = reveal_style(true, 0, &RevealSettings::default());
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("translateY(0px)"));
    }
}
