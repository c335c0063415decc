//! Marquee scroller: fixed-width windows over the now-playing string.
//!
//! Short strings are shown unscrolled and right-padded to the window width.
//! Longer strings loop through the window with a four-space gap between
//! repetitions, like a hardware LCD ticker.

use crate::config::MarqueeSettings;

/// Gap inserted between successive loops of the scrolled text.
pub const LOOP_GAP: usize = 4;

/// True when `text` needs scrolling at the given window width.
pub fn overflows(text: &str, width: usize) -> bool {
    text.chars().count() > width
}

/// Advance a scroll cursor one step, wrapping modulo `text_len + LOOP_GAP`.
pub fn advance(pos: usize, text_len: usize) -> usize {
    if text_len == 0 {
        return 0;
    }
    (pos + 1) % (text_len + LOOP_GAP)
}

/// The visible `width`-character window at scroll position `pos`.
pub fn window(text: &str, width: usize, pos: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:<width$}");
    }

    // One loop unit is the text plus the gap; two units are always enough to
    // cover any window starting inside the first.
    let unit: String = text.chars().chain(std::iter::repeat(' ').take(LOOP_GAP)).collect();
    unit.chars().chain(unit.chars()).skip(pos).take(width).collect()
}

/// Window width for the current viewport: narrow skins get the short ticker.
pub fn width_for(viewport_cols: u16, settings: &MarqueeSettings) -> usize {
    if viewport_cols < settings.narrow_viewport_cols {
        settings.narrow_width
    } else {
        settings.wide_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded_not_scrolled() {
        assert!(!overflows("abc", 5));
        assert_eq!(window("abc", 5, 0), "abc  ");
        // Scroll position is irrelevant for short text.
        assert_eq!(window("abc", 5, 3), "abc  ");
    }

    #[test]
    fn long_text_windows_wrap_through_the_gap() {
        let text = "abcdefgh"; // len 8, window 5
        assert!(overflows(text, 5));
        assert_eq!(window(text, 5, 0), "abcde");
        assert_eq!(window(text, 5, 6), "gh   ");
        // Past the gap the text loops around.
        assert_eq!(window(text, 5, 10), "  abc");
        assert_eq!(window(text, 5, 11), " abcd");
    }

    #[test]
    fn advance_wraps_modulo_len_plus_gap() {
        assert_eq!(advance(0, 8), 1);
        assert_eq!(advance(10, 8), 11);
        assert_eq!(advance(11, 8), 0);
        assert_eq!(advance(0, 0), 0);
    }

    #[test]
    fn windows_count_characters_not_bytes() {
        let text = "ÀÈÌÒÙ and more";
        assert_eq!(window(text, 4, 0).chars().count(), 4);
        assert_eq!(window(text, 4, 2), "ÌÒÙ ");
    }

    #[test]
    fn width_follows_the_viewport_threshold() {
        let m = MarqueeSettings::default();
        assert_eq!(width_for(40, &m), m.narrow_width);
        assert_eq!(width_for(64, &m), m.wide_width);
        assert_eq!(width_for(120, &m), m.wide_width);
    }
}
