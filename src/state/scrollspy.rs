use crate::config;

pub const PARTICLE_PARALLAX_SPEED: f64 = 0.1;
pub const DECORATION_PARALLAX_SPEED: f64 = 0.05;

pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

/// The highlighted nav link: the last section whose top edge (minus the
/// spy offset) has scrolled past. `sections` is in document order.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - config::SECTION_SPY_OFFSET {
            current = Some(*id);
        }
    }
    current
}

/// Translate-Y for a parallax layer; deeper layers drift faster.
pub fn parallax_offset(layer: usize, scroll_y: f64, speed: f64) -> f64 {
    scroll_y * (layer as f64 + 1.0) * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_condenses_past_the_threshold() {
        assert!(!navbar_condensed(0.0));
        assert!(!navbar_condensed(100.0));
        assert!(navbar_condensed(101.0));
    }

    #[test]
    fn back_to_top_appears_past_the_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn active_section_tracks_scroll_position() {
        let sections = [("home", 0.0), ("services", 800.0), ("contact", 2000.0)];
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 599.0), Some("home"));
        assert_eq!(active_section(&sections, 600.0), Some("services"));
        assert_eq!(active_section(&sections, 1800.0), Some("contact"));
    }

    #[test]
    fn no_section_is_active_above_the_first() {
        let sections = [("services", 800.0)];
        assert_eq!(active_section(&sections, 0.0), None);
    }

    #[test]
    fn parallax_layers_scale_with_depth() {
        assert_eq!(parallax_offset(0, 100.0, PARTICLE_PARALLAX_SPEED), 10.0);
        assert_eq!(parallax_offset(2, 100.0, PARTICLE_PARALLAX_SPEED), 30.0);
        assert_eq!(parallax_offset(0, 100.0, DECORATION_PARALLAX_SPEED), 5.0);
    }
}
