use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Style {
    Integer { percent: bool, plus: bool },
    Star,
}

/// An animatable stat value, parsed from its display text. Values with a
/// slash ("24/7") never animate and parse to `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget {
    end: f64,
    style: Style,
}

impl CounterTarget {
    pub fn parse(text: &str) -> Option<Self> {
        if text.contains('/') {
            return None;
        }
        if text.contains('★') {
            let digits: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let end: f64 = digits.parse().ok()?;
            return Some(Self {
                end,
                style: Style::Star,
            });
        }
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let end: f64 = digits.parse().ok()?;
        Some(Self {
            end,
            style: Style::Integer {
                percent: text.contains('%'),
                plus: text.contains('+'),
            },
        })
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Per-tick step so the run lasts the configured duration.
    pub fn increment(&self) -> f64 {
        self.end / (config::COUNTER_DURATION_MS as f64 / config::COUNTER_TICK_MS as f64)
    }

    pub fn advance(&self, value: f64) -> f64 {
        (value + self.increment()).min(self.end)
    }

    pub fn is_done(&self, value: f64) -> bool {
        value >= self.end
    }

    pub fn render(&self, value: f64) -> String {
        match self.style {
            Style::Star => format!("{:.1}★", value),
            Style::Integer { percent, plus } => {
                let mut out = format!("{}", value.floor() as i64);
                if percent {
                    out.push('%');
                }
                if plus {
                    out.push('+');
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_values_never_animate() {
        assert_eq!(CounterTarget::parse("24/7"), None);
    }

    #[test]
    fn non_numeric_values_never_animate() {
        assert_eq!(CounterTarget::parse("ISO"), None);
    }

    #[test]
    fn plus_suffix_survives_animation() {
        let target = CounterTarget::parse("500+").unwrap();
        assert_eq!(target.end(), 500.0);
        assert_eq!(target.render(123.7), "123+");
        assert_eq!(target.render(target.end()), "500+");
    }

    #[test]
    fn percent_suffix_survives_animation() {
        let target = CounterTarget::parse("98%").unwrap();
        assert_eq!(target.render(target.end()), "98%");
    }

    #[test]
    fn star_values_keep_one_decimal() {
        let target = CounterTarget::parse("4.9★").unwrap();
        assert_eq!(target.end(), 4.9);
        assert_eq!(target.render(2.0), "2.0★");
        assert_eq!(target.render(target.end()), "4.9★");
    }

    #[test]
    fn advance_clamps_at_the_end_value() {
        let target = CounterTarget::parse("500+").unwrap();
        let mut value = 0.0;
        let mut ticks = 0;
        while !target.is_done(value) {
            value = target.advance(value);
            ticks += 1;
            assert!(ticks <= 200, "counter failed to converge");
        }
        assert_eq!(value, 500.0);
        // 2000ms at a 16ms tick is 125 steps
        assert_eq!(ticks, 125);
    }
}
