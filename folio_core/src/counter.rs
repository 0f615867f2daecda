//! The token counter overlay shown while token mode is active.

use crate::config::TokenModeConfig;

pub const HINT: &str = "Press ESC to exit";

/// One labeled number in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLine {
    pub label: &'static str,
    pub value_class: &'static str,
    pub value: String,
}

/// Rendered numbers for the `#token-counter` element.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterOverlay {
    pub id: String,
    pub token_count: usize,
    pub estimated_cost: f64,
}

impl CounterOverlay {
    pub fn new(token_count: usize, config: &TokenModeConfig) -> Self {
        Self {
            id: config.counter_id.clone(),
            token_count,
            estimated_cost: estimate_cost(token_count, config),
        }
    }

    pub fn lines(&self) -> [CounterLine; 2] {
        [
            CounterLine {
                label: "TOKEN COUNT: ",
                value_class: "token-count-num",
                value: group_thousands(self.token_count),
            },
            CounterLine {
                label: "EST. COST: ",
                value_class: "token-cost-num",
                value: format!("${}", format_cost(self.estimated_cost)),
            },
        ]
    }

    /// Inner markup of the overlay element.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for line in self.lines() {
            html.push_str(&format!(
                "<div class=\"token-counter-line\">{}<span class=\"{}\">{}</span></div>",
                line.label, line.value_class, line.value
            ));
        }
        html.push_str(&format!("<div class=\"token-counter-hint\">{HINT}</div>"));
        html
    }
}

/// `(count / tokens_per_unit) * cost_per_unit`
pub fn estimate_cost(token_count: usize, config: &TokenModeConfig) -> f64 {
    if config.tokens_per_unit <= 0.0 {
        return 0.0;
    }
    token_count as f64 / config.tokens_per_unit * config.cost_per_unit
}

pub fn format_cost(cost: f64) -> String {
    format!("{cost:.6}")
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn cost_estimate() {
        let config = TokenModeConfig::default();
        assert_eq!(format_cost(estimate_cost(0, &config)), "0.000000");
        assert_eq!(format_cost(estimate_cost(750, &config)), "0.000100");
        assert_eq!(format_cost(estimate_cost(1500, &config)), "0.000200");
        assert_eq!(format_cost(estimate_cost(375, &config)), "0.000050");
    }

    #[test]
    fn overlay_markup() {
        let overlay = CounterOverlay::new(1500, &TokenModeConfig::default());
        assert_eq!(overlay.id, "token-counter");
        let html = overlay.to_html();
        assert!(html.contains("TOKEN COUNT: <span class=\"token-count-num\">1,500</span>"));
        assert!(html.contains("EST. COST: <span class=\"token-cost-num\">$0.000200</span>"));
        assert!(html.ends_with("<div class=\"token-counter-hint\">Press ESC to exit</div>"));
    }
}
