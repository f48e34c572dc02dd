// File: crates/wealth-health/src/format.rs
// Summary: Tooltip text for a hovered country.

use bubble_core::format::{fixed, thousands};

/// `GDP/capita $12,345 Life expectancy: 63.2yrs`
pub fn tooltip_body(gdp: f64, life_expectancy: f64) -> String {
    format!("GDP/capita ${} Life expectancy: {}yrs", thousands(gdp), fixed(life_expectancy, 1))
}
