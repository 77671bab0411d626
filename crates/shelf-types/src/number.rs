//! Text rendering of REAL values.

/// Renders a float in its shortest round-trip form, keeping a trailing
/// `.0` on whole values (`12.5`, `45.0`, `999.99`).
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
