use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn title_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn slide_title_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn progress_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn indicator_active_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn control_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn disabled_fg() -> Color {
    Color::AnsiValue(240)
} // Dim grey

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Fades a 256-color code towards black by opacity.
///
/// Fully opaque keeps the base color; anything lower maps onto the
/// 24-step grayscale ramp (232-255), so the panel dims as it slides away.
/// Returns `None` when the cell should not be drawn at all.
pub fn faded(base: u8, opacity: f64) -> Option<u8> {
    if opacity >= 0.95 {
        Some(base)
    } else if opacity < 0.05 {
        None
    } else {
        Some(232 + (opacity * 23.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ansi_code() {
        assert_eq!(get_ansi_code(text_fg(), 0), 231);
        assert_eq!(get_ansi_code(Color::Red, 9), 9);
    }

    #[test]
    fn test_faded_ramp() {
        assert_eq!(faded(226, 1.0), Some(226));
        assert_eq!(faded(226, 0.0), None);
        assert_eq!(faded(226, 0.5), Some(244));
        assert_eq!(faded(226, 0.06), Some(233));
    }
}
