use ratatui::style::Color;

/// Human name for a color value 1-9.
pub fn name(value: u8) -> &'static str {
    match value {
        1 => "Red",
        2 => "Yellow",
        3 => "Blue",
        4 => "Green",
        5 => "Purple",
        6 => "Orange",
        7 => "Pink",
        8 => "Black",
        9 => "White",
        _ => "Empty",
    }
}

/// Terminal color for a value 1-9. Zero (empty) gets a dim gray.
pub fn color(value: u8) -> Color {
    match value {
        1 => Color::Rgb(239, 68, 68),
        2 => Color::Rgb(250, 204, 21),
        3 => Color::Rgb(59, 130, 246),
        4 => Color::Rgb(34, 197, 94),
        5 => Color::Rgb(168, 85, 247),
        6 => Color::Rgb(249, 115, 22),
        7 => Color::Rgb(244, 114, 182),
        8 => Color::Rgb(17, 24, 39),
        9 => Color::Rgb(245, 245, 245),
        _ => Color::DarkGray,
    }
}

/// Foreground that stays readable on top of `color(value)`.
pub fn contrast(value: u8) -> Color {
    match value {
        2 | 7 | 9 => Color::Black,
        _ => Color::White,
    }
}
