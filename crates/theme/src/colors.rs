/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Self = Self { r: 0xa6, g: 0xe3, b: 0xa1 }; // #a6e3a1
    pub const RED:   Self = Self { r: 0xf3, g: 0x8b, b: 0xa8 }; // #f38ba8

    /// Parse a CSS-style hex color string (`#RRGGBB`, or `#RRGGBBAA` with the
    /// alpha channel ignored since terminals have no transparency).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 | 8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
            }),
            _ => None,
        }
    }

    /// Convert to a [`crossterm::style::Color`] for styled terminal output.
    #[inline]
    pub fn to_crossterm(self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb { r: self.r, g: self.g, b: self.b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(Color::from_hex("#a6e3a1"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("f38ba8ff"), Some(Color::RED));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }
}
