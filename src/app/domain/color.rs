/// An sRGB color as stored in settings: `#rrggbb` or a well-known name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb(0, 0, 0)),
    ("white", Rgb(255, 255, 255)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 128, 0)),
    ("blue", Rgb(0, 0, 255)),
    ("yellow", Rgb(255, 255, 0)),
    ("cyan", Rgb(0, 255, 255)),
    ("magenta", Rgb(255, 0, 255)),
    ("gray", Rgb(128, 128, 128)),
    ("grey", Rgb(128, 128, 128)),
    ("darkgray", Rgb(169, 169, 169)),
    ("lightgray", Rgb(211, 211, 211)),
    ("navy", Rgb(0, 0, 128)),
    ("maroon", Rgb(128, 0, 0)),
    ("olive", Rgb(128, 128, 0)),
    ("purple", Rgb(128, 0, 128)),
    ("teal", Rgb(0, 128, 128)),
    ("silver", Rgb(192, 192, 192)),
];

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse `#rrggbb`, `#rgb` or a color name (case-insensitive).
    pub fn parse(s: &str) -> Option<Rgb> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| *rgb)
    }

    fn parse_hex(hex: &str) -> Option<Rgb> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb(r, g, b))
            }
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Which of a window's two colors a picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Font,
    Background,
}

impl ColorTarget {
    pub fn title(self) -> &'static str {
        match self {
            Self::Font => "Choose Font Color",
            Self::Background => "Choose Background Color",
        }
    }

    /// Used when a stored color string can't be parsed.
    pub fn fallback(self) -> Rgb {
        match self {
            Self::Font => Rgb::BLACK,
            Self::Background => Rgb::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Rgb::parse("black"), Some(Rgb::BLACK));
        assert_eq!(Rgb::parse("White"), Some(Rgb::WHITE));
        assert_eq!(Rgb::parse("  navy "), Some(Rgb(0, 0, 128)));
        assert_eq!(Rgb::parse("chartreuse-ish"), None);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#1e1e1e"), Some(Rgb(30, 30, 30)));
        assert_eq!(Rgb::parse("#FFA500"), Some(Rgb(255, 165, 0)));
        assert_eq!(Rgb::parse("#fff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#gg0000"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb(255, 165, 0).to_hex(), "#ffa500");
        assert_eq!(Rgb::parse(&Rgb(1, 2, 3).to_hex()), Some(Rgb(1, 2, 3)));
    }
}
