use serde::{Deserialize, Serialize};
use tuirealm::props::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetadata {
    /// Stable identifier, the equality key for "is this the active system".
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Opaque style-class references interpreted by the rendering layer.
///
/// The tokens come from the web styling engine the site originally shipped
/// with (`font-["Cinzel"]` and friends). They are carried verbatim and never
/// parsed; the terminal has no font control, so they surface only in the
/// design picker as display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_heading: String,
    pub font_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    // === Layout Colors ===
    pub bg_primary: String,
    pub bg_secondary: String,

    // === Core Text Colors ===
    pub text_primary: String,
    pub text_secondary: String,

    // === Accent Colors ===
    pub accent: String,
    pub accent_secondary: String,

    // === Border Color ===
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceOptions {
    /// Opaque length token handed to the rendering layer (e.g. "2px").
    pub border_radius: String,
    /// Toggles translucency + blur in all derived card/nav styles.
    pub glassmorphism: bool,
}

/// A complete, self-contained visual configuration that can be swapped as a
/// unit at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub metadata: SystemMetadata,
    pub typography: Typography,
    pub colors: Palette,
    pub surface: SurfaceOptions,
}

impl DesignSystem {
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn glassmorphism(&self) -> bool {
        self.surface.glassmorphism
    }
}

impl Palette {
    /// Convert a color token string to a tuirealm Color.
    ///
    /// Supports standard color names, 6-hex-digit tokens and 8-hex-digit
    /// tokens (alpha-composited variants; the alpha byte is dropped here,
    /// callers that care about translucency resolve it in the style deriver).
    pub fn hex_to_color(hex: &str) -> Color {
        if hex.is_empty() || hex == "reset" {
            return Color::Reset;
        }

        match hex.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            _ => {
                if let Ok(rgb) = Self::parse_hex_color(hex) {
                    Color::Rgb(rgb.0, rgb.1, rgb.2)
                } else {
                    Color::Reset
                }
            }
        }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` token into RGB components.
    pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err("Invalid hex color format");
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

        Ok((r, g, b))
    }

    /// Parse the alpha byte of an 8-hex-digit token. A 6-digit token is
    /// fully opaque.
    pub fn parse_hex_alpha(hex: &str) -> Result<u8, &'static str> {
        let hex = hex.trim_start_matches('#');
        match hex.len() {
            6 => Ok(0xff),
            8 => u8::from_str_radix(&hex[6..8], 16).map_err(|_| "Invalid alpha component"),
            _ => Err("Invalid hex color format"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color_parses_six_digit_tokens() {
        assert_eq!(Palette::hex_to_color("#d4af37"), Color::Rgb(0xd4, 0xaf, 0x37));
        assert_eq!(Palette::hex_to_color("#020617"), Color::Rgb(0x02, 0x06, 0x17));
    }

    #[test]
    fn test_hex_to_color_handles_named_colors() {
        assert_eq!(Palette::hex_to_color("white"), Color::White);
        assert_eq!(Palette::hex_to_color("darkgrey"), Color::DarkGray);
        assert_eq!(Palette::hex_to_color("reset"), Color::Reset);
    }

    #[test]
    fn test_hex_to_color_falls_back_to_reset_on_garbage() {
        assert_eq!(Palette::hex_to_color("#zzz"), Color::Reset);
        assert_eq!(Palette::hex_to_color("#12345"), Color::Reset);
    }

    #[test]
    fn test_parse_hex_alpha() {
        assert_eq!(Palette::parse_hex_alpha("#0f172a"), Ok(0xff));
        assert_eq!(Palette::parse_hex_alpha("#0f172a80"), Ok(0x80));
        assert_eq!(Palette::parse_hex_alpha("#0f172acc"), Ok(0xcc));
        assert!(Palette::parse_hex_alpha("#0f17").is_err());
    }
}
