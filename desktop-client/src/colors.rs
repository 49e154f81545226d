use eframe::egui;

pub const DEFAULT_SNAKE_COLOR: &str = "#00ff00";

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x20, 0x20, 0x20);

/// Parses a `#rrggbb` hex value. Returns `None` for anything malformed.
pub fn parse_hex_color(value: &str) -> Option<egui::Color32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(egui::Color32::from_rgb(r, g, b))
}

/// The configured snake color, falling back to green when the stored
/// value does not parse.
pub fn snake_color(value: &str) -> egui::Color32 {
    parse_hex_color(value)
        .unwrap_or_else(|| parse_hex_color(DEFAULT_SNAKE_COLOR).expect("default color is valid"))
}

pub fn format_hex_color(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hex() {
        assert_eq!(
            parse_hex_color("#00ff00"),
            Some(egui::Color32::from_rgb(0, 255, 0))
        );
        assert_eq!(
            parse_hex_color("#1A2b3C"),
            Some(egui::Color32::from_rgb(0x1a, 0x2b, 0x3c))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("00ff00"), None);
        assert_eq!(parse_hex_color("#00ff0"), None);
        assert_eq!(parse_hex_color("#00ff000"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ααββγγ"), None);
    }

    #[test]
    fn test_snake_color_falls_back_to_green() {
        assert_eq!(snake_color("nonsense"), egui::Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn test_format_round_trips() {
        let color = egui::Color32::from_rgb(0x12, 0xef, 0x07);

        assert_eq!(parse_hex_color(&format_hex_color(color)), Some(color));
    }
}
