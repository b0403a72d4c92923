use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub magenta: Color,
    pub blue: Color,
    pub gray: Color,
    /// Per-status colors; statuses not listed here are drawn uncolored
    pub status_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Theme {
            background: Color::Reset,
            text: Color::Reset,
            text_bright: Color::White,
            highlight: Color::Blue,
            dim: Color::DarkGray,
            red: Color::Red,
            yellow: Color::Yellow,
            green: Color::Green,
            cyan: Color::Cyan,
            magenta: Color::Magenta,
            blue: Color::Blue,
            gray: Color::DarkGray,
            status_colors: HashMap::new(),
        };
        theme.status_colors = theme.default_status_colors();
        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "magenta" => theme.magenta = color,
                    "blue" => theme.blue = color,
                    "gray" => theme.gray = color,
                    _ => {}
                }
            }
        }

        // Palette overrides flow into the status table before per-status overrides
        theme.status_colors = theme.default_status_colors();
        for (status, value) in &ui.status_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.status_colors.insert(status.clone(), color);
            }
        }

        theme
    }

    fn default_status_colors(&self) -> HashMap<String, Color> {
        [
            ("completed", self.green),
            ("done", self.green),
            ("in_progress", self.yellow),
            ("doing", self.yellow),
            ("pending", self.cyan),
            ("todo", self.cyan),
            ("new", self.magenta),
            ("review", self.blue),
            ("blocked", self.red),
            ("archived", self.gray),
        ]
        .into_iter()
        .map(|(status, color)| (status.to_string(), color))
        .collect()
    }

    /// Color for a status value, if it has one
    pub fn status_color(&self, status: &str) -> Option<Color> {
        self.status_colors.get(status).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_status_color_table() {
        let theme = Theme::default();
        assert_eq!(theme.status_color("completed"), Some(Color::Green));
        assert_eq!(theme.status_color("done"), Some(Color::Green));
        assert_eq!(theme.status_color("in_progress"), Some(Color::Yellow));
        assert_eq!(theme.status_color("doing"), Some(Color::Yellow));
        assert_eq!(theme.status_color("pending"), Some(Color::Cyan));
        assert_eq!(theme.status_color("todo"), Some(Color::Cyan));
        assert_eq!(theme.status_color("new"), Some(Color::Magenta));
        assert_eq!(theme.status_color("review"), Some(Color::Blue));
        assert_eq!(theme.status_color("blocked"), Some(Color::Red));
        assert_eq!(theme.status_color("archived"), Some(Color::DarkGray));
        assert_eq!(theme.status_color("unknown"), None);
        assert_eq!(theme.status_color(""), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("green".into(), "#00FF00".into());
        ui.colors.insert("nonsense".into(), "#123456".into());
        ui.status_colors.insert("blocked".into(), "#112233".into());
        ui.status_colors.insert("shipped".into(), "#445566".into());
        ui.status_colors.insert("review".into(), "not a color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.green, Color::Rgb(0, 0xFF, 0));
        // Palette change reaches statuses mapped to it
        assert_eq!(theme.status_color("completed"), Some(Color::Rgb(0, 0xFF, 0)));
        assert_eq!(
            theme.status_color("blocked"),
            Some(Color::Rgb(0x11, 0x22, 0x33))
        );
        assert_eq!(
            theme.status_color("shipped"),
            Some(Color::Rgb(0x44, 0x55, 0x66))
        );
        assert_eq!(theme.status_color("review"), Some(Color::Blue));
    }
}
