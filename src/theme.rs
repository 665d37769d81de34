use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub fn hex_to_color(hex: &str) -> Color {
    let h = hex.trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() { return Color::Reset; }
    let r = u8::from_str_radix(&h[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&h[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&h[4..6], 16).unwrap_or(0);
    Color::Rgb(r, g, b)
}

/// Colours used by the terminal renderer. Values are `#rrggbb` strings so a
/// palette can be written straight into the TOML config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub bg_primary:     String,
    pub bg_secondary:   String,
    pub border_normal:  String,
    pub border_focused: String,
    pub text_primary:   String,
    pub text_muted:     String,
    pub text_accent:    String,
    pub selected_bg:    String,
    pub selected_fg:    String,
    pub cursor_bg:      String,
    pub cursor_fg:      String,
    pub today_fg:       String,
    pub weekend_fg:     String,
}

impl Palette {
    pub fn bg(&self)            -> Color { hex_to_color(&self.bg_primary) }
    pub fn bg2(&self)           -> Color { hex_to_color(&self.bg_secondary) }
    pub fn border(&self)        -> Color { hex_to_color(&self.border_normal) }
    pub fn border_active(&self) -> Color { hex_to_color(&self.border_focused) }
    pub fn fg(&self)            -> Color { hex_to_color(&self.text_primary) }
    pub fn fg_dim(&self)        -> Color { hex_to_color(&self.text_muted) }
    pub fn accent(&self)        -> Color { hex_to_color(&self.text_accent) }
    pub fn today(&self)         -> Color { hex_to_color(&self.today_fg) }
    pub fn weekend_color(&self) -> Color { hex_to_color(&self.weekend_fg) }

    pub fn selected_highlight(&self) -> (Color, Color) {
        (hex_to_color(&self.selected_bg), hex_to_color(&self.selected_fg))
    }
    pub fn cursor_highlight(&self) -> (Color, Color) {
        (hex_to_color(&self.cursor_bg), hex_to_color(&self.cursor_fg))
    }

    /// Apply the picker's selected-day colour overrides.
    pub fn with_selected(mut self, bg: Option<&str>, fg: Option<&str>) -> Self {
        if let Some(bg) = bg { self.selected_bg = bg.to_owned(); }
        if let Some(fg) = fg { self.selected_fg = fg.to_owned(); }
        self
    }
}

impl Default for Palette {
    // Catppuccin Mocha
    fn default() -> Self { Self {
        bg_primary: "#1e1e2e".into(), bg_secondary: "#181825".into(),
        border_normal: "#45475a".into(), border_focused: "#89b4fa".into(),
        text_primary: "#cdd6f4".into(), text_muted: "#6c7086".into(), text_accent: "#89b4fa".into(),
        selected_bg: "#89b4fa".into(), selected_fg: "#1e1e2e".into(),
        cursor_bg: "#45475a".into(), cursor_fg: "#cdd6f4".into(),
        today_fg: "#cba6f7".into(), weekend_fg: "#f38ba8".into(),
    }}
}
