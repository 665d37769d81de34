use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calendar::CalendarDate;
use crate::picker::PickerOptions;
use crate::theme::Palette;

/// `config.toml` contents. Every key is optional.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub picker:  PickerConfig,
    pub palette: Option<Palette>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct PickerConfig {
    pub start_from_monday: Option<bool>,
    pub weekdays:          Option<Vec<String>>,
    pub months:            Option<Vec<String>>,
    pub previous_title:    Option<String>,
    pub next_title:        Option<String>,
    pub selected_day_color:      Option<String>,
    pub selected_day_text_color: Option<String>,
    pub dont_change_date_on_calendar_movement: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir().join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Self::parse(&raw).with_context(|| format!("parsing {}", path.display()))
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn palette(&self) -> Palette {
        self.palette.clone().unwrap_or_default().with_selected(
            self.picker.selected_day_color.as_deref(),
            self.picker.selected_day_text_color.as_deref(),
        )
    }
}

impl PickerConfig {
    pub fn into_options(self, selected_date: CalendarDate) -> PickerOptions {
        let mut o = PickerOptions::new(selected_date);
        if let Some(v) = self.start_from_monday { o.start_from_monday = v; }
        if let Some(v) = self.previous_title    { o.previous_title = v; }
        if let Some(v) = self.next_title        { o.next_title = v; }
        if let Some(v) = self.dont_change_date_on_calendar_movement {
            o.dont_change_date_on_calendar_movement = v;
        }
        o.weekdays                = self.weekdays;
        o.months                  = self.months;
        o.selected_day_color      = self.selected_day_color;
        o.selected_day_text_color = self.selected_day_text_color;
        o
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calpicker")
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calpicker")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::parse("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        let o = cfg.picker.into_options(CalendarDate::new(2024, 1, 15));
        assert_eq!(o, PickerOptions::new(CalendarDate::new(2024, 1, 15)));
    }

    #[test]
    fn picker_table_maps_onto_options() {
        let cfg = AppConfig::parse(r##"
            [picker]
            start_from_monday = true
            previous_title = "Anterior"
            next_title = "Siguiente"
            weekdays = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sa", "Do"]
            selected_day_color = "#ff0000"
            dont_change_date_on_calendar_movement = true
        "##).unwrap();
        let o = cfg.picker.clone().into_options(CalendarDate::new(2024, 1, 15));
        assert!(o.start_from_monday);
        assert!(o.dont_change_date_on_calendar_movement);
        assert_eq!(o.previous_title, "Anterior");
        assert_eq!(o.next_title, "Siguiente");
        assert_eq!(o.weekday_labels()[0], "Lu");
        assert_eq!(o.selected_day_color.as_deref(), Some("#ff0000"));
        assert_eq!(cfg.palette().selected_bg, "#ff0000");
    }

    #[test]
    fn partial_palette_keeps_defaults() {
        let cfg = AppConfig::parse("[palette]\nweekend_fg = \"#00ff00\"\n").unwrap();
        let p = cfg.palette();
        assert_eq!(p.weekend_fg, "#00ff00");
        assert_eq!(p.bg_primary, Palette::default().bg_primary);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::parse("[picker\n").is_err());
        assert!(AppConfig::parse("[picker]\nstart_from_monday = \"yes\"\n").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("calpicker-does-not-exist").join("config.toml");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }
}
