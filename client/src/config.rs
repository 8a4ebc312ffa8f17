//! Build-time page configuration.
//!
//! Values are baked into the WASM bundle from environment variables present
//! when the client is compiled:
//! - `MESSAGE_BOARD_DATA_URL`: user collection URL (default `db.json`)
//! - `MESSAGE_BOARD_RAW_MARKUP`: `1`/`true` renders cards without escaping

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::markup::RenderMode;

pub const DEFAULT_DATA_URL: &str = "db.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub data_url: String,
    pub render_mode: RenderMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { data_url: DEFAULT_DATA_URL.to_owned(), render_mode: RenderMode::Escaped }
    }
}

impl PageConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("MESSAGE_BOARD_DATA_URL"), option_env!("MESSAGE_BOARD_RAW_MARKUP"))
    }

    fn from_values(data_url: Option<&str>, raw_markup: Option<&str>) -> Self {
        let data_url = data_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_DATA_URL)
            .to_owned();
        let render_mode = match raw_markup.map(str::trim) {
            Some("1" | "true") => RenderMode::Raw,
            _ => RenderMode::Escaped,
        };
        Self { data_url, render_mode }
    }
}
