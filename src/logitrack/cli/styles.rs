use console::Style;
use logitrack::model::Tone;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names referenced from templates and from `render.rs`.
pub mod names {
    pub const PLAIN: &str = "plain";
    pub const BRAND: &str = "brand";
    pub const HEADING: &str = "heading";
    pub const SUBTITLE: &str = "subtitle";
    pub const SECTION: &str = "section";
    pub const LABEL: &str = "label";
    pub const KEY: &str = "key";
    pub const TABLE_HEADER: &str = "table_header";
    pub const TILE_TITLE: &str = "tile_title";
    pub const TILE_VALUE: &str = "tile_value";
    pub const LOADING: &str = "loading";
    pub const MUTED: &str = "muted";
    pub const POSITIVE: &str = "tone_positive";
    pub const INFO_TONE: &str = "tone_info";
    pub const CAUTION: &str = "tone_caution";
    pub const CRITICAL: &str = "tone_critical";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Shown in front of text whose style name is not registered.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named `console` styles applied by the template `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Same as [`Theme::apply`] with colors off: text unchanged, but unknown
    /// names are still flagged.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub static DASH_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::PLAIN, Style::new())
        .add(names::BRAND, Style::new().blue().bold())
        .add(names::HEADING, Style::new().bold())
        .add(names::SUBTITLE, Style::new().color256(245))
        .add(names::SECTION, Style::new().bold().underlined())
        .add(names::LABEL, Style::new().color256(245))
        .add(names::KEY, Style::new().cyan())
        .add(names::TABLE_HEADER, Style::new().bold().dim())
        .add(names::TILE_TITLE, Style::new().color256(245))
        .add(names::TILE_VALUE, Style::new().bold())
        .add(names::LOADING, Style::new().dim().italic())
        .add(names::MUTED, Style::new().dim())
        .add(names::POSITIVE, Style::new().green())
        .add(names::INFO_TONE, Style::new().blue())
        .add(names::CAUTION, Style::new().yellow())
        .add(names::CRITICAL, Style::new().red())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

pub fn tone_style(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => names::POSITIVE,
        Tone::Info => names::INFO_TONE,
        Tone::Caution => names::CAUTION,
        Tone::Critical => names::CRITICAL,
    }
}
