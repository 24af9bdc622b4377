use log::Level;
use serde::Deserialize;

use crate::rotator::DEFAULT_INTERVAL_MS;

const SITE_JSON: &str = include_str!("../assets/site.json");

pub const DEFAULT_CONTACT_PHONE: &str = "260961111468";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub contact_phone: String,
    pub autoplay_interval_ms: u32,
    pub slides: Vec<SlideConfig>,
    pub products: Vec<ProductConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SlideConfig {
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub cta_href: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProductConfig {
    /// `None` renders a card without an `h3`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "SunPeak Energy".to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            autoplay_interval_ms: DEFAULT_INTERVAL_MS,
            slides: Vec::new(),
            products: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: SiteConfig = serde_json::from_str(raw)?;
        if config.autoplay_interval_ms == 0 {
            config.autoplay_interval_ms = DEFAULT_INTERVAL_MS;
        }
        Ok(config)
    }

    /// The site document bundled into the binary.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(SITE_JSON)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                gloo_console::error!("Failed to parse site config:", e.to_string());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_site_parses() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.contact_phone, DEFAULT_CONTACT_PHONE);
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert!(!config.slides.is_empty());
        assert!(config.products.iter().any(|p| p.title.as_deref() == Some("Solar Kit")));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "Acme" }"#).unwrap();
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.contact_phone, DEFAULT_CONTACT_PHONE);
        assert_eq!(config.autoplay_interval_ms, DEFAULT_INTERVAL_MS);
        assert!(config.slides.is_empty());
    }

    #[test]
    fn zero_interval_is_replaced() {
        let config = SiteConfig::from_json(r#"{ "autoplay_interval_ms": 0 }"#).unwrap();
        assert_eq!(config.autoplay_interval_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn slide_markers_follow_document_order() {
        let config = SiteConfig::from_json(
            r#"{ "slides": [
                { "image": "a.jpg", "title": "A" },
                { "image": "b.jpg", "title": "B", "active": true },
                { "image": "c.jpg", "title": "C" }
            ] }"#,
        )
        .unwrap();
        let marked: Vec<bool> = config.slides.iter().map(|s| s.active).collect();
        assert_eq!(marked, vec![false, true, false]);
        assert_eq!(config.slides[0].subtitle, "");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{ slides: ").is_err());
    }
}
