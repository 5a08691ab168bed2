//! User settings for spendview
//!
//! Preferences for currency formatting, the chart palette, the optional
//! monthly budget, and per-category display attributes. The category map is
//! the single source of display metadata: views receive it resolved from
//! here instead of declaring their own lookup tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::SpendviewPaths;
use crate::chart::{default_palette, Color, Palette};
use crate::error::SpendviewError;
use crate::models::Money;

/// Fallback icon for categories without a configured one
pub const DEFAULT_CATEGORY_ICON: &str = "📦";

/// User settings for spendview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Monthly budget in cents, if one is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget_cents: Option<i64>,

    /// Ordered chart palette; slices cycle through it
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,

    /// Display icon per category label
    #[serde(default = "default_category_icons")]
    pub category_icons: BTreeMap<String, String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Default category taxonomy with display icons
fn default_category_icons() -> BTreeMap<String, String> {
    [
        ("Food & Dining", "🍽️"),
        ("Transportation", "🚗"),
        ("Bills & Utilities", "📋"),
        ("Entertainment", "🎬"),
        ("Shopping", "🛍️"),
        ("Groceries", "🛒"),
        ("Healthcare", "💊"),
        ("Education", "📚"),
        ("Travel", "✈️"),
        ("Personal Care", "🧴"),
        ("Investment", "💰"),
        ("Insurance", "🛡️"),
        ("Rent", "🏠"),
        ("Other", DEFAULT_CATEGORY_ICON),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            monthly_budget_cents: None,
            palette: default_palette(),
            category_icons: default_category_icons(),
        }
    }
}

impl Settings {
    /// Display icon for a category, falling back for unknown labels
    pub fn icon_for(&self, category: &str) -> &str {
        self.category_icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY_ICON)
    }

    /// The configured monthly budget, if any
    pub fn monthly_budget(&self) -> Option<Money> {
        self.monthly_budget_cents.map(Money::from_cents)
    }

    /// The chart palette, validated non-empty
    pub fn palette(&self) -> Result<Palette, SpendviewError> {
        Palette::new(self.palette.clone())
            .map_err(|e| SpendviewError::Config(e.to_string()))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendviewPaths) -> Result<Self, SpendviewError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendviewError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendviewError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendviewPaths) -> Result<(), SpendviewError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendviewError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendviewError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
