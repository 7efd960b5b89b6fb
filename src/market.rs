//! Per-market profit margin and sales-rank range configuration.
//!
//! The draft keeps every value as the raw text the user typed. Validation
//! parses those strings but never writes the parsed numbers back, so a
//! saved configuration is exactly what was on screen.

use crate::config::{CONFIG_ENDPOINT, MAX_PERCENTAGE};
use crate::validation::{record, validate_profit, validate_rank, ErrorMap, FieldError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported sales regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    Us,
    Ca,
}

impl Market {
    pub const ALL: [Market; 2] = [Market::Us, Market::Ca];

    pub fn name(self) -> &'static str {
        match self {
            Market::Us => "US",
            Market::Ca => "Canada",
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            Market::Us => "United States market",
            Market::Ca => "Canadian market",
        }
    }

    fn profit_labels(self) -> (&'static str, &'static str) {
        match self {
            Market::Us => ("US Profit type", "US Profit"),
            Market::Ca => ("Canada Profit type", "Canada Profit"),
        }
    }

    fn rank_labels(self) -> (&'static str, &'static str) {
        match self {
            Market::Us => ("US Min Rank", "US Max Rank"),
            Market::Ca => ("Canada Min Rank", "Canada Max Rank"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitType {
    Amount,
    Percentage,
}

impl ProfitType {
    /// Upper bound applied to the profit value, if any.
    pub fn cap(self) -> Option<f64> {
        match self {
            ProfitType::Amount => None,
            ProfitType::Percentage => Some(MAX_PERCENTAGE),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfitType::Amount => "amount",
            ProfitType::Percentage => "percentage",
        }
    }

    pub fn placeholder(profit_type: Option<Self>) -> &'static str {
        match profit_type {
            Some(ProfitType::Amount) => "Enter amount",
            Some(ProfitType::Percentage) => "Enter percentage",
            None => "Choose amount or percentage",
        }
    }
}

impl std::str::FromStr for ProfitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amount" => Ok(ProfitType::Amount),
            "percentage" => Ok(ProfitType::Percentage),
            _ => Err(()),
        }
    }
}

/// Fields of the configuration form, keyed as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    UsProfitType,
    UsProfitValue,
    CaProfitType,
    CaProfitValue,
    UsRankMin,
    UsRankMax,
    CaRankMin,
    CaRankMax,
}

impl ConfigField {
    pub const ALL: [ConfigField; 8] = [
        ConfigField::UsProfitType,
        ConfigField::UsProfitValue,
        ConfigField::CaProfitType,
        ConfigField::CaProfitValue,
        ConfigField::UsRankMin,
        ConfigField::UsRankMax,
        ConfigField::CaRankMin,
        ConfigField::CaRankMax,
    ];

    pub fn profit_type(market: Market) -> Self {
        match market {
            Market::Us => ConfigField::UsProfitType,
            Market::Ca => ConfigField::CaProfitType,
        }
    }

    pub fn profit_value(market: Market) -> Self {
        match market {
            Market::Us => ConfigField::UsProfitValue,
            Market::Ca => ConfigField::CaProfitValue,
        }
    }

    pub fn rank_min(market: Market) -> Self {
        match market {
            Market::Us => ConfigField::UsRankMin,
            Market::Ca => ConfigField::CaRankMin,
        }
    }

    pub fn rank_max(market: Market) -> Self {
        match market {
            Market::Us => ConfigField::UsRankMax,
            Market::Ca => ConfigField::CaRankMax,
        }
    }
}

/// The eight-field dashboard draft. Starts out entirely empty, profit types
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketConfig {
    pub us_profit_type: Option<ProfitType>,
    pub us_profit_value: String,
    pub ca_profit_type: Option<ProfitType>,
    pub ca_profit_value: String,
    pub us_rank_min: String,
    pub us_rank_max: String,
    pub ca_rank_min: String,
    pub ca_rank_max: String,
}

impl MarketConfig {
    pub fn profit_type(&self, market: Market) -> Option<ProfitType> {
        match market {
            Market::Us => self.us_profit_type,
            Market::Ca => self.ca_profit_type,
        }
    }

    pub fn set_profit_type(&mut self, market: Market, profit_type: ProfitType) {
        match market {
            Market::Us => self.us_profit_type = Some(profit_type),
            Market::Ca => self.ca_profit_type = Some(profit_type),
        }
    }

    /// Current text of a field; profit types read as their wire names.
    pub fn field(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::UsProfitType => self.us_profit_type.map_or("", ProfitType::as_str),
            ConfigField::CaProfitType => self.ca_profit_type.map_or("", ProfitType::as_str),
            ConfigField::UsProfitValue => &self.us_profit_value,
            ConfigField::CaProfitValue => &self.ca_profit_value,
            ConfigField::UsRankMin => &self.us_rank_min,
            ConfigField::UsRankMax => &self.us_rank_max,
            ConfigField::CaRankMin => &self.ca_rank_min,
            ConfigField::CaRankMax => &self.ca_rank_max,
        }
    }

    /// Set a field from text. Unknown profit type names clear the type.
    pub fn set_field(&mut self, field: ConfigField, value: String) {
        let slot = match field {
            ConfigField::UsProfitType => {
                self.us_profit_type = value.parse().ok();
                return;
            }
            ConfigField::CaProfitType => {
                self.ca_profit_type = value.parse().ok();
                return;
            }
            ConfigField::UsProfitValue => &mut self.us_profit_value,
            ConfigField::CaProfitValue => &mut self.ca_profit_value,
            ConfigField::UsRankMin => &mut self.us_rank_min,
            ConfigField::UsRankMax => &mut self.us_rank_max,
            ConfigField::CaRankMin => &mut self.ca_rank_min,
            ConfigField::CaRankMax => &mut self.ca_rank_max,
        };
        *slot = value;
    }
}

fn validate_market(config: &MarketConfig, market: Market, errors: &mut ErrorMap<ConfigField>) {
    let (type_label, value_label) = market.profit_labels();
    let profit_type = config.profit_type(market);
    record(
        errors,
        ConfigField::profit_type(market),
        profit_type.ok_or(FieldError::Required(type_label)),
    );

    let value_field = ConfigField::profit_value(market);
    record(
        errors,
        value_field,
        validate_profit(
            config.field(value_field),
            profit_type.and_then(ProfitType::cap),
            value_label,
        ),
    );

    let (min_label, max_label) = market.rank_labels();
    let min_field = ConfigField::rank_min(market);
    let max_field = ConfigField::rank_max(market);
    let min = record(errors, min_field, validate_rank(config.field(min_field), min_label));
    let max = record(errors, max_field, validate_rank(config.field(max_field), max_label));

    // Only ordered once both bounds stand on their own.
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            errors.insert(max_field, FieldError::RankOrder.to_string());
        }
    }
}

/// Check every field of the draft. Pure; the same draft always yields the
/// same map.
pub fn validate_config(config: &MarketConfig) -> ErrorMap<ConfigField> {
    let mut errors = ErrorMap::new();
    for market in Market::ALL {
        validate_market(config, market, &mut errors);
    }
    errors
}

/// Why a configuration was not saved.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveError {
    /// One or more fields failed validation.
    Invalid(ErrorMap<ConfigField>),
    /// The validated draft could not be rendered as JSON.
    Encode(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Invalid(errors) => {
                write!(f, "Configuration has {} invalid field(s)", errors.len())
            }
            SaveError::Encode(e) => write!(f, "Failed to encode configuration: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Encode(e.to_string())
    }
}

/// Validate and emit the configuration as the body of `POST /api/config`.
///
/// Nothing is emitted when any field fails. On success the draft is
/// serialized verbatim, logged, and returned.
pub fn save_config(config: &MarketConfig) -> Result<String, SaveError> {
    let errors = validate_config(config);
    if !errors.is_empty() {
        debug!("configuration rejected: {} field error(s)", errors.len());
        return Err(SaveError::Invalid(errors));
    }

    let body = serde_json::to_string(config)?;
    info!("Configuration saved ({}): {}", CONFIG_ENDPOINT, body);
    Ok(body)
}
