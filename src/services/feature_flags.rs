use std::collections::HashMap;
use crate::errors::{MarketplaceError, MarketplaceResult};
use crate::traits::flag_evaluator::{FlagEvaluator, FlagValue};

/// Flag values taken from the `[flags]` table, with command-line overrides
/// taking precedence.
#[derive(Debug, Clone, Default)]
pub struct ConfigFlagEvaluator {
    values: HashMap<String, bool>,
}

impl ConfigFlagEvaluator {
    pub fn new(values: HashMap<String, bool>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &[(String, bool)]) -> Self {
        for (name, value) in overrides {
            log::debug!("🚩 Flag override {name}={value}");
            self.values.insert(name.clone(), *value);
        }
        self
    }

    /// Parses `name=value` where value is one of true/false/1/0/on/off.
    pub fn parse_override(raw: &str) -> MarketplaceResult<(String, bool)> {
        let (name, value) = raw.split_once('=').ok_or_else(|| {
            MarketplaceError::validation_error("flag", raw, "name=value", Some("e.g. --flag marketplace_exp=true"))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(MarketplaceError::validation_error("flag", raw, "non-empty name", None));
        }

        let value = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" | "yes" => true,
            "false" | "0" | "off" | "no" => false,
            other => {
                return Err(MarketplaceError::validation_error(
                    "flag",
                    other,
                    "boolean",
                    Some("use true or false"),
                ))
            }
        };

        Ok((name.to_string(), value))
    }
}

impl FlagEvaluator for ConfigFlagEvaluator {
    fn get_flag_value(&self, flag_name: &str, default_value: bool) -> FlagValue {
        self.values.get(flag_name).map_or(
            FlagValue { value: default_value, is_known: false },
            |value| FlagValue { value: *value, is_known: true },
        )
    }
}
