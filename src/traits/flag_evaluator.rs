use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagValue {
    pub value: bool,
    /// False when the flag is unknown and the caller's default was returned.
    pub is_known: bool,
}

#[cfg_attr(test, mockall::automock)]
pub trait FlagEvaluator: Send + Sync {
    fn get_flag_value(&self, flag_name: &str, default_value: bool) -> FlagValue;
}
