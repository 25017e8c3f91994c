use crate::config::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_USER_AGENT, MARKETPLACE_EXPERIMENT_FLAG};
use std::collections::HashMap;

pub struct ConfigHelper;

impl ConfigHelper {
    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_HTTP_TIMEOUT_SECS
    }

    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    pub fn default_flags() -> HashMap<String, bool> {
        HashMap::from([(MARKETPLACE_EXPERIMENT_FLAG.to_string(), false)])
    }
}
