//! Service type (maintenance task category) definitions

use serde::{Deserialize, Serialize};

/// A recurring maintenance task with its interval rules
///
/// Either interval may be zero, meaning that rule does not apply.
/// A definition with both intervals zero is valid but not tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTypeDef {
    /// Task name (e.g., "Oil Change")
    pub name: String,
    /// Distance interval in km; 0 = no distance-based rule
    #[serde(default)]
    pub interval_km: u32,
    /// Time interval in calendar months; 0 = no time-based rule
    #[serde(default)]
    pub interval_months: u32,
}

impl ServiceTypeDef {
    pub fn new(name: impl Into<String>, interval_km: u32, interval_months: u32) -> Self {
        Self {
            name: name.into(),
            interval_km,
            interval_months,
        }
    }

    /// True when neither a distance nor a time rule is defined
    pub fn is_tracked(&self) -> bool {
        self.interval_km > 0 || self.interval_months > 0
    }
}
