use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::scenario::ScenarioId;

pub const DEFAULT_BASE_MONTHS: f64 = 12.0;

/// Visa categories with a known USCIS filing fee. Anything else maps to
/// `Other` and is charged the default fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisaKind {
    Eb1a,
    Eb2niw,
    O1a,
    O1b,
    H1b,
    L1,
    #[serde(other)]
    Other,
}

impl VisaKind {
    pub fn government_base_fee(self) -> f64 {
        match self {
            VisaKind::Eb1a | VisaKind::Eb2niw => 700.0,
            VisaKind::O1a | VisaKind::O1b | VisaKind::H1b | VisaKind::L1 => 460.0,
            VisaKind::Other => 500.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            VisaKind::Eb1a => "eb1a",
            VisaKind::Eb2niw => "eb2niw",
            VisaKind::O1a => "o1a",
            VisaKind::O1b => "o1b",
            VisaKind::H1b => "h1b",
            VisaKind::L1 => "l1",
            VisaKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisaTypeOption {
    pub kind: VisaKind,
    pub label: String,
    /// Base legal cost in currency units. Includes the government base fee.
    pub cost: f64,
    /// Base duration in months per scenario.
    pub time: BTreeMap<ScenarioId, f64>,
}

impl VisaTypeOption {
    pub fn new(kind: VisaKind, label: &str, cost: f64) -> Self {
        Self {
            kind,
            label: label.to_string(),
            cost,
            time: BTreeMap::new(),
        }
    }

    pub fn with_time(mut self, scenario: ScenarioId, months: f64) -> Self {
        self.time.insert(scenario, months);
        self
    }

    pub fn base_months(&self, scenario: ScenarioId) -> f64 {
        self.time
            .get(&scenario)
            .copied()
            .unwrap_or(DEFAULT_BASE_MONTHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn government_fee_table_covers_known_kinds() {
        assert_eq!(VisaKind::Eb1a.government_base_fee(), 700.0);
        assert_eq!(VisaKind::Eb2niw.government_base_fee(), 700.0);
        assert_eq!(VisaKind::O1a.government_base_fee(), 460.0);
        assert_eq!(VisaKind::O1b.government_base_fee(), 460.0);
        assert_eq!(VisaKind::H1b.government_base_fee(), 460.0);
        assert_eq!(VisaKind::L1.government_base_fee(), 460.0);
        assert_eq!(VisaKind::Other.government_base_fee(), 500.0);
    }

    #[test]
    fn unknown_keys_deserialize_as_other() {
        let kind: VisaKind = serde_yaml::from_str("e2").unwrap();
        assert_eq!(kind, VisaKind::Other);
        let kind: VisaKind = serde_yaml::from_str("h1b").unwrap();
        assert_eq!(kind, VisaKind::H1b);
    }

    #[test]
    fn base_months_falls_back_to_twelve() {
        let visa = VisaTypeOption::new(VisaKind::O1a, "O-1A", 6000.0)
            .with_time(ScenarioId::Optimistic, 4.0);
        assert_eq!(visa.base_months(ScenarioId::Optimistic), 4.0);
        assert_eq!(visa.base_months(ScenarioId::Pessimistic), DEFAULT_BASE_MONTHS);
    }
}
