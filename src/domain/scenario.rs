use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    Optimistic,
    #[default]
    Intermediate,
    Pessimistic,
}

/// Presentation data for one scenario. Colors are RGB triples so chart
/// renderers can use them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub id: ScenarioId,
    pub label: &'static str,
    pub description: &'static str,
    pub color: (u8, u8, u8),
    pub bar_color: (u8, u8, u8),
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 3] = [
        ScenarioId::Optimistic,
        ScenarioId::Intermediate,
        ScenarioId::Pessimistic,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScenarioId::Optimistic => "optimistic",
            ScenarioId::Intermediate => "intermediate",
            ScenarioId::Pessimistic => "pessimistic",
        }
    }

    pub fn config(self) -> ScenarioConfig {
        match self {
            ScenarioId::Optimistic => ScenarioConfig {
                id: self,
                label: "Optimistic",
                description: "Fastest time with no step backs",
                color: (0x10, 0xb9, 0x81),
                bar_color: (0x05, 0x96, 0x69),
            },
            ScenarioId::Intermediate => ScenarioConfig {
                id: self,
                label: "Intermediate",
                description: "Moderate time with minor delays",
                color: (0x3b, 0x82, 0xf6),
                bar_color: (0x1a, 0x1f, 0x4e),
            },
            ScenarioId::Pessimistic => ScenarioConfig {
                id: self,
                label: "Pessimistic",
                description: "Longest time due to delays",
                color: (0xf5, 0x9e, 0x0b),
                bar_color: (0xd9, 0x77, 0x06),
            },
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scenario '{0}' (expected optimistic, intermediate or pessimistic)")]
pub struct UnknownScenario(pub String);

impl FromStr for ScenarioId {
    type Err = UnknownScenario;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(ScenarioId::Optimistic),
            "intermediate" => Ok(ScenarioId::Intermediate),
            "pessimistic" => Ok(ScenarioId::Pessimistic),
            _ => Err(UnknownScenario(value.to_string())),
        }
    }
}
