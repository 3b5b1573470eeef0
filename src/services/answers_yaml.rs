use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::answers::{Answers, Country, CurrentStatus, Dependents, PremiumProcessing};
use crate::domain::scenario::ScenarioId;
use crate::domain::visa::{VisaKind, VisaTypeOption};

#[derive(Error, Debug)]
pub enum AnswersYamlError {
    #[error("failed to read answers file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse answers yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("visa type label must not be empty")]
    MissingVisaLabel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnswersRecord {
    visa_type: Option<VisaTypeRecord>,
    current_status: Option<CurrentStatusRecord>,
    dependents: Option<DependentsRecord>,
    premium: Option<PremiumRecord>,
    country: Option<CountryRecord>,
}

#[derive(Debug, Deserialize)]
struct VisaTypeRecord {
    key: VisaKind,
    label: Option<String>,
    cost: f64,
    #[serde(default)]
    time: BTreeMap<ScenarioId, f64>,
}

#[derive(Debug, Deserialize)]
struct CurrentStatusRecord {
    label: Option<String>,
    cost_adjustment: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DependentsRecord {
    count: Option<u32>,
    cost_per_dependent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PremiumRecord {
    cost: Option<f64>,
    time_reduction: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    label: Option<String>,
    time_multiplier: Option<f64>,
}

pub fn load_answers_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Answers, AnswersYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| AnswersYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded answers file");
    deserialize_answers_from_yaml_str(&contents)
}

/// Parses questionnaire answers. An empty document is valid and yields
/// answers with no question answered.
pub fn deserialize_answers_from_yaml_str(input: &str) -> Result<Answers, AnswersYamlError> {
    let record: Option<AnswersRecord> = serde_yaml::from_str(input)?;
    let record = record.unwrap_or_default();

    let visa_type = record.visa_type.map(visa_type_from_record).transpose()?;

    Ok(Answers {
        visa_type,
        current_status: record.current_status.map(|status| CurrentStatus {
            label: status.label,
            cost_adjustment: status.cost_adjustment,
        }),
        dependents: record.dependents.map(|dependents| Dependents {
            count: dependents.count,
            cost_per_dependent: dependents.cost_per_dependent,
        }),
        premium: record.premium.map(|premium| PremiumProcessing {
            cost: premium.cost,
            time_reduction: premium.time_reduction,
        }),
        country: record.country.map(|country| Country {
            label: country.label,
            time_multiplier: country.time_multiplier,
        }),
    })
}

fn visa_type_from_record(record: VisaTypeRecord) -> Result<VisaTypeOption, AnswersYamlError> {
    let label = match record.label {
        Some(label) if label.trim().is_empty() => return Err(AnswersYamlError::MissingVisaLabel),
        Some(label) => label,
        None => record.key.key().to_ascii_uppercase(),
    };

    Ok(VisaTypeOption {
        kind: record.key,
        label,
        cost: record.cost,
        time: record.time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;

    const FULL_ANSWERS: &str = r#"
visa_type:
  key: eb2niw
  label: EB-2 NIW
  cost: 9500
  time: { optimistic: 10, intermediate: 14, pessimistic: 20 }
current_status: { label: H-1B, cost_adjustment: 500 }
dependents: { count: 2, cost_per_dependent: 750 }
premium: { cost: 2805, time_reduction: 0.8 }
country: { label: India, time_multiplier: 1.5 }
"#;

    #[test]
    fn parses_full_answers() {
        let answers = deserialize_answers_from_yaml_str(FULL_ANSWERS).unwrap();

        let visa = answers.visa_type.as_ref().unwrap();
        assert_eq!(visa.kind, VisaKind::Eb2niw);
        assert_eq!(visa.label, "EB-2 NIW");
        assert_eq!(visa.cost, 9500.0);
        assert_eq!(visa.base_months(ScenarioId::Pessimistic), 20.0);

        let resolved = answers.resolve().unwrap();
        assert_eq!(resolved.status_adjustment, 500.0);
        assert_eq!(resolved.dependent_count, 2);
        assert_eq!(resolved.cost_per_dependent, 750.0);
        assert_eq!(resolved.premium_cost, 2805.0);
        assert_eq!(resolved.premium_time_reduction, 0.8);
        assert_eq!(resolved.country_time_multiplier, 1.5);
        assert_eq!(
            answers.country.as_ref().and_then(|c| c.label.as_deref()),
            Some("India")
        );
    }

    #[test]
    fn empty_document_is_incomplete_answers() {
        let answers = deserialize_answers_from_yaml_str("").unwrap();
        assert_eq!(answers, Answers::new());
    }

    #[test]
    fn visa_label_defaults_to_uppercase_key() {
        let answers =
            deserialize_answers_from_yaml_str("visa_type: { key: o1a, cost: 6000 }\n").unwrap();
        let visa = answers.visa_type.unwrap();
        assert_eq!(visa.label, "O1A");
        assert!(visa.time.is_empty());
    }

    #[test]
    fn unknown_visa_key_is_accepted_as_other() {
        let answers =
            deserialize_answers_from_yaml_str("visa_type: { key: e2, label: E-2, cost: 7000 }\n")
                .unwrap();
        assert_eq!(answers.visa_type.unwrap().kind, VisaKind::Other);
    }

    #[test]
    fn rejects_unknown_scenario_in_time_map() {
        let err = deserialize_answers_from_yaml_str(
            "visa_type: { key: h1b, cost: 4000, time: { likely: 8 } }\n",
        )
        .unwrap_err();
        assert!(matches!(err, AnswersYamlError::Parse(_)));
    }

    #[test]
    fn rejects_negative_dependent_count() {
        let err = deserialize_answers_from_yaml_str(
            "visa_type: { key: h1b, cost: 4000 }\ndependents: { count: -1 }\n",
        )
        .unwrap_err();
        assert!(matches!(err, AnswersYamlError::Parse(_)));
    }

    #[test]
    fn rejects_blank_visa_label() {
        let err = deserialize_answers_from_yaml_str("visa_type: { key: l1, label: ' ', cost: 1 }\n")
            .unwrap_err();
        assert!(matches!(err, AnswersYamlError::MissingVisaLabel));
    }

    #[test]
    fn accepts_out_of_range_numbers_unchanged() {
        let answers = deserialize_answers_from_yaml_str(
            "visa_type: { key: l1, cost: -10 }\ncountry: { time_multiplier: -2 }\n",
        )
        .unwrap();
        assert_eq!(answers.visa_type.unwrap().cost, -10.0);
        assert_eq!(answers.country.unwrap().time_multiplier, Some(-2.0));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("answers.yaml");

        let err = load_answers_from_yaml_file(&missing).unwrap_err();
        assert!(matches!(err, AnswersYamlError::Read { path, .. } if path == missing));
    }

    #[test]
    fn load_reads_answers_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("answers.yaml");
        file.write_str(FULL_ANSWERS).unwrap();

        let answers = load_answers_from_yaml_file(file.path()).unwrap();
        assert!(answers.is_complete());
    }
}
