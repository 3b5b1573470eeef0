use chrono::NaiveDate;

use crate::domain::answers::{Answers, Country, CurrentStatus, Dependents, PremiumProcessing};
use crate::domain::scenario::ScenarioId;
use crate::domain::visa::{VisaKind, VisaTypeOption};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_visa(kind: VisaKind, cost: f64, months: [f64; 3]) -> VisaTypeOption {
    let [optimistic, intermediate, pessimistic] = months;
    VisaTypeOption::new(kind, &kind.key().to_ascii_uppercase(), cost)
        .with_time(ScenarioId::Optimistic, optimistic)
        .with_time(ScenarioId::Intermediate, intermediate)
        .with_time(ScenarioId::Pessimistic, pessimistic)
}

/// Every question answered, with values that keep all breakdown categories.
pub fn build_full_answers() -> Answers {
    Answers {
        visa_type: Some(build_visa(VisaKind::Eb2niw, 9500.0, [10.0, 14.0, 20.0])),
        current_status: Some(CurrentStatus {
            label: Some("H-1B".to_string()),
            cost_adjustment: Some(500.0),
        }),
        dependents: Some(Dependents {
            count: Some(2),
            cost_per_dependent: Some(750.0),
        }),
        premium: Some(PremiumProcessing {
            cost: Some(2805.0),
            time_reduction: Some(0.8),
        }),
        country: Some(Country {
            label: Some("India".to_string()),
            time_multiplier: Some(1.5),
        }),
    }
}
