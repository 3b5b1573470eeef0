use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::domain::answers::Answers;
use crate::domain::scenario::ScenarioId;
use crate::domain::timeline::{PhaseId, Timeline, TimelinePhase};

/// Splits the estimated process duration into the four sequential phases.
///
/// The first phase starts on the first day of `reference_date`'s month and
/// each following phase starts where the previous one ends. Phase lengths
/// are rounded independently and raised to their minimums, so their sum can
/// differ from `adjusted_total_months`.
pub fn compute_timeline(
    answers: &Answers,
    scenario: ScenarioId,
    reference_date: NaiveDate,
) -> Timeline {
    let Some(resolved) = answers.resolve() else {
        return Timeline::empty(scenario);
    };

    let base_months = resolved.visa_type.base_months(scenario);
    let adjusted = (base_months
        * resolved.country_time_multiplier
        * resolved.premium_time_reduction)
        .round();
    let adjusted_total_months = adjusted as i64;

    let mut cursor = first_of_month(reference_date);
    let phases = PhaseId::ALL
        .iter()
        .map(|&id| {
            let duration_months = phase_duration(adjusted_total_months, id);
            let start_date = cursor;
            let end_date = add_months(start_date, duration_months);
            cursor = end_date;
            TimelinePhase {
                id,
                name: id.name().to_string(),
                description: id.description().to_string(),
                duration_months,
                start_date,
                end_date,
                details: id.details().iter().map(|step| step.to_string()).collect(),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        %scenario,
        base_months,
        adjusted_total_months,
        "allocated {} phases",
        phases.len()
    );

    Timeline {
        scenario,
        adjusted_total_months,
        phases,
    }
}

fn phase_duration(adjusted_total_months: i64, phase: PhaseId) -> u32 {
    let share = (adjusted_total_months as f64 * phase.proportion()).round();
    let minimum = phase.minimum_months();
    if share <= f64::from(minimum) {
        return minimum;
    }
    share.min(f64::from(u32::MAX)) as u32
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
