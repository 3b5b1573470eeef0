use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::answers::Answers;
use crate::domain::cost::CostSummary;
use crate::domain::scenario::ScenarioId;
use crate::domain::timeline::Timeline;
use crate::services::cost_aggregator::compute_cost_summary;
use crate::services::timeline_allocator::compute_timeline;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EstimateSummary {
    pub scenario: ScenarioId,
    pub total_cost: f64,
    pub total_months: u64,
    pub adjusted_total_months: i64,
    pub completion_date: Option<NaiveDate>,
    pub display_time: String,
}

/// Cost summary and timeline for one scenario, as written by `estimate`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Estimate {
    pub reference_date: NaiveDate,
    pub visa_type: Option<String>,
    pub summary: EstimateSummary,
    pub costs: CostSummary,
    pub timeline: Timeline,
}

pub fn build_estimate(
    answers: &Answers,
    scenario: ScenarioId,
    reference_date: NaiveDate,
) -> Estimate {
    let costs = compute_cost_summary(answers);
    let timeline = compute_timeline(answers, scenario, reference_date);
    let summary = summary_from_parts(answers, &costs, &timeline);

    Estimate {
        reference_date,
        visa_type: answers.visa_type.as_ref().map(|visa| visa.label.clone()),
        summary,
        costs,
        timeline,
    }
}

pub fn summarize(
    answers: &Answers,
    scenario: ScenarioId,
    reference_date: NaiveDate,
) -> EstimateSummary {
    let costs = compute_cost_summary(answers);
    let timeline = compute_timeline(answers, scenario, reference_date);
    summary_from_parts(answers, &costs, &timeline)
}

pub fn compare_scenarios(answers: &Answers, reference_date: NaiveDate) -> Vec<EstimateSummary> {
    ScenarioId::ALL
        .iter()
        .map(|&scenario| summarize(answers, scenario, reference_date))
        .collect()
}

fn summary_from_parts(
    answers: &Answers,
    costs: &CostSummary,
    timeline: &Timeline,
) -> EstimateSummary {
    let total_months = timeline.total_months();
    let display_time = if answers.is_complete() {
        format!("{total_months} months")
    } else {
        "-".to_string()
    };

    EstimateSummary {
        scenario: timeline.scenario,
        total_cost: costs.total,
        total_months,
        adjusted_total_months: timeline.adjusted_total_months,
        completion_date: timeline.end_date(),
        display_time,
    }
}
