use crate::domain::timeline::TimelinePhase;
use crate::services::estimate_summary::{Estimate, EstimateSummary};

pub fn format_estimate_report(estimate: &Estimate) -> String {
    let mut lines = Vec::new();
    lines.push("Visa Estimate Report".to_string());
    lines.push(format!("Reference date: {}", estimate.reference_date));

    let Some(visa_type) = estimate.visa_type.as_deref() else {
        lines.push(String::new());
        lines.push("Select a visa type to see your personalized estimate.".to_string());
        return lines.join("\n");
    };

    let config = estimate.summary.scenario.config();
    lines.push(format!("Visa type: {visa_type}"));
    lines.push(format!("Scenario: {} ({})", config.label, config.description));
    lines.push(format!("Total cost: {}", format_money(estimate.costs.total)));
    lines.push(format!("Total time: {}", estimate.summary.display_time));
    lines.push(String::new());
    lines.push("Cost breakdown:".to_string());
    lines.push("Item | Amount | Share".to_string());
    lines.push("-----|--------|------".to_string());
    for item in &estimate.costs.breakdown {
        lines.push(format!(
            "{} | {} | {:.0}%",
            item.name,
            format_money(item.value),
            item.share_of(estimate.costs.total)
        ));
    }
    lines.push(String::new());
    lines.push("Timeline:".to_string());
    lines.push("Phase | Months | Start | End".to_string());
    lines.push("------|--------|-------|----".to_string());
    for phase in &estimate.timeline.phases {
        lines.push(format_phase_row(phase));
        for step in &phase.details {
            lines.push(format!("  - {step}"));
        }
    }

    lines.join("\n")
}

pub fn format_comparison(rows: &[EstimateSummary]) -> String {
    let mut lines = Vec::new();
    lines.push("Scenario | Months | Completion | Cost".to_string());
    lines.push("---------|--------|------------|-----".to_string());
    for row in rows {
        let completion = match row.completion_date {
            Some(date) => date.format("%b %Y").to_string(),
            None => "n/a".to_string(),
        };
        lines.push(format!(
            "{} | {} | {} | {}",
            row.scenario.config().label,
            row.display_time,
            completion,
            format_money(row.total_cost)
        ));
    }
    lines.join("\n")
}

fn format_phase_row(phase: &TimelinePhase) -> String {
    format!(
        "{} | {} | {} | {}",
        phase.name,
        phase.duration_months,
        phase.start_date.format("%b %Y"),
        phase.end_date.format("%b %Y")
    )
}

/// `$12,345` style amounts, rounded to whole units.
fn format_money(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
