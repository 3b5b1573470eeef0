use thiserror::Error;

use crate::domain::timeline::Timeline;

#[derive(Error, Debug)]
pub enum GanttDiagramError {
    #[error("timeline has no phases; answer the visa type question first")]
    EmptyTimeline,
}

/// Renders the timeline as a Mermaid gantt chart inside a markdown section.
pub fn generate_gantt_diagram(
    title: &str,
    timeline: &Timeline,
) -> Result<String, GanttDiagramError> {
    if timeline.is_empty() {
        return Err(GanttDiagramError::EmptyTimeline);
    }

    let config = timeline.scenario.config();
    let mut lines = Vec::new();
    lines.push("".to_string());
    lines.push(format!("# {title} Timeline ({})", config.label));
    lines.push("```mermaid".to_string());
    lines.push("gantt".to_string());
    lines.push("    dateFormat  YYYY-MM-DD".to_string());
    lines.push("    axisFormat  %b %Y".to_string());

    for phase in &timeline.phases {
        lines.push(format!(
            "    {name} ({months} mo) :{id}, {start}, {end}",
            name = phase.name.replace(':', " "),
            months = phase.duration_months,
            id = phase.id.key(),
            start = phase.start_date.format("%Y-%m-%d"),
            end = phase.end_date.format("%Y-%m-%d"),
        ));
    }
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Estimated total time: {} months ({})",
        timeline.total_months(),
        config.description
    ));

    Ok(lines.join("\n"))
}
