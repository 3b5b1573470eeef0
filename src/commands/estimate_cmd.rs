use std::process::ExitCode;

use tracing::{info, warn};

use crate::commands::base_commands::{Commands, reference_date_or_today};
use crate::commands::report_format::format_estimate_report;
use crate::services::answers_yaml::load_answers_from_yaml_file;
use crate::services::estimate_output::serialize_estimate;
use crate::services::estimate_summary::build_estimate;
use crate::services::estimator_config::EstimatorConfig;
use crate::services::gantt_diagram::{GanttDiagramError, generate_gantt_diagram};

pub fn estimate_command(cmd: Commands, config: &EstimatorConfig) -> ExitCode {
    let Commands::Estimate {
        input,
        output,
        scenario,
        reference_date,
        format,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let answers = match load_answers_from_yaml_file(&input) {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("Failed to load answers: {e}");
            return ExitCode::FAILURE;
        }
    };
    if !answers.is_complete() {
        warn!(input = %input, "answers have no visa type; writing an empty estimate");
    }

    let scenario = scenario.unwrap_or(config.default_scenario);
    let reference_date = reference_date_or_today(reference_date);
    let estimate = build_estimate(&answers, scenario, reference_date);
    info!(%scenario, %reference_date, total = estimate.costs.total, "estimate computed");

    let mut buffer = Vec::new();
    if let Err(e) = serialize_estimate(&mut buffer, &estimate, format) {
        eprintln!("Failed to serialize estimate: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = std::fs::write(&output, buffer) {
        eprintln!("Failed to write estimate output: {e}");
        return ExitCode::FAILURE;
    }

    println!("{}", format_estimate_report(&estimate));
    println!();
    println!("Estimate written to {output}");

    let title = estimate.visa_type.as_deref().unwrap_or("Visa");
    match generate_gantt_diagram(title, &estimate.timeline) {
        Ok(diagram) => {
            let gantt_path = format!("{output}.gantt.md");
            if let Err(e) = std::fs::write(&gantt_path, diagram) {
                eprintln!("Failed to write gantt diagram: {e}");
                return ExitCode::FAILURE;
            }
            println!("Gantt diagram written to {gantt_path}");
        }
        Err(GanttDiagramError::EmptyTimeline) => {
            info!("no phases to chart; skipping gantt diagram");
        }
    }

    ExitCode::SUCCESS
}
