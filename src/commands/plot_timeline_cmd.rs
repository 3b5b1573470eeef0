use std::process::ExitCode;

use chrono::Local;

use crate::commands::base_commands::{Commands, reference_date_or_today};
use crate::services::answers_yaml::load_answers_from_yaml_file;
use crate::services::estimator_config::EstimatorConfig;
use crate::services::timeline_allocator::compute_timeline;
use crate::services::timeline_plot::write_timeline_png;

pub fn plot_timeline_command(cmd: Commands, config: &EstimatorConfig) -> ExitCode {
    let Commands::PlotTimeline {
        input,
        output,
        scenario,
        reference_date,
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

    let scenario = scenario.unwrap_or(config.default_scenario);
    let timeline = compute_timeline(&answers, scenario, reference_date_or_today(reference_date));
    let today = Local::now().date_naive();
    match write_timeline_png(&output, &timeline, today, (config.chart_width, config.chart_height)) {
        Ok(()) => {
            println!("Timeline plot written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot timeline: {e}");
            ExitCode::FAILURE
        }
    }
}
