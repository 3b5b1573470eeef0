use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::answers_yaml::load_answers_from_yaml_file;
use crate::services::cost_aggregator::compute_cost_summary;
use crate::services::cost_plot::write_cost_png;
use crate::services::estimator_config::EstimatorConfig;

pub fn plot_costs_command(cmd: Commands, config: &EstimatorConfig) -> ExitCode {
    let Commands::PlotCosts { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let answers = match load_answers_from_yaml_file(&input) {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("Failed to load answers: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = compute_cost_summary(&answers);
    match write_cost_png(&output, &summary, (config.chart_width, config.chart_height)) {
        Ok(()) => {
            println!("Cost plot written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot costs: {e}");
            ExitCode::FAILURE
        }
    }
}
