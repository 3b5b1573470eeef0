use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use visa_estimates::commands::base_commands::{CliArgs, Commands};
use visa_estimates::commands::compare_cmd::compare_command;
use visa_estimates::commands::estimate_cmd::estimate_command;
use visa_estimates::commands::plot_costs_cmd::plot_costs_command;
use visa_estimates::commands::plot_timeline_cmd::plot_timeline_command;
use visa_estimates::services::estimator_config::EstimatorConfig;
use visa_estimates::telemetry;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match EstimatorConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = telemetry::init(&config.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match args.command {
        cmd @ Commands::Estimate { .. } => estimate_command(cmd, &config),
        cmd @ Commands::PlotTimeline { .. } => plot_timeline_command(cmd, &config),
        cmd @ Commands::PlotCosts { .. } => plot_costs_command(cmd, &config),
        cmd @ Commands::Compare { .. } => compare_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
