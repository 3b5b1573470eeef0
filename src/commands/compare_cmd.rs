use std::process::ExitCode;

use tracing::warn;

use crate::commands::base_commands::{Commands, reference_date_or_today};
use crate::commands::report_format::format_comparison;
use crate::services::answers_yaml::load_answers_from_yaml_file;
use crate::services::estimate_summary::compare_scenarios;

pub fn compare_command(cmd: Commands) -> ExitCode {
    let Commands::Compare {
        input,
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
    if !answers.is_complete() {
        warn!(input = %input, "answers have no visa type; comparing empty estimates");
    }

    let rows = compare_scenarios(&answers, reference_date_or_today(reference_date));
    println!("{}", format_comparison(&rows));
    ExitCode::SUCCESS
}
