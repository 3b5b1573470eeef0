use std::io::{self, Write};

use clap::ValueEnum;
use thiserror::Error;

use crate::services::estimate_summary::Estimate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Error, Debug)]
pub enum EstimateOutputError {
    #[error("failed to serialize estimate to yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize estimate to json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write estimate: {0}")]
    Write(#[from] io::Error),
}

pub fn serialize_estimate<W: Write>(
    writer: &mut W,
    estimate: &Estimate,
    format: OutputFormat,
) -> Result<(), EstimateOutputError> {
    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(estimate)?;
            writer.write_all(yaml.as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, estimate)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}
