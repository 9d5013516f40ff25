//! Rank command implementation for the carer CLI.

use camino::{Utf8Path, Utf8PathBuf};
use carer_core::{Scorer, rank};
use carer_data::{read_carers_file, write_ranking_file};
use carer_scorer::CarerScorer;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_INPUT, ARG_OUTPUT, CliError, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read carers from a comma-separated file with a header row, \
                 score each one, and write them highest score first. Carers \
                 with unusable review, image, login or experience data score \
                 zero and are reported on stderr.",
    about = "Rank carers by desirability"
)]
#[ortho_config(prefix = "CARER")]
pub(crate) struct RankArgs {
    /// Path to the carer file (defaults to `data.csv`).
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Path of the ranked export (defaults to `export.csv`).
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RankConfig::from(merged))
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Carer file to read.
    pub(crate) input: Utf8PathBuf,
    /// Export file to write.
    pub(crate) output: Utf8PathBuf,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match carer_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl From<RankArgs> for RankConfig {
    fn from(args: RankArgs) -> Self {
        Self {
            input: args.input.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_INPUT)),
            output: args
                .output
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

/// Counts reported after a ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RankSummary {
    /// Carers written to the export.
    pub(crate) ranked: usize,
    /// Carers whose score degraded to zero.
    pub(crate) degraded: usize,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let summary = execute_rank(&config, &CarerScorer::default())?;
    info!(
        "ranked {} carers into {} ({} degraded to zero)",
        summary.ranked, config.output, summary.degraded
    );
    Ok(())
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Read, rank and export the carers described by `config`.
pub(super) fn execute_rank(
    config: &RankConfig,
    scorer: &dyn Scorer,
) -> Result<RankSummary, CliError> {
    let carers = read_carers_file(&config.input).map_err(|source| CliError::ReadCarers {
        path: config.input.clone(),
        source,
    })?;
    let ranking = rank(carers, scorer);
    write_ranking_file(&config.output, &ranking.carers).map_err(|source| {
        CliError::WriteRanking {
            path: config.output.clone(),
            source,
        }
    })?;
    Ok(RankSummary {
        ranked: ranking.len(),
        degraded: ranking.diagnostics.len(),
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(RankConfig::from(merged))
}
