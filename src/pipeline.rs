//! Load a hand table, project it and hand it to a renderer.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::chart::{ChartError, Renderer};
use crate::table::{HAND_COLUMN, SCORE_COLUMN, TableError, load_rows, project_columns};

/// Where the chart reads its table from when nothing else is asked for.
/// Relative paths resolve against the working directory.
pub const DEFAULT_INPUT_PATH: &str = "../truco_strength.csv";

/// Everything a chart run can be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub input_path: PathBuf,
    pub hand_column: String,
    pub score_column: String,
    pub x_title: String,
    pub y_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            hand_column: HAND_COLUMN.to_string(),
            score_column: SCORE_COLUMN.to_string(),
            x_title: "Hand".to_string(),
            y_title: "Truco Score".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Table Error: {0}")]
    Table(#[from] TableError),
    #[error("Chart Error: {0}")]
    Chart(#[from] ChartError),
}

/// Load the table at `config.input_path`, project it and render it.
///
/// The renderer is only called once the whole table has been read and
/// projected, so a bad file never opens a chart.
#[instrument(level = "debug", skip_all, fields(path = %config.input_path.display()))]
pub fn run<R: Renderer + ?Sized>(config: &ChartConfig, renderer: &mut R) -> Result<(), PipelineError> {
    let rows = load_rows(&config.input_path)?;
    let projection = project_columns(&rows, &config.hand_column, &config.score_column)?;
    debug!(points = projection.len(), "projected table");

    renderer.render(&projection)?;
    info!("chart closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_log::test;

    use super::*;
    use crate::chart::VecRenderer;
    use crate::table::Projection;

    fn table(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn config_for(file: &tempfile::NamedTempFile) -> ChartConfig {
        ChartConfig {
            input_path: file.path().to_path_buf(),
            ..ChartConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(PathBuf::from("../truco_strength.csv"), config.input_path);
        assert_eq!("hand", config.hand_column);
        assert_eq!("truco_score", config.score_column);
        assert_eq!("Hand", config.x_title);
        assert_eq!("Truco Score", config.y_title);
    }

    #[test]
    fn test_run_renders_projection() {
        let file = table("hand,truco_score\n4E,10\n3O,7\n");
        let records = VecRenderer::new_storage();
        let mut renderer = VecRenderer::new(records.clone());

        run(&config_for(&file), &mut renderer).unwrap();

        let seen = records.borrow();
        assert_eq!(1, seen.len());
        assert_eq!(
            Projection {
                labels: vec!["4 E".to_string(), "3 O".to_string()],
                scores: vec!["10".to_string(), "7".to_string()],
            },
            seen[0]
        );
    }

    #[test]
    fn test_run_missing_column_never_renders() {
        let file = table("hand,score\n4E,10\n");
        let records = VecRenderer::new_storage();
        let mut renderer = VecRenderer::new(records.clone());

        let err = run(&config_for(&file), &mut renderer).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Table(TableError::MissingField { row: 0, ref field }) if field == "truco_score"
        ));
        assert!(records.borrow().is_empty());
    }

    #[test]
    fn test_run_header_only_renders_empty() {
        let file = table("hand,truco_score\n");
        let records = VecRenderer::new_storage();
        let mut renderer = VecRenderer::new(records.clone());

        run(&config_for(&file), &mut renderer).unwrap();

        let seen = records.borrow();
        assert_eq!(1, seen.len());
        assert!(seen[0].is_empty());
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChartConfig {
            input_path: dir.path().join("truco_strength.csv"),
            ..ChartConfig::default()
        };
        let records = VecRenderer::new_storage();
        let mut renderer = VecRenderer::new(records.clone());

        let err = run(&config, &mut renderer).unwrap_err();
        assert!(matches!(err, PipelineError::Table(TableError::Io(_))));
        assert!(records.borrow().is_empty());
    }

    #[test]
    fn test_run_other_columns() {
        let file = table("cards,strength\n7E,0.9\n");
        let config = ChartConfig {
            hand_column: "cards".to_string(),
            score_column: "strength".to_string(),
            ..config_for(&file)
        };
        let records = VecRenderer::new_storage();
        let mut renderer = VecRenderer::new(records.clone());

        run(&config, &mut renderer).unwrap();
        assert_eq!(vec!["7 E".to_string()], records.borrow()[0].labels);
    }
}
