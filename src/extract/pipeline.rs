//! NodeLocationExtractor: drives the extraction stages for one workspace.

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::extract::{assemble, document, output, source};
use crate::types::{CleanedDataset, ExtractionSummary};
use std::path::{Path, PathBuf};
use tracing::info;

/// Per-run switches on top of the configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Skip every write.
    pub dry_run: bool,
    /// Also write `[name, lat, lon]` triples here.
    pub json_out: Option<PathBuf>,
}

/// Extractor bound to a workspace directory.
pub struct NodeLocationExtractor {
    workspace_root: PathBuf,
    config: ExtractorConfig,
}

impl NodeLocationExtractor {
    pub fn new(workspace_root: impl Into<PathBuf>, config: ExtractorConfig) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            config,
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.config.input_in(&self.workspace_root)
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_in(&self.workspace_root)
    }

    /// Check, parse, assemble, sort and filter without writing anything.
    ///
    /// Returns the cleaned dataset and the number of records assembled
    /// before filtering.
    pub fn extract(&self) -> Result<(CleanedDataset, usize), ExtractError> {
        let input = self.input_path();
        source::ensure_input(&input, &self.config.source_url)?;
        let xml = source::read_input(&input)?;

        let fields = document::extract_fields(&xml)?;
        let mut records = assemble::assemble(fields)?;
        let extracted = records.len();

        assemble::sort_by_node(&mut records);
        let cleaned = self.config.bounds.apply(records);
        Ok((cleaned, extracted))
    }

    /// Full run: extract, then write the CSV (and triples when requested).
    pub fn run(&self, options: &RunOptions) -> Result<(CleanedDataset, ExtractionSummary), ExtractError> {
        let (cleaned, extracted) = self.extract()?;

        let output = if options.dry_run {
            None
        } else {
            let path = self.output_path();
            output::write_csv(&path, &cleaned)?;
            if let Some(json_out) = &options.json_out {
                output::write_triples(&self.workspace_root.join(json_out), &cleaned)?;
            }
            Some(path)
        };

        let summary = ExtractionSummary {
            input: self.input_path(),
            output,
            extracted,
            retained: cleaned.len(),
            dropped: extracted - cleaned.len(),
        };
        info!(
            extracted = summary.extracted,
            retained = summary.retained,
            dropped = summary.dropped,
            dry_run = options.dry_run,
            "Node location extraction finished"
        );
        Ok((cleaned, summary))
    }
}

/// Run the default pipeline in `workspace_root`: read `GetPriceContourMap.xml`,
/// write `caiso-node-latlon.csv`, and return the cleaned dataset.
pub fn extract_node_locations(workspace_root: &Path) -> Result<CleanedDataset, ExtractError> {
    let extractor = NodeLocationExtractor::new(workspace_root, ExtractorConfig::default());
    let (cleaned, _) = extractor.run(&RunOptions::default())?;
    Ok(cleaned)
}
