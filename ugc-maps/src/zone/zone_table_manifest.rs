use std::path::Path;

use config::Config;
use serde::{Deserialize, Serialize};

use super::{ZoneDataset, ZoneTableConfig, ZoneTableError, ZoneTableSummary};

/// an ordered list of zone datasets to convert, read from a TOML or JSON file:
///
/// ```toml
/// [[datasets]]
/// name = "coastal"
/// source_file = "mz18mr25/mz18mr25.shp"
/// output_file = "UGC_COASTAL.json"
/// id_rule = { type = "field", field = "ID" }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ZoneTableManifest {
    pub datasets: Vec<ZoneTableConfig>,
}

impl ZoneTableManifest {
    /// the three NWS zone datasets, read from `input_dir` and written to `output_dir`
    pub fn catalog(input_dir: &Path, output_dir: &Path) -> Self {
        let datasets = ZoneDataset::ALL
            .iter()
            .map(|dataset| dataset.config(input_dir, output_dir))
            .collect();
        Self { datasets }
    }

    /// builds each zone table in order, stopping at the first failure.
    pub fn run(&self) -> Result<Vec<ZoneTableSummary>, ZoneTableError> {
        self.datasets.iter().map(|dataset| dataset.run()).collect()
    }
}

impl TryFrom<&Path> for ZoneTableManifest {
    type Error = ZoneTableError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let filepath = path.display().to_string();
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => config::FileFormat::Toml,
            Some("json") => config::FileFormat::Json,
            _ => {
                return Err(ZoneTableError::InvalidConfiguration(format!(
                    "unsupported manifest file type: {filepath}"
                )))
            }
        };
        let config = Config::builder()
            .add_source(config::File::new(&filepath, format))
            .build()
            .map_err(|e| ZoneTableError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        let config_json = config
            .try_deserialize::<serde_json::Value>()
            .map_err(|e| ZoneTableError::ConfigReadError {
                msg: format!("failed converting '{filepath}' to JSON"),
                source: e,
            })?;
        serde_json::from_value(config_json).map_err(|e| {
            ZoneTableError::InvalidConfiguration(format!("failed decoding '{filepath}': {e}"))
        })
    }
}
