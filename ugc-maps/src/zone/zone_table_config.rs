use std::{fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};

use super::{build_zone_table, ZoneIdRule, ZoneTableError};

/// a single zone dataset to convert: where to read it, how to identify its
/// zones, and where to write the resulting table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ZoneTableConfig {
    pub name: String,
    pub source_file: PathBuf,
    pub id_rule: ZoneIdRule,
    pub output_file: PathBuf,
}

/// outcome of a successful zone table build
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ZoneTableSummary {
    pub name: String,
    pub output_file: PathBuf,
    pub entries: usize,
}

impl ZoneTableConfig {
    pub fn run(&self) -> Result<ZoneTableSummary, ZoneTableError> {
        log::info!(
            "building {} zone table from '{}' using id rule {}",
            self.name,
            self.source_file.display(),
            self.id_rule
        );
        let entries = build_zone_table(
            &self.source_file,
            |record| self.id_rule.identify(record),
            &self.output_file,
        )?;
        let summary = ZoneTableSummary {
            name: self.name.clone(),
            output_file: self.output_file.clone(),
            entries,
        };
        log::info!("{summary}");
        Ok(summary)
    }
}

impl Display for ZoneTableSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} created with {} entries!",
            self.output_file.display(),
            self.entries
        )
    }
}
