use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::zone::{
    ZoneDataset, ZoneIdRule, ZoneTableConfig, ZoneTableError, ZoneTableManifest,
    ZoneTableSummary,
};

/// Command line tool for building UGC zone geometry tables from NWS zone shapefiles
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct UgcApp {
    #[command(subcommand)]
    pub op: UgcOperation,
}

#[derive(Args, Debug, Clone)]
pub struct DirectoryArgs {
    /// directory containing the zone shapefile directories
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,
    /// directory to write UGC tables into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Subcommand)]
pub enum UgcOperation {
    /// build UGC_COASTAL.json from the coastal marine zones
    Coastal {
        #[command(flatten)]
        dirs: DirectoryArgs,
    },
    /// build UGC_OFFSHORE.json from the offshore marine zones
    Offshore {
        #[command(flatten)]
        dirs: DirectoryArgs,
    },
    /// build UGC_POLYGONS.json from the public forecast zones
    PublicZones {
        #[command(flatten)]
        dirs: DirectoryArgs,
    },
    /// build all three UGC tables
    All {
        #[command(flatten)]
        dirs: DirectoryArgs,
    },
    /// build a UGC table from any zone shapefile
    Build {
        /// a .shp file with .dbf and .shx siblings
        source_file: PathBuf,
        /// file to write the UGC table to
        output_file: PathBuf,
        /// field holding the zone identifier. cannot be used with state/zone fields.
        #[arg(long, conflicts_with_all = ["state_field", "zone_field"])]
        id_field: Option<String>,
        /// field holding the state code of a `{state}Z{zone}` identifier
        #[arg(long, requires = "zone_field")]
        state_field: Option<String>,
        /// field holding the zone number of a `{state}Z{zone}` identifier
        #[arg(long, requires = "state_field")]
        zone_field: Option<String>,
    },
    /// build every UGC table listed in a TOML or JSON manifest file
    Manifest { manifest_file: PathBuf },
}

impl UgcOperation {
    pub fn run(&self) -> Result<Vec<ZoneTableSummary>, ZoneTableError> {
        match self {
            UgcOperation::Coastal { dirs } => run_dataset(ZoneDataset::Coastal, dirs),
            UgcOperation::Offshore { dirs } => run_dataset(ZoneDataset::Offshore, dirs),
            UgcOperation::PublicZones { dirs } => run_dataset(ZoneDataset::PublicZones, dirs),
            UgcOperation::All { dirs } => {
                ZoneTableManifest::catalog(&dirs.input_dir, &dirs.output_dir).run()
            }
            UgcOperation::Build {
                source_file,
                output_file,
                id_field,
                state_field,
                zone_field,
            } => {
                let id_rule = match (id_field, state_field, zone_field) {
                    (Some(field), None, None) => ZoneIdRule::Field {
                        field: field.clone(),
                    },
                    (None, Some(state_field), Some(zone_field)) => ZoneIdRule::StateZone {
                        state_field: state_field.clone(),
                        zone_field: zone_field.clone(),
                    },
                    _ => {
                        return Err(ZoneTableError::InvalidConfiguration(String::from(
                            "provide either --id-field or both --state-field and --zone-field",
                        )))
                    }
                };
                let config = ZoneTableConfig {
                    name: source_file.display().to_string(),
                    source_file: source_file.clone(),
                    id_rule,
                    output_file: output_file.clone(),
                };
                Ok(vec![config.run()?])
            }
            UgcOperation::Manifest { manifest_file } => {
                ZoneTableManifest::try_from(manifest_file.as_path())?.run()
            }
        }
    }
}

fn run_dataset(
    dataset: ZoneDataset,
    dirs: &DirectoryArgs,
) -> Result<Vec<ZoneTableSummary>, ZoneTableError> {
    let summary = dataset.config(&dirs.input_dir, &dirs.output_dir).run()?;
    Ok(vec![summary])
}
