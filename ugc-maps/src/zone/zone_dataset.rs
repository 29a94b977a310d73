use std::{fmt::Display, path::Path};

use serde::{Deserialize, Serialize};

use super::{ZoneIdRule, ZoneTableConfig};

/// the National Weather Service zone datasets converted by this tool
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneDataset {
    /// coastal marine zones
    Coastal,
    /// offshore marine zones
    Offshore,
    /// public forecast zones
    PublicZones,
}

impl ZoneDataset {
    pub const ALL: [ZoneDataset; 3] = [
        ZoneDataset::Coastal,
        ZoneDataset::Offshore,
        ZoneDataset::PublicZones,
    ];

    /// shapefile location, relative to the input directory
    pub fn source_file(&self) -> &'static str {
        match self {
            ZoneDataset::Coastal => "mz18mr25/mz18mr25.shp",
            ZoneDataset::Offshore => "oz18mr25/oz18mr25.shp",
            ZoneDataset::PublicZones => "z_18mr25/z_18mr25.shp",
        }
    }

    /// output file name, relative to the output directory
    pub fn output_file(&self) -> &'static str {
        match self {
            ZoneDataset::Coastal => "UGC_COASTAL.json",
            ZoneDataset::Offshore => "UGC_OFFSHORE.json",
            ZoneDataset::PublicZones => "UGC_POLYGONS.json",
        }
    }

    pub fn id_rule(&self) -> ZoneIdRule {
        match self {
            ZoneDataset::Coastal | ZoneDataset::Offshore => ZoneIdRule::marine(),
            ZoneDataset::PublicZones => ZoneIdRule::public_zone(),
        }
    }

    pub fn config(&self, input_dir: &Path, output_dir: &Path) -> ZoneTableConfig {
        ZoneTableConfig {
            name: self.to_string(),
            source_file: input_dir.join(self.source_file()),
            id_rule: self.id_rule(),
            output_file: output_dir.join(self.output_file()),
        }
    }
}

impl Display for ZoneDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneDataset::Coastal => write!(f, "coastal"),
            ZoneDataset::Offshore => write!(f, "offshore"),
            ZoneDataset::PublicZones => write!(f, "public-zones"),
        }
    }
}
