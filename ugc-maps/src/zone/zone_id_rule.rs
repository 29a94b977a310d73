use std::fmt::Display;

use serde::{Deserialize, Serialize};
use shapefile::dbase::Record;

use super::attribute_ops::field_text;

/// describes how a UGC zone identifier is derived from the attributes of a
/// zone shapefile record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ZoneIdRule {
    /// the identifier is stored verbatim in a single field, as in the marine
    /// zone datasets (`ID`).
    Field { field: String },
    /// the identifier is composed as `{state}Z{zone}`, as in the public forecast
    /// zone dataset (`STATE`, `ZONE`).
    ///
    /// the composed value always contains the `Z`, so a record with blank state
    /// and zone fields produces the identifier `"Z"` and is kept.
    StateZone {
        state_field: String,
        zone_field: String,
    },
}

impl ZoneIdRule {
    /// the `ID` field rule used by the coastal and offshore marine zones
    pub fn marine() -> Self {
        ZoneIdRule::Field {
            field: String::from("ID"),
        }
    }

    /// the `STATE` + `Z` + `ZONE` rule used by the public forecast zones
    pub fn public_zone() -> Self {
        ZoneIdRule::StateZone {
            state_field: String::from("STATE"),
            zone_field: String::from("ZONE"),
        }
    }

    /// computes the candidate identifier for a record. an empty result means the
    /// record has no identifier and should be skipped.
    pub fn identify(&self, record: &Record) -> String {
        match self {
            ZoneIdRule::Field { field } => field_text(record, field),
            ZoneIdRule::StateZone {
                state_field,
                zone_field,
            } => {
                let state = field_text(record, state_field);
                let zone = field_text(record, zone_field);
                format!("{state}Z{zone}")
            }
        }
    }
}

impl Display for ZoneIdRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneIdRule::Field { field } => write!(f, "{field}"),
            ZoneIdRule::StateZone {
                state_field,
                zone_field,
            } => write!(f, "{state_field} + \"Z\" + {zone_field}"),
        }
    }
}
