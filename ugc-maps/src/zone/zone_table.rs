use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ZoneTableError;

/// mapping from UGC zone identifier to zone geometry, in the order the zones
/// were first seen in the source dataset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ZoneTable(IndexMap<String, geojson::Geometry>);

impl ZoneTable {
    /// sets the geometry for a zone. a zone seen before keeps its position in the
    /// table and the previous geometry is returned.
    pub fn insert(&mut self, zone_id: String, geometry: geojson::Geometry) -> Option<geojson::Geometry> {
        self.0.insert(zone_id, geometry)
    }

    pub fn get(&self, zone_id: &str) -> Option<&geojson::Geometry> {
        self.0.get(zone_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// the table as a 2-space indented JSON document
    pub fn to_json_string(&self) -> Result<String, ZoneTableError> {
        let json = serde_json::to_string_pretty(&self.0)?;
        Ok(json)
    }

    /// writes the table to `output_path` as indented JSON.
    ///
    /// the document is encoded in memory and written to a temporary file next to
    /// the destination which is then renamed into place, so a failed write leaves
    /// any existing file at `output_path` as it was.
    pub fn write<P>(&self, output_path: P) -> Result<(), ZoneTableError>
    where
        P: AsRef<Path>,
    {
        let path = output_path.as_ref();
        let json = self.to_json_string()?;
        let tmp_path = temporary_path(path)?;
        let result = write_bytes(&tmp_path, json.as_bytes())
            .and_then(|_| std::fs::rename(&tmp_path, path));
        if let Err(source) = result {
            if tmp_path.exists() {
                if let Err(e) = std::fs::remove_file(&tmp_path) {
                    log::warn!(
                        "failed to remove temporary file '{}': {e}",
                        tmp_path.display()
                    );
                }
            }
            return Err(ZoneTableError::OutputWriteError {
                filepath: path.display().to_string(),
                source,
            });
        }
        log::debug!("wrote {} zones to '{}'", self.len(), path.display());
        Ok(())
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// hidden sibling of the output file used while writing, e.g. `.UGC_COASTAL.json.tmp`
fn temporary_path(path: &Path) -> Result<PathBuf, ZoneTableError> {
    let filename = path.file_name().ok_or_else(|| ZoneTableError::OutputWriteError {
        filepath: path.display().to_string(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(filename);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
