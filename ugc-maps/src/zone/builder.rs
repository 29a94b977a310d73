use std::path::Path;

use kdam::tqdm;
use shapefile::{dbase::Record, Shape};

use super::{geometry_ops, ZoneTable, ZoneTableError};

/// number of leading records reported when reading a dataset
const PREVIEW_ROWS: usize = 5;

/// builds a zone table from a shapefile and writes it to `output_path` as JSON.
///
/// # Arguments
/// * `source_path` - a `.shp` file with its `.dbf` and `.shx` siblings
/// * `id_fn` - derives the zone identifier of a record, empty when the record has none
/// * `output_path` - file to write the zone table to
///
/// # Result
///
/// the number of zones written. the output file is only written once the whole
/// dataset has been read.
pub fn build_zone_table<P, Q, F>(
    source_path: P,
    id_fn: F,
    output_path: Q,
) -> Result<usize, ZoneTableError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: Fn(&Record) -> String,
{
    let table = read_zone_table(source_path, id_fn)?;
    table.write(output_path)?;
    Ok(table.len())
}

/// reads all records of a shapefile into a zone table.
pub fn read_zone_table<P, F>(source_path: P, id_fn: F) -> Result<ZoneTable, ZoneTableError>
where
    P: AsRef<Path>,
    F: Fn(&Record) -> String,
{
    let path = source_path.as_ref();
    let filepath = path.display().to_string();
    let mut reader =
        shapefile::Reader::from_path(path).map_err(|source| ZoneTableError::DatasetReadError {
            filepath: filepath.clone(),
            source,
        })?;
    let rows = tqdm!(
        reader.iter_shapes_and_records(),
        desc = format!("reading {filepath}")
    );
    collect_zone_table(rows, id_fn, &filepath)
}

/// collects shapefile rows into a zone table. rows without an identifier or
/// with a null shape are skipped, a repeated identifier replaces the geometry
/// stored for it.
pub fn collect_zone_table<I, F>(
    rows: I,
    id_fn: F,
    filepath: &str,
) -> Result<ZoneTable, ZoneTableError>
where
    I: IntoIterator<Item = Result<(Shape, Record), shapefile::Error>>,
    F: Fn(&Record) -> String,
{
    let mut table = ZoneTable::default();
    for (idx, row) in rows.into_iter().enumerate() {
        let (shape, record) = row.map_err(|source| ZoneTableError::DatasetReadError {
            filepath: filepath.to_string(),
            source,
        })?;
        let zone_id = id_fn(&record);
        if idx < PREVIEW_ROWS {
            log::info!(
                "{filepath} row {idx}: zone '{zone_id}', {} shape",
                shape.shapetype()
            );
        }
        if zone_id.is_empty() {
            log::debug!("{filepath} row {idx}: no zone id, skipping");
            continue;
        }
        let geometry = match geometry_ops::shape_to_geojson(shape) {
            Ok(Some(geometry)) => geometry,
            Ok(None) => {
                log::debug!("{filepath} row {idx}: zone '{zone_id}' has no geometry, skipping");
                continue;
            }
            Err(msg) => {
                log::warn!("{filepath} row {idx}: zone '{zone_id}' skipped, {msg}");
                continue;
            }
        };
        if table.insert(zone_id.clone(), geometry).is_some() {
            log::debug!("{filepath} row {idx}: replacing geometry of zone '{zone_id}'");
        }
    }
    log::info!("{filepath}: collected {} zones", table.len());
    Ok(table)
}
