use std::path::{Path, PathBuf};

use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, Polygon, PolygonRing};

/// a shapefile row for tests: character attributes and a single ring
pub struct TestZone<'a> {
    pub attributes: Vec<(&'a str, &'a str)>,
    pub ring: Vec<(f64, f64)>,
}

/// a clockwise unit square with its lower left corner at (x, y)
pub fn square(x: f64, y: f64) -> Vec<(f64, f64)> {
    vec![
        (x, y),
        (x, y + 1.0),
        (x + 1.0, y + 1.0),
        (x + 1.0, y),
        (x, y),
    ]
}

pub fn points(ring: &[(f64, f64)]) -> Vec<Point> {
    ring.iter().map(|(x, y)| Point::new(*x, *y)).collect()
}

/// a single-ring polygon that keeps the point order of `ring`. shapefiles store
/// outer rings clockwise and holes counter-clockwise, so the ring kind follows
/// the winding to stop the writer from reversing it.
pub fn polygon(ring: &[(f64, f64)]) -> Polygon {
    let twice_area: f64 = ring
        .windows(2)
        .map(|pair| pair[0].0 * pair[1].1 - pair[1].0 * pair[0].1)
        .sum();
    let ring = if twice_area > 0.0 {
        PolygonRing::Inner(points(ring))
    } else {
        PolygonRing::Outer(points(ring))
    };
    Polygon::with_rings(vec![ring])
}

pub fn record(attributes: &[(&str, &str)]) -> Record {
    let mut record = Record::default();
    for (name, value) in attributes {
        record.insert(
            name.to_string(),
            FieldValue::Character(Some(value.to_string())),
        );
    }
    record
}

/// writes a polygon shapefile with character fields `fields` into `directory`
pub fn write_zone_shapefile(
    directory: &Path,
    filename: &str,
    fields: &[&str],
    zones: &[TestZone],
) -> PathBuf {
    let path = directory.join(filename);
    let table_builder = fields.iter().fold(TableWriterBuilder::new(), |builder, field| {
        let name = FieldName::try_from(*field).expect("test field name should be valid");
        builder.add_character_field(name, 16)
    });
    let mut writer = shapefile::Writer::from_path(&path, table_builder)
        .unwrap_or_else(|e| panic!("failed creating test shapefile {path:?}: {e}"));
    for zone in zones {
        writer
            .write_shape_and_record(&polygon(&zone.ring), &record(&zone.attributes))
            .unwrap_or_else(|e| panic!("failed writing test shapefile {path:?}: {e}"));
    }
    path
}
