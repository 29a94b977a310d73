use shapefile::{Point, PointM, PointZ, PolygonRing, Shape};

type Position = Vec<f64>;

/// converts a shapefile shape into its geo-interface JSON encoding
/// (`{"type": ..., "coordinates": ...}`), keeping the point order of the file.
///
/// polygons and polylines with a single part are reported as `Polygon` and
/// `LineString`, multi-part shapes as `MultiPolygon` and `MultiLineString`.
/// Z shapes carry z as a third coordinate, M values are not written.
///
/// # Result
///
/// `Ok(None)` for the null shape, an error message for shapes that have no
/// geo-interface encoding (multipatch) or no parts.
pub fn shape_to_geojson(shape: Shape) -> Result<Option<geojson::Geometry>, String> {
    let value = match shape {
        Shape::NullShape => return Ok(None),
        Shape::Point(p) => geojson::Value::Point(p.position()),
        Shape::PointM(p) => geojson::Value::Point(p.position()),
        Shape::PointZ(p) => geojson::Value::Point(p.position()),
        Shape::Polyline(polyline) => polyline_value(polyline.parts())?,
        Shape::PolylineM(polyline) => polyline_value(polyline.parts())?,
        Shape::PolylineZ(polyline) => polyline_value(polyline.parts())?,
        Shape::Polygon(polygon) => polygon_value(polygon.rings())?,
        Shape::PolygonM(polygon) => polygon_value(polygon.rings())?,
        Shape::PolygonZ(polygon) => polygon_value(polygon.rings())?,
        Shape::Multipoint(points) => geojson::Value::MultiPoint(positions(points.points())),
        Shape::MultipointM(points) => geojson::Value::MultiPoint(positions(points.points())),
        Shape::MultipointZ(points) => geojson::Value::MultiPoint(positions(points.points())),
        Shape::Multipatch(_) => {
            return Err(String::from(
                "multipatch shapes have no geo interface representation",
            ))
        }
    };
    Ok(Some(geojson::Geometry::new(value)))
}

/// a shapefile point that can be written as a geo-interface position
trait ShapePoint {
    fn position(&self) -> Position;
}

impl ShapePoint for Point {
    fn position(&self) -> Position {
        vec![self.x, self.y]
    }
}

impl ShapePoint for PointM {
    fn position(&self) -> Position {
        vec![self.x, self.y]
    }
}

impl ShapePoint for PointZ {
    fn position(&self) -> Position {
        vec![self.x, self.y, self.z]
    }
}

fn positions<P: ShapePoint>(points: &[P]) -> Vec<Position> {
    points.iter().map(ShapePoint::position).collect()
}

fn polyline_value<P: ShapePoint>(parts: &[Vec<P>]) -> Result<geojson::Value, String> {
    let mut lines: Vec<Vec<Position>> = parts.iter().map(|part| positions(part)).collect();
    match lines.len() {
        0 => Err(String::from("polyline has no parts")),
        1 => Ok(geojson::Value::LineString(lines.remove(0))),
        _ => Ok(geojson::Value::MultiLineString(lines)),
    }
}

/// groups polygon rings into polygons. each outer ring opens a polygon and the
/// holes that follow belong to it. the reader classifies rings by winding order,
/// so a counter-clockwise ring with no outer ring before it is read as a hole;
/// it opens a polygon of its own instead.
fn polygon_value<P: ShapePoint>(rings: &[PolygonRing<P>]) -> Result<geojson::Value, String> {
    let mut polygons: Vec<Vec<Vec<Position>>> = vec![];
    for ring in rings {
        match ring {
            PolygonRing::Outer(points) => polygons.push(vec![positions(points)]),
            PolygonRing::Inner(points) => match polygons.last_mut() {
                Some(polygon) => polygon.push(positions(points)),
                None => polygons.push(vec![positions(points)]),
            },
        }
    }
    match polygons.len() {
        0 => Err(String::from("polygon has no rings")),
        1 => Ok(geojson::Value::Polygon(polygons.remove(0))),
        _ => Ok(geojson::Value::MultiPolygon(polygons)),
    }
}

#[cfg(test)]
mod tests {
    use super::shape_to_geojson;
    use crate::zone::test_ops::{points, square};
    use serde_json::json;
    use shapefile::{Point, PointZ, Polygon, PolygonRing, PolygonZ, Polyline, Shape};

    fn encode(shape: Shape) -> serde_json::Value {
        let geometry = shape_to_geojson(shape).unwrap().unwrap();
        serde_json::to_value(geometry).unwrap()
    }

    #[test]
    fn test_counter_clockwise_ring_is_outer_boundary() {
        let ring = points(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        let polygon = Polygon::with_rings(vec![PolygonRing::Inner(ring)]);
        let expected = json!({
            "type": "Polygon",
            "coordinates": [[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]]
        });
        assert_eq!(encode(Shape::Polygon(polygon)), expected);
    }

    #[test]
    fn test_polygon_with_hole() {
        let outer = points(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);
        let hole = points(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)]);
        let polygon =
            Polygon::with_rings(vec![PolygonRing::Outer(outer), PolygonRing::Inner(hole)]);
        let expected = json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]],
                [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0], [1.0, 1.0]]
            ]
        });
        assert_eq!(encode(Shape::Polygon(polygon)), expected);
    }

    #[test]
    fn test_multipart_polygon() {
        let polygon = Polygon::with_rings(vec![
            PolygonRing::Outer(points(&square(0.0, 0.0))),
            PolygonRing::Outer(points(&square(5.0, 5.0))),
        ]);
        let expected = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [5.0, 6.0], [6.0, 6.0], [6.0, 5.0], [5.0, 5.0]]]
            ]
        });
        assert_eq!(encode(Shape::Polygon(polygon)), expected);
    }

    #[test]
    fn test_z_coordinates_are_kept() {
        let ring = vec![
            PointZ::new(0.0, 0.0, 5.0, 0.0),
            PointZ::new(0.0, 1.0, 6.0, 0.0),
            PointZ::new(1.0, 1.0, 7.0, 0.0),
            PointZ::new(0.0, 0.0, 5.0, 0.0),
        ];
        let polygon = PolygonZ::with_rings(vec![PolygonRing::Outer(ring)]);
        let expected = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0, 5.0], [0.0, 1.0, 6.0], [1.0, 1.0, 7.0], [0.0, 0.0, 5.0]]]
        });
        assert_eq!(encode(Shape::PolygonZ(polygon)), expected);
        let point = encode(Shape::PointZ(PointZ::new(1.0, 2.0, 3.0, 0.0)));
        assert_eq!(point, json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0]}));
    }

    #[test]
    fn test_single_part_polyline_is_line_string() {
        let polyline = Polyline::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)]);
        let expected = json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 2.0]]});
        assert_eq!(encode(Shape::Polyline(polyline)), expected);
    }

    #[test]
    fn test_null_shape_has_no_geometry() {
        assert!(shape_to_geojson(Shape::NullShape).unwrap().is_none());
    }
}
