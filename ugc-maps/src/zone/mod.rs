mod attribute_ops;
mod builder;
mod geometry_ops;
mod zone_dataset;
mod zone_id_rule;
mod zone_table;
mod zone_table_config;
mod zone_table_error;
mod zone_table_manifest;

#[cfg(test)]
mod test_ops;

pub use attribute_ops::field_text;
pub use builder::{build_zone_table, collect_zone_table, read_zone_table};
pub use geometry_ops::shape_to_geojson;
pub use zone_dataset::ZoneDataset;
pub use zone_id_rule::ZoneIdRule;
pub use zone_table::ZoneTable;
pub use zone_table_config::{ZoneTableConfig, ZoneTableSummary};
pub use zone_table_error::ZoneTableError;
pub use zone_table_manifest::ZoneTableManifest;
