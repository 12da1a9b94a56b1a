mod split;
pub mod wkt;

pub use wkt::{Strictness, parse_wkt, parse_wkt_strict, parse_wkt_with, write_collection, write_wkt};
