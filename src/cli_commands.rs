use std::fs::File;
use std::io::Write;
use wktlib::serialization::{Strictness, parse_wkt_with, write_wkt};
use wktlib::{GeometricObject, Geometry, LinearRing};

fn decode(input: &str, mode: Strictness) -> Result<Geometry, String> {
    parse_wkt_with(input, mode).map_err(|e| format!("Failed to parse WKT: {e}"))
}

/// Parse the input and re-encode it as canonical WKT, optionally saving the result
pub fn normalize(input: &str, mode: Strictness, output_path: Option<&str>) -> Result<String, String> {
    let geom = decode(input, mode)?;
    let text = write_wkt(&geom);
    log::debug!("Normalized {} with {} vertices", geom.geom_type(), geom.total_vertices());

    match output_path {
        None => Ok(text),
        Some(fp) => {
            let mut file = match File::create(fp) {
                Ok(f) => f,
                Err(e) => return Err(format!("Failed to create file: {}", e)),
            };
            match file.write_all(text.as_bytes()) {
                Err(_) => Err(String::from("Failed to write to file!")),
                Ok(_) => Ok(format!("Geometry saved to file: '{fp}'")),
            }
        }
    }
}

// One line per ring: vertex count and closure
fn describe_rings(rings: &[LinearRing], indent: &str, lines: &mut Vec<String>) {
    for (i, ring) in rings.iter().enumerate() {
        let role = if i == 0 { "Shell" } else { "Hole" };
        let closed = if ring.is_closed() { "closed" } else { "NOT closed" };
        lines.push(format!(
            "{indent}{role}: {} vertices, {closed}",
            ring.points.len()
        ));
    }
}

fn describe_geometry(geom: &Geometry, indent: &str, lines: &mut Vec<String>) {
    lines.push(format!(
        "{indent}{} with {} components and {} vertices",
        geom.geom_type(),
        geom.total_components(),
        geom.total_vertices()
    ));
    let nested = format!("{indent}  ");
    match geom {
        Geometry::Polygon(poly) => describe_rings(&poly.rings, &nested, lines),
        Geometry::MultiPolygon(mp) => {
            for poly in &mp.polygons {
                describe_rings(&poly.rings, &nested, lines);
            }
        }
        Geometry::GeometryCollection(members) => {
            for member in members {
                describe_geometry(member, &nested, lines);
            }
        }
        _ => (),
    }
}

/// Parse an input string and summarize the geometry it describes
pub fn describe(input: &str, mode: Strictness) -> Result<String, String> {
    let geom = decode(input, mode)?;
    let mut lines = vec![format!("Parsed a Geometry of Type {}!", geom.geom_type())];
    describe_geometry(&geom, "", &mut lines);
    Ok(lines.join("\n"))
}
