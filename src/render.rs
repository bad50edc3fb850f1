//! Text and JSON rendering of engine results

use anyhow::Result;
use relief_core::{Camp, CampId, DistanceTable, INFINITE, Route, SpanningForest, Weight};
use serde::Serialize;
use std::io::Write;

fn json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn distance_text(distance: Weight) -> String {
    if distance == INFINITE {
        "unreachable".to_string()
    } else {
        distance.to_string()
    }
}

pub fn camp(out: &mut impl Write, camp: &Camp) -> Result<()> {
    writeln!(out, "Camp number: {}", camp.id)?;
    writeln!(out, "Camp name: {}", camp.name)?;
    writeln!(out, "Camp address: {}", camp.address)?;
    writeln!(out, "Camp contact: {}", camp.contact)?;
    Ok(())
}

pub fn camps<'a>(
    out: &mut impl Write,
    camps: impl IntoIterator<Item = &'a Camp>,
    as_json: bool,
) -> Result<()> {
    let camps: Vec<&Camp> = camps.into_iter().collect();
    if as_json {
        return json(out, &camps);
    }
    for c in camps {
        writeln!(out, "==============================")?;
        camp(out, c)?;
        if c.need != 0 {
            writeln!(out, "Need: {}", c.need)?;
        }
        for resource in &c.resources {
            writeln!(out, "  {} x {}", resource.quantity, resource.name)?;
        }
    }
    writeln!(out, "==============================")?;
    Ok(())
}

pub fn mst(out: &mut impl Write, forest: &SpanningForest, as_json: bool) -> Result<()> {
    if as_json {
        return json(out, forest);
    }
    writeln!(out, "Minimum spanning tree:")?;
    for edge in &forest.edges {
        writeln!(out, "{}", edge)?;
    }
    if forest.total_weight == INFINITE {
        writeln!(out, "Total cost: unknown")?;
    } else {
        writeln!(out, "Total cost: {}", forest.total_weight)?;
    }
    if forest.components > 1 {
        writeln!(out, "Network is split into {} groups", forest.components)?;
    }
    Ok(())
}

pub fn distances(out: &mut impl Write, source: CampId, table: &DistanceTable, as_json: bool) -> Result<()> {
    if as_json {
        return json(out, table);
    }
    writeln!(out, "Distances from camp {}:", source)?;
    for (id, distance) in table.iter() {
        writeln!(out, "Camp {}: {}", id, distance_text(distance))?;
    }
    Ok(())
}

pub fn route(out: &mut impl Write, route: Option<&Route>, as_json: bool) -> Result<()> {
    if as_json {
        return json(out, &route);
    }
    match route {
        Some(route) => {
            let hops: Vec<String> = route.camps.iter().map(|id| id.to_string()).collect();
            writeln!(out, "Route: {} (cost {})", hops.join(" -> "), route.cost)?;
        }
        None => writeln!(out, "No route found.")?,
    }
    Ok(())
}

pub fn nearest(out: &mut impl Write, found: Option<(&Camp, Weight)>, as_json: bool) -> Result<()> {
    if as_json {
        #[derive(Serialize)]
        struct Nearest<'a> {
            camp: &'a Camp,
            distance: Weight,
        }
        return json(out, &found.map(|(camp, distance)| Nearest { camp, distance }));
    }
    match found {
        Some((nearest, distance)) => {
            writeln!(out, "The nearest camp is:")?;
            camp(out, nearest)?;
            writeln!(out, "Distance: {}", distance)?;
        }
        None => writeln!(out, "No nearby camps found.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_core::Connection;

    fn text(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_mst_text() {
        let forest = SpanningForest {
            edges: vec![Connection::new(CampId(1), CampId(2), 3)],
            total_weight: 3,
            components: 2,
        };
        let output = text(|out| mst(out, &forest, false));
        assert_eq!(
            output,
            "Minimum spanning tree:\nCamp 1 - Camp 2 Cost: 3\nTotal cost: 3\nNetwork is split into 2 groups\n"
        );
    }

    #[test]
    fn test_mst_text_with_unknown_cost() {
        let forest = SpanningForest {
            edges: vec![Connection::new(CampId(1), CampId(2), INFINITE)],
            total_weight: INFINITE,
            components: 1,
        };
        let output = text(|out| mst(out, &forest, false));
        assert!(output.contains("Camp 1 - Camp 2 Cost: unknown\n"));
        assert!(output.contains("Total cost: unknown\n"));
        assert!(!output.contains("unreachable"));
    }

    #[test]
    fn test_route_json_none() {
        assert_eq!(text(|out| route(out, None, true)), "null\n");
    }
}
