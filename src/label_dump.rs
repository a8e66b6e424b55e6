use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::ir::Route;

#[derive(Debug, Serialize)]
pub struct PlacementDump {
    pub placed: usize,
    pub routes: Vec<RouteDump>,
}

#[derive(Debug, Serialize)]
pub struct RouteDump {
    pub index: usize,
    pub points: Vec<[f64; 2]>,
    pub label: Option<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub x: f64,
    pub y: f64,
    pub position: String,
}

impl PlacementDump {
    pub fn from_routes(routes: &[Route]) -> Self {
        let routes: Vec<RouteDump> = routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteDump {
                index,
                points: route.points.iter().map(|p| [p.x, p.y]).collect(),
                label: route.label.as_ref().map(|label| LabelDump {
                    x: label.point.x,
                    y: label.point.y,
                    position: label.position.as_str().to_string(),
                }),
            })
            .collect();
        let placed = routes.iter().filter(|route| route.label.is_some()).count();
        PlacementDump { placed, routes }
    }
}

pub fn write_label_dump(path: &Path, routes: &[Route]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = PlacementDump::from_routes(routes);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
