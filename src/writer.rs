use std::path::Path;

use anyhow::Result;

use crate::ir::Route;

/// One line per committed label, in route order:
/// `<x> <y> <position>`. Routes without a label are omitted.
pub fn format_labels(routes: &[Route]) -> String {
    let lines: Vec<String> = routes
        .iter()
        .filter_map(|route| route.label.as_ref())
        .map(|label| {
            format!(
                "{} {} {}",
                label.point.x,
                label.point.y,
                label.position.as_str()
            )
        })
        .collect();
    lines.join("\n")
}

/// Writes label lines to `output`, or stdout when no path is given.
pub fn write_labels(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
        }
        None => {
            println!("{}", text);
        }
    }
    Ok(())
}
