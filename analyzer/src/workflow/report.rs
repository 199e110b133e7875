use anyhow::Context;
use gapcore::schedule::OccupancyGrid;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Renders an occupancy grid one hour per line, Monday first.
pub fn render_grid(grid: &OccupancyGrid) -> String {
    grid.cells()
        .rows()
        .into_iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("[{}]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON of `report`, also written to `output` when given.
pub fn emit<T: Serialize>(report: &T, output: Option<&Path>) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        fs::write(path, &json).with_context(|| format!("writing report {}", path.display()))?;
    }
    Ok(json)
}
