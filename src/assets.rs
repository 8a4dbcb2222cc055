use std::fs;
use std::path::Path;

use crate::config::{ART_HEIGHT, ART_WIDTH, PLANT_STAGES};
use crate::models::Plant;

/// What to draw in place of the plant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantArt {
    /// Text art loaded from an asset file, clipped to the art box
    Art(Vec<String>),
    /// Fallback when no asset could be found
    Label { plant: Plant, stage: u8 },
}

impl PlantArt {
    /// Lines to render, whichever variant this is
    pub fn lines(&self) -> Vec<String> {
        match self {
            PlantArt::Art(lines) => lines.clone(),
            PlantArt::Label { plant, stage } => vec![
                format!("Plant: {}", plant),
                format!("Stage: {}/{}", stage + 1, PLANT_STAGES),
            ],
        }
    }
}

/// File name of the art for a plant at a stage, e.g. `cactus_stage_2.txt`
pub fn asset_file_name(plant: Plant, stage: u8) -> String {
    format!("{}_stage_{}.txt", plant, stage)
}

/// Load the art for `plant` at `stage` from `dir`.
///
/// Falls back to the next stage's file, then to a text label.
pub fn load_plant_art(dir: &Path, plant: Plant, stage: u8) -> PlantArt {
    let primary = dir.join(asset_file_name(plant, stage));
    let alternate = dir.join(asset_file_name(plant, stage + 1));

    for path in [&primary, &alternate] {
        match read_art(path) {
            Ok(lines) => return PlantArt::Art(lines),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }
    }

    log::warn!(
        "No plant art found: {} or {}",
        display_name(&primary),
        display_name(&alternate)
    );
    PlantArt::Label { plant, stage }
}

fn read_art(path: &Path) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .take(ART_HEIGHT)
        .map(|line| line.chars().take(ART_WIDTH).collect())
        .collect())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
