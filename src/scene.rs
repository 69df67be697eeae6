//! Scene files: a site's buildings, explosive weight and standoff rules
//!
//! ```json
//! {
//!   "buildings": [{"name": "A", "coordinates": [{"x": 0, "y": 0}, ...]}],
//!   "explosive_weight": 64,
//!   "rules": {"k_factor": 4}
//! }
//! ```
//! `explosive_weight` and `rules` are optional.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_EXPLOSIVE_WEIGHT;
use crate::geometry::{Building, Point};
use crate::standoff::{validate_site, StandoffRules};

fn default_weight() -> f64 {
    DEFAULT_EXPLOSIVE_WEIGHT
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub buildings: Vec<Building>,
    #[serde(default = "default_weight")]
    pub explosive_weight: f64,
    #[serde(default)]
    pub rules: StandoffRules,
}

impl Default for Scene {
    /// Two 100x100 footprints 150 units apart, 100 kg
    fn default() -> Self {
        Self {
            buildings: vec![
                Building::new(
                    "Building A",
                    vec![
                        Point::new(50.0, 50.0),
                        Point::new(150.0, 50.0),
                        Point::new(150.0, 150.0),
                        Point::new(50.0, 150.0),
                    ],
                ),
                Building::new(
                    "Building B",
                    vec![
                        Point::new(300.0, 100.0),
                        Point::new(400.0, 100.0),
                        Point::new(400.0, 200.0),
                        Point::new(300.0, 200.0),
                    ],
                ),
            ],
            explosive_weight: DEFAULT_EXPLOSIVE_WEIGHT,
            rules: StandoffRules::default(),
        }
    }
}

impl Scene {
    /// Parse and validate a scene from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text).context("Failed to parse scene JSON")?;
        scene.validate()?;
        Ok(scene)
    }

    /// Validates the weight, the k factor, every footprint and name uniqueness.
    /// Buildings are addressed by name, so a repeated name is an error.
    pub fn validate(&self) -> Result<()> {
        validate_site(&self.buildings, self.explosive_weight, &self.rules)?;
        let mut seen = HashSet::new();
        for b in &self.buildings {
            anyhow::ensure!(seen.insert(b.name.as_str()), "duplicate building name '{}'", b.name);
        }
        Ok(())
    }
}

/// Read a scene file from disk without validating it
pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open scene file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse scene file {}", path.display()))
}

/// Load and validate a scene file from disk
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let scene = read_scene(path)?;
    scene.validate()?;
    Ok(scene)
}
