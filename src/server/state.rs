//! Server state management for the standoff server

use indexmap::IndexMap;

use crate::geometry::Building;
use crate::scene::Scene;
use crate::standoff::StandoffRules;

/// In-memory snapshot: buildings by name, weight and rules
pub struct ServerState {
    pub scene_path: Option<String>,
    /// Insertion order is the scene file's order
    pub buildings: IndexMap<String, Building>,
    pub explosive_weight: f64,
    pub rules: StandoffRules,
}

impl ServerState {
    /// Empty state; nothing can be evaluated until a scene is set
    pub fn new() -> Self {
        let defaults = Scene::default();
        Self {
            scene_path: None,
            buildings: IndexMap::new(),
            explosive_weight: defaults.explosive_weight,
            rules: defaults.rules,
        }
    }

    /// State preloaded with a scene
    pub fn with_scene(scene: Scene) -> Self {
        let mut state = Self::new();
        state.apply_scene(scene);
        state
    }

    /// Replace the whole snapshot. The scene must have validated, so names are unique.
    pub fn apply_scene(&mut self, scene: Scene) {
        self.buildings = scene
            .buildings
            .into_iter()
            .map(|b| (b.name.clone(), b))
            .collect();
        self.explosive_weight = scene.explosive_weight;
        self.rules = scene.rules;
    }

    pub fn is_scene_loaded(&self) -> bool {
        !self.buildings.is_empty()
    }

    /// Buildings in scene order
    pub fn building_list(&self) -> Vec<Building> {
        self.buildings.values().cloned().collect()
    }

    /// The first two buildings, the default evaluation pair
    pub fn default_pair(&self) -> Option<(&Building, &Building)> {
        let mut it = self.buildings.values();
        Some((it.next()?, it.next()?))
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
