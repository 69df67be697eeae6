use standoff::scene::{load_scene, Scene};
use standoff::standoff::find_site_violations;
use std::fs;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("standoff_{}_{}.json", name, std::process::id()));
        fs::write(&path, contents).expect("Failed to write scene file");
        path
    }

    #[test]
    fn test_load_scene_round_trip_from_disk() {
        let scene = Scene::default();
        let path = write_temp("default", &serde_json::to_string_pretty(&scene).unwrap());
        let loaded = load_scene(&path).expect("Failed to load scene");
        fs::remove_file(&path).ok();

        assert_eq!(loaded, scene);
        // Default pair: 150 units apart, 100 kg needs 4 * 100^(1/3) ~ 18.57
        let violations = find_site_violations(&loaded.buildings, loaded.explosive_weight, &loaded.rules).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_load_scene_reports_invalid_building() {
        let path = write_temp(
            "invalid",
            r#"{"buildings": [{"name": "Fence", "coordinates": [{"x": 0, "y": 0}, {"x": 5, "y": 0}]}],
                "explosive_weight": 10}"#,
        );
        let err = load_scene(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(format!("{:#}", err).contains("'Fence' has 2 vertices"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scene("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("Failed to open scene file"));
    }
}
