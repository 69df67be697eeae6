//! Option parsing for the `check_scene` tool

use anyhow::{bail, Context, Result};

use crate::scene::Scene;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckOptions {
    pub scene_path: String,
    pub weight: Option<f64>,
    pub k_factor: Option<f64>,
    pub violations_only: bool,
    pub as_json: bool,
}

impl CheckOptions {
    /// Parse `<scene.json> [--weight W] [--k K] [--violations] [--json]`
    /// from the arguments after the program name. `None` means print usage.
    pub fn parse(args: &[String]) -> Result<Option<Self>> {
        let Some(scene_path) = args.first() else {
            return Ok(None);
        };
        if scene_path.starts_with("--") {
            bail!("expected a scene file before options, got '{}'", scene_path);
        }

        let mut opts = CheckOptions {
            scene_path: scene_path.clone(),
            ..Default::default()
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--weight" => {
                    i += 1;
                    opts.weight = Some(parse_number(args.get(i), "--weight")?);
                }
                "--k" => {
                    i += 1;
                    opts.k_factor = Some(parse_number(args.get(i), "--k")?);
                }
                "--violations" => opts.violations_only = true,
                "--json" => opts.as_json = true,
                other => bail!("unknown option '{}'", other),
            }
            i += 1;
        }

        Ok(Some(opts))
    }

    /// Apply weight and K overrides to a scene; validation is left to the caller
    pub fn apply(&self, scene: &mut Scene) {
        if let Some(w) = self.weight {
            scene.explosive_weight = w;
        }
        if let Some(k) = self.k_factor {
            scene.rules.k_factor = k;
        }
    }
}

fn parse_number(value: Option<&String>, flag: &str) -> Result<f64> {
    let value = value.with_context(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .with_context(|| format!("bad value '{}' for {}", value, flag))
}
