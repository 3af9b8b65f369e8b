//! Viewer options with TOML preset support.
//!
//! Trackball sensitivity, camera placement, the scale control and key
//! bindings live here. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so a file only needs the values it overrides.

mod keybindings;
mod model;
mod trackball;
mod view;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use model::ModelOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use trackball::TrackballOptions;
pub use view::ViewOptions;

use crate::error::TumbleError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag-to-rotation parameters.
    pub trackball: TrackballOptions,
    /// Camera placement and startup pose.
    pub view: ViewOptions,
    /// The scale control.
    pub model: ModelOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`TumbleError::Io`] if the file cannot be read,
    /// [`TumbleError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, TumbleError> {
        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`TumbleError::OptionsParse`] if serialization fails,
    /// [`TumbleError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TumbleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::math::Quaternion;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[model]
scale = 1.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.model.scale, 1.5);
        // Everything else should be default
        assert_eq!(opts.model.scale_max, 2.0);
        assert_eq!(opts.view.camera_distance, 8.0);
        assert_eq!(opts.trackball, TrackballOptions::default());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(KeyAction::ResetOrientation)
        );
        assert_eq!(opts.keybindings.lookup("Equal"), Some(KeyAction::ScaleUp));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
reset_orientation = "Space"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ResetOrientation)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), None);
    }

    #[test]
    fn initial_rotation_is_normalized() {
        let mut view = ViewOptions::default();
        assert!(view
            .initial_rotation()
            .approx_eq(Quaternion::new(0.5, 0.5, 0.5, 0.5), 1e-15));
        view.initial_orientation = [0.0, 0.0, 0.0, 0.0];
        assert_eq!(view.initial_rotation(), Quaternion::IDENTITY);
    }

    #[test]
    fn scale_is_clamped_to_range() {
        let model = ModelOptions::default();
        assert_eq!(model.clamp_scale(5.0), 2.0);
        assert_eq!(model.clamp_scale(0.0), 0.25);
        assert_eq!(model.clamp_scale(0.8), 0.8);
        assert_eq!(model.clamp_scale(f32::NAN), 0.25);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("tumble-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.trackball.sensitivity = 0.01;
        opts.model.scale = 0.5;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir().join("tumble-options-bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[model]\nscale = \"big\"\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, TumbleError::OptionsParse(_)));
        std::fs::remove_dir_all(&dir).unwrap();

        let missing = Options::load(&dir.join("missing.toml")).unwrap_err();
        assert!(matches!(missing, TumbleError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("trackball"));
        assert!(props.contains_key("view"));
        assert!(props.contains_key("model"));
        assert!(!props.contains_key("keybindings"));

        let model = &props["model"]["properties"];
        assert!(model.get("scale").is_some());
        assert!(model.get("scale_step").is_none());
        assert_eq!(model["scale"]["maximum"], 2.0);

        let view = &props["view"]["properties"];
        assert!(view.get("camera_distance").is_some());
        assert!(view.get("initial_orientation").is_none());
    }
}
