//! Scene description files.
//!
//! A scene on disk is a small JSON document:
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1, "color": [0.8, 0.3, 0.2], "roughness": 0.2 }
//!   ],
//!   "planes": [
//!     { "normal": [0, 1, 0], "offset": -1, "color": [0.8, 0.8, 0.8], "roughness": 0.9 }
//!   ]
//! }
//! ```
//!
//! Descriptions are validated before any primitive is constructed, so bad
//! input surfaces as a [`SceneError`] instead of a panic.

use std::fs;
use std::path::Path;

use ember_math::Vec3;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Plane, Scene, Sphere};

/// Errors that can occur while loading or validating a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{primitive}: radius must be positive and finite, got {radius}")]
    InvalidRadius { primitive: String, radius: f32 },

    #[error("{primitive}: roughness must be in [0, 1), got {roughness}")]
    InvalidRoughness { primitive: String, roughness: f32 },

    #[error("{primitive}: normal must be non-zero")]
    ZeroNormal { primitive: String },

    #[error("{primitive}: color channels must be in [0, 1], got {color:?}")]
    ColorOutOfRange { primitive: String, color: [f32; 3] },

    #[error("Scene contains no primitives")]
    Empty,
}

/// Result type for scene description operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub roughness: f32,
}

/// A plane as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneDescription {
    pub normal: [f32; 3],
    pub offset: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub roughness: f32,
}

/// Serializable form of a [`Scene`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub spheres: Vec<SphereDescription>,
    pub planes: Vec<PlaneDescription>,
}

impl SceneDescription {
    /// Description of [`Scene::reference`].
    pub fn reference() -> Self {
        Self {
            spheres: vec![SphereDescription {
                center: [0.0, 0.0, 0.0],
                radius: 1.0,
                color: [0.8, 0.3, 0.2],
                roughness: 0.2,
            }],
            planes: vec![PlaneDescription {
                normal: [0.0, 1.0, 0.0],
                offset: -1.0,
                color: [0.8, 0.8, 0.8],
                roughness: 0.9,
            }],
        }
    }

    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        debug!("Loading scene description from {}", path.display());

        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every primitive against the geometry invariants.
    pub fn validate(&self) -> SceneResult<()> {
        if self.spheres.is_empty() && self.planes.is_empty() {
            return Err(SceneError::Empty);
        }

        for (i, sphere) in self.spheres.iter().enumerate() {
            let primitive = format!("sphere {i}");
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    primitive,
                    radius: sphere.radius,
                });
            }
            check_surface(&primitive, sphere.color, sphere.roughness)?;
        }

        for (i, plane) in self.planes.iter().enumerate() {
            let primitive = format!("plane {i}");
            if Vec3::from(plane.normal) == Vec3::ZERO {
                return Err(SceneError::ZeroNormal { primitive });
            }
            check_surface(&primitive, plane.color, plane.roughness)?;
        }

        Ok(())
    }

    /// Validate and build the scene: spheres first, then planes, each in
    /// file order.
    pub fn build(&self) -> SceneResult<Scene> {
        self.validate()?;

        let mut scene = Scene::new();
        for sphere in &self.spheres {
            scene.add(Sphere::new(
                Vec3::from(sphere.center),
                sphere.radius,
                Color::from(sphere.color),
                sphere.roughness,
            ));
        }
        for (i, plane) in self.planes.iter().enumerate() {
            let normal = Vec3::from(plane.normal);
            if (normal.length() - 1.0).abs() > 1e-3 {
                warn!(
                    "plane {i}: normal {normal} is not unit length; offset is scaled by {}",
                    normal.length()
                );
            }
            scene.add(Plane::new(
                normal,
                plane.offset,
                Color::from(plane.color),
                plane.roughness,
            ));
        }

        debug!(
            "Built scene with {} spheres and {} planes",
            self.spheres.len(),
            self.planes.len()
        );
        Ok(scene)
    }
}

fn check_surface(primitive: &str, color: [f32; 3], roughness: f32) -> SceneResult<()> {
    if !(0.0..1.0).contains(&roughness) {
        return Err(SceneError::InvalidRoughness {
            primitive: primitive.to_string(),
            roughness,
        });
    }
    if !color.iter().all(|c| (0.0..=1.0).contains(c)) {
        return Err(SceneError::ColorOutOfRange {
            primitive: primitive.to_string(),
            color,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_matches_scene() {
        let built = SceneDescription::reference().build().unwrap();
        assert_eq!(built, Scene::reference());
    }

    #[test]
    fn test_json_round_trip() {
        let description = SceneDescription::reference();
        let json = description.to_json().unwrap();
        assert_eq!(SceneDescription::from_json(&json).unwrap(), description);
    }

    #[test]
    fn test_roughness_defaults_to_mirror() {
        let json = r#"{ "spheres": [ { "center": [0, 0, 2], "radius": 0.5, "color": [1, 1, 1] } ] }"#;
        let description = SceneDescription::from_json(json).unwrap();

        assert_eq!(description.spheres[0].roughness, 0.0);
        assert!(description.planes.is_empty());
        assert_eq!(description.build().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_scene_rejected() {
        let err = SceneDescription::from_json("{}").unwrap().build().unwrap_err();
        assert!(matches!(err, SceneError::Empty));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let mut description = SceneDescription::reference();
        description.spheres[0].radius = -1.0;

        let err = description.build().unwrap_err();
        assert!(matches!(err, SceneError::InvalidRadius { .. }));
        assert!(err.to_string().contains("sphere 0"));
    }

    #[test]
    fn test_roughness_one_rejected() {
        let mut description = SceneDescription::reference();
        description.planes[0].roughness = 1.0;

        let err = description.build().unwrap_err();
        assert!(matches!(err, SceneError::InvalidRoughness { .. }));
        assert!(err.to_string().contains("plane 0"));
    }

    #[test]
    fn test_zero_normal_rejected() {
        let mut description = SceneDescription::reference();
        description.planes[0].normal = [0.0, 0.0, 0.0];

        assert!(matches!(
            description.build().unwrap_err(),
            SceneError::ZeroNormal { .. }
        ));
    }

    #[test]
    fn test_color_out_of_range_rejected() {
        let mut description = SceneDescription::reference();
        description.spheres[0].color = [1.5, 0.0, 0.0];

        assert!(matches!(
            description.build().unwrap_err(),
            SceneError::ColorOutOfRange { .. }
        ));
    }

    #[test]
    fn test_non_unit_normal_still_builds() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut description = SceneDescription::reference();
        description.planes[0].normal = [0.0, 2.0, 0.0];

        let scene = description.build().unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let err = SceneDescription::from_json("{ spheres: ").unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SceneDescription::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
