use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::{Plane, Sphere};
use crate::error::{AnimationError, Collection, SceneError};

/// Point light position
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Light {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

/// Renderable scene object
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    pub fn color(&self) -> u32 {
        match self {
            SceneObject::Sphere(s) => s.color,
            SceneObject::Plane(p) => p.color,
        }
    }

    /// Mutable radius, `None` for shapes without one
    pub fn radius_mut(&mut self) -> Option<&mut f64> {
        match self {
            SceneObject::Sphere(s) => Some(&mut s.radius),
            SceneObject::Plane(_) => None,
        }
    }

    pub fn radius(&self) -> Option<f64> {
        match self {
            SceneObject::Sphere(s) => Some(s.radius),
            SceneObject::Plane(_) => None,
        }
    }

    pub fn intersect(&self, ray_origin: DVec3, ray_dir: DVec3) -> Option<f64> {
        match self {
            SceneObject::Sphere(s) => s.intersect(ray_origin, ray_dir),
            SceneObject::Plane(p) => p.intersect(ray_origin, ray_dir),
        }
    }

    /// Surface normal at `point`, oriented towards the incoming ray
    pub fn normal_at(&self, point: DVec3, ray_dir: DVec3) -> DVec3 {
        match self {
            SceneObject::Sphere(s) => s.normal_at(point),
            SceneObject::Plane(p) => p.normal_facing(ray_dir),
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl From<Plane> for SceneObject {
    fn from(plane: Plane) -> Self {
        SceneObject::Plane(plane)
    }
}

/// Which tick animator drives the scene
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimatorKind {
    /// Moves `lights[0]` diagonally, reversing at the midpoint
    LightDrift,
    /// Light drift plus growing/shrinking `objects[2]`
    LightDriftPulse,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub animator: AnimatorKind,
    pub ticks: u32,
    /// Total animation length in milliseconds
    #[serde(default)]
    pub duration: u32,
    #[serde(rename = "loop", default)]
    pub looping: bool,
}

/// Upper bound on animation length; every tick keeps a rendered frame in memory
pub const MAX_TICKS: u32 = 10_000;

fn default_fov() -> f64 {
    60.0
}

/// Full scene description: render settings plus the animatable entities
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub filename: PathBuf,
    pub camera: DVec3,
    pub look_at: DVec3,
    /// Horizontal field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f64,
    #[serde(default)]
    pub background: u32,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub animation: Option<AnimationSettings>,
}

impl Scene {
    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read scene file {:?} ({} bytes)", path, source.len());
        Self::from_json(&source)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(animation) = &self.animation {
            if animation.ticks == 0 {
                return Err(SceneError::InvalidAnimation("ticks must be positive".into()));
            }
            if animation.ticks > MAX_TICKS {
                return Err(SceneError::InvalidAnimation(format!(
                    "ticks must be at most {}, got {}",
                    MAX_TICKS, animation.ticks
                )));
            }
        }
        Ok(())
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the animation GIF goes: the scene filename with `.gif` appended
    pub fn animation_path(&self) -> PathBuf {
        let mut name = self.filename.clone().into_os_string();
        name.push(".gif");
        PathBuf::from(name)
    }

    pub fn light_mut(&mut self, index: usize) -> Result<&mut Light, AnimationError> {
        let len = self.lights.len();
        self.lights.get_mut(index).ok_or(AnimationError::OutOfBounds {
            collection: Collection::Lights,
            index,
            len,
        })
    }

    pub fn object_mut(&mut self, index: usize) -> Result<&mut SceneObject, AnimationError> {
        let len = self.objects.len();
        self.objects.get_mut(index).ok_or(AnimationError::OutOfBounds {
            collection: Collection::Objects,
            index,
            len,
        })
    }

    /// Radius of `objects[index]`, failing if missing or not radial
    pub fn radius_mut(&mut self, index: usize) -> Result<&mut f64, AnimationError> {
        self.object_mut(index)?
            .radius_mut()
            .ok_or(AnimationError::NotRadial { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_JSON: &str = r#"{
        "width": 32, "height": 24, "filename": "out/test.png",
        "camera": [0, 0, -5], "look_at": [0, 0, 0],
        "lights": [{ "x": -3, "y": 4, "z": -4 }],
        "objects": [
            { "type": "sphere", "center": [0, 0, 0], "radius": 1, "color": 16711680 },
            { "type": "plane", "point": [0, -1, 0], "normal": [0, 1, 0], "color": 8421504 }
        ],
        "animation": { "animator": "light-drift", "ticks": 20, "duration": 2000, "loop": true }
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_json(SCENE_JSON).unwrap();
        assert_eq!(scene.width, 32);
        assert_eq!(scene.fov, 60.0);
        assert_eq!(scene.lights[0], Light::new(-3.0, 4.0, -4.0));
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[0].radius(), Some(1.0));
        assert_eq!(scene.objects[1].color(), 0x808080);

        let animation = scene.animation.unwrap();
        assert_eq!(animation.animator, AnimatorKind::LightDrift);
        assert_eq!(animation.ticks, 20);
        assert!(animation.looping);
    }

    #[test]
    fn test_json_round_trip_keeps_loop_key() {
        let scene = Scene::from_json(SCENE_JSON).unwrap();
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"loop\": true"));
        assert_eq!(Scene::from_json(&json).unwrap(), scene);
    }

    #[test]
    fn test_rejects_zero_ticks() {
        let json = SCENE_JSON.replace("\"ticks\": 20", "\"ticks\": 0");
        assert!(matches!(
            Scene::from_json(&json),
            Err(SceneError::InvalidAnimation(_))
        ));
    }

    #[test]
    fn test_rejects_huge_ticks() {
        let json = SCENE_JSON.replace("\"ticks\": 20", "\"ticks\": 4000000000");
        match Scene::from_json(&json) {
            Err(SceneError::InvalidAnimation(message)) => assert!(message.contains("4000000000")),
            other => panic!("expected invalid animation, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_max_ticks() {
        let json = SCENE_JSON.replace("\"ticks\": 20", &format!("\"ticks\": {}", MAX_TICKS));
        assert!(Scene::from_json(&json).is_ok());
    }

    #[test]
    fn test_rejects_zero_width() {
        let json = SCENE_JSON.replace("\"width\": 32", "\"width\": 0");
        assert!(matches!(
            Scene::from_json(&json),
            Err(SceneError::InvalidSize { width: 0, height: 24 })
        ));
    }

    #[test]
    fn test_animation_path_appends_gif() {
        let scene = Scene::from_json(SCENE_JSON).unwrap();
        assert_eq!(scene.animation_path(), PathBuf::from("out/test.png.gif"));
    }

    #[test]
    fn test_radius_of_plane_is_not_radial() {
        let mut scene = Scene::from_json(SCENE_JSON).unwrap();
        assert_eq!(scene.radius_mut(1), Err(AnimationError::NotRadial { index: 1 }));
    }

    #[test]
    fn test_object_out_of_bounds() {
        let mut scene = Scene::from_json(SCENE_JSON).unwrap();
        assert_eq!(
            scene.object_mut(2).unwrap_err(),
            AnimationError::OutOfBounds {
                collection: Collection::Objects,
                index: 2,
                len: 2,
            }
        );
    }
}
