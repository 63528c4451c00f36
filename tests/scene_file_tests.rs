use std::io::Write;

use ray_animator::error::SceneError;
use ray_animator::scene::{AnimatorKind, Scene, SceneObject, MAX_TICKS};
use ray_animator::scenes::create_pulse_scene;

const PULSE_SCENE: &str = r#"{
    "width": 64,
    "height": 48,
    "filename": "out/pulse.png",
    "camera": [0, 1, -6],
    "look_at": [0, 0, 0],
    "fov": 45,
    "lights": [{ "x": -3, "y": 4 }],
    "objects": [
        { "type": "sphere", "center": [-1.5, 0, 0], "radius": 0.5, "color": 255 },
        { "type": "plane", "point": [0, -1, 0], "normal": [0, 1, 0] },
        { "type": "sphere", "center": [0, 0, 0], "radius": 1 }
    ],
    "animation": { "animator": "light-drift-pulse", "ticks": 30, "duration": 3000, "loop": false }
}"#;

#[test]
fn test_load_scene_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PULSE_SCENE.as_bytes()).unwrap();

    let scene = Scene::from_path(file.path()).unwrap();

    assert_eq!((scene.width, scene.height), (64, 48));
    assert_eq!(scene.fov, 45.0);
    assert_eq!(scene.lights[0].z, 0.0);
    assert!(matches!(scene.objects[1], SceneObject::Plane(_)));
    assert_eq!(scene.objects[1].color(), 0);
    assert_eq!(scene.objects[2].radius(), Some(1.0));

    let animation = scene.animation.unwrap();
    assert_eq!(animation.animator, AnimatorKind::LightDriftPulse);
    assert!(!animation.looping);
}

#[test]
fn test_missing_file_reports_path() {
    let err = Scene::from_path("does/not/exist.json").unwrap_err();
    match err {
        SceneError::Io { path, .. } => assert_eq!(path, std::path::PathBuf::from("does/not/exist.json")),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_unknown_animator_is_parse_error() {
    let json = PULSE_SCENE.replace("light-drift-pulse", "spin");
    assert!(matches!(Scene::from_json(&json), Err(SceneError::Parse(_))));
}

#[test]
fn test_still_scene_has_no_animation() {
    let json = PULSE_SCENE.replace(
        r#""animation": { "animator": "light-drift-pulse", "ticks": 30, "duration": 3000, "loop": false }"#,
        r#""background": 1056816"#,
    );
    let scene = Scene::from_json(&json).unwrap();
    assert!(!scene.is_animated());
    assert_eq!(scene.background, 0x102030);
}

#[test]
fn test_preset_survives_json() {
    let scene = create_pulse_scene();
    let json = scene.to_json().unwrap();
    assert_eq!(Scene::from_json(&json).unwrap(), scene);
}

#[test]
fn test_huge_tick_count_is_rejected_on_load() {
    let json = PULSE_SCENE.replace("\"ticks\": 30", "\"ticks\": 4000000000");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    match Scene::from_path(file.path()) {
        Err(SceneError::InvalidAnimation(message)) => {
            assert!(message.contains(&MAX_TICKS.to_string()), "{}", message)
        }
        other => panic!("expected invalid animation, got {:?}", other),
    }
}
