use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Indexed collection of a [`Scene`](crate::scene::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Lights,
    Objects,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Lights => f.write_str("lights"),
            Collection::Objects => f.write_str("objects"),
        }
    }
}

/// Structural failures raised while a tick animator touches the scene.
///
/// These are never transient: the scene simply does not have the shape the
/// animator needs, so the driver stops the run instead of retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("{collection}[{index}] is out of bounds (len {len})")]
    OutOfBounds {
        collection: Collection,
        index: usize,
        len: usize,
    },

    #[error("objects[{index}] has no radius")]
    NotRadial { index: usize },
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scene description")]
    Parse(#[from] serde_json::Error),

    #[error("image size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("invalid animation settings: {0}")]
    InvalidAnimation(String),
}
