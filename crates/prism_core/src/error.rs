//! Errors raised while building scene data.

use thiserror::Error;

/// Errors that can occur while loading or assembling scene data.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to load model {path}: {source}")]
    ModelLoad {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("No models found in {0}")]
    EmptyModel(String),

    #[error("Malformed mesh data: {0}")]
    MalformedMesh(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
