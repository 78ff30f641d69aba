use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading a scene file and its
/// companion MTL. The renderer itself never returns this — by the time
/// `Scene` exists it is known-good (spec.md §7: "the renderer is not
/// called" on a scene-file error).
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed numeric token {token:?}")]
    BadToken {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path}:{line}: {what}")]
    Malformed {
        path: PathBuf,
        line: usize,
        what: String,
    },

    #[error("{path}:{line}: 'usemtl' references unknown material {name:?}")]
    UnknownMaterial {
        path: PathBuf,
        line: usize,
        name: String,
    },

    #[error("{path}:{line}: face or sphere precedes any 'usemtl'")]
    NoMaterialBound { path: PathBuf, line: usize },

    #[error("{path}:{line}: vertex/normal index {index} out of range")]
    IndexOutOfRange {
        path: PathBuf,
        line: usize,
        index: i64,
    },
}
