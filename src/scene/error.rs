use std::path::PathBuf;

use thiserror::Error;

use super::ScenePhase;
use crate::game::map::MapError;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("{op} is not valid in the {found:?} phase")]
    Phase { op: &'static str, found: ScenePhase },
}
