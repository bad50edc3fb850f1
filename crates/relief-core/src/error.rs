//! Error taxonomy for graph operations

use crate::model::{CampId, Weight};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("one or both camp numbers are invalid: {src}, {dest}")]
    InvalidEndpoint { src: CampId, dest: CampId },
    #[error("no connection exists between camp {a} and camp {b}")]
    EdgeNotFound { a: CampId, b: CampId },
    #[error("unknown camp `{0}`")]
    UnknownId(CampId),
    #[error("unknown source camp `{0}`")]
    UnknownSource(CampId),
    #[error("camp {0} cannot be connected to itself")]
    SelfLoop(CampId),
    #[error("negative cost {weight} between camp {src} and camp {dest}")]
    NegativeWeight { src: CampId, dest: CampId, weight: Weight },
}

pub type Result<T> = std::result::Result<T, GraphError>;
