use thiserror::Error;

/// Top-level error type for house generation.
#[derive(Debug, Error)]
pub enum HejausError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors found while validating a house description.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("{what} needs at least 3 points, got {count}")]
    TooFewPoints { what: &'static str, count: usize },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("{what} must be a finite number")]
    NonFinite { what: &'static str },

    #[error("wall start and end points coincide")]
    ZeroLengthWall,

    #[error("{kind} spans [{start}, {end}] which leaves the wall length [0, {wall_length}]")]
    OpeningOutOfBounds {
        kind: &'static str,
        start: f64,
        end: f64,
        wall_length: f64,
    },

    #[error("{kind} reaches height {top} above the wall height {wall_height}")]
    OpeningTooTall {
        kind: &'static str,
        top: f64,
        wall_height: f64,
    },

    #[error("wall {index} in {context} is invalid: {source}")]
    InvalidWall {
        index: usize,
        context: &'static str,
        #[source]
        source: Box<SpecError>,
    },

    #[error("openings target wall {index} but the house has {count} walls")]
    WallIndexOutOfRange { index: usize, count: usize },

    #[error("unknown house part: {0:?}")]
    UnknownPart(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to scene graph manipulation.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene node not found")]
    NodeNotFound,

    #[error("node {0:?} already has a parent")]
    AlreadyAttached(String),

    #[error("attaching {0:?} would create a cycle")]
    Cycle(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`HejausError`].
pub type Result<T> = std::result::Result<T, HejausError>;
