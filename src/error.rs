use thiserror::Error;

/// Crate-wide error type for the placement core.
#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("structural violation: {0}")]
    Structural(#[from] StructuralError),

    #[error("index out of range: {0}")]
    IndexOutOfRange(#[from] IndexError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// State-construction failures: the state object is never constructed when
/// one of these fires.
#[derive(Error, Debug)]
pub enum StructuralError {
    #[error("cluster '{cluster}' has {actual} candidate lists for service index {service}, expected {expected}")]
    CandidateLengthMismatch {
        cluster: String,
        service: usize,
        expected: usize,
        actual: usize,
    },

    #[error("latency table references unknown cluster '{cluster}'")]
    UnknownLatencyCluster { cluster: String },
}

/// Bit-cube / bitset coordinate validation: signalled distinctly from logic
/// errors since `BitCube` is a public utility.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("coordinate ({x}, {y}, {z}) out of bounds for cube of size ({sx}, {sy}, {sz})")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        sx: usize,
        sy: usize,
        sz: usize,
    },
}

/// GraphML/CSV export failures, wrapped with enough context to locate the
/// failing target.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {target} to '{path}': {source}")]
    Write {
        target: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = PlacementError> = std::result::Result<T, E>;

/// Write an exported buffer (GraphML, CSV, JSON) to disk, wrapping any I/O
/// failure with the target and path it was writing.
pub fn write_export(target: &'static str, path: &std::path::Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| {
        PlacementError::Export(ExportError::Write {
            target,
            path: path.display().to_string(),
            source,
        })
    })
}
