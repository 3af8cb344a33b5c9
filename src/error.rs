use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Duplicate plant detected: \"{name}\" already exists with the same type and location."
    )]
    DuplicateRecord { name: String },

    /// The write went through with every photo stripped; the in-memory records are intact.
    #[error("Storage quota exceeded: saved without photos ({dropped_photos} photo(s) not persisted)")]
    StorageQuotaExceeded { dropped_photos: usize },

    #[error("Storage capacity exceeded: payload of {size} bytes exceeds limit of {limit} bytes")]
    CapacityExceeded { size: usize, limit: usize },

    #[error("Invalid import format: {0}")]
    InvalidImportFormat(String),

    #[error(
        "No valid plants could be imported. Please check the file format and ensure plants have both type and planted date."
    )]
    NoValidRecords,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Weather error: {0}")]
    Weather(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project not initialized. Run 'garden init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, GardenError>;
