use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Credential not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Wrong PIN")]
    WrongPin,

    #[error("PIN not configured. Run `pinvault pin setup` first.")]
    PinNotConfigured,

    #[error("PIN verification required")]
    PinRequired,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl VaultError {
    /// Return a typed exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::Validation(_) => 2,
            VaultError::NotFound(_) => 3,
            VaultError::Storage(_) => 1,
            VaultError::WrongPin => 4,
            VaultError::PinNotConfigured => 7,
            VaultError::PinRequired => 4,
            VaultError::Serialization(_) => 1,
            VaultError::Config(_) => 2,
            VaultError::Io(_) => 1,
            VaultError::Other(_) => 1,
        }
    }

    /// Return a string error code identifier.
    pub fn error_code(&self) -> &'static str {
        match self {
            VaultError::Validation(_) => "validation_error",
            VaultError::NotFound(_) => "not_found",
            VaultError::Storage(_) => "storage_error",
            VaultError::WrongPin => "wrong_pin",
            VaultError::PinNotConfigured => "pin_not_configured",
            VaultError::PinRequired => "pin_required",
            VaultError::Serialization(_) => "serialization_error",
            VaultError::Config(_) => "config_error",
            VaultError::Io(_) => "io_error",
            VaultError::Other(_) => "error",
        }
    }
}

/// JSON error response for --json mode.
#[derive(Serialize)]
pub struct JsonError {
    pub error: JsonErrorDetail,
}

#[derive(Serialize)]
pub struct JsonErrorDetail {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
}

impl JsonError {
    pub fn from_error(e: &VaultError) -> Self {
        Self {
            error: JsonErrorDetail {
                code: e.error_code().to_string(),
                message: e.to_string(),
                exit_code: e.exit_code(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
