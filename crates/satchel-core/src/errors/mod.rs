pub mod config_error;
pub mod input_error;

pub use config_error::ConfigError;
pub use input_error::InputError;

/// Crate-wide error type aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum SatchelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Crate-wide result alias.
pub type SatchelResult<T> = Result<T, SatchelError>;
