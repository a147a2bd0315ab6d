use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptkitError {
    #[error("Missing environment variable: {key}")]
    MissingEnvError { key: String },
}

pub type Result<T> = std::result::Result<T, OptkitError>;
