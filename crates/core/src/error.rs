#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    #[error("Country name must not be empty")]
    EmptyInput,

    #[error("Invalid content scope selector '{0}': {1}")]
    InvalidScope(String, String),
}
