use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuntError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, HuntError>;
