use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type AuthResult<T> = std::result::Result<T, AuthError>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Every failure the client can hit. None of them is recoverable; the
/// binary logs the error and exits with status 1.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration failed : {0}")]
    Config(#[from] ConfigError),
    #[error("authorization failed : {0}")]
    Auth(#[from] AuthError),
    #[error("api call failed : {0}")]
    Api(#[from] ApiError),
    #[error("canceled")]
    InputCancelled,
    #[error("terminal i/o failed : {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} must contain the consumer key and secret on two lines, found {found} line(s)", .path.display())]
    MissingLine { path: PathBuf, found: usize },
    #[error("could not build http client : {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("token request failed : {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("token acquisition failed : {0}")]
    Token(#[from] reqwest_oauth1::Error),
    #[error("request token is empty, refusing to exchange the verifier")]
    MissingRequestToken,
    #[error("access token has not been acquired yet")]
    MissingAccessToken,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed : {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response : {0}")]
    Json(#[from] serde_json::Error),
}
