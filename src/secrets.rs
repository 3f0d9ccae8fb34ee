use std::{
    fs,
    path::{Path, PathBuf},
};

use reqwest_oauth1::{SecretsProvider, TokenResponse};
use tracing::debug;

use crate::{ConfigError, ConfigResult};

/// Conventional name of the credential file, looked up in the working directory.
pub const CREDENTIALS_FILE: &str = "CREDENTIALS";

/// Consumer key and secret identifying this application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    consumer_key: String,
    consumer_secret: String,
}

impl ClientCredentials {
    pub fn new<TKey, TSecret>(consumer_key: TKey, consumer_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        ClientCredentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Reads the credential file at `path`.
    ///
    /// The first line is the consumer key and the second the consumer secret.
    /// Anything after the second line is ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let credentials = Self::parse(&content, path)?;
        debug!(path = %path.display(), "loaded client credentials");
        Ok(credentials)
    }

    fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        let mut lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line));
        // "".split('\n') still yields one (empty) item, which is not a key.
        let key = lines.next().filter(|_| !content.is_empty());
        match (key, lines.next()) {
            (Some(key), Some(secret)) => Ok(ClientCredentials::new(key, secret)),
            (key, _) => Err(ConfigError::MissingLine {
                path: PathBuf::from(path),
                found: key.map_or(0, |_| 1),
            }),
        }
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}

impl SecretsProvider for ClientCredentials {
    fn get_consumer_key_pair(&self) -> (&str, &str) {
        (&self.consumer_key, &self.consumer_secret)
    }

    fn get_token_pair_option(&self) -> Option<(&str, &str)> {
        None
    }
}

/// A token and its secret, as handed out by the token endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub key: String,
    pub secret: String,
}

impl TokenPair {
    pub fn new<TKey, TSecret>(key: TKey, secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        TokenPair {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl From<&TokenResponse> for TokenPair {
    fn from(response: &TokenResponse) -> Self {
        TokenPair::new(&response.oauth_token, &response.oauth_token_secret)
    }
}

/// Client credentials combined with a token, for requests on behalf of a user.
#[derive(Debug, Clone, Copy)]
pub struct Secrets<'a> {
    credentials: &'a ClientCredentials,
    token: &'a TokenPair,
}

impl<'a> Secrets<'a> {
    pub fn new(credentials: &'a ClientCredentials, token: &'a TokenPair) -> Self {
        Secrets { credentials, token }
    }
}

impl SecretsProvider for Secrets<'_> {
    fn get_consumer_key_pair(&self) -> (&str, &str) {
        self.credentials.get_consumer_key_pair()
    }

    fn get_token_pair_option(&self) -> Option<(&str, &str)> {
        Some((&self.token.key, &self.token.secret))
    }
}
