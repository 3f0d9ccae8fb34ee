//! Command line parsing and the endpoints the client talks to.

use std::{ffi::OsString, path::PathBuf, time::Duration};

use clap::Parser;

use crate::CREDENTIALS_FILE;

const TWITTER_API: &str = "https://api.twitter.com";

/// Default bound on a single HTTP exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Post tweets and read your home timeline from the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tweet-pin", version, about, long_about = None)]
pub struct Cli {
    /// Screen name to pre-fill on the login page.
    #[arg(long = "id", value_name = "ID", default_value = "")]
    pub id: String,
}

impl Cli {
    /// Parses `args`, also accepting the single-dash `-id` spelling.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(normalize_args(args))
    }
}

/// Rewrites `-id` and `-id=<v>` to their double-dash form so clap accepts them.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-id") => OsString::from("--id"),
            Some(s) if s.starts_with("-id=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

/// Where each leg of the protocol lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub request_token: String,
    pub authorize: String,
    pub access_token: String,
    /// Prefix for REST paths such as `/1.1/statuses/update.json`.
    pub api_base: String,
}

impl Endpoints {
    pub fn twitter() -> Self {
        Self::with_base(TWITTER_API)
    }

    /// All endpoints under `base`, laid out like the Twitter API.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Endpoints {
            request_token: format!("{}/oauth/request_token", base),
            authorize: format!("{}/oauth/authenticate", base),
            access_token: format!("{}/oauth/access_token", base),
            api_base: base.to_string(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::twitter()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials_path: PathBuf,
    pub endpoints: Endpoints,
    /// Login hint placed in the authorize url; may be empty.
    pub screen_name: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Config {
            screen_name: cli.id,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            credentials_path: PathBuf::from(CREDENTIALS_FILE),
            endpoints: Endpoints::twitter(),
            screen_name: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
