/*!
tweet-pin: tweet from the terminal, authorized with the OAuth 1.0a PIN flow.

# Overview

On start the client reads the consumer key and secret from `CREDENTIALS` in
the working directory (one per line), walks the user through the
out-of-band authorization:

1. request token from `oauth/request_token` with `oauth_callback=oob`,
2. the user opens `oauth/authenticate?oauth_token=...` (a browser is launched
   when one is available) and types the PIN back,
3. the PIN is exchanged at `oauth/access_token` for the access token,

then loops on a small menu:

```text
Type "tweet" or "show" or type "exit"
Select> show
Bob: hi
Amy: yo
```

Requests are signed with HMAC-SHA1 by [reqwest-oauth1](https://crates.io/crates/reqwest-oauth1)
on top of [reqwest](https://crates.io/crates/reqwest). Tokens live in memory
only; every run authorizes again.

# Library use

```no_run
use tweet_pin::{app, Cli, Config};

# async fn run() -> tweet_pin::Result<()> {
let config = Config::from_cli(Cli::parse_args(std::env::args_os()));
app::run(config).await
# }
```

Any error is final: the binary logs it and exits with status 1.
*/
pub mod actions;
pub mod app;
mod auth;
pub mod command;
mod config;
mod error;
pub mod logging;
mod secrets;
mod session;
mod terminal;
mod transport;
#[cfg(test)]
mod testing;

// exposed to external program
pub use actions::TimelineEntry;
pub use auth::{authorize, authorize_url, Browser, SystemBrowser};
pub use command::Command;
pub use config::{normalize_args, Cli, Config, Endpoints, DEFAULT_TIMEOUT};
pub use error::{
    ApiError, ApiResult, AuthError, AuthResult, ConfigError, ConfigResult, Error, Result,
};
pub use reqwest_oauth1::{SecretsProvider, TokenResponse};
pub use secrets::{ClientCredentials, Secrets, TokenPair, CREDENTIALS_FILE};
pub use session::{AuthorizedClient, UserSession};
pub use terminal::Terminal;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport, OOB_CALLBACK};
