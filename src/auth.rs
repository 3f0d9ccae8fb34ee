//! The three-legged PIN authorization flow.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    AuthorizedClient, ClientCredentials, Result, Terminal, TokenPair, TokenResponse, Transport,
    UserSession,
};

/// Opens a url for the user, if the platform lets us.
pub trait Browser {
    /// Returns whether a browser was launched.
    fn try_open(&self, url: &str) -> bool;
}

/// Hands the url to the desktop's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn try_open(&self, url: &str) -> bool {
        match open::that_detached(url) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "no browser available");
                false
            }
        }
    }
}

/// Builds the url the user visits to grant access.
///
/// `screen_name` is form-encoded and always present, even when empty.
pub fn authorize_url(authorize_base: &str, request_token: &str, screen_name: &str) -> String {
    let encode = |s: &str| url::form_urlencoded::byte_serialize(s.as_bytes()).collect::<String>();
    format!(
        "{}?oauth_token={}&force_login=true&screen_name={}",
        authorize_base,
        encode(request_token),
        encode(screen_name)
    )
}

/// Runs the PIN flow and returns a client bound to the authorizing account.
pub async fn authorize<T, B, R, W>(
    credentials: ClientCredentials,
    transport: T,
    authorize_base: &str,
    screen_name: &str,
    browser: &B,
    terminal: &mut Terminal<R, W>,
) -> Result<AuthorizedClient<T>>
where
    T: Transport,
    B: Browser + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut session = UserSession::new();

    let response = transport.request_token(&credentials).await?;
    session.set_request_token(TokenPair::from(&response));
    let request_token = session.usable_request_token()?.clone();
    debug!("acquired request token");

    let url = authorize_url(authorize_base, &request_token.key, screen_name);
    terminal.println("Open this URL and enter PIN.")?;
    terminal.println(&url)?;
    browser.try_open(&url);

    let verifier = terminal.prompt("PIN: ")?;

    let response = transport
        .access_token(&credentials, &request_token, &verifier)
        .await?;
    log_account(&response);
    session.set_access_token(TokenPair::from(&response));

    Ok(AuthorizedClient::new(credentials, session, transport)?)
}

fn log_account(response: &TokenResponse) {
    match response.remain.get("screen_name") {
        Some(name) => info!(screen_name = %name, "authorized"),
        None => info!("authorized"),
    }
}
