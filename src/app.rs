use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    auth, command, Browser, ClientCredentials, Config, HttpTransport, Result, SystemBrowser,
    Terminal, Transport,
};

/// Runs the client against the real terminal, browser and Twitter api.
pub async fn run(config: Config) -> Result<()> {
    let transport = HttpTransport::from_config(&config)?;
    let mut terminal = Terminal::stdio();
    run_with(&config, transport, &SystemBrowser, &mut terminal).await
}

/// Loads credentials, authorizes, then serves commands until `exit`.
///
/// Nothing touches the network before the credential file has been read.
pub async fn run_with<T, B, R, W>(
    config: &Config,
    transport: T,
    browser: &B,
    terminal: &mut Terminal<R, W>,
) -> Result<()>
where
    T: Transport,
    B: Browser + ?Sized,
    R: BufRead,
    W: Write,
{
    let credentials = ClientCredentials::load(&config.credentials_path)?;
    let client = auth::authorize(
        credentials,
        transport,
        &config.endpoints.authorize,
        &config.screen_name,
        browser,
        terminal,
    )
    .await?;
    command::run(&client, terminal).await?;
    debug!("exit requested");
    Ok(())
}
