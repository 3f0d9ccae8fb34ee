use std::{
    fmt,
    io::{BufRead, Write},
};

use serde::Deserialize;
use tracing::debug;

use crate::{ApiRequest, ApiResult, AuthorizedClient, Result, Terminal, Transport};

pub const STATUS_UPDATE_PATH: &str = "/1.1/statuses/update.json";
pub const HOME_TIMELINE_PATH: &str = "/1.1/statuses/home_timeline.json";

#[derive(Deserialize, Debug)]
struct Tweet {
    text: String,
    user: TweetUser,
}

#[derive(Deserialize, Debug)]
struct TweetUser {
    name: String,
}

/// One post of the home timeline, as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub author_name: String,
    pub text: String,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author_name, self.text)
    }
}

/// Parses a home timeline body, keeping the server's order.
pub fn parse_timeline(body: &str) -> ApiResult<Vec<TimelineEntry>> {
    let tweets: Vec<Tweet> = serde_json::from_str(body)?;
    Ok(tweets
        .into_iter()
        .map(|tweet| TimelineEntry {
            author_name: tweet.user.name,
            text: tweet.text,
        })
        .collect())
}

/// Asks for a status line and posts it. Prints nothing on success.
pub async fn tweet<T, R, W>(
    client: &AuthorizedClient<T>,
    terminal: &mut Terminal<R, W>,
) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let status = terminal.prompt("Tweet status> ")?;
    let request = ApiRequest::post_form(STATUS_UPDATE_PATH, vec![("status", status)]);
    client.send(&request).await?;
    debug!("status posted");
    Ok(())
}

/// Fetches the home timeline and prints `name: text` per post.
pub async fn show_timeline<T, R, W>(
    client: &AuthorizedClient<T>,
    terminal: &mut Terminal<R, W>,
) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let response = client.send(&ApiRequest::get(HOME_TIMELINE_PATH)).await?;
    let entries = parse_timeline(&response.body)?;
    debug!(count = entries.len(), "fetched home timeline");
    for entry in &entries {
        terminal.println(entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        testing::RecordingTransport, ApiError, ClientCredentials, Error, TokenPair, UserSession,
    };

    fn client(transport: RecordingTransport) -> AuthorizedClient<RecordingTransport> {
        let mut session = UserSession::new();
        session.set_access_token(TokenPair::new("atk", "ats"));
        AuthorizedClient::new(ClientCredentials::new("ck", "cs"), session, transport).unwrap()
    }

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn parse_timeline_in_order() {
        let body = r#"[
            {"id": 2, "text": "hi", "user": {"name": "Bob", "screen_name": "bob"}},
            {"id": 1, "text": "yo", "user": {"name": "Amy", "screen_name": "amy"}}
        ]"#;
        let entries = parse_timeline(body).unwrap();
        assert_eq!(
            entries,
            vec![
                TimelineEntry {
                    author_name: "Bob".to_string(),
                    text: "hi".to_string()
                },
                TimelineEntry {
                    author_name: "Amy".to_string(),
                    text: "yo".to_string()
                },
            ]
        );
        assert_eq!(entries[0].to_string(), "Bob: hi");
    }

    #[test]
    fn parse_timeline_rejects_garbage() {
        assert!(matches!(parse_timeline("{}"), Err(ApiError::Json(_))));
        assert!(matches!(
            parse_timeline(r#"[{"text": "no user"}]"#),
            Err(ApiError::Json(_))
        ));
    }

    #[tokio::test]
    async fn tweet_posts_status_form() {
        let client = client(RecordingTransport::default());
        let mut term = terminal("hello world\n");
        tweet(&client, &mut term).await.unwrap();

        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].1,
            ApiRequest::post_form(STATUS_UPDATE_PATH, vec![("status", "hello world")])
        );
        assert_eq!(term.into_output(), b"Tweet status> ".to_vec());
    }

    #[tokio::test]
    async fn tweet_cancelled_sends_nothing() {
        let client = client(RecordingTransport::default());
        let mut term = terminal("");
        let result = tweet(&client, &mut term).await;
        assert!(matches!(result, Err(Error::InputCancelled)));
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn show_timeline_prints_entries() {
        let client = client(RecordingTransport::default().with_body(
            r#"[{"text": "hi", "user": {"name": "Bob"}}, {"text": "yo", "user": {"name": "Amy"}}]"#,
        ));
        let mut term = terminal("");
        show_timeline(&client, &mut term).await.unwrap();

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output, "Bob: hi\nAmy: yo\n");
        assert_eq!(
            client.transport().sent()[0].1,
            ApiRequest::get(HOME_TIMELINE_PATH)
        );
    }

    #[tokio::test]
    async fn show_empty_timeline() {
        let client = client(RecordingTransport::default());
        let mut term = terminal("");
        show_timeline(&client, &mut term).await.unwrap();
        assert!(term.output().is_empty());
    }
}
