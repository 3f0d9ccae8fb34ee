//! Test doubles for the transport and browser seams.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

use async_trait::async_trait;
use reqwest_oauth1::SecretsProvider;

use crate::{
    ApiRequest, ApiResponse, ApiResult, AuthResult, Browser, ClientCredentials, Secrets,
    TokenPair, TokenResponse, Transport,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    RequestToken,
    AccessToken {
        request_token: String,
        verifier: String,
    },
    Send(TokenPair, ApiRequest),
}

/// Answers every leg from canned values and records what was asked.
#[derive(Debug)]
pub(crate) struct RecordingTransport {
    request_token: TokenPair,
    access_token: TokenPair,
    bodies: RefCell<VecDeque<String>>,
    calls: RefCell<Vec<Call>>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        RecordingTransport {
            request_token: TokenPair::new("rtk", "rts"),
            access_token: TokenPair::new("atk", "ats"),
            bodies: RefCell::default(),
            calls: RefCell::default(),
        }
    }
}

impl RecordingTransport {
    pub(crate) fn with_request_token(mut self, token: TokenPair) -> Self {
        self.request_token = token;
        self
    }

    /// Queues a body for the next `send`; an empty queue answers `[]`.
    pub(crate) fn with_body(self, body: &str) -> Self {
        self.bodies.borrow_mut().push_back(body.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn sent(&self) -> Vec<(TokenPair, ApiRequest)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Send(token, request) => Some((token.clone(), request.clone())),
                _ => None,
            })
            .collect()
    }

    fn respond(token: &TokenPair) -> TokenResponse {
        TokenResponse {
            oauth_token: token.key.clone(),
            oauth_token_secret: token.secret.clone(),
            remain: HashMap::new(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn request_token(&self, _credentials: &ClientCredentials) -> AuthResult<TokenResponse> {
        self.calls.borrow_mut().push(Call::RequestToken);
        Ok(Self::respond(&self.request_token))
    }

    async fn access_token(
        &self,
        _credentials: &ClientCredentials,
        request_token: &TokenPair,
        verifier: &str,
    ) -> AuthResult<TokenResponse> {
        self.calls.borrow_mut().push(Call::AccessToken {
            request_token: request_token.key.clone(),
            verifier: verifier.to_string(),
        });
        Ok(Self::respond(&self.access_token))
    }

    async fn send(&self, secrets: &Secrets<'_>, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let token = match secrets.get_token_pair_option() {
            Some((key, secret)) => TokenPair::new(key, secret),
            None => TokenPair::new("", ""),
        };
        self.calls
            .borrow_mut()
            .push(Call::Send(token, request.clone()));
        let body = self
            .bodies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| "[]".to_string());
        Ok(ApiResponse { body })
    }
}

/// Remembers the urls it was asked to open.
#[derive(Debug, Default)]
pub(crate) struct StubBrowser {
    pub(crate) available: bool,
    pub(crate) opened: RefCell<Vec<String>>,
}

impl Browser for StubBrowser {
    fn try_open(&self, url: &str) -> bool {
        self.opened.borrow_mut().push(url.to_string());
        self.available
    }
}
