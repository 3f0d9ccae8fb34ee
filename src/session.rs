use tracing::debug;

use crate::{
    ApiRequest, ApiResponse, ApiResult, AuthError, AuthResult, ClientCredentials, Secrets,
    TokenPair, Transport,
};

/// Tokens gathered during authorization. Lives in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    request_token: Option<TokenPair>,
    access_token: Option<TokenPair>,
}

impl UserSession {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_request_token(&mut self, token: TokenPair) {
        self.request_token = Some(token);
    }

    /// The request token, provided its key is not empty.
    pub fn usable_request_token(&self) -> AuthResult<&TokenPair> {
        self.request_token
            .as_ref()
            .filter(|token| !token.key.is_empty())
            .ok_or(AuthError::MissingRequestToken)
    }

    pub fn set_access_token(&mut self, token: TokenPair) {
        self.access_token = Some(token);
    }

    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Client credentials plus an access token: the only way to reach the REST
/// api. Immutable once built.
#[derive(Debug)]
pub struct AuthorizedClient<T> {
    credentials: ClientCredentials,
    access_token: TokenPair,
    transport: T,
}

impl<T: Transport> AuthorizedClient<T> {
    /// Fails unless `session` holds an access token.
    pub fn new(
        credentials: ClientCredentials,
        session: UserSession,
        transport: T,
    ) -> AuthResult<Self> {
        let access_token = session.access_token.ok_or(AuthError::MissingAccessToken)?;
        Ok(AuthorizedClient {
            credentials,
            access_token,
            transport,
        })
    }

    #[cfg(test)]
    pub(crate) fn access_token(&self) -> &TokenPair {
        &self.access_token
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        debug!(path = %request.path, "authorized request");
        let secrets = Secrets::new(&self.credentials, &self.access_token);
        self.transport.send(&secrets, request).await
    }
}
