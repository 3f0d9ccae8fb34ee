use async_trait::async_trait;
use http::header::CONTENT_LENGTH;
use reqwest::{Client as ReqwestClient, Method, Response};
use reqwest_oauth1::{OAuthClientProvider, OAuthParameters, TokenReader, TokenResponse};
use tracing::{debug, warn};

use crate::{
    ApiError, ApiResult, AuthResult, ClientCredentials, ConfigError, ConfigResult, Endpoints,
    Secrets, TokenPair,
};

/// `oauth_callback` value selecting the out-of-band (PIN) flow.
pub const OOB_CALLBACK: &str = "oob";

/// A REST call to be signed with the user's access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the api base, e.g. `/1.1/statuses/update.json`.
    pub path: String,
    pub form: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get<P: Into<String>>(path: P) -> Self {
        ApiRequest {
            method: Method::GET,
            path: path.into(),
            form: Vec::new(),
        }
    }

    /// A `POST` with an `application/x-www-form-urlencoded` body.
    pub fn post_form<P, K, V, I>(path: P, form: I) -> Self
    where
        P: Into<String>,
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        ApiRequest {
            method: Method::POST,
            path: path.into(),
            form: form
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Body of a successful api call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub body: String,
}

/// Signing and HTTP delivery for every leg of the protocol.
#[async_trait(?Send)]
pub trait Transport {
    /// Obtains a request token for the out-of-band callback.
    async fn request_token(&self, credentials: &ClientCredentials) -> AuthResult<TokenResponse>;

    /// Exchanges the request token and the user's verifier for an access token.
    async fn access_token(
        &self,
        credentials: &ClientCredentials,
        request_token: &TokenPair,
        verifier: &str,
    ) -> AuthResult<TokenResponse>;

    /// Sends `request` signed with `secrets`. Non-success statuses are errors.
    async fn send(&self, secrets: &Secrets<'_>, request: &ApiRequest) -> ApiResult<ApiResponse>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn request_token(&self, credentials: &ClientCredentials) -> AuthResult<TokenResponse> {
        (**self).request_token(credentials).await
    }

    async fn access_token(
        &self,
        credentials: &ClientCredentials,
        request_token: &TokenPair,
        verifier: &str,
    ) -> AuthResult<TokenResponse> {
        (**self)
            .access_token(credentials, request_token, verifier)
            .await
    }

    async fn send(&self, secrets: &Secrets<'_>, request: &ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(secrets, request).await
    }
}

/// The production transport: `reqwest` with OAuth 1.0a HMAC-SHA1 signatures.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(client: ReqwestClient, endpoints: Endpoints) -> Self {
        HttpTransport { client, endpoints }
    }

    pub fn from_config(config: &crate::Config) -> ConfigResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("tweet-pin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self::new(client, config.endpoints.clone()))
    }
}

/// Token endpoints answer errors with a body that is not a token; reject those
/// before parsing.
async fn read_token(response: Response) -> AuthResult<TokenResponse> {
    let response = response.error_for_status()?;
    Ok(response.parse_oauth_token().await?)
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn request_token(&self, credentials: &ClientCredentials) -> AuthResult<TokenResponse> {
        debug!(url = %self.endpoints.request_token, "requesting request token");
        let params = OAuthParameters::new().callback(OOB_CALLBACK);
        let response = self
            .client
            .clone()
            .oauth1_with_params(credentials.clone(), params)
            .post(&self.endpoints.request_token)
            .header(CONTENT_LENGTH, "0")
            .send()
            .await?;
        read_token(response).await
    }

    async fn access_token(
        &self,
        credentials: &ClientCredentials,
        request_token: &TokenPair,
        verifier: &str,
    ) -> AuthResult<TokenResponse> {
        debug!(url = %self.endpoints.access_token, "exchanging verifier for access token");
        let secrets = Secrets::new(credentials, request_token);
        let params = OAuthParameters::new().verifier(verifier);
        let response = self
            .client
            .clone()
            .oauth1_with_params(secrets, params)
            .post(&self.endpoints.access_token)
            .header(CONTENT_LENGTH, "0")
            .send()
            .await?;
        read_token(response).await
    }

    async fn send(&self, secrets: &Secrets<'_>, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.endpoints.api_url(&request.path);
        debug!(method = %request.method, url = %url, "sending api request");
        let client = self.client.clone().oauth1(*secrets);
        let mut builder = client.request(request.method.clone(), &url);
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %url, "api request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(ApiResponse { body })
    }
}
