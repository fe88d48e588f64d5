use super::base::{delete, post_empty};
use super::researcher::ResearcherClient;
use super::user::UserClient;
use crate::errors::BridgeError;
use crate::types::{BridgeUrl, SessionToken, Username};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Header carrying the session token on every authenticated request.
pub(crate) const SESSION_HEADER: &str = "Bridge-Session";

/// An authenticated Bridge session. The role-specific clients returned by
/// [Session::researcher] and [Session::user] share its HTTP client.
#[derive(Debug)]
pub struct Session {
    client: reqwest_middleware::ClientWithMiddleware,
    url: BridgeUrl,
    username: Username,
}

pub struct SessionBuilder {
    url: BridgeUrl,
    username: Username,
    builder: reqwest_middleware::ClientBuilder,
}

impl SessionBuilder {
    pub(crate) fn new(
        url: BridgeUrl,
        username: Username,
        token: &SessionToken,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(token2header(token))
            .build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self {
            url,
            username,
            builder,
        })
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            url: self.url,
            username: self.username,
            builder: self.builder.with(middleware),
        }
    }

    pub fn build(self) -> Session {
        Session {
            client: self.builder.build(),
            url: self.url,
            username: self.username,
        }
    }
}

fn token2header(token: &SessionToken) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let mut value: HeaderValue = token.as_str().parse().unwrap();
    value.set_sensitive(true);
    headers.insert(SESSION_HEADER, value);
    headers.insert(ACCEPT, "application/json".parse().unwrap());
    headers
}

impl Session {
    /// Create a session builder from a token obtained by
    /// [crate::Account::get_session_token].
    pub fn build(
        url: BridgeUrl,
        username: Username,
        token: &SessionToken,
    ) -> Result<SessionBuilder, reqwest::Error> {
        SessionBuilder::new(url, username, token)
    }

    pub fn url(&self) -> &BridgeUrl {
        &self.url
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Client for researcher operations: survey authoring, schedule plans,
    /// study configuration. The server rejects calls made by accounts
    /// without the researcher role.
    pub fn researcher(&self) -> ResearcherClient {
        ResearcherClient::new(self.client.clone(), self.url.clone())
    }

    /// Client for participant operations.
    pub fn user(&self) -> UserClient {
        UserClient::new(self.client.clone(), self.url.clone())
    }

    /// Invalidate the session token on the server.
    pub async fn sign_out(&self) -> Result<(), BridgeError> {
        post_empty(&self.client, format!("{}auth/signOut", &self.url)).await
    }

    /// Delete the signed-in account. Only allowed for test accounts;
    /// deleting the account also revokes its sessions.
    pub async fn delete_self(self) -> Result<(), BridgeError> {
        delete(&self.client, format!("{}users/self", &self.url)).await
    }
}
