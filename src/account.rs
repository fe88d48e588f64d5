//! Predecessors to [Session] for signing in to or creating Bridge accounts.

use crate::errors::{check, BridgeError};
use crate::types::{BridgeUrl, Role, SessionToken, StudyIdentifier, Username};
use crate::Session;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    session_token: SessionToken,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    study: &'a StudyIdentifier,
    username: &'a Username,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    study: &'a StudyIdentifier,
    username: &'a Username,
    password: &'a str,
    email: &'a str,
    roles: &'a [Role],
    consent: bool,
}

/// Bridge study, username and password struct.
/// [Account] is a builder for [Session].
pub struct Account {
    pub client: reqwest::Client,
    pub url: BridgeUrl,
    pub study: StudyIdentifier,
    pub username: Username,
    pub password: String,
}

impl Account {
    pub fn new(
        url: BridgeUrl,
        study: StudyIdentifier,
        username: Username,
        password: String,
    ) -> Self {
        Self {
            client: Default::default(),
            url,
            study,
            username,
            password,
        }
    }

    /// Create the account on the server. Test servers accept roles and
    /// pre-consent here; production servers require email verification
    /// before the account can sign in.
    pub async fn sign_up(&self, email: &str, roles: &[Role]) -> Result<(), BridgeError> {
        let url = format!("{}auth/signUp", &self.url);
        let req = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SignUpRequest {
                study: &self.study,
                username: &self.username,
                password: &self.password,
                email,
                roles,
                consent: true,
            });
        let res = req.send().await?;
        check(res).await?;
        Ok(())
    }

    pub async fn get_session_token(&self) -> Result<SessionToken, BridgeError> {
        let url = format!("{}auth/signIn", &self.url);
        let req = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SignInRequest {
                study: &self.study,
                username: &self.username,
                password: &self.password,
            });
        let res = req.send().await?;
        let data: SignInResponse = check(res).await?.json().await?;
        Ok(data.session_token)
    }

    /// Sign in and build an authenticated [Session].
    pub async fn into_session(self) -> Result<Session, BridgeError> {
        let token = self.get_session_token().await?;
        Ok(Session::build(self.url, self.username, &token)?.build())
    }
}
