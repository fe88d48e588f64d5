use crate::errors::{check, BridgeError};
use crate::models::Survey;
use crate::types::{BridgeUrl, Guid};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use serde::Serialize;
use time::OffsetDateTime;

/// APIs available to every signed-in account, regardless of role.
#[async_trait]
pub trait BaseBridgeClient {
    /// Get the Bridge API URL.
    fn url(&self) -> &BridgeUrl;

    /// Get a survey by its composite identifier. For participants the
    /// server only resolves published versions.
    async fn get_survey(
        &self,
        guid: &Guid,
        versioned_on: OffsetDateTime,
    ) -> Result<Survey, BridgeError>;
}

/// Surveys are addressed in URL paths by guid plus versionedOn as epoch
/// milliseconds. Payloads carry versionedOn as RFC 3339.
pub(crate) fn survey_path(url: &BridgeUrl, guid: &Guid, versioned_on: OffsetDateTime) -> String {
    format!("{}surveys/{}/{}", url, guid, millis(versioned_on))
}

pub(crate) fn millis(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &ClientWithMiddleware,
    url: String,
) -> Result<T, BridgeError> {
    let res = client.get(url).send().await?;
    let data = check(res).await?.json().await?;
    Ok(data)
}

pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
    client: &ClientWithMiddleware,
    url: String,
    body: &B,
) -> Result<T, BridgeError> {
    let res = client.post(url).json(body).send().await?;
    let data = check(res).await?.json().await?;
    Ok(data)
}

/// POST without a request body, for lifecycle transitions that return a
/// holder (e.g. versioning a survey).
pub(crate) async fn post_for<T: DeserializeOwned>(
    client: &ClientWithMiddleware,
    url: String,
) -> Result<T, BridgeError> {
    let res = client.post(url).send().await?;
    let data = check(res).await?.json().await?;
    Ok(data)
}

/// POST without a request body, discarding the response.
pub(crate) async fn post_empty(
    client: &ClientWithMiddleware,
    url: String,
) -> Result<(), BridgeError> {
    let res = client.post(url).send().await?;
    check(res).await?;
    Ok(())
}

pub(crate) async fn delete(client: &ClientWithMiddleware, url: String) -> Result<(), BridgeError> {
    let res = client.delete(url).send().await?;
    check(res).await?;
    Ok(())
}
