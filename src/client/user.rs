//! Client for participant-facing APIs.

use super::base::{get_json, survey_path, BaseBridgeClient};
use crate::errors::BridgeError;
use crate::models::{ResourceList, Schedule, Survey};
use crate::types::{BridgeUrl, Guid};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use time::OffsetDateTime;

/// Bridge participant client. Participants can only see published surveys
/// and the schedules assigned to them.
#[derive(Debug)]
pub struct UserClient {
    client: ClientWithMiddleware,
    url: BridgeUrl,
}

impl UserClient {
    pub(crate) fn new(client: ClientWithMiddleware, url: BridgeUrl) -> Self {
        Self { client, url }
    }

    /// The schedules currently assigned to the participant, already
    /// resolved from the study's schedule plans.
    pub async fn get_schedules(&self) -> Result<Vec<Schedule>, BridgeError> {
        let url = format!("{}schedules", &self.url);
        let list: ResourceList<Schedule> = get_json(&self.client, url).await?;
        Ok(list.items)
    }
}

#[async_trait]
impl BaseBridgeClient for UserClient {
    fn url(&self) -> &BridgeUrl {
        &self.url
    }

    async fn get_survey(
        &self,
        guid: &Guid,
        versioned_on: OffsetDateTime,
    ) -> Result<Survey, BridgeError> {
        get_json(&self.client, survey_path(&self.url, guid, versioned_on)).await
    }
}
