//! Client for researcher-facing survey, schedule plan, and study APIs.

use super::base::{
    delete, get_json, post_empty, post_for, post_json, survey_path, BaseBridgeClient,
};
use crate::errors::BridgeError;
use crate::models::{
    GuidVersionHolder, GuidVersionedOnHolder, ResourceList, SchedulePlan, Study, Survey,
    VersionHolder,
};
use crate::types::{BridgeUrl, Guid};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use time::OffsetDateTime;

/// Bridge researcher client. Each method issues exactly one HTTP request
/// and deserializes the response; there is no retry, batching, or caching.
#[derive(Debug)]
pub struct ResearcherClient {
    client: ClientWithMiddleware,
    url: BridgeUrl,
}

impl ResearcherClient {
    pub(crate) fn new(client: ClientWithMiddleware, url: BridgeUrl) -> Self {
        Self { client, url }
    }

    // --------------------------------------------------------------------
    // Surveys
    // --------------------------------------------------------------------

    /// Create a new survey. The returned holder carries the identifiers the
    /// server assigned to this first version.
    pub async fn create_survey(
        &self,
        survey: &Survey,
    ) -> Result<GuidVersionedOnHolder, BridgeError> {
        post_json(&self.client, format!("{}surveys", &self.url), survey).await
    }

    /// Update a survey version in place. The survey must have been fetched
    /// from the server, so that it carries its own identifiers.
    pub async fn update_survey(
        &self,
        survey: &Survey,
    ) -> Result<GuidVersionedOnHolder, BridgeError> {
        let guid = survey
            .guid
            .as_ref()
            .ok_or(BridgeError::MissingIdentifier("survey.guid"))?;
        let versioned_on = survey
            .versioned_on
            .ok_or(BridgeError::MissingIdentifier("survey.versionedOn"))?;
        let url = survey_path(&self.url, guid, versioned_on);
        post_json(&self.client, url, survey).await
    }

    /// Create a new version of a survey. The new version starts out
    /// unpublished, with a fresh `versionedOn` under the same guid.
    pub async fn version_survey(
        &self,
        guid: &Guid,
        versioned_on: OffsetDateTime,
    ) -> Result<GuidVersionedOnHolder, BridgeError> {
        let url = format!("{}/version", survey_path(&self.url, guid, versioned_on));
        post_for(&self.client, url).await
    }

    /// Publish a survey version, making it visible to participants.
    /// Publication is terminal for that version.
    pub async fn publish_survey(
        &self,
        guid: &Guid,
        versioned_on: OffsetDateTime,
    ) -> Result<(), BridgeError> {
        let url = format!("{}/publish", survey_path(&self.url, guid, versioned_on));
        post_empty(&self.client, url).await
    }

    /// Close a survey version, withdrawing it from participants.
    pub async fn close_survey(
        &self,
        guid: &Guid,
        versioned_on: OffsetDateTime,
    ) -> Result<(), BridgeError> {
        let url = format!("{}/close", survey_path(&self.url, guid, versioned_on));
        post_empty(&self.client, url).await
    }

    /// Physically delete a survey version. The server only allows this for
    /// closed versions.
    pub async fn delete_survey(
        &self,
        guid: &Guid,
        versioned_on: OffsetDateTime,
    ) -> Result<(), BridgeError> {
        delete(&self.client, survey_path(&self.url, guid, versioned_on)).await
    }

    /// All versions of one survey, most recent first.
    pub async fn get_all_versions_of_a_survey(
        &self,
        guid: &Guid,
    ) -> Result<Vec<Survey>, BridgeError> {
        let url = format!("{}surveys/{}/versions", &self.url, guid);
        let list: ResourceList<Survey> = get_json(&self.client, url).await?;
        Ok(list.items)
    }

    /// Every version of every survey in the caller's study.
    pub async fn get_all_versions_of_all_surveys(&self) -> Result<Vec<Survey>, BridgeError> {
        let url = format!("{}surveys", &self.url);
        let list: ResourceList<Survey> = get_json(&self.client, url).await?;
        Ok(list.items)
    }

    /// The most recent version of each survey, published or not.
    pub async fn get_recent_versions_of_all_surveys(&self) -> Result<Vec<Survey>, BridgeError> {
        let url = format!("{}surveys/recent", &self.url);
        let list: ResourceList<Survey> = get_json(&self.client, url).await?;
        Ok(list.items)
    }

    /// The most recently published version of each survey.
    pub async fn get_published_versions_of_all_surveys(&self) -> Result<Vec<Survey>, BridgeError> {
        let url = format!("{}surveys/published", &self.url);
        let list: ResourceList<Survey> = get_json(&self.client, url).await?;
        Ok(list.items)
    }

    // --------------------------------------------------------------------
    // Schedule plans
    // --------------------------------------------------------------------

    pub async fn create_schedule_plan(
        &self,
        plan: &SchedulePlan,
    ) -> Result<GuidVersionHolder, BridgeError> {
        post_json(&self.client, format!("{}scheduleplans", &self.url), plan).await
    }

    pub async fn get_schedule_plans(&self) -> Result<Vec<SchedulePlan>, BridgeError> {
        let url = format!("{}scheduleplans", &self.url);
        let list: ResourceList<SchedulePlan> = get_json(&self.client, url).await?;
        Ok(list.items)
    }

    pub async fn get_schedule_plan(&self, guid: &Guid) -> Result<SchedulePlan, BridgeError> {
        get_json(&self.client, format!("{}scheduleplans/{}", &self.url, guid)).await
    }

    /// Update a schedule plan. The plan must carry the guid and version the
    /// server assigned to it.
    pub async fn update_schedule_plan(
        &self,
        plan: &SchedulePlan,
    ) -> Result<GuidVersionHolder, BridgeError> {
        let guid = plan
            .guid
            .as_ref()
            .ok_or(BridgeError::MissingIdentifier("schedulePlan.guid"))?;
        let url = format!("{}scheduleplans/{}", &self.url, guid);
        post_json(&self.client, url, plan).await
    }

    pub async fn delete_schedule_plan(&self, guid: &Guid) -> Result<(), BridgeError> {
        delete(&self.client, format!("{}scheduleplans/{}", &self.url, guid)).await
    }

    // --------------------------------------------------------------------
    // Study configuration
    // --------------------------------------------------------------------

    /// The caller's study record, including its password policy and email
    /// templates.
    pub async fn get_study(&self) -> Result<Study, BridgeError> {
        get_json(&self.client, format!("{}studies/self", &self.url)).await
    }

    pub async fn update_study(&self, study: &Study) -> Result<VersionHolder, BridgeError> {
        post_json(&self.client, format!("{}studies/self", &self.url), study).await
    }
}

#[async_trait]
impl BaseBridgeClient for ResearcherClient {
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
