//! Campaign operations.
//!
//! Thin wrappers over the v1.2 `campaign*` procedures.

use xmlrpc::Value;

use crate::client::Client;
use crate::error::Result;

/// Client for campaign operations.
///
/// Access via `client.campaigns()`.
pub struct CampaignsClient {
    client: Client,
}

impl CampaignsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Campaigns of the account, filtered and paged (`campaigns`).
    ///
    /// `filters` is a struct of the v1.2 filter fields (`list_id`,
    /// `status`, `title`, ...); pass an empty struct for no filtering.
    pub fn all(&self, filters: &Value, start: i32, limit: i32) -> Result<Value> {
        self.client.call(
            "campaigns",
            &[filters.clone(), start.into(), limit.into()],
        )
    }

    /// HTML and text content of a campaign (`campaignContent`).
    pub fn content(&self, campaign_id: &str, for_archive: bool) -> Result<Value> {
        self.client.call(
            "campaignContent",
            &[campaign_id.into(), for_archive.into()],
        )
    }

    /// Creates a campaign and returns its id (`campaignCreate`).
    ///
    /// `campaign_type` is one of `regular`, `plaintext`, `absplit`, `rss`,
    /// or `trans`; `options` and `content` are structs per the v1.2 API.
    pub fn create(&self, campaign_type: &str, options: &Value, content: &Value) -> Result<Value> {
        self.client.call(
            "campaignCreate",
            &[campaign_type.into(), options.clone(), content.clone()],
        )
    }

    /// Deletes a campaign (`campaignDelete`).
    pub fn delete(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignDelete", &[campaign_id.into()])
    }

    /// Pauses a sending AutoResponder or RSS campaign (`campaignPause`).
    pub fn pause(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignPause", &[campaign_id.into()])
    }

    /// Replicates a campaign and returns the new id (`campaignReplicate`).
    pub fn replicate(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignReplicate", &[campaign_id.into()])
    }

    /// Resumes a paused AutoResponder or RSS campaign (`campaignResume`).
    pub fn resume(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignResume", &[campaign_id.into()])
    }

    /// Schedules a campaign (`campaignSchedule`).
    ///
    /// `schedule_time` is a `YYYY-MM-DD HH:MM:SS` timestamp in GMT.
    pub fn schedule(&self, campaign_id: &str, schedule_time: &str) -> Result<Value> {
        self.client.call(
            "campaignSchedule",
            &[campaign_id.into(), schedule_time.into()],
        )
    }

    /// Sends a campaign immediately (`campaignSendNow`).
    pub fn send_now(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignSendNow", &[campaign_id.into()])
    }

    /// Sends a test of a campaign to the given addresses (`campaignSendTest`).
    pub fn send_test(&self, campaign_id: &str, emails: &[&str]) -> Result<Value> {
        let emails: Vec<Value> = emails.iter().map(|email| Value::from(*email)).collect();
        self.client.call(
            "campaignSendTest",
            &[campaign_id.into(), Value::Array(emails)],
        )
    }

    /// Aggregate statistics of a sent campaign (`campaignStats`).
    pub fn stats(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignStats", &[campaign_id.into()])
    }

    /// Unschedules a scheduled campaign (`campaignUnschedule`).
    pub fn unschedule(&self, campaign_id: &str) -> Result<Value> {
        self.client.call("campaignUnschedule", &[campaign_id.into()])
    }

    /// Updates one attribute of a campaign (`campaignUpdate`).
    pub fn update(&self, campaign_id: &str, name: &str, value: &Value) -> Result<Value> {
        self.client.call(
            "campaignUpdate",
            &[campaign_id.into(), name.into(), value.clone()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaigns_client_creation() {
        let client = Client::new("abc-us1").unwrap();
        let _campaigns = client.campaigns();
    }
}
