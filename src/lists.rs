//! List operations.
//!
//! Thin wrappers over the v1.2 `list*` procedures, plus the bulk export.
//! Behavioral flags (double opt-in, welcome/goodbye emails, ...) come from
//! the client configuration.

use xmlrpc::Value;

use crate::client::Client;
use crate::error::Result;
use crate::export::ExportRecord;
use crate::merge::clean_merge_tags;
use crate::project::{Projected, project};

/// Client for list operations.
///
/// Access via `client.lists()`.
pub struct ListsClient {
    client: Client,
}

impl ListsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// All lists of the account (`lists`).
    pub fn all(&self) -> Result<Value> {
        self.client.call("lists", &[])
    }

    /// Merge-field definitions of a list (`listMergeVars`).
    pub fn merge_tags(&self, list_id: &str) -> Result<Value> {
        self.client.call("listMergeVars", &[list_id.into()])
    }

    /// Interest groups of a list (`listInterestGroups`).
    pub fn interest_groups(&self, list_id: &str) -> Result<Value> {
        self.client.call("listInterestGroups", &[list_id.into()])
    }

    /// Subscribes `email` to a list (`listSubscribe`).
    ///
    /// Merge tags are sanitized first; the double-opt-in, update-existing,
    /// replace-interests, and welcome-email behavior follows the client
    /// configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::collections::BTreeMap;
    /// use chimp::{Client, Value};
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-api-key-us1")?;
    ///     let merge = Value::Struct(BTreeMap::from([(
    ///         "FNAME".to_string(),
    ///         Value::from("Al"),
    ///     )]));
    ///     client.lists().subscribe("list-id", "al@example.com", &merge, "html")?;
    ///     Ok(())
    /// }
    /// ```
    pub fn subscribe(
        &self,
        list_id: &str,
        email: &str,
        merge_tags: &Value,
        email_type: &str,
    ) -> Result<Value> {
        let config = &self.client.config;
        self.client.call(
            "listSubscribe",
            &[
                list_id.into(),
                email.into(),
                clean_merge_tags(merge_tags),
                email_type.into(),
                config.double_opt_in.into(),
                config.update_existing.into(),
                config.replace_interests.into(),
                config.send_welcome.into(),
            ],
        )
    }

    /// Removes `email` from a list (`listUnsubscribe`).
    ///
    /// `delete_member` removes the member entirely instead of marking it
    /// unsubscribed. Goodbye and owner-notification emails follow the client
    /// configuration.
    pub fn unsubscribe(&self, list_id: &str, email: &str, delete_member: bool) -> Result<Value> {
        let config = &self.client.config;
        self.client.call(
            "listUnsubscribe",
            &[
                list_id.into(),
                email.into(),
                delete_member.into(),
                config.send_goodbye.into(),
                config.send_notify.into(),
            ],
        )
    }

    /// Updates a member's merge fields (`listUpdateMember`).
    pub fn update_member(
        &self,
        list_id: &str,
        email: &str,
        merge_tags: &Value,
        email_type: &str,
    ) -> Result<Value> {
        self.client.call(
            "listUpdateMember",
            &[
                list_id.into(),
                email.into(),
                clean_merge_tags(merge_tags),
                email_type.into(),
                self.client.config.replace_interests.into(),
            ],
        )
    }

    /// Full record of one member (`listMemberInfo`), projected for
    /// case-insensitive field lookup.
    pub fn member_info(&self, list_id: &str, email: &str) -> Result<Projected> {
        let value = self
            .client
            .call("listMemberInfo", &[list_id.into(), email.into()])?;
        Ok(project(&value))
    }

    /// Members of a list, paged (`listMembers`).
    ///
    /// `status` is one of `subscribed`, `unsubscribed`, or `cleaned`;
    /// `since` restricts to members changed after the given timestamp
    /// (`YYYY-MM-DD HH:MM:SS`).
    pub fn members(
        &self,
        list_id: &str,
        status: &str,
        since: &str,
        start: i32,
        limit: i32,
    ) -> Result<Value> {
        self.client.call(
            "listMembers",
            &[
                list_id.into(),
                status.into(),
                since.into(),
                start.into(),
                limit.into(),
            ],
        )
    }

    /// Subscribes a batch of members in one call (`listBatchSubscribe`).
    ///
    /// Each entry is a struct of merge fields including `EMAIL`.
    pub fn batch_subscribe(&self, list_id: &str, batch: &[Value]) -> Result<Value> {
        let config = &self.client.config;
        self.client.call(
            "listBatchSubscribe",
            &[
                list_id.into(),
                Value::Array(batch.to_vec()),
                config.double_opt_in.into(),
                config.update_existing.into(),
                config.replace_interests.into(),
            ],
        )
    }

    /// Unsubscribes a batch of addresses in one call (`listBatchUnsubscribe`).
    pub fn batch_unsubscribe(
        &self,
        list_id: &str,
        emails: &[&str],
        delete_members: bool,
    ) -> Result<Value> {
        let config = &self.client.config;
        let emails: Vec<Value> = emails.iter().map(|email| Value::from(*email)).collect();
        self.client.call(
            "listBatchUnsubscribe",
            &[
                list_id.into(),
                Value::Array(emails),
                delete_members.into(),
                config.send_goodbye.into(),
                config.send_notify.into(),
            ],
        )
    }

    /// Lists that `email` is subscribed to (`listsForEmail`).
    pub fn for_email(&self, email: &str) -> Result<Value> {
        self.client.call("listsForEmail", &[email.into()])
    }

    /// Bulk export of a list via the export API.
    ///
    /// See [`Client::export_list`].
    pub fn export(&self, list_id: &str, status: Option<&str>) -> Result<Vec<ExportRecord>> {
        self.client.export_list(list_id, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_client_creation() {
        let client = Client::new("abc-us1").unwrap();
        let _lists = client.lists();
    }
}
