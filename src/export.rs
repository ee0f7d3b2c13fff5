//! Bulk list export decoding.
//!
//! The export API streams a list as newline-delimited JSON: the first line is
//! a JSON array of column names, every following line a JSON array of row
//! values. An export can hold thousands of rows, so the body is decoded one
//! line at a time rather than parsed as a single document.

use serde::Serialize;
use tracing::debug;

use crate::client::Client;
use crate::error::Result;

/// One exported list member: column name/value pairs in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    fields: Vec<(String, serde_json::Value)>,
}

impl ExportRecord {
    /// Value of the named column, if the row carried it.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Column name/value pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Client {
    /// Downloads the members of a list via the export API.
    ///
    /// `status` filters the export (`subscribed`, `unsubscribed`, `cleaned`)
    /// and is omitted from the request when `None`. The whole record set is
    /// assembled in memory and returned in stream order.
    ///
    /// # Errors
    ///
    /// Any network, HTTP, or decode failure is reported as
    /// [`ChimpError::Communication`](crate::ChimpError::Communication); no
    /// partial records are returned.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use chimp::Client;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-api-key-us1")?;
    ///     for record in client.export_list("list-id", Some("subscribed"))? {
    ///         println!("{:?}", record.get("Email_Address"));
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn export_list(&self, list_id: &str, status: Option<&str>) -> Result<Vec<ExportRecord>> {
        let mut request = self
            .http
            .get(&self.export_url)
            .query(&[("apikey", self.config.api_key.as_str()), ("id", list_id)]);
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }

        let body = request.send()?.error_for_status()?.text()?;
        let records = parse_export(&body)?;
        debug!(list_id, records = records.len(), "decoded list export");
        Ok(records)
    }
}

/// Decodes an export body: a header line, then one record per data line.
///
/// Column names have spaces replaced by underscores. A row wider or narrower
/// than the header is paired positionally and the unmatched tail dropped,
/// matching the service's behavior. An empty body decodes to no records.
pub(crate) fn parse_export(body: &str) -> Result<Vec<ExportRecord>> {
    let mut lines = body.lines();
    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = serde_json::from_str::<Vec<String>>(header)?
        .into_iter()
        .map(|name| name.replace(' ', "_"))
        .collect();

    let mut records = Vec::new();
    for line in lines {
        let row: Vec<serde_json::Value> = serde_json::from_str(line)?;
        let fields = columns.iter().cloned().zip(row).collect();
        records.push(ExportRecord { fields });
    }
    Ok(records)
}
