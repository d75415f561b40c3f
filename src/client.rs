//! UsageReporting client
//!
//! Issues the single GetReport exchange: a hand-rendered envelope POSTed to
//! the service, answered with a zip archive.

use crate::archive::ReportArchive;
use crate::config::Config;
use crate::envelope::{self, CONTENT_TYPE, SOAP_ACTION};
use crate::error::{Error, Result};
use crate::types::{Credentials, ReportId};
use reqwest::header;
use tracing::{debug, info, warn};

/// Client for the UsageReporting endpoint
#[derive(Clone, Debug)]
pub struct ReportClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ReportClient {
    /// Create a client for the endpoint derived from the configured host
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_endpoint(config.endpoint_url()))
    }

    /// Create a client for an explicit endpoint URL
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a report and decode the archive it arrives in
    ///
    /// The response body is read in full before decoding because the zip
    /// central directory sits at the end of the archive. The connection is
    /// released once the body has been read, on success or failure.
    pub async fn fetch_report(
        &self,
        credentials: &Credentials,
        report_id: ReportId,
    ) -> Result<ReportArchive> {
        let body = envelope::render_get_report(credentials, report_id).into_bytes();

        info!(endpoint = %self.endpoint, %report_id, "requesting report");
        debug!(body_len = body.len(), "sending GetReport envelope");

        let response = self
            .http
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header("SOAPAction", SOAP_ACTION)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%report_id, status = status.as_u16(), "GetReport failed");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        debug!(%report_id, archive_len = bytes.len(), "received report archive");

        ReportArchive::new(bytes.to_vec())
    }
}
