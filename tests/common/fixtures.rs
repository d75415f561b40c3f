//! Archive fixtures and a mocked UsageReporting service

use std::io::{Cursor, Write};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use report_fetch::ReportClient;
use report_fetch::config::SERVICE_PATH;
use report_fetch::envelope::SOAP_ACTION;

/// Report identifier used across the tests
pub const REPORT_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Build an in-memory zip archive from (name, contents) pairs
pub fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, zip::write::FileOptions::default())
            .expect("start zip entry");
        writer
            .write_all(contents.as_bytes())
            .expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Single-entry archive holding `contents`
pub fn report_archive(contents: &str) -> Vec<u8> {
    zip_archive(&[("UsageReport.csv", contents)])
}

/// Start a mock service answering GetReport with `response`
pub async fn mock_service(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SERVICE_PATH))
        .and(header("content-type", "text/xml; charset=utf-8"))
        .and(header("SOAPAction", SOAP_ACTION))
        .respond_with(response)
        .mount(&server)
        .await;

    server
}

/// Client pointed at the mock service over plain HTTP
pub fn client_for(server: &MockServer) -> ReportClient {
    ReportClient::with_endpoint(format!("{}{}", server.uri(), SERVICE_PATH))
}
