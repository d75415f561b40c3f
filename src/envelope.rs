//! GetReport request envelope
//!
//! The GetReport response is not a SOAP envelope at all (it is a raw zip
//! archive), so a WSDL-generated client cannot consume it. The request is
//! rendered by hand here and the response is decoded in [`crate::archive`].

use crate::types::{Credentials, ReportId};
use quick_xml::escape::escape;

/// Value of the `SOAPAction` header for GetReport
pub const SOAP_ACTION: &str = "http://tempuri.org/IUsageReporting/GetReport";

/// Content type of the request body
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const SERVICE_NS: &str = "http://tempuri.org/";
const DATA_CONTRACT_NS: &str =
    "http://schemas.datacontract.org/2004/07/Panopto.Server.Services.PublicAPI.V40";
const SCHEMA_INSTANCE_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Render the GetReport envelope for the given account and report
///
/// User key and password are XML-escaped before substitution.
pub fn render_get_report(credentials: &Credentials, report_id: ReportId) -> String {
    format!(
        r#"<s:Envelope xmlns:s="{SOAP_ENVELOPE_NS}">
    <s:Body>
        <GetReport xmlns="{SERVICE_NS}">
            <auth xmlns:a="{DATA_CONTRACT_NS}" xmlns:i="{SCHEMA_INSTANCE_NS}">
                <a:AuthCode i:nil="true"/>
                <a:Password>{password}</a:Password>
                <a:UserKey>{user_key}</a:UserKey>
            </auth>
            <reportId>{report_id}</reportId>
        </GetReport>
    </s:Body>
</s:Envelope>"#,
        password = escape(credentials.password()),
        user_key = escape(credentials.user_key()),
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn report_id() -> ReportId {
        "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().unwrap()
    }

    #[test]
    fn embeds_credentials_and_report_id() {
        let body = render_get_report(&Credentials::new("alice", "secret"), report_id());

        assert!(body.starts_with("<s:Envelope"));
        assert!(body.contains("<a:UserKey>alice</a:UserKey>"));
        assert!(body.contains("<a:Password>secret</a:Password>"));
        assert!(body.contains("<reportId>3fa85f64-5717-4562-b3fc-2c963f66afa6</reportId>"));
        assert!(body.contains(r#"<a:AuthCode i:nil="true"/>"#));
        assert!(body.contains(r#"<GetReport xmlns="http://tempuri.org/">"#));
    }

    #[test]
    fn password_precedes_user_key() {
        let body = render_get_report(&Credentials::new("alice", "secret"), report_id());
        let password_at = body.find("<a:Password>").unwrap();
        let user_key_at = body.find("<a:UserKey>").unwrap();
        assert!(password_at < user_key_at);
    }

    #[test]
    fn escapes_markup_in_credentials() {
        let body = render_get_report(
            &Credentials::new("a<b>&c", r#"p"w'd"#),
            report_id(),
        );

        assert!(body.contains("<a:UserKey>a&lt;b&gt;&amp;c</a:UserKey>"));
        assert!(body.contains("<a:Password>p&quot;w&apos;d</a:Password>"));
        assert!(!body.contains("a<b>"));
    }

    #[test]
    fn envelope_is_well_formed_xml() {
        let body = render_get_report(&Credentials::new("x&y", "<z>"), report_id());
        let mut reader = quick_xml::Reader::from_str(&body);
        loop {
            match reader.read_event().unwrap() {
                quick_xml::events::Event::Eof => break,
                _ => continue,
            }
        }
    }
}
