//! Remote page to PDF through Chromium

use url::Url;

use super::base::impl_has_request_base;
use super::chromium::impl_has_chromium_options;
use super::{
    ApiRequest, ChromiumBehaviors, Dimensions, DocumentContent, RequestBase, RequestKind, fields,
};
use crate::error::{Error, Result};
use crate::http::ApiMessage;

/// Render a page the service fetches itself. Header and footer documents
/// are optional; a body document is not accepted.
#[derive(Debug, Default)]
pub struct UrlRequest {
    pub base: RequestBase,
    pub url: Option<Url>,
    pub document: DocumentContent,
    pub dimensions: Dimensions,
    pub behaviors: ChromiumBehaviors,
}

impl_has_request_base!(UrlRequest);
impl_has_chromium_options!(UrlRequest);

impl ApiRequest for UrlRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::Url
    }

    fn validate(&self) -> Result<()> {
        let Some(url) = &self.url else {
            return Err(Error::invalid_request(RequestKind::Url, "a target url is required"));
        };
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_request(
                RequestKind::Url,
                format!("{url} is not an http or https url"),
            ));
        }
        if self.document.body.is_some() {
            return Err(Error::invalid_request(
                RequestKind::Url,
                "url conversions do not take an html body",
            ));
        }
        self.document.check_collisions(&self.base.assets)?;
        self.base.config.validate(RequestKind::Url)
    }

    fn into_message(self) -> Result<ApiMessage> {
        self.validate()?;
        let behaviors = self.behaviors.fields()?;

        let mut message = ApiMessage::new(RequestKind::Url);
        message.apply_config(&self.base.config)?;
        for (name, item) in self.document.into_parts() {
            message.push_file(name, item);
        }
        message.push_assets(self.base.assets);
        if let Some(url) = self.url {
            message.push_fields([(fields::URL, String::from(url))]);
        }
        message.push_fields(self.dimensions.fields());
        message.push_fields(behaviors);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;

    fn request(url: &str) -> UrlRequest {
        UrlRequest {
            url: Some(Url::parse(url).unwrap()),
            ..UrlRequest::default()
        }
    }

    #[test]
    fn url_is_required() {
        let err = UrlRequest::default().validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { kind: RequestKind::Url, .. }));
    }

    #[test]
    fn only_web_urls_are_accepted() {
        assert!(request("https://example.com").validate().is_ok());
        assert!(request("file:///etc/passwd").validate().is_err());
        assert!(request("ftp://example.com/a.html").validate().is_err());
    }

    #[test]
    fn body_document_is_rejected() {
        let mut request = request("https://example.com");
        request.document.body = Some(ContentItem::text("<p/>"));
        assert!(request.validate().is_err());
    }

    #[test]
    fn header_then_url_field() {
        let mut request = request("https://example.com/report");
        request.document.header = Some(ContentItem::text("<header/>"));
        request.behaviors.wait_for_expression = Some("window.done".into());

        let message = request.into_message().unwrap();
        assert_eq!(message.path(), "/forms/chromium/convert/url");
        assert_eq!(
            message.form().field_names().collect::<Vec<_>>(),
            ["header.html", "url", "waitForExpression"]
        );
    }
}
