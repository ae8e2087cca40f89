//! HTML to PDF through Chromium

use super::base::impl_has_request_base;
use super::chromium::impl_has_chromium_options;
use super::{ApiRequest, ChromiumBehaviors, Dimensions, DocumentContent, RequestBase, RequestKind};
use crate::error::{Error, Result};
use crate::http::ApiMessage;

/// Render an HTML document (plus optional header and footer) to PDF.
#[derive(Debug, Default)]
pub struct HtmlRequest {
    pub base: RequestBase,
    pub document: DocumentContent,
    pub dimensions: Dimensions,
    pub behaviors: ChromiumBehaviors,
}

impl_has_request_base!(HtmlRequest);
impl_has_chromium_options!(HtmlRequest);

impl ApiRequest for HtmlRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::Html
    }

    fn validate(&self) -> Result<()> {
        if self.document.body.is_none() {
            return Err(Error::invalid_request(
                RequestKind::Html,
                "an html body is required",
            ));
        }
        self.document.check_collisions(&self.base.assets)?;
        self.base.config.validate(RequestKind::Html)
    }

    fn into_message(self) -> Result<ApiMessage> {
        self.validate()?;
        let behaviors = self.behaviors.fields()?;

        let mut message = ApiMessage::new(RequestKind::Html);
        message.apply_config(&self.base.config)?;
        for (name, item) in self.document.into_parts() {
            message.push_file(name, item);
        }
        message.push_assets(self.base.assets);
        message.push_fields(self.dimensions.fields());
        message.push_fields(behaviors);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;
    use crate::requests::PaperSize;

    fn with_body() -> HtmlRequest {
        let mut request = HtmlRequest::default();
        request.document.body = Some(ContentItem::text("<h1>Hello</h1>"));
        request
    }

    #[test]
    fn body_is_required() {
        let err = HtmlRequest::default().validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { kind: RequestKind::Html, .. }));
    }

    #[test]
    fn documents_then_assets_then_fields() {
        let mut request = with_body();
        request.document.footer = Some(ContentItem::text("<footer/>"));
        request.base.assets.insert("style.css", "h1 { color: red }").unwrap();
        request.base.assets.insert("logo.png", vec![0x89u8, 0x50]).unwrap();
        request.dimensions = Dimensions::from_paper_size(PaperSize::A4);

        let message = request.into_message().unwrap();
        assert_eq!(message.path(), "/forms/chromium/convert/html");
        assert_eq!(
            message.form().field_names().collect::<Vec<_>>(),
            ["index.html", "footer.html", "style.css", "logo.png", "paperWidth", "paperHeight"]
        );
    }

    #[test]
    fn asset_cannot_shadow_a_document() {
        let mut request = with_body();
        request.base.assets.insert("index.html", "<p>other</p>").unwrap();
        let err = request.into_message().unwrap_err();
        assert!(matches!(err, Error::DuplicateAsset(name) if name == "index.html"));
    }
}
