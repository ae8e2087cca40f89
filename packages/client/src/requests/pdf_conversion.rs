//! PDF to PDF/A conversion through the PDF engines

use super::base::impl_has_request_base;
use super::{ApiRequest, PdfOutput, RequestBase, RequestKind};
use crate::error::{Error, Result};
use crate::http::ApiMessage;

/// Convert the asset PDFs to an archival format.
#[derive(Debug, Default)]
pub struct PdfConversionRequest {
    pub base: RequestBase,
    pub output: PdfOutput,
}

impl_has_request_base!(PdfConversionRequest);

impl ApiRequest for PdfConversionRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::PdfConversion
    }

    fn validate(&self) -> Result<()> {
        if self.base.assets.is_empty() {
            return Err(Error::invalid_request(
                RequestKind::PdfConversion,
                "at least one pdf is required",
            ));
        }
        if self.output.pdf_format.is_none() {
            return Err(Error::invalid_request(
                RequestKind::PdfConversion,
                "a target pdf format is required",
            ));
        }
        self.base.config.validate(RequestKind::PdfConversion)
    }

    fn into_message(self) -> Result<ApiMessage> {
        self.validate()?;
        let mut message = ApiMessage::new(RequestKind::PdfConversion);
        message.apply_config(&self.base.config)?;
        message.push_assets(self.base.assets);
        message.push_fields(self.output.fields());
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::PdfFormat;

    #[test]
    fn format_is_required() {
        let mut request = PdfConversionRequest::default();
        request.base.assets.insert("in.pdf", b"%PDF").unwrap();
        assert!(request.validate().is_err());

        request.output.pdf_format = Some(PdfFormat::A3b);
        request.output.pdf_ua = true;
        let message = request.into_message().unwrap();
        assert_eq!(
            message.form().field_names().collect::<Vec<_>>(),
            ["in.pdf", "pdfa", "pdfua"]
        );
    }
}
