//! PDF merge through the PDF engines

use super::base::impl_has_request_base;
use super::{ApiRequest, PdfOutput, RequestBase, RequestKind};
use crate::error::{Error, Result};
use crate::http::ApiMessage;

/// Merge the asset PDFs, in insertion order, into one document.
#[derive(Debug, Default)]
pub struct MergeRequest {
    pub base: RequestBase,
    pub output: PdfOutput,
}

impl_has_request_base!(MergeRequest);

impl ApiRequest for MergeRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::Merge
    }

    fn validate(&self) -> Result<()> {
        if self.base.assets.len() < 2 {
            return Err(Error::invalid_request(
                RequestKind::Merge,
                format!("merging needs at least two documents, got {}", self.base.assets.len()),
            ));
        }
        self.base.config.validate(RequestKind::Merge)
    }

    fn into_message(self) -> Result<ApiMessage> {
        self.validate()?;
        let mut message = ApiMessage::new(RequestKind::Merge);
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
    fn needs_two_documents() {
        let mut request = MergeRequest::default();
        request.base.assets.insert("a.pdf", b"%PDF-a").unwrap();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { kind: RequestKind::Merge, .. }));
    }

    #[test]
    fn documents_keep_insertion_order() {
        let mut request = MergeRequest::default();
        request.base.assets.insert("b.pdf", b"%PDF-b").unwrap();
        request.base.assets.insert("a.pdf", b"%PDF-a").unwrap();
        request.output.pdf_format = Some(PdfFormat::A2b);

        let message = request.into_message().unwrap();
        assert_eq!(
            message.form().field_names().collect::<Vec<_>>(),
            ["b.pdf", "a.pdf", "pdfa"]
        );
    }
}
