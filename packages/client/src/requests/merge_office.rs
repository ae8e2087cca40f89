//! Office documents to one merged PDF through LibreOffice

use super::base::impl_has_request_base;
use super::{ApiRequest, OfficeOptions, RequestBase, RequestKind, fields};
use crate::error::{Error, Result};
use crate::http::ApiMessage;

/// Convert the asset office documents and merge the results.
#[derive(Debug, Default)]
pub struct MergeOfficeRequest {
    pub base: RequestBase,
    pub options: OfficeOptions,
}

impl_has_request_base!(MergeOfficeRequest);

impl ApiRequest for MergeOfficeRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::MergeOffice
    }

    fn validate(&self) -> Result<()> {
        if self.base.assets.is_empty() {
            return Err(Error::invalid_request(
                RequestKind::MergeOffice,
                "at least one office document is required",
            ));
        }
        self.base.config.validate(RequestKind::MergeOffice)
    }

    fn into_message(self) -> Result<ApiMessage> {
        self.validate()?;
        let mut message = ApiMessage::new(RequestKind::MergeOffice);
        message.apply_config(&self.base.config)?;
        message.push_assets(self.base.assets);
        message.push_fields([(fields::MERGE, "true".to_string())]);
        message.push_fields(self.options.fields());
        Ok(message)
    }
}
