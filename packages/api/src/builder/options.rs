//! Output facets: LibreOffice options and archival PDF output

use gotenberg_client::Result;
use gotenberg_client::requests::{
    ApiRequest, HasPdfOutput, MergeOfficeRequest, OfficeOptions, PdfFormat,
};

use crate::builder::core::RequestBuilder;
use crate::builder::dimensions::non_blank;

/// Sets LibreOffice conversion options.
#[derive(Debug)]
pub struct OfficeOptionsBuilder<'a> {
    options: &'a mut OfficeOptions,
}

impl<'a> OfficeOptionsBuilder<'a> {
    pub fn new(options: &'a mut OfficeOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn landscape(self, landscape: bool) -> Self {
        self.options.landscape = Some(landscape);
        self
    }

    /// Pages to convert, e.g. `1-3`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank range.
    pub fn page_ranges(self, ranges: impl Into<String>) -> Result<Self> {
        self.options.page_ranges = Some(non_blank("page ranges", ranges.into())?);
        Ok(self)
    }

    #[must_use]
    pub fn pdf_format(self, format: PdfFormat) -> Self {
        self.options.output.pdf_format = Some(format);
        self
    }

    #[must_use]
    pub fn pdf_ua(self, enabled: bool) -> Self {
        self.options.output.pdf_ua = enabled;
        self
    }
}

impl RequestBuilder<MergeOfficeRequest> {
    /// Edit the LibreOffice options.
    ///
    /// # Errors
    ///
    /// Returns the first error the closure returns.
    pub fn office_options<F>(mut self, f: F) -> Result<Self>
    where
        F: FnOnce(OfficeOptionsBuilder<'_>) -> Result<OfficeOptionsBuilder<'_>>,
    {
        f(OfficeOptionsBuilder::new(&mut self.request.options))?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: office options {:?}", self.request.options);
        }
        Ok(self)
    }
}

impl<R: ApiRequest + HasPdfOutput> RequestBuilder<R> {
    /// Produce a PDF/A document
    #[must_use]
    pub fn pdf_format(mut self, format: PdfFormat) -> Self {
        if self.debug_enabled {
            log::debug!("Gotenberg builder: pdf format {}", format.as_str());
        }
        self.request.output_mut().pdf_format = Some(format);
        self
    }

    /// Produce a PDF/UA (universal accessibility) document
    #[must_use]
    pub fn pdf_ua(mut self, enabled: bool) -> Self {
        self.request.output_mut().pdf_ua = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gotenberg_client::requests::{MergeRequest, PdfConversionRequest};

    #[test]
    fn office_options_and_output_share_one_record() {
        let request = RequestBuilder::<MergeOfficeRequest>::new()
            .office_options(|o| o.landscape(true).page_ranges("1-2"))
            .unwrap()
            .pdf_format(PdfFormat::A1b)
            .build();

        assert_eq!(request.options.landscape, Some(true));
        assert_eq!(request.options.page_ranges.as_deref(), Some("1-2"));
        assert_eq!(request.options.output.pdf_format, Some(PdfFormat::A1b));
    }

    #[test]
    fn merge_and_conversion_take_output_settings() {
        let merge = RequestBuilder::<MergeRequest>::new().pdf_ua(true).build();
        assert!(merge.output.pdf_ua);

        let conversion = RequestBuilder::<PdfConversionRequest>::new()
            .pdf_format(PdfFormat::A3b)
            .build();
        assert_eq!(conversion.output.pdf_format, Some(PdfFormat::A3b));
    }
}
