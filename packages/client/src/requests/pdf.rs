//! PDF output settings shared by the PDF-producing routes

use super::fields;

/// PDF/A conformance level of the produced document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFormat {
    A1b,
    A2b,
    A3b,
}

impl PdfFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PdfFormat::A1b => "PDF/A-1b",
            PdfFormat::A2b => "PDF/A-2b",
            PdfFormat::A3b => "PDF/A-3b",
        }
    }
}

/// Archival output options of merge and conversion routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfOutput {
    pub pdf_format: Option<PdfFormat>,
    /// Universal accessibility (PDF/UA)
    pub pdf_ua: bool,
}

impl PdfOutput {
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(format) = self.pdf_format {
            out.push((fields::PDF_A, format.as_str().to_string()));
        }
        if self.pdf_ua {
            out.push((fields::PDF_UA, "true".to_string()));
        }
        out
    }
}

/// Access to the [`PdfOutput`] of requests that produce archival PDFs.
pub trait HasPdfOutput {
    fn output_mut(&mut self) -> &mut PdfOutput;
}

impl HasPdfOutput for super::MergeRequest {
    fn output_mut(&mut self) -> &mut PdfOutput {
        &mut self.output
    }
}

impl HasPdfOutput for super::PdfConversionRequest {
    fn output_mut(&mut self) -> &mut PdfOutput {
        &mut self.output
    }
}

impl HasPdfOutput for super::MergeOfficeRequest {
    fn output_mut(&mut self) -> &mut PdfOutput {
        &mut self.options.output
    }
}

/// LibreOffice conversion options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeOptions {
    pub landscape: Option<bool>,
    /// Page ranges to convert, e.g. `1-3`
    pub page_ranges: Option<String>,
    pub output: PdfOutput,
}

impl OfficeOptions {
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(landscape) = self.landscape {
            out.push((fields::LANDSCAPE, landscape.to_string()));
        }
        if let Some(ranges) = &self.page_ranges {
            out.push((fields::NATIVE_PAGE_RANGES, ranges.clone()));
        }
        out.extend(self.output.fields());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_output_fields() {
        assert!(PdfOutput::default().fields().is_empty());

        let output = PdfOutput {
            pdf_format: Some(PdfFormat::A2b),
            pdf_ua: true,
        };
        assert_eq!(
            output.fields(),
            vec![("pdfa", "PDF/A-2b".to_string()), ("pdfua", "true".to_string())]
        );
    }

    #[test]
    fn office_options_fields() {
        let options = OfficeOptions {
            landscape: Some(true),
            page_ranges: Some("1-3".into()),
            output: PdfOutput::default(),
        };
        assert_eq!(
            options.fields(),
            vec![("landscape", "true".to_string()), ("nativePageRanges", "1-3".to_string())]
        );
    }
}
