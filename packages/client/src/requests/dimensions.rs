//! Page geometry for Chromium conversions

use super::fields;

/// Paper size presets, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
    D,
    E,
}

impl PaperSize {
    /// Width and height in inches
    #[must_use]
    pub fn inches(self) -> (f64, f64) {
        match self {
            PaperSize::A3 => (11.7, 16.54),
            PaperSize::A4 => (8.27, 11.7),
            PaperSize::A5 => (5.83, 8.27),
            PaperSize::A6 => (4.13, 5.83),
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::Legal => (8.5, 14.0),
            PaperSize::Tabloid => (11.0, 17.0),
            PaperSize::D => (22.0, 34.0),
            PaperSize::E => (34.0, 44.0),
        }
    }
}

/// Page options for HTML and URL conversions.
///
/// Unset fields are left to the service's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimensions {
    pub paper_width: Option<f64>,
    pub paper_height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
    pub margin_right: Option<f64>,
    pub prefer_css_page_size: Option<bool>,
    pub print_background: Option<bool>,
    pub omit_background: Option<bool>,
    pub landscape: Option<bool>,
    pub scale: Option<f64>,
    /// Page ranges to print, e.g. `1-5, 8`
    pub page_ranges: Option<String>,
}

impl Dimensions {
    /// Only the paper size of a preset
    #[must_use]
    pub fn from_paper_size(size: PaperSize) -> Self {
        let (width, height) = size.inches();
        Self {
            paper_width: Some(width),
            paper_height: Some(height),
            ..Self::default()
        }
    }

    /// Chromium's own print defaults, spelled out
    #[must_use]
    pub fn chromium_defaults() -> Self {
        Self {
            margin_top: Some(0.39),
            margin_bottom: Some(0.39),
            margin_left: Some(0.39),
            margin_right: Some(0.39),
            prefer_css_page_size: Some(false),
            print_background: Some(false),
            omit_background: Some(false),
            landscape: Some(false),
            scale: Some(1.0),
            ..Self::from_paper_size(PaperSize::Letter)
        }
    }

    /// Whether no option is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let numbers = [
            (fields::PAPER_WIDTH, self.paper_width),
            (fields::PAPER_HEIGHT, self.paper_height),
            (fields::MARGIN_TOP, self.margin_top),
            (fields::MARGIN_BOTTOM, self.margin_bottom),
            (fields::MARGIN_LEFT, self.margin_left),
            (fields::MARGIN_RIGHT, self.margin_right),
            (fields::SCALE, self.scale),
        ];
        let flags = [
            (fields::PREFER_CSS_PAGE_SIZE, self.prefer_css_page_size),
            (fields::PRINT_BACKGROUND, self.print_background),
            (fields::OMIT_BACKGROUND, self.omit_background),
            (fields::LANDSCAPE, self.landscape),
        ];

        let mut out: Vec<(&'static str, String)> = numbers
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
            .collect();
        out.extend(
            flags
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v.to_string()))),
        );
        if let Some(ranges) = &self.page_ranges {
            out.push((fields::NATIVE_PAGE_RANGES, ranges.clone()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dimensions_emit_nothing() {
        assert!(Dimensions::default().is_empty());
        assert!(Dimensions::default().fields().is_empty());
    }

    #[test]
    fn paper_size_sets_only_width_and_height() {
        let fields = Dimensions::from_paper_size(PaperSize::A4).fields();
        assert_eq!(
            fields,
            vec![("paperWidth", "8.27".to_string()), ("paperHeight", "11.7".to_string())]
        );
    }

    #[test]
    fn defaults_cover_every_numeric_and_flag_field() {
        let fields = Dimensions::chromium_defaults().fields();
        let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), 11);
        assert!(fields.contains(&("paperWidth", "8.5".to_string())));
        assert!(fields.contains(&("paperHeight", "11".to_string())));
        assert!(fields.contains(&("scale", "1".to_string())));
        assert!(fields.contains(&("landscape", "false".to_string())));
        assert!(!names.contains(&"nativePageRanges"));
    }
}
