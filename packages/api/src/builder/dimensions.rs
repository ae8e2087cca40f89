//! Dimensions facet: page geometry of Chromium conversions

use gotenberg_client::requests::{ApiRequest, Dimensions, HasChromiumOptions, PaperSize};
use gotenberg_client::{Error, Result};

use crate::builder::core::RequestBuilder;

/// Smallest and largest scale factor Chromium accepts
const SCALE_RANGE: std::ops::RangeInclusive<f64> = 0.1..=2.0;

/// Sets page geometry. Lengths are in inches.
#[derive(Debug)]
pub struct DimensionsBuilder<'a> {
    dimensions: &'a mut Dimensions,
    debug_enabled: bool,
}

impl<'a> DimensionsBuilder<'a> {
    pub fn new(dimensions: &'a mut Dimensions) -> Self {
        Self {
            dimensions,
            debug_enabled: false,
        }
    }

    #[must_use]
    pub(crate) fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Use the width and height of a preset
    #[must_use]
    pub fn paper_size(self, size: PaperSize) -> Self {
        let (width, height) = size.inches();
        if self.debug_enabled {
            log::debug!("Gotenberg builder: paper size {size:?} ({width}x{height}in)");
        }
        self.dimensions.paper_width = Some(width);
        self.dimensions.paper_height = Some(height);
        self
    }

    /// Replace every option with Chromium's print defaults
    #[must_use]
    pub fn chromium_defaults(self) -> Self {
        *self.dimensions = Dimensions::chromium_defaults();
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `width` is positive and finite.
    pub fn paper_width(self, width: f64) -> Result<Self> {
        self.dimensions.paper_width = Some(positive("paper width", width)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `height` is positive and finite.
    pub fn paper_height(self, height: f64) -> Result<Self> {
        self.dimensions.paper_height = Some(positive("paper height", height)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative or non-finite margin.
    pub fn margin_top(self, margin: f64) -> Result<Self> {
        self.dimensions.margin_top = Some(margin_value("margin top", margin)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative or non-finite margin.
    pub fn margin_bottom(self, margin: f64) -> Result<Self> {
        self.dimensions.margin_bottom = Some(margin_value("margin bottom", margin)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative or non-finite margin.
    pub fn margin_left(self, margin: f64) -> Result<Self> {
        self.dimensions.margin_left = Some(margin_value("margin left", margin)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative or non-finite margin.
    pub fn margin_right(self, margin: f64) -> Result<Self> {
        self.dimensions.margin_right = Some(margin_value("margin right", margin)?);
        Ok(self)
    }

    /// Same margin on all four sides.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative or non-finite margin.
    pub fn margins(self, margin: f64) -> Result<Self> {
        let margin = margin_value("margins", margin)?;
        if self.debug_enabled {
            log::debug!("Gotenberg builder: margins {margin}in");
        }
        self.dimensions.margin_top = Some(margin);
        self.dimensions.margin_bottom = Some(margin);
        self.dimensions.margin_left = Some(margin);
        self.dimensions.margin_right = Some(margin);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `scale` is within 0.1 and 2.0.
    pub fn scale(self, scale: f64) -> Result<Self> {
        if !SCALE_RANGE.contains(&scale) {
            return Err(Error::InvalidArgument {
                name: "scale",
                reason: format!("{scale} is outside 0.1..=2.0"),
            });
        }
        self.dimensions.scale = Some(scale);
        Ok(self)
    }

    #[must_use]
    pub fn landscape(self, landscape: bool) -> Self {
        self.dimensions.landscape = Some(landscape);
        self
    }

    #[must_use]
    pub fn prefer_css_page_size(self, prefer: bool) -> Self {
        self.dimensions.prefer_css_page_size = Some(prefer);
        self
    }

    #[must_use]
    pub fn print_background(self, print: bool) -> Self {
        self.dimensions.print_background = Some(print);
        self
    }

    #[must_use]
    pub fn omit_background(self, omit: bool) -> Self {
        self.dimensions.omit_background = Some(omit);
        self
    }

    /// Pages to print, e.g. `1-5, 8`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank range.
    pub fn page_ranges(self, ranges: impl Into<String>) -> Result<Self> {
        self.dimensions.page_ranges = Some(non_blank("page ranges", ranges.into())?);
        Ok(self)
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidArgument {
            name,
            reason: format!("{value} is not a positive length"),
        })
    }
}

fn margin_value(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidArgument {
            name,
            reason: format!("{value} is not a valid margin"),
        })
    }
}

pub(crate) fn non_blank(name: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        Err(Error::InvalidArgument {
            name,
            reason: "must not be blank".to_string(),
        })
    } else {
        Ok(value)
    }
}

impl<R: ApiRequest + HasChromiumOptions> RequestBuilder<R> {
    /// Edit the page geometry.
    ///
    /// # Errors
    ///
    /// Returns the first error the closure returns.
    pub fn dimensions<F>(mut self, f: F) -> Result<Self>
    where
        F: FnOnce(DimensionsBuilder<'_>) -> Result<DimensionsBuilder<'_>>,
    {
        let debug = self.debug_enabled;
        f(DimensionsBuilder::new(self.request.dimensions_mut()).with_debug(debug))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_then_overrides() {
        let mut dimensions = Dimensions::default();
        DimensionsBuilder::new(&mut dimensions)
            .paper_size(PaperSize::A4)
            .landscape(true)
            .margins(0.5)
            .unwrap()
            .scale(0.8)
            .unwrap();

        assert_eq!(dimensions.paper_width, Some(8.27));
        assert_eq!(dimensions.margin_left, Some(0.5));
        assert_eq!(dimensions.landscape, Some(true));
        assert_eq!(dimensions.scale, Some(0.8));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut dimensions = Dimensions::default();
        assert!(DimensionsBuilder::new(&mut dimensions).scale(2.5).is_err());
        assert!(DimensionsBuilder::new(&mut dimensions).scale(0.05).is_err());
        assert!(DimensionsBuilder::new(&mut dimensions).margin_top(-0.1).is_err());
        assert!(DimensionsBuilder::new(&mut dimensions).paper_width(0.0).is_err());
        assert!(DimensionsBuilder::new(&mut dimensions).paper_height(f64::NAN).is_err());
        assert!(DimensionsBuilder::new(&mut dimensions).page_ranges("  ").is_err());
        assert!(dimensions.is_empty());
    }

    #[test]
    fn zero_margin_is_allowed() {
        let mut dimensions = Dimensions::default();
        DimensionsBuilder::new(&mut dimensions).margin_bottom(0.0).unwrap();
        assert_eq!(dimensions.margin_bottom, Some(0.0));
    }
}
