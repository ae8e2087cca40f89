//! Chromium rendering behaviours shared by HTML and URL conversions

use std::collections::BTreeMap;
use std::time::Duration;

use super::{DocumentContent, Dimensions, fields};
use crate::error::{Error, Result};

/// CSS media type Chromium emulates while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Print,
    Screen,
}

impl MediaType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Print => "print",
            MediaType::Screen => "screen",
        }
    }
}

/// How Chromium loads the page before printing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromiumBehaviors {
    /// Fixed wait before printing
    pub wait_delay: Option<Duration>,
    /// JavaScript expression that must become truthy before printing
    pub wait_for_expression: Option<String>,
    pub user_agent: Option<String>,
    /// Headers sent with every request the page makes
    pub extra_http_headers: BTreeMap<String, String>,
    pub emulated_media_type: Option<MediaType>,
    pub fail_on_console_exceptions: Option<bool>,
}

impl ChromiumBehaviors {
    pub(crate) fn fields(&self) -> Result<Vec<(&'static str, String)>> {
        let mut out = Vec::new();
        if let Some(delay) = self.wait_delay {
            out.push((fields::WAIT_DELAY, go_duration(delay)));
        }
        if let Some(expression) = &self.wait_for_expression {
            out.push((fields::WAIT_FOR_EXPRESSION, expression.clone()));
        }
        if let Some(user_agent) = &self.user_agent {
            out.push((fields::USER_AGENT, user_agent.clone()));
        }
        if !self.extra_http_headers.is_empty() {
            let json = serde_json::to_string(&self.extra_http_headers)
                .map_err(|e| Error::invalid_argument("extra http headers", e.to_string()))?;
            out.push((fields::EXTRA_HTTP_HEADERS, json));
        }
        if let Some(media) = self.emulated_media_type {
            out.push((fields::EMULATED_MEDIA_TYPE, media.as_str().to_string()));
        }
        if let Some(fail) = self.fail_on_console_exceptions {
            out.push((fields::FAIL_ON_CONSOLE_EXCEPTIONS, fail.to_string()));
        }
        Ok(out)
    }
}

/// Render a duration the way the service parses it (`1500ms`, `3s`).
fn go_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{millis}ms")
    }
}

/// Access to the Chromium facets of HTML and URL requests.
pub trait HasChromiumOptions {
    fn document_mut(&mut self) -> &mut DocumentContent;

    fn dimensions_mut(&mut self) -> &mut Dimensions;

    fn behaviors_mut(&mut self) -> &mut ChromiumBehaviors;
}

macro_rules! impl_has_chromium_options {
    ($($request:ty),+ $(,)?) => {
        $(
            impl $crate::requests::HasChromiumOptions for $request {
                fn document_mut(&mut self) -> &mut $crate::requests::DocumentContent {
                    &mut self.document
                }

                fn dimensions_mut(&mut self) -> &mut $crate::requests::Dimensions {
                    &mut self.dimensions
                }

                fn behaviors_mut(&mut self) -> &mut $crate::requests::ChromiumBehaviors {
                    &mut self.behaviors
                }
            }
        )+
    };
}

pub(crate) use impl_has_chromium_options;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_use_service_syntax() {
        assert_eq!(go_duration(Duration::from_secs(3)), "3s");
        assert_eq!(go_duration(Duration::from_millis(1500)), "1500ms");
        assert_eq!(go_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn behaviors_emit_only_set_fields() {
        let mut behaviors = ChromiumBehaviors {
            wait_for_expression: Some("window.ready === true".into()),
            emulated_media_type: Some(MediaType::Screen),
            ..ChromiumBehaviors::default()
        };
        behaviors
            .extra_http_headers
            .insert("Authorization".into(), "Bearer t".into());

        let fields = behaviors.fields().unwrap();
        assert_eq!(
            fields,
            vec![
                ("waitForExpression", "window.ready === true".to_string()),
                ("extraHttpHeaders", r#"{"Authorization":"Bearer t"}"#.to_string()),
                ("emulatedMediaType", "screen".to_string()),
            ]
        );
    }
}
