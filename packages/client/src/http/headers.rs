//! Header names and media types used on the wire
//!
//! Names are lower-case so they can be used with `HeaderName::from_static`.

/// Media type requested through the `Accept` header
pub const APPLICATION_PDF: &str = "application/pdf";

/// File name the service gives the produced document
pub const OUTPUT_FILENAME: &str = "gotenberg-output-filename";

/// Correlation id echoed in the service's logs
pub const TRACE: &str = "gotenberg-trace";

pub const WEBHOOK_URL: &str = "gotenberg-webhook-url";
pub const WEBHOOK_METHOD: &str = "gotenberg-webhook-method";
pub const WEBHOOK_ERROR_URL: &str = "gotenberg-webhook-error-url";
pub const WEBHOOK_ERROR_METHOD: &str = "gotenberg-webhook-error-method";
pub const WEBHOOK_EXTRA_HTTP_HEADERS: &str = "gotenberg-webhook-extra-http-headers";
