//! Multipart field and document part names understood by the service

pub const INDEX_HTML: &str = "index.html";
pub const HEADER_HTML: &str = "header.html";
pub const FOOTER_HTML: &str = "footer.html";

pub const URL: &str = "url";
pub const MERGE: &str = "merge";

pub const PAPER_WIDTH: &str = "paperWidth";
pub const PAPER_HEIGHT: &str = "paperHeight";
pub const MARGIN_TOP: &str = "marginTop";
pub const MARGIN_BOTTOM: &str = "marginBottom";
pub const MARGIN_LEFT: &str = "marginLeft";
pub const MARGIN_RIGHT: &str = "marginRight";
pub const PREFER_CSS_PAGE_SIZE: &str = "preferCssPageSize";
pub const PRINT_BACKGROUND: &str = "printBackground";
pub const OMIT_BACKGROUND: &str = "omitBackground";
pub const LANDSCAPE: &str = "landscape";
pub const SCALE: &str = "scale";
pub const NATIVE_PAGE_RANGES: &str = "nativePageRanges";

pub const WAIT_DELAY: &str = "waitDelay";
pub const WAIT_FOR_EXPRESSION: &str = "waitForExpression";
pub const USER_AGENT: &str = "userAgent";
pub const EXTRA_HTTP_HEADERS: &str = "extraHttpHeaders";
pub const EMULATED_MEDIA_TYPE: &str = "emulatedMediaType";
pub const FAIL_ON_CONSOLE_EXCEPTIONS: &str = "failOnConsoleExceptions";

pub const PDF_A: &str = "pdfa";
pub const PDF_UA: &str = "pdfua";
