use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use gotenberg_client::prelude::*;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn merge(headers: HeaderMap, body: Bytes) -> (StatusCode, HeaderMap, &'static str) {
    let body = String::from_utf8_lossy(&body);
    let mut reply = HeaderMap::new();
    reply.insert(header::CONTENT_TYPE, "application/pdf".parse().unwrap());

    let agent_ok = headers
        .get(header::USER_AGENT)
        .is_some_and(|agent| agent == "e2e/1.0");
    let parts_ok = body.contains("name=\"one.pdf\"")
        && body.contains("name=\"two.pdf\"")
        && body.contains("PDF/A-2b");
    if agent_ok && parts_ok {
        (StatusCode::OK, reply, "PDFDATA")
    } else {
        (StatusCode::BAD_REQUEST, HeaderMap::new(), "unexpected request")
    }
}

async fn reject_html() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "Invalid form data: form file 'index.html' is required")
}

fn app() -> Router {
    Router::new()
        .route("/forms/pdfengines/merge", post(merge))
        .route("/forms/chromium/convert/html", post(reject_html))
}

fn merge_request() -> MergeRequest {
    let mut request = MergeRequest::default();
    request.base.assets.insert("one.pdf", b"%PDF-1").unwrap();
    request
        .base
        .assets
        .insert("two.pdf", ContentItem::reader(&b"%PDF-2 streamed"[..]))
        .unwrap();
    request.output.pdf_format = Some(PdfFormat::A2b);
    request
}

#[tokio::test]
async fn merge_round_trip_over_http() {
    env_logger::try_init().ok();
    let base = serve(app()).await;
    let config = ClientConfig::new(&base).unwrap().with_user_agent("e2e/1.0");
    let client = GotenbergClient::from_config(&config).unwrap();

    let document = client
        .merge_pdfs(merge_request(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(document.content_type(), Some("application/pdf"));
    assert_eq!(document.bytes().await.unwrap(), "PDFDATA");
}

#[tokio::test]
async fn service_rejection_carries_its_message() {
    let base = serve(app()).await;
    let client = GotenbergClient::from_address(&base).unwrap();

    let mut request = HtmlRequest::default();
    request.document.body = Some(ContentItem::text("<p>hi</p>"));
    let err = client
        .html_to_pdf(request, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    let text = err.api_error().and_then(|api| api.body().as_text()).unwrap();
    assert!(text.contains("index.html"));
}

#[tokio::test]
async fn unknown_route_is_a_remote_error() {
    let base = serve(app()).await;
    let client = GotenbergClient::from_address(&base).unwrap();

    let mut request = PdfConversionRequest::default();
    request.base.assets.insert("in.pdf", b"%PDF").unwrap();
    request.output.pdf_format = Some(PdfFormat::A1b);

    let err = client
        .convert_pdf_documents(request, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GotenbergClient::from_address(&format!("http://{addr}")).unwrap();
    let err = client
        .merge_pdfs(merge_request(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
