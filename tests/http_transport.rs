//! HttpTransport against a throwaway local server speaking canned HTTP/1.1.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use hdi_forecast::client::HttpTransport;
use hdi_forecast::{PredictError, PredictionClient, RequestState};
use hdi_forecast::{Controller, Event};

/// Serve one request with `status` and `body`, returning the raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/predict", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });
    (url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .find_map(|l| {
            let (k, v) = l.split_once(':')?;
            k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    body.len() >= length
}

fn http_client(url: &str) -> PredictionClient {
    PredictionClient::new(Box::new(HttpTransport::new(None).unwrap()), url)
}

#[tokio::test]
async fn posts_json_and_reads_series() {
    let (url, server) = serve_once("200 OK", r#"{"data":[{"year":2021,"hdi":0.961,"predicted":false}]}"#).await;
    let series = http_client(&url).predict("Iceland").await.unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.points()[0].year, 2021);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /predict"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"country":"Iceland"}"#));
}

#[tokio::test]
async fn bad_request_reports_service_error() {
    let (url, server) = serve_once("400 Bad Request", r#"{"error":"unknown country"}"#).await;
    let err = http_client(&url).predict("Atlantis").await.unwrap_err();
    assert_eq!(err, PredictError::Service("unknown country".into()));
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_connectivity_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let mut controller = Controller::new(http_client(&format!("http://{}/predict", addr)));
    controller.dispatch(Event::QueryChanged("Japan".into())).await;
    let session = controller.dispatch(Event::Submit).await;

    match session.request() {
        RequestState::Failed(msg) => assert!(msg.starts_with(hdi_forecast::labels::CONNECTIVITY_PREFIX)),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn stalled_server_times_out_on_connectivity_channel() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/predict", listener.local_addr().unwrap());
    // Accept and hold the connection open without ever answering.
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(stream);
    });

    let transport = HttpTransport::new(Some(Duration::from_millis(300))).unwrap();
    let client = PredictionClient::new(Box::new(transport), url);
    let started = std::time::Instant::now();
    let err = client.predict("Japan").await.unwrap_err();

    assert!(matches!(err, PredictError::Connectivity(_)), "got {:?}", err);
    assert!(err.message().starts_with(hdi_forecast::labels::CONNECTIVITY_PREFIX));
    assert!(started.elapsed() < Duration::from_secs(3));
    server.abort();
}
