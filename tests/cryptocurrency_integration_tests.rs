use coinmarketcap::cryptocurrency::{
    create_cryptocurrency_client, Cryptocurrency, MetadataOptions, QuotesLatestOptions,
};
use coinmarketcap::{CmcConfig, CmcError, MapResponse};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::timeout;

const QUOTES_BODY: &str = r#"{
    "status": {"timestamp": "2024-05-01T00:00:00.000Z", "error_code": 0,
               "error_message": null, "elapsed": 12, "credit_count": 1},
    "data": {"BTC": {"id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin",
                     "quote": {"USD": {"price": 60000.5, "volume_24h": 35000000000.0,
                                       "market_cap": 1180000000000.0,
                                       "percent_change_24h": -1.25,
                                       "last_updated": "2024-05-01T00:00:00.000Z"}}}}
}"#;

const ERROR_BODY: &str = r#"{
    "status": {"timestamp": "2024-05-01T00:00:00.000Z", "error_code": 1002,
               "error_message": "API key missing.", "elapsed": 0, "credit_count": 0}
}"#;

/// Spawn a one-response HTTP stub on a random local port. Returns the base
/// URL for the client and a channel yielding each captured request head.
async fn spawn_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&chunk[..n]);
                            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let _ = tx.send(String::from_utf8_lossy(&request).to_string());

                let response = format!(
                    "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}/", addr), rx)
}

fn stub_config(base_url: String) -> CmcConfig {
    CmcConfig::new("test-key".to_string()).base_url(base_url)
}

#[tokio::test]
async fn success_body_decodes_into_the_envelope() {
    let (base_url, _rx) = spawn_stub("200 OK", QUOTES_BODY).await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    let response = client
        .quotes_latest(&QuotesLatestOptions::by_symbol("BTC"))
        .await
        .unwrap()
        .expect("non-empty body");

    assert!(!response.is_error());

    // Deep-equal against an independent parse of the same body.
    let reference: MapResponse<Cryptocurrency> = serde_json::from_str(QUOTES_BODY).unwrap();
    let got = &response.data.as_ref().unwrap()["BTC"];
    let expected = &reference.data.as_ref().unwrap()["BTC"];
    assert_eq!(got.id, expected.id);
    assert_eq!(got.quote["USD"].price, expected.quote["USD"].price);
    assert_eq!(
        got.quote["USD"].percent_change_24h,
        expected.quote["USD"].percent_change_24h
    );
}

#[tokio::test]
async fn error_status_with_json_body_decodes_instead_of_failing() {
    let (base_url, _rx) = spawn_stub("401 Unauthorized", ERROR_BODY).await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    let response = client
        .quotes_latest(&QuotesLatestOptions::by_id("1"))
        .await
        .unwrap()
        .expect("error body should decode");

    assert!(response.is_error());
    assert_eq!(response.status.error_code, Some(1002));
    assert_eq!(response.error_message(), Some("API key missing."));
    assert!(response.data.is_none());
}

#[tokio::test]
async fn blank_body_yields_none_on_success_status() {
    let (base_url, _rx) = spawn_stub("200 OK", "   ").await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    let response = client
        .metadata(&MetadataOptions::by_symbol("BTC"))
        .await
        .unwrap();
    assert!(response.is_none());
}

#[tokio::test]
async fn blank_body_yields_none_on_error_status() {
    let (base_url, _rx) = spawn_stub("500 Internal Server Error", "").await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    let response = client
        .metadata(&MetadataOptions::by_symbol("BTC"))
        .await
        .unwrap();
    assert!(response.is_none());
}

#[tokio::test]
async fn malformed_body_is_a_decode_fault() {
    let (base_url, _rx) = spawn_stub("200 OK", "{not json").await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    let result = client.metadata(&MetadataOptions::by_symbol("BTC")).await;
    assert!(matches!(result, Err(CmcError::Decode(_))));
}

#[tokio::test]
async fn connection_refused_is_a_transport_fault() {
    // Bind to grab a free port, then drop the listener before connecting.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        create_cryptocurrency_client(stub_config(format!("http://{}/", addr))).unwrap();

    let result = client.metadata(&MetadataOptions::by_symbol("BTC")).await;
    assert!(matches!(result, Err(CmcError::Transport(_))));
}

#[tokio::test]
async fn requests_carry_api_key_header_and_encoded_query() {
    let (base_url, mut rx) = spawn_stub("200 OK", QUOTES_BODY).await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    client
        .quotes_latest(&QuotesLatestOptions::by_id("1,2"))
        .await
        .unwrap();

    let request = rx.recv().await.expect("stub should see one request");
    let request_line = request.lines().next().unwrap_or_default().to_string();
    assert_eq!(
        request_line,
        "GET /cryptocurrency/quotes/latest?id=1%2C2 HTTP/1.1"
    );

    let lower = request.to_lowercase();
    assert!(lower.contains("x-cmc_pro_api_key: test-key"));
    assert!(lower.contains("accept: application/json"));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let (base_url, _rx) = spawn_stub("200 OK", QUOTES_BODY).await;
    let client = create_cryptocurrency_client(stub_config(base_url)).unwrap();

    let options = QuotesLatestOptions::by_symbol("BTC");
    let calls = (0..4).map(|_| client.quotes_latest(&options));
    let results = futures::future::join_all(calls).await;

    assert_eq!(results.len(), 4);
    for result in results {
        assert!(result.unwrap().is_some());
    }
}

mod live {
    use super::*;

    /// Tolerant smoke test against the sandbox API. Needs a key in the
    /// environment; network failures are reported, not asserted.
    #[tokio::test]
    async fn sandbox_quotes_smoke() {
        let Ok(api_key) = std::env::var("COINMARKETCAP_API_KEY") else {
            println!("⚠️ COINMARKETCAP_API_KEY not set, skipping sandbox smoke test");
            return;
        };

        let config = CmcConfig::new(api_key).sandbox(true);
        let client = create_cryptocurrency_client(config).unwrap();

        let result = timeout(
            Duration::from_secs(30),
            client.quotes_latest(&QuotesLatestOptions::by_symbol("BTC")),
        )
        .await;

        match result {
            Ok(Ok(Some(response))) => {
                println!(
                    "✅ sandbox quotes: error_code={:?}, {} entries",
                    response.status.error_code,
                    response.data.as_ref().map_or(0, std::collections::HashMap::len)
                );
            }
            Ok(Ok(None)) => println!("⚠️ sandbox returned an empty body"),
            Ok(Err(e)) => println!("⚠️ sandbox quotes failed: {}", e),
            Err(_) => println!("⚠️ sandbox quotes timed out"),
        }
    }
}
