use once_cell::sync::Lazy;
use reqwest::Client;

use crate::client::models::endpoint::EndpointDescriptor;
use crate::error::FetchError;

// Shared client so every request reuses the same connection pool. No request
// timeout is configured: an in-flight request may take as long as the API does.
static CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// GET the endpoint URL and extract the configured top-level string field
/// from the JSON body.
pub async fn fetch_field(endpoint: &EndpointDescriptor) -> Result<String, FetchError> {
    let response = CLIENT.get(&endpoint.url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text().await?;
    let data: serde_json::Value = serde_json::from_str(&body)?;
    match data.get(endpoint.json_field.as_str()).and_then(|v| v.as_str()) {
        Some(value) => Ok(value.to_string()),
        None => Err(FetchError::MissingField(endpoint.json_field.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn fact_endpoint(url: String) -> EndpointDescriptor {
        EndpointDescriptor {
            label: "Fact".to_string(),
            url,
            json_field: "fact".to_string(),
            cache_key: "lastFact".to_string(),
        }
    }

    /// Serve exactly one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn extracts_the_configured_field() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"fact":"Cats sleep 70% of their lives.","length":30}"#,
        )
        .await;
        let value = fetch_field(&fact_endpoint(url)).await.unwrap();
        assert_eq!(value, "Cats sleep 70% of their lives.");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;
        let err = fetch_field(&fact_endpoint(url)).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let url = serve_once("HTTP/1.1 200 OK", "not json at all").await;
        let err = fetch_field(&fact_endpoint(url)).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_field_is_reported_by_name() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"activity":"Paint a fence"}"#).await;
        let err = fetch_field(&fact_endpoint(url)).await.unwrap_err();
        assert!(matches!(err, FetchError::MissingField(field) if field == "fact"));
    }

    #[tokio::test]
    async fn non_string_field_is_reported_as_missing() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"fact":42}"#).await;
        let err = fetch_field(&fact_endpoint(url)).await.unwrap_err();
        assert!(matches!(err, FetchError::MissingField(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Bind then drop a listener so the port is closed when the request goes out.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = fetch_field(&fact_endpoint(format!("http://{}", addr)))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
