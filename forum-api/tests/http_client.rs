//! Integration tests for the HTTP client against a minimal in-process
//! server, covering status mapping, bearer-token attachment, and the
//! 401-clears-token behavior.

use forum_api::{ApiError, HttpForumClient, TokenStore, VotesApi};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one connection, answering with `status_line` and `body`,
/// and hand back the raw request head.
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            request.extend_from_slice(&chunk[..read]);
            if read == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = request_tx.send(String::from_utf8_lossy(&request).to_string());

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{}", addr), request_rx)
}

#[tokio::test]
async fn test_bearer_token_is_attached_when_present() {
    let (base, request_rx) = serve_once("HTTP/1.1 200 OK", "\"Voted UPVOTE\"".to_string()).await;
    let tokens = TokenStore::new();
    tokens.set("sekrit");
    let client = HttpForumClient::new(base, tokens);

    let message = client.upvote_post(42).await.unwrap();
    assert_eq!(message, "Voted UPVOTE");

    let request = request_rx.await.unwrap();
    assert!(request.starts_with("POST /votes/posts/42/upvote"));
    assert!(request.contains("authorization: Bearer sekrit") || request.contains("Authorization: Bearer sekrit"));
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let (base, request_rx) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"upvotes": 1, "downvotes": 0, "totalVotes": 1}"#.to_string(),
    )
    .await;
    let client = HttpForumClient::new(base, TokenStore::new());

    let counts = client.post_vote_counts(42).await.unwrap();
    assert_eq!(counts.upvotes, 1);

    let request = request_rx.await.unwrap();
    assert!(request.starts_with("GET /votes/posts/42/count"));
    assert!(!request.to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn test_unauthorized_response_clears_the_token() {
    let (base, _request_rx) = serve_once("HTTP/1.1 401 Unauthorized", String::new()).await;
    let tokens = TokenStore::new();
    tokens.set("expired");
    let client = HttpForumClient::new(base, tokens.clone());

    let result = client.upvote_post(42).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert!(!tokens.is_present());
}

#[tokio::test]
async fn test_server_error_carries_status_and_message() {
    let (base, _request_rx) = serve_once(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"message": "boom"}"#.to_string(),
    )
    .await;
    let client = HttpForumClient::new(base, TokenStore::new());

    match client.upvote_post(42).await {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected server error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let (base, _request_rx) = serve_once("HTTP/1.1 404 Not Found", String::new()).await;
    let client = HttpForumClient::new(base, TokenStore::new());

    let result = client.post_vote_counts(9999).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}
