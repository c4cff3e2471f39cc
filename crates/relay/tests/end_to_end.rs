//! Full runs against mock identity and Slack servers.

use std::time::Duration;

use herald_core::Invocation;
use herald_identity::{HttpIdentityResolver, IdentityConfig};
use herald_provider::ResolveError;
use herald_relay::{Relay, RelayError};
use herald_slack::{SlackConfig, SlackSender};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

struct CapturedRequest {
    head: String,
    body: String,
}

struct MockServer {
    listener: TcpListener,
    base_url: String,
}

impl MockServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{port}");
        Self { listener, base_url }
    }

    async fn respond_once(&self, status_code: u16, body: &str) -> CapturedRequest {
        let (mut stream, _) = self.listener.accept().await.unwrap();

        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        let header_end = loop {
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before request head");
            raw.extend_from_slice(&buf[..n]);
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).into_owned();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_code} Mock\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n\
             {body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        CapturedRequest {
            head,
            body: String::from_utf8_lossy(&raw[header_end..]).into_owned(),
        }
    }
}

fn relay_for(identity: &MockServer, slack: &MockServer) -> Relay<HttpIdentityResolver, SlackSender> {
    Relay::new(
        HttpIdentityResolver::new(IdentityConfig::new(&identity.base_url, "ci", "secret")),
        SlackSender::new(SlackConfig::new("xoxb-test").with_api_base_url(&slack.base_url)),
    )
}

#[tokio::test]
async fn successful_build_sends_success_notification() {
    let identity = MockServer::start().await;
    let slack = MockServer::start().await;
    let relay = relay_for(&identity, &slack);

    let invocation = Invocation::new("api", "main", "success", "build 42 passed", "octocat");

    let servers = async {
        let lookup = identity.respond_once(200, r#"{"slackID":"U024BE7LH"}"#).await;
        let post = slack
            .respond_once(
                200,
                r#"{"ok":true,"channel":"D1","ts":"1700000000.000100","message":{"ts":"1700000000.000100"}}"#,
            )
            .await;
        (lookup, post)
    };
    let (delivery, (lookup, post)) = tokio::join!(relay.run(&invocation), servers);

    let delivery = delivery.unwrap();
    assert_eq!(delivery.recipient, "U024BE7LH");
    assert_eq!(delivery.message_ts, "1700000000.000100");

    assert!(lookup.head.starts_with("GET /users/slackID?githubUsername=octocat "));

    let sent: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert_eq!(sent["channel"], "@U024BE7LH");
    assert_eq!(
        sent["text"],
        "*:successkid: CI Success*\n\n\
         *Repo:*    `api`\n\
         *Branch:* `main`\n\
         *State:*    `success`\n"
    );
    let attachments = sent["attachments"].as_array().unwrap();
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0]["color"], "#00FF00");
    assert_eq!(attachments[0]["text"], "\n```\nbuild 42 passed\n```");
}

#[tokio::test]
async fn failed_circleci_step_links_to_pipeline() {
    let identity = MockServer::start().await;
    let slack = MockServer::start().await;
    let relay = relay_for(&identity, &slack);

    let invocation = Invocation::new("api", "main", "failed", "tests failed", "octocat")
        .with_failed_step("circleci-test");

    let servers = async {
        identity.respond_once(200, r#"{"slackID":"U1"}"#).await;
        slack
            .respond_once(200, r#"{"ok":true,"channel":"D1","ts":"5.5"}"#)
            .await
    };
    let (delivery, post) = tokio::join!(relay.run(&invocation), servers);

    assert_eq!(delivery.unwrap().message_ts, "5.5");

    let sent: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    let text = sent["text"].as_str().unwrap();
    assert!(text.starts_with("*:ohno: CI Failure*\n\n"));
    assert!(text.ends_with(
        "*Link:*      <https://app.circleci.com/pipelines/github/Clever/api?branch=main|Failed step>\n"
    ));
    assert_eq!(sent["attachments"][0]["color"], "#FF0000");
    assert_eq!(
        sent["attachments"][0]["text"],
        "\n```\ntests failed\n\ncircleci-test\n```"
    );
}

#[tokio::test]
async fn unknown_contributor_never_reaches_slack() {
    let identity = MockServer::start().await;
    let slack = MockServer::start().await;
    let relay = relay_for(&identity, &slack);

    let invocation = Invocation::new("api", "main", "success", "", "ghost");

    let (result, _) = tokio::join!(
        relay.run(&invocation),
        identity.respond_once(404, r#"{"message":"not found"}"#)
    );

    let err = result.unwrap_err();
    assert_eq!(err, RelayError::Resolve(ResolveError::NotFound));
    assert_eq!(
        err.to_string(),
        "Error retrieving slackID: SlackID not found for github user"
    );

    let attempt = tokio::time::timeout(Duration::from_millis(200), slack.listener.accept()).await;
    assert!(attempt.is_err(), "no request may reach Slack");
}

#[tokio::test]
async fn slack_rejection_is_terminal() {
    let identity = MockServer::start().await;
    let slack = MockServer::start().await;
    let relay = relay_for(&identity, &slack);

    let invocation = Invocation::new("api", "main", "success", "", "octocat");

    let servers = async {
        identity.respond_once(200, r#"{"slackID":"U1"}"#).await;
        slack
            .respond_once(200, r#"{"ok":false,"error":"channel_not_found"}"#)
            .await
    };
    let (result, _) = tokio::join!(relay.run(&invocation), servers);

    assert_eq!(
        result.unwrap_err().to_string(),
        "Error sending message via Slack Client: Slack API error: channel_not_found"
    );
}

#[tokio::test]
async fn empty_description_sends_empty_code_block() {
    let identity = MockServer::start().await;
    let slack = MockServer::start().await;
    let relay = relay_for(&identity, &slack);

    let invocation = Invocation::new("api", "main", "success", "", "octocat");

    let servers = async {
        identity.respond_once(200, r#"{"slackID":"U1"}"#).await;
        slack
            .respond_once(200, r#"{"ok":true,"channel":"D1","ts":"7.7"}"#)
            .await
    };
    let (delivery, post) = tokio::join!(relay.run(&invocation), servers);

    assert_eq!(delivery.unwrap().message_ts, "7.7");

    let sent: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert_eq!(sent["attachments"][0]["text"], "\n```\n\n```");
    assert_eq!(sent["attachments"][0]["color"], "#00FF00");
}

#[tokio::test]
async fn identity_server_error_names_status() {
    let identity = MockServer::start().await;
    let slack = MockServer::start().await;
    let relay = relay_for(&identity, &slack);

    let invocation = Invocation::new("api", "main", "success", "", "octocat");

    let (result, _) = tokio::join!(
        relay.run(&invocation),
        identity.respond_once(503, r#"{"error":"unavailable"}"#)
    );

    assert_eq!(
        result.unwrap_err().to_string(),
        "Error retrieving slackID: Request failed with status code 503"
    );
}
