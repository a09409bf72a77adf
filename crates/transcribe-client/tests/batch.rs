use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use transcribe_client::{Error, TranscribeClient, TranscriptionOptions};

fn client(server: &MockServer) -> TranscribeClient {
    TranscribeClient::builder()
        .api_base(server.uri() + "/")
        .api_key("test-key")
        .poll_interval(Duration::from_millis(10))
        .max_polls(5)
        .build()
        .unwrap()
}

async fn mock_upload(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"upload_url": "https://cdn/audio"})),
        )
        .mount(server)
        .await;
}

async fn mock_submit(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/transcript"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "job-1", "status": "queued"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn transcribe_runs_full_flow() {
    let server = MockServer::start().await;
    mock_upload(&server).await;
    mock_submit(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2/transcript/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-1",
            "status": "completed",
            "text": "hello world goodbye now",
            "summary": "- a greeting and a farewell",
            "utterances": [
                {"start": 0, "speaker": "A"},
                {"start": 5000, "speaker": "B"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/transcript/job-1/sentences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentences": [
                {"start": 0, "end": 4000, "text": "hello world"},
                {"start": 5000, "end": 8000, "text": "goodbye now"}
            ]
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .transcribe(
            vec![1, 2, 3],
            &TranscriptionOptions {
                speaker_labels: true,
                summarization: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.text, "hello world goodbye now");
    assert_eq!(result.sentences.len(), 2);
    assert_eq!(result.sentences[0].start_ms, 0);
    assert_eq!(result.sentences[1].text, "goodbye now");
    assert_eq!(result.utterances.as_ref().unwrap()[1].speaker, "B");
    assert_eq!(result.summary.as_deref(), Some("- a greeting and a farewell"));
}

#[tokio::test]
async fn submit_omits_summary_type_when_summarization_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/transcript"))
        .and(body_json_string(
            json!({
                "audio_url": "https://cdn/audio",
                "speaker_labels": false,
                "summarization": false
            })
            .to_string(),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "job-2", "status": "queued"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server)
        .submit("https://cdn/audio", &TranscriptionOptions::default())
        .await
        .unwrap();

    assert_eq!(id, "job-2");
}

#[tokio::test]
async fn job_error_status_surfaces_reason() {
    let server = MockServer::start().await;
    mock_upload(&server).await;
    mock_submit(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2/transcript/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-1",
            "status": "error",
            "error": "unsupported media"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .transcribe(vec![0], &TranscriptionOptions::default())
        .await
        .unwrap_err();

    match err {
        Error::Job(reason) => assert_eq!(reason, "unsupported media"),
        other => panic!("expected Job error, got {other:?}"),
    }
}

#[tokio::test]
async fn pending_job_times_out_after_max_polls() {
    let server = MockServer::start().await;
    mock_upload(&server).await;
    mock_submit(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2/transcript/job-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "job-1", "status": "processing"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .transcribe(vec![0], &TranscriptionOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { attempts: 5 }));
}

#[tokio::test]
async fn upload_rejection_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/upload"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).upload(vec![0]).await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus(401)));
}
