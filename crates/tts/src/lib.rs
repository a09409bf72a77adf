//! Speech output client. Strictly fire-and-forget: nothing downstream
//! consumes a result, so failures are logged and swallowed.

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub struct TtsClient {
    http: reqwest::Client,
    api_base: Url,
}

impl TtsClient {
    pub fn new(api_base: &str) -> Result<Self, Error> {
        Ok(Self {
            http: reqwest::Client::new(),
            api_base: Url::parse(api_base)?,
        })
    }

    /// Ask the speech service to pronounce `word`. Always returns; a
    /// failed request only produces a warning.
    pub async fn speak(&self, word: &str, lang: &str) {
        let url = match self.api_base.join("speak") {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "tts_url_invalid");
                return;
            }
        };

        let result = self
            .http
            .post(url)
            .json(&serde_json::json!({ "text": word, "lang": lang }))
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), word = %word, "tts_request_rejected");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, word = %word, "tts_request_failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn speak_posts_word_and_language() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/speak"))
            .and(body_json_string(
                serde_json::json!({"text": "hello", "lang": "en"}).to_string(),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = TtsClient::new(&(server.uri() + "/")).unwrap();
        client.speak("hello", "en").await;
    }

    #[tokio::test]
    async fn speak_swallows_rejections() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/speak"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = TtsClient::new(&(server.uri() + "/")).unwrap();
        // Must not panic or propagate anything.
        client.speak("hello", "en").await;
    }
}
