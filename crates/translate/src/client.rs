use serde::Deserialize;
use url::Url;

use crate::Translator;
use crate::error::Error;

/// Source language is fixed; only the target varies.
pub const SOURCE_LANG: &str = "en";

#[derive(Debug, Deserialize)]
struct TranslateEnvelope {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
    #[serde(rename = "responseStatus")]
    response_status: i64,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

/// Client for the external word-translation service.
///
/// `Ok(None)` is the service's explicit no-match answer; transport and
/// parse failures are `Err` and left to the caller's failure policy.
pub struct TranslateClient {
    http: reqwest::Client,
    api_base: Url,
}

impl TranslateClient {
    pub fn new(api_base: &str) -> Result<Self, Error> {
        Ok(Self {
            http: reqwest::Client::new(),
            api_base: Url::parse(api_base)?,
        })
    }

    async fn request(&self, word: &str, target_lang: &str) -> Result<Option<String>, Error> {
        let mut url = self.api_base.join("get")?;
        url.query_pairs_mut()
            .append_pair("q", word)
            .append_pair("langpair", &format!("{SOURCE_LANG}|{target_lang}"));

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status().as_u16()));
        }

        let envelope: TranslateEnvelope = response.json().await?;
        if envelope.response_status != 200 {
            return Ok(None);
        }

        Ok(envelope
            .response_data
            .translated_text
            .filter(|t| !t.trim().is_empty()))
    }
}

impl Translator for TranslateClient {
    async fn translate(&self, word: &str, target_lang: &str) -> Result<Option<String>, Error> {
        self.request(word, target_lang).await
    }
}
