use std::sync::OnceLock;

use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub data_dir: Option<String>,

    pub transcribe_api_base: String,
    pub transcribe_api_key: String,
    pub translate_api_base: String,
    #[serde(default)]
    pub tts_api_base: Option<String>,
}

static ENV: OnceLock<Env> = OnceLock::new();

pub fn env() -> &'static Env {
    ENV.get_or_init(|| {
        let _ = dotenvy::dotenv();
        envy::from_env().expect("Failed to load environment")
    })
}
