// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub groq_model: String,
    pub leaderboard_file: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let groq_api_key = env::var("GROQ_API_KEY").expect("GROQ_API_KEY must be set");

        let groq_base_url = env::var("GROQ_BASE_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string());

        let groq_model =
            env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        let leaderboard_file =
            env::var("LEADERBOARD_FILE").unwrap_or_else(|_| "leaderboard.json".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            groq_api_key,
            groq_base_url,
            groq_model,
            leaderboard_file,
            rust_log,
        }
    }
}
