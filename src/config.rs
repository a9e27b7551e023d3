use dotenvy::dotenv;
use std::env;

use crate::client;

/// Runtime configuration for the server binary, read from the environment
/// (with `.env` support). Built explicitly by the caller and passed down;
/// nothing here is process-global.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Config {
            bind_addr: get_env_or_default("ANSC_BIND_ADDR", "0.0.0.0:3000"),
            base_url: get_env_or_default("ANSC_BASE_URL", client::DEFAULT_BASE_URL),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
