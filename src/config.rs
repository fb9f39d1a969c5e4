use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub backend_key: String,
    pub trending_limit: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "3000"),
            backend_url: try_load("BACKEND_URL", "http://localhost:54321"),
            backend_key: read_secret("BACKEND_ANON_KEY"),
            trending_limit: try_load("TRENDING_LIMIT", "9"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    match read_to_string(&path) {
        Ok(s) => s.trim().to_string(),
        // not running under docker secrets, fall back to the environment
        Err(_) => try_load(secret_name, ""),
    }
}
