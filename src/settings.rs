use std::env;

use serde::Deserialize;
use tracing::info;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub prefix: Option<String>,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_viacep_url")]
    pub viacep_url: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Absolute swagger UI address. A wildcard bind host is shown as localhost.
    pub fn docs_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            host => host,
        };
        format!("http://{}:{}/swagger-ui", host, self.port)
    }
}

fn default_env() -> String {
    "file".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_url() -> String {
    "sqlite://instance/idosos.db".to_string()
}

fn default_viacep_url() -> String {
    "https://viacep.com.br".to_string()
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("env").unwrap_or(default_env());
    if env_var == "file" {
        info!("using .env file as environtment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environtment as environtment variable");
    }
    Ok(envy::from_env::<Config>()?)
}
