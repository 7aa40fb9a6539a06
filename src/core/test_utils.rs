use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use fake::{Fake, Faker};
use reqwest::StatusCode;
use sqlx::SqlitePool;

use crate::{
    core::cep::{parse_viacep_body, AddressLookup, CepError, Endereco},
    settings::Config,
    AppState,
};

pub fn generate_random<T: fake::Dummy<fake::Faker>>() -> T {
    Faker.fake()
}

/// What the stub answers for a given code.
#[derive(Clone)]
pub enum StubAnswer {
    Found(Endereco),
    Unknown,
    Unreachable,
    NotJson,
    WrongShape,
}

/// In-memory `AddressLookup` that records every code it was asked about.
#[derive(Default)]
pub struct StubAddressLookup {
    answers: HashMap<String, StubAnswer>,
    calls: Mutex<Vec<String>>,
}

impl StubAddressLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, cep: &str, answer: StubAnswer) -> Self {
        self.answers.insert(cep.to_string(), answer);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|x| x.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AddressLookup for StubAddressLookup {
    async fn lookup(&self, cep: &str) -> Result<Endereco, CepError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(cep.to_string());
        }
        match self.answers.get(cep) {
            Some(StubAnswer::Found(val)) => Ok(val.clone()),
            Some(StubAnswer::Unreachable) => Err(CepError::UpstreamStatus(
                StatusCode::SERVICE_UNAVAILABLE,
            )),
            Some(StubAnswer::NotJson) => parse_viacep_body("<html>oops</html>"),
            Some(StubAnswer::WrongShape) => parse_viacep_body("[]"),
            Some(StubAnswer::Unknown) | None => Err(CepError::NotFound),
        }
    }
}

pub fn se_endereco() -> Endereco {
    Endereco {
        logradouro: "Praça da Sé".to_string(),
        bairro: "Sé".to_string(),
        cidade: "São Paulo".to_string(),
        uf: "SP".to_string(),
        cep: "01001-000".to_string(),
    }
}

pub fn test_config() -> Config {
    Config {
        env: "server".to_string(),
        host: "127.0.0.1".to_string(),
        port: 5000,
        prefix: None,
        database_url: "sqlite::memory:".to_string(),
        viacep_url: "http://127.0.0.1:9".to_string(),
        log_dir: None,
    }
}

pub fn generate_app_state(pool: SqlitePool, lookup: Arc<StubAddressLookup>) -> Arc<AppState> {
    Arc::new(AppState {
        db: pool,
        address_lookup: lookup,
    })
}
