//! Postal code (CEP) lookup against the ViaCEP service.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const CEP_LEN: usize = 8;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("CEP deve conter 8 dígitos")]
    InvalidCep,

    #[error("CEP não encontrado")]
    NotFound,

    #[error("Falha na conexão com o serviço de CEP")]
    Unreachable(#[from] reqwest::Error),

    #[error("Falha na conexão com o serviço de CEP")]
    UpstreamStatus(StatusCode),

    /// The upstream answered with something that is not JSON at all,
    /// usually an HTML error page from a proxy.
    #[error("Falha na conexão com o serviço de CEP")]
    UnreadableBody(#[source] serde_json::Error),

    #[error("resposta inválida do serviço de CEP: {0}")]
    InvalidResponse(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Endereco {
    pub logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
}

/// Raw ViaCEP payload. Unknown codes come back as `{"erro": true}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViaCepResponse {
    pub erro: Option<serde_json::Value>,
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl ViaCepResponse {
    pub fn into_endereco(self) -> Result<Endereco, CepError> {
        if self.erro.is_some() {
            return Err(CepError::NotFound);
        }
        Ok(Endereco {
            logradouro: self.logradouro,
            bairro: self.bairro,
            cidade: self.localidade,
            uf: self.uf,
            cep: self.cep,
        })
    }
}

/// Decode a ViaCEP body. A body that is not JSON is reported like a
/// connection failure; JSON of the wrong shape is an internal error.
pub fn parse_viacep_body(body: &str) -> Result<Endereco, CepError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(CepError::UnreadableBody)?;
    if !value.is_object() {
        return Err(CepError::InvalidResponse(format!(
            "objeto JSON esperado, recebido {}",
            value
        )));
    }
    let data: ViaCepResponse =
        serde_json::from_value(value).map_err(|err| CepError::InvalidResponse(err.to_string()))?;
    data.into_endereco()
}

/// Keep only the digits of `cep`; anything other than 8 digits is rejected.
pub fn normalize_cep(cep: &str) -> Result<String, CepError> {
    let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != CEP_LEN {
        return Err(CepError::InvalidCep);
    }
    Ok(digits)
}

#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Look up an already normalized 8-digit code.
    async fn lookup(&self, cep: &str) -> Result<Endereco, CepError>;
}

/// Normalize `cep` and resolve it through `lookup`. Malformed input never
/// reaches the upstream service.
pub async fn find_address(lookup: &dyn AddressLookup, cep: &str) -> Result<Endereco, CepError> {
    let cep = normalize_cep(cep)?;
    lookup.lookup(&cep).await
}

pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Endereco, CepError> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        debug!(url = %url, "query ViaCEP");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CepError::UpstreamStatus(response.status()));
        }
        let body = response.text().await?;
        parse_viacep_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cep_strips_punctuation() -> anyhow::Result<()> {
        assert_eq!(normalize_cep("01001-000")?, "01001000");
        assert_eq!(normalize_cep(" 01.001 000 ")?, "01001000");
        assert_eq!(normalize_cep("01001000")?, "01001000");
        Ok(())
    }

    #[test]
    fn test_normalize_cep_rejects_wrong_length() {
        assert!(matches!(normalize_cep("123"), Err(CepError::InvalidCep)));
        assert!(matches!(normalize_cep(""), Err(CepError::InvalidCep)));
        assert!(matches!(
            normalize_cep("010010001"),
            Err(CepError::InvalidCep)
        ));
        assert!(matches!(normalize_cep("abcdefgh"), Err(CepError::InvalidCep)));
    }

    #[test]
    fn test_viacep_response_mapping() -> anyhow::Result<()> {
        let data: ViaCepResponse = serde_json::from_str(
            r#"{
                "cep": "01001-000",
                "logradouro": "Praça da Sé",
                "complemento": "lado ímpar",
                "bairro": "Sé",
                "localidade": "São Paulo",
                "uf": "SP",
                "ibge": "3550308"
            }"#,
        )?;
        let endereco = data.into_endereco()?;
        assert_eq!(
            endereco,
            Endereco {
                logradouro: "Praça da Sé".to_string(),
                bairro: "Sé".to_string(),
                cidade: "São Paulo".to_string(),
                uf: "SP".to_string(),
                cep: "01001-000".to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_viacep_missing_fields_default_to_empty() -> anyhow::Result<()> {
        let data: ViaCepResponse = serde_json::from_str(r#"{"cep": "01001-000"}"#)?;
        let endereco = data.into_endereco()?;
        assert_eq!(endereco.logradouro, "");
        assert_eq!(endereco.cidade, "");
        assert_eq!(endereco.cep, "01001-000");
        Ok(())
    }

    #[test]
    fn test_viacep_erro_marker_is_not_found() -> anyhow::Result<()> {
        let data: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#)?;
        assert!(matches!(data.into_endereco(), Err(CepError::NotFound)));
        let data: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#)?;
        assert!(matches!(data.into_endereco(), Err(CepError::NotFound)));
        Ok(())
    }

    #[test]
    fn test_parse_viacep_body_not_json() {
        assert!(matches!(
            parse_viacep_body("<html>oops</html>"),
            Err(CepError::UnreadableBody(_))
        ));
        assert!(matches!(parse_viacep_body(""), Err(CepError::UnreadableBody(_))));
    }

    #[test]
    fn test_parse_viacep_body_wrong_shape() {
        assert!(matches!(
            parse_viacep_body("[]"),
            Err(CepError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_viacep_body(r#"{"cep": 1001000}"#),
            Err(CepError::InvalidResponse(_))
        ));
    }

    /// Serve one canned HTTP response on a local port and return its base url.
    async fn serve_once(content_type: &'static str, body: &'static str) -> anyhow::Result<String> {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let resp = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    content_type,
                    body.len(),
                    body
                );
                let _ = socket.write_all(resp.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        Ok(format!("http://{}", addr))
    }

    #[tokio::test]
    async fn test_html_body_is_unreadable() -> anyhow::Result<()> {
        let base_url = serve_once("text/html", "<html>oops</html>").await?;
        let client = ViaCepClient::new(&base_url);
        let res = find_address(&client, "01001-000").await;
        assert!(matches!(res, Err(CepError::UnreadableBody(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_json_body_is_mapped() -> anyhow::Result<()> {
        let base_url = serve_once(
            "application/json",
            r#"{"cep": "01001-000", "localidade": "São Paulo", "uf": "SP"}"#,
        )
        .await?;
        let client = ViaCepClient::new(&base_url);
        let endereco = find_address(&client, "01001000").await?;
        assert_eq!(endereco.cidade, "São Paulo");
        assert_eq!(endereco.uf, "SP");
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        // nothing listens on the discard port
        let client = ViaCepClient::new("http://127.0.0.1:9");
        let res = find_address(&client, "01001-000").await;
        assert!(matches!(res, Err(CepError::Unreachable(_))));
    }
}
