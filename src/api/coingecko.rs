// ============================================================================
// API Client : CoinGecko
// ============================================================================
// Récupère le prix BTC/USD depuis l'endpoint "simple/price" de CoinGecko
//
// CONCEPTS RUST :
// 1. async/await : la requête ne bloque pas le thread
// 2. Serde : le JSON est validé contre un schéma explicite avant usage
// 3. Erreurs typées : chaque échec est classé dans FetchError
// ============================================================================

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::api::{FetchError, PriceSource};
use crate::config::Config;

// ============================================================================
// Schéma de la réponse JSON
// ============================================================================
// CoinGecko retourne {"bitcoin": {"usd": 50000}}
// Si un champ manque ou n'est pas un nombre, serde refuse la désérialisation
// ============================================================================

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: UsdQuote,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    usd: f64,
}

/// Client HTTP vers CoinGecko
pub struct CoinGeckoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CoinGeckoClient {
    /// Crée le client à partir de la configuration
    ///
    /// Le reqwest::Client est construit une seule fois et réutilisé à chaque
    /// poll (pool de connexions partagé).
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .context("Échec de la création du client HTTP")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl PriceSource for CoinGeckoClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_btc_usd(&self) -> Result<f64, FetchError> {
        debug!("Sending HTTP request to CoinGecko");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");
        check_status(status)?;

        let body = response.text().await?;
        let price = parse_price_body(&body)?;

        info!(btc_usd = price, "Fetched BTC price");
        Ok(price)
    }
}

/// Classe un statut HTTP : 2xx passe, 429 est traité à part
fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }

    warn!(status = %status, "CoinGecko returned error status");
    if status == StatusCode::TOO_MANY_REQUESTS {
        Err(FetchError::RateLimited)
    } else {
        Err(FetchError::HttpError(status.as_u16()))
    }
}

/// Extrait bitcoin.usd du corps JSON
///
/// Le prix doit être un nombre fini strictement positif.
pub fn parse_price_body(body: &str) -> Result<f64, FetchError> {
    let parsed: SimplePriceResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Unexpected CoinGecko response body");
        FetchError::MalformedResponse
    })?;

    let price = parsed.bitcoin.usd;
    if !price.is_finite() || price <= 0.0 {
        warn!(price, "CoinGecko returned a non-positive price");
        return Err(FetchError::MalformedResponse);
    }

    Ok(price)
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_float_prices() {
        assert_eq!(parse_price_body(r#"{"bitcoin":{"usd":50000}}"#), Ok(50_000.0));
        assert_eq!(parse_price_body(r#"{"bitcoin":{"usd":64321.5}}"#), Ok(64_321.5));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"bitcoin":{"usd":42000,"eur":39000},"ethereum":{"usd":2500}}"#;
        assert_eq!(parse_price_body(body), Ok(42_000.0));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        let bodies = [
            "",
            "not json",
            "{}",
            r#"{"bitcoin":{}}"#,
            r#"{"bitcoin":{"usd":"50000"}}"#,
            r#"{"bitcoin":{"usd":null}}"#,
            r#"{"bitcoin":null}"#,
            r#"{"bitcoin":{"usd":0}}"#,
            r#"{"bitcoin":{"usd":-12.5}}"#,
        ];

        for body in bodies {
            assert_eq!(
                parse_price_body(body),
                Err(FetchError::MalformedResponse),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(check_status(StatusCode::TOO_MANY_REQUESTS), Err(FetchError::RateLimited));
        assert_eq!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(FetchError::HttpError(500))
        );
        assert_eq!(check_status(StatusCode::NOT_FOUND), Err(FetchError::HttpError(404)));
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = Config {
            endpoint: "http://127.0.0.1:1/price".to_string(),
            ..Config::default()
        };
        let client = CoinGeckoClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:1/price");
    }

    // Port 1 : rien n'écoute, la connexion est refusée immédiatement
    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        let config = Config {
            endpoint: "http://127.0.0.1:1/price".to_string(),
            ..Config::default()
        };
        let client = CoinGeckoClient::new(&config).unwrap();

        let result = client.fetch_btc_usd().await;
        assert!(matches!(result, Err(FetchError::TransportFailure(_))));
    }
}
