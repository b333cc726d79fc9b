// ============================================================================
// Module : api
// ============================================================================
// Source du prix BTC/USD : l'API CoinGecko, derrière un trait pour que le
// widget puisse être testé sans réseau
// ============================================================================

pub mod coingecko; // Client HTTP CoinGecko
pub mod error;     // FetchError

pub use coingecko::CoinGeckoClient;
pub use error::FetchError;

#[cfg(test)]
use mockall::automock;

/// Fournit le prix courant d'un BTC en USD
///
/// CONCEPT RUST : async-trait
/// - Les méthodes async dans un trait objet (dyn) passent par async_trait
/// - automock génère MockPriceSource pour les tests
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Un aller-retour réseau, sans retry
    async fn fetch_btc_usd(&self) -> Result<f64, FetchError>;
}
