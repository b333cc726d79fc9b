// ============================================================================
// Configuration
// ============================================================================
// Valeurs compilées : pas de fichier de config, pas de variable d'environnement
// (à part RUST_LOG pour le filtre de logs)
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Endpoint CoinGecko pour le prix BTC/USD
pub const COINGECKO_SIMPLE_PRICE_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

/// Période de rafraîchissement : 60 000 ms
pub const POLL_INTERVAL: Duration = Duration::from_millis(60_000);

/// Timeout d'une requête HTTP
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Nom de l'application (logs, titre)
pub const APP_NAME: &str = "cryptocoaster";

/// Paramètres d'exécution
#[derive(Debug, Clone)]
pub struct Config {
    /// URL interrogée à chaque poll
    pub endpoint: String,

    /// Intervalle entre deux polls
    pub poll_interval: Duration,

    /// Timeout par requête
    pub request_timeout: Duration,

    /// User-Agent envoyé à l'API
    pub user_agent: String,

    /// Répertoire des fichiers de logs
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: COINGECKO_SIMPLE_PRICE_URL.to_string(),
            poll_interval: POLL_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
            user_agent: format!("{}/{}", APP_NAME, env!("CARGO_PKG_VERSION")),
            log_dir: default_log_dir(),
        }
    }
}

/// Répertoire de logs : ~/.local/share/cryptocoaster/logs sur Linux,
/// ./logs si le répertoire de données n'est pas connu
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, COINGECKO_SIMPLE_PRICE_URL);
        assert_eq!(config.poll_interval.as_millis(), 60_000);
        assert!(config.user_agent.starts_with("cryptocoaster/"));
        assert!(config.log_dir.ends_with("logs"));
    }
}
