//! Échecs possibles d'un fetch de prix

use thiserror::Error;

/// Taxonomie des échecs d'un poll
///
/// Le `Display` de chaque variante est le message montré à l'utilisateur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// HTTP 429
    #[error("Rate limited! Try again later.")]
    RateLimited,

    /// Tout autre statut hors 2xx
    #[error("HTTP error! Status: {0}")]
    HttpError(u16),

    /// JSON invalide ou champ bitcoin.usd absent / non positif
    #[error("Unexpected API response format.")]
    MalformedResponse,

    /// Erreur réseau (DNS, connexion, timeout, lecture du corps)
    #[error("{0}")]
    TransportFailure(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::TransportFailure(e.to_string())
    }
}
