// ============================================================================
// Enum : DisplayState
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Un seul état actif à la fois (chargement, succès, échec)
// - Chaque poll remplace l'état entier : pas de données périmées
//   affichées à côté d'une erreur
// ============================================================================

use chrono::{DateTime, Local};

use crate::api::FetchError;
use crate::models::PriceSnapshot;

/// État d'affichage du widget
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    /// Aucun poll résolu pour l'instant
    #[default]
    Loading,

    /// Le dernier poll a réussi
    Ready(PriceSnapshot),

    /// Le dernier poll a échoué
    Failed {
        message: String,
        attempted_at: DateTime<Local>,
    },
}

impl DisplayState {
    /// Convertit l'issue d'un poll en nouvel état
    ///
    /// C'est le seul endroit où une erreur de fetch devient un message
    /// affichable : l'appelant ne voit jamais de Result.
    pub fn from_outcome(outcome: Result<f64, FetchError>, now: DateTime<Local>) -> Self {
        match outcome.and_then(|price| PriceSnapshot::from_price(price, now)) {
            Ok(snapshot) => DisplayState::Ready(snapshot),
            Err(e) => DisplayState::Failed {
                message: e.to_string(),
                attempted_at: now,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DisplayState::Failed { .. })
    }

    /// Retourne le relevé si le dernier poll a réussi
    pub fn snapshot(&self) -> Option<&PriceSnapshot> {
        match self {
            DisplayState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        assert!(DisplayState::default().is_loading());
    }

    #[test]
    fn test_success_outcome_becomes_ready() {
        let now = Local::now();
        let state = DisplayState::from_outcome(Ok(50_000.0), now);

        let snapshot = state.snapshot().expect("ready state");
        assert_eq!(snapshot.btc_price_usd, 50_000.0);
        assert_eq!(snapshot.observed_at, now);
    }

    #[test]
    fn test_failure_messages() {
        let now = Local::now();
        let cases = [
            (FetchError::RateLimited, "Rate limited! Try again later."),
            (FetchError::HttpError(503), "HTTP error! Status: 503"),
            (FetchError::MalformedResponse, "Unexpected API response format."),
            (
                FetchError::TransportFailure("connection refused".to_string()),
                "connection refused",
            ),
        ];

        for (error, expected) in cases {
            let state = DisplayState::from_outcome(Err(error), now);
            assert_eq!(
                state,
                DisplayState::Failed {
                    message: expected.to_string(),
                    attempted_at: now,
                }
            );
        }
    }

    #[test]
    fn test_zero_price_fails_instead_of_infinity() {
        let state = DisplayState::from_outcome(Ok(0.0), Local::now());
        assert!(state.is_failed());
        assert!(state.snapshot().is_none());
    }
}
