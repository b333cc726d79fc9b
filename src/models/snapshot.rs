// ============================================================================
// Structure : PriceSnapshot
// ============================================================================
// Un relevé de prix BTC/USD avec ses deux valeurs dérivées
//
// CONCEPTS RUST :
// 1. Constructeur faillible : Result<Self, E> au lieu de paniquer
// 2. Invariants garantis par construction : les champs dérivés ne peuvent
//    pas diverger du prix brut car seul from_price() les calcule
// ============================================================================

use chrono::{DateTime, Local};

use crate::api::FetchError;

/// Nombre de satoshis dans 1 BTC
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Satoshis par BTC divisés par les cents par dollar (1e8 / 100)
pub const SATS_PER_CENT_NUMERATOR: f64 = 1_000_000.0;

/// Relevé d'un poll réussi
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSnapshot {
    /// Prix d'un BTC en USD (valeur brute de l'API)
    pub btc_price_usd: f64,

    /// Prix d'un satoshi en USD : btc_price_usd / 1e8
    pub satoshi_price_usd: f64,

    /// Satoshis pour un cent US : 1e6 / btc_price_usd
    pub sats_per_cent_usd: f64,

    /// Heure du poll réussi
    pub observed_at: DateTime<Local>,
}

impl PriceSnapshot {
    /// Construit un relevé à partir du prix brut
    ///
    /// Un prix nul, négatif ou non fini est rejeté comme réponse malformée :
    /// 1e6 / 0 donnerait l'infini, qu'on ne doit jamais afficher.
    pub fn from_price(
        btc_price_usd: f64,
        observed_at: DateTime<Local>,
    ) -> Result<Self, FetchError> {
        if !btc_price_usd.is_finite() || btc_price_usd <= 0.0 {
            return Err(FetchError::MalformedResponse);
        }

        Ok(Self {
            btc_price_usd,
            satoshi_price_usd: btc_price_usd / SATS_PER_BTC,
            sats_per_cent_usd: SATS_PER_CENT_NUMERATOR / btc_price_usd,
            observed_at,
        })
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
