// ============================================================================
// Module : models
// ============================================================================
// Structures de données du widget : le relevé de prix et l'état d'affichage
// ============================================================================

pub mod display_state; // Loading / Ready / Failed
pub mod snapshot;      // Relevé de prix et valeurs dérivées

// Re-export des structures principales pour simplifier les imports
pub use display_state::DisplayState;
pub use snapshot::{PriceSnapshot, SATS_PER_BTC, SATS_PER_CENT_NUMERATOR};
