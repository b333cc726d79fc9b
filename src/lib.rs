// ============================================================================
// Crypto Coaster - Library
// ============================================================================
// Widget terminal du prix BTC/USD : polling CoinGecko, valeurs dérivées
// (prix du satoshi, sats par cent) et rendu ratatui
// ============================================================================

pub mod api;    // Source du prix (CoinGecko)
pub mod app;    // État de l'application
pub mod config; // Valeurs par défaut (endpoint, période, logs)
pub mod models; // PriceSnapshot, DisplayState
pub mod ui;     // Interface utilisateur
pub mod widget; // PriceWidget : machine à états de polling
