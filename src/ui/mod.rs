// ============================================================================
// Module : ui
// ============================================================================
// Interface terminal : formatage, carte de prix, écran complet, clavier
// ============================================================================

pub mod card;      // Vue et rendu de la carte de prix
pub mod dashboard; // Rendu de l'écran complet
pub mod events;    // Gestion des événements clavier
pub mod format;    // Formatage des montants et de l'heure

// Re-exports pour simplifier les imports
pub use card::CardView;
pub use dashboard::render;
pub use events::{Event, EventHandler};
