// ============================================================================
// Structure : App
// ============================================================================
// État de l'application TUI : le widget de prix et le drapeau d'exécution
//
// PATTERN : "Application State"
// - Le rendu lit depuis App
// - Les touches passent par les méthodes de App
// ============================================================================

use tracing::info;

use crate::widget::PriceWidget;

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    running: bool,

    /// Le widget de prix (possède le timer de rafraîchissement)
    widget: PriceWidget,
}

impl App {
    pub fn new(widget: PriceWidget) -> Self {
        Self {
            running: true,
            widget,
        }
    }

    /// Monte le widget : premier poll + timer
    ///
    /// Doit être appelé dans un contexte tokio.
    pub fn start(&mut self) {
        self.widget.mount();
    }

    /// Poll immédiat demandé par l'utilisateur
    pub fn refresh(&self) {
        info!("User requested refresh");
        self.widget.refresh();
    }

    /// Quitte l'application et démonte le widget
    pub fn quit(&mut self) {
        self.running = false;
        self.widget.unmount();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn widget(&self) -> &PriceWidget {
        &self.widget
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::MockPriceSource;

    fn app_with_price(price: f64) -> App {
        let mut source = MockPriceSource::new();
        source.expect_fetch_btc_usd().returning(move || Ok(price));
        App::new(PriceWidget::new(Arc::new(source)))
    }

    #[tokio::test]
    async fn test_app_starts_running_and_loading() {
        let app = app_with_price(50_000.0);
        assert!(app.is_running());
        assert!(!app.widget().is_mounted());
        assert!(app.widget().state().is_loading());
    }

    #[tokio::test]
    async fn test_start_mounts_widget_and_polls() {
        let mut app = app_with_price(50_000.0);
        app.start();
        assert!(app.widget().is_mounted());

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(app.widget().state().snapshot().is_some());

        app.quit();
    }

    #[tokio::test]
    async fn test_quit_unmounts_widget() {
        let mut app = app_with_price(50_000.0);
        app.start();

        app.quit();
        assert!(!app.is_running());
        assert!(!app.widget().is_mounted());
    }
}
