// ============================================================================
// PriceWidget : machine à états de polling
// ============================================================================
// Possède le seul timer du programme, fait un aller-retour réseau par tick
// et transforme le résultat en DisplayState
//
// CONCEPTS RUST :
// 1. Arc<Mutex<>> : état partagé entre les tâches de poll et le rendu
// 2. JoinHandle::abort() : annulation du timer au démontage
// 3. Drop (RAII) : un widget détruit arrête toujours son timer
// ============================================================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Local;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::PriceSource;
use crate::config::POLL_INTERVAL;
use crate::models::DisplayState;

/// État protégé par le mutex
///
/// `epoch` change à chaque montage et démontage : un poll capture l'epoch
/// avant l'appel réseau et n'applique son résultat que s'il n'a pas changé.
struct Inner {
    state: DisplayState,
    epoch: u64,
    unmounted: bool,
}

/// Partie partagée avec les tâches tokio
struct Shared {
    source: Arc<dyn PriceSource>,
    inner: Mutex<Inner>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Un cycle fetch + mise à jour
    async fn poll(&self) {
        let ticket = {
            let inner = self.lock();
            if inner.unmounted {
                debug!("Widget unmounted, skipping poll");
                return;
            }
            inner.epoch
        };

        let outcome = self.source.fetch_btc_usd().await;
        let next = DisplayState::from_outcome(outcome, Local::now());

        let mut inner = self.lock();
        if inner.unmounted || inner.epoch != ticket {
            debug!(ticket, epoch = inner.epoch, "Discarding poll result from a previous mount");
            return;
        }

        match &next {
            DisplayState::Ready(snapshot) => {
                info!(btc_usd = snapshot.btc_price_usd, "Price updated");
            }
            DisplayState::Failed { message, .. } => {
                warn!(error = %message, "Price poll failed");
            }
            DisplayState::Loading => {}
        }
        inner.state = next;
    }
}

/// Widget de prix BTC
pub struct PriceWidget {
    shared: Arc<Shared>,
    poll_interval: Duration,

    /// Tâche du timer récurrent (Some tant que le widget est monté)
    timer: Option<JoinHandle<()>>,
}

impl PriceWidget {
    /// Crée un widget avec la période par défaut (60 s)
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self::with_interval(source, POLL_INTERVAL)
    }

    pub fn with_interval(source: Arc<dyn PriceSource>, poll_interval: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                inner: Mutex::new(Inner {
                    state: DisplayState::Loading,
                    epoch: 0,
                    unmounted: false,
                }),
            }),
            poll_interval,
            timer: None,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Copie de l'état courant, pour le rendu
    pub fn state(&self) -> DisplayState {
        self.shared.lock().state.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    /// Monte le widget : état Loading, poll immédiat, puis un poll par période
    ///
    /// Doit être appelé depuis un contexte tokio (tokio::spawn).
    pub fn mount(&mut self) {
        if self.is_mounted() {
            warn!("Widget already mounted");
            return;
        }

        {
            let mut inner = self.shared.lock();
            inner.state = DisplayState::Loading;
            inner.epoch += 1;
            inner.unmounted = false;
        }

        self.refresh();

        let start = Instant::now() + self.poll_interval;
        self.timer = Some(spawn_timer(Arc::clone(&self.shared), start, self.poll_interval));
        info!(interval_ms = self.poll_interval.as_millis() as u64, "Widget mounted");
    }

    /// Lance un poll en arrière-plan, même chemin qu'un tick du timer
    pub fn refresh(&self) {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move { shared.poll().await });
    }

    /// Exécute un poll et attend son résultat
    pub async fn poll(&self) {
        self.shared.poll().await
    }

    /// Démonte le widget : annule le timer, l'état retenu reste intact
    ///
    /// Retourne true si un timer a été annulé. Les polls en vol ne sont pas
    /// interrompus mais leur résultat sera ignoré.
    pub fn unmount(&mut self) -> bool {
        {
            let mut inner = self.shared.lock();
            if !inner.unmounted {
                inner.unmounted = true;
                inner.epoch += 1;
            }
        }

        match self.timer.take() {
            Some(timer) => {
                timer.abort();
                info!("Widget unmounted, timer cancelled");
                true
            }
            None => false,
        }
    }
}

impl Drop for PriceWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Timer récurrent : chaque tick lance un poll indépendant
///
/// Un poll plus long que la période n'empêche pas le suivant de partir.
fn spawn_timer(shared: Arc<Shared>, start: Instant, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            debug!("Timer tick, starting poll");
            let shared = Arc::clone(&shared);
            tokio::spawn(async move { shared.poll().await });
        }
    })
}

// ============================================================================
// Tests unitaires
// ============================================================================
