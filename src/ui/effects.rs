//! Executes picker effects on the async runtime.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::geo::GeoLookupService;
use crate::picker::Effect;
use crate::ui::events::AppEvent;

const EFFECT_CHANNEL_SIZE: usize = 32;

/// Spawns the effect loop and returns the sender the UI pushes effects into.
///
/// Each effect runs in its own task, so a slow municipality fetch does not
/// hold back a newer one. Results are posted as [`AppEvent::Picker`];
/// failures are logged and dropped, leaving the affected list unchanged.
pub fn spawn_effect_runner(
    handle: &Handle,
    service: Arc<dyn GeoLookupService>,
    events: std_mpsc::Sender<AppEvent>,
) -> (mpsc::Sender<Effect>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<Effect>(EFFECT_CHANNEL_SIZE);

    let join = handle.spawn(async move {
        while let Some(effect) = rx.recv().await {
            let service = Arc::clone(&service);
            let events = events.clone();
            tokio::spawn(async move {
                let label = effect.label();
                tracing::debug!(effect = %label, "Running effect");
                match effect.execute(service.as_ref()).await {
                    Ok(intent) => {
                        if events.send(AppEvent::Picker(intent)).is_err() {
                            tracing::trace!(effect = %label, "Result dropped (UI gone)");
                        }
                    }
                    Err(err) => {
                        tracing::error!(effect = %label, kind = err.kind(), "Effect failed: {}", err);
                    }
                }
            });
        }
        tracing::debug!("Effect channel closed");
    });

    (tx, join)
}
