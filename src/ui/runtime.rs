use crate::geo::GeoLookupService;
use crate::ui::app::App;
use crate::ui::effects::spawn_effect_runner;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive picker until the user quits.
///
/// The UI loop owns the state and runs on the calling thread; fetches run on
/// `handle`.
pub fn run(
    handle: &Handle,
    service: Arc<dyn GeoLookupService>,
    service_label: &str,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let (effect_tx, effect_task) = spawn_effect_runner(handle, service, events.sender());

    let mut app = App::new();
    app.set_effect_sender(effect_tx);
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app, service_label))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Picker(intent)) => app.apply(intent),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    effect_task.abort();
    drop(guard);
    tracing::info!("Location picker closed");
    Ok(())
}
