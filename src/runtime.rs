//! # Face Event Loop
//!
//! Runs a [`WatchFaceEngine`] on one task. Host callbacks and companion
//! batches arrive as [`FaceEvent`]s on a channel; the engine's pending tick
//! becomes a one-shot sleep. Only this loop touches the engine, so weather
//! state and lifecycle flags need no locking.
//!
//! Events are polled before the timer: a tick that was cancelled by an
//! event already queued never reaches the engine.

use crate::clock::Clock;
use crate::engine::WatchFaceEngine;
use crate::renderer::Canvas;
use crate::snapshot::DisplaySnapshot;
use crate::sync::{EventBatch, SyncTransport};
use embedded_graphics::prelude::Size;
use log::{debug, info};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

/// Host lifecycle callbacks and companion deliveries.
#[derive(Clone, Debug, PartialEq)]
pub enum FaceEvent {
    VisibilityChanged(bool),
    AmbientModeChanged(bool),
    PropertiesChanged { low_bit_ambient: bool },
    WindowInsets { is_round: bool },
    /// Host minute tick
    TimeTick,
    TimeZoneChanged(String),
    DataChanged(EventBatch),
    Destroy,
}

/// Route one event to the matching engine callback.
pub fn dispatch<T, C>(engine: &mut WatchFaceEngine<T, C>, event: FaceEvent)
where
    T: SyncTransport,
    C: Clock,
{
    match event {
        FaceEvent::VisibilityChanged(visible) => engine.on_visibility_changed(visible),
        FaceEvent::AmbientModeChanged(ambient) => engine.on_ambient_mode_changed(ambient),
        FaceEvent::PropertiesChanged { low_bit_ambient } => {
            engine.on_properties_changed(low_bit_ambient)
        }
        FaceEvent::WindowInsets { is_round } => engine.on_apply_window_insets(is_round),
        FaceEvent::TimeTick => engine.on_time_tick(),
        FaceEvent::TimeZoneChanged(zone_id) => engine.on_time_zone_changed(&zone_id),
        FaceEvent::DataChanged(batch) => engine.on_data_changed(batch),
        FaceEvent::Destroy => engine.destroy(),
    }
}

/// Keep the current deadline while the engine still waits for the same
/// token, otherwise start counting the new tick's delay from now.
fn arm<T, C>(
    engine: &WatchFaceEngine<T, C>,
    armed: Option<(u64, Instant)>,
) -> Option<(u64, Instant)>
where
    T: SyncTransport,
    C: Clock,
{
    let tick = engine.pending_tick()?;
    match armed {
        Some((token, deadline)) if token == tick.token => Some((token, deadline)),
        _ => Some((tick.token, Instant::now() + tick.delay)),
    }
}

/// Drive the engine until [`FaceEvent::Destroy`] arrives or every sender is
/// dropped. `on_frame` is called after each drawn frame. Returns the
/// destroyed engine.
pub async fn run<T, C, K, F>(
    mut engine: WatchFaceEngine<T, C>,
    mut events: UnboundedReceiver<FaceEvent>,
    canvas: &mut K,
    bounds: Size,
    mut on_frame: F,
) -> WatchFaceEngine<T, C>
where
    T: SyncTransport,
    C: Clock,
    K: Canvas,
    F: FnMut(&DisplaySnapshot, &mut K),
{
    // Token and deadline of the tick we are sleeping towards
    let mut armed: Option<(u64, Instant)> = None;

    loop {
        if engine.take_redraw_request() {
            let snapshot = engine.draw(&mut *canvas, bounds);
            on_frame(&snapshot, &mut *canvas);
        }

        armed = arm(&engine, armed);
        let deadline = armed.map_or_else(Instant::now, |(_, deadline)| deadline);

        tokio::select! {
            biased;

            event = events.recv() => match event {
                Some(FaceEvent::Destroy) | None => {
                    engine.destroy();
                    break;
                }
                Some(event) => {
                    debug!("event: {:?}", event);
                    dispatch(&mut engine, event);
                }
            },
            _ = sleep_until(deadline), if armed.is_some() => {
                if let Some((token, _)) = armed.take() {
                    engine.on_timer_tick(token);
                    // The delay was measured from the wall clock just now;
                    // start counting before the frame is drawn
                    armed = arm(&engine, armed);
                }
            }
        }
    }

    info!("Face event loop stopped");
    engine
}
