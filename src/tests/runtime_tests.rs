//! Event-loop scenarios on a paused tokio clock.
//!
//! The wall clock is a `ManualClock` parked on a whole second, so every
//! rescheduled tick is exactly one second away.

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use embedded_graphics::prelude::Size;
use serde_json::json;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::sleep;
use weather_face_lib::{
    clock::ManualClock,
    config::{Config, WATCHFACE_DATA_PATH},
    engine::WatchFaceEngine,
    renderer::RecordingCanvas,
    runtime::{self, FaceEvent},
    sync::{CompanionHandle, DataItem, DataLayer, DataMap, LocalTransport, SyncTransport},
};

type TestEngine = WatchFaceEngine<LocalTransport, ManualClock>;

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 3).unwrap(), Tz::UTC)
}

fn setup() -> (TestEngine, CompanionHandle) {
    let layer = DataLayer::new();
    let engine = WatchFaceEngine::create(
        Config::default(),
        LocalTransport::new(layer.clone()),
        clock(),
    );
    (engine, CompanionHandle::new(layer))
}

/// Run the loop alongside `script`; returns the destroyed engine and the
/// texts of every frame drawn.
async fn run_script<S, D>(engine: TestEngine, script: S) -> (TestEngine, Vec<Vec<String>>)
where
    S: FnOnce(UnboundedSender<FaceEvent>) -> D,
    D: Future<Output = ()>,
{
    let (events, receiver) = mpsc::unbounded_channel();
    let mut canvas = RecordingCanvas::new();
    let mut frames: Vec<Vec<String>> = Vec::new();

    let (engine, ()) = tokio::join!(
        runtime::run(engine, receiver, &mut canvas, Size::new(240, 240), |_, canvas| {
            frames.push(canvas.texts().into_iter().map(String::from).collect());
            canvas.clear();
        }),
        script(events),
    );
    (engine, frames)
}

#[tokio::test(start_paused = true)]
async fn interactive_face_redraws_every_second() {
    let (engine, _) = setup();
    let (_, frames) = run_script(engine, |events| async move {
        events.send(FaceEvent::VisibilityChanged(true)).unwrap();
        sleep(Duration::from_millis(3500)).await;
        events.send(FaceEvent::Destroy).unwrap();
    })
    .await;

    // Initial frame, the immediate tick, then ticks at 1 s, 2 s and 3 s
    assert_eq!(frames.len(), 5, "frames: {frames:?}");
    assert!(frames.iter().all(|texts| texts[0] == "9:05:03"));
}

#[tokio::test(start_paused = true)]
async fn timer_cancelled_before_it_fires_never_draws() {
    let (engine, _) = setup();
    let (engine, frames) = run_script(engine, |events| async move {
        events.send(FaceEvent::VisibilityChanged(true)).unwrap();
        events.send(FaceEvent::VisibilityChanged(false)).unwrap();
        sleep(Duration::from_secs(3)).await;
        events.send(FaceEvent::Destroy).unwrap();
    })
    .await;

    assert_eq!(frames.len(), 1, "only the initial frame: {frames:?}");
    assert!(engine.pending_tick().is_none());
}

#[tokio::test(start_paused = true)]
async fn ambient_mode_stops_second_ticks() {
    let (engine, _) = setup();
    let (_, frames) = run_script(engine, |events| async move {
        events.send(FaceEvent::VisibilityChanged(true)).unwrap();
        events.send(FaceEvent::AmbientModeChanged(true)).unwrap();
        sleep(Duration::from_secs(5)).await;
        events.send(FaceEvent::TimeTick).unwrap();
        sleep(Duration::from_millis(10)).await;
        events.send(FaceEvent::Destroy).unwrap();
    })
    .await;

    let times: Vec<&str> = frames.iter().map(|texts| texts[0].as_str()).collect();
    assert_eq!(times, vec!["9:05:03", "9:05", "9:05"]);
}

#[tokio::test(start_paused = true)]
async fn companion_push_redraws_with_weather() {
    let (engine, companion) = setup();
    let batch = companion
        .put(DataItem::new(
            WATCHFACE_DATA_PATH,
            DataMap::from_json(json!({"minTemp": "10", "maxTemp": "20", "weatherId": 200})),
        ))
        .unwrap();
    let batch_id = batch.id;

    let (engine, frames) = run_script(engine, |events| async move {
        events.send(FaceEvent::DataChanged(batch)).unwrap();
        sleep(Duration::from_millis(10)).await;
        events.send(FaceEvent::Destroy).unwrap();
    })
    .await;

    assert_eq!(
        frames.last().unwrap(),
        &vec!["9:05:03".to_string(), "10 - 20".to_string()]
    );
    assert_eq!(engine.weather().condition_code, 200);
    assert_eq!(engine.transport().released(), &[batch_id]);
    assert!(!engine.transport().is_connected());
}

#[tokio::test(start_paused = true)]
async fn dropping_every_sender_destroys_the_face() {
    let (engine, _) = setup();
    let (engine, frames) = run_script(engine, |events| async move {
        events.send(FaceEvent::VisibilityChanged(true)).unwrap();
        drop(events);
    })
    .await;

    assert!(!frames.is_empty());
    assert!(engine.pending_tick().is_none());
    assert!(!engine.flags().time_zone_receiver_active);
}

#[test]
fn recreated_face_replays_previous_push() {
    let layer = DataLayer::new();
    let companion = CompanionHandle::new(layer.clone());
    let clock = clock();

    let mut first = WatchFaceEngine::create(
        Config::default(),
        LocalTransport::new(layer.clone()),
        clock.clone(),
    );
    let batch = companion
        .put(DataItem::new(
            WATCHFACE_DATA_PATH,
            DataMap::from_json(json!({"minTemp": "-2", "maxTemp": "4", "weatherId": 601})),
        ))
        .unwrap();
    first.on_data_changed(batch);
    first.destroy();

    let second = WatchFaceEngine::create(Config::default(), LocalTransport::new(layer), clock);
    assert_eq!(second.weather(), first.weather());
}
