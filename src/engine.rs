//! # Watch Face Engine
//!
//! The single owner of lifecycle flags and weather state. Every host
//! callback, timer tick and companion batch lands here, one at a time, and
//! the engine decides what the scheduler should do and when a frame is due.
//!
//! The engine never draws on its own initiative: state changes set a redraw
//! request which the event loop collects with
//! [`WatchFaceEngine::take_redraw_request`] before calling
//! [`WatchFaceEngine::draw`].

use crate::clock::{parse_zone, Clock};
use crate::config::Config;
use crate::renderer::{Canvas, FrameRenderer};
use crate::scheduler::{PendingTick, RedrawScheduler};
use crate::snapshot::DisplaySnapshot;
use crate::sync::{EventBatch, SyncIngestor, SyncTransport};
use crate::{DisplayGeometry, LifecycleFlags, WeatherState};
use chrono::DateTime;
use chrono_tz::Tz;
use embedded_graphics::prelude::Size;
use log::{debug, info, warn};

pub struct WatchFaceEngine<T, C> {
    config: Config,
    flags: LifecycleFlags,
    weather: WeatherState,
    geometry: DisplayGeometry,
    zone: Tz,
    time: DateTime<Tz>,
    time_anti_alias: bool,
    redraw_requested: bool,
    scheduler: RedrawScheduler,
    ingestor: SyncIngestor,
    renderer: FrameRenderer,
    transport: T,
    clock: C,
}

impl<T, C> WatchFaceEngine<T, C>
where
    T: SyncTransport,
    C: Clock,
{
    /// Build the engine, connect to the companion and replay stored items.
    ///
    /// A transport that cannot connect or list its items leaves the face on
    /// default weather; nothing here fails.
    pub fn create(config: Config, mut transport: T, clock: C) -> Self {
        let mut weather = WeatherState::default();
        let ingestor = SyncIngestor::new(config.sync.path.clone());

        match transport.connect() {
            Ok(()) => {
                info!("Connected to companion data layer");
                match transport.data_items() {
                    Ok(items) => {
                        let applied = ingestor.replay(&items, &mut weather);
                        info!("Replayed {} of {} stored items", applied, items.len());
                    }
                    Err(e) => warn!("Listing stored items failed: {}", e),
                }
            }
            Err(e) => {
                warn!("Companion connection failed: {}", e);
                warn!("Showing default weather");
            }
        }

        let zone = clock.system_zone();
        let time = clock.now().with_timezone(&zone);

        WatchFaceEngine {
            geometry: config.geometry(false),
            scheduler: RedrawScheduler::new(config.display.interactive_update_ms),
            renderer: FrameRenderer::from_config(&config),
            config,
            flags: LifecycleFlags::default(),
            weather,
            zone,
            time,
            time_anti_alias: true,
            redraw_requested: true,
            ingestor,
            transport,
            clock,
        }
    }

    pub fn flags(&self) -> LifecycleFlags {
        self.flags
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The tick the event loop should currently be waiting for.
    pub fn pending_tick(&self) -> Option<PendingTick> {
        self.scheduler.pending()
    }

    /// Whether a frame is due; clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }

    fn update_timer(&mut self) {
        self.scheduler.reconcile(self.flags.timer_should_run());
    }

    fn resync_time(&mut self) {
        self.time = self.clock.now().with_timezone(&self.zone);
    }

    pub fn on_visibility_changed(&mut self, visible: bool) {
        debug!("visibility changed: {}", visible);
        self.flags.visible = visible;

        if visible {
            self.register_time_zone_receiver();
            // The zone may have changed while we were hidden
            self.zone = self.clock.system_zone();
            self.resync_time();
        } else {
            self.unregister_time_zone_receiver();
        }

        self.update_timer();
    }

    fn register_time_zone_receiver(&mut self) {
        if self.flags.time_zone_receiver_active {
            return;
        }
        self.flags.time_zone_receiver_active = true;
        debug!("time zone receiver registered");
    }

    fn unregister_time_zone_receiver(&mut self) {
        if !self.flags.time_zone_receiver_active {
            return;
        }
        self.flags.time_zone_receiver_active = false;
        debug!("time zone receiver unregistered");
    }

    pub fn on_ambient_mode_changed(&mut self, ambient: bool) {
        if self.flags.ambient != ambient {
            debug!("ambient mode: {}", ambient);
            self.flags.ambient = ambient;
            if self.flags.low_bit_ambient {
                self.time_anti_alias = !ambient;
            }
            self.invalidate();
        }

        // Whether the timer runs depends on visibility as well
        self.update_timer();
    }

    pub fn on_properties_changed(&mut self, low_bit_ambient: bool) {
        debug!("low-bit ambient: {}", low_bit_ambient);
        self.flags.low_bit_ambient = low_bit_ambient;
    }

    /// Pick the dimension preset for the reported screen shape.
    pub fn on_apply_window_insets(&mut self, is_round: bool) {
        self.geometry = self.config.geometry(is_round);
        debug!("applied {} geometry", if is_round { "round" } else { "rectangular" });
    }

    /// Time-zone broadcast. Ignored while the receiver is unregistered.
    pub fn on_time_zone_changed(&mut self, zone_id: &str) {
        if !self.flags.time_zone_receiver_active {
            debug!("time zone change to {} ignored, receiver inactive", zone_id);
            return;
        }
        self.zone = parse_zone(zone_id).unwrap_or_else(|| {
            warn!("Unknown time zone {:?}, using UTC", zone_id);
            Tz::UTC
        });
        self.resync_time();
        self.invalidate();
    }

    /// Host minute tick; arrives in ambient mode too.
    pub fn on_time_tick(&mut self) {
        self.invalidate();
    }

    /// Scheduler tick delivered by the event loop. Returns false if the token
    /// was cancelled or superseded.
    pub fn on_timer_tick(&mut self, token: u64) -> bool {
        if !self.scheduler.fire(token) {
            debug!("dropping stale tick {}", token);
            return false;
        }
        self.invalidate();
        let now_ms = self.clock.now().timestamp_millis();
        self.scheduler.reschedule(self.flags.timer_should_run(), now_ms);
        true
    }

    /// Live batch from the companion. Always released afterwards.
    pub fn on_data_changed(&mut self, batch: EventBatch) {
        let applied = self.ingestor.ingest_batch(&batch, &mut self.weather);
        if applied > 0 {
            self.invalidate();
        }
        self.transport.release(batch.id);
    }

    /// State of the next frame at the current instant.
    pub fn snapshot(&mut self) -> DisplaySnapshot {
        self.resync_time();
        DisplaySnapshot::at(
            &self.time,
            self.flags.ambient,
            self.time_anti_alias,
            self.weather.clone(),
            self.geometry,
        )
    }

    pub fn draw<K: Canvas + ?Sized>(&mut self, canvas: &mut K, bounds: Size) -> DisplaySnapshot {
        let snapshot = self.snapshot();
        self.renderer.render(&snapshot, canvas, bounds);
        self.redraw_requested = false;
        snapshot
    }

    /// Tear down: stop the timer, drop the receiver, leave the data layer.
    pub fn destroy(&mut self) {
        self.scheduler.cancel();
        self.unregister_time_zone_receiver();
        self.transport.disconnect();
        info!("Watch face destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::WATCHFACE_DATA_PATH;
    use crate::icons::WeatherIcon;
    use crate::renderer::RecordingCanvas;
    use crate::sync::{CompanionHandle, DataItem, DataLayer, DataMap, LocalTransport};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    type TestEngine = WatchFaceEngine<LocalTransport, ManualClock>;

    fn clock() -> ManualClock {
        ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 3).unwrap(),
            Tz::UTC,
        )
    }

    fn weather_item(data: serde_json::Value) -> DataItem {
        DataItem::new(WATCHFACE_DATA_PATH, DataMap::from_json(data))
    }

    fn engine() -> (TestEngine, CompanionHandle, ManualClock) {
        let layer = DataLayer::new();
        let clock = clock();
        let engine = WatchFaceEngine::create(
            Config::default(),
            LocalTransport::new(layer.clone()),
            clock.clone(),
        );
        (engine, CompanionHandle::new(layer), clock)
    }

    #[test]
    fn test_create_defaults() {
        let (mut engine, _, _) = engine();
        assert_eq!(engine.weather(), &WeatherState::default());
        assert!(!engine.geometry().is_round);
        assert!(engine.transport().is_connected());
        assert!(engine.pending_tick().is_none());
        // First frame is always due
        assert!(engine.take_redraw_request());
        assert!(!engine.take_redraw_request());
    }

    #[test]
    fn test_create_replays_stored_items() {
        let layer = DataLayer::new();
        let companion = CompanionHandle::new(layer.clone());
        companion
            .put(weather_item(json!({"minTemp": "3", "maxTemp": "8", "weatherId": 511})))
            .unwrap();

        let engine: TestEngine =
            WatchFaceEngine::create(Config::default(), LocalTransport::new(layer), clock());
        assert_eq!(engine.weather().temperature_range(), Some(("3", "8")));
        assert_eq!(engine.weather().condition_code, 511);
    }

    #[test]
    fn test_unreachable_companion_keeps_defaults() {
        let layer = DataLayer::new();
        CompanionHandle::new(layer.clone())
            .put(weather_item(json!({"weatherId": 200})))
            .unwrap();

        let engine: TestEngine =
            WatchFaceEngine::create(Config::default(), LocalTransport::unreachable(layer), clock());
        assert_eq!(engine.weather(), &WeatherState::default());
        assert!(!engine.transport().is_connected());
    }

    #[test]
    fn test_timer_runs_only_visible_and_interactive() {
        let (mut engine, _, _) = engine();
        for (visible, ambient) in [(false, false), (false, true), (true, false), (true, true)] {
            engine.on_visibility_changed(visible);
            engine.on_ambient_mode_changed(ambient);
            assert_eq!(
                engine.pending_tick().is_some(),
                visible && !ambient,
                "visible={visible} ambient={ambient}"
            );
        }
    }

    #[test]
    fn test_visibility_toggles_time_zone_receiver() {
        let (mut engine, _, clock) = engine();
        assert!(!engine.flags().time_zone_receiver_active);

        clock.set_system_zone(Tz::Europe__Berlin);
        engine.on_visibility_changed(true);
        assert!(engine.flags().time_zone_receiver_active);
        assert_eq!(engine.zone(), Tz::Europe__Berlin);

        engine.on_visibility_changed(true);
        assert!(engine.flags().time_zone_receiver_active);

        engine.on_visibility_changed(false);
        assert!(!engine.flags().time_zone_receiver_active);
    }

    #[test]
    fn test_time_zone_change_only_while_registered() {
        let (mut engine, _, _) = engine();
        engine.on_time_zone_changed("Asia/Tokyo");
        assert_eq!(engine.zone(), Tz::UTC);

        engine.on_visibility_changed(true);
        engine.on_time_zone_changed("Asia/Tokyo");
        assert_eq!(engine.zone(), Tz::Asia__Tokyo);
        // 09:05:03 UTC is 18:05:03 in Tokyo
        assert_eq!(engine.snapshot().time_text(), "18:05:03");

        engine.on_time_zone_changed("Nowhere/Special");
        assert_eq!(engine.zone(), Tz::UTC);
    }

    #[test]
    fn test_ambient_change_is_idempotent() {
        let (mut engine, _, _) = engine();
        engine.take_redraw_request();

        engine.on_ambient_mode_changed(false);
        assert!(!engine.take_redraw_request(), "unchanged value must not redraw");

        engine.on_ambient_mode_changed(true);
        assert!(engine.take_redraw_request());
        engine.on_ambient_mode_changed(true);
        assert!(!engine.take_redraw_request());
    }

    #[test]
    fn test_low_bit_ambient_disables_anti_alias() {
        let (mut engine, _, _) = engine();
        engine.on_ambient_mode_changed(true);
        assert!(engine.snapshot().anti_alias, "only low-bit displays degrade");
        engine.on_ambient_mode_changed(false);

        engine.on_properties_changed(true);
        engine.on_ambient_mode_changed(true);
        let snapshot = engine.snapshot();
        assert!(snapshot.ambient);
        assert!(!snapshot.anti_alias);

        engine.on_ambient_mode_changed(false);
        assert!(engine.snapshot().anti_alias);
    }

    #[test]
    fn test_window_insets_select_preset() {
        let (mut engine, _, _) = engine();
        engine.on_apply_window_insets(true);
        assert_eq!(engine.geometry(), Config::default().geometry(true));
        engine.on_apply_window_insets(false);
        assert_eq!(engine.geometry(), Config::default().geometry(false));
    }

    #[test]
    fn test_timer_tick_reschedules_on_boundary() {
        let (mut engine, _, clock) = engine();
        engine.on_visibility_changed(true);
        let first = engine.pending_tick().unwrap();
        engine.take_redraw_request();

        clock.advance(chrono::Duration::milliseconds(250));
        assert!(engine.on_timer_tick(first.token));
        assert!(engine.take_redraw_request());

        let next = engine.pending_tick().unwrap();
        assert_eq!(next.delay, std::time::Duration::from_millis(750));
        assert!(!engine.on_timer_tick(first.token), "tokens fire once");
    }

    #[test]
    fn test_cancelled_tick_is_dropped() {
        let (mut engine, _, _) = engine();
        engine.on_visibility_changed(true);
        let tick = engine.pending_tick().unwrap();
        engine.on_visibility_changed(false);
        engine.take_redraw_request();

        assert!(!engine.on_timer_tick(tick.token));
        assert!(!engine.take_redraw_request());
        assert!(engine.pending_tick().is_none());
    }

    #[test]
    fn test_data_batch_updates_weather_and_is_released() {
        let (mut engine, companion, _) = engine();
        engine.take_redraw_request();

        let batch = companion
            .put(weather_item(json!({"minTemp": "10", "maxTemp": "20", "weatherId": 801})))
            .unwrap();
        let id = batch.id;
        engine.on_data_changed(batch);

        assert!(engine.take_redraw_request());
        assert_eq!(engine.weather().condition_code, 801);
        assert_eq!(engine.transport().released(), &[id]);

        let mut canvas = RecordingCanvas::new();
        engine.draw(&mut canvas, Size::new(240, 240));
        assert_eq!(canvas.texts(), vec!["9:05:03", "10 - 20"]);
        assert_eq!(canvas.icons(), vec![WeatherIcon::LightClouds]);
    }

    #[test]
    fn test_foreign_batch_is_released_without_redraw() {
        let (mut engine, companion, _) = engine();
        engine.take_redraw_request();

        let batch = companion
            .put(DataItem::new("/elsewhere", DataMap::from_json(json!({"weatherId": 200}))))
            .unwrap();
        let id = batch.id;
        engine.on_data_changed(batch);

        assert!(!engine.take_redraw_request());
        assert_eq!(engine.weather(), &WeatherState::default());
        assert_eq!(engine.transport().released(), &[id]);
    }

    #[test]
    fn test_draw_reads_clock_each_frame() {
        let (mut engine, _, clock) = engine();
        let mut canvas = RecordingCanvas::new();
        engine.draw(&mut canvas, Size::new(240, 240));
        assert_eq!(canvas.texts()[0], "9:05:03");

        clock.advance(chrono::Duration::seconds(60));
        engine.on_ambient_mode_changed(true);
        canvas.clear();
        engine.draw(&mut canvas, Size::new(240, 240));
        assert_eq!(canvas.texts()[0], "9:06");
    }

    #[test]
    fn test_destroy_tears_down() {
        let (mut engine, _, _) = engine();
        engine.on_visibility_changed(true);
        assert!(engine.pending_tick().is_some());

        engine.destroy();
        assert!(engine.pending_tick().is_none());
        assert!(!engine.flags().time_zone_receiver_active);
        assert!(!engine.transport().is_connected());
    }
}
