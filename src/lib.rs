//! # Weather Face Core Library
//!
//! This library provides the display-state synchronization core of a wearable
//! watch face that shows the time together with weather data pushed from a
//! paired companion device.
//!
//! ## Design Philosophy
//!
//! ### Three Input Streams, One Frame
//! The face reacts to three independent sources of change:
//! - **Wall-clock ticks**: a once-per-second redraw timer while interactive,
//!   plus the host's minute tick
//! - **Lifecycle events**: visibility, ambient mode, low-bit display property,
//!   screen shape and time-zone changes
//! - **Companion pushes**: weather payloads delivered by the sync transport
//!
//! All three are serialized onto a single event context (see [`runtime`]) and
//! folded into one [`engine::WatchFaceEngine`] which rebuilds an immutable
//! [`snapshot::DisplaySnapshot`] for every frame.
//!
//! ### Collaborators as Seams
//! - [`renderer::Canvas`]: the draw-call sink (an embedded-graphics adapter is
//!   provided)
//! - [`sync::SyncTransport`]: the opaque companion data layer
//! - [`clock::Clock`]: the wall clock and the system time zone
//!
//! ## Core Types
//!
//! The library root exports the state the engine owns:
//! - [`WeatherState`]: last weather payload received from the companion
//! - [`DisplayGeometry`]: text offsets and sizes for the current screen shape
//! - [`LifecycleFlags`]: host-reported visibility and display properties

// Module declarations
pub mod clock;
pub mod config;
pub mod engine;
pub mod icons;
pub mod renderer;
pub mod runtime;
pub mod scheduler;
pub mod snapshot;
pub mod sync;

/// Condition code shown before the companion has delivered anything (clear sky).
pub const DEFAULT_CONDITION_CODE: i32 = 800;

/// Last known weather as delivered by the companion device.
///
/// Replaced as a unit by [`sync::SyncIngestor`]; a payload that omits a field
/// clears it rather than keeping the previous value.
///
/// # Example
/// ```
/// use weather_face_lib::WeatherState;
///
/// let state = WeatherState::default();
/// assert_eq!(state.condition_code, 800);
/// assert!(state.temperature_range().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherState {
    /// Forecast low, already formatted by the companion (e.g. "12°")
    pub min_temp: Option<String>,
    /// Forecast high, already formatted by the companion
    pub max_temp: Option<String>,
    /// Meteorological condition code (OpenWeatherMap scheme)
    pub condition_code: i32,
}

impl Default for WeatherState {
    fn default() -> Self {
        WeatherState {
            min_temp: None,
            max_temp: None,
            condition_code: DEFAULT_CONDITION_CODE,
        }
    }
}

impl WeatherState {
    /// Both temperature bounds, or `None` if either one is missing.
    pub fn temperature_range(&self) -> Option<(&str, &str)> {
        match (&self.min_temp, &self.max_temp) {
            (Some(min), Some(max)) => Some((min.as_str(), max.as_str())),
            _ => None,
        }
    }
}

/// Text placement and sizes for the current screen shape.
///
/// Recomputed once per window-inset event from one of two presets
/// (round or rectangular) and only read by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayGeometry {
    /// Horizontal inset of the time text
    pub x_offset: f32,
    /// Baseline of the time text
    pub y_offset: f32,
    /// Gap between the weather icon and the temperature text
    pub temp_text_y_offset: f32,
    /// Time text size in pixels
    pub text_size: f32,
    /// Temperature text size in pixels
    pub temp_text_size: f32,
    /// Whether the round preset is in effect
    pub is_round: bool,
}

/// Host-reported lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifecycleFlags {
    pub visible: bool,
    pub ambient: bool,
    /// Display uses fewer bits per color in ambient mode
    pub low_bit_ambient: bool,
    pub time_zone_receiver_active: bool,
}

impl LifecycleFlags {
    /// The redraw timer runs only while visible and interactive.
    pub fn timer_should_run(&self) -> bool {
        self.visible && !self.ambient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_should_run_truth_table() {
        let cases = [
            (false, false, false),
            (false, true, false),
            (true, false, true),
            (true, true, false),
        ];
        for (visible, ambient, expected) in cases {
            let flags = LifecycleFlags {
                visible,
                ambient,
                ..Default::default()
            };
            assert_eq!(
                flags.timer_should_run(),
                expected,
                "visible={visible} ambient={ambient}"
            );
        }
    }

    #[test]
    fn test_temperature_range_requires_both_bounds() {
        let mut state = WeatherState {
            min_temp: Some("10".to_string()),
            ..Default::default()
        };
        assert!(state.temperature_range().is_none());

        state.max_temp = Some("20".to_string());
        assert_eq!(state.temperature_range(), Some(("10", "20")));

        state.min_temp = None;
        assert!(state.temperature_range().is_none());
    }
}
