//! Per-frame renderable state.

use crate::icons::{resolve_icon, WeatherIcon};
use crate::{DisplayGeometry, WeatherState};
use chrono::{DateTime, TimeZone, Timelike};

/// Everything the renderer needs for one frame. Built, drawn, discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub ambient: bool,
    /// Smooth the time text; off in ambient mode on low-bit displays
    pub anti_alias: bool,
    pub weather: WeatherState,
    pub geometry: DisplayGeometry,
}

impl DisplaySnapshot {
    /// Snapshot the wall-clock fields of `time` in its own zone.
    pub fn at<Tz: TimeZone>(
        time: &DateTime<Tz>,
        ambient: bool,
        anti_alias: bool,
        weather: WeatherState,
        geometry: DisplayGeometry,
    ) -> Self {
        DisplaySnapshot {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            ambient,
            anti_alias,
            weather,
            geometry,
        }
    }

    /// `H:MM` in ambient mode, `H:MM:SS` otherwise. The hour is not padded.
    pub fn time_text(&self) -> String {
        if self.ambient {
            format!("{}:{:02}", self.hour, self.minute)
        } else {
            format!("{}:{:02}:{:02}", self.hour, self.minute, self.second)
        }
    }

    /// `"<min> - <max>"`, only when both bounds are known.
    pub fn temperature_text(&self) -> Option<String> {
        self.weather
            .temperature_range()
            .map(|(min, max)| format!("{} - {}", min, max))
    }

    pub fn icon(&self) -> Option<WeatherIcon> {
        resolve_icon(self.weather.condition_code)
    }
}
