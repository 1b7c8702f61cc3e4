//! # Weather Condition Icons
//!
//! Maps OpenWeatherMap condition codes to the symbolic icons the face can draw
//! and holds the built-in 1-bit icon sheet.
//!
//! ## Condition Code Groups
//! - **2xx**: thunderstorm
//! - **3xx**: drizzle
//! - **5xx**: rain (511 is freezing rain, drawn as snow)
//! - **6xx**: snow
//! - **7xx**: atmosphere (mist, smoke, haze, ...), except squalls and tornado
//! - **800**: clear sky, **801-804**: clouds
//!
//! Reference: <http://openweathermap.org/weather-conditions>

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor, prelude::*};

/// Symbolic icon identifier, the key into the icon sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Cloudy,
}

/// Resolve a condition code to its icon.
///
/// The mapping is total: codes outside every known group (including the
/// `0` a payload without `weatherId` produces) yield `None` and the face is
/// drawn without an icon.
///
/// Code 761 (dust) falls inside the 701-761 atmosphere range but is listed as
/// a storm together with 781 (tornado); the storm entry wins.
///
/// # Example
/// ```
/// use weather_face_lib::icons::{resolve_icon, WeatherIcon};
///
/// assert_eq!(resolve_icon(800), Some(WeatherIcon::Clear));
/// assert_eq!(resolve_icon(761), Some(WeatherIcon::Storm));
/// assert_eq!(resolve_icon(0), None);
/// ```
pub fn resolve_icon(code: i32) -> Option<WeatherIcon> {
    match code {
        761 | 781 => Some(WeatherIcon::Storm),
        200..=232 => Some(WeatherIcon::Storm),
        300..=321 => Some(WeatherIcon::LightRain),
        500..=504 => Some(WeatherIcon::Rain),
        511 => Some(WeatherIcon::Snow),
        520..=531 => Some(WeatherIcon::Rain),
        600..=622 => Some(WeatherIcon::Snow),
        701..=760 => Some(WeatherIcon::Fog),
        800 => Some(WeatherIcon::Clear),
        801 => Some(WeatherIcon::LightClouds),
        802..=804 => Some(WeatherIcon::Cloudy),
        _ => None,
    }
}

/// Side length of a drawn icon in pixels.
pub const ICON_SIZE: u32 = 48;

/// A monochrome icon from the built-in sheet. Set bits are ink, clear bits
/// leave the background untouched.
#[derive(Debug)]
pub struct IconBitmap {
    pub icon: WeatherIcon,
    raw: ImageRaw<'static, BinaryColor>,
}

impl IconBitmap {
    const fn new(icon: WeatherIcon, data: &'static [u8]) -> Self {
        IconBitmap {
            icon,
            raw: ImageRaw::new(data, ICON_SIZE),
        }
    }

    pub fn raw(&self) -> &ImageRaw<'static, BinaryColor> {
        &self.raw
    }

    pub fn size(&self) -> Size {
        self.raw.size()
    }

    pub fn width(&self) -> u32 {
        self.size().width
    }

    pub fn height(&self) -> u32 {
        self.size().height
    }
}

static STORM: IconBitmap = IconBitmap::new(WeatherIcon::Storm, &STORM_DATA);
static LIGHT_RAIN: IconBitmap = IconBitmap::new(WeatherIcon::LightRain, &LIGHT_RAIN_DATA);
static RAIN: IconBitmap = IconBitmap::new(WeatherIcon::Rain, &RAIN_DATA);
static SNOW: IconBitmap = IconBitmap::new(WeatherIcon::Snow, &SNOW_DATA);
static FOG: IconBitmap = IconBitmap::new(WeatherIcon::Fog, &FOG_DATA);
static CLEAR: IconBitmap = IconBitmap::new(WeatherIcon::Clear, &CLEAR_DATA);
static LIGHT_CLOUDS: IconBitmap =
    IconBitmap::new(WeatherIcon::LightClouds, &LIGHT_CLOUDS_DATA);
static CLOUDY: IconBitmap = IconBitmap::new(WeatherIcon::Cloudy, &CLOUDY_DATA);

impl WeatherIcon {
    /// Look up this icon's bitmap in the built-in sheet.
    pub fn bitmap(self) -> &'static IconBitmap {
        match self {
            WeatherIcon::Storm => &STORM,
            WeatherIcon::LightRain => &LIGHT_RAIN,
            WeatherIcon::Rain => &RAIN,
            WeatherIcon::Snow => &SNOW,
            WeatherIcon::Fog => &FOG,
            WeatherIcon::Clear => &CLEAR,
            WeatherIcon::LightClouds => &LIGHT_CLOUDS,
            WeatherIcon::Cloudy => &CLOUDY,
        }
    }
}

// -- Icon sheet: 48x48, 1 bit per pixel, MSB first --

#[rustfmt::skip]
static CLEAR_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00000111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11100000, 0b00000000, 0b00000000,
    0b00000011, 0b10000000, 0b00000111, 0b11100000, 0b00000001, 0b11000000,
    0b00000011, 0b10000000, 0b00000111, 0b11100000, 0b00000001, 0b11000000,
    0b00000011, 0b10000000, 0b00000111, 0b11100000, 0b00000001, 0b11000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b00001110, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b00001110, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b00001110, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b11111100, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00111111,
    0b11111100, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00111111,
    0b11111100, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00111111,
    0b11111100, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00111111,
    0b11111100, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00111111,
    0b11111100, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00111111,
    0b00000000, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00001111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b00001110, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b00001110, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b00001110, 0b00000000,
    0b00000011, 0b10000000, 0b00000111, 0b11100000, 0b00000001, 0b11000000,
    0b00000011, 0b10000000, 0b00000111, 0b11100000, 0b00000001, 0b11000000,
    0b00000011, 0b10000000, 0b00000111, 0b11100000, 0b00000001, 0b11000000,
    0b00000000, 0b00000000, 0b00000111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static LIGHT_CLOUDS_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000011, 0b10000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000011, 0b10000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000011, 0b10000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b00000011, 0b10000001, 0b11000000,
    0b00000000, 0b00000000, 0b00000111, 0b00000011, 0b10000001, 0b11000000,
    0b00000000, 0b00000000, 0b00000111, 0b00000011, 0b10000001, 0b11000000,
    0b00000000, 0b00000000, 0b00000000, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b11111111, 0b11110000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111111, 0b11111110, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111111, 0b11111110, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111111, 0b11111110, 0b00000000,
    0b00000000, 0b00001111, 0b11111000, 0b00011111, 0b11111111, 0b11000000,
    0b00000000, 0b00001111, 0b11111000, 0b00011111, 0b11111111, 0b11000000,
    0b00000000, 0b00001111, 0b11111000, 0b00011111, 0b11111111, 0b11000000,
    0b00000000, 0b01111111, 0b11111111, 0b00000011, 0b11111111, 0b11000000,
    0b00000000, 0b01111111, 0b11111111, 0b00000011, 0b11111111, 0b11000000,
    0b00000000, 0b01111111, 0b11111111, 0b00000011, 0b11111111, 0b11000000,
    0b00000011, 0b11111111, 0b11111111, 0b11100000, 0b01110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11100000, 0b01110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11100000, 0b01110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b10001111, 0b11000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b10001111, 0b11000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b10001111, 0b11000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static CLOUDY_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static LIGHT_RAIN_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000011, 0b10000000, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000011, 0b10000000, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000011, 0b10000000, 0b00000000,
    0b00000011, 0b10000000, 0b00000000, 0b00011100, 0b00000000, 0b00000000,
    0b00000011, 0b10000000, 0b00000000, 0b00011100, 0b00000000, 0b00000000,
    0b00000011, 0b10000000, 0b00000000, 0b00011100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00111000, 0b00000000, 0b00000001, 0b11000000,
    0b00000000, 0b00000000, 0b00111000, 0b00000000, 0b00000001, 0b11000000,
    0b00000000, 0b00000000, 0b00111000, 0b00000000, 0b00000001, 0b11000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static RAIN_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000011, 0b10000000, 0b00111000, 0b00000011, 0b10000000, 0b00111000,
    0b00000011, 0b10000000, 0b00111000, 0b00000011, 0b10000000, 0b00111000,
    0b00000011, 0b10000000, 0b00111000, 0b00000011, 0b10000000, 0b00111000,
    0b00011100, 0b00000001, 0b11000000, 0b00011100, 0b00000001, 0b11000000,
    0b00011100, 0b00000001, 0b11000000, 0b00011100, 0b00000001, 0b11000000,
    0b00011100, 0b00000001, 0b11000000, 0b00011100, 0b00000001, 0b11000000,
    0b11100000, 0b00001110, 0b00000000, 0b11100000, 0b00001110, 0b00000000,
    0b11100000, 0b00001110, 0b00000000, 0b11100000, 0b00001110, 0b00000000,
    0b11100000, 0b00001110, 0b00000000, 0b11100000, 0b00001110, 0b00000000,
    0b00000011, 0b10000000, 0b00111000, 0b00000011, 0b10000000, 0b00111000,
    0b00000011, 0b10000000, 0b00111000, 0b00000011, 0b10000000, 0b00111000,
    0b00000011, 0b10000000, 0b00111000, 0b00000011, 0b10000000, 0b00111000,
    0b00011100, 0b00000001, 0b11000000, 0b00011100, 0b00000001, 0b11000000,
    0b00011100, 0b00000001, 0b11000000, 0b00011100, 0b00000001, 0b11000000,
    0b00011100, 0b00000001, 0b11000000, 0b00011100, 0b00000001, 0b11000000,
    0b11100000, 0b00001110, 0b00000000, 0b11100000, 0b00001110, 0b00000000,
    0b11100000, 0b00001110, 0b00000000, 0b11100000, 0b00001110, 0b00000000,
    0b11100000, 0b00001110, 0b00000000, 0b11100000, 0b00001110, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static SNOW_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000011, 0b10001110, 0b00000000, 0b00000011, 0b10001110, 0b00000000,
    0b00000011, 0b10001110, 0b00000000, 0b00000011, 0b10001110, 0b00000000,
    0b00000011, 0b10001110, 0b00000000, 0b00000011, 0b10001110, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b01110000, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b01110000, 0b00000000,
    0b00000000, 0b01110000, 0b00000000, 0b00000000, 0b01110000, 0b00000000,
    0b00000011, 0b10001110, 0b00000000, 0b00000011, 0b10001110, 0b00000000,
    0b00000011, 0b10001110, 0b00000000, 0b00000011, 0b10001110, 0b00000000,
    0b00000011, 0b10001110, 0b00000000, 0b00000011, 0b10001110, 0b00000000,
    0b00000000, 0b00000000, 0b00111000, 0b11100000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00111000, 0b11100000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00111000, 0b11100000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00000111,
    0b00000000, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00000111,
    0b00000000, 0b00000000, 0b00000111, 0b00000000, 0b00000000, 0b00000111,
    0b00000000, 0b00000000, 0b00111000, 0b11100000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00111000, 0b11100000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00111000, 0b11100000, 0b00000000, 0b00111000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static FOG_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b01111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b01111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b01111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[rustfmt::skip]
static STORM_DATA: [u8; 288] = [
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00000011, 0b11111111, 0b11111111, 0b11111111, 0b11110000, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111110, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111111,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00011111, 0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b11111000,
    0b00000000, 0b00000000, 0b00000111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111111, 0b11111111, 0b10000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000111, 0b11111100, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111111, 0b11100000, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000001, 0b11111000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00001110, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00001110, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00001110, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{image::Image, mock_display::MockDisplay};

    #[test]
    fn test_documented_ranges() {
        let table: &[(i32, i32, WeatherIcon)] = &[
            (200, 232, WeatherIcon::Storm),
            (300, 321, WeatherIcon::LightRain),
            (500, 504, WeatherIcon::Rain),
            (511, 511, WeatherIcon::Snow),
            (520, 531, WeatherIcon::Rain),
            (600, 622, WeatherIcon::Snow),
            (701, 760, WeatherIcon::Fog),
            (781, 781, WeatherIcon::Storm),
            (800, 800, WeatherIcon::Clear),
            (801, 801, WeatherIcon::LightClouds),
            (802, 804, WeatherIcon::Cloudy),
        ];
        for &(low, high, icon) in table {
            for code in low..=high {
                assert_eq!(resolve_icon(code), Some(icon), "code {code}");
            }
        }
    }

    #[test]
    fn test_dust_overlap_resolves_to_storm() {
        assert_eq!(resolve_icon(761), Some(WeatherIcon::Storm));
        assert_eq!(resolve_icon(760), Some(WeatherIcon::Fog));
    }

    #[test]
    fn test_unmapped_codes_have_no_icon() {
        for code in [
            -1, 0, 199, 233, 299, 322, 499, 505, 510, 512, 519, 532, 599, 623, 700, 762, 780,
            782, 799, 805, 1000,
        ] {
            assert_eq!(resolve_icon(code), None, "code {code}");
        }
    }

    fn rasterize(bitmap: &IconBitmap) -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        Image::new(bitmap.raw(), Point::zero())
            .draw(&mut display)
            .unwrap();
        display
    }

    #[test]
    fn test_sheet_is_keyed_by_icon() {
        let icons = [
            WeatherIcon::Storm,
            WeatherIcon::LightRain,
            WeatherIcon::Rain,
            WeatherIcon::Snow,
            WeatherIcon::Fog,
            WeatherIcon::Clear,
            WeatherIcon::LightClouds,
            WeatherIcon::Cloudy,
        ];
        for icon in icons {
            let bitmap = icon.bitmap();
            assert_eq!(bitmap.icon, icon);
            assert_eq!(bitmap.size(), Size::new(ICON_SIZE, ICON_SIZE));

            let display = rasterize(bitmap);
            let ink = (0..ICON_SIZE as i32)
                .flat_map(|y| (0..ICON_SIZE as i32).map(move |x| Point::new(x, y)))
                .filter(|&p| display.get_pixel(p) == Some(BinaryColor::On))
                .count();
            assert!(ink > 0, "{icon:?} is blank");
        }
    }

    #[test]
    fn test_bitmap_bit_order() {
        let display = rasterize(WeatherIcon::Clear.bitmap());
        // Top ray of the sun spans the two middle artwork columns, 3 px each
        assert_eq!(display.get_pixel(Point::new(20, 0)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(21, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(26, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(27, 0)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(47, 47)), Some(BinaryColor::Off));
    }
}
