//! Forecast slice and sky-code icon mapping for the weather widget.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::net::types::WeatherDay;

/// Days shown by the widget.
pub const FORECAST_DAYS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    Snow,
    Rain,
    HeavyRain,
    Cloudy,
}

impl WeatherIcon {
    /// Bucket a `skycodeday` value. Leading digits are read the way
    /// `parseInt` reads them; anything unparseable is cloudy.
    pub fn from_sky_code(raw: &str) -> Self {
        match leading_integer(raw) {
            Some(0..=12 | 31..=34) => Self::Sunny,
            Some(13..=18) => Self::Snow,
            Some(19..=30) => Self::Rain,
            Some(35..=43) => Self::HeavyRain,
            _ => Self::Cloudy,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sunny => "☀️",
            Self::Snow => "❄️",
            Self::Rain => "🌧️",
            Self::HeavyRain => "⛈️",
            Self::Cloudy => "☁️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Soleado",
            Self::Snow => "Nieve",
            Self::Rain => "Lluvia",
            Self::HeavyRain => "Lluvia fuerte",
            Self::Cloudy => "Nublado",
        }
    }
}

/// A forecast day ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastDay {
    pub day: String,
    pub high: String,
    pub low: String,
    pub precip: String,
    pub icon: WeatherIcon,
}

/// First [`FORECAST_DAYS`] entries with precipitation defaulted to `"0"`.
pub fn forecast(days: &[WeatherDay]) -> Vec<ForecastDay> {
    days.iter()
        .take(FORECAST_DAYS)
        .map(|d| ForecastDay {
            day: d.shortday.clone(),
            high: d.high.clone(),
            low: d.low.clone(),
            precip: d.precip.clone().unwrap_or_else(|| "0".to_owned()),
            icon: WeatherIcon::from_sky_code(&d.skycodeday),
        })
        .collect()
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
