//! Provider payloads, as relayed by the weather proxy.
//!
//! Only the fields the widgets read are modelled; all of them are optional
//! so a partial payload degrades to a "not available" message.

use serde::Deserialize;

/// OpenWeather One Call response (alerts or current conditions)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OneCall {
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
    #[serde(default)]
    pub current: Option<Current>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Alert {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub end: i64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Current {
    #[serde(default)]
    pub uvi: Option<f64>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// WeatherAPI marine forecast
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Marine {
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ForecastDay {
    #[serde(default)]
    pub hour: Option<Vec<Hour>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Hour {
    #[serde(default)]
    pub time_epoch: i64,
    #[serde(default)]
    pub water_temp_c: Option<f64>,
}

/// WeatherAPI astronomy response
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Astronomy {
    #[serde(default)]
    pub astronomy: Option<AstronomyBody>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AstronomyBody {
    #[serde(default)]
    pub astro: Option<Astro>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Astro {
    #[serde(default)]
    pub moon_phase: Option<String>,
    #[serde(default)]
    pub moonrise: Option<String>,
    #[serde(default)]
    pub moonset: Option<String>,
}
