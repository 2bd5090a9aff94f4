//! Sea & Weather Widgets
//!
//! Each widget fetches one feed through the server proxy on its own refresh
//! interval and renders either the data, a "not available" message when the
//! payload lacks the fields it needs, or a "could not load" message when the
//! request failed. Widgets fail independently of each other.

pub mod payloads;
pub mod render;

use chrono::{Timelike, Utc};

use crate::api::client::{self, FetchError};

/// Iframe widgets reload on this period
pub const FRAME_REFRESH_MS: u64 = 15 * 60 * 1000;
/// Local clock tick
pub const CLOCK_TICK_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Warnings,
    UvIndex,
    SunriseSunset,
    SeaTemp,
    MoonPhase,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Warnings,
        WidgetKind::UvIndex,
        WidgetKind::SunriseSunset,
        WidgetKind::SeaTemp,
        WidgetKind::MoonPhase,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WidgetKind::Warnings => "Weather Alerts",
            WidgetKind::UvIndex => "UV Index",
            WidgetKind::SunriseSunset => "Sunrise & Sunset",
            WidgetKind::SeaTemp => "Sea Temperature",
            WidgetKind::MoonPhase => "Moon Phase",
        }
    }

    /// Id of the content container
    pub fn element_id(self) -> &'static str {
        match self {
            WidgetKind::Warnings => "weather-warnings",
            WidgetKind::UvIndex => "uv-index",
            WidgetKind::SunriseSunset => "sunrise-sunset",
            WidgetKind::SeaTemp => "sea-temp",
            WidgetKind::MoonPhase => "moon-phase-content",
        }
    }

    pub fn refresh_ms(self) -> u64 {
        const MINUTE: u64 = 60 * 1000;
        match self {
            WidgetKind::Warnings => 10 * MINUTE,
            WidgetKind::UvIndex => 30 * MINUTE,
            WidgetKind::SunriseSunset => 60 * MINUTE,
            WidgetKind::SeaTemp => 30 * MINUTE,
            WidgetKind::MoonPhase => 6 * 60 * MINUTE,
        }
    }

    pub fn unavailable_text(self) -> &'static str {
        match self {
            WidgetKind::Warnings => "No active weather alerts.",
            WidgetKind::UvIndex => "UV Index data not available.",
            WidgetKind::SunriseSunset => "Sunrise/Sunset data not available.",
            WidgetKind::SeaTemp => "Sea Temp data not available.",
            WidgetKind::MoonPhase => "Moon Phase data not available.",
        }
    }

    pub fn load_failed_text(self) -> &'static str {
        match self {
            WidgetKind::Warnings => "Could not load weather alerts.",
            WidgetKind::UvIndex => "Could not load UV Index.",
            WidgetKind::SunriseSunset => "Could not load Sunrise/Sunset data.",
            WidgetKind::SeaTemp => "Could not load Sea Temp.",
            WidgetKind::MoonPhase => "Could not load Moon Phase data.",
        }
    }
}

/// What a widget displays
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetContent {
    Loading,
    Message(String),
    Alerts(Vec<String>),
    Reading {
        value: String,
        caption: Option<String>,
    },
    Detail {
        headline: Option<String>,
        lines: Vec<String>,
    },
}

/// Turn a fetch result into widget content
pub fn present<T>(
    kind: WidgetKind,
    result: Result<T, FetchError>,
    render: impl FnOnce(&T) -> Option<WidgetContent>,
) -> WidgetContent {
    match result {
        Ok(payload) => render(&payload)
            .unwrap_or_else(|| WidgetContent::Message(kind.unavailable_text().to_string())),
        Err(_) => WidgetContent::Message(kind.load_failed_text().to_string()),
    }
}

fn logged<T>(kind: WidgetKind, result: Result<T, FetchError>) -> Result<T, FetchError> {
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Error fetching {}: {}", kind.title(), e).into());
    }
    result
}

/// Fetch and render one widget
pub async fn load(kind: WidgetKind) -> WidgetContent {
    match kind {
        WidgetKind::Warnings => present(
            kind,
            logged(kind, client::fetch_alerts().await),
            render::warnings,
        ),
        WidgetKind::UvIndex => present(
            kind,
            logged(kind, client::fetch_current().await),
            render::uv_index,
        ),
        WidgetKind::SunriseSunset => present(
            kind,
            logged(kind, client::fetch_current().await),
            render::sunrise_sunset,
        ),
        WidgetKind::SeaTemp => {
            let hour = Utc::now().with_timezone(&render::bangkok()).hour();
            present(kind, logged(kind, client::fetch_marine().await), |marine| {
                render::sea_temp(marine, hour)
            })
        }
        WidgetKind::MoonPhase => present(
            kind,
            logged(kind, client::fetch_astronomy().await),
            render::moon_phase,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::payloads::{Marine, OneCall};
    use super::*;

    #[test]
    fn test_failure_shows_could_not_load() {
        for kind in WidgetKind::ALL {
            let content = present(kind, Err::<OneCall, _>(FetchError::Status(404)), |_| None);
            assert_eq!(
                content,
                WidgetContent::Message(kind.load_failed_text().to_string())
            );
        }
    }

    #[test]
    fn test_sea_temp_404() {
        let content = present(
            WidgetKind::SeaTemp,
            Err::<Marine, _>(FetchError::Status(404)),
            |m| render::sea_temp(m, 12),
        );
        assert_eq!(content, WidgetContent::Message("Could not load Sea Temp.".to_string()));
    }

    #[test]
    fn test_missing_fields_show_unavailable() {
        let content = present(WidgetKind::UvIndex, Ok(OneCall::default()), render::uv_index);
        assert_eq!(
            content,
            WidgetContent::Message("UV Index data not available.".to_string())
        );
    }

    #[test]
    fn test_refresh_intervals() {
        assert_eq!(WidgetKind::Warnings.refresh_ms(), 600_000);
        assert_eq!(WidgetKind::UvIndex.refresh_ms(), 1_800_000);
        assert_eq!(WidgetKind::SunriseSunset.refresh_ms(), 3_600_000);
        assert_eq!(WidgetKind::SeaTemp.refresh_ms(), 1_800_000);
        assert_eq!(WidgetKind::MoonPhase.refresh_ms(), 21_600_000);
        assert_eq!(FRAME_REFRESH_MS, 900_000);
    }
}
