//! Payload to widget content.
//!
//! `None` means the payload lacked the fields a widget needs.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use super::payloads::{Alert, Astronomy, Marine, OneCall};
use super::WidgetContent;

const BANGKOK_OFFSET_SECS: i32 = 7 * 3600;

/// Asia/Bangkok, which has no daylight saving
pub fn bangkok() -> FixedOffset {
    FixedOffset::east_opt(BANGKOK_OFFSET_SECS).expect("UTC+7 is a valid offset")
}

/// `HH:MM` in Bangkok time for a Unix timestamp
pub fn bangkok_hm(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|t| t.with_timezone(&bangkok()).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Hour of day in Bangkok for a Unix timestamp
pub fn bangkok_hour(epoch: i64) -> Option<u32> {
    DateTime::from_timestamp(epoch, 0).map(|t| t.with_timezone(&bangkok()).hour())
}

/// Text of the local time widget
pub fn local_time(now: DateTime<Utc>) -> String {
    format!(
        "Current Local Time: {}",
        now.with_timezone(&bangkok()).format("%H:%M:%S")
    )
}

pub fn uv_band(uvi: f64) -> &'static str {
    if uvi <= 2.0 {
        "Low"
    } else if uvi <= 5.0 {
        "Moderate"
    } else if uvi <= 7.0 {
        "High"
    } else if uvi <= 10.0 {
        "Very High"
    } else {
        "Extreme"
    }
}

fn alert_line(alert: &Alert) -> String {
    format!(
        "{} ({} - {}): {}",
        alert.event,
        bangkok_hm(alert.start),
        bangkok_hm(alert.end),
        alert.description
    )
}

/// Alerts list; an empty or missing list is reported as calm
pub fn warnings(payload: &OneCall) -> Option<WidgetContent> {
    match payload.alerts.as_deref() {
        Some(alerts) if !alerts.is_empty() => Some(WidgetContent::Alerts(
            alerts.iter().map(alert_line).collect(),
        )),
        _ => Some(WidgetContent::Message("No active weather alerts.".to_string())),
    }
}

pub fn uv_index(payload: &OneCall) -> Option<WidgetContent> {
    let uvi = payload.current.as_ref()?.uvi?;
    Some(WidgetContent::Reading {
        value: uvi.to_string(),
        caption: Some(format!("({})", uv_band(uvi))),
    })
}

pub fn sunrise_sunset(payload: &OneCall) -> Option<WidgetContent> {
    let current = payload.current.as_ref()?;
    let sunrise = current.sunrise.filter(|t| *t != 0)?;
    let sunset = current.sunset.filter(|t| *t != 0)?;
    Some(WidgetContent::Detail {
        headline: None,
        lines: vec![
            format!("Sunrise: {}", bangkok_hm(sunrise)),
            format!("Sunset: {}", bangkok_hm(sunset)),
        ],
    })
}

/// Water temperature for `current_hour` (Bangkok), else the first hour, else N/A
pub fn sea_temp(payload: &Marine, current_hour: u32) -> Option<WidgetContent> {
    let hours = payload
        .forecast
        .as_ref()?
        .forecastday
        .first()?
        .hour
        .as_ref()?;

    let temp = hours
        .iter()
        .find(|h| bangkok_hour(h.time_epoch) == Some(current_hour))
        .and_then(|h| h.water_temp_c)
        .or_else(|| hours.first().and_then(|h| h.water_temp_c))
        .map(|t| t.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    Some(WidgetContent::Reading {
        value: format!("{}°C", temp),
        caption: None,
    })
}

pub fn moon_phase(payload: &Astronomy) -> Option<WidgetContent> {
    let astro = payload.astronomy.as_ref()?.astro.as_ref()?;
    let phase = astro.moon_phase.as_deref().filter(|p| !p.is_empty())?;
    let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());

    Some(WidgetContent::Detail {
        headline: Some(phase.to_string()),
        lines: vec![
            format!("Moonrise: {}", or_na(&astro.moonrise)),
            format!("Moonset: {}", or_na(&astro.moonset)),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn one_call(json: &str) -> OneCall {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_uv_bands() {
        assert_eq!(uv_band(0.0), "Low");
        assert_eq!(uv_band(2.0), "Low");
        assert_eq!(uv_band(2.1), "Moderate");
        assert_eq!(uv_band(5.0), "Moderate");
        assert_eq!(uv_band(7.0), "High");
        assert_eq!(uv_band(7.2), "Very High");
        assert_eq!(uv_band(10.0), "Very High");
        assert_eq!(uv_band(11.5), "Extreme");
    }

    #[test]
    fn test_uv_reading() {
        let content = uv_index(&one_call(r#"{"current":{"uvi":7.2}}"#));
        assert_eq!(
            content,
            Some(WidgetContent::Reading {
                value: "7.2".to_string(),
                caption: Some("(Very High)".to_string()),
            })
        );

        let whole = uv_index(&one_call(r#"{"current":{"uvi":3}}"#));
        assert!(matches!(whole, Some(WidgetContent::Reading { value, .. }) if value == "3"));
    }

    #[test]
    fn test_uv_missing() {
        assert_eq!(uv_index(&one_call("{}")), None);
        assert_eq!(uv_index(&one_call(r#"{"current":{}}"#)), None);
    }

    #[test]
    fn test_sunrise_sunset_bangkok() {
        // 2023-11-14 23:33:20 UTC and 2023-11-15 11:30:00 UTC
        let content = sunrise_sunset(&one_call(
            r#"{"current":{"sunrise":1700004800,"sunset":1700047800}}"#,
        ));
        assert_eq!(
            content,
            Some(WidgetContent::Detail {
                headline: None,
                lines: vec!["Sunrise: 06:33".to_string(), "Sunset: 18:30".to_string()],
            })
        );
    }

    #[test]
    fn test_sunrise_sunset_missing() {
        assert_eq!(
            sunrise_sunset(&one_call(r#"{"current":{"sunrise":1700004800}}"#)),
            None
        );
        assert_eq!(
            sunrise_sunset(&one_call(r#"{"current":{"sunrise":0,"sunset":0}}"#)),
            None
        );
    }

    #[test]
    fn test_warnings() {
        let calm = warnings(&one_call(r#"{"alerts":[]}"#));
        assert_eq!(
            calm,
            Some(WidgetContent::Message("No active weather alerts.".to_string()))
        );
        assert_eq!(warnings(&one_call("{}")), calm);

        let stormy = warnings(&one_call(
            r#"{"alerts":[{"event":"Thunderstorm","start":1700004800,"end":1700047800,"description":"Squalls offshore"}]}"#,
        ));
        assert_eq!(
            stormy,
            Some(WidgetContent::Alerts(vec![
                "Thunderstorm (06:33 - 18:30): Squalls offshore".to_string()
            ]))
        );
    }

    fn marine(json: &str) -> Marine {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_sea_temp_current_hour() {
        // 1700002800 is 06:00 Bangkok, 1700006400 is 07:00 Bangkok
        let payload = marine(
            r#"{"forecast":{"forecastday":[{"hour":[
                {"time_epoch":1700002800,"water_temp_c":28.1},
                {"time_epoch":1700006400,"water_temp_c":28.5}
            ]}]}}"#,
        );
        assert_eq!(
            sea_temp(&payload, 7),
            Some(WidgetContent::Reading {
                value: "28.5°C".to_string(),
                caption: None,
            })
        );
        // no match falls back to the first hour
        assert!(matches!(
            sea_temp(&payload, 22),
            Some(WidgetContent::Reading { value, .. }) if value == "28.1°C"
        ));
    }

    #[test]
    fn test_sea_temp_without_readings() {
        let payload =
            marine(r#"{"forecast":{"forecastday":[{"hour":[{"time_epoch":1700002800}]}]}}"#);
        assert!(matches!(
            sea_temp(&payload, 5),
            Some(WidgetContent::Reading { value, .. }) if value == "N/A°C"
        ));

        let empty = marine(r#"{"forecast":{"forecastday":[{"hour":[]}]}}"#);
        assert!(matches!(
            sea_temp(&empty, 5),
            Some(WidgetContent::Reading { value, .. }) if value == "N/A°C"
        ));

        assert_eq!(sea_temp(&marine("{}"), 5), None);
        assert_eq!(sea_temp(&marine(r#"{"forecast":{"forecastday":[]}}"#), 5), None);
        assert_eq!(sea_temp(&marine(r#"{"forecast":{"forecastday":[{}]}}"#), 5), None);
    }

    #[test]
    fn test_moon_phase() {
        let payload: Astronomy = serde_json::from_str(
            r#"{"astronomy":{"astro":{"moon_phase":"Waxing Gibbous","moonrise":"02:10 PM","moonset":"02:05 AM"}}}"#,
        )
        .unwrap();
        assert_eq!(
            moon_phase(&payload),
            Some(WidgetContent::Detail {
                headline: Some("Waxing Gibbous".to_string()),
                lines: vec![
                    "Moonrise: 02:10 PM".to_string(),
                    "Moonset: 02:05 AM".to_string()
                ],
            })
        );

        let blank: Astronomy =
            serde_json::from_str(r#"{"astronomy":{"astro":{"moon_phase":""}}}"#).unwrap();
        assert_eq!(moon_phase(&blank), None);
    }

    #[test]
    fn test_local_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 20, 5, 9).unwrap();
        assert_eq!(local_time(now), "Current Local Time: 03:05:09");
    }
}
