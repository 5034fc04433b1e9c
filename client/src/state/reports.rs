//! Analytics summary derived from the five tracked collections.
//!
//! The reports view fetches plants, growth, production, anomalies and
//! sensors together; any failure replaces the whole view with an error
//! banner, so the summary is only ever built from a complete set.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::{Anomaly, GrowthRecord, Plant, PlantStatus, ProductionRecord, Sensor};

const SENSOR_PREVIEW: usize = 4;
const PRODUCTION_PREVIEW: usize = 3;
const NO_STATUS_LABEL: &str = "Sin estado";

/// Raw collections as returned by the API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportData {
    pub plants: Vec<Plant>,
    pub evolutions: Vec<GrowthRecord>,
    pub productions: Vec<ProductionRecord>,
    pub anomalies: Vec<Anomaly>,
    pub sensors: Vec<Sensor>,
}

/// One bar of the status chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBar {
    pub label: &'static str,
    pub count: usize,
    /// Bar length relative to the tallest bar, 0..=100.
    pub percent: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportSummary {
    pub total_plants: usize,
    /// Height of the most recent growth measurement, e.g. `"42 cm"`.
    pub latest_height: Option<String>,
    pub anomaly_count: usize,
    pub sensor_count: usize,
    pub status_bars: Vec<StatusBar>,
    pub sensors: Vec<Sensor>,
    pub productions: Vec<ProductionRecord>,
}

impl ReportSummary {
    pub fn from_data(data: &ReportData) -> Self {
        Self {
            total_plants: data.plants.len(),
            latest_height: latest_growth(&data.evolutions).map(|g| format!("{} cm", g.height_cm)),
            anomaly_count: data.anomalies.len(),
            sensor_count: data.sensors.len(),
            status_bars: status_bars(&data.plants),
            sensors: data.sensors.iter().take(SENSOR_PREVIEW).cloned().collect(),
            productions: data.productions.iter().take(PRODUCTION_PREVIEW).cloned().collect(),
        }
    }
}

/// Plant counts per status, in status order; plants without a status get
/// their own bar only when there are any.
pub fn status_bars(plants: &[Plant]) -> Vec<StatusBar> {
    let mut counts: Vec<(&'static str, usize)> = PlantStatus::ALL
        .iter()
        .map(|status| (status.label(), plants.iter().filter(|p| p.status == Some(*status)).count()))
        .collect();
    let unknown = plants.iter().filter(|p| p.status.is_none()).count();
    if unknown > 0 {
        counts.push((NO_STATUS_LABEL, unknown));
    }

    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    counts
        .into_iter()
        .map(|(label, count)| StatusBar { label, count, percent: if max == 0 { 0 } else { count * 100 / max } })
        .collect()
}

/// Most recent record by `fecha_medicion`; the first one wins ties.
///
/// Records with unparseable dates only win when no record has a valid date.
pub fn latest_growth(records: &[GrowthRecord]) -> Option<&GrowthRecord> {
    let mut best: Option<(&GrowthRecord, Option<Date>)> = None;
    for record in records {
        let key = measurement_date(&record.measured_on);
        match best {
            Some((_, best_key)) if key <= best_key => {}
            _ => best = Some((record, key)),
        }
    }
    best.map(|(record, _)| record)
}

/// Date part of `YYYY-MM-DD` or a full ISO timestamp.
fn measurement_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}
