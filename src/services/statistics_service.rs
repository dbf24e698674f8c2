//! Servicio de estadísticas
//!
//! Lógica pura de agregación temporal: ventanas por período, granularidad
//! de bucket y armado de la serie. Las queries viven en el repositorio.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Períodos de reporte soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    Week,
    TwoWeeks,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
}

impl StatsPeriod {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "week" => Some(StatsPeriod::Week),
            "2weeks" => Some(StatsPeriod::TwoWeeks),
            "month" => Some(StatsPeriod::Month),
            "3months" => Some(StatsPeriod::ThreeMonths),
            "6months" => Some(StatsPeriod::SixMonths),
            "year" => Some(StatsPeriod::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Week => "week",
            StatsPeriod::TwoWeeks => "2weeks",
            StatsPeriod::Month => "month",
            StatsPeriod::ThreeMonths => "3months",
            StatsPeriod::SixMonths => "6months",
            StatsPeriod::Year => "year",
        }
    }

    /// Ventana [start, end] hacia atrás desde `end`
    pub fn window(&self, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        let days = match self {
            StatsPeriod::Week => 7,
            StatsPeriod::TwoWeeks => 14,
            StatsPeriod::Month => 30,
            StatsPeriod::ThreeMonths => 90,
            StatsPeriod::SixMonths => 180,
            StatsPeriod::Year => 365,
        };
        (end - Duration::days(days), end)
    }

    /// Granularidad del bucket según el período
    pub fn granularity(&self) -> Granularity {
        match self {
            StatsPeriod::Week | StatsPeriod::TwoWeeks => Granularity::Day,
            StatsPeriod::Month | StatsPeriod::ThreeMonths => Granularity::Week,
            StatsPeriod::SixMonths | StatsPeriod::Year => Granularity::Month,
        }
    }
}

/// Granularidad de agregación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

/// Métrica reportada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMetric {
    Income,
    Count,
}

impl StatsMetric {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "income" => Some(StatsMetric::Income),
            "count" => Some(StatsMetric::Count),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsMetric::Income => "income",
            StatsMetric::Count => "count",
        }
    }
}

/// Clave del bucket para una fecha según la granularidad.
/// Semana en formato ISO: `{isoyear}-W{isoweek:02}`.
pub fn bucket_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => date.format("%Y-%m-%d").to_string(),
        Granularity::Week => {
            let iso = date.iso_week();
            format!("{}-W{:02}", iso.year(), iso.week())
        }
        Granularity::Month => date.format("%Y-%m").to_string(),
    }
}

/// Agregar filas crudas (fecha de inicio, precio total) a una serie ordenada
/// por clave de bucket ascendente
pub fn aggregate_series(
    rows: &[(NaiveDate, f64)],
    granularity: Granularity,
    metric: StatsMetric,
) -> Vec<(String, f64)> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();

    for (date, price) in rows {
        let key = bucket_key(*date, granularity);
        let value = match metric {
            StatsMetric::Income => *price,
            StatsMetric::Count => 1.0,
        };
        *buckets.entry(key).or_insert(0.0) += value;
    }

    buckets.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(StatsPeriod::from_str("week"), Some(StatsPeriod::Week));
        assert_eq!(StatsPeriod::from_str("2weeks"), Some(StatsPeriod::TwoWeeks));
        assert_eq!(StatsPeriod::from_str("year"), Some(StatsPeriod::Year));
        assert_eq!(StatsPeriod::from_str("decade"), None);
    }

    #[test]
    fn test_window() {
        let end = date(2024, 6, 30);
        assert_eq!(StatsPeriod::Week.window(end).0, date(2024, 6, 23));
        assert_eq!(StatsPeriod::Month.window(end).0, date(2024, 5, 31));
        assert_eq!(StatsPeriod::Year.window(end).0, date(2023, 7, 1));
    }

    #[test]
    fn test_granularity_per_period() {
        assert_eq!(StatsPeriod::Week.granularity(), Granularity::Day);
        assert_eq!(StatsPeriod::TwoWeeks.granularity(), Granularity::Day);
        assert_eq!(StatsPeriod::Month.granularity(), Granularity::Week);
        assert_eq!(StatsPeriod::ThreeMonths.granularity(), Granularity::Week);
        assert_eq!(StatsPeriod::SixMonths.granularity(), Granularity::Month);
        assert_eq!(StatsPeriod::Year.granularity(), Granularity::Month);
    }

    #[test]
    fn test_bucket_key_day() {
        assert_eq!(bucket_key(date(2024, 6, 5), Granularity::Day), "2024-06-05");
    }

    #[test]
    fn test_bucket_key_iso_week() {
        assert_eq!(bucket_key(date(2024, 6, 5), Granularity::Week), "2024-W23");
        // 2023-01-01 cae en la semana ISO 52 de 2022
        assert_eq!(bucket_key(date(2023, 1, 1), Granularity::Week), "2022-W52");
    }

    #[test]
    fn test_bucket_key_month() {
        assert_eq!(bucket_key(date(2024, 6, 5), Granularity::Month), "2024-06");
    }

    #[test]
    fn test_aggregate_income_sums_prices() {
        let rows = vec![
            (date(2024, 6, 5), 1500.0),
            (date(2024, 6, 5), 500.0),
            (date(2024, 6, 6), 300.0),
        ];

        let series = aggregate_series(&rows, Granularity::Day, StatsMetric::Income);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0], ("2024-06-05".to_string(), 2000.0));
        assert_eq!(series[1], ("2024-06-06".to_string(), 300.0));

        // La suma de buckets es igual a la suma de precios crudos
        let total: f64 = series.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 2300.0);
    }

    #[test]
    fn test_aggregate_count() {
        let rows = vec![
            (date(2024, 6, 3), 1500.0),
            (date(2024, 6, 5), 500.0),
            (date(2024, 6, 5), 300.0),
        ];

        let series = aggregate_series(&rows, Granularity::Day, StatsMetric::Count);

        assert_eq!(series[0], ("2024-06-03".to_string(), 1.0));
        assert_eq!(series[1], ("2024-06-05".to_string(), 2.0));
        let total: f64 = series.iter().map(|(_, v)| v).sum();
        assert_eq!(total, rows.len() as f64);
    }

    #[test]
    fn test_aggregate_by_iso_week() {
        // 2024-06-03 (lunes) y 2024-06-09 (domingo) caen en la W23,
        // 2024-06-10 ya es W24
        let rows = vec![
            (date(2024, 6, 3), 100.0),
            (date(2024, 6, 9), 200.0),
            (date(2024, 6, 10), 400.0),
        ];

        let series = aggregate_series(&rows, Granularity::Week, StatsMetric::Income);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0], ("2024-W23".to_string(), 300.0));
        assert_eq!(series[1], ("2024-W24".to_string(), 400.0));
    }
}
