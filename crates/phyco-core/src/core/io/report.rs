use crate::core::results::FleetResult;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV write error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// One flattened comparison row, serialized as a CSV record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub scenario: String,
    pub area_m2: f64,
    pub productivity_g_per_m2_day: f64,
    pub co2_per_gram_biomass: f64,
    pub uptime_fraction: f64,
    pub daily_biomass_g: f64,
    pub annual_co2_kg_per_reactor: f64,
    pub unit_count: u64,
    pub total_annual_co2_kg: f64,
    pub total_annual_co2_tons: f64,
}

impl ReportRow {
    pub fn new(scenario: &str, fleet: &FleetResult) -> Self {
        Self {
            scenario: scenario.to_string(),
            area_m2: fleet.params.area_m2(),
            productivity_g_per_m2_day: fleet.params.productivity_g_per_m2_day(),
            co2_per_gram_biomass: fleet.params.co2_per_gram_biomass(),
            uptime_fraction: fleet.params.uptime_fraction(),
            daily_biomass_g: fleet.per_reactor.daily_biomass_g,
            annual_co2_kg_per_reactor: fleet.per_reactor.annual_co2_kg,
            unit_count: fleet.unit_count,
            total_annual_co2_kg: fleet.total_annual_co2_kg,
            total_annual_co2_tons: fleet.total_annual_co2_tons,
        }
    }
}

/// Writes `rows` as CSV (with a header record) to any writer.
pub fn write_csv<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::ReactorParameters;
    use crate::core::production::ReactorModel;
    use crate::engine::aggregator::BatchAggregator;

    fn sample_row() -> ReportRow {
        let params = ReactorParameters::new(4.0, 20.0, 1.8, 0.8).unwrap();
        let per_reactor = ReactorModel::compute(&params);
        let fleet = BatchAggregator::scale(&per_reactor, &params, 1_000_000);
        ReportRow::new("realistic_medium", &fleet)
    }

    #[test]
    fn report_row_flattens_fleet_result() {
        let row = sample_row();
        assert_eq!(row.scenario, "realistic_medium");
        assert_eq!(row.unit_count, 1_000_000);
        assert!((row.annual_co2_kg_per_reactor - 42.048).abs() < 1e-9);
        assert!((row.total_annual_co2_kg - 42_048_000.0).abs() < 1e-3);
    }

    #[test]
    fn write_csv_emits_header_and_one_record_per_row() {
        let rows = vec![sample_row(), sample_row()];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &rows).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("scenario,area_m2,productivity_g_per_m2_day"));
        assert!(lines[1].starts_with("realistic_medium,4.0,20.0"));
    }
}
