use crate::core::sections::SpeciesSection;
use crate::errors::{AppError, AppResult};
use crate::models::growth::GrowthLog;
use crate::models::transplant::TransplantLog;
use csv::Writer;
use std::path::Path;

/// Write grouped transplant sections to CSV, one row per log, sections in
/// display order.
pub fn write_transplant_csv(
    sections: &[SpeciesSection<TransplantLog>],
    path: &Path,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(csv_err)?;

    wtr.write_record([
        "species_id",
        "species",
        "date",
        "method",
        "count",
        "unit",
        "area_size_m2",
        "attachment",
    ])
    .map_err(csv_err)?;

    for section in sections {
        for log in &section.logs {
            wtr.write_record(&[
                section.species_id.to_string(),
                section.species_name.clone(),
                log.record_date.format("%Y-%m-%d").to_string(),
                log.method.label().to_string(),
                log.count.to_string(),
                log.method.unit().to_string(),
                log.area_size.to_string(),
                log.attachment_status.label().to_string(),
            ])
            .map_err(csv_err)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write grouped growth sections to CSV.
pub fn write_growth_csv(sections: &[SpeciesSection<GrowthLog>], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(csv_err)?;

    wtr.write_record([
        "species_id",
        "species",
        "date",
        "representative",
        "attachment_rate",
        "survival_rate",
        "growth_length_cm",
        "status",
    ])
    .map_err(csv_err)?;

    for section in sections {
        for log in &section.logs {
            wtr.write_record(&[
                section.species_id.to_string(),
                section.species_name.clone(),
                log.record_date.format("%Y-%m-%d").to_string(),
                log.is_representative.to_string(),
                log.attachment_rate.to_string(),
                log.survival_rate.to_string(),
                log.growth_length.to_string(),
                log.status.label().to_string(),
            ])
            .map_err(csv_err)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn csv_err(e: csv::Error) -> AppError {
    AppError::Export(e.to_string())
}
