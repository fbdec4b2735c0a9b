use std::process::ExitCode;

use serde::Serialize;
use wuxing_core::region::{REGIONS, RegionOffset, available_countries, region_offsets_for_country};

use crate::cli::RegionsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct RegionEntry {
    name: &'static str,
    offset_hours: i64,
}

#[derive(Debug, Serialize)]
struct CountryEntry {
    country: &'static str,
    regions: Vec<RegionEntry>,
}

impl From<&RegionOffset> for RegionEntry {
    fn from(region: &RegionOffset) -> Self {
        Self {
            name: region.name,
            offset_hours: region.offset_hours,
        }
    }
}

pub fn run_regions(args: RegionsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    match args.country {
        Some(country) => print_country(&country, output_format)?,
        None => print_all(output_format)?,
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_country(country: &str, output_format: OutputFormat) -> CliResult<()> {
    let regions = region_offsets_for_country(country);
    if regions.is_empty() {
        return Err(CliError::input(format!(
            "Unknown country '{}'. Expected one of: {}",
            country,
            available_countries().join(", ")
        )));
    }

    match output_format {
        OutputFormat::Json => {
            let entries: Vec<RegionEntry> = regions.iter().map(RegionEntry::from).collect();
            print_json(&entries)?;
        }
        OutputFormat::Text => {
            for region in regions {
                println!("{} {:+}", region.name, region.offset_hours);
            }
        }
    }

    Ok(())
}

fn print_all(output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let entries: Vec<CountryEntry> = REGIONS
                .iter()
                .map(|(country, regions)| CountryEntry {
                    country: *country,
                    regions: regions.iter().map(RegionEntry::from).collect(),
                })
                .collect();
            print_json(&entries)?;
        }
        OutputFormat::Text => {
            for (country, regions) in REGIONS {
                let names: Vec<_> = regions.iter().map(|r| r.name).collect();
                println!("{}: {}", country, names.join(", "));
            }
        }
    }

    Ok(())
}
