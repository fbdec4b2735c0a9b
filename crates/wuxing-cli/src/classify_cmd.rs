use std::process::ExitCode;

use serde::Serialize;
use wuxing_core::{Element, classify};

use crate::cli::ClassifyArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    element: Element,
    label: &'static str,
}

pub fn run_classify(args: ClassifyArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let element = classify(args.year, args.month, args.day, args.hour);
    let output = ClassifyOutput {
        year: args.year,
        month: args.month,
        day: args.day,
        hour: args.hour,
        element,
        label: element.label(),
    };

    match output_format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => println!("{} ({})", output.label, output.element),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
