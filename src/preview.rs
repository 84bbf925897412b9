use crate::cli::PreviewArgs;
use crate::search_cmd::{print_matches, to_report};
use crate::{config, listing};
use std::error::Error;
use std::time::Instant;
use treesift::output::{self, OutputFormat};
use treesift::{flatten, preview, DebouncedInput};

pub fn run(args: PreviewArgs) -> Result<(), Box<dyn Error>> {
    let config = config::load_config();
    let tree = listing::load(args.listing.as_deref())?;
    let nodes = flatten(&tree);

    let mut input = DebouncedInput::new();
    input.set(&args.pattern, Instant::now());
    let pattern = input.flush().to_string();

    let hits = preview(&nodes, &pattern);
    let report = to_report(&pattern, &hits);

    let format = match args.format.as_deref().or(config.format.as_deref()) {
        Some(f) => f.parse::<OutputFormat>()?,
        None => OutputFormat::Text,
    };
    let no_color = args.no_color || config.no_color.unwrap_or(false);

    match format {
        OutputFormat::Text => print_matches(&report, no_color),
        OutputFormat::Json => output::json::output_matches(&report)?,
        OutputFormat::Xml => output::xml::output_matches(&report)?,
    }

    // a pattern that matches nothing would exclude nothing
    if hits.is_empty() {
        return Err(format!("pattern '{}' matches nothing", pattern).into());
    }

    Ok(())
}
