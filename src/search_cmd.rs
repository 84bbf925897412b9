use crate::cli::SearchArgs;
use crate::{config, listing};
use colored::*;
use std::error::Error;
use std::time::Instant;
use treesift::output::{self, MatchEntry, MatchReport, OutputFormat};
use treesift::{flatten, search, DebouncedInput, TreeNode, MAX_RESULTS};

pub fn run(args: SearchArgs) -> Result<(), Box<dyn Error>> {
    let config = config::load_config();
    let tree = listing::load(args.listing.as_deref())?;
    let nodes = flatten(&tree);

    // one-shot host: the argument is the settled input
    let mut input = DebouncedInput::new();
    input.set(&args.query, Instant::now());
    let query = input.flush().to_string();

    let hits = search(&nodes, &query);
    let report = to_report(&query, &hits);

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

    Ok(())
}

pub fn to_report(query: &str, hits: &[&TreeNode]) -> MatchReport {
    MatchReport {
        query: query.to_string(),
        truncated: hits.len() >= MAX_RESULTS,
        matches: hits
            .iter()
            .map(|n| MatchEntry {
                path: n.path.clone(),
                kind: n.kind,
            })
            .collect(),
    }
}

pub fn print_matches(report: &MatchReport, no_color: bool) {
    for entry in &report.matches {
        let is_dir = entry.kind == treesift::NodeKind::Directory;
        if no_color {
            println!("{}{}", entry.path, if is_dir { "/" } else { "" });
        } else if is_dir {
            println!("{}", entry.path.blue().bold());
        } else {
            println!("{}", entry.path);
        }
    }

    let count = if report.truncated {
        format!("{}+ matches (truncated)", report.matches.len())
    } else {
        format!("{} matches", report.matches.len())
    };
    if no_color {
        println!("{}", count);
    } else {
        println!("{}", count.dimmed());
    }
}
