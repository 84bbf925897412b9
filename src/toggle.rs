use crate::cli::{ToggleArgs, ToggleState};
use crate::{config, listing};
use std::error::Error;
use treesift::{find, summarize};

pub fn run(args: ToggleArgs) -> Result<(), Box<dyn Error>> {
    let config = config::load_config();
    let tree = listing::load(args.listing.as_deref())?;

    let node = find(&tree, &args.path)
        .ok_or_else(|| format!("no such path in listing: {}", args.path))?;

    let rules_path = config::resolve_rules_path(args.rules.as_deref(), &config);
    let rules = config::load_rules(&rules_path)?;

    let checked = args.state == ToggleState::On;
    let next = rules.toggled(node, checked);
    config::save_rules(&rules_path, &next)?;

    let summary = summarize(&tree, &next);
    println!(
        "{} {}: {} of {} files selected",
        args.path,
        if checked { "on" } else { "off" },
        summary.files_to_parse,
        summary.total_files
    );

    Ok(())
}
