use crate::cli::TreeArgs;
use crate::{config, listing};
use colored::*;
use std::error::Error;
use treesift::output::{self, FileEntry, OutputFormat, TreeReport};
use treesift::{is_selected, summarize, NodeKind, RuleSet, Summary, TreeNode};

pub fn run(args: TreeArgs) -> Result<(), Box<dyn Error>> {
    let config = config::load_config();
    let tree = listing::load(args.listing.as_deref())?;

    let rules_path = config::resolve_rules_path(args.rules.as_deref(), &config);
    let mut rules = config::load_rules(&rules_path)?;
    for dir in &args.exclude_dir {
        rules = rules.with_directory_added(dir);
    }
    for pattern in &args.exclude_file {
        rules = rules.with_file_pattern_added(pattern);
    }
    for ext in &args.exclude_ext {
        rules = rules.with_extension_added(ext);
    }
    if args.include_mode {
        rules = rules.with_include_mode(true);
    }

    let format = match args.format.as_deref().or(config.format.as_deref()) {
        Some(f) => f.parse::<OutputFormat>()?,
        None => OutputFormat::Text,
    };
    let no_color = args.no_color || config.no_color.unwrap_or(false);
    let flat = args.flat || config.flat.unwrap_or(false);

    let summary = summarize(&tree, &rules);

    match format {
        OutputFormat::Text => {
            if flat {
                print_flat(&tree, &rules, args.selected_only, no_color);
            } else {
                print_tree(&tree, &rules, args.selected_only, no_color);
            }
            print_summary(&summary, no_color);
        }
        OutputFormat::Json => {
            output::json::output_tree(&report(&tree, &rules, args.selected_only, &summary))?
        }
        OutputFormat::Xml => {
            output::xml::output_tree(&report(&tree, &rules, args.selected_only, &summary))?
        }
    }

    Ok(())
}

fn report(
    tree: &[TreeNode],
    rules: &RuleSet,
    selected_only: bool,
    summary: &Summary,
) -> TreeReport {
    let mut files = Vec::new();
    collect_files(tree, rules, selected_only, &mut files);
    TreeReport {
        total_files: summary.total_files,
        files_to_parse: summary.files_to_parse,
        files,
    }
}

fn collect_files(
    nodes: &[TreeNode],
    rules: &RuleSet,
    selected_only: bool,
    out: &mut Vec<FileEntry>,
) {
    for node in nodes {
        if node.kind == NodeKind::File {
            let selected = is_selected(node, rules);
            if selected || !selected_only {
                out.push(FileEntry {
                    path: node.path.clone(),
                    selected,
                });
            }
        }
        collect_files(&node.children, rules, selected_only, out);
    }
}

fn print_summary(summary: &Summary, no_color: bool) {
    let line = format!(
        "{} of {} files selected",
        summary.files_to_parse, summary.total_files
    );
    if no_color {
        println!("{}", line);
    } else {
        println!("{}", line.bold());
    }
}

fn marker(selected: bool, no_color: bool) -> String {
    if no_color {
        if selected { "+" } else { "-" }.to_string()
    } else if selected {
        "+".green().bold().to_string()
    } else {
        "-".red().to_string()
    }
}

fn print_flat(nodes: &[TreeNode], rules: &RuleSet, selected_only: bool, no_color: bool) {
    let mut entries = Vec::new();
    collect_files(nodes, rules, selected_only, &mut entries);
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    for entry in entries {
        println!("{} {}", marker(entry.selected, no_color), entry.path);
    }
}

fn print_tree(nodes: &[TreeNode], rules: &RuleSet, selected_only: bool, no_color: bool) {
    let visible: Vec<&TreeNode> = nodes
        .iter()
        .filter(|n| is_visible(n, rules, selected_only))
        .collect();

    for (i, node) in visible.iter().enumerate() {
        print_node(node, "", i == visible.len() - 1, rules, selected_only, no_color);
    }
}

fn is_visible(node: &TreeNode, rules: &RuleSet, selected_only: bool) -> bool {
    if !selected_only {
        return true;
    }
    has_selected_file(node, rules)
}

fn has_selected_file(node: &TreeNode, rules: &RuleSet) -> bool {
    match node.kind {
        NodeKind::File => is_selected(node, rules),
        NodeKind::Directory => node.children.iter().any(|c| has_selected_file(c, rules)),
    }
}

fn print_node(
    node: &TreeNode,
    prefix: &str,
    is_last: bool,
    rules: &RuleSet,
    selected_only: bool,
    no_color: bool,
) {
    let connector = if is_last { "└── " } else { "├── " };

    let display_name = if !node.is_dir() {
        node.name.clone()
    } else if no_color {
        format!("{}/", node.name)
    } else {
        node.name.blue().bold().to_string()
    };

    println!(
        "{}{}{} {}",
        prefix,
        connector,
        marker(is_selected(node, rules), no_color),
        display_name
    );

    let visible: Vec<&TreeNode> = node
        .children
        .iter()
        .filter(|c| is_visible(c, rules, selected_only))
        .collect();

    for (i, child) in visible.iter().enumerate() {
        let new_prefix = format!("{}{}   ", prefix, if is_last { " " } else { "│" });
        print_node(
            child,
            &new_prefix,
            i == visible.len() - 1,
            rules,
            selected_only,
            no_color,
        );
    }
}
