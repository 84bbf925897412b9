use crate::cli::InitArgs;
use crate::config;
use lazy_static::lazy_static;
use std::error::Error;
use std::path::PathBuf;
use treesift::RuleSet;

lazy_static! {
    static ref STARTER_DIRS: Vec<&'static str> = vec![
        "node_modules",
        "vendor",
        "third_party",
        "dist",
        "build",
        "out",
        "target",
        ".next",
        ".idea",
        ".vscode",
        "__pycache__",
    ];
    static ref STARTER_PATTERNS: Vec<&'static str> = vec![
        "*.lock",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "*.generated.*",
        "*.snap",
    ];
    static ref STARTER_EXTENSIONS: Vec<&'static str> =
        vec![".min.js", ".min.css", ".map", ".d.ts", ".pyc"];
}

/// Rules most repositories start from: lock files, build output, vendored
/// code, minified artifacts.
pub fn starter_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    for dir in STARTER_DIRS.iter() {
        rules = rules.with_directory_added(dir);
    }
    for pattern in STARTER_PATTERNS.iter() {
        rules = rules.with_file_pattern_added(pattern);
    }
    for ext in STARTER_EXTENSIONS.iter() {
        rules = rules.with_extension_added(ext);
    }
    rules
}

pub fn run(args: InitArgs) -> Result<(), Box<dyn Error>> {
    let path = if args.global {
        config::global_rules_path().ok_or("Could not determine home directory")?
    } else {
        PathBuf::from(config::LOCAL_RULES_FILE)
    };

    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )
        .into());
    }

    config::save_rules(&path, &starter_rules())?;

    let location = if args.global { "global" } else { "local" };
    println!("Created {} rules file at {}", location, path.display());

    Ok(())
}
