use crate::cli::{ExtArgs, ExtCommand};
use crate::config;
use std::error::Error;

pub fn run(args: ExtArgs) -> Result<(), Box<dyn Error>> {
    let config = config::load_config();
    let rules_path = config::resolve_rules_path(args.rules.as_deref(), &config);
    let rules = config::load_rules(&rules_path)?;

    match args.command {
        ExtCommand::Add { ext } => {
            if ext.trim().is_empty() {
                return Err("extension must not be empty".into());
            }
            let next = rules.with_extension_added(&ext);
            if next == rules {
                println!("{} already excluded", ext.trim());
                return Ok(());
            }
            config::save_rules(&rules_path, &next)?;
            println!("Excluding {}", ext.trim());
        }
        ExtCommand::Remove { ext } => {
            let next = rules.with_extension_removed(&ext);
            if next == rules {
                println!("{} was not excluded", ext.trim());
                return Ok(());
            }
            config::save_rules(&rules_path, &next)?;
            println!("No longer excluding {}", ext.trim());
        }
        ExtCommand::List => {
            for ext in &rules.excluded_extensions {
                println!("{}", ext);
            }
        }
    }

    Ok(())
}
