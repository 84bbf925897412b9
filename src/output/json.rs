use super::{MatchReport, TreeReport};
use std::error::Error;

pub fn output_tree(data: &TreeReport) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

pub fn output_matches(data: &MatchReport) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}
