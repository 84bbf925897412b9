use std::error::Error;
use std::fs;
use std::io::Read;
use treesift::{normalize, parse_listing, TreeNode};

/// Read and normalize a tree listing from a file argument or stdin.
pub fn load(listing: Option<&str>) -> Result<Vec<TreeNode>, Box<dyn Error>> {
    let text = match listing {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read listing {}: {}", path, e))?,
    };

    let raw = parse_listing(&text).map_err(|e| format!("invalid listing JSON: {}", e))?;
    Ok(normalize(&raw))
}
