pub mod json;
pub mod xml;

use crate::node::NodeKind;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Xml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(format!("Invalid format: {}. Use text, json, or xml", s)),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct FileEntry {
    pub path: String,
    pub selected: bool,
}

#[derive(Serialize, Debug)]
pub struct TreeReport {
    pub total_files: usize,
    pub files_to_parse: usize,
    pub files: Vec<FileEntry>,
}

#[derive(Serialize, Debug, Clone)]
pub struct MatchEntry {
    pub path: String,
    pub kind: NodeKind,
}

#[derive(Serialize, Debug)]
pub struct MatchReport {
    pub query: String,
    pub truncated: bool,
    pub matches: Vec<MatchEntry>,
}
