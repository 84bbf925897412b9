use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Decide which repository files get parsed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the tree with selection markers")]
    Tree(TreeArgs),

    #[command(about = "Search the tree by substring")]
    Search(SearchArgs),

    #[command(about = "Preview which paths a glob pattern would match")]
    Preview(PreviewArgs),

    #[command(about = "Toggle a file or directory on or off")]
    Toggle(ToggleArgs),

    #[command(about = "Edit the excluded-extension list")]
    Ext(ExtArgs),

    #[command(about = "Write a starter rules file")]
    Init(InitArgs),
}

#[derive(Parser)]
pub struct TreeArgs {
    #[arg(help = "Tree listing: JSON or newline-separated paths (default: stdin)")]
    pub listing: Option<String>,

    #[arg(short, long, help = "Rules file (TOML)")]
    pub rules: Option<String>,

    #[arg(long, value_name = "PATH", help = "Exclude a directory")]
    pub exclude_dir: Vec<String>,

    #[arg(long, value_name = "PATTERN", help = "Exclude files matching a glob pattern")]
    pub exclude_file: Vec<String>,

    #[arg(long, value_name = "EXT", help = "Exclude a file extension")]
    pub exclude_ext: Vec<String>,

    #[arg(long, help = "Read the rules as \"include only these\"")]
    pub include_mode: bool,

    #[arg(short, long, help = "Flat output instead of tree")]
    pub flat: bool,

    #[arg(long, help = "Only list files that will be parsed")]
    pub selected_only: bool,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,

    #[arg(long, help = "Output format: text, json, xml (default: text)")]
    pub format: Option<String>,
}

#[derive(Parser)]
pub struct SearchArgs {
    #[arg(help = "Substring to search names and paths for")]
    pub query: String,

    #[arg(help = "Tree listing (default: stdin)")]
    pub listing: Option<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,

    #[arg(long, help = "Output format: text, json, xml (default: text)")]
    pub format: Option<String>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    #[arg(help = "Candidate glob pattern")]
    pub pattern: String,

    #[arg(help = "Tree listing (default: stdin)")]
    pub listing: Option<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,

    #[arg(long, help = "Output format: text, json, xml (default: text)")]
    pub format: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToggleState {
    /// The node will be parsed
    On,
    /// The node will be skipped
    Off,
}

#[derive(Parser)]
pub struct ToggleArgs {
    #[arg(help = "Canonical path of the file or directory")]
    pub path: String,

    #[arg(value_enum, help = "Desired state")]
    pub state: ToggleState,

    #[arg(help = "Tree listing (default: stdin)")]
    pub listing: Option<String>,

    #[arg(short, long, help = "Rules file to update (TOML)")]
    pub rules: Option<String>,
}

#[derive(Parser)]
pub struct ExtArgs {
    #[arg(short, long, help = "Rules file to update (TOML)")]
    pub rules: Option<String>,

    #[command(subcommand)]
    pub command: ExtCommand,
}

#[derive(Subcommand)]
pub enum ExtCommand {
    #[command(about = "Add an extension to the excluded list")]
    Add {
        #[arg(help = "Extension, with or without the leading dot")]
        ext: String,
    },

    #[command(about = "Remove an extension from the excluded list")]
    Remove {
        #[arg(help = "Extension, with or without the leading dot")]
        ext: String,
    },

    #[command(about = "List excluded extensions")]
    List,
}

#[derive(Parser)]
pub struct InitArgs {
    #[arg(long, help = "Write the global rules file instead of a local one")]
    pub global: bool,

    #[arg(short, long, help = "Overwrite an existing rules file")]
    pub force: bool,
}
