use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pagewin",
    version,
    about = "pagination window calculator",
    long_about = "Pagewin computes the page buttons a pagination control should render for a given page count, current page and sibling radius.\n\nExamples:\n  pagewin -n 12 -p 5 -s 2\n  pagewin -n 40 -p all --format json -o windows.json\n  pagewin -n 12 -p 0,5-7 --zero-based\n\nTip: Use --config to persist the sibling radius and output settings."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'n',
        long = "np",
        visible_alias = "pages",
        value_name = "N",
        help_heading = "Window",
        help = "Total number of pages."
    )]
    pub pages: Option<usize>,

    #[arg(
        short = 'p',
        long = "pg",
        visible_alias = "page",
        value_name = "SELECTION",
        help_heading = "Window",
        help = "Current page: an index, a list (0,3,5), a range (2-6) or 'all'. Defaults to the first page. Selects nothing when there are no pages; at most 10000 pages per selection."
    )]
    pub page: Option<String>,

    #[arg(
        short = 's',
        long = "sb",
        visible_alias = "siblings",
        value_name = "N",
        help_heading = "Window",
        help = "Pages shown on each side of the current page."
    )]
    pub siblings: Option<usize>,

    #[arg(
        short = 'z',
        long = "zb",
        visible_alias = "zero-based",
        num_args = 0..=1,
        default_missing_value = "true",
        help_heading = "Window",
        help = "Read and print page numbers zero-based instead of one-based."
    )]
    pub zero_based: Option<bool>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write results to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'F',
        long = "of",
        visible_alias = "format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text, json or xml). Inferred from --output when omitted."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.pagewin/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a default config file if none exists and exit."
    )]
    pub init_config: bool,
}
