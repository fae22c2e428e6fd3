use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "menuboard",
    version,
    about = "restaurant menu page renderer",
    long_about = "Menuboard renders a restaurant menu page from a JSON document mapping categories to food items, with category filtering.\n\nExamples:\n  menuboard -d \"./menu-data 1.json\" -o menu.html\n  menuboard -b https://restaurant.example/ -f starters --of text\n  menuboard --config ~/.menuboard/config.yml\n\nTip: Use --init-config to write a default config you can edit."
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
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "o",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the page to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: html, json, text (inferred from --output when omitted)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'd',
        long = "d",
        visible_alias = "data",
        value_name = "SRC",
        help_heading = "Input",
        help = "Menu JSON source: http(s) URL or file path."
    )]
    pub data: Option<String>,

    #[arg(
        short = 'b',
        long = "bu",
        visible_alias = "base-url",
        value_name = "URL",
        help_heading = "Input",
        help = "Site base URL; menu data is fetched from <URL>/menu-data%201.json."
    )]
    pub base_url: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.menuboard/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write the default config file if it does not exist, then exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'f',
        long = "f",
        visible_alias = "filter",
        value_name = "SLUG",
        help_heading = "Page",
        help = "Category filter to apply after the initial render (\"all\" shows everything)."
    )]
    pub filter: Option<String>,

    #[arg(
        long = "fi",
        visible_alias = "fallback-image",
        value_name = "PATH",
        help_heading = "Page",
        help = "Image used when an item has no image URL."
    )]
    pub fallback_image: Option<String>,
}
