use std::path::PathBuf;

use chef_domain::Language;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "chef-menu", version, about = "Browse the chef's menu from the terminal")]
pub struct Cli {
    /// Menu language (en, fr, pt). Detected from the locale when omitted.
    #[arg(long, short = 'l')]
    pub language: Option<Language>,

    /// Root URL of the table store serving the menu.
    #[arg(long, env = "CHEF_MENU_URL")]
    pub url: Option<String>,

    /// Anonymous API key for the table store.
    #[arg(long, env = "CHEF_MENU_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Directory for log files.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Fetch once, print the menu and exit.
    #[arg(long)]
    pub print: bool,

    /// Print the menu as JSON instead of text.
    #[arg(long, requires = "print")]
    pub json: bool,
}
