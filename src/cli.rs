use clap::Parser;

use crate::config::{CheckConfig, DEFAULT_INDEX_URL};

#[derive(Debug, Parser)]
#[command(name = "oc-migrate")]
#[command(
    version,
    about = "Checks whether an OpenComponents registry can be safely upgraded"
)]
pub struct Cli {
    /// Root URL of the registry, e.g. https://your-registry-url.domain.com
    pub registry_url: String,

    /// Base URL of the npm package index
    #[arg(long, value_name = "URL", default_value = DEFAULT_INDEX_URL, hide = true)]
    pub index_url: String,

    /// Print plain text without colors
    #[arg(long)]
    pub no_color: bool,

    /// Log requests and scan progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> CheckConfig {
        CheckConfig::new(&self.registry_url).with_index_url(&self.index_url)
    }
}
