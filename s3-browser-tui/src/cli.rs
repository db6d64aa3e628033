//! 命令行参数

use std::path::PathBuf;

pub use clap::Parser;
use s3_browser_provider::ProviderConfig;

use crate::backend::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "s3-browser", version)]
#[command(about = "Browse S3 buckets, prefixes and objects as a tree of pages")]
pub struct Args {
    /// Start address: entry names from the home page (`s3 buckets mybucket`)
    /// or a single `s3://bucket/key` URI
    pub address: Vec<String>,

    /// Region override, e.g. `eu-west-1`
    #[arg(long)]
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible services
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long)]
    pub profile: Option<String>,

    /// Address buckets as `endpoint/bucket`
    #[arg(long)]
    pub force_path_style: bool,

    /// Print the page at the start address to stdout and exit
    #[arg(long, short)]
    pub print: bool,

    /// Path to the config file (defaults to `<config_dir>/s3-browser/config.json`)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// 合并配置文件与命令行，命令行优先
    pub fn provider_config(&self, config: &AppConfig) -> ProviderConfig {
        ProviderConfig {
            region: self.region.clone().or_else(|| config.region.clone()),
            endpoint_url: self
                .endpoint_url
                .clone()
                .or_else(|| config.endpoint_url.clone()),
            profile: self.profile.clone().or_else(|| config.profile.clone()),
            force_path_style: self.force_path_style || config.force_path_style,
        }
    }
}
