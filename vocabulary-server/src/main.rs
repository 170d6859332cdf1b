use clap::Parser;
use dictionary::{Dictionary, VocabularyApi};

use crate::config::ServerConfig;

mod config;
mod logging;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init(config.log_format)?;

    let dict = Dictionary::with_source(VocabularyApi::with_base_url(&config.base_url));
    server::serve(&config, dict).await
}
