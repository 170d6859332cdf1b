use clap::{Parser, ValueEnum};
use dictionary::VOCABULARY_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Startup configuration, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "vocabulary-server", version, about = "JSON facade over vocabulary.com")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Dictionary site the pages are fetched from.
    #[arg(long, env = "VOCABULARY_BASE_URL", default_value = VOCABULARY_URL)]
    pub base_url: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "vocabulary-server",
            "--port",
            "9000",
            "--base-url",
            "http://localhost:1234",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(ServerConfig::try_parse_from(["vocabulary-server", "--port", "http"]).is_err());
    }
}
