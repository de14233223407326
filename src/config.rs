use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Store connection string, e.g. "sqlite:voicebank.db"
    pub database_url: String,

    /// Line-delimited prompt file, re-read on every request
    pub prompts_file: String,

    /// Output directory for the export tool
    pub export_dir: String,

    /// Directory the recording front-end is served from
    pub static_dir: String,

    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("database_url", "sqlite:voicebank.db")?
            .set_default("prompts_file", "prompts.txt")?
            .set_default("export_dir", "downloads")?
            .set_default("static_dir", "static")?
            .set_default("http.bind", "0.0.0.0")?
            .set_default("http.port", 8000_i64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("VOICEBANK").separator("__"))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;

        // DATABASE_URL takes precedence over file and defaults
        if let Ok(url) = std::env::var("DATABASE_URL") {
            cfg.database_url = url;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let cfg = Config::load("config/does-not-exist").unwrap();
        assert_eq!(cfg.prompts_file, "prompts.txt");
        assert_eq!(cfg.export_dir, "downloads");
        assert_eq!(cfg.http.port, 8000);
    }
}
