use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub session: SessionConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub customer: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub path: String,
}

impl Config {
    /// Code defaults overlaid with the environment.
    /// E.g. `VEND__EXPORT__PATH=/tmp/out.csv` overrides the export path.
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("session.customer", "Guest")?
            .set_default("session.email", "")?
            .set_default("session.admin", false)?
            .set_default("export.path", "inventory.csv")?
            .add_source(
                config::Environment::with_prefix("VEND")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
