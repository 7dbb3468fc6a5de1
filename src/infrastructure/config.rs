use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub postgres: PostgresSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostgresSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl PostgresSettings {
    /// Key-value connection string in the form tokio-postgres parses.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.dbname
        )
    }
}

pub fn load_database_config() -> anyhow::Result<DatabaseConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/database"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
