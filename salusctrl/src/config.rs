use directories::UserDirs;
use serde::Deserialize;

/// A configuration that is constructed from ~/.salusctrl[.toml|.yaml|.json] and
/// environment vars SALUS_USER and SALUS_PASSWORD.
#[derive(Debug, Default, Deserialize)]
pub struct EnvConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    pub base_url: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut s = config::Config::new();

        if let Some(path) = UserDirs::new().and_then(|dirs| {
            dirs.home_dir()
                .join(".salusctrl")
                .to_str()
                .map(ToString::to_string)
        }) {
            s.merge(config::File::with_name(&path).required(false))?;
        }

        s.merge(config::Environment::with_prefix("salus"))?;

        s.try_into()
    }

    /// Command line values win over the configured ones.
    pub fn credentials(
        &self,
        user: Option<String>,
        password: Option<String>,
    ) -> anyhow::Result<(String, String)> {
        let user = user
            .or_else(|| self.user.clone())
            .ok_or_else(|| anyhow::anyhow!("no user given, use --user or SALUS_USER"))?;
        let password = password
            .or_else(|| self.password.clone())
            .ok_or_else(|| anyhow::anyhow!("no password given, use --password or SALUS_PASSWORD"))?;
        Ok((user, password))
    }
}
