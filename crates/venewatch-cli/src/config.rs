use std::path::PathBuf;

use venewatch_mail::MailerConfig;

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.venewatch.cli"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<MailerConfig> {
    let path = config_path()?;
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config: MailerConfig = serde_json::from_str(&contents)?;
    Ok(config)
}

pub fn save_config(config: &MailerConfig) -> eyre::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(config)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "mail config saved");
    Ok(())
}

/// Redacted config view safe to print. The password never leaves the file.
#[derive(Debug, Clone)]
pub struct ConfigInfo {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username_hint: String,
    pub from_address: String,
}

pub fn config_info(config: &MailerConfig) -> ConfigInfo {
    ConfigInfo {
        smtp_host: config.smtp_host.clone(),
        smtp_port: config.smtp_port,
        username_hint: redact(&config.username),
        from_address: config.from_address.clone(),
    }
}

fn redact(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let prefix: String = chars[..2].iter().collect();
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    format!("{prefix}...{suffix}")
}
