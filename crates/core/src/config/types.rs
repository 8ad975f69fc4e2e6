use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const DEFAULT_USER_AGENT: &str = "torrent-api-clients/0.1 (+https://example.invalid)";

/// Application configuration.
///
/// Every key is optional in config files; missing keys take the defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory CSV files are written to.
    pub output_dir: PathBuf,
    /// Request timeout in seconds.
    pub timeout: u64,
    /// General index search endpoint.
    pub tpb_base_url: String,
    /// TV index listing endpoint.
    pub eztv_base_url: String,
    pub user_agent: String,
    /// Apply the 1080p quality floor to every TV index query.
    #[serde(deserialize_with = "deserialize_flag")]
    pub min_1080p: bool,
    /// Extra attempts for failed GET requests.
    pub retries: u32,
    /// Base retry delay in seconds, doubled on every attempt.
    pub backoff: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Outputs"),
            timeout: 10,
            tpb_base_url: "https://apibay.org/q.php".to_string(),
            eztv_base_url: "https://eztvx.to/api/get-torrents".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_1080p: false,
            retries: 3,
            backoff: 0.5,
        }
    }
}

/// Accept `true`/`false`, integers and words like `yes`/`on` for a flag.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
        Flag::Text(s) => parse_flag(&s),
    })
}

/// Words accepted as "on"; anything else is off.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("Outputs"));
        assert_eq!(config.timeout, 10);
        assert_eq!(config.retries, 3);
        assert!(!config.min_1080p);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml = r#"
timeout = 30
min_1080p = true
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.timeout, 30);
        assert!(config.min_1080p);
        assert_eq!(config.tpb_base_url, "https://apibay.org/q.php");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_flag_accepts_words_and_numbers() {
        let config: AppConfig = toml::from_str(r#"min_1080p = "yes""#).unwrap();
        assert!(config.min_1080p);

        let config: AppConfig = toml::from_str(r#"min_1080p = "off""#).unwrap();
        assert!(!config.min_1080p);

        let config: AppConfig = toml::from_str("min_1080p = 1").unwrap();
        assert!(config.min_1080p);
    }

    #[test]
    fn test_parse_flag() {
        for on in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(parse_flag(on), "{} should be on", on);
        }
        for off in ["0", "false", "no", "", "maybe"] {
            assert!(!parse_flag(off), "{} should be off", off);
        }
    }
}
