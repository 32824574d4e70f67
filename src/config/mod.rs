use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,
}

fn default_page_size() -> u32 {
    20
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_stale_secs() -> u64 {
    30
}
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            auth_token: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            stale_secs: default_stale_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("reefadmin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".reefadmin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("reefadmin.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file, optionally pointing at a custom
    /// API base URL right away.
    pub fn init_all(api_base_url: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            api_base_url: api_base_url.unwrap_or_else(default_base_url),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).expect("❌ Failed to serialize configuration");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ API base:    {}", config.api_base_url);

        Ok(())
    }

    /// Report config keys missing from the file on disk. Missing keys are
    /// not an error at load time (serde fills defaults); `config --check`
    /// surfaces them so the file can be completed explicitly.
    pub fn missing_keys() -> Vec<&'static str> {
        const KEYS: [&str; 5] = [
            "api_base_url",
            "auth_token",
            "page_size",
            "timeout_secs",
            "stale_secs",
        ];

        let path = Self::config_file();
        let Ok(content) = fs::read_to_string(&path) else {
            return KEYS.to_vec();
        };
        let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(&content) else {
            return KEYS.to_vec();
        };

        KEYS.iter()
            .filter(|k| value.get(k).is_none())
            .copied()
            .collect()
    }
}
