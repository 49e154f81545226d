use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use crate::colors::{DEFAULT_SNAKE_COLOR, parse_hex_color};

const CONFIG_FILE_NAME: &str = "snake_arcade_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(&get_config_path())
}

/// Persisted player preferences plus board geometry. Applied once when a
/// game starts; a running session never re-reads them.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub color: String,
    pub level: u32,
    pub field_width: u32,
    pub field_height: u32,
    pub cell_size: u32,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if parse_hex_color(&self.color).is_none() {
            return Err("color must be a #rrggbb hex value".to_string());
        }
        if self.level < 1 || self.level > 10 {
            return Err("level must be between 1 and 10".to_string());
        }
        if self.field_width < 10 || self.field_width > 100 {
            return Err("field_width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("field_height must be between 10 and 100".to_string());
        }
        if self.cell_size < 4 || self.cell_size > 64 {
            return Err("cell_size must be between 4 and 64".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_SNAKE_COLOR.to_string(),
            level: 1,
            field_width: 30,
            field_height: 20,
            cell_size: 20,
        }
    }
}

/// Maps a difficulty name from the fixed table, or a plain number, to a
/// level multiplier. Anything else is `None` and the caller keeps its
/// current value.
pub fn parse_level(value: &str) -> Option<u32> {
    match value.trim().to_ascii_lowercase().as_str() {
        "easy" => Some(1),
        "medium" => Some(2),
        "hard" => Some(3),
        "very hard" | "very-hard" | "very_hard" => Some(4),
        other => other.parse::<u32>().ok().filter(|l| (1..=10).contains(l)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_arcade_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&config).unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        let loaded = manager.get_config().unwrap();

        assert_eq!(loaded, ClientConfig::default());
    }

    #[test]
    fn test_config_survives_a_save_load_cycle() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, ClientConfig, _> = ConfigManager::from_yaml_file(&file_path);
        let config = ClientConfig {
            color: "#ff00aa".to_string(),
            level: 3,
            ..ClientConfig::default()
        };

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();

        assert_eq!(config, loaded);
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_invalid_config_content_is_an_error() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("color: \"not a color\"\nlevel: 1\nfield_width: 30\nfield_height: 20\ncell_size: 20\n")
            .unwrap();

        let manager: ConfigManager<_, ClientConfig, _> = ConfigManager::from_yaml_file(&file_path);
        let result = manager.get_config();

        assert!(result.is_err());
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_parse_level_name_table() {
        assert_eq!(parse_level("easy"), Some(1));
        assert_eq!(parse_level("medium"), Some(2));
        assert_eq!(parse_level("hard"), Some(3));
        assert_eq!(parse_level("very hard"), Some(4));
        assert_eq!(parse_level("very-hard"), Some(4));
        assert_eq!(parse_level("Easy"), Some(1));
    }

    #[test]
    fn test_parse_level_plain_numbers() {
        assert_eq!(parse_level("1"), Some(1));
        assert_eq!(parse_level("4"), Some(4));
        assert_eq!(parse_level("10"), Some(10));
    }

    #[test]
    fn test_parse_level_rejects_garbage() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("0"), None);
        assert_eq!(parse_level("11"), None);
        assert_eq!(parse_level("-2"), None);
        assert_eq!(parse_level("impossible"), None);
    }
}
