use serde::Deserialize;

/// Отсутствующие в переопределении секции и ключи берутся по умолчанию
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DesignerConfig {
    pub storage: StorageConfig,
    pub canvas: CanvasConfig,
    pub calculation: CalculationConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Ключ localStorage с массивом шаблонов
    pub templates_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    /// Размер страницы в пикселях (A4 при 96 dpi)
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CalculationConfig {
    pub tax_rate: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Имитация задержки для импорта и конвертации макросов
    pub simulated_latency_ms: u32,
}

/// Ключ localStorage, где может лежать переопределение конфигурации
pub const CONFIG_OVERRIDE_KEY: &str = "designer_config";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[storage]
templates_key = "templates"

[canvas]
width = 794.0
height = 1123.0

[calculation]
tax_rate = 0.08

[ui]
simulated_latency_ms = 1500
"#;

/// Load configuration
///
/// Search order:
/// 1. Override TOML (from localStorage in the browser)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DesignerConfig> {
    if let Some(contents) = override_toml {
        match toml::from_str::<DesignerConfig>(contents) {
            Ok(config) => {
                log::info!("Using configuration override");
                return Ok(config);
            }
            Err(e) => {
                log::warn!("Invalid configuration override, falling back to default: {}", e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    let config: DesignerConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            templates_key: "templates".to_string(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 794.0,
            height: 1123.0,
        }
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self { tax_rate: 0.08 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<DesignerConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.storage.templates_key, "templates");
        assert_eq!(config.canvas.width, 794.0);
        assert_eq!(config.calculation.tax_rate, 0.08);
        assert_eq!(config.ui.simulated_latency_ms, 1500);
        assert_eq!(config, DesignerConfig::default());
    }

    #[test]
    fn test_partial_override_merges_with_defaults() {
        let custom = r#"
[ui]
simulated_latency_ms = 0

[canvas]
width = 1000.0
"#;
        let config = load_config(Some(custom)).unwrap();
        assert_eq!(config.ui.simulated_latency_ms, 0);
        assert_eq!(config.canvas.width, 1000.0);
        assert_eq!(config.canvas.height, 1123.0);
        assert_eq!(config.storage.templates_key, "templates");
        assert_eq!(config.calculation.tax_rate, 0.08);
    }

    #[test]
    fn test_override_is_used() {
        let custom = r#"
[storage]
templates_key = "my_templates"

[canvas]
width = 1000.0
height = 500.0

[calculation]
tax_rate = 0.2

[ui]
simulated_latency_ms = 0
"#;
        let config = load_config(Some(custom)).unwrap();
        assert_eq!(config.storage.templates_key, "my_templates");
        assert_eq!(config.calculation.tax_rate, 0.2);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("not = [valid")).unwrap();
        assert_eq!(config, DesignerConfig::default());
    }
}
