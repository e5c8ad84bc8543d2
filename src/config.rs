use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomUtilsConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub debounce_delay_ms: u32,
    pub throttle_delay_ms: u32,
}

impl Default for DomUtilsConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            debounce_delay_ms: 250,
            throttle_delay_ms: 100,
        }
    }
}

impl DomUtilsConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("DOM_UTILS_ENABLE_LOGGING"),
            option_env!("DOM_UTILS_LOG_LEVEL"),
            option_env!("DOM_UTILS_DEBOUNCE_MS"),
            option_env!("DOM_UTILS_THROTTLE_MS"),
        )
    }

    fn from_values(
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        debounce_ms: Option<&str>,
        throttle_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|v| v.trim().to_ascii_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
            debounce_delay_ms: debounce_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.debounce_delay_ms),
            throttle_delay_ms: throttle_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.throttle_delay_ms),
        }
    }

    /// Verifica si el logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log; valores desconocidos caen a `Info`
    pub fn level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: DomUtilsConfig = DomUtilsConfig::from_env();
}
