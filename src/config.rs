// config.rs - parámetros de arranque leídos del entorno

use std::env;

use crate::error::ConfigError;
use crate::types::SpinMode;

pub const ENV_SEED: &str = "RULETA_SEED";
pub const ENV_MODE: &str = "RULETA_MODE";
pub const ENV_LOG: &str = "RULETA_LOG";
pub const ENV_ROUNDS: &str = "RULETA_ROUNDS";

const DEFAULT_LOG: &str = "info";
const DEFAULT_ROUNDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuletaConfig {
    /// Semilla del sorteo; `None` siembra desde la entropía del sistema.
    pub seed: Option<u64>,
    pub mode: SpinMode,
    /// Filtro para `env_logger` (p. ej. `info` o `ruleta=debug`).
    pub log_filter: String,
    /// Rondas por hilo en la simulación.
    pub rounds: usize,
}

impl Default for RuletaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mode: SpinMode::Weighted,
            log_filter: DEFAULT_LOG.to_string(),
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl RuletaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda propia.
    /// Variables vacías o ausentes toman el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw.trim().parse().map_err(|_| invalid(ENV_SEED, &raw))?;
            cfg.seed = Some(seed);
        }
        if let Some(raw) = get(ENV_MODE) {
            cfg.mode = match raw.trim().to_ascii_lowercase().as_str() {
                "weighted" => SpinMode::Weighted,
                "unweighted" => SpinMode::Unweighted,
                _ => return Err(invalid(ENV_MODE, &raw)),
            };
        }
        if let Some(raw) = get(ENV_LOG) {
            cfg.log_filter = raw;
        }
        if let Some(raw) = get(ENV_ROUNDS) {
            cfg.rounds = raw.trim().parse().map_err(|_| invalid(ENV_ROUNDS, &raw))?;
        }
        Ok(cfg)
    }
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
    }
}
