// error.rs - errores de cada subsistema

use std::error::Error;
use std::fmt;

use crate::types::{ParticipantId, SpinResult};

/// Error de transporte del ledger. Se propaga sin modificar.
#[derive(Debug)]
pub enum LedgerError {
    Unavailable(Box<dyn Error + Send + Sync>),
}

impl LedgerError {
    pub fn unavailable<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        LedgerError::Unavailable(err.into())
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Unavailable(err) => write!(f, "ledger unavailable: {err}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LedgerError::Unavailable(err) => Some(err.as_ref()),
        }
    }
}

/// Fallos del sorteo ponderado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// La lista de candidatos vino vacía.
    NoCandidates,
    /// Hay candidatos pero la suma de pesos es 0.
    NoEligibleParticipants,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DrawError::NoCandidates => "no candidates to draw from",
            DrawError::NoEligibleParticipants => "none of the candidates has any weight",
        };
        f.write_str(msg)
    }
}

impl Error for DrawError {}

/// Errores visibles para quien gira la ruleta.
#[derive(Debug)]
pub enum SpinError {
    NoParticipants,
    NoTickets,
    NoSpinYet,
    LedgerUnavailable(LedgerError),
    /// El sorteo ya ocurrió pero no se pudo poner en 0 al ganador.
    ResetFailed {
        result: SpinResult,
        source: LedgerError,
    },
}

impl SpinError {
    /// Resultado ya sorteado, si el error llegó después del sorteo.
    pub fn result(&self) -> Option<&SpinResult> {
        match self {
            SpinError::ResetFailed { result, .. } => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::NoParticipants => f.write_str("no participants given"),
            SpinError::NoTickets => f.write_str("none of the participants have tickets"),
            SpinError::NoSpinYet => f.write_str("no spin yet to return"),
            SpinError::LedgerUnavailable(err) => write!(f, "{err}"),
            SpinError::ResetFailed { result, source } => {
                write!(f, "winner {} drawn but not reset: {source}", result.winner_id)
            }
        }
    }
}

impl Error for SpinError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SpinError::LedgerUnavailable(err) => Some(err),
            SpinError::ResetFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LedgerError> for SpinError {
    fn from(err: LedgerError) -> Self {
        SpinError::LedgerUnavailable(err)
    }
}

impl From<DrawError> for SpinError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::NoCandidates => SpinError::NoParticipants,
            DrawError::NoEligibleParticipants => SpinError::NoTickets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    PlayerDoesNotExist(ParticipantId),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::PlayerDoesNotExist(id) => write!(f, "player {id} does not exist"),
        }
    }
}

impl Error for RosterError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => write!(f, "invalid value for {var}: {value:?}"),
        }
    }
}

impl Error for ConfigError {}
