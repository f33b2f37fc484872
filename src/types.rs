// types.rs - tipos compartidos entre ledger, sorteo y roster

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador opaco de un participante (una "gema").
pub type ParticipantId = i64;

/// Saldo de tickets de un participante.
///
/// Un saldo de 0 equivale a no estar en el ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketBalance {
    pub id: ParticipantId,
    pub tickets: i64,
}

impl TicketBalance {
    pub fn new(id: ParticipantId, tickets: i64) -> Self {
        Self { id, tickets }
    }

    /// Peso para el sorteo; los saldos negativos no aportan.
    pub fn weight(&self) -> u64 {
        self.tickets.max(0) as u64
    }
}

impl fmt::Display for TicketBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id: {}, tickets: {}}}", self.id, self.tickets)
    }
}

/// Resultado de una ronda de la ruleta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    pub participant_ids: Vec<ParticipantId>,
    pub winner_id: ParticipantId,
}

impl fmt::Display for SpinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{participants: {:?}, winner: {}}}",
            self.participant_ids, self.winner_id
        )
    }
}

/// Cómo se construyen los pesos del sorteo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinMode {
    /// Cada participante pesa lo que tiene en el ledger.
    #[default]
    Weighted,
    /// Todos pesan 1 en este sorteo; el ledger no cambia.
    Unweighted,
}

impl SpinMode {
    pub fn from_weighted(weighted: bool) -> Self {
        if weighted {
            SpinMode::Weighted
        } else {
            SpinMode::Unweighted
        }
    }

    pub fn is_weighted(self) -> bool {
        self == SpinMode::Weighted
    }
}

/// Jugador registrado en el roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: ParticipantId,
    pub name: String,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id: {}, name: {}}}", self.id, self.name)
    }
}
