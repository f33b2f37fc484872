//! Ledger de tickets: cuántos tickets tiene cada participante.
//!
//! El contrato es el mismo para el ledger en memoria y para cualquier
//! cliente remoto: un participante ausente tiene 0 tickets, y poner un
//! saldo en 0 (o menos) lo elimina.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::LedgerError;
use crate::types::{ParticipantId, TicketBalance};

mod memory;
mod middleware;

pub use memory::MemoryLedger;
pub use middleware::LoggingLedger;

/// Capacidades que la ruleta consume del ledger.
///
/// Cada llamada es atómica respecto del ledger completo.
pub trait Ledger: Send + Sync {
    /// Saldo actual de cada id, en el orden recibido. Leer no crea entradas.
    fn get(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError>;

    /// Suma 1 a cada id (los repetidos suman varias veces) y devuelve
    /// el saldo resultante de cada uno, en el orden recibido.
    fn increment(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError>;

    /// Asigna saldos absolutos; `tickets <= 0` elimina al participante.
    /// Devuelve la entrada tal cual como confirmación.
    fn set(&self, balances: &[TicketBalance]) -> Result<Vec<TicketBalance>, LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn get(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        (**self).get(ids)
    }

    fn increment(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        (**self).increment(ids)
    }

    fn set(&self, balances: &[TicketBalance]) -> Result<Vec<TicketBalance>, LedgerError> {
        (**self).set(balances)
    }
}

impl<L: Ledger + ?Sized> Ledger for Arc<L> {
    fn get(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        (**self).get(ids)
    }

    fn increment(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        (**self).increment(ids)
    }

    fn set(&self, balances: &[TicketBalance]) -> Result<Vec<TicketBalance>, LedgerError> {
        (**self).set(balances)
    }
}

/// Ledger global del proceso. Vive lo que vive el proceso, sin persistencia.
static GLOBAL_LEDGER: Lazy<MemoryLedger> = Lazy::new(MemoryLedger::new);

/// Acceso al ledger compartido por todo el proceso.
///
/// ```rust
/// use ruleta::ledger::{self, Ledger};
///
/// let balances = ledger::global().get(&[123_456]).unwrap();
/// assert_eq!(balances[0].tickets, 0);
/// ```
pub fn global() -> &'static MemoryLedger {
    &GLOBAL_LEDGER
}
