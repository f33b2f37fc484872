//! Ronda de la ruleta: premia la participación, sortea y consume los
//! tickets del ganador.

use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::draw::{self, RandomSource, SeededRandom};
use crate::error::SpinError;
use crate::ledger::Ledger;
use crate::types::{ParticipantId, SpinMode, SpinResult, TicketBalance};

mod middleware;

pub use middleware::LoggingSpinner;

/// Operaciones que la ruleta expone a sus clientes.
pub trait SpinService: Send + Sync {
    /// Gira la ruleta con los participantes dados.
    fn spin(&self, participant_ids: &[ParticipantId], mode: SpinMode)
        -> Result<SpinResult, SpinError>;

    /// Último resultado; `NoSpinYet` si todavía no hubo ninguna ronda.
    fn get_last(&self) -> Result<SpinResult, SpinError>;
}

impl<S: SpinService + ?Sized> SpinService for std::sync::Arc<S> {
    fn spin(
        &self,
        participant_ids: &[ParticipantId],
        mode: SpinMode,
    ) -> Result<SpinResult, SpinError> {
        (**self).spin(participant_ids, mode)
    }

    fn get_last(&self) -> Result<SpinResult, SpinError> {
        (**self).get_last()
    }
}

/// Orquestador de rondas sobre un `Ledger` cualquiera.
///
/// El lock de la fuente aleatoria se mantiene durante toda la ronda
/// (increment → sorteo → reset), así que dos rondas nunca se intercalan.
/// El último resultado vive en su propio lock y se escribe completo.
pub struct Spinner<L, R = SeededRandom> {
    ledger: L,
    rng: Mutex<R>,
    last: Mutex<Option<SpinResult>>,
}

impl<L: Ledger> Spinner<L> {
    /// Ruleta con un generador sembrado desde la entropía del sistema.
    pub fn with_entropy(ledger: L) -> Self {
        Self::new(ledger, SeededRandom::from_entropy())
    }
}

impl<L: Ledger, R: RandomSource> Spinner<L, R> {
    /// ```rust
    /// use ruleta::draw::SeededRandom;
    /// use ruleta::ledger::{Ledger, MemoryLedger};
    /// use ruleta::spin::{SpinService, Spinner};
    /// use ruleta::types::SpinMode;
    ///
    /// let spinner = Spinner::new(MemoryLedger::new(), SeededRandom::new(1));
    /// let result = spinner.spin(&[1, 2, 3], SpinMode::Weighted).unwrap();
    /// assert!(result.participant_ids.contains(&result.winner_id));
    /// assert_eq!(spinner.ledger().get(&[result.winner_id]).unwrap()[0].tickets, 0);
    /// ```
    pub fn new(ledger: L, rng: R) -> Self {
        Self {
            ledger,
            rng: Mutex::new(rng),
            last: Mutex::new(None),
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    fn record_last(&self, result: &SpinResult) {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        *last = Some(result.clone());
    }
}

/// Entrada del sorteo: un peso por saldo devuelto por `increment`, en el
/// mismo orden. Un id repetido aparece tantas veces como vino.
fn draw_input(tickets: &[TicketBalance], mode: SpinMode) -> Vec<(ParticipantId, u64)> {
    tickets
        .iter()
        .map(|b| match mode {
            SpinMode::Weighted => (b.id, b.weight()),
            SpinMode::Unweighted => (b.id, 1),
        })
        .collect()
}

impl<L: Ledger, R: RandomSource> SpinService for Spinner<L, R> {
    fn spin(
        &self,
        participant_ids: &[ParticipantId],
        mode: SpinMode,
    ) -> Result<SpinResult, SpinError> {
        if participant_ids.is_empty() {
            return Err(SpinError::NoParticipants);
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let tickets = self.ledger.increment(participant_ids)?;
        let weights = draw_input(&tickets, mode);
        debug!("draw input mode={mode:?} weights={weights:?}");

        let winner_id = draw::choose_winner(&weights, &mut *rng)?;

        let result = SpinResult {
            participant_ids: participant_ids.to_vec(),
            winner_id,
        };
        self.record_last(&result);

        if let Err(source) = self.ledger.set(&[TicketBalance::new(winner_id, 0)]) {
            return Err(SpinError::ResetFailed { result, source });
        }
        Ok(result)
    }

    fn get_last(&self) -> Result<SpinResult, SpinError> {
        let last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        last.clone().ok_or(SpinError::NoSpinYet)
    }
}
