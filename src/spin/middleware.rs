use std::time::Instant;

use log::{info, warn};

use super::SpinService;
use crate::error::SpinError;
use crate::types::{ParticipantId, SpinMode, SpinResult};

/// Decorador de logging para cualquier `SpinService`.
///
/// Por cada llamada deja una línea con método, entrada, resultado,
/// duración y error; la lógica de la ronda no se entera.
pub struct LoggingSpinner<S> {
    next: S,
}

impl<S: SpinService> LoggingSpinner<S> {
    pub fn new(next: S) -> Self {
        Self { next }
    }

    pub fn inner(&self) -> &S {
        &self.next
    }
}

fn log_call(method: &str, input: &str, res: &Result<SpinResult, SpinError>, begin: Instant) {
    match res {
        Ok(result) => info!(
            "method={method} input={input} result={result} duration={:?}",
            begin.elapsed()
        ),
        Err(err) => match err.result() {
            Some(result) => warn!(
                "method={method} input={input} result={result} duration={:?} err={err}",
                begin.elapsed()
            ),
            None => warn!(
                "method={method} input={input} duration={:?} err={err}",
                begin.elapsed()
            ),
        },
    }
}

impl<S: SpinService> SpinService for LoggingSpinner<S> {
    fn spin(
        &self,
        participant_ids: &[ParticipantId],
        mode: SpinMode,
    ) -> Result<SpinResult, SpinError> {
        let begin = Instant::now();
        let res = self.next.spin(participant_ids, mode);
        let method = match mode {
            SpinMode::Weighted => "Spin",
            SpinMode::Unweighted => "SpinUnweighted",
        };
        log_call(method, &format!("{participant_ids:?}"), &res, begin);
        res
    }

    fn get_last(&self) -> Result<SpinResult, SpinError> {
        let begin = Instant::now();
        let res = self.next.get_last();
        log_call("GetLast", "-", &res, begin);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::testing::ScriptedDraws;
    use crate::ledger::{Ledger, MemoryLedger};
    use crate::spin::Spinner;

    #[test]
    fn decorated_spinner_behaves_like_inner() {
        let spinner = LoggingSpinner::new(Spinner::new(MemoryLedger::new(), ScriptedDraws::new(&[1])));

        assert!(matches!(spinner.get_last(), Err(SpinError::NoSpinYet)));
        let result = spinner.spin(&[8, 9], SpinMode::Unweighted).unwrap();
        assert_eq!(result.winner_id, 9);
        assert_eq!(spinner.get_last().unwrap(), result);
        assert_eq!(spinner.inner().ledger().get(&[8, 9]).unwrap()[1].tickets, 0);
    }
}
