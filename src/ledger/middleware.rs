use std::time::Instant;

use log::{info, warn};

use super::Ledger;
use crate::error::LedgerError;
use crate::types::{ParticipantId, TicketBalance};

/// Decorador que registra cada llamada al ledger: método, entrada,
/// resultado y duración.
#[derive(Debug)]
pub struct LoggingLedger<L> {
    next: L,
}

impl<L: Ledger> LoggingLedger<L> {
    pub fn new(next: L) -> Self {
        Self { next }
    }

    pub fn inner(&self) -> &L {
        &self.next
    }

    fn logged<T>(
        method: &str,
        input: &T,
        call: impl FnOnce() -> Result<Vec<TicketBalance>, LedgerError>,
    ) -> Result<Vec<TicketBalance>, LedgerError>
    where
        T: std::fmt::Debug + ?Sized,
    {
        let begin = Instant::now();
        let res = call();
        match &res {
            Ok(tickets) => info!(
                "method={method} input={input:?} tickets={} duration={:?}",
                render(tickets),
                begin.elapsed()
            ),
            Err(err) => warn!(
                "method={method} input={input:?} duration={:?} err={err}",
                begin.elapsed()
            ),
        }
        res
    }
}

fn render(tickets: &[TicketBalance]) -> String {
    let parts: Vec<String> = tickets.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(" "))
}

impl<L: Ledger> Ledger for LoggingLedger<L> {
    fn get(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        Self::logged("Get", ids, || self.next.get(ids))
    }

    fn increment(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        Self::logged("Increment", ids, || self.next.increment(ids))
    }

    fn set(&self, balances: &[TicketBalance]) -> Result<Vec<TicketBalance>, LedgerError> {
        Self::logged("Set", balances, || self.next.set(balances))
    }
}
