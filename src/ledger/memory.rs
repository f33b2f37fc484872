use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::debug;

use super::Ledger;
use crate::error::LedgerError;
use crate::types::{ParticipantId, TicketBalance};

/// Ledger en memoria: un `HashMap` protegido por un único `Mutex`.
///
/// Sólo guarda saldos positivos; la ausencia se lee como 0.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: Mutex<HashMap<ParticipantId, i64>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ejecuta `f` con acceso de sólo lectura a los saldos.
    fn with_balances<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&HashMap<ParticipantId, i64>) -> R,
    {
        let balances = self.balances.lock().unwrap_or_else(PoisonError::into_inner);
        f(&balances)
    }

    /// Igual que `with_balances` pero mutable. El lock se mantiene toda la llamada.
    fn with_balances_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<ParticipantId, i64>) -> R,
    {
        let mut balances = self.balances.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut balances)
    }

    /// Todos los saldos no nulos, ordenados por id.
    pub fn snapshot(&self) -> Vec<TicketBalance> {
        let mut all: Vec<TicketBalance> = self.with_balances(|map| {
            map.iter()
                .map(|(&id, &tickets)| TicketBalance::new(id, tickets))
                .collect()
        });
        all.sort_by_key(|b| b.id);
        all
    }

    /// Cantidad de participantes con tickets.
    pub fn len(&self) -> usize {
        self.with_balances(|map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn print_state(&self) {
        println!("┌──── ledger ────┐");
        for b in self.snapshot() {
            println!("│ gema {:>4} → {:>4} │", b.id, b.tickets);
        }
        println!("└────────────────┘");
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        Ok(self.with_balances(|map| {
            ids.iter()
                .map(|&id| {
                    let tickets = map.get(&id).copied().unwrap_or(0);
                    debug!("get tickets id={id} tickets={tickets}");
                    TicketBalance::new(id, tickets)
                })
                .collect()
        }))
    }

    fn increment(&self, ids: &[ParticipantId]) -> Result<Vec<TicketBalance>, LedgerError> {
        Ok(self.with_balances_mut(|map| {
            ids.iter()
                .map(|&id| {
                    let tickets = map.entry(id).or_insert(0);
                    // tope en i64::MAX: nunca desborda
                    *tickets = tickets.saturating_add(1);
                    debug!("increment tickets id={id} tickets={tickets}");
                    TicketBalance::new(id, *tickets)
                })
                .collect()
        }))
    }

    fn set(&self, balances: &[TicketBalance]) -> Result<Vec<TicketBalance>, LedgerError> {
        self.with_balances_mut(|map| {
            for b in balances {
                if b.tickets <= 0 {
                    map.remove(&b.id);
                } else {
                    map.insert(b.id, b.tickets);
                }
                debug!("set tickets id={} tickets={}", b.id, b.tickets);
            }
        });
        Ok(balances.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_read_as_zero_without_side_effects() {
        let ledger = MemoryLedger::new();
        let got = ledger.get(&[1, 2]).unwrap();
        assert_eq!(got, vec![TicketBalance::new(1, 0), TicketBalance::new(2, 0)]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn increment_counts_duplicates_in_order() {
        let ledger = MemoryLedger::new();
        let got = ledger.increment(&[3, 1, 3]).unwrap();
        assert_eq!(
            got,
            vec![
                TicketBalance::new(3, 1),
                TicketBalance::new(1, 1),
                TicketBalance::new(3, 2),
            ]
        );
        assert_eq!(ledger.get(&[3]).unwrap()[0].tickets, 2);
    }

    #[test]
    fn set_to_zero_or_less_removes_entry() {
        let ledger = MemoryLedger::new();
        ledger.increment(&[1, 2, 2]).unwrap();

        let input = vec![TicketBalance::new(1, 0), TicketBalance::new(2, -3)];
        let echoed = ledger.set(&input).unwrap();

        assert_eq!(echoed, input);
        assert!(ledger.is_empty());
        assert_eq!(ledger.get(&[2]).unwrap()[0].tickets, 0);
    }

    #[test]
    fn set_assigns_absolute_balance() {
        let ledger = MemoryLedger::new();
        ledger.set(&[TicketBalance::new(9, 10)]).unwrap();
        ledger.increment(&[9]).unwrap();
        assert_eq!(ledger.snapshot(), vec![TicketBalance::new(9, 11)]);
    }

    #[test]
    fn increment_at_max_balance_saturates() {
        let ledger = MemoryLedger::new();
        ledger.set(&[TicketBalance::new(1, i64::MAX)]).unwrap();

        let got = ledger.increment(&[2, 1, 2]).unwrap();

        assert_eq!(
            got,
            vec![
                TicketBalance::new(2, 1),
                TicketBalance::new(1, i64::MAX),
                TicketBalance::new(2, 2),
            ]
        );
        assert_eq!(ledger.get(&[1]).unwrap()[0].tickets, i64::MAX);
    }

    #[test]
    fn snapshot_is_ordered_by_id() {
        let ledger = MemoryLedger::new();
        ledger.increment(&[30, 10, 20]).unwrap();
        let ids: Vec<_> = ledger.snapshot().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
