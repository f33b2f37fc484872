pub mod config;
pub mod draw;
pub mod error;
pub mod ledger;
pub mod roster;
pub mod spin;
pub mod types;

pub use error::{ConfigError, DrawError, LedgerError, RosterError, SpinError};
pub use types::{ParticipantId, Player, SpinMode, SpinResult, TicketBalance};
