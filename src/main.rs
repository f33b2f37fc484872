use std::error::Error;
use std::sync::Arc;
use std::thread::{self, sleep};
use std::time::Duration;

use log::{error, info};

use ruleta::config::RuletaConfig;
use ruleta::draw::SeededRandom;
use ruleta::ledger::{self, LoggingLedger, MemoryLedger};
use ruleta::roster::Roster;
use ruleta::spin::{LoggingSpinner, SpinService, Spinner};
use ruleta::SpinError;

type SharedSpinner = Arc<LoggingSpinner<Spinner<LoggingLedger<&'static MemoryLedger>>>>;

fn run_table(name: &'static str, spinner: SharedSpinner, table: Vec<i64>, cfg: RuletaConfig) {
    for round in 0..cfg.rounds {
        match spinner.spin(&table, cfg.mode) {
            Ok(result) => println!("[{name}] ronda {round}: gana la gema {}", result.winner_id),
            Err(SpinError::ResetFailed { result, source }) => {
                error!("[{name}] ronda {round}: ganador {} sin reset: {source}", result.winner_id)
            }
            Err(err) => error!("[{name}] ronda {round}: {err}"),
        }
        sleep(Duration::from_millis(50));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = RuletaConfig::from_env()?;
    env_logger::Builder::new().parse_filters(&cfg.log_filter).init();
    info!("config {cfg:?}");

    // === Jugadores ===
    let roster = Roster::new();
    for name in ["Rubí", "Zafiro", "Esmeralda", "Diamante", "Ámbar"] {
        roster.add(name);
    }

    let spinner: SharedSpinner = Arc::new(LoggingSpinner::new(Spinner::new(
        LoggingLedger::new(ledger::global()),
        SeededRandom::from_seed(cfg.seed),
    )));

    // Dos mesas que comparten gemas giran en paralelo contra el mismo ledger
    let ids = roster.ids();
    let (norte, sur) = (&ids[..ids.len().min(4)], &ids[ids.len().min(2)..]);
    let mesas = [("mesa-norte", norte.to_vec()), ("mesa-sur", sur.to_vec())];
    let handles: Vec<_> = mesas
        .into_iter()
        .map(|(name, table)| {
            let spinner = Arc::clone(&spinner);
            let cfg = cfg.clone();
            thread::spawn(move || run_table(name, spinner, table, cfg))
        })
        .collect();

    for h in handles {
        if h.join().is_err() {
            error!("un hilo de mesa terminó con pánico");
        }
    }

    // === Estado final ===
    println!("\n=== Estado final del ledger ===");
    for b in ledger::global().snapshot() {
        let name = roster.name_of(b.id).unwrap_or_else(|| "?".into());
        println!("  {:<10} (gema {}) → {} tickets", name, b.id, b.tickets);
    }

    match spinner.get_last() {
        Ok(last) => {
            let name = roster.name_of(last.winner_id).unwrap_or_default();
            println!("Última ronda: {last} → {name}");
        }
        Err(err) => println!("Última ronda: {err}"),
    }

    Ok(())
}
