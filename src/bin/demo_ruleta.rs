use std::collections::HashMap;
use std::error::Error;

use ruleta::config::RuletaConfig;
use ruleta::draw::SeededRandom;
use ruleta::ledger::{Ledger, MemoryLedger};
use ruleta::spin::{SpinService, Spinner};
use ruleta::{ParticipantId, SpinMode, SpinResult, TicketBalance};

const RONDAS: usize = 50;

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = RuletaConfig::from_env()?;
    env_logger::Builder::new().parse_filters(&cfg.log_filter).init();

    println!("========================================");
    println!("   DEMO RULETA: PONDERADA + UNIFORME");
    println!("========================================\n");

    let rubi: ParticipantId = 1;
    let zafiro: ParticipantId = 2;
    let esmeralda: ParticipantId = 3;
    let gemas = [rubi, zafiro, esmeralda];

    println!("----------------------------------------");
    println!("FASE 1: sin rondas todavía");
    println!("----------------------------------------");

    let spinner = Spinner::new(MemoryLedger::new(), SeededRandom::from_seed(cfg.seed));
    match spinner.get_last() {
        Ok(last) => println!("  inesperado: {last}"),
        Err(err) => println!("  get_last() → {err}"),
    }
    match spinner.spin(&[], SpinMode::Weighted) {
        Ok(result) => println!("  inesperado: {result}"),
        Err(err) => println!("  spin([]) → {err}"),
    }

    println!("\n----------------------------------------");
    println!("FASE 2: ponderada, Rubí arranca con 40 tickets");
    println!("----------------------------------------");

    let counts = run_rounds(&spinner, &gemas, SpinMode::Weighted, rubi, 40)?;
    print_counts(&counts);
    spinner.ledger().print_state();
    println!("  Rubí debería salir bastante más que el resto.");

    println!("\n----------------------------------------");
    println!("FASE 3: uniforme, mismos saldos de arranque");
    println!("----------------------------------------");

    let spinner = Spinner::new(MemoryLedger::new(), SeededRandom::from_seed(cfg.seed));
    let counts = run_rounds(&spinner, &gemas, SpinMode::Unweighted, rubi, 40)?;
    print_counts(&counts);
    spinner.ledger().print_state();
    println!("  Cada gema debería salir ~1/3 de las veces.");

    if let Ok(last) = spinner.get_last() {
        println!("\nÚltima ronda: {last}");
    }
    println!("\nDemo terminada.");
    Ok(())
}

/// Gira `RONDAS` veces y cuenta cuántas ganó cada gema. Antes de cada
/// ronda se le devuelven `boost` tickets a `favorita`.
fn run_rounds<L: Ledger>(
    spinner: &Spinner<L>,
    gemas: &[ParticipantId],
    mode: SpinMode,
    favorita: ParticipantId,
    boost: i64,
) -> Result<HashMap<ParticipantId, u32>, Box<dyn Error>> {
    let mut counts: HashMap<ParticipantId, u32> = HashMap::new();
    for _ in 0..RONDAS {
        spinner
            .ledger()
            .set(&[TicketBalance::new(favorita, boost)])?;
        let SpinResult { winner_id, .. } = spinner.spin(gemas, mode)?;
        *counts.entry(winner_id).or_insert(0) += 1;
    }
    Ok(counts)
}

fn print_counts(counts: &HashMap<ParticipantId, u32>) {
    let mut ids: Vec<_> = counts.keys().copied().collect();
    ids.sort_unstable();
    println!("Veces que ganó cada gema ({RONDAS} rondas):");
    for id in ids {
        println!("  gema {id}: {} veces", counts[&id]);
    }
}
