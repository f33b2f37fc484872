//! Sorteo ponderado: elige un participante con probabilidad
//! proporcional a su peso.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::DrawError;
use crate::types::ParticipantId;

mod lottery;

/// Fuente de números aleatorios inyectable.
///
/// `draw_below(total)` debe devolver un entero uniforme en `[0, total)`.
/// `total` nunca es 0.
pub trait RandomSource: Send {
    fn draw_below(&mut self, total: u128) -> u128;
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn draw_below(&mut self, total: u128) -> u128 {
        (**self).draw_below(total)
    }
}

/// Generador único sembrado una sola vez, al crearse.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Semilla fija: misma secuencia de sorteos en cada corrida.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Semilla tomada de la entropía del sistema operativo.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// `Some(seed)` para corridas reproducibles, `None` para producción.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandom {
    fn draw_below(&mut self, total: u128) -> u128 {
        self.rng.gen_range(0..total)
    }
}

/// Elige al ganador entre `(id, peso)`.
///
/// Los pesos 0 nunca ganan. Si todos pesan 0 falla con
/// `NoEligibleParticipants` en vez de devolver un ganador por defecto.
///
/// ```rust
/// use ruleta::draw::{choose_winner, SeededRandom};
///
/// let mut rng = SeededRandom::new(7);
/// let winner = choose_winner(&[(1, 0), (2, 3)], &mut rng).unwrap();
/// assert_eq!(winner, 2);
/// ```
pub fn choose_winner<R>(
    weights: &[(ParticipantId, u64)],
    rng: &mut R,
) -> Result<ParticipantId, DrawError>
where
    R: RandomSource + ?Sized,
{
    if weights.is_empty() {
        return Err(DrawError::NoCandidates);
    }
    let total = lottery::total_weight(weights);
    if total == 0 {
        return Err(DrawError::NoEligibleParticipants);
    }
    let pick = rng.draw_below(total) % total;
    lottery::pick(weights, pick).ok_or(DrawError::NoEligibleParticipants)
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedDraws;
    use super::*;

    #[test]
    fn cumulative_ranges_select_expected_winner() {
        // A cubre [0,2), B cubre [2,7), C cubre [7,8)
        let weights = [(10, 2), (20, 5), (30, 1)];
        let mut rng = ScriptedDraws::new(&[3]);
        assert_eq!(choose_winner(&weights, &mut rng), Ok(20));
        assert_eq!(rng.totals, vec![8]);

        for (r, expected) in [(0, 10), (1, 10), (2, 20), (6, 20), (7, 30)] {
            let mut rng = ScriptedDraws::new(&[r]);
            assert_eq!(choose_winner(&weights, &mut rng), Ok(expected), "r={r}");
        }
    }

    #[test]
    fn zero_total_is_an_error_not_a_default_winner() {
        let mut rng = ScriptedDraws::new(&[0]);
        assert_eq!(
            choose_winner(&[(5, 0), (6, 0)], &mut rng),
            Err(DrawError::NoEligibleParticipants)
        );
        assert!(rng.totals.is_empty());
    }

    #[test]
    fn empty_input_is_distinct_from_zero_weights() {
        let mut rng = ScriptedDraws::new(&[0]);
        assert_eq!(choose_winner(&[], &mut rng), Err(DrawError::NoCandidates));
    }

    #[test]
    fn zero_weight_entries_are_skipped() {
        let weights = [(1, 0), (2, 1), (3, 0)];
        for seed in 0..50 {
            let mut rng = SeededRandom::new(seed);
            assert_eq!(choose_winner(&weights, &mut rng), Ok(2));
        }
    }

    #[test]
    fn weights_past_u64_still_draw() {
        let big = u64::MAX;
        let mut rng = ScriptedDraws::new(&[u128::from(big) + 1, u128::from(big) - 1]);
        let weights = [(1, big), (2, big), (3, big)];
        assert_eq!(choose_winner(&weights, &mut rng), Ok(2));
        assert_eq!(choose_winner(&weights, &mut rng), Ok(1));
        assert_eq!(rng.totals, vec![3 * u128::from(big); 2]);
    }

    #[test]
    fn heavier_weights_win_more_often() {
        let weights = [(1, 1), (2, 9)];
        let mut rng = SeededRandom::new(42);
        let heavy = (0..2000)
            .filter(|_| choose_winner(&weights, &mut rng) == Ok(2))
            .count();
        // esperado ~1800
        assert!((1650..=1950).contains(&heavy), "heavy={heavy}");
    }

    #[test]
    fn same_seed_same_sequence() {
        let weights = [(1, 3), (2, 3), (3, 3)];
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        let xs: Vec<_> = (0..20).map(|_| choose_winner(&weights, &mut a)).collect();
        let ys: Vec<_> = (0..20).map(|_| choose_winner(&weights, &mut b)).collect();
        assert_eq!(xs, ys);
    }
}
