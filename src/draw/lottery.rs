use crate::types::ParticipantId;

/// Suma de pesos en `u128`: cada peso cabe en `u64`, así que la suma no
/// desborda con ninguna cantidad de candidatos que quepa en memoria.
pub(super) fn total_weight(weights: &[(ParticipantId, u64)]) -> u128 {
    weights.iter().map(|&(_, w)| u128::from(w)).sum()
}

/// Lottery: recorre los pesos en orden acumulando; gana el primero cuyo
/// acumulado supera `pick`. `pick` debe estar en `[0, total)`.
pub(super) fn pick(weights: &[(ParticipantId, u64)], pick: u128) -> Option<ParticipantId> {
    let mut acc: u128 = 0;
    for &(id, weight) in weights {
        acc += u128::from(weight);
        if pick < acc {
            return Some(id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_past_total_finds_nobody() {
        assert_eq!(pick(&[(1, 2), (2, 2)], 4), None);
        assert_eq!(pick(&[(1, 2), (2, 2)], 3), Some(2));
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(total_weight(&[]), 0);
    }

    #[test]
    fn total_of_huge_weights_does_not_wrap() {
        let weights = [(1, u64::MAX), (2, u64::MAX), (3, 1)];
        assert_eq!(total_weight(&weights), 2 * u128::from(u64::MAX) + 1);
        assert_eq!(pick(&weights, u128::from(u64::MAX)), Some(2));
        assert_eq!(pick(&weights, 2 * u128::from(u64::MAX)), Some(3));
    }
}
