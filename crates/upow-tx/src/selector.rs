//! Deterministic input selection.

use upow_types::Amount;

use crate::TransactionInput;

/// Pick inputs covering `target` with a two-pass greedy scan.
///
/// Pass 1 sorts the candidates by amount descending and accumulates
/// until the running total reaches the target. If that pass exhausts
/// every candidate without reaching it, the scan is retried ascending
/// and that prefix is returned instead.
///
/// Whether the candidates can cover the target at all is the caller's
/// precondition; the selector never raises insufficient funds.
pub fn select_inputs(candidates: Vec<TransactionInput>, target: Amount) -> Vec<TransactionInput> {
    let descending = accumulate(candidates.clone(), target, true);
    if total(&descending) >= target {
        return descending;
    }
    accumulate(candidates, target, false)
}

fn accumulate(
    mut candidates: Vec<TransactionInput>,
    target: Amount,
    descending: bool,
) -> Vec<TransactionInput> {
    candidates.sort_by_key(|input| input.amount_or_zero());
    if descending {
        candidates.reverse();
    }
    let mut running = Amount::ZERO;
    let mut selected = Vec::new();
    for input in candidates {
        if running >= target && !selected.is_empty() {
            break;
        }
        running = running
            .checked_add(input.amount_or_zero())
            .unwrap_or(running);
        selected.push(input);
    }
    selected
}

fn total(inputs: &[TransactionInput]) -> Amount {
    inputs
        .iter()
        .map(TransactionInput::amount_or_zero)
        .fold(Amount::ZERO, |acc, amount| {
            acc.checked_add(amount).unwrap_or(acc)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use upow_types::InputType;

    fn candidates(coins: &[u64]) -> Vec<TransactionInput> {
        coins
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                TransactionInput::new([i as u8; 32], 0, InputType::Regular)
                    .with_amount(Amount::from_whole(c))
            })
            .collect()
    }

    fn amounts(inputs: &[TransactionInput]) -> Vec<u64> {
        inputs
            .iter()
            .map(|i| (i.amount_or_zero().units() / 100_000_000) as u64)
            .collect()
    }

    #[test]
    fn test_largest_single_input_wins() {
        let picked = select_inputs(candidates(&[5, 3, 2, 10]), Amount::from_whole(7));
        assert_eq!(amounts(&picked), vec![10]);
    }

    #[test]
    fn test_descending_prefix_when_several_needed() {
        let picked = select_inputs(candidates(&[5, 3, 2]), Amount::from_whole(9));
        assert_eq!(amounts(&picked), vec![5, 3, 2]);
    }

    #[test]
    fn test_exact_cover_stops_early() {
        let picked = select_inputs(candidates(&[4, 3, 2, 1]), Amount::from_whole(7));
        assert_eq!(amounts(&picked), vec![4, 3]);
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        let picked = select_inputs(Vec::new(), Amount::from_whole(1));
        assert!(picked.is_empty());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let a = select_inputs(candidates(&[8, 1, 6, 2]), Amount::from_whole(9));
        let b = select_inputs(candidates(&[8, 1, 6, 2]), Amount::from_whole(9));
        assert_eq!(amounts(&a), amounts(&b));
        assert_eq!(amounts(&a), vec![8, 6]);
    }
}
