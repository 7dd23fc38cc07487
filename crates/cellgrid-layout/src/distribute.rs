//! Linear slack distribution shared by column and row sizing.

/// Split `slack` across `weights` proportionally.
///
/// Entries whose weight is not strictly positive receive `0.0`. Every other
/// positive-weight entry gets its proportional share floored to a whole
/// point; the last one receives whatever is left, so the shares sum to
/// `slack` exactly for whole-point input. A non-positive `slack` yields all
/// zeros.
pub(crate) fn distribute_slack(weights: &[f32], slack: f32) -> Vec<f32> {
    let mut shares = vec![0.0f32; weights.len()];
    if !is_positive(slack) {
        return shares;
    }

    let total_weight: f32 = weights.iter().copied().filter(|w| is_positive(*w)).sum();
    let Some(last) = weights.iter().rposition(|w| is_positive(*w)) else {
        return shares;
    };

    let mut remaining = slack;
    for (i, &weight) in weights.iter().enumerate() {
        if !is_positive(weight) {
            continue;
        }
        // Last item gets the rest to ensure exact sum
        let share = if i == last {
            remaining
        } else {
            (slack * weight / total_weight).floor().min(remaining)
        };
        shares[i] = share.max(0.0);
        remaining -= shares[i];
    }

    shares
}

/// Strictly positive and not NaN.
#[inline]
pub(crate) fn is_positive(value: f32) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_weights_split_evenly() {
        assert_eq!(distribute_slack(&[1.0, 1.0], 200.0), vec![100.0, 100.0]);
    }

    #[test]
    fn proportional_to_weight() {
        assert_eq!(distribute_slack(&[1.0, 3.0], 100.0), vec![25.0, 75.0]);
    }

    #[test]
    fn zero_weights_are_skipped() {
        assert_eq!(
            distribute_slack(&[0.0, 2.0, 0.0, 2.0, 0.0], 50.0),
            vec![0.0, 25.0, 0.0, 25.0, 0.0]
        );
    }

    #[test]
    fn last_resizable_absorbs_remainder() {
        assert_eq!(
            distribute_slack(&[1.0, 1.0, 1.0], 100.0),
            vec![33.0, 33.0, 34.0]
        );
        assert_eq!(
            distribute_slack(&[2.0, 0.0, 1.0, 1.0], 7.0),
            vec![3.0, 0.0, 1.0, 3.0]
        );
    }

    #[test]
    fn whole_point_shares_sum_exactly() {
        for slack in 1..=500u16 {
            let slack = f32::from(slack);
            let weight_sets: [&[f32]; 2] = [&[1.0, 2.0, 3.0], &[3.0, 1.0, 2.0, 1.0, 2.0, 3.0, 1.0]];
            for weights in weight_sets {
                let shares = distribute_slack(weights, slack);
                let sum: f32 = shares.iter().sum();
                assert_eq!(sum, slack, "weights {weights:?}");
                assert!(shares.iter().all(|s| *s >= 0.0 && s.fract() == 0.0));
            }
        }
    }

    #[test]
    fn no_slack_or_no_weight_gives_zeros() {
        assert_eq!(distribute_slack(&[1.0, 1.0], 0.0), vec![0.0, 0.0]);
        assert_eq!(distribute_slack(&[1.0, 1.0], -5.0), vec![0.0, 0.0]);
        assert_eq!(distribute_slack(&[0.0, 0.0], 10.0), vec![0.0, 0.0]);
        assert!(distribute_slack(&[], 10.0).is_empty());
    }
}
