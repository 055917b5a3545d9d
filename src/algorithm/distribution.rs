/// Ants a path set delivers within `steps` steps: a path of length `l`
/// delivers `max(0, steps - l + 1)`.
fn capacity(steps: usize, lengths: &[usize]) -> usize {
    lengths
        .iter()
        .map(|&length| steps.saturating_add(1).saturating_sub(length))
        .fold(0, usize::saturating_add)
}

/// Smallest `s` with `capacity(s) >= ants`, for lengths sorted ascending.
///
/// Between two consecutive lengths the capacity grows linearly, so the best
/// step count over the first `k` paths has a closed form.
fn min_steps(ants: usize, sorted: impl Iterator<Item = usize>) -> usize {
    let mut steps = usize::MAX;
    let mut waiting: usize = 0;
    for (k, length) in sorted.enumerate() {
        waiting = waiting.saturating_add(length - 1);
        let candidate = ants.saturating_add(waiting).div_ceil(k + 1).max(length);
        steps = steps.min(candidate);
    }
    steps
}

/// Steps needed to push `ants` through paths of the given lengths with one
/// departure per path per step. The flag tells whether the longest path
/// still gets ants once it fills; it is `false` when that path would idle.
pub(crate) fn fast_calc_steps(ants: usize, lengths: &[usize]) -> (usize, bool) {
    let Some(&longest) = lengths.iter().max() else {
        return (0, false);
    };
    if ants == 0 {
        return (0, false);
    }
    if lengths.contains(&1) {
        return (1, true);
    }

    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let steps = min_steps(ants, sorted.into_iter());
    (steps, capacity(longest, lengths) <= ants)
}

/// Smallest step count moving exactly `ants` ants over paths of the given
/// lengths, and how many ants go down each path (aligned with `lengths`).
///
/// A path of length `l` can deliver `max(0, s - l + 1)` ants within `s` steps.
/// Every used path is filled to that bound, then the surplus is taken back one
/// ant at a time from the longest used paths.
pub fn calc_steps(ants: usize, lengths: &[usize]) -> (usize, Vec<usize>) {
    let mut distribution = vec![0; lengths.len()];
    if lengths.is_empty() || ants == 0 {
        return (0, distribution);
    }

    let mut order: Vec<usize> = (0..lengths.len()).collect();
    order.sort_by_key(|&i| lengths[i]);

    // Direct corridor: everybody walks in at once.
    if lengths[order[0]] == 1 {
        distribution[order[0]] = ants;
        return (1, distribution);
    }

    let steps = min_steps(ants, order.iter().map(|&i| lengths[i]));

    for &i in &order {
        distribution[i] = steps.saturating_add(1).saturating_sub(lengths[i]);
    }
    let mut surplus = capacity(steps, lengths).saturating_sub(ants);
    for &i in order.iter().rev() {
        if surplus == 0 {
            break;
        }
        if distribution[i] > 0 {
            distribution[i] -= 1;
            surplus -= 1;
        }
    }

    (steps, distribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_calc_steps() {
        assert_eq!(fast_calc_steps(4, &[2]), (5, true));
        assert_eq!(fast_calc_steps(4, &[2, 2]), (3, true));
        assert_eq!(fast_calc_steps(10, &[4, 4]), (8, true));
        assert_eq!(fast_calc_steps(7, &[3, 1, 5]), (1, true));
        assert_eq!(fast_calc_steps(3, &[]), (0, false));
    }

    #[test]
    fn test_fast_calc_steps_idle_longest_path() {
        // One ant takes the short path; the long one never fills.
        assert_eq!(fast_calc_steps(1, &[2, 10]), (2, false));
        assert_eq!(fast_calc_steps(1, &[4, 4]), (4, false));
        assert_eq!(fast_calc_steps(2, &[4, 4]), (4, true));
    }

    #[test]
    fn test_calc_steps_scenarios() {
        assert_eq!(calc_steps(4, &[2, 2]), (3, vec![2, 2]));
        assert_eq!(calc_steps(5, &[2]), (6, vec![5]));
        assert_eq!(calc_steps(1, &[3]), (3, vec![1]));
        assert_eq!(calc_steps(42, &[4, 1, 2]), (1, vec![0, 42, 0]));
        assert_eq!(calc_steps(3, &[]), (0, vec![]));
    }

    #[test]
    fn test_calc_steps_skips_paths_too_long_to_help() {
        let (steps, distribution) = calc_steps(3, &[2, 9]);
        assert_eq!(steps, 4);
        assert_eq!(distribution, vec![3, 0]);
    }

    #[test]
    fn test_calc_steps_remainder_goes_to_shorter_paths() {
        // Lengths 3, 4, 5 with 10 ants: 6 steps carry 4 + 3 + 2 = 9 < 10,
        // 7 steps carry 5 + 4 + 3 = 12, surplus of 2 comes off the longest two.
        let (steps, distribution) = calc_steps(10, &[5, 3, 4]);
        assert_eq!(steps, 7);
        assert_eq!(distribution, vec![2, 5, 3]);
    }

    #[test]
    fn test_huge_ant_counts() {
        let ants = isize::MAX as usize;
        let steps = (1 << 62) + 1;
        assert_eq!(fast_calc_steps(ants, &[2, 3]), (steps, true));
        assert_eq!(calc_steps(ants, &[2, 3]), (steps, vec![1 << 62, (1 << 62) - 1]));

        let (steps, _) = calc_steps(usize::MAX, &[2, 5]);
        assert_eq!(steps, 1 << 63);
    }

    #[test]
    fn test_calc_steps_matches_fast_estimate() {
        let cases: [&[usize]; 5] = [&[2], &[2, 2], &[3, 4, 5], &[2, 7, 7, 12], &[6, 3, 3, 9]];
        for lengths in cases {
            for ants in 1..40 {
                let (steps, distribution) = calc_steps(ants, lengths);
                assert_eq!(steps, fast_calc_steps(ants, lengths).0, "{lengths:?} {ants}");
                assert_eq!(distribution.iter().sum::<usize>(), ants);
                assert!(capacity(steps, lengths) >= ants);
                assert!(capacity(steps - 1, lengths) < ants);
                for (&count, &length) in distribution.iter().zip(lengths) {
                    assert!(count <= (steps + 1).saturating_sub(length));
                }
            }
        }
    }
}
