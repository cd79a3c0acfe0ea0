use itertools::Itertools;
use qmkit::*;
use test_log::test;

/// All patterns of a given length, by brute force
fn all_patterns(len: usize) -> Vec<Pattern> {
    (0..len)
        .map(|_| ['0', '1', '-'])
        .multi_cartesian_product()
        .map(|chars| chars.iter().collect::<String>().parse().unwrap())
        .collect()
}

/// Prime implicants of a set of minterms, by brute force
fn brute_primes(minterms: &[u32], len: usize) -> Vec<Pattern> {
    let implicants: Vec<Pattern> = all_patterns(len)
        .into_iter()
        .filter(|p| p.minterms().all(|m| minterms.contains(&m)))
        .collect();
    implicants
        .iter()
        .filter(|p| !implicants.iter().any(|q| q != *p && q.contains(p)))
        .copied()
        .collect()
}

/// All covers of a set of minterms built with prime implicants
fn prime_covers<'a>(
    minterms: &'a [u32],
    primes: &'a [Pattern],
) -> impl Iterator<Item = Vec<&'a Pattern>> + 'a {
    (1..=primes.len())
        .flat_map(move |k| primes.iter().combinations(k))
        .filter(move |c| minterms.iter().all(|m| c.iter().any(|p| p.covers(*m))))
}

/// Smallest number of implicants needed to cover a set of minterms, by brute force
fn smallest_cover(minterms: &[u32], len: usize) -> usize {
    let primes = brute_primes(minterms, len);
    prime_covers(minterms, &primes)
        .map(|c| c.len())
        .min()
        .unwrap_or(0)
}

/// Smallest number of literals of a cover, by brute force.
///
/// A cover with fewest literals can always be built with prime implicants.
fn fewest_literals(minterms: &[u32], len: usize) -> u32 {
    let primes = brute_primes(minterms, len);
    prime_covers(minterms, &primes)
        .map(|c| c.iter().map(|p| p.literal_count()).sum::<u32>())
        .min()
        .unwrap_or(0)
}

fn check_solutions(minterms: &[u32]) {
    let solutions = minimize(minterms).unwrap();
    assert!(!solutions.is_empty());

    let mut expected: Vec<usize> = minterms.iter().map(|m| *m as usize).collect();
    expected.sort_unstable();
    let len = minterms.iter().map(|m| tools::bit_length(*m)).max().unwrap_or(0);
    let smallest = smallest_cover(minterms, len);

    for s in &solutions {
        // exact coverage
        assert_eq!(s.covered().iter().collect::<Vec<_>>(), expected, "{:?}", minterms);
        for t in s {
            assert_eq!(t.covered().len(), 1 << t.pattern().free_count());
            assert!(t.minterms().all(|m| t.pattern().covers(m)));
        }
        // minimal number of products
        assert_eq!(s.len(), smallest, "{:?}: {}", minterms, s);
    }

    // alternative solutions are distinct
    let distinct = solutions
        .iter()
        .map(|s| s.patterns().map(|p| p.to_string()).sorted().collect::<Vec<_>>())
        .unique()
        .count();
    assert_eq!(distinct, solutions.len());
}

#[test]
fn all_functions_of_three_variables() {
    for f in 1u32..256 {
        let minterms: Vec<u32> = (0..8).filter(|m| f & (1 << m) != 0).collect();
        check_solutions(&minterms);

        let len = minterms.iter().map(|m| tools::bit_length(*m)).max().unwrap_or(0);
        let fewest = fewest_literals(&minterms, len);
        for s in minimize(&minterms).unwrap() {
            assert_eq!(s.literal_count(), fewest, "{:?}: {}", minterms, s);
        }
    }
}

#[test]
fn some_functions_of_four_variables() {
    check_solutions(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14]);
    check_solutions(&[4, 8, 10, 11, 12, 15]);
    check_solutions(&[0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15]);
    check_solutions(&[1, 3, 7, 11, 15]);
    check_solutions(&[0, 4, 5, 7, 8, 11, 12, 15]);
    check_solutions(&[2, 3, 7, 9, 11, 13]);
    check_solutions(&[0, 1, 2, 5, 6, 7, 8]);
}

#[test]
fn merge_validity() {
    let patterns = all_patterns(3);
    for p in &patterns {
        for q in &patterns {
            let same_free = p.iter().zip(q.iter()).all(|(a, b)| a.is_none() == b.is_none());
            let differences = p
                .iter()
                .zip(q.iter())
                .filter(|(a, b)| a.is_some() && b.is_some() && a != b)
                .count();

            let (tp, tq) = (Term::from(*p), Term::from(*q));
            let merged = tp.merge(&tq);
            assert_eq!(merged.is_some(), same_free && differences == 1, "{} {}", p, q);
            assert_eq!(tp.can_merge(&tq), tq.can_merge(&tp));

            if let Some(t) = merged {
                assert_eq!(t.pattern().free_count(), p.free_count() + 1);
                assert!(t.pattern().contains(p) && t.pattern().contains(q));
                assert_eq!(t.covered().len(), tp.covered().len() * 2);
            }
        }
    }
}

#[test]
fn order_independence() -> Result<(), QmError> {
    let minterms = [0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15];
    let reference = minimize(&minterms)?;

    let mut reversed = minterms.to_vec();
    reversed.reverse();
    assert_eq!(minimize(&reversed)?, reference);

    let rotated: Vec<u32> = minterms[4..].iter().chain(&minterms[..4]).copied().collect();
    assert_eq!(minimize(&rotated)?, reference);
    Ok(())
}

#[test]
fn determinism() -> Result<(), QmError> {
    let minterms = [0, 1, 2, 5, 6, 7];
    let first: Vec<String> = minimize(&minterms)?.iter().map(|s| s.to_string()).collect();
    for _ in 0..10 {
        let again: Vec<String> = minimize(&minterms)?.iter().map(|s| s.to_string()).collect();
        assert_eq!(again, first);
    }
    Ok(())
}
