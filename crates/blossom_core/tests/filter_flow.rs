use std::collections::HashSet;

use blossom_core::{BloomFilter, DEFAULT_FALSE_POS_PROB};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn random_tokens(rng: &mut StdRng, count: usize) -> HashSet<[u8; 20]> {
    let mut items = HashSet::with_capacity(count);
    while items.len() < count {
        let mut token = [0u8; 20];
        rng.fill_bytes(&mut token);
        items.insert(token);
    }
    items
}

#[test]
fn no_false_negatives() {
    let mut rng = StdRng::seed_from_u64(7);
    let items = random_tokens(&mut rng, 1000);

    let mut bf = BloomFilter::new(items.len() as u64, DEFAULT_FALSE_POS_PROB).unwrap();
    for item in &items {
        bf.set(item).unwrap();
    }
    for item in &items {
        assert!(bf.includes(item).unwrap(), "false negative for {item:?}");
    }
}

#[test]
fn false_positive_rate_stays_near_target() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 1000;
    let items = random_tokens(&mut rng, n);

    let mut bf = BloomFilter::new(n as u64, 0.01).unwrap();
    for item in &items {
        bf.set(item).unwrap();
    }

    let trials = 10_000u32;
    let mut probed = 0u32;
    let mut false_positives = 0u32;
    while probed < trials {
        let mut probe = [0u8; 20];
        rng.fill_bytes(&mut probe);
        if items.contains(&probe) {
            continue;
        }
        probed += 1;
        if bf.includes(&probe).unwrap() {
            false_positives += 1;
        }
    }

    let rate = f64::from(false_positives) / f64::from(trials);
    assert!(rate < 0.03, "false positive rate {rate} too far above 0.01");
}

#[test]
fn cardinality_estimate_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(13);
    let n = 1000usize;
    let items = random_tokens(&mut rng, n);

    let mut bf = BloomFilter::new(n as u64, DEFAULT_FALSE_POS_PROB).unwrap();
    for item in &items {
        bf.set(item).unwrap();
    }

    let estimate = bf.approximate_cardinality();
    let error = (estimate - n as f64).abs() / n as f64;
    assert!(error < 0.15, "estimate {estimate} off by {error} from {n}");
}
