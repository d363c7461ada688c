//! Shared test data.

use rand::Rng;
use rand::seq::SliceRandom;

use almanac_core::models::{Almanac, MapStage, RangeRule};

pub const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

pub fn example_almanac() -> Almanac<u64> {
    EXAMPLE.parse().unwrap()
}

/// A stage over `[0, domain)` with up to `max_rules` disjoint rules, random
/// gaps between them and random destinations below `domain`.
pub fn random_stage<R: Rng>(rng: &mut R, domain: u64, max_rules: usize) -> MapStage<u64> {
    let mut rules = Vec::new();
    let mut cursor = 0u64;
    while rules.len() < max_rules && cursor < domain {
        let gap = rng.random_range(0..4);
        let start = cursor + gap;
        if start >= domain {
            break;
        }
        let length = rng.random_range(1..=(domain - start).min(8));
        let destination = rng.random_range(0..domain);
        rules.push(RangeRule::new(destination, start, length).unwrap());
        cursor = start + length;
    }
    rules.shuffle(rng);
    MapStage::new("random", rules).unwrap()
}
