use num_traits::{PrimInt, Unsigned};

use crate::errors::StageError;
use crate::models::RangeRule;

const CATEGORY_SEPARATOR: &str = "-to-";

///
/// A named translation step: a set of rules with pairwise disjoint source
/// ranges. Values no rule covers pass through unchanged.
///
/// Rules are kept sorted by source start, which is what makes the binary
/// searches below valid.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MapStage<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    name: String,
    rules: Vec<RangeRule<I>>,
}

impl<I> MapStage<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Create a new stage. Rules may come in any order; overlapping source
    /// ranges are rejected.
    ///
    /// ```
    /// use almanac_core::models::{MapStage, RangeRule};
    ///
    /// let stage = MapStage::new(
    ///     "seed-to-soil",
    ///     vec![
    ///         RangeRule::new(52u64, 50, 48).unwrap(),
    ///         RangeRule::new(50u64, 98, 2).unwrap(),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(stage.rules()[0].source_start(), 50);
    /// assert_eq!(stage.categories(), Some(("seed", "soil")));
    /// ```
    pub fn new(name: impl Into<String>, rules: Vec<RangeRule<I>>) -> Result<Self, StageError> {
        let mut indexed: Vec<(usize, RangeRule<I>)> = rules.into_iter().enumerate().collect();
        indexed.sort_by_key(|(_, rule)| rule.source_start());

        for pair in indexed.windows(2) {
            let (a_idx, a) = &pair[0];
            let (b_idx, b) = &pair[1];
            if a.source().overlaps(b.source()) {
                return Err(StageError::OverlappingRules {
                    first: std::cmp::min(*a_idx, *b_idx),
                    second: std::cmp::max(*a_idx, *b_idx),
                });
            }
        }

        Ok(MapStage {
            name: name.into(),
            rules: indexed.into_iter().map(|(_, rule)| rule).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules sorted by source start.
    pub fn rules(&self) -> &[RangeRule<I>] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Split a `<source>-to-<destination>` name into its two categories.
    pub fn categories(&self) -> Option<(&str, &str)> {
        self.name
            .split_once(CATEGORY_SEPARATOR)
            .filter(|(source, destination)| !source.is_empty() && !destination.is_empty())
    }

    /// Find the rule whose source range contains `value`.
    ///
    /// O(log R): the last rule starting at or before `value` is the only
    /// candidate.
    pub fn find_rule(&self, value: I) -> Option<&RangeRule<I>> {
        let idx = self.rules.partition_point(|rule| rule.source_start() <= value);
        idx.checked_sub(1)
            .map(|i| &self.rules[i])
            .filter(|rule| rule.contains(value))
    }

    /// Index of the first rule that either contains `pos` or starts after it.
    ///
    /// Equals `len()` when every rule ends at or before `pos`.
    #[inline]
    pub fn lower_bound(&self, pos: I) -> usize {
        self.rules.partition_point(|rule| rule.source_end() <= pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn soil_to_fertilizer() -> MapStage<u64> {
        MapStage::new(
            "soil-to-fertilizer",
            vec![
                RangeRule::new(0, 15, 37).unwrap(),
                RangeRule::new(37, 52, 2).unwrap(),
                RangeRule::new(39, 0, 15).unwrap(),
            ],
        )
        .unwrap()
    }

    #[rstest]
    fn test_rules_sorted_by_source(soil_to_fertilizer: MapStage<u64>) {
        let starts: Vec<u64> = soil_to_fertilizer
            .rules()
            .iter()
            .map(|r| r.source_start())
            .collect();
        assert_eq!(starts, vec![0, 15, 52]);
        assert_eq!(soil_to_fertilizer.len(), 3);
        assert_eq!(soil_to_fertilizer.is_empty(), false);
    }

    #[rstest]
    fn test_overlap_reports_declaration_indices() {
        let result = MapStage::new(
            "bad",
            vec![
                RangeRule::new(0u64, 100, 10).unwrap(),
                RangeRule::new(0u64, 0, 5).unwrap(),
                RangeRule::new(0u64, 105, 10).unwrap(),
            ],
        );
        assert_eq!(
            result,
            Err(StageError::OverlappingRules {
                first: 0,
                second: 2
            })
        );
    }

    #[rstest]
    fn test_back_to_back_rules_are_disjoint() {
        let stage = MapStage::new(
            "adjacent",
            vec![
                RangeRule::new(0u64, 0, 10).unwrap(),
                RangeRule::new(100u64, 10, 10).unwrap(),
            ],
        );
        assert!(stage.is_ok());
    }

    #[rstest]
    #[case(0, Some(0))]
    #[case(14, Some(0))]
    #[case(15, Some(15))]
    #[case(51, Some(15))]
    #[case(52, Some(52))]
    #[case(53, Some(52))]
    #[case(54, None)]
    #[case(1_000, None)]
    fn test_find_rule(
        soil_to_fertilizer: MapStage<u64>,
        #[case] value: u64,
        #[case] expected_source_start: Option<u64>,
    ) {
        let found = soil_to_fertilizer
            .find_rule(value)
            .map(|r| r.source_start());
        assert_eq!(found, expected_source_start);
    }

    #[rstest]
    fn test_find_rule_in_gap() {
        let stage = MapStage::new(
            "gappy",
            vec![
                RangeRule::new(0u64, 10, 5).unwrap(),
                RangeRule::new(0u64, 30, 5).unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(stage.find_rule(5), None);
        assert_eq!(stage.find_rule(20), None);
        assert_eq!(stage.find_rule(15), None);
        assert_eq!(stage.find_rule(34).map(|r| r.source_start()), Some(30));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(14, 0)]
    #[case(15, 1)]
    #[case(52, 2)]
    #[case(54, 3)]
    fn test_lower_bound(
        soil_to_fertilizer: MapStage<u64>,
        #[case] pos: u64,
        #[case] expected: usize,
    ) {
        assert_eq!(soil_to_fertilizer.lower_bound(pos), expected);
    }

    #[rstest]
    #[case("seed-to-soil", Some(("seed", "soil")))]
    #[case("humidity-to-location", Some(("humidity", "location")))]
    #[case("lookup", None)]
    #[case("-to-soil", None)]
    fn test_categories(#[case] name: &str, #[case] expected: Option<(&str, &str)>) {
        let stage: MapStage<u64> = MapStage::new(name, vec![]).unwrap();
        assert_eq!(stage.categories(), expected);
    }
}
