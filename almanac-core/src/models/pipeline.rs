use num_traits::{PrimInt, Unsigned};

use crate::models::MapStage;

///
/// Stages in declaration order. A value leaving stage `i` enters stage `i + 1`.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Pipeline<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    stages: Vec<MapStage<I>>,
}

/// Two consecutive stages whose categories don't line up,
/// e.g. `seed-to-soil` followed by `water-to-light`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ChainBreak {
    /// Index of the second stage of the pair.
    pub index: usize,
    pub produced: String,
    pub expected: String,
}

impl<I> Pipeline<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub fn new(stages: Vec<MapStage<I>>) -> Self {
        Pipeline { stages }
    }

    pub fn stages(&self) -> &[MapStage<I>] {
        &self.stages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MapStage<I>> {
        self.stages.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MapStage<I>> {
        self.stages.iter().find(|stage| stage.name() == name)
    }

    /// Total number of rules across every stage.
    pub fn rule_count(&self) -> usize {
        self.stages.iter().map(MapStage::len).sum()
    }

    /// Consecutive stages whose `<source>-to-<destination>` names don't chain.
    /// Stages without categories in their name are never reported.
    pub fn chain_breaks(&self) -> Vec<ChainBreak> {
        self.stages
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let (_, produced) = pair[0].categories()?;
                let (expected, _) = pair[1].categories()?;
                (produced != expected).then(|| ChainBreak {
                    index: i + 1,
                    produced: produced.to_string(),
                    expected: expected.to_string(),
                })
            })
            .collect()
    }
}

impl<'a, I> IntoIterator for &'a Pipeline<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a MapStage<I>;
    type IntoIter = std::slice::Iter<'a, MapStage<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::models::RangeRule;

    fn stage(name: &str, rules: usize) -> MapStage<u64> {
        let rules = (0..rules as u64)
            .map(|i| RangeRule::new(i * 10, i * 10 + 1, 5).unwrap())
            .collect();
        MapStage::new(name, rules).unwrap()
    }

    #[rstest]
    fn test_order_is_declaration_order() {
        let pipeline = Pipeline::new(vec![stage("b-to-c", 1), stage("a-to-b", 2)]);
        let names: Vec<&str> = pipeline.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["b-to-c", "a-to-b"]);
        assert_eq!(pipeline.rule_count(), 3);
        assert_eq!(pipeline.get("a-to-b").map(|s| s.len()), Some(2));
        assert_eq!(pipeline.get("x-to-y"), None);
    }

    #[rstest]
    fn test_chain_breaks() {
        let pipeline = Pipeline::new(vec![
            stage("seed-to-soil", 0),
            stage("soil-to-water", 0),
            stage("light-to-temperature", 0),
            stage("custom", 0),
            stage("a-to-b", 0),
        ]);
        assert_eq!(
            pipeline.chain_breaks(),
            vec![ChainBreak {
                index: 2,
                produced: "water".to_string(),
                expected: "light".to_string(),
            }]
        );
    }

    #[rstest]
    fn test_intact_chain() {
        let pipeline = Pipeline::new(vec![stage("seed-to-soil", 1), stage("soil-to-water", 1)]);
        assert!(pipeline.chain_breaks().is_empty());
    }
}
