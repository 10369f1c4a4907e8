//! Outcast detection.
//!
//! Given a list of nouns, the outcast is the one least related to the
//! others: the noun whose summed distance to every noun of the list is
//! largest.

use crate::error::GraphResult;
use crate::taxonomy::Taxonomy;
use serde::Serialize;

/// Summed distance of one noun to the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcastScore<'n> {
    pub noun: &'n str,
    pub total_distance: usize,
}

/// Finds outcasts using a taxonomy's distance.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> Outcast<'t> {
    /// Creates an outcast finder over `taxonomy`.
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Summed distances, one entry per input noun, in input order.
    ///
    /// Each sum includes the noun itself, which contributes 0.
    pub fn scores<'n, S>(&self, nouns: &'n [S]) -> GraphResult<Vec<OutcastScore<'n>>>
    where
        S: AsRef<str>,
    {
        // distance is symmetric, so fill the upper triangle and mirror it
        let mut totals = vec![0usize; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let d = self.taxonomy.distance(nouns[i].as_ref(), nouns[j].as_ref())?;
                totals[i] += d;
                totals[j] += d;
            }
        }

        // every noun must be known even in a one-word list
        for noun in nouns {
            self.taxonomy.synsets_of(noun.as_ref())?;
        }

        Ok(nouns
            .iter()
            .zip(totals)
            .map(|(noun, total_distance)| OutcastScore {
                noun: noun.as_ref(),
                total_distance,
            })
            .collect())
    }

    /// The noun with the largest summed distance.
    ///
    /// Ties go to the noun listed first. Returns `None` for an empty list.
    pub fn outcast<'n, S>(&self, nouns: &'n [S]) -> GraphResult<Option<&'n str>>
    where
        S: AsRef<str>,
    {
        let mut best: Option<OutcastScore<'n>> = None;
        for score in self.scores(nouns)? {
            if best
                .as_ref()
                .map_or(true, |b| score.total_distance > b.total_distance)
            {
                best = Some(score);
            }
        }
        Ok(best.map(|score| score.noun))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::taxonomy::tests::sample;

    #[test]
    fn test_outcast_from_other_cluster() {
        let taxonomy = sample();
        let outcast = Outcast::new(&taxonomy);

        assert_eq!(outcast.outcast(&["dog", "cat", "idea"]).unwrap(), Some("idea"));
        assert_eq!(outcast.outcast(&["oak", "cat", "dog"]).unwrap(), Some("oak"));
    }

    #[test]
    fn test_scores() {
        let taxonomy = sample();
        let scores = Outcast::new(&taxonomy)
            .scores(&["dog", "cat", "idea"])
            .unwrap();

        let totals: Vec<usize> = scores.iter().map(|s| s.total_distance).collect();
        assert_eq!(totals, vec![7, 7, 10]);
        assert_eq!(scores[2].noun, "idea");
    }

    #[test]
    fn test_tie_goes_to_first() {
        let taxonomy = sample();
        let outcast = Outcast::new(&taxonomy);
        assert_eq!(outcast.outcast(&["cat", "dog"]).unwrap(), Some("cat"));
        assert_eq!(outcast.outcast(&["dog", "cat"]).unwrap(), Some("dog"));
    }

    #[test]
    fn test_owned_strings() {
        let taxonomy = sample();
        let nouns: Vec<String> = vec!["thought".into(), "beast".into(), "true_cat".into()];
        assert_eq!(
            Outcast::new(&taxonomy).outcast(&nouns).unwrap(),
            Some("thought")
        );
    }

    #[test]
    fn test_empty_and_single() {
        let taxonomy = sample();
        let outcast = Outcast::new(&taxonomy);
        let empty: [&str; 0] = [];

        assert_eq!(outcast.outcast(&empty).unwrap(), None);
        assert_eq!(outcast.outcast(&["dog"]).unwrap(), Some("dog"));
    }

    #[test]
    fn test_unknown_noun() {
        let taxonomy = sample();
        let outcast = Outcast::new(&taxonomy);

        assert_eq!(
            outcast.outcast(&["dog", "unicorn"]).unwrap_err(),
            GraphError::UnknownWord("unicorn".to_string())
        );
        assert!(outcast.outcast(&["unicorn"]).is_err());
    }
}
