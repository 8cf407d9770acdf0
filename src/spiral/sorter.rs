use super::scorer::ScoredRecord;

/// Orders records by ascending score.
///
/// The sort is stable: records with equal scores keep their load order, so
/// the spiral places ties in the order they appeared in the input file.
pub fn sort_by_score(mut scored: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PointRecord;
    use rand::Rng;

    fn scored(score: f32, tag: i32) -> ScoredRecord {
        ScoredRecord {
            score,
            record: PointRecord { values: [tag; 5] },
        }
    }

    #[test]
    fn test_sort_is_ascending() {
        let sorted = sort_by_score(vec![scored(2.0, 0), scored(0.5, 1), scored(1.0, 2)]);
        let scores: Vec<f32> = sorted.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![0.5, 1.0, 2.0]);
        assert_eq!(sorted[0].record.values, [1; 5]);
    }

    #[test]
    fn test_ties_keep_load_order() {
        let sorted = sort_by_score(vec![
            scored(1.0, 0),
            scored(0.0, 1),
            scored(1.0, 2),
            scored(1.0, 3),
        ]);
        let tags: Vec<i32> = sorted.iter().map(|s| s.record.values[0]).collect();
        assert_eq!(tags, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_sort_preserves_the_multiset_of_scores() {
        let mut rng = rand::thread_rng();
        let input: Vec<ScoredRecord> = (0..200)
            .map(|i| scored(rng.gen_range(0.0..10.0), i))
            .collect();

        let sorted = sort_by_score(input.clone());
        assert!(sorted.windows(2).all(|w| w[0].score <= w[1].score));

        let mut before: Vec<u32> = input.iter().map(|s| s.score.to_bits()).collect();
        let mut after: Vec<u32> = sorted.iter().map(|s| s.score.to_bits()).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }
}
