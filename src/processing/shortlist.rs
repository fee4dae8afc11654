//! Threshold-based shortlisting

use crate::processing::scoring::MatchResult;

/// Keep results scoring at or above `threshold`, preserving input order
pub fn shortlist(results: &[MatchResult], threshold: f64) -> Vec<MatchResult> {
    results
        .iter()
        .filter(|result| result.match_score >= threshold)
        .cloned()
        .collect()
}

/// Shortlister bound to a fixed threshold
#[derive(Debug, Clone, Copy)]
pub struct ShortlistFilter {
    threshold: f64,
}

impl ShortlistFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn apply(&self, results: &[MatchResult]) -> Vec<MatchResult> {
        shortlist(results, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, score: f64) -> MatchResult {
        MatchResult {
            cv_filename: format!("{}.pdf", name),
            candidate_name: name.to_string(),
            job_title: "Engineer".to_string(),
            match_score: score,
            email: String::new(),
            phone_number: String::new(),
        }
    }

    #[test]
    fn test_inclusive_boundary_and_order() {
        let results = vec![result("A", 66.67), result("B", 80.0), result("C", 70.0)];

        let shortlisted = shortlist(&results, 70.0);
        let names: Vec<&str> = shortlisted.iter().map(|r| r.candidate_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let results = vec![
            result("A", 10.0),
            result("B", 95.5),
            result("C", 50.0),
            result("D", 50.0),
            result("E", 0.0),
        ];

        for threshold in [0.0, 10.0, 50.0, 50.01, 95.5, 100.0] {
            let shortlisted = shortlist(&results, threshold);
            let expected: Vec<&MatchResult> = results.iter().filter(|r| r.match_score >= threshold).collect();
            assert_eq!(shortlisted.len(), expected.len());
            for (got, want) in shortlisted.iter().zip(expected) {
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let results = vec![result("A", 0.0), result("B", 12.5)];
        assert_eq!(shortlist(&results, 0.0), results);
    }

    #[test]
    fn test_empty_input() {
        assert!(ShortlistFilter::new(70.0).apply(&[]).is_empty());
    }

    #[test]
    fn test_filter_exposes_threshold() {
        let filter = ShortlistFilter::new(42.0);
        assert_eq!(filter.threshold(), 42.0);
        assert_eq!(filter.apply(&[result("A", 42.0)]).len(), 1);
    }
}
