//! Pure aggregation over a fetched report source.
//!
//! Per evaluatee:
//! - `overall_average` is the mean of per-rater means, so every rater
//!   carries the same weight regardless of indicator count.
//! - category and indicator averages divide the raw score sum by the
//!   rater count.
//! - feedback is collected verbatim in evaluation order, without
//!   evaluator identity.
//!
//! Evaluatees nobody has scored are absent from the result list.
//! All averages are rounded to two decimals.

use std::collections::{HashMap, HashSet};

use crate::models::indicators::entities::IndicatorCategory;
use crate::models::reports::entities::ReportSource;
use crate::models::reports::responses::{
    CategoryAverage, EventStats, IndicatorAverage, UserReport,
};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn aggregate_reports(source: &ReportSource) -> Vec<UserReport> {
    let category_of: HashMap<i64, IndicatorCategory> = source
        .snapshots
        .iter()
        .map(|s| (s.id, s.category))
        .collect();

    let mut by_evaluatee: HashMap<i64, Vec<usize>> = HashMap::new();
    for (idx, submission) in source.submissions.iter().enumerate() {
        by_evaluatee
            .entry(submission.evaluatee_id)
            .or_default()
            .push(idx);
    }

    source
        .evaluatees
        .iter()
        .filter_map(|evaluatee| {
            let submission_idxs = by_evaluatee.get(&evaluatee.user_id)?;
            let rater_count = submission_idxs.len() as u64;
            // by_evaluatee only has buckets with at least one submission
            let divisor = rater_count.max(1) as f64;

            let mut rater_mean_sum = 0.0;
            let mut category_sums: HashMap<IndicatorCategory, i64> = HashMap::new();
            let mut snapshot_sums: HashMap<i64, i64> = HashMap::new();
            let mut feedback = Vec::new();

            for &idx in submission_idxs {
                let submission = &source.submissions[idx];
                let mut sum = 0i64;
                for &(snapshot_id, score) in &submission.scores {
                    sum += score as i64;
                    *snapshot_sums.entry(snapshot_id).or_default() += score as i64;
                    if let Some(&category) = category_of.get(&snapshot_id) {
                        *category_sums.entry(category).or_default() += score as i64;
                    }
                }
                if !submission.scores.is_empty() {
                    rater_mean_sum += sum as f64 / submission.scores.len() as f64;
                }
                if let Some(text) = &submission.feedback
                    && !text.is_empty()
                {
                    feedback.push(text.clone());
                }
            }

            let category_averages = IndicatorCategory::all()
                .iter()
                .filter(|category| source.snapshots.iter().any(|s| s.category == **category))
                .map(|&category| CategoryAverage {
                    category,
                    average: round2(
                        *category_sums.get(&category).unwrap_or(&0) as f64 / divisor,
                    ),
                })
                .collect();

            let indicator_averages = source
                .snapshots
                .iter()
                .map(|snapshot| IndicatorAverage {
                    indicator_snapshot_id: snapshot.id,
                    indicator_name: snapshot.indicator_name.clone(),
                    category: snapshot.category,
                    average: round2(
                        *snapshot_sums.get(&snapshot.id).unwrap_or(&0) as f64 / divisor,
                    ),
                })
                .collect();

            Some(UserReport {
                user_id: evaluatee.user_id,
                name: evaluatee.name.clone(),
                nim: evaluatee.nim.clone(),
                division_id: evaluatee.division_id,
                division_name: evaluatee.division_name.clone(),
                rater_count,
                overall_average: round2(rater_mean_sum / divisor),
                category_averages,
                indicator_averages,
                feedback,
            })
        })
        .collect()
}

pub fn event_stats(source: &ReportSource, total_assignments: u64) -> EventStats {
    let evaluators: HashSet<i64> = source.submissions.iter().map(|s| s.evaluator_id).collect();
    let evaluatees: HashSet<i64> = source.submissions.iter().map(|s| s.evaluatee_id).collect();
    EventStats {
        total_assignments,
        submitted_count: source.submissions.len() as u64,
        distinct_evaluators: evaluators.len() as u64,
        distinct_evaluatees: evaluatees.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::events::entities::IndicatorSnapshot;
    use crate::models::reports::entities::{EvaluateeInfo, SubmittedEvaluation};

    fn snapshot(id: i64, name: &str, category: IndicatorCategory) -> IndicatorSnapshot {
        IndicatorSnapshot {
            id,
            event_id: 1,
            indicator_id: id,
            indicator_name: name.to_string(),
            category,
        }
    }

    fn evaluatee(user_id: i64) -> EvaluateeInfo {
        EvaluateeInfo {
            user_id,
            name: format!("Member {user_id}"),
            nim: format!("130221{user_id:04}"),
            division_id: Some(10),
            division_name: Some("Humas".to_string()),
        }
    }

    fn submission(
        evaluator_id: i64,
        evaluatee_id: i64,
        scores: Vec<(i64, i32)>,
        feedback: Option<&str>,
    ) -> SubmittedEvaluation {
        SubmittedEvaluation {
            evaluator_id,
            evaluatee_id,
            feedback: feedback.map(|s| s.to_string()),
            scores,
        }
    }

    fn sample_source() -> ReportSource {
        ReportSource {
            snapshots: vec![
                snapshot(101, "Kedisiplinan", IndicatorCategory::Hard),
                snapshot(102, "Tanggung Jawab", IndicatorCategory::Hard),
                snapshot(103, "Komunikasi", IndicatorCategory::Soft),
            ],
            evaluatees: vec![evaluatee(7)],
            submissions: vec![
                submission(2, 7, vec![(101, 5), (102, 4), (103, 3)], Some("Bagus")),
                submission(3, 7, vec![(101, 3), (102, 4), (103, 5)], None),
            ],
        }
    }

    #[test]
    fn test_overall_average_is_mean_of_rater_means() {
        let reports = aggregate_reports(&sample_source());
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.rater_count, 2);
        // rater means are 4.0 and 4.0
        assert_eq!(report.overall_average, 4.0);
    }

    #[test]
    fn test_category_average_divides_sum_by_rater_count() {
        let reports = aggregate_reports(&sample_source());
        let report = &reports[0];
        let hard = report
            .category_averages
            .iter()
            .find(|c| c.category == IndicatorCategory::Hard)
            .unwrap();
        // HARD sum is 5+4+3+4 = 16 over 2 raters
        assert_eq!(hard.average, 8.0);
        let soft = report
            .category_averages
            .iter()
            .find(|c| c.category == IndicatorCategory::Soft)
            .unwrap();
        assert_eq!(soft.average, 4.0);
    }

    #[test]
    fn test_indicator_average_per_snapshot() {
        let reports = aggregate_reports(&sample_source());
        let report = &reports[0];
        let first = report
            .indicator_averages
            .iter()
            .find(|i| i.indicator_snapshot_id == 101)
            .unwrap();
        assert_eq!(first.average, 4.0);
        assert_eq!(first.indicator_name, "Kedisiplinan");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let source = ReportSource {
            snapshots: vec![
                snapshot(101, "A", IndicatorCategory::Hard),
                snapshot(102, "B", IndicatorCategory::Hard),
                snapshot(103, "C", IndicatorCategory::Hard),
            ],
            evaluatees: vec![evaluatee(7)],
            submissions: vec![submission(2, 7, vec![(101, 5), (102, 4), (103, 4)], None)],
        };
        let reports = aggregate_reports(&source);
        // 13 / 3 = 4.333...
        assert_eq!(reports[0].overall_average, 4.33);
    }

    #[test]
    fn test_feedback_is_verbatim_and_never_attributed() {
        let source = ReportSource {
            snapshots: vec![snapshot(101, "A", IndicatorCategory::Other)],
            evaluatees: vec![evaluatee(7)],
            submissions: vec![
                submission(2, 7, vec![(101, 5)], Some("")),
                submission(3, 7, vec![(101, 4)], Some("Perlu lebih aktif")),
                submission(4, 7, vec![(101, 4)], None),
            ],
        };
        let reports = aggregate_reports(&source);
        assert_eq!(reports[0].feedback, vec!["Perlu lebih aktif".to_string()]);
    }

    #[test]
    fn test_unscored_evaluatee_is_absent() {
        let source = ReportSource {
            snapshots: vec![snapshot(101, "A", IndicatorCategory::Hard)],
            evaluatees: vec![evaluatee(7), evaluatee(8)],
            submissions: vec![submission(2, 8, vec![(101, 4)], None)],
        };
        let reports = aggregate_reports(&source);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].user_id, 8);
    }

    #[test]
    fn test_categories_absent_from_snapshots_are_omitted() {
        let source = ReportSource {
            snapshots: vec![snapshot(101, "A", IndicatorCategory::Soft)],
            evaluatees: vec![evaluatee(7)],
            submissions: vec![submission(2, 7, vec![(101, 3)], None)],
        };
        let reports = aggregate_reports(&source);
        let categories: Vec<_> = reports[0]
            .category_averages
            .iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(categories, vec![IndicatorCategory::Soft]);
    }

    #[test]
    fn test_event_stats_counts_distinct_participants() {
        let source = ReportSource {
            snapshots: vec![snapshot(101, "A", IndicatorCategory::Hard)],
            evaluatees: vec![evaluatee(7), evaluatee(8)],
            submissions: vec![
                submission(2, 7, vec![(101, 4)], None),
                submission(2, 8, vec![(101, 5)], None),
                submission(3, 7, vec![(101, 3)], None),
            ],
        };
        let stats = event_stats(&source, 12);
        assert_eq!(stats.total_assignments, 12);
        assert_eq!(stats.submitted_count, 3);
        assert_eq!(stats.distinct_evaluators, 2);
        assert_eq!(stats.distinct_evaluatees, 2);
    }
}
