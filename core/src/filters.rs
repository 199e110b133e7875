//! Pure functions over a gap list, composable through `ComputedGaps::apply_filter`.

use std::cmp::Ordering;

use crate::processing::ranking::GapRecord;

fn by_avg(a: &GapRecord, b: &GapRecord) -> Ordering {
    a.avg.total_cmp(&b.avg)
}

fn by_avg_then_sd(a: &GapRecord, b: &GapRecord) -> Ordering {
    by_avg(a, b).then_with(|| a.sd.unwrap_or(0.0).total_cmp(&b.sd.unwrap_or(0.0)))
}

/// Ascending average, ties broken by ascending deviation when `with_sd`. Stable.
pub fn sort_results(mut results: Vec<GapRecord>, with_sd: bool) -> Vec<GapRecord> {
    if with_sd {
        results.sort_by(by_avg_then_sd);
    } else {
        results.sort_by(by_avg);
    }
    results
}

/// Descending quality; records without a quality go last.
pub fn sort_results_by_quality(mut results: Vec<GapRecord>) -> Vec<GapRecord> {
    results.sort_by(|a, b| match (a.quality, b.quality) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    results
}

/// Keeps the first `limit` records. `None` keeps everything.
pub fn limit_results(mut results: Vec<GapRecord>, limit: Option<usize>) -> Vec<GapRecord> {
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}

/// Keeps records on the given days, preserving order. An empty set keeps everything.
pub fn filter_by_days(results: Vec<GapRecord>, day_indices: &[usize]) -> Vec<GapRecord> {
    if day_indices.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|gap| day_indices.contains(&gap.day_index))
        .collect()
}
