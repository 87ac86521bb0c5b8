use super::stats_aggregation::RunStatistics;

pub fn render_summary(stats: &RunStatistics) -> String {
    format!(
        "succeeded: {}\nfailed: {}\ntotal: {}\n",
        stats.succeeded, stats.failed, stats.total
    )
}
