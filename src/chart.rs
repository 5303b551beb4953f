//! Chart series built from the stats summary

use crate::api::types::StatsSummary;
use serde::Serialize;

/// Parallel label/value sequences handed to the chart renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Engagement-by-platform series.
///
/// `None` means no summary has been fetched, which is not the same as an
/// empty series. Order follows the summary, no sorting.
pub fn to_series(summary: Option<&StatsSummary>) -> Option<ChartSeries> {
    summary.map(|summary| {
        let (labels, values) = summary
            .platform_engagement
            .iter()
            .map(|(platform, rate)| (platform.to_string(), rate))
            .unzip();

        ChartSeries { labels, values }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_summary_has_no_series() {
        assert_eq!(to_series(None), None);

        let empty = StatsSummary::default();
        let series = to_series(Some(&empty)).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_series_keeps_summary_order() {
        let summary = StatsSummary {
            total_campaigns: 2,
            total_spend: 1000.0,
            avg_ctr: 0.015,
            platform_engagement: vec![("instagram", 0.02), ("tiktok", 0.05)]
                .into_iter()
                .collect(),
        };

        let series = to_series(Some(&summary)).unwrap();
        assert_eq!(series.labels, vec!["instagram", "tiktok"]);
        assert_eq!(series.values, vec![0.02, 0.05]);
        assert_eq!(series.points().last(), Some(("tiktok", 0.05)));
    }

    #[test]
    fn test_series_not_sorted() {
        let summary = StatsSummary {
            platform_engagement: vec![("youtube", 0.01), ("facebook", 0.04), ("google_ads", 0.02)]
                .into_iter()
                .collect(),
            ..StatsSummary::default()
        };

        let series = to_series(Some(&summary)).unwrap();
        assert_eq!(series.labels, vec!["youtube", "facebook", "google_ads"]);
    }
}
