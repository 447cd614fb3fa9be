//! Render hooks a presentation layer implements.

use crate::{ChartSeries, Entry, Recommendation, WeeklyAverages};

/// Receives the views recomputed after each user action
///
/// After a mutation the hooks are called list, charts, averages, and then
/// recommendation when the action was a fresh submission.
pub trait Presenter {
    fn render_list(&mut self, entries: &[Entry]);

    fn render_charts(&mut self, sleep: &ChartSeries, exercise: &ChartSeries);

    fn render_averages(&mut self, averages: &WeeklyAverages);

    fn render_recommendation(&mut self, recommendation: &Recommendation);

    /// A user-facing notice that is not part of the regular views
    fn notify(&mut self, message: &str);
}
