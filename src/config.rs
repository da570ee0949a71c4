// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed presentation settings. There is no runtime source for these; the
/// defaults are the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub side_panel_width: f32,
    /// Number of equal-width bins in each distribution histogram.
    pub histogram_bins: usize,
    /// Granularity of the range sliders, in cm.
    pub slider_step: f64,
    pub marker_radius: f32,
    /// Opacity applied to scatter markers.
    pub marker_alpha: f32,
    pub chart_height: f32,
    pub marginal_height: f32,
    pub table_row_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 900.0],
            min_window_size: [800.0, 600.0],
            side_panel_width: 260.0,
            histogram_bins: 20,
            slider_step: 0.1,
            marker_radius: 4.5,
            marker_alpha: 0.8,
            chart_height: 320.0,
            marginal_height: 70.0,
            table_row_height: 20.0,
        }
    }
}
