use eframe::egui::{Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, MarkerShape, Plot, Points,
};

use crate::data::view::{DashboardView, Distribution};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot: sepal length vs petal length
// ---------------------------------------------------------------------------

/// One marker series per selected species.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let config = &state.config;
    let x = DashboardView::SCATTER_X;
    let y = DashboardView::SCATTER_Y;

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(format!("{} (cm)", x.title()))
        .y_axis_label(format!("{} (cm)", y.title()))
        .height(config.chart_height)
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.dashboard.scatter {
                let color = state
                    .color_map
                    .color_for(series.species)
                    .gamma_multiply(config.marker_alpha);

                let points = Points::new(series.points.clone())
                    .name(series.species.label())
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(config.marker_radius);

                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution: stacked histogram with a marginal box plot
// ---------------------------------------------------------------------------

/// Render the marginal box plot above the stacked histogram of `dist`.
pub fn distribution_plot(ui: &mut Ui, state: &AppState, dist: &Distribution) {
    let config = &state.config;
    let title = dist.feature.title();

    let Some(bins) = dist.bins else {
        ui.label(format!("No rows to show for {title}."));
        return;
    };
    let (x_min, x_max) = (bins.start, bins.end);

    // Marginal: one horizontal box per species, stacked on the y axis.
    Plot::new(format!("marginal_{title}"))
        .height(config.marginal_height)
        .show_axes([false, false])
        .show_grid([false, false])
        .include_x(x_min)
        .include_x(x_max)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (row, group) in dist.groups.iter().enumerate() {
                let Some(s) = group.summary else {
                    continue;
                };
                let color = state.color_map.color_for(group.species);
                let elem = BoxElem::new(
                    row as f64,
                    BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max),
                )
                .name(group.species.label())
                .box_width(0.6)
                .whisker_width(0.3)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color));

                plot_ui.box_plot(
                    BoxPlot::new(vec![elem])
                        .name(group.species.label())
                        .color(color)
                        .horizontal(),
                );
            }
        });

    // Histogram: one bar chart per species, each stacked on the previous.
    let mut charts: Vec<BarChart> = Vec::with_capacity(dist.groups.len());
    for group in &dist.groups {
        let color = state.color_map.color_for(group.species);
        let bars: Vec<Bar> = group
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Bar::new(bins.center(i), count as f64).width(bins.width))
            .collect();

        let chart = {
            let below: Vec<&BarChart> = charts.iter().collect();
            BarChart::new(bars)
                .name(group.species.label())
                .color(color)
                .stack_on(&below)
        };
        charts.push(chart);
    }

    Plot::new(format!("histogram_{title}"))
        .legend(Legend::default())
        .x_axis_label(format!("{title} (cm)"))
        .y_axis_label("count")
        .height(config.chart_height)
        .include_x(x_min)
        .include_x(x_max)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
