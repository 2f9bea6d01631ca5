//! Plotting observer for visualizing a run.
//!
//! See [`PlotObserver`], [`Plottable`], and [`show_charts`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use slide_core::Observer;
use slide_solvers::transient::friction;

/// Configuration for rendering a [`PlotObserver`] as a chart.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Position vs. Time").x_label("Time (s)"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title, no axis labels, and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to use [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely; return `None` in a trace slot to skip that trace for the event.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// Position and velocity against time.
impl Plottable<2> for friction::Event {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.sample.position), Some(self.sample.velocity)]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver` as the solver observer for an
///   event type that implements [`Plottable<N>`][Plottable].
/// - **Closure path**: call [`record`][PlotObserver::record] from inside an
///   observer closure. Use this to split one event across several charts.
///
/// Call [`show`][PlotObserver::show] to render a single chart, or
/// [`into_chart`][PlotObserver::into_chart] and [`show_charts`] to stack
/// several charts in one window.
///
/// # Example (closure path)
///
/// ```ignore
/// let mut position = PlotObserver::<1>::new(["Position"]);
/// let mut velocity = PlotObserver::<1>::new(["Velocity"]);
///
/// friction::solve(&params, |event: &friction::Event| {
///     position.record(event.sample.time, [Some(event.sample.position)]);
///     velocity.record(event.sample.time, [Some(event.sample.velocity)]);
///     None
/// });
///
/// show_charts("Run", vec![
///     position.into_chart(ShowConfig::new().title("Position vs. Time")),
///     velocity.into_chart(ShowConfig::new().title("Velocity vs. Time")),
/// ])?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Converts the collected traces into a [`Chart`] for [`show_charts`].
    #[must_use]
    pub fn into_chart(self, config: ShowConfig) -> Chart {
        Chart {
            traces: self.names.into_iter().zip(self.data).collect(),
            config,
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// The chart title, if any, is also used as the window title.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();
        show_charts(&title, vec![self.into_chart(config)])
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// A set of named traces ready to be drawn as one chart.
pub struct Chart {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl Chart {
    /// The chart's traces as `(name, points)` pairs.
    #[must_use]
    pub fn traces(&self) -> &[(String, Vec<[f64; 2]>)] {
        &self.traces
    }
}

/// Opens a blocking egui window showing `charts` stacked top to bottom.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_charts(window_title: &str, charts: Vec<Chart>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotApp { charts }))),
    )
}

/// The egui [`eframe::App`] that renders collected charts.
struct PlotApp {
    charts: Vec<Chart>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let count = self.charts.len();
            for (i, chart) in self.charts.iter().enumerate() {
                let config = &chart.config;
                if let Some(title) = &config.title {
                    ui.heading(title);
                }

                // Share the remaining height equally with the charts below.
                #[allow(clippy::cast_precision_loss)]
                let height = ui.available_height() / (count - i) as f32;

                let mut plot = Plot::new(("plot_observer", i)).height(height);
                if config.legend {
                    plot = plot.legend(Legend::default());
                }
                if let Some(label) = &config.x_label {
                    plot = plot.x_axis_label(label.as_str());
                }
                if let Some(label) = &config.y_label {
                    plot = plot.y_axis_label(label.as_str());
                }

                plot.show(ui, |plot_ui| {
                    for (name, points) in &chart.traces {
                        let plot_points: PlotPoints = points.iter().copied().collect();
                        plot_ui.line(Line::new(plot_points).name(name));
                    }
                });
            }
        });
    }
}
