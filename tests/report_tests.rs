//! Report rendering through a recording renderer: no window is opened.

use std::cell::RefCell;

use anyhow::{bail, Result};
use bench_charts::data::builtin;
use bench_charts::render::{ChartMeta, ChartRenderer};
use bench_charts::report::{default_report, render_report, FigureKind, FigureRequest};
use bench_charts::{Dataset, ReferenceSpec, Series, SpeedupResult};

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    Absolute,
    Speedup,
}

#[derive(Debug, Clone)]
struct Rendered {
    kind: Kind,
    x_values: Vec<f64>,
    series: Vec<Series>,
    meta: ChartMeta,
}

#[derive(Default)]
struct RecordingRenderer {
    rendered: RefCell<Vec<Rendered>>,
    fail_on_title: Option<String>,
}

impl RecordingRenderer {
    fn record(&self, kind: Kind, x_values: &[f64], series: &[Series], meta: &ChartMeta) -> Result<()> {
        if self.fail_on_title.as_deref() == Some(meta.title.as_str()) {
            bail!("display unavailable");
        }
        self.rendered.borrow_mut().push(Rendered {
            kind,
            x_values: x_values.to_vec(),
            series: series.to_vec(),
            meta: meta.clone(),
        });
        Ok(())
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_absolute(&self, x_values: &[f64], series: &[Series], meta: &ChartMeta) -> Result<()> {
        self.record(Kind::Absolute, x_values, series, meta)
    }

    fn render_speedup(&self, x_values: &[f64], speedup: &SpeedupResult, meta: &ChartMeta) -> Result<()> {
        self.record(Kind::Speedup, x_values, speedup.series(), meta)
    }
}

fn values<'a>(rendered: &'a Rendered, label: &str) -> &'a [f64] {
    &rendered
        .series
        .iter()
        .find(|sr| sr.label == label)
        .unwrap()
        .values
}

#[test]
fn default_report_has_six_charts_in_order() {
    let requests = default_report().unwrap();
    let renderer = RecordingRenderer::default();
    render_report(&renderer, &requests).unwrap();

    let rendered = renderer.rendered.into_inner();
    let kinds: Vec<Kind> = rendered.iter().map(|r| r.kind.clone()).collect();
    assert_eq!(
        kinds,
        [Kind::Absolute, Kind::Speedup, Kind::Absolute, Kind::Speedup, Kind::Absolute, Kind::Speedup]
    );

    let lengths: Vec<usize> = rendered.iter().map(|r| r.x_values.len()).collect();
    assert_eq!(lengths, [12, 12, 10, 10, 4, 4]);

    assert_eq!(rendered[0].meta.x_label, "K");
    assert_eq!(rendered[0].meta.y_label, "Time Per Iteration (ms)");
    assert_eq!(rendered[0].meta.legend_title, "Methods");
    assert_eq!(
        rendered[1].meta.title,
        "Speedup Comparison for Different Methods (Relative to Basic)"
    );
    assert_eq!(rendered[1].meta.legend_title, "Methods - Speedup");
    assert_eq!(rendered[5].meta.x_label, "Number of Threads");
    assert_eq!(
        rendered[5].meta.title,
        "Speedup Comparison for Different Methods (Relative to 1 Thread)"
    );
}

#[test]
fn absolute_chart_passes_measurements_through() {
    let requests = default_report().unwrap();
    let renderer = RecordingRenderer::default();
    render_report(&renderer, &requests[..1]).unwrap();

    let rendered = renderer.rendered.into_inner();
    let ds = builtin::results_k().unwrap();
    assert_eq!(rendered[0].x_values, ds.independent_values());
    assert_eq!(rendered[0].series, ds.series());
}

#[test]
fn k_speedup_is_relative_to_basic() {
    let requests = default_report().unwrap();
    let renderer = RecordingRenderer::default();
    render_report(&renderer, &requests[1..2]).unwrap();

    let rendered = renderer.rendered.into_inner();
    assert!(values(&rendered[0], "Basic").iter().all(|&v| v == 1.0));
    // K = 2: Basic 13.842975 ms against OMP + SIMD 5.12325 ms.
    let first = values(&rendered[0], "OMP + SIMD")[0];
    assert!((first - 13.842975 / 5.12325).abs() < 1e-12);
}

#[test]
fn thread_speedup_is_relative_to_one_thread() {
    let requests = default_report().unwrap();
    let renderer = RecordingRenderer::default();
    render_report(&renderer, &requests[5..]).unwrap();

    let rendered = renderer.rendered.into_inner();
    let omp = values(&rendered[0], "OMP");
    assert_eq!(omp[0], 1.0);
    assert!((omp[3] - 16.604175 / 4.70602).abs() < 1e-12);
}

#[test]
fn bad_reference_stops_the_report() {
    let ds = Dataset::new(vec![2.0, 4.0], [("A", vec![10.0, 5.0])]).unwrap();
    let meta = ChartMeta::new("K", "Speedup", "broken", "Methods");
    let requests = [
        FigureRequest::absolute(ds.clone(), meta.clone()),
        FigureRequest::speedup(ds.clone(), ReferenceSpec::label("Z"), meta.clone()),
        FigureRequest::absolute(ds, meta),
    ];
    assert_eq!(requests[1].kind, FigureKind::Speedup(ReferenceSpec::label("Z")));

    let renderer = RecordingRenderer::default();
    let err = render_report(&renderer, &requests).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("rendering chart 2 of 3"), "{message}");
    assert!(message.contains("reference series 'Z' is not in the dataset"), "{message}");
    assert_eq!(renderer.rendered.borrow().len(), 1);
}

#[test]
fn renderer_failure_is_reported() {
    let requests = default_report().unwrap();
    let renderer = RecordingRenderer {
        fail_on_title: Some("Performance Comparison for Different Methods".into()),
        ..Default::default()
    };
    let err = render_report(&renderer, &requests).unwrap_err();
    assert!(format!("{err:#}").contains("display unavailable"));
    assert!(renderer.rendered.borrow().is_empty());
}
