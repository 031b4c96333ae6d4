use approx::assert_relative_eq;
use curve_chart::api::{Chart, ChartConfig};
use curve_chart::core::{Curve, DataPoint, Viewport};
use curve_chart::interaction::{FocusTracker, InfoRow, InfoRowValue};
use curve_chart::render::{CanvasLayerKind, NullRenderer};

fn curve(name: &str, samples: &[(f64, f64)]) -> Curve<DataPoint> {
    Curve::from_points(
        name,
        samples.iter().map(|&(x, y)| DataPoint::new(x, y)).collect(),
    )
}

fn drawn_chart() -> Chart<DataPoint, NullRenderer> {
    let mut chart = Chart::new(
        NullRenderer::default(),
        ChartConfig::new(Viewport::new(800, 400)),
    )
    .expect("chart init")
    .with_info_rows(vec![
        InfoRow::new("x", |point: &DataPoint| format!("{}", point.x)),
        InfoRow::new("Execution time (ms)", |point: &DataPoint| {
            format!("{:.1}", point.y)
        }),
    ]);
    chart.add_curve(curve("A", &[(0.0, 10.0), (1.0, 20.0), (2.0, 15.0)]));
    chart.add_curve(curve("B", &[(0.0, 5.0), (1.0, 25.0), (2.0, 10.0)]));
    chart.draw().expect("draw");
    chart
}

// Plot is 600px wide over X in [0, 2], so 300px per unit.
fn pixel_for(data_x: f64) -> f64 {
    data_x * 300.0
}

#[test]
fn hover_resolves_nearest_record_of_reference_curve() {
    let mut chart = drawn_chart();
    chart.on_pointer_enter();

    let focused = chart.on_pointer_move(pixel_for(1.4)).expect("focus");
    assert_eq!(focused.index, 1);
    assert_eq!((focused.data_x, focused.data_y), (1.0, 20.0));
    assert_relative_eq!(focused.x, 300.0, epsilon = 1e-9);
    assert_relative_eq!(focused.y, 330.0 - 16.0 / 25.0 * 330.0, epsilon = 1e-9);

    assert_eq!(
        chart.focus_rows(),
        &[
            InfoRowValue {
                label: "x".to_owned(),
                value: "1".to_owned(),
            },
            InfoRowValue {
                label: "Execution time (ms)".to_owned(),
                value: "20.0".to_owned(),
            },
        ]
    );
}

#[test]
fn equidistant_pointer_resolves_to_later_record() {
    let mut chart = drawn_chart();
    let focused = chart.on_pointer_move(pixel_for(0.5)).expect("focus");
    assert_eq!(focused.index, 1);
    let focused = chart.on_pointer_move(pixel_for(1.5)).expect("focus");
    assert_eq!(focused.index, 2);
}

#[test]
fn pointer_outside_data_range_clamps_to_ends() {
    let mut chart = drawn_chart();
    assert_eq!(chart.on_pointer_move(-120.0).map(|p| p.index), Some(0));
    assert_eq!(chart.on_pointer_move(10_000.0).map(|p| p.index), Some(2));
}

#[test]
fn focus_curve_can_be_switched() {
    let mut chart = drawn_chart();
    assert_eq!(chart.focus_curve_name(), Some("A"));
    chart.set_focus_curve("B").expect("known curve");
    assert_eq!(chart.focus_curve_name(), Some("B"));

    let focused = chart.on_pointer_move(pixel_for(1.0)).expect("focus");
    assert_eq!(focused.data_y, 25.0);
}

#[test]
fn overlay_is_drawn_only_between_enter_and_leave() {
    let mut chart = drawn_chart();
    chart.on_pointer_move(pixel_for(1.0));
    chart.draw().expect("draw");
    assert_eq!(chart.renderer().last_layer_count(CanvasLayerKind::Focus), 0);

    chart.on_pointer_enter();
    chart.on_pointer_move(pixel_for(1.0));
    chart.draw().expect("draw");
    let frame = chart.renderer().last_frame.clone().expect("frame");
    let focus = frame.layer(CanvasLayerKind::Focus).expect("focus layer");
    assert_eq!(focus.lines.len(), 2);
    assert_eq!(focus.circles.len(), 1);
    assert_eq!(focus.rects.len(), 1);
    let rows: Vec<&str> = focus.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(rows, vec!["x: 1", "Execution time (ms): 20.0"]);

    // Marker sits on the focused record, shifted by the plot margins.
    let margin = chart.config().margin;
    assert_relative_eq!(focus.circles[0].cx, 300.0 + margin.left, epsilon = 1e-9);

    chart.on_pointer_leave();
    assert!(!chart.focus_state().visible);
    assert!(chart.focus_state().focused.is_none());
    assert!(chart.focus_rows().is_empty());
    chart.draw().expect("draw");
    assert_eq!(chart.renderer().last_layer_count(CanvasLayerKind::Focus), 0);
}

#[test]
fn adding_a_curve_clears_the_focus() {
    let mut chart = drawn_chart();
    chart.on_pointer_enter();
    chart.on_pointer_move(pixel_for(2.0));
    assert!(chart.focus_state().focused.is_some());

    chart.add_curve(curve("C", &[(0.0, 1.0)]));
    assert!(chart.focus_state().focused.is_none());
    assert!(chart.focus_state().visible);
}

#[test]
fn tracker_locates_on_custom_records() {
    struct Run {
        finished_at: f64,
        millis: f64,
    }

    let runs = vec![
        Run { finished_at: 100.0, millis: 3.0 },
        Run { finished_at: 160.0, millis: 2.5 },
        Run { finished_at: 400.0, millis: 4.0 },
    ];
    let curve = Curve::new("runs", runs, |run: &Run| run.finished_at, |run: &Run| run.millis);

    assert_eq!(FocusTracker::locate(&curve, 129.0), Some(0));
    assert_eq!(FocusTracker::locate(&curve, 130.0), Some(1));
    assert_eq!(FocusTracker::locate(&curve, 281.0), Some(2));
    assert_eq!(FocusTracker::locate(&curve, 1e9), Some(2));
}

#[test]
fn panel_lists_every_info_row() {
    let mut chart = Chart::new(
        NullRenderer::default(),
        ChartConfig::new(Viewport::new(800, 400)),
    )
    .expect("chart init")
    .with_info_rows(vec![
        InfoRow::new("x", |point: &DataPoint| format!("{}", point.x)),
        InfoRow::new("y", |point: &DataPoint| format!("{}", point.y)),
        InfoRow::new("double", |point: &DataPoint| format!("{}", point.y * 2.0)),
        InfoRow::new("half", |point: &DataPoint| format!("{}", point.y / 2.0)),
        InfoRow::new("note", |_: &DataPoint| "ok".to_owned()),
    ]);
    chart.add_curve(curve("A", &[(0.0, 10.0), (1.0, 20.0), (2.0, 15.0)]));
    chart.add_curve(curve("B", &[(0.0, 5.0), (1.0, 25.0), (2.0, 10.0)]));
    chart.draw().expect("draw");

    chart.on_pointer_enter();
    chart.on_pointer_move(pixel_for(1.0));
    chart.draw().expect("draw");

    let frame = chart.renderer().last_frame.clone().expect("frame");
    let focus = frame.layer(CanvasLayerKind::Focus).expect("focus layer");
    let rows: Vec<&str> = focus.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(rows, vec!["x: 1", "y: 20", "double: 40", "half: 10", "note: ok"]);

    // Text inset plus five rows outgrows the configured panel height.
    let style = chart.config().style;
    let panel = &focus.rects[0];
    assert_relative_eq!(panel.height, 8.0 + 5.0 * style.focus_panel_row_height_px);
    assert!(panel.height > style.focus_panel_height_px);
    let last_row = focus.texts.last().expect("last row");
    assert!(last_row.y < panel.y + panel.height);
}
