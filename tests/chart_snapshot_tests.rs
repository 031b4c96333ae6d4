use chrono::{TimeZone, Utc};
use curve_chart::api::{CHART_SNAPSHOT_JSON_SCHEMA_V1, Chart, ChartConfig, ChartSnapshot};
use curve_chart::core::{Curve, DataPoint, Domain, Viewport};
use curve_chart::interaction::InfoRow;
use curve_chart::render::NullRenderer;
use rust_decimal::Decimal;

fn benchmark_chart() -> Chart<DataPoint, NullRenderer> {
    let day = |d: u32| Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).single().expect("valid date");
    let run = |d: u32, millis: i64| {
        DataPoint::from_decimal_time(day(d), Decimal::new(millis, 1)).expect("finite timing")
    };

    let mut chart = Chart::new(
        NullRenderer::default(),
        ChartConfig::new(Viewport::new(1024, 360)),
    )
    .expect("chart init")
    .with_info_rows(vec![InfoRow::new("Execution time (ms)", |point: &DataPoint| {
        format!("{:.1}", point.y)
    })]);
    chart.add_curve(Curve::from_points(
        "parse",
        vec![run(1, 125), run(2, 118), run(3, 131)],
    ));
    chart.add_curve(Curve::from_points(
        "render",
        vec![run(1, 242), run(2, 250), run(4, 236)],
    ));
    chart
}

#[test]
fn snapshot_of_empty_chart_has_no_domains() {
    let chart: Chart<DataPoint, _> = Chart::new(NullRenderer::default(), ChartConfig::default())
        .expect("chart init");
    let snapshot = chart.snapshot();
    assert!(snapshot.x_domain.is_none());
    assert!(snapshot.series.is_empty());
    assert_eq!(snapshot.viewport, Viewport::new(860, 400));
}

#[test]
fn snapshot_reflects_domains_series_and_legend() {
    let chart = benchmark_chart();
    let snapshot = chart.snapshot();

    let first = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid date")
        .timestamp() as f64;
    let x_domain = snapshot.x_domain.expect("x domain");
    assert_eq!(x_domain.min, first);
    assert_eq!(x_domain.max, first + 3.0 * 86_400.0);
    // floor(11.8 * 0.97) = 11, ceil(25.0 * 1.15) = 29
    assert_eq!(snapshot.y_domain, Some(Domain::new(11.0, 29.0)));

    let names: Vec<&str> = snapshot.series.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["parse", "render"]);
    assert_eq!(snapshot.legend_rows, vec!["parse", "render"]);
    assert_eq!(snapshot.series["render"].points.len(), 3);
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut chart = benchmark_chart();
    chart.draw().expect("draw");
    chart.on_pointer_enter();
    let plot_width = chart.geometry().expect("geometry").layout.plot_width();
    chart.on_pointer_move(plot_width);

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.focus_rows.len(), 1);
    assert_eq!(snapshot.focus_rows[0].value, "13.1");

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}")));
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("serialize bare");
    let parsed_bare = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = benchmark_chart().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen(
            &format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
            1,
        );
    assert!(ChartSnapshot::from_json_compat_str(&json).is_err());
}
