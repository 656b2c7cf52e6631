use hr_chart::{read_csv, AxisFormatter, ChartData, ChartScreen, Error, LabelProvider, SoftError};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

const HR_CSV: &str = "time;hr\n\
2023-01-01 10:00:00;60\n\
2023-01-01 10:01:00;65\n\
2023-01-01 10:02:00;\n\
;70\n\
2023-01-01 10:03:00\n\
2023-01-01 10:04:00;58.5\n";

fn csv_file(content: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn read_file_with_soft_errors() {
    let f = csv_file(HR_CSV.as_bytes());
    let parsed = read_csv(f.path()).unwrap();
    let values: Vec<f64> = parsed.records.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![60., 65., 0., 58.5]);
    assert_eq!(
        parsed.soft_errors,
        vec![
            SoftError::InvalidValue {
                line: 4,
                raw: String::new()
            },
            SoftError::MalformedRow {
                line: 6,
                content: "2023-01-01 10:03:00".to_string()
            },
        ]
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    match read_csv(dir.path().join("missing.csv")) {
        Err(Error::Read { path, .. }) => assert!(path.ends_with("missing.csv")),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn invalid_utf8_is_an_encoding_error() {
    let f = csv_file(b"time;hr\n2023-01-01 10:00:00;\xff\xfe\n");
    assert!(matches!(read_csv(f.path()), Err(Error::Encoding { .. })));
}

#[test]
fn screen_reload_does_not_reread_the_file() {
    let f = csv_file(HR_CSV.as_bytes());
    let mut screen = ChartScreen::new(AxisFormatter::utc());
    screen.load_file(f.path()).unwrap();
    let path = f.path().to_path_buf();
    f.close().unwrap();
    assert!(!path.exists());

    let first = screen.chart();
    let second = screen.chart();
    assert_eq!(first, second);
    assert_eq!(first.axis_minimum, Some(0.));
    assert_eq!(first.series.points.len(), 4);
    let labels: Vec<String> = first
        .series
        .points
        .iter()
        .map(|p| screen.formatter().format(p.0))
        .collect();
    assert_eq!(labels, vec!["10:00:00", "10:01:00", "10:02:00", "10:04:00"]);
}

#[test]
fn plot_to_svg() {
    let f = csv_file(HR_CSV.as_bytes());
    let dir = tempdir().unwrap();
    let svgout = dir.path().join("hr.svg");
    let mut screen = ChartScreen::new(AxisFormatter::utc());
    screen.load_file(f.path()).unwrap();
    screen
        .chart()
        .plot_svg(screen.formatter(), &svgout, (800, 400))
        .unwrap();
    let svg = std::fs::read_to_string(&svgout).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("hr value"));
    assert!(svg.contains("10:0"));
}

#[test]
fn plot_empty_chart_shows_caption() {
    let dir = tempdir().unwrap();
    let svgout = dir.path().join("empty.svg");
    let fmt = AxisFormatter::utc();
    let chart = ChartData::assemble(&[], &fmt, &fmt.now());
    chart.plot_svg(&fmt, &svgout, (400, 200)).unwrap();
    let svg = std::fs::read_to_string(&svgout).unwrap();
    assert!(svg.contains("Please add CSV file"));
}

#[test]
fn custom_label_provider() {
    struct Seconds;
    impl LabelProvider for Seconds {
        fn format(&self, x: f64) -> String {
            format!("t{:.0}", x)
        }
    }
    let dir = tempdir().unwrap();
    let svgout = dir.path().join("seconds.svg");
    let mut screen = ChartScreen::new(AxisFormatter::utc());
    screen.load_str("time;hr\n2023-01-01 10:00:00;60\n2023-01-01 10:01:00;65\n");
    screen
        .chart()
        .plot_svg(&Seconds, &svgout, (800, 400))
        .unwrap();
    let svg = std::fs::read_to_string(&svgout).unwrap();
    assert!(svg.contains("t16725672"));
}
