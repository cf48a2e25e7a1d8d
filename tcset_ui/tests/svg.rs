use rstest::rstest;
use tcset_core::Dataset;
use tcset_ui::{ChartLayout, chart_for};

#[rstest]
#[case(Dataset::Taylor, 73)]
#[case(Dataset::Rosie, 32)]
fn position_chart_draws_one_dot_per_sample(#[case] dataset: Dataset, #[case] n: usize) {
    let svg = chart_for(dataset, ChartLayout::default()).to_svg();
    assert_eq!(svg.matches("<circle ").count(), n);
    assert!(svg.contains("Position from base (mm)"));
    assert!(!svg.contains("<polyline"));
}

#[rstest]
#[case(Dataset::First, "#718096")]
#[case(Dataset::Second, "#3182ce")]
fn deviation_chart_is_one_polyline(#[case] dataset: Dataset, #[case] color: &str) {
    let svg = chart_for(dataset, ChartLayout::default()).to_svg();
    assert_eq!(svg.matches("<polyline").count(), 1);
    assert!(svg.contains(&format!("stroke=\"{color}\"")));
    let points = svg
        .split("points=\"")
        .nth(1)
        .and_then(|s| s.split('"').next())
        .expect("points attribute");
    assert_eq!(points.split(' ').count(), 44);
    assert!(svg.contains("Desired Temperature (\u{00B0}C)"));
}

#[test]
fn document_uses_layout_size() {
    let svg = chart_for(Dataset::Second, ChartLayout::new(800, 400)).to_svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("width=\"800\" height=\"400\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    // 7 vertical + 5 horizontal grid lines
    assert_eq!(svg.matches("<line ").count(), 12);
}

#[test]
fn every_dot_lies_inside_the_canvas() {
    let layout = ChartLayout::default();
    for dataset in [Dataset::Taylor, Dataset::Rosie] {
        for (x, y) in chart_for(dataset, layout).points_px() {
            assert!(x >= layout.padding.left && x <= layout.width - layout.padding.right);
            assert!(y >= layout.padding.top && y <= layout.height - layout.padding.bottom);
        }
    }
}
