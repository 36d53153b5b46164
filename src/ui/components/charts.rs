//! SVG chart rendering for the dashboard, drawn with plotters and injected as markup.

use std::error::Error;
use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, Circle, Color, DrawingArea, IntoDrawingArea, IntoFont, IntoSegmentedCoord,
    LineSeries, Polygon, RGBColor, Rectangle, SVGBackend, SegmentValue, ShapeStyle, Text,
    TextStyle,
};

use crate::domain::{shares, SeriesPoint};

const BACKGROUND: RGBColor = RGBColor(15, 23, 42);
const AXIS: RGBColor = RGBColor(71, 85, 105);
const TEXT: RGBColor = RGBColor(148, 163, 184);
const PRIMARY: RGBColor = RGBColor(16, 185, 129);

/// Green ramp for pie slices, darkest first.
const SLICE_COLORS: [RGBColor; 5] = [
    RGBColor(22, 163, 74),
    RGBColor(34, 197, 94),
    RGBColor(74, 222, 128),
    RGBColor(134, 239, 172),
    RGBColor(187, 247, 208),
];

type DrawResult = Result<(), Box<dyn Error>>;
type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

pub fn bar_chart_svg(series: &[SeriesPoint], width: u32, height: u32) -> String {
    render(width, height, |root| draw_bars(root, series))
}

pub fn line_chart_svg(series: &[SeriesPoint], width: u32, height: u32) -> String {
    render(width, height, |root| draw_line(root, series))
}

pub fn pie_chart_svg(series: &[SeriesPoint], width: u32, height: u32) -> String {
    render(width, height, |root| draw_pie(root, series, width, height))
}

fn render(width: u32, height: u32, draw: impl FnOnce(&Area<'_>) -> DrawResult) -> String {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        let drawn = root
            .fill(&BACKGROUND)
            .map_err(Box::<dyn Error>::from)
            .and_then(|_| draw(&root))
            .and_then(|_| root.present().map_err(Box::<dyn Error>::from));
        if let Err(err) = drawn {
            tracing::warn!("chart rendering failed: {err}");
        }
    }
    make_svg_responsive(svg, width, height)
}

fn label_style() -> TextStyle<'static> {
    ("sans-serif", 12).into_font().color(&TEXT)
}

fn axis_max(series: &[SeriesPoint]) -> u32 {
    let max = series.iter().map(|p| p.value).max().unwrap_or(0);
    // Headroom so the tallest bar does not touch the frame.
    (max + max / 10).max(1)
}

fn segment_label(series: &[SeriesPoint], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(index) => usize::try_from(*index)
            .ok()
            .and_then(|i| series.get(i))
            .map(|p| p.label.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn draw_bars(root: &Area<'_>, series: &[SeriesPoint]) -> DrawResult {
    if series.is_empty() {
        return Ok(());
    }
    let len = series.len() as i32;
    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(28)
        .y_label_area_size(36)
        .build_cartesian_2d((0..len).into_segmented(), 0u32..axis_max(series))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(series.len() + 1)
        .axis_style(&AXIS)
        .bold_line_style(&AXIS.mix(0.3))
        .light_line_style(&AXIS.mix(0.1))
        .label_style(label_style())
        .x_label_formatter(&|x| segment_label(series, x))
        .draw()?;

    chart.draw_series(series.iter().enumerate().map(|(index, p)| {
        let index = index as i32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(index), 0),
                (SegmentValue::Exact(index + 1), p.value),
            ],
            PRIMARY.filled(),
        );
        bar.set_margin(0, 0, 10, 10);
        bar
    }))?;

    Ok(())
}

fn draw_line(root: &Area<'_>, series: &[SeriesPoint]) -> DrawResult {
    if series.is_empty() {
        return Ok(());
    }
    let len = series.len() as i32;
    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(28)
        .y_label_area_size(36)
        .build_cartesian_2d((0..len).into_segmented(), 0u32..axis_max(series))?;

    chart
        .configure_mesh()
        .x_labels(series.len() + 1)
        .axis_style(&AXIS)
        .bold_line_style(&AXIS.mix(0.3))
        .light_line_style(&AXIS.mix(0.1))
        .label_style(label_style())
        .x_label_formatter(&|x| segment_label(series, x))
        .draw()?;

    let coords = || {
        series
            .iter()
            .enumerate()
            .map(|(index, p)| (SegmentValue::CenterOf(index as i32), p.value))
    };

    chart.draw_series(LineSeries::new(
        coords(),
        ShapeStyle::from(&PRIMARY).stroke_width(3),
    ))?;
    chart.draw_series(coords().map(|coord| Circle::new(coord, 5, PRIMARY.filled())))?;

    Ok(())
}

fn draw_pie(root: &Area<'_>, series: &[SeriesPoint], width: u32, height: u32) -> DrawResult {
    let center = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(width.min(height)) * 0.33;
    let to_pixel = |angle: f64, r: f64| {
        (
            (center.0 + r * angle.cos()).round() as i32,
            (center.1 + r * angle.sin()).round() as i32,
        )
    };

    // Start at twelve o'clock, clockwise.
    let mut start = -FRAC_PI_2;
    for (index, (label, share)) in shares(series).into_iter().enumerate() {
        if share <= 0.0 {
            continue;
        }
        let sweep = TAU * share / 100.0;
        let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
        let mut outline = vec![to_pixel(0.0, 0.0)];
        outline.extend((0..=steps).map(|step| {
            let angle = start + sweep * step as f64 / steps as f64;
            to_pixel(angle, radius)
        }));
        let color = SLICE_COLORS[index % SLICE_COLORS.len()];
        root.draw(&Polygon::new(outline, color.filled()))?;

        let middle = start + sweep / 2.0;
        let (x, y) = to_pixel(middle, radius + 18.0);
        let anchor = if middle.cos() >= 0.0 { 0 } else { -90 };
        root.draw(&Text::new(
            format!("{label} {share:.0}%"),
            (x + anchor, y),
            label_style(),
        ))?;

        start += sweep;
    }

    Ok(())
}

/// Lets the SVG scale with its container.
fn make_svg_responsive(svg: String, width: u32, height: u32) -> String {
    let needle = format!("width=\"{width}\" height=\"{height}\"");
    let replacement = if svg.contains("viewBox") {
        "width=\"100%\" height=\"100%\"".to_string()
    } else {
        format!(
            "viewBox=\"0 0 {width} {height}\" width=\"100%\" height=\"100%\" preserveAspectRatio=\"xMidYMid meet\""
        )
    };
    svg.replacen(&needle, &replacement, 1)
}

#[component]
pub fn ChartFrame(title: String, svg: String) -> Element {
    rsx! {
        div { class: "rounded-xl border border-slate-800 bg-slate-900/40 p-4 shadow-sm",
            h3 { class: "mb-3 text-sm font-semibold text-slate-200", "{title}" }
            div { class: "chart-frame h-72 w-full", dangerous_inner_html: "{svg}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CATEGORY_DISTRIBUTION, STOCK_TREND};

    #[test]
    fn bar_chart_names_every_category() {
        let svg = bar_chart_svg(&CATEGORY_DISTRIBUTION, 480, 300);
        assert!(svg.starts_with("<svg") || svg.contains("<svg"));
        for point in CATEGORY_DISTRIBUTION.iter() {
            assert!(svg.contains(point.label), "missing {}", point.label);
        }
    }

    #[test]
    fn pie_chart_labels_show_percentages() {
        let svg = pie_chart_svg(&CATEGORY_DISTRIBUTION, 480, 300);
        assert!(svg.contains("Mecânica 30%"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn line_chart_labels_months() {
        let svg = line_chart_svg(&STOCK_TREND, 960, 300);
        assert!(svg.contains("Jan"));
        assert!(svg.contains("Jun"));
    }

    #[test]
    fn responsive_svg_fills_container() {
        let svg = line_chart_svg(&STOCK_TREND, 640, 320);
        // The background rect keeps pixel sizes; only the root tag is rewritten.
        let root_tag = svg.split('>').next().unwrap_or_default();
        assert!(root_tag.starts_with("<svg"));
        assert!(root_tag.contains("width=\"100%\" height=\"100%\""));
        assert!(root_tag.contains("viewBox=\"0 0 640 320\""));
        assert!(!root_tag.contains("width=\"640\""));
    }

    #[test]
    fn empty_series_still_renders() {
        let svg = bar_chart_svg(&[], 320, 200);
        assert!(svg.contains("<svg"));
    }
}
