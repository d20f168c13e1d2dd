use eframe::egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::chart_palette;
use crate::data::counts::{format_percent, LabelCounts};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart panel (right half of the main area)
// ---------------------------------------------------------------------------

pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Rainfall Prediction Charts");
    ui.separator();

    let Some(counts) = state.counts().filter(|c| !c.is_empty()) else {
        ui.label(
            RichText::new("Upload a valid CSV file to see visualizations.")
                .color(Color32::LIGHT_BLUE),
        );
        return;
    };

    let colors = chart_palette(counts.entries().len());
    let height = (ui.available_height() - 40.0).clamp(200.0, 400.0);
    ui.columns(2, |cols: &mut [Ui]| {
        bar_chart(&mut cols[0], counts, &colors, height);
        pie_chart(&mut cols[1], counts, &colors, height);
    });
}

fn bar_chart(ui: &mut Ui, counts: &LabelCounts, colors: &[Color32], height: f32) {
    ui.strong("Rain vs No Rain (Bar)");

    let labels: Vec<String> = counts.entries().iter().map(|(l, _)| l.clone()).collect();
    let bars: Vec<Bar> = counts
        .entries()
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, ((label, count), color))| {
            Bar::new(i as f64, *count as f64)
                .name(label)
                .fill(*color)
                .width(0.6)
        })
        .collect();

    Plot::new("label_bar_chart")
        .height(height)
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn pie_chart(ui: &mut Ui, counts: &LabelCounts, colors: &[Color32], height: f32) {
    ui.strong("Rain vs No Rain (Pie)");

    let size = Vec2::new(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let center = response.rect.center();
    let radius = 0.4 * response.rect.width().min(response.rect.height());
    let text_color = ui.visuals().text_color();

    for (slice, color) in counts.pie_slices().iter().zip(colors) {
        for points in wedge_polygons(center, radius, slice.start_deg, slice.sweep_deg) {
            painter.add(Shape::convex_polygon(points, *color, Stroke::NONE));
        }
        let mid = slice.start_deg + slice.sweep_deg / 2.0;
        painter.text(
            polar(center, radius * 0.6, mid),
            Align2::CENTER_CENTER,
            format_percent(slice.percent),
            FontId::proportional(14.0),
            Color32::BLACK,
        );
        painter.text(
            polar(center, radius * 1.15, mid),
            Align2::CENTER_CENTER,
            &slice.label,
            FontId::proportional(14.0),
            text_color,
        );
    }
}

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// Point at `deg` degrees counter-clockwise from the positive x axis (screen
/// y grows downward).
fn polar(center: Pos2, r: f32, deg: f64) -> Pos2 {
    let rad = deg.to_radians();
    center + Vec2::new(r * rad.cos() as f32, -r * rad.sin() as f32)
}

const MAX_PIECE_DEG: f64 = 90.0;
const ARC_STEP_DEG: f64 = 3.0;

/// Split a wedge into convex polygons of at most 90° each, points in screen
/// clockwise order.
fn wedge_polygons(center: Pos2, radius: f32, start_deg: f64, sweep_deg: f64) -> Vec<Vec<Pos2>> {
    let mut pieces = Vec::new();
    let mut done = 0.0;
    while done < sweep_deg {
        let piece = (sweep_deg - done).min(MAX_PIECE_DEG);
        let steps = ((piece / ARC_STEP_DEG).ceil() as usize).max(1);
        let mut points = vec![center];
        for k in 0..=steps {
            let deg = start_deg + done + piece * k as f64 / steps as f64;
            points.push(polar(center, radius, deg));
        }
        points.reverse();
        pieces.push(points);
        done += piece;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_starts_at_twelve_o_clock() {
        let p = polar(Pos2::new(100.0, 100.0), 10.0, 90.0);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 90.0).abs() < 1e-4);
    }

    #[test]
    fn wide_wedges_are_split_into_convex_pieces() {
        let center = Pos2::new(0.0, 0.0);
        let pieces = wedge_polygons(center, 50.0, 90.0, 240.0);
        assert_eq!(pieces.len(), 3);
        for piece in &pieces {
            assert!(piece.contains(&center));
            for p in piece.iter().filter(|p| **p != center) {
                assert!(((p.x * p.x + p.y * p.y).sqrt() - 50.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn full_circle_and_empty_wedge() {
        let center = Pos2::new(0.0, 0.0);
        assert_eq!(wedge_polygons(center, 1.0, 90.0, 360.0).len(), 4);
        assert!(wedge_polygons(center, 1.0, 90.0, 0.0).is_empty());
    }
}
