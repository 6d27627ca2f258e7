use eframe::egui;

use crate::commands::Histogram;

const PLANE_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(200, 60, 60),
    egui::Color32::from_rgb(60, 160, 60),
    egui::Color32::from_rgb(60, 90, 200),
];

/// Popup viewport showing one bar chart per plane. Returns false once the
/// user closes it.
pub(super) fn show_histogram_window(ctx: &egui::Context, histogram: &Histogram) -> bool {
    let mut open = true;
    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("histogram"),
        egui::ViewportBuilder::default()
            .with_title("Histogram")
            .with_inner_size([420.0, 300.0]),
        |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                open = false;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                let rows = histogram.planes.len().max(1) as f32;
                let spacing = ui.spacing().item_spacing.y;
                let row_height = ((ui.available_height() - spacing * (rows - 1.0)) / rows).max(20.0);
                for (index, bins) in histogram.planes.iter().enumerate() {
                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(ui.available_width(), row_height),
                        egui::Sense::hover(),
                    );
                    let color = if histogram.planes.len() == 1 {
                        egui::Color32::from_gray(90)
                    } else {
                        PLANE_COLORS[index % PLANE_COLORS.len()]
                    };
                    draw_histogram(&painter, response.rect, bins, color);
                }
            });
        },
    );
    open
}

fn draw_histogram(painter: &egui::Painter, rect: egui::Rect, bins: &[u32], color: egui::Color32) {
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    if bins.is_empty() {
        return;
    }

    let bar_width = rect.width() / bins.len() as f32;
    for (index, height) in bar_heights(bins, rect.height() - 2.0).into_iter().enumerate() {
        let x0 = rect.left() + index as f32 * bar_width;
        let x1 = x0 + bar_width.max(1.0);
        let y1 = rect.bottom();
        let y0 = y1 - height;

        painter.rect_filled(
            egui::Rect::from_min_max(egui::pos2(x0, y0), egui::pos2(x1, y1)),
            0.0,
            color,
        );
    }
}

/// Bar heights scaled so the tallest bin spans `max_height`.
pub(super) fn bar_heights(bins: &[u32], max_height: f32) -> Vec<f32> {
    let peak = bins.iter().copied().max().unwrap_or(0).max(1) as f32;
    bins.iter()
        .map(|count| (*count as f32 / peak).clamp(0.0, 1.0) * max_height.max(0.0))
        .collect()
}
