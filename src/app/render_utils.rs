use eframe::egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::catalog::ScoreTier;

/// Demand-tier palette, matching the legend.
pub(super) fn tier_color(tier: ScoreTier) -> Color32 {
    match tier {
        ScoreTier::HighDemand => Color32::from_rgb(0x00, 0xd4, 0xaa),
        ScoreTier::MidDemand => Color32::from_rgb(0x64, 0x74, 0x8b),
        ScoreTier::LowDemand => Color32::from_rgb(0x94, 0xa3, 0xb8),
    }
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        color.a(),
    )
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(17, 20, 26));

    // Dot grid, pan/zoom aware.
    let step = (40.0 * zoom.clamp(0.5, 2.0)).max(18.0);
    let origin = rect.center() + pan;
    let dot = Color32::from_rgba_unmultiplied(255, 255, 255, 14);

    let mut x = origin.x.rem_euclid(step);
    while x < rect.right() {
        let mut y = origin.y.rem_euclid(step);
        while y < rect.bottom() {
            painter.circle_filled(Pos2::new(x, y), 1.0, dot);
            y += step;
        }
        x += step;
    }
}

pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + world * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.center() - pan) / zoom
}

/// Screen radius of a node. Selected nodes render larger; both shrink
/// sublinearly with zoom so labels stay readable when zoomed out.
pub(super) fn node_screen_radius(is_selected: bool, zoom: f32) -> f32 {
    let base = if is_selected { 38.0 } else { 27.0 };
    (base * zoom.powf(0.6)).clamp(7.0, 82.0)
}
