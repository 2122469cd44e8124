//! Decorative hero artwork: skill labels orbiting a core on three rings.

use super::BORDER;
use super::FOREGROUND;
use super::PRIMARY;
use eframe::egui;
use std::f64::consts::TAU;

const RING_RADII: [f32; 3] = [0.24, 0.34, 0.44];
const BASE_ANGULAR_SPEED: f64 = 0.35;

pub(super) fn paint(ui: &mut egui::Ui, time: f64, labels: &[&str], size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    for ratio in RING_RADII {
        painter.circle_stroke(center, size * ratio, egui::Stroke::new(1.0, BORDER));
    }
    painter.circle_filled(center, size * 0.12, PRIMARY);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "</>",
        egui::FontId::monospace(size * 0.06),
        egui::Color32::WHITE,
    );

    for (index, label) in labels.iter().enumerate() {
        let position = center + satellite_offset(index, labels.len(), time, size);
        painter.circle_filled(position, 5.0, PRIMARY);
        painter.text(
            position - egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_BOTTOM,
            *label,
            egui::FontId::proportional(12.0),
            FOREGROUND,
        );
    }
}

/// Offset of satellite `index` from the core. Outer rings turn slower.
fn satellite_offset(index: usize, count: usize, time: f64, size: f32) -> egui::Vec2 {
    let ring = index % RING_RADII.len();
    let radius = size * RING_RADII[ring];
    let speed = BASE_ANGULAR_SPEED / (ring as f64 + 1.0);
    let phase = index as f64 * TAU / count.max(1) as f64;
    let angle = (time * speed + phase) as f32;
    egui::vec2(angle.cos(), angle.sin()) * radius
}

#[cfg(test)]
mod tests {
    use super::RING_RADII;
    use super::satellite_offset;

    #[test]
    fn satellites_stay_on_their_ring() {
        for index in 0..6 {
            for time in [0.0, 1.5, 42.0] {
                let offset = satellite_offset(index, 6, time, 100.0);
                let expected = 100.0 * RING_RADII[index % RING_RADII.len()];
                assert!((offset.length() - expected).abs() < 1e-3, "{index} at {time}");
            }
        }
    }

    #[test]
    fn satellites_move_over_time() {
        let before = satellite_offset(2, 6, 0.0, 100.0);
        let after = satellite_offset(2, 6, 1.0, 100.0);
        assert!((before - after).length() > 0.1);
    }
}
