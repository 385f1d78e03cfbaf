use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, vec2,
};

use crate::util::truncate_label;

use super::super::ViewModel;
use super::super::render_utils::{
    dim_color, draw_background, node_screen_radius, tier_color, world_to_screen,
};

const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(0x00, 0xd4, 0xaa);
const MUTED_EDGE_COLOR: Color32 = Color32::from_rgba_premultiplied(0x64, 0x74, 0x8b, 0xb4);

const FLOW_DASH_LENGTH: f32 = 10.0;
const FLOW_GAP_LENGTH: f32 = 6.0;
const FLOW_SPEED: f32 = 36.0;

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        if self.graph_dirty {
            self.rebuild_graph();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);
        self.handle_graph_zoom(ui, rect, &response);
        self.handle_graph_pan(&response);

        if self.graph_cache.nodes.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "条件に合う職業がありません",
                FontId::proportional(14.0),
                Color32::from_gray(170),
            );
            return;
        }

        let zoom = self.zoom;
        let zoom_sqrt = zoom.sqrt();
        let screen_positions = self
            .graph_cache
            .nodes
            .iter()
            .map(|node| world_to_screen(rect, self.pan, zoom, node.position))
            .collect::<Vec<_>>();
        let screen_radii = self
            .graph_cache
            .nodes
            .iter()
            .map(|node| node_screen_radius(node.is_selected, zoom))
            .collect::<Vec<_>>();

        let hovered = Self::hovered_index(ui, &screen_positions, &screen_radii);
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        // Clicking a node selects it; clicking empty canvas clears.
        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            Some(hovered.and_then(|(index, _distance)| {
                self.graph_cache.nodes.get(index).map(|node| node.id.clone())
            }))
        } else {
            None
        };

        let flow_phase = (ui.input(|input| input.time) * f64::from(FLOW_SPEED)
            % f64::from(FLOW_DASH_LENGTH + FLOW_GAP_LENGTH)) as f32;
        let mut flow_active = false;

        for edge in &self.graph_cache.edges {
            let (Some(&src), Some(&dst)) = (
                self.graph_cache.index_by_id.get(&edge.source),
                self.graph_cache.index_by_id.get(&edge.target),
            ) else {
                continue;
            };

            let (line_width, line_color) = if edge.is_highlighted {
                ((3.0 * zoom_sqrt).clamp(1.6, 5.2), HIGHLIGHT_COLOR)
            } else {
                ((2.0 * zoom_sqrt).clamp(1.0, 3.4), MUTED_EDGE_COLOR)
            };
            let stroke = Stroke::new(line_width, line_color);

            if src == dst {
                // Self-loop: a small circle riding the top of the node.
                let loop_radius = screen_radii[src] * 0.5;
                let center =
                    screen_positions[src] - vec2(0.0, screen_radii[src] + loop_radius * 0.6);
                painter.circle_stroke(center, loop_radius, stroke);
                continue;
            }

            let from = screen_positions[src];
            let to = screen_positions[dst];
            let delta = to - from;
            let length = delta.length();
            if length <= f32::EPSILON {
                continue;
            }

            let direction = delta / length;
            let start = from + direction * screen_radii[src];
            let tip = to - direction * screen_radii[dst];
            if (tip - start).dot(direction) <= 0.0 {
                // Node discs overlap at this zoom; nothing left to draw.
                continue;
            }

            let arrow_size = (9.0 * zoom_sqrt).clamp(5.0, 13.0);
            let line_end = tip - direction * arrow_size;

            if edge.is_highlighted {
                // Animated marching dashes flow from source toward target.
                flow_active = true;
                painter.extend(Shape::dashed_line_with_offset(
                    &[start, line_end],
                    stroke,
                    &[FLOW_DASH_LENGTH],
                    &[FLOW_GAP_LENGTH],
                    -flow_phase,
                ));
            } else {
                painter.line_segment([start, line_end], stroke);
            }

            let perpendicular = vec2(-direction.y, direction.x);
            painter.add(Shape::convex_polygon(
                vec![
                    tip,
                    tip - direction * arrow_size + perpendicular * (arrow_size * 0.45),
                    tip - direction * arrow_size - perpendicular * (arrow_size * 0.45),
                ],
                line_color,
                Stroke::NONE,
            ));
        }

        if flow_active {
            ui.ctx().request_repaint();
        }

        let hovered_index = hovered.map(|(index, _)| index);
        for (index, node) in self.graph_cache.nodes.iter().enumerate() {
            let position = screen_positions[index];
            let radius = screen_radii[index];
            let color = tier_color(node.tier);
            let is_hovered = hovered_index == Some(index);

            if node.is_selected {
                painter.circle_filled(position, radius, color);
                painter.circle_stroke(
                    position,
                    radius,
                    Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 200)),
                );
            } else {
                painter.circle_filled(position, radius, dim_color(color, 0.22));
                let ring_width = if is_hovered { 4.5 } else { 3.0 };
                painter.circle_stroke(position, radius, Stroke::new(ring_width, color));
            }

            let number = (node.sequence_index + 1).to_string();
            if node.is_selected {
                painter.text(
                    position,
                    Align2::CENTER_CENTER,
                    number,
                    FontId::monospace((radius * 0.62).clamp(12.0, 26.0)),
                    Color32::WHITE,
                );
                self.draw_selected_label(&painter, index, position, radius);
            } else {
                painter.text(
                    position - vec2(0.0, radius * 0.26),
                    Align2::CENTER_CENTER,
                    number,
                    FontId::monospace((radius * 0.52).clamp(10.0, 20.0)),
                    Color32::WHITE,
                );
                if let Some(occupation) = self.subset.get(index) {
                    painter.text(
                        position + vec2(0.0, radius * 0.38),
                        Align2::CENTER_CENTER,
                        truncate_label(&occupation.name, 7),
                        FontId::proportional((radius * 0.30).clamp(8.0, 12.0)),
                        Color32::from_gray(235),
                    );
                }
            }
        }

        if let Some(index) = hovered_index
            && let Some(occupation) = self.subset.get(index)
        {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!(
                    "{}  |  score {}  |  {}",
                    occupation.name, occupation.market_value_2040.score, occupation.category
                ),
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        if let Some(selected) = pending_selection {
            self.apply_graph_selection(selected);
        }
    }

    /// The always-visible overlay label under a selected node, replacing the
    /// inline truncated label.
    fn draw_selected_label(
        &self,
        painter: &egui::Painter,
        index: usize,
        position: Pos2,
        radius: f32,
    ) {
        let Some(occupation) = self.subset.get(index) else {
            return;
        };

        let galley = painter.layout_no_wrap(
            occupation.name.clone(),
            FontId::proportional(15.0),
            Color32::WHITE,
        );
        let size = galley.size();
        let top_left = position + vec2(-size.x * 0.5, radius + 10.0);
        painter.rect_filled(
            Rect::from_min_size(top_left, size).expand(5.0),
            4.0,
            Color32::from_black_alpha(150),
        );
        painter.galley(top_left, galley, Color32::WHITE);
    }
}
