use eframe::egui::{self, Sense, Ui, vec2};

use crate::catalog::{ALL_CATEGORIES, ScoreTier};

use super::super::ViewModel;
use super::super::render_utils::tier_color;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("検索・フィルター");
        ui.separator();
        ui.add_space(4.0);

        let mut changed = false;

        ui.label("職業検索");
        let search_response = ui.text_edit_singleline(&mut self.search);
        changed |= search_response
            .on_hover_text("職業名・英名の部分一致で絞り込む")
            .changed();
        ui.add_space(8.0);

        ui.label("カテゴリ");
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(category_label(&self.category))
            .show_ui(ui, |ui| {
                for choice in self.category_choices.clone() {
                    let label = category_label(&choice);
                    changed |= ui
                        .selectable_value(&mut self.category, choice, label)
                        .changed();
                }
            });

        if changed {
            self.graph_dirty = true;
        }

        ui.add_space(8.0);
        ui.label(format!("{} 件の職業を表示中", self.subset.len()));

        ui.separator();
        ui.label("市場価値");
        ui.add_space(2.0);
        for tier in [
            ScoreTier::HighDemand,
            ScoreTier::MidDemand,
            ScoreTier::LowDemand,
        ] {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect_filled(rect, 3.0, tier_color(tier));
                ui.label(tier.label());
            });
        }
    }
}

fn category_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        "すべて".to_string()
    } else {
        category.to_string()
    }
}
