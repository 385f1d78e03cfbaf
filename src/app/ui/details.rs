use eframe::egui::{self, Align, Layout, ProgressBar, RichText, Ui};

use crate::util::format_growth_rate;

use super::super::ViewModel;

impl ViewModel {
    /// Detail panel for the current selection. Receives the already-complete
    /// record; no joins happen here beyond following explicit career-path
    /// links back into the selection.
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        let Some(selected_id) = self.selected.clone() else {
            ui.add_space(120.0);
            ui.vertical_centered(|ui| {
                ui.label("職業を選択して詳細を表示");
            });
            return;
        };

        // The selection may have been filtered out of the graph; the record
        // itself still exists in the catalog, so keep showing it.
        let Some(occupation) = self.catalog.get(&selected_id).cloned() else {
            ui.label("選択された職業はカタログに存在しません。");
            return;
        };

        let mut pending_selection: Option<Option<String>> = None;

        ui.horizontal(|ui| {
            ui.heading(&occupation.name);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("✕").on_hover_text("選択を解除").clicked() {
                    pending_selection = Some(None);
                }
            });
        });
        ui.label(RichText::new(&occupation.name_en).weak());
        ui.label(RichText::new(&occupation.category).small().strong());
        ui.add_space(6.0);

        if !occupation.description.is_empty() {
            ui.label(&occupation.description);
            ui.add_space(6.0);
        }

        ui.separator();
        ui.label(RichText::new("2040年市場価値").strong());
        ui.add_space(4.0);

        let market = &occupation.market_value_2040;
        egui::Grid::new("market_value_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label("スコア");
                ui.label(RichText::new(market.score.to_string()).strong().monospace());
                ui.end_row();

                ui.label("予測年収");
                ui.label(&market.salary_range);
                ui.end_row();

                ui.label("成長率");
                ui.label(format_growth_rate(market.growth_rate));
                ui.end_row();

                ui.label("AI代替リスク");
                ui.label(format!("{}%", market.ai_risk));
                ui.end_row();
            });

        ui.separator();
        ui.label(RichText::new("必須スキル").strong());
        ui.add_space(4.0);
        if occupation.skills.is_empty() {
            ui.label("登録されたスキルはありません。");
        }
        for skill in &occupation.skills {
            ui.horizontal(|ui| {
                ui.label(&skill.name);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "Lv.{} / 重要度 {}",
                            skill.level, skill.importance
                        ))
                        .small()
                        .monospace(),
                    );
                });
            });
            ui.add(
                ProgressBar::new(f32::from(skill.level) / 5.0)
                    .desired_height(6.0)
                    .desired_width(ui.available_width()),
            );
            ui.add_space(4.0);
        }

        ui.separator();
        ui.label(RichText::new("キャリアパス").strong());
        ui.add_space(4.0);
        self.draw_career_links(
            ui,
            "前提となる職業",
            &occupation.career_path.prerequisites,
            &mut pending_selection,
        );
        self.draw_career_links(
            ui,
            "次のステップ",
            &occupation.career_path.next_steps,
            &mut pending_selection,
        );

        ui.separator();
        ui.label(RichText::new("タグ").strong());
        ui.horizontal_wrapped(|ui| {
            for tag in &occupation.tags {
                ui.label(RichText::new(format!("#{tag}")).small());
            }
        });

        if let Some(selection) = pending_selection {
            self.set_selected(selection);
        }
    }

    fn draw_career_links(
        &self,
        ui: &mut Ui,
        heading: &str,
        ids: &[String],
        pending_selection: &mut Option<Option<String>>,
    ) {
        ui.label(RichText::new(heading).small());
        if ids.is_empty() {
            ui.label(RichText::new("なし").weak());
            ui.add_space(4.0);
            return;
        }

        for id in ids {
            if let Some(linked) = self.catalog.get(id) {
                if ui
                    .link(format!("{} ({})", linked.name, linked.name_en))
                    .clicked()
                {
                    *pending_selection = Some(Some(id.clone()));
                }
            } else {
                // Dangling reference: show it, but it goes nowhere.
                ui.label(RichText::new(id).weak());
            }
        }
        ui.add_space(4.0);
    }
}
