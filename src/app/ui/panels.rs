use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::catalog::{self, Catalog};
use crate::graph::{OccupationGraph, build_graph};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(catalog: Catalog) -> Self {
        let category_choices = catalog::category_options(&catalog);

        Self {
            catalog,
            search: String::new(),
            category: catalog::ALL_CATEGORIES.to_string(),
            category_choices,
            selected: None,
            subset: Vec::new(),
            graph_cache: OccupationGraph::default(),
            graph_dirty: true,
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Full recompute of the filtered subset and the positioned graph. No
    /// incremental patching: every subset or selection change rebuilds both
    /// from scratch.
    pub(in crate::app) fn rebuild_graph(&mut self) {
        self.subset = catalog::filter_occupations(&self.catalog, &self.search, &self.category);
        self.graph_cache = build_graph(&self.subset, self.selected.as_deref());
        self.graph_dirty = false;
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        if self.graph_dirty {
            self.rebuild_graph();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("職業年表事典");
                    ui.separator();
                    ui.label("2040年のキャリアを見据える");
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "catalog: {} occupations, {} career paths",
                            self.catalog.len(),
                            self.catalog.career_edge_count()
                        ));
                        ui.separator();
                        ui.label(format!(
                            "showing {} nodes, {} edges",
                            self.graph_cache.nodes.len(),
                            self.graph_cache.edges.len()
                        ));
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }

    /// Sole writer of the selection. `None` clears it. A selection pointing
    /// at an occupation outside the current subset is legal and stays put; it
    /// just highlights nothing until the filter lets the node back in.
    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        if self.selected == selected {
            return;
        }

        self.selected = selected;
        self.graph_dirty = true;
    }
}
