use eframe::egui::{Context, Vec2};

use crate::catalog::{Catalog, Occupation};
use crate::graph::OccupationGraph;

mod graph;
mod render_utils;
mod ui;

pub struct CareerAtlasApp {
    model: ViewModel,
}

/// All mutable UI state. Lives on the egui frame loop; every field has a
/// single writer (the handler running in the current frame), which is what
/// makes the subset/selection snapshot consistent per render.
struct ViewModel {
    catalog: Catalog,
    search: String,
    category: String,
    category_choices: Vec<String>,
    selected: Option<String>,
    subset: Vec<Occupation>,
    graph_cache: OccupationGraph,
    graph_dirty: bool,
    pan: Vec2,
    zoom: f32,
}

impl CareerAtlasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        Self {
            model: ViewModel::new(catalog),
        }
    }
}

impl eframe::App for CareerAtlasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}
