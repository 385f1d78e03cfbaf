use std::collections::{HashMap, HashSet};
use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use crate::catalog::{Occupation, ScoreTier};

/// Radius of the layout circle, in world units.
pub const LAYOUT_RADIUS: f32 = 250.0;

/// A positioned occupation, valid only for the render pass it was built for.
#[derive(Clone, Debug)]
pub struct GraphNode {
    pub id: String,
    pub position: Vec2,
    pub sequence_index: usize,
    pub is_selected: bool,
    pub tier: ScoreTier,
}

/// A directed career-path edge whose endpoints are both in the current
/// subset. `id` is `"<source>-<target>"`.
#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub is_highlighted: bool,
}

#[derive(Clone, Debug, Default)]
pub struct OccupationGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub index_by_id: HashMap<String, usize>,
}

/// Builds the positioned node/edge graph for a filtered, ordered subset of
/// occupations. Deterministic and infallible: the output depends only on the
/// subset, its order, and the selection, and it is recomputed from scratch on
/// every call rather than patched incrementally.
///
/// Nodes are placed evenly on a circle; every angle depends on the subset
/// size, so positions are not stable against insertion or removal elsewhere
/// in the subset. Edges are emitted only when both endpoints survive the
/// filter; dangling `next_steps` references are silently dropped. Self-loops
/// are kept.
pub fn build_graph(subset: &[Occupation], selected: Option<&str>) -> OccupationGraph {
    let n = subset.len();
    if n == 0 {
        return OccupationGraph::default();
    }

    let member_ids = subset
        .iter()
        .map(|occupation| occupation.id.as_str())
        .collect::<HashSet<_>>();

    let mut nodes = Vec::with_capacity(n);
    let mut index_by_id = HashMap::with_capacity(n);
    for (index, occupation) in subset.iter().enumerate() {
        let angle = (index as f32 / n as f32) * TAU;
        nodes.push(GraphNode {
            id: occupation.id.clone(),
            position: vec2(angle.cos(), angle.sin()) * LAYOUT_RADIUS,
            sequence_index: index,
            is_selected: selected == Some(occupation.id.as_str()),
            tier: occupation.tier(),
        });
        index_by_id.insert(occupation.id.clone(), index);
    }

    let mut edges = Vec::new();
    for occupation in subset {
        for target in &occupation.career_path.next_steps {
            if !member_ids.contains(target.as_str()) {
                continue;
            }

            let is_highlighted = selected == Some(occupation.id.as_str())
                || selected == Some(target.as_str());
            edges.push(GraphEdge {
                id: format!("{}-{}", occupation.id, target),
                source: occupation.id.clone(),
                target: target.clone(),
                is_highlighted,
            });
        }
    }

    OccupationGraph {
        nodes,
        edges,
        index_by_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CareerPath, MarketValue};

    fn occupation(id: &str, score: u8, next_steps: &[&str]) -> Occupation {
        Occupation {
            id: id.to_string(),
            name: id.to_string(),
            name_en: id.to_string(),
            category: "IT".to_string(),
            description: String::new(),
            market_value_2040: MarketValue {
                score,
                salary_range: "-".to_string(),
                growth_rate: 0.0,
                ai_risk: 0,
            },
            skills: Vec::new(),
            career_path: CareerPath {
                prerequisites: Vec::new(),
                next_steps: next_steps.iter().map(|s| s.to_string()).collect(),
            },
            tags: Vec::new(),
        }
    }

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn empty_subset_builds_empty_graph() {
        let graph = build_graph(&[], Some("ghost"));
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn nodes_cover_the_circle_exactly_once() {
        let subset = (0..7)
            .map(|i| occupation(&format!("o{i}"), 70, &[]))
            .collect::<Vec<_>>();
        let graph = build_graph(&subset, None);

        assert_eq!(graph.nodes.len(), 7);
        for (index, node) in graph.nodes.iter().enumerate() {
            let angle = (index as f32 / 7.0) * TAU;
            assert_eq!(node.sequence_index, index);
            assert_eq!(node.id, format!("o{index}"));
            assert_close(
                node.position,
                vec2(angle.cos(), angle.sin()) * LAYOUT_RADIUS,
            );
        }
    }

    #[test]
    fn single_node_sits_at_angle_zero() {
        let graph = build_graph(&[occupation("solo", 90, &["elsewhere"])], None);
        assert_eq!(graph.nodes.len(), 1);
        assert_close(graph.nodes[0].position, vec2(LAYOUT_RADIUS, 0.0));
        // Its only next-step points outside the subset, so no edges at all.
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn edges_exist_exactly_for_in_subset_next_steps() {
        let subset = vec![
            occupation("a", 90, &["b", "missing"]),
            occupation("b", 70, &[]),
            occupation("c", 50, &["a"]),
        ];
        let graph = build_graph(&subset, None);

        let ids = graph.edges.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["a-b", "c-a"]);
        for edge in &graph.edges {
            assert!(graph.index_by_id.contains_key(&edge.source));
            assert!(graph.index_by_id.contains_key(&edge.target));
        }
    }

    #[test]
    fn selection_marks_node_and_incident_edges() {
        let subset = vec![
            occupation("a", 90, &["b"]),
            occupation("b", 70, &[]),
            occupation("c", 50, &["a"]),
        ];
        let graph = build_graph(&subset, Some("a"));

        for node in &graph.nodes {
            assert_eq!(node.is_selected, node.id == "a");
        }
        // a-b highlights via source, c-a via target.
        assert_eq!(graph.edges.len(), 2);
        assert!(graph.edges.iter().all(|edge| edge.is_highlighted));

        let graph = build_graph(&subset, Some("b"));
        let highlighted = graph
            .edges
            .iter()
            .filter(|edge| edge.is_highlighted)
            .map(|edge| edge.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(highlighted, ["a-b"]);
    }

    #[test]
    fn worked_example_angles() {
        let subset = vec![
            occupation("a", 95, &["b"]),
            occupation("b", 70, &[]),
            occupation("c", 40, &["a"]),
        ];
        let graph = build_graph(&subset, Some("a"));

        let expected = [0.0f32, TAU / 3.0, 2.0 * TAU / 3.0];
        for (node, angle) in graph.nodes.iter().zip(expected) {
            assert_close(
                node.position,
                vec2(angle.cos(), angle.sin()) * LAYOUT_RADIUS,
            );
        }
        assert_eq!(graph.nodes[0].tier, ScoreTier::HighDemand);
        assert_eq!(graph.nodes[1].tier, ScoreTier::MidDemand);
        assert_eq!(graph.nodes[2].tier, ScoreTier::LowDemand);
    }

    #[test]
    fn self_loops_are_kept() {
        let graph = build_graph(&[occupation("a", 70, &["a"])], None);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].id, "a-a");
        assert_eq!(graph.edges[0].source, graph.edges[0].target);
    }

    #[test]
    fn stale_selection_highlights_nothing() {
        let subset = vec![occupation("a", 70, &["b"]), occupation("b", 70, &[])];
        let graph = build_graph(&subset, Some("filtered-out"));

        assert!(graph.nodes.iter().all(|node| !node.is_selected));
        assert!(graph.edges.iter().all(|edge| !edge.is_highlighted));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let subset = vec![
            occupation("a", 90, &["b"]),
            occupation("b", 70, &["a"]),
        ];
        let first = build_graph(&subset, Some("a"));
        let second = build_graph(&subset, Some("a"));

        assert_eq!(first.nodes.len(), second.nodes.len());
        assert_eq!(first.edges.len(), second.edges.len());
        for (left, right) in first.edges.iter().zip(second.edges.iter()) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.is_highlighted, right.is_highlighted);
        }
        for (left, right) in first.nodes.iter().zip(second.nodes.iter()) {
            assert_eq!(left.id, right.id);
            assert_close(left.position, right.position);
        }
    }
}
