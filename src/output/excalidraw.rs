//! Excalidraw document emitter.
//!
//! Consumes the dependency graph and the layout's position map and renders
//! one rectangle plus bound text label per node and one bound arrow per
//! edge. Element ids are v4 UUIDs generated locally; no id state is shared
//! with the core. Edges whose target was never processed as a file (bare
//! packages that slipped through, collapsed names, unresolved targets) are
//! dropped here rather than at graph-build time.

use crate::layout::{NODE_HEIGHT, NODE_WIDTH, Point};
use crate::model::{DependencyGraph, FileType};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ExcalidrawDoc {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    source: &'static str,
    elements: Vec<Value>,
}

impl ExcalidrawDoc {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(test)]
    pub(crate) fn elements(&self) -> &[Value] {
        &self.elements
    }
}

struct NodeShape {
    rect_id: String,
    x: f64,
    y: f64,
}

impl NodeShape {
    fn center(&self) -> (f64, f64) {
        (self.x + NODE_WIDTH / 2.0, self.y + NODE_HEIGHT / 2.0)
    }
}

/// Render the graph and position map into an Excalidraw document.
/// Rectangle/text pairs come first in placement order, arrows after.
pub fn render(graph: &DependencyGraph, positions: &IndexMap<String, Point>) -> ExcalidrawDoc {
    let mut shapes: IndexMap<&str, NodeShape> = IndexMap::new();
    let mut rectangles: IndexMap<String, Value> = IndexMap::new();
    let mut labels: Vec<Value> = Vec::new();

    for (index, (node, pos)) in positions.iter().enumerate() {
        let file_type = FileType::classify(node);
        let (rectangle, text, shape) = node_elements(node, *pos, index, file_type);
        rectangles.insert(shape.rect_id.clone(), rectangle);
        labels.push(text);
        shapes.insert(node.as_str(), shape);
    }

    let mut arrows: Vec<Value> = Vec::new();
    for (source, targets) in graph.iter() {
        let Some(source_shape) = shapes.get(source) else {
            continue;
        };
        for target in targets {
            // Dangling targets have no rectangle and draw nothing.
            let Some(target_shape) = shapes.get(target.as_str()) else {
                continue;
            };

            let arrow_id = format!("arrow_{}_{}", source_shape.rect_id, target_shape.rect_id);
            arrows.push(arrow_element(source_shape, target_shape, &arrow_id));

            bind_arrow(&mut rectangles, &source_shape.rect_id, &arrow_id);
            bind_arrow(&mut rectangles, &target_shape.rect_id, &arrow_id);
        }
    }

    let mut elements = Vec::with_capacity(rectangles.len() * 2 + arrows.len());
    for (rectangle, label) in rectangles.into_values().zip(labels) {
        elements.push(rectangle);
        elements.push(label);
    }
    elements.extend(arrows);

    ExcalidrawDoc {
        kind: "excalidraw",
        version: 2,
        source: "depsketch",
        elements,
    }
}

fn node_elements(
    node: &str,
    pos: Point,
    index: usize,
    file_type: FileType,
) -> (Value, Value, NodeShape) {
    let rect_id = Uuid::new_v4().to_string();
    let text_id = Uuid::new_v4().to_string();
    let group_id = Uuid::new_v4().to_string();
    let is_special = file_type != FileType::Default;

    let rectangle = json!({
        "id": rect_id,
        "type": "rectangle",
        "x": pos.x,
        "y": pos.y,
        "width": NODE_WIDTH,
        "height": NODE_HEIGHT,
        "angle": 0,
        "strokeColor": "#1e1e1e",
        "backgroundColor": file_type.color(),
        "fillStyle": "solid",
        "strokeWidth": if is_special { 2 } else { 1 },
        "strokeStyle": "solid",
        "roughness": 1,
        "opacity": 100,
        "groupIds": [group_id],
        "frameId": null,
        "roundness": {"type": 3},
        "seed": index,
        "version": 1,
        "versionNonce": 1,
        "isDeleted": false,
        "boundElements": [
            {"id": text_id, "type": "text"}
        ],
        "updated": 1,
        "link": null,
        "locked": false
    });

    let text = json!({
        "id": text_id,
        "type": "text",
        "x": pos.x + NODE_WIDTH / 2.0,
        "y": pos.y + NODE_HEIGHT / 2.0,
        "width": NODE_WIDTH,
        "height": NODE_HEIGHT,
        "angle": 0,
        "strokeColor": if is_special { "#FFFFFF" } else { "#1e1e1e" },
        "backgroundColor": "transparent",
        "fillStyle": "solid",
        "strokeWidth": 1,
        "strokeStyle": "solid",
        "roughness": 1,
        "opacity": 100,
        "groupIds": [group_id],
        "frameId": null,
        "roundness": null,
        "seed": index + 1000,
        "version": 1,
        "versionNonce": 1,
        "isDeleted": false,
        "boundElements": [],
        "updated": 1,
        "link": null,
        "locked": false,
        "fontSize": 20,
        "fontFamily": 1,
        "text": node,
        "textAlign": "center",
        "verticalAlign": "middle",
        "containerId": rect_id,
        "originalText": node,
        "lineHeight": 1.25,
        "baseline": 18
    });

    let shape = NodeShape {
        rect_id,
        x: pos.x,
        y: pos.y,
    };

    (rectangle, text, shape)
}

fn arrow_element(source: &NodeShape, target: &NodeShape, arrow_id: &str) -> Value {
    let (sx, sy) = source.center();
    let (tx, ty) = target.center();
    let seed = (Uuid::new_v4().as_u128() % 1_000_000) as u64;

    json!({
        "id": arrow_id,
        "type": "arrow",
        "x": sx,
        "y": sy,
        "width": tx - sx,
        "height": ty - sy,
        "angle": 0,
        "strokeColor": "#1e1e1e",
        "backgroundColor": "transparent",
        "fillStyle": "solid",
        "strokeWidth": 2,
        "strokeStyle": "solid",
        "roughness": 1,
        "opacity": 100,
        "groupIds": [],
        "frameId": null,
        "roundness": {"type": 2},
        "seed": seed,
        "version": 1,
        "versionNonce": 1,
        "isDeleted": false,
        "boundElements": null,
        "updated": 1,
        "link": null,
        "locked": false,
        "points": [[0, 0], [tx - sx, ty - sy]],
        "lastCommittedPoint": null,
        "startBinding": {
            "elementId": source.rect_id,
            "focus": 0.5,
            "gap": 4
        },
        "endBinding": {
            "elementId": target.rect_id,
            "focus": 0.5,
            "gap": 4
        },
        "startArrowhead": null,
        "endArrowhead": "arrow"
    })
}

/// Record the arrow on a rectangle's boundElements list.
fn bind_arrow(rectangles: &mut IndexMap<String, Value>, rect_id: &str, arrow_id: &str) {
    if let Some(bound) = rectangles
        .get_mut(rect_id)
        .and_then(|rect| rect["boundElements"].as_array_mut())
    {
        bound.push(json!({"id": arrow_id, "type": "arrow"}));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn sample_graph() -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.add_node("App");
        graph.add_node("Widget");
        graph.add_edge("App", "Widget");
        graph.add_edge("App", "react-dom");
        graph
    }

    fn render_sample() -> ExcalidrawDoc {
        let graph = sample_graph();
        let positions = compute_layout(graph.nodes(), "App");
        render(&graph, &positions)
    }

    #[test]
    fn test_element_counts() {
        let doc = render_sample();
        // Two nodes (rectangle + text each) and one resolvable arrow; the
        // dangling react-dom edge is dropped.
        assert_eq!(doc.elements().len(), 5);
    }

    #[test]
    fn test_dangling_edge_draws_no_arrow() {
        let doc = render_sample();
        let arrows: Vec<_> = doc
            .elements()
            .iter()
            .filter(|e| e["type"] == "arrow")
            .collect();
        assert_eq!(arrows.len(), 1);
    }

    #[test]
    fn test_arrow_is_bound_to_both_rectangles() {
        let doc = render_sample();
        let rectangles: Vec<_> = doc
            .elements()
            .iter()
            .filter(|e| e["type"] == "rectangle")
            .collect();

        for rect in rectangles {
            let bound = rect["boundElements"].as_array().unwrap();
            assert!(
                bound
                    .iter()
                    .any(|b| b["id"].as_str().unwrap_or_default().starts_with("arrow_")),
                "rectangle should reference the arrow"
            );
        }
    }

    #[test]
    fn test_entry_node_is_colored_and_thick_stroked() {
        let doc = render_sample();
        let app_rect = doc
            .elements()
            .iter()
            .find(|e| e["type"] == "rectangle" && e["backgroundColor"] == "#4CAF50")
            .expect("App rectangle");
        assert_eq!(app_rect["strokeWidth"], 2);
    }

    #[test]
    fn test_document_shell() {
        let doc = render_sample();
        let json: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "excalidraw");
        assert_eq!(json["version"], 2);
        assert_eq!(json["source"], "depsketch");
    }

    #[test]
    fn test_label_text_matches_node() {
        let doc = render_sample();
        let texts: Vec<_> = doc
            .elements()
            .iter()
            .filter(|e| e["type"] == "text")
            .map(|e| e["text"].as_str().unwrap().to_string())
            .collect();
        assert!(texts.contains(&"App".to_string()));
        assert!(texts.contains(&"Widget".to_string()));
    }
}
