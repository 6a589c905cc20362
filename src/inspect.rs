//! Read-only introspection view of the tree.
//!
//! [`MemRTree::inspect`] renders the tree as a hierarchy of [`NodeView`]
//! records suitable for dumping. The serialized form is stable:
//!
//! ```json
//! {
//!   "type": "Internal",
//!   "level": 0,
//!   "mbr": { "minX": 0.0, "minY": 0.0, "maxX": 9.0, "maxY": 9.0 },
//!   "elements": [
//!     { "index": 1, "shapeType": "Rect", "mbr": { ... }, "child": { ... } }
//!   ]
//! }
//! ```
//!
//! Leaf elements carry `data` (the record); internal elements carry `child`
//! (the subtree); never both. `mbr` is null only on an empty root.

use serde::Serialize;

use crate::bounding_box::BoundingBox;
use crate::mem_rtree::{MemRTree, SpatialError, SpatialResult};
use crate::record::Record;

/// Kind of a node in the introspection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Leaf,
    Internal,
}

/// One node of the introspection hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Depth of the node; 0 at the root.
    pub level: u32,
    /// Tight box covering the node's entries; `None` only on an empty root.
    pub mbr: Option<BoundingBox>,
    /// Per-entry descriptions, in storage order.
    pub elements: Vec<ElementView>,
}

/// One entry of a node in the introspection hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct ElementView {
    /// 1-based position of the entry within its node.
    pub index: usize,
    /// Kind tag of the entry's shape; internal entries report `"Rect"`.
    #[serde(rename = "shapeType")]
    pub shape_type: &'static str,
    /// The entry's bounding box.
    pub mbr: BoundingBox,
    /// The stored record; present exactly on leaf entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Record>,
    /// The child subtree; present exactly on internal entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<NodeView>>,
}

impl MemRTree {
    /// Renders the introspection view as pretty-printed JSON.
    pub fn to_json(&self) -> SpatialResult<String> {
        serde_json::to_string_pretty(&self.inspect())
            .map_err(|e| SpatialError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use serde_json::Value;

    #[test]
    fn test_empty_tree_view() {
        let tree = MemRTree::new();
        let view = tree.inspect();
        assert_eq!(view.kind, NodeKind::Leaf);
        assert_eq!(view.level, 0);
        assert_eq!(view.mbr, None);
        assert!(view.elements.is_empty());

        let json: Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "Leaf");
        assert_eq!(json["level"], 0);
        assert!(json["mbr"].is_null());
        assert_eq!(json["elements"], Value::Array(vec![]));
    }

    #[test]
    fn test_leaf_view_elements() {
        let mut tree = MemRTree::new();
        tree.insert(Record::new(1, "a"), Shape::rect(0.0, 0.0, 2.0, 2.0));
        tree.insert(Record::new(2, "b"), Shape::disk(5.0, 5.0, 1.0));

        let view = tree.inspect();
        assert_eq!(view.kind, NodeKind::Leaf);
        assert_eq!(view.mbr, Some(BoundingBox::new(0.0, 0.0, 6.0, 6.0)));
        assert_eq!(view.elements.len(), 2);

        let first = &view.elements[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.shape_type, "Rect");
        assert_eq!(first.data.as_ref().map(|r| r.id), Some(1));
        assert!(first.child.is_none());

        let second = &view.elements[1];
        assert_eq!(second.index, 2);
        assert_eq!(second.shape_type, "Disk");
        assert_eq!(second.mbr, BoundingBox::new(4.0, 4.0, 6.0, 6.0));
    }

    #[test]
    fn test_split_tree_view_levels() {
        let mut tree = MemRTree::with_max_entries(4).unwrap();
        for i in 0..6u64 {
            let x = i as f64;
            tree.insert(Record::new(i, "r"), Shape::rect(x, x, x + 1.0, x + 1.0));
        }

        let view = tree.inspect();
        assert_eq!(view.kind, NodeKind::Internal);
        assert_eq!(view.level, 0);
        assert_eq!(view.elements.len(), 2);
        for element in &view.elements {
            assert_eq!(element.shape_type, "Rect");
            assert!(element.data.is_none());
            let child = element.child.as_ref().expect("internal element has a child");
            assert_eq!(child.kind, NodeKind::Leaf);
            assert_eq!(child.level, 1);
            // The cached element box matches the child's own coverage.
            assert_eq!(Some(element.mbr), child.mbr);
        }
    }

    #[test]
    fn test_json_schema_fields() {
        let mut tree = MemRTree::with_max_entries(4).unwrap();
        for i in 0..6u64 {
            let x = i as f64;
            tree.insert(Record::new(i, format!("r{}", i)), Shape::rect(x, x, x + 1.0, x + 1.0));
        }

        let json: Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "Internal");
        assert_eq!(json["level"], 0);
        assert!(json["mbr"]["minX"].is_number());

        let elements = json["elements"].as_array().unwrap();
        assert_eq!(elements[0]["index"], 1);
        assert_eq!(elements[0]["shapeType"], "Rect");
        // Internal elements carry "child" and no "data".
        assert!(elements[0].get("data").is_none());
        let child = &elements[0]["child"];
        assert_eq!(child["type"], "Leaf");
        assert_eq!(child["level"], 1);

        // Leaf elements carry "data" and no "child".
        let leaf_elements = child["elements"].as_array().unwrap();
        assert!(leaf_elements[0].get("child").is_none());
        assert_eq!(leaf_elements[0]["data"]["id"], 0);
        assert_eq!(leaf_elements[0]["data"]["name"], "r0");
        assert_eq!(leaf_elements[0]["mbr"]["maxY"], 1.0);
    }

    #[test]
    fn test_view_matches_record_count() {
        let mut tree = MemRTree::with_max_entries(4).unwrap();
        for i in 0..25u64 {
            let x = (i % 5) as f64 * 2.0;
            let y = (i / 5) as f64 * 2.0;
            tree.insert(Record::new(i, "r"), Shape::rect(x, y, x + 1.0, y + 1.0));
        }

        fn count_records(view: &NodeView) -> usize {
            view.elements
                .iter()
                .map(|e| match (&e.data, &e.child) {
                    (Some(_), None) => 1,
                    (None, Some(child)) => count_records(child),
                    _ => panic!("element must carry exactly one of data/child"),
                })
                .sum()
        }
        assert_eq!(count_records(&tree.inspect()), 25);
    }
}
