//! # spindex — 2D R-Tree Spatial Index
//!
//! This crate provides an in-memory spatial index that organizes 2D shapes
//! with record payloads, so that region queries run against a shallow tree
//! traversal instead of a full scan.
//!
//! ## Features
//!
//! - **Height-Balanced R-Tree**: all leaves at one depth, fan-out bounded
//!   per node, splits and condenses keep the balance under every mutation
//! - **Polymorphic Shapes**: rectangles, disks, and polygons behind one
//!   capability set (`mbr`, `intersects`, `contains`, `area`)
//! - **Conservative Pruning**: region search prunes by bounding boxes and
//!   never misses a stored shape whose box overlaps the query
//! - **Id Operations**: lookup, delete, and update by record id
//! - **Introspection**: a pure tree walk rendering the full hierarchy as
//!   serializable view records, plus a JSON dump
//! - **Integrity Checking**: an on-demand verification of the structural
//!   invariants, useful in tests and debugging
//!
//! ## Quick Start
//!
//! ```rust
//! use spindex::{MemRTree, Record, Shape};
//!
//! let mut tree = MemRTree::new();
//! tree.insert(Record::new(1, "depot"), Shape::rect(0.0, 0.0, 1.0, 1.0));
//! tree.insert(Record::new(2, "antenna"), Shape::disk(5.0, 5.0, 2.0));
//!
//! let hits = tree.search(&Shape::rect(0.0, 0.0, 2.0, 2.0));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//!
//! assert!(tree.update_by_id(1, Shape::rect(10.0, 10.0, 11.0, 11.0)));
//! assert!(tree.delete_by_id(2));
//! assert_eq!(tree.len(), 1);
//! ```

pub mod bounding_box;
pub mod geometry;
pub mod inspect;
pub mod mem_rtree;
pub mod record;

pub use bounding_box::BoundingBox;
pub use geometry::{Coordinate, Shape};
pub use inspect::{ElementView, NodeKind, NodeView};
pub use mem_rtree::{
    IntegrityReport, MemRTree, RTreeStats, SpatialError, SpatialResult, DEFAULT_MAX_ENTRIES,
    MIN_MAX_ENTRIES,
};
pub use record::Record;
