//! Core types and data structures for the in-memory R-Tree.
//!
//! This module defines the fundamental types used throughout the tree:
//! - Error and result types
//! - Node and entry types backing the arena
//! - Statistics and integrity-report structures

use thiserror::Error;

use crate::bounding_box::BoundingBox;
use crate::geometry::Shape;
use crate::record::Record;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in spatial indexing operations.
///
/// The index operations themselves are total; errors arise only at
/// construction time and when rendering the introspection dump.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;

/// Handle of a node slot in the tree arena.
pub(crate) type NodeId = u32;

// ============================================================================
// Node Types
// ============================================================================

/// A unit of storage in a node.
///
/// Leaf nodes hold `Leaf` entries (a shape plus its record); internal nodes
/// hold `Child` entries (the cached coverage box of a child node plus its
/// handle). A leaf entry's bounding box is always derived from the stored
/// shape, so it can never go stale.
#[derive(Debug, Clone)]
pub(crate) enum Entry {
    Leaf { shape: Shape, record: Record },
    Child { mbr: BoundingBox, child: NodeId },
}

impl Entry {
    /// The bounding box this entry reports to the tree.
    pub(crate) fn mbr(&self) -> BoundingBox {
        match self {
            Entry::Leaf { shape, .. } => shape.mbr(),
            Entry::Child { mbr, .. } => *mbr,
        }
    }

    /// The child handle, for internal entries.
    pub(crate) fn child(&self) -> Option<NodeId> {
        match self {
            Entry::Child { child, .. } => Some(*child),
            Entry::Leaf { .. } => None,
        }
    }
}

/// A node in the R-Tree arena.
///
/// `parent` is a non-owning back-reference used only while walking a
/// mutation path back toward the root; read-only traversals never follow it.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) is_leaf: bool,
    pub(crate) entries: Vec<Entry>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(is_leaf: bool, parent: Option<NodeId>) -> Self {
        Self {
            is_leaf,
            entries: Vec::new(),
            parent,
        }
    }

    /// The tight bounding box enclosing all entries, or `None` when empty.
    pub(crate) fn coverage(&self) -> Option<BoundingBox> {
        let mut entries = self.entries.iter();
        let first = entries.next()?.mbr();
        Some(entries.fold(first, |acc, e| acc.union(&e.mbr())))
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Statistics about the current tree shape.
#[derive(Debug, Clone, Default)]
pub struct RTreeStats {
    /// Number of records stored.
    pub total_entries: u64,
    /// Number of live nodes in the arena.
    pub node_count: u64,
    /// Levels below the root; 0 when the root is a leaf.
    pub tree_height: u32,
}

// ============================================================================
// Integrity Checking
// ============================================================================

/// Result of an integrity check over the structural invariants of the tree:
/// cached coverage boxes, fan-out bounds, uniform leaf depth, parent
/// back-references, and reachability of every live arena slot.
#[derive(Debug, Clone)]
pub struct IntegrityReport {
    /// Total nodes checked
    pub nodes_checked: u64,
    /// Summary of findings
    pub is_valid: bool,
    /// Detailed error messages
    pub errors: Vec<String>,
}

impl IntegrityReport {
    pub fn new() -> Self {
        Self {
            nodes_checked: 0,
            is_valid: true,
            errors: Vec::new(),
        }
    }
}

impl Default for IntegrityReport {
    fn default() -> Self {
        Self::new()
    }
}
