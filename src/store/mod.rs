//! Utilities for treating the backing graph store for trees generically.
//!
//! This module is home for the following items:
//! - [`GraphStore`], the main trait for the backing stores for path trees
//! - [`DirectedGraph`], the adjacency-map store the crate provides out of the box
//! - [`DefaultStore`], a type definition for the default backing store used by trees unless a different one is specified
//!
//! [`GraphStore`]: trait.GraphStore.html " "
//! [`DirectedGraph`]: struct.DirectedGraph.html " "
//! [`DefaultStore`]: type.DefaultStore.html " "

mod directed;
pub use directed::*;

use alloc::{string::String, vec::Vec};

/// Trait for directed graphs which can be the backing store for path trees.
///
/// Stores know nothing about paths: to a store, node ids are opaque strings and node content is an opaque payload type. The tree layered on top is what makes the ids canonical paths and keeps the edge set shaped like a tree, which is also why the trait models a strictly more general structure, a node-labelled directed graph.
///
/// # Contract
/// There's a number of invariants which have to be followed by the store:
/// - `new` ***must*** return an empty store, i.e. one which has `node_count() == 0` and `is_empty() == true`;
/// - `add_node` must insert the node if the id is new, and replace the content while altering nothing else if it is not;
/// - `remove_node` must also remove every edge which starts or ends at the removed node;
/// - `add_edge` on an edge which already exists must do nothing, keeping the edge set free of duplicates;
/// - If content is added at an id, it must be retrievable in the exact same state as it was inserted until it is removed or replaced by another `add_node` call;
/// - The enumeration methods must agree with each other: `successors` and `predecessors` must mirror each other edge for edge, while `sinks` and `sources` must select exactly the nodes for which `successors` and `predecessors` respectively return nothing.
///
/// Path trees rely on this contract for logical correctness, never for memory safety, which is why the trait is safe to implement.
pub trait GraphStore: Sized {
    /// The content attached to every node of the store.
    type Node;

    /// Creates a new empty store.
    fn new() -> Self;
    /// Adds a node identified by `id` to the store, or replaces its content if the store already has one.
    fn add_node(&mut self, id: &str, content: Self::Node);
    /// Removes the node identified by `id`, along with every edge which starts or ends at it.
    ///
    /// # Panics
    /// Required to panic if the specified node does not exist.
    fn remove_node(&mut self, id: &str);
    /// Adds a directed edge going from `from` to `to`. Does nothing if the edge already exists, since stores are not multigraphs.
    ///
    /// # Panics
    /// Required to panic if either of the specified endpoints does not exist.
    fn add_edge(&mut self, from: &str, to: &str);
    /// Removes the directed edge going from `from` to `to`.
    ///
    /// # Panics
    /// Required to panic if the specified edge does not exist.
    fn remove_edge(&mut self, from: &str, to: &str);
    /// Returns `true` if a node identified by `id` is present in the store, `false` otherwise.
    fn has_node(&self, id: &str) -> bool;
    /// Returns `true` if an edge going from `from` to `to` is present in the store, `false` otherwise.
    fn has_edge(&self, from: &str, to: &str) -> bool;
    /// Returns a reference to the content of the node identified by `id`, or `None` if the id is not present in the store.
    fn node(&self, id: &str) -> Option<&Self::Node>;
    /// Returns the ids of the nodes which the node identified by `id` has edges going to, or an empty collection if the id is not present in the store.
    ///
    /// The enumeration order is store-defined. [`DirectedGraph`] enumerates successors in edge insertion order.
    ///
    /// [`DirectedGraph`]: struct.DirectedGraph.html " "
    fn successors(&self, id: &str) -> Vec<String>;
    /// Returns the ids of the nodes which have edges going to the node identified by `id`, or an empty collection if the id is not present in the store.
    ///
    /// The enumeration order is store-defined, same as with [`successors`].
    ///
    /// [`successors`]: trait.GraphStore.html#tymethod.successors " "
    fn predecessors(&self, id: &str) -> Vec<String>;
    /// Returns the ids of the nodes which have no outgoing edges, in a store-defined order.
    fn sinks(&self) -> Vec<String>;
    /// Returns the ids of the nodes which have no incoming edges, in a store-defined order.
    fn sources(&self) -> Vec<String>;
    /// Consumes the store and returns one which retains only the nodes whose ids satisfy the predicate, together with the edges both of whose endpoints were retained.
    fn filter_nodes<P: FnMut(&str) -> bool>(self, predicate: P) -> Self;
    /// Returns the number of nodes in the store.
    fn node_count(&self) -> usize;
    /// Returns the number of edges in the store.
    fn edge_count(&self) -> usize;

    /// Returns `true` if the store contains no nodes, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
    /// Returns `true` if the edges of the store are directed. Trees require directedness to tell parents from children and refuse stores which answer `false` here.
    #[inline(always)]
    fn is_directed(&self) -> bool {
        true
    }
    /// Returns `true` if the store nests nodes inside other nodes. Trees track their hierarchy through edges alone and refuse stores which answer `true` here.
    #[inline(always)]
    fn is_compound(&self) -> bool {
        false
    }
    /// Returns `true` if the store allows several parallel edges between the same pair of nodes. Trees rely on edge uniqueness and refuse stores which answer `true` here.
    #[inline(always)]
    fn is_multigraph(&self) -> bool {
        false
    }
}

/// The default store type used by the tree types when a store type is not provided.
///
/// This is [`DirectedGraph`], the only store the crate provides out of the box. The type definition exists so that signatures and downstream code do not have to commit to a concrete store type, should the default ever change.
///
/// [`DirectedGraph`]: struct.DirectedGraph.html " "
pub type DefaultStore<N> = DirectedGraph<N>;
