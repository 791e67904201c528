use alloc::{collections::BTreeMap, string::String, vec::Vec};
use smallvec::SmallVec;
use super::GraphStore;

/// The number of edges a node can have in either direction before its adjacency list spills onto the heap.
const INLINE_EDGES: usize = 4;

type EdgeList = SmallVec<[String; INLINE_EDGES]>;

/// A directed graph of string-identified, content-carrying nodes, stored as a pair of adjacency maps.
///
/// This is the store the tree types use unless a different one is specified. It is not a multigraph and has no notion of compound nodes, which lets it pass tree construction validation unconditionally. Successors and predecessors enumerate in edge insertion order, while [`sinks`] and [`sources`] enumerate in lexicographic id order.
///
/// # Example
/// ```rust
/// use kindling::store::{DirectedGraph, GraphStore};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_node("dawn", 1_u8);
/// graph.add_node("dusk", 2_u8);
/// graph.add_edge("dawn", "dusk");
/// assert!(graph.has_edge("dawn", "dusk"));
/// assert!(!graph.has_edge("dusk", "dawn"));
/// assert_eq!(graph.successors("dawn"), ["dusk"]);
/// ```
///
/// [`sinks`]: trait.GraphStore.html#tymethod.sinks " "
/// [`sources`]: trait.GraphStore.html#tymethod.sources " "
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DirectedGraph<N> {
    nodes: BTreeMap<String, N>,
    out_edges: BTreeMap<String, EdgeList>,
    in_edges: BTreeMap<String, EdgeList>,
}
impl<N> DirectedGraph<N> {
    /// Creates an empty graph.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            out_edges: BTreeMap::new(),
            in_edges: BTreeMap::new(),
        }
    }
    fn detach(edges: &mut BTreeMap<String, EdgeList>, at: &str, peer: &str) {
        if let Some(list) = edges.get_mut(at) {
            list.retain(|id| id.as_str() != peer);
        }
    }
}
impl<N> Default for DirectedGraph<N> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GraphStore for DirectedGraph<N> {
    type Node = N;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline]
    fn add_node(&mut self, id: &str, content: N) {
        self.nodes.insert(String::from(id), content);
    }
    fn remove_node(&mut self, id: &str) {
        assert!(
            self.nodes.remove(id).is_some(),
            "no node exists with the id `{}`",
            id,
        );
        if let Some(outgoing) = self.out_edges.remove(id) {
            for to in &outgoing {
                Self::detach(&mut self.in_edges, to, id);
            }
        }
        if let Some(incoming) = self.in_edges.remove(id) {
            for from in &incoming {
                Self::detach(&mut self.out_edges, from, id);
            }
        }
    }
    fn add_edge(&mut self, from: &str, to: &str) {
        assert!(
            self.nodes.contains_key(from),
            "no node exists with the id `{}`",
            from,
        );
        assert!(
            self.nodes.contains_key(to),
            "no node exists with the id `{}`",
            to,
        );
        let outgoing = self.out_edges.entry(String::from(from)).or_default();
        if outgoing.iter().any(|id| id.as_str() == to) {
            return;
        }
        outgoing.push(String::from(to));
        self.in_edges
            .entry(String::from(to))
            .or_default()
            .push(String::from(from));
    }
    fn remove_edge(&mut self, from: &str, to: &str) {
        let removed = self.out_edges.get_mut(from).map_or(false, |outgoing| {
            let before = outgoing.len();
            outgoing.retain(|id| id.as_str() != to);
            outgoing.len() != before
        });
        assert!(removed, "no edge exists going from `{}` to `{}`", from, to);
        Self::detach(&mut self.in_edges, to, from);
    }
    #[inline]
    fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }
    #[inline]
    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.out_edges
            .get(from)
            .map_or(false, |outgoing| outgoing.iter().any(|id| id.as_str() == to))
    }
    #[inline]
    fn node(&self, id: &str) -> Option<&N> {
        self.nodes.get(id)
    }
    #[inline]
    fn successors(&self, id: &str) -> Vec<String> {
        self.out_edges
            .get(id)
            .map_or_else(Vec::new, |outgoing| outgoing.to_vec())
    }
    #[inline]
    fn predecessors(&self, id: &str) -> Vec<String> {
        self.in_edges
            .get(id)
            .map_or_else(Vec::new, |incoming| incoming.to_vec())
    }
    fn sinks(&self) -> Vec<String> {
        self.nodes
            .keys()
            .filter(|id| {
                self.out_edges
                    .get(id.as_str())
                    .map_or(true, |outgoing| outgoing.is_empty())
            })
            .cloned()
            .collect()
    }
    fn sources(&self) -> Vec<String> {
        self.nodes
            .keys()
            .filter(|id| {
                self.in_edges
                    .get(id.as_str())
                    .map_or(true, |incoming| incoming.is_empty())
            })
            .cloned()
            .collect()
    }
    fn filter_nodes<P: FnMut(&str) -> bool>(self, mut predicate: P) -> Self {
        let Self { nodes, out_edges, .. } = self;
        let mut filtered = Self::new();
        for (id, content) in nodes {
            if predicate(&id) {
                filtered.nodes.insert(id, content);
            }
        }
        for (from, outgoing) in out_edges {
            if !filtered.nodes.contains_key(&from) {
                continue;
            }
            for to in outgoing {
                if filtered.nodes.contains_key(&to) {
                    filtered.add_edge(&from, &to);
                }
            }
        }
        filtered
    }
    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    fn edge_count(&self) -> usize {
        self.out_edges.values().map(|outgoing| outgoing.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectedGraph<u32> {
        let mut graph = DirectedGraph::new();
        graph.add_node("a", 0);
        graph.add_node("b", 1);
        graph.add_node("c", 2);
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");
        graph
    }

    #[test]
    fn nodes_are_upserted() {
        let mut graph = sample();
        assert_eq!(graph.node("b"), Some(&1));
        graph.add_node("b", 10);
        assert_eq!(graph.node("b"), Some(&10));
        assert_eq!(graph.node_count(), 3);
        assert!(graph.has_edge("a", "b"));
    }
    #[test]
    fn parallel_edges_collapse() {
        let mut graph = sample();
        graph.add_edge("a", "b");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors("a"), ["b", "c"]);
    }
    #[test]
    fn removing_a_node_detaches_it() {
        let mut graph = sample();
        graph.remove_node("b");
        assert!(!graph.has_node("b"));
        assert!(!graph.has_edge("a", "b"));
        assert_eq!(graph.successors("a"), ["c"]);
        assert_eq!(graph.predecessors("c"), ["a"]);
        assert_eq!(graph.edge_count(), 1);
    }
    #[test]
    fn removing_an_edge_keeps_the_nodes() {
        let mut graph = sample();
        graph.remove_edge("a", "b");
        assert!(graph.has_node("a") && graph.has_node("b"));
        assert!(!graph.has_edge("a", "b"));
        assert_eq!(graph.predecessors("b"), Vec::<String>::new());
        assert_eq!(graph.edge_count(), 1);
    }
    #[test]
    fn successors_keep_insertion_order() {
        let mut graph = DirectedGraph::new();
        graph.add_node("n", 0_u32);
        for id in &["z", "m", "a"] {
            graph.add_node(id, 0);
            graph.add_edge("n", id);
        }
        assert_eq!(graph.successors("n"), ["z", "m", "a"]);
    }
    #[test]
    fn sinks_and_sources_sort_by_id() {
        let graph = sample();
        assert_eq!(graph.sinks(), ["b", "c"]);
        assert_eq!(graph.sources(), ["a"]);
        assert!(DirectedGraph::<u32>::new().sinks().is_empty());
    }
    #[test]
    fn unknown_ids_enumerate_empty() {
        let graph = sample();
        assert_eq!(graph.successors("x"), Vec::<String>::new());
        assert_eq!(graph.predecessors("x"), Vec::<String>::new());
        assert_eq!(graph.node("x"), None);
    }
    #[test]
    fn filtering_keeps_only_matching_endpoints() {
        let graph = sample().filter_nodes(|id| id != "b");
        assert!(graph.has_node("a"));
        assert!(!graph.has_node("b"));
        assert_eq!(graph.successors("a"), ["c"]);
        assert_eq!(graph.edge_count(), 1);
    }
    #[test]
    #[should_panic]
    fn removing_a_missing_node_panics() {
        let mut graph = sample();
        graph.remove_node("x");
    }
    #[test]
    #[should_panic]
    fn linking_a_missing_node_panics() {
        let mut graph = sample();
        graph.add_edge("a", "x");
    }
    #[test]
    #[should_panic]
    fn removing_a_missing_edge_panics() {
        let mut graph = sample();
        graph.remove_edge("b", "c");
    }
}
