use super::*;

/// Compact shorthand for the tree most tests run against: `/a` and `/b` under
/// the root, with `/a/c` carrying a value.
fn sample() -> PathTree<u32> {
    let mut tree = PathTree::new();
    tree.set_child("a").unwrap().set_child("b").unwrap();
    tree.path("a").unwrap().set_child_value("c", Some(33)).unwrap();
    tree.root();
    tree
}

/// A store which delegates to the default one but misreports its capabilities,
/// for exercising construction-time validation.
#[derive(Debug)]
struct FlaggedStore {
    inner: DefaultStore<Node<u32>>,
    directed: bool,
    compound: bool,
    multigraph: bool,
}
impl FlaggedStore {
    fn misreporting(directed: bool, compound: bool, multigraph: bool) -> Self {
        Self {
            inner: DefaultStore::new(),
            directed,
            compound,
            multigraph,
        }
    }
}
impl GraphStore for FlaggedStore {
    type Node = Node<u32>;

    fn new() -> Self {
        Self::misreporting(true, false, false)
    }
    fn add_node(&mut self, id: &str, content: Node<u32>) {
        self.inner.add_node(id, content);
    }
    fn remove_node(&mut self, id: &str) {
        self.inner.remove_node(id);
    }
    fn add_edge(&mut self, from: &str, to: &str) {
        self.inner.add_edge(from, to);
    }
    fn remove_edge(&mut self, from: &str, to: &str) {
        self.inner.remove_edge(from, to);
    }
    fn has_node(&self, id: &str) -> bool {
        self.inner.has_node(id)
    }
    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.inner.has_edge(from, to)
    }
    fn node(&self, id: &str) -> Option<&Node<u32>> {
        self.inner.node(id)
    }
    fn successors(&self, id: &str) -> Vec<String> {
        self.inner.successors(id)
    }
    fn predecessors(&self, id: &str) -> Vec<String> {
        self.inner.predecessors(id)
    }
    fn sinks(&self) -> Vec<String> {
        self.inner.sinks()
    }
    fn sources(&self) -> Vec<String> {
        self.inner.sources()
    }
    fn filter_nodes<P: FnMut(&str) -> bool>(self, predicate: P) -> Self {
        let Self {
            inner,
            directed,
            compound,
            multigraph,
        } = self;
        Self {
            inner: inner.filter_nodes(predicate),
            directed,
            compound,
            multigraph,
        }
    }
    fn node_count(&self) -> usize {
        self.inner.node_count()
    }
    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
    fn is_directed(&self) -> bool {
        self.directed
    }
    fn is_compound(&self) -> bool {
        self.compound
    }
    fn is_multigraph(&self) -> bool {
        self.multigraph
    }
}

#[test]
fn round_trip() {
    let mut tree = sample();
    tree.path("/a/c").unwrap();
    assert_eq!(tree.value(), Some(&33));
    assert_eq!(tree.name(), "c");
    assert_eq!(tree.context(), "/a/c");

    tree.root().path("a/c").unwrap();
    assert_eq!(tree.context(), "/a/c");
}

#[test]
fn child_creation_is_idempotent() {
    let mut tree = sample();
    tree.path("a").unwrap();
    tree.set_child("c").unwrap();
    tree.set_child("c").unwrap();
    assert_eq!(tree.children(), ["c"]);
    assert_eq!(tree.store().edge_count(), 3);
    // The existing value is untouched by bare re-assertion.
    assert_eq!(tree.path("c").unwrap().value(), Some(&33));
}

#[test]
fn value_writes_overwrite_and_reset() {
    let mut tree = sample();
    tree.path("a").unwrap();
    tree.set_child_value("c", Some(44)).unwrap();
    assert_eq!(tree.store().node("/a/c").unwrap().value(), Some(&44));
    tree.set_child_value("c", None).unwrap();
    assert_eq!(tree.path("c").unwrap().value(), None);
}

#[test]
fn mutators_never_move_the_cursor() {
    let mut tree = sample();
    tree.path("a").unwrap();
    tree.set_child("x").unwrap();
    assert_eq!(tree.context(), "/a");
    tree.set_child_value("y", Some(1)).unwrap();
    assert_eq!(tree.context(), "/a");
    tree.remove_child("y").unwrap();
    assert_eq!(tree.context(), "/a");
    tree.remove_subtree("x").unwrap();
    assert_eq!(tree.context(), "/a");
}

#[test]
fn leaf_only_removal_policy() {
    let mut tree = sample();
    assert_eq!(tree.remove_child("a").unwrap_err(), RemoveChildError::NotALeaf);
    assert_eq!(
        tree.remove_child("missing").unwrap_err(),
        RemoveChildError::NoSuchChild,
    );
    tree.remove_child("b").unwrap();
    assert!(!tree.has("b"));

    tree.remove_subtree("a").unwrap();
    assert!(!tree.has("/a") && !tree.has("/a/c"));
    assert_eq!(
        tree.remove_subtree("a").unwrap_err(),
        RemoveSubtreeError::NoSuchChild,
    );
    assert!(tree.is_leaf() && tree.is_root());
    assert_eq!(tree.store().node_count(), 1);
}

#[test]
fn subtree_removal_is_by_exact_prefix() {
    let mut tree = PathTree::<u32>::new();
    tree.set_child("a").unwrap().set_child("ab").unwrap();
    tree.path("a").unwrap().set_child("inner").unwrap();
    tree.path("/ab").unwrap().set_child("kept").unwrap();

    tree.root().remove_subtree("a").unwrap();
    assert!(!tree.has("/a") && !tree.has("/a/inner"));
    assert!(tree.has("/ab") && tree.has("/ab/kept"));
}

#[test]
fn failed_navigation_leaves_the_cursor_alone() {
    let mut tree = sample();
    tree.path("a").unwrap();
    let error = tree.path("c/d/e").unwrap_err();
    assert_eq!(error.path, "/a/c/d/e");
    assert_eq!(tree.context(), "/a");

    tree.path_silent("c/d/e");
    assert_eq!(tree.context(), "/a");
    tree.path_silent("c");
    assert_eq!(tree.context(), "/a/c");
}

#[test]
fn invalid_names_are_rejected_up_front() {
    let mut tree = PathTree::<u32>::new();
    assert_eq!(tree.set_child("").unwrap_err(), InvalidNameError::Empty);
    assert_eq!(
        tree.set_child("a/b").unwrap_err(),
        InvalidNameError::ContainsSeparator,
    );
    assert_eq!(tree.set_child(".").unwrap_err(), InvalidNameError::CurrentToken);
    assert_eq!(tree.set_child("..").unwrap_err(), InvalidNameError::ParentToken);
    assert_eq!(
        tree.remove_child("a/b").unwrap_err(),
        RemoveChildError::InvalidName(InvalidNameError::ContainsSeparator),
    );
    assert_eq!(
        tree.remove_subtree("..").unwrap_err(),
        RemoveSubtreeError::InvalidName(InvalidNameError::ParentToken),
    );
    // Nothing was created along the way.
    assert!(tree.is_leaf());
    assert_eq!(tree.store().node_count(), 1);
}

#[test]
fn dotted_names_are_allowed() {
    let mut tree = PathTree::<u32>::new();
    tree.set_child("..rc").unwrap().set_child("a.out").unwrap();
    assert!(tree.has("..rc") && tree.has("a.out"));
    assert_eq!(tree.path("..rc").unwrap().context(), "/..rc");
}

#[test]
fn parent_and_root_navigation() {
    let mut tree = sample();
    tree.path("/a/c").unwrap();
    tree.parent();
    assert_eq!(tree.context(), "/a");
    tree.parent().parent();
    assert!(tree.is_root());
    // Walking above the root clamps rather than failing.
    tree.path("..").unwrap();
    assert!(tree.is_root());
    tree.path("/a/c").unwrap().root();
    assert!(tree.is_root());
}

#[test]
fn misreporting_stores_are_rejected() {
    let undirected = FlaggedStore::misreporting(false, false, false);
    assert_eq!(
        PathTree::with_store(undirected).unwrap_err(),
        InvalidStoreError::Undirected,
    );
    let compound = FlaggedStore::misreporting(true, true, false);
    assert_eq!(
        PathTree::with_store(compound).unwrap_err(),
        InvalidStoreError::Compound,
    );
    let multigraph = FlaggedStore::misreporting(true, false, true);
    assert_eq!(
        PathTree::with_store(multigraph).unwrap_err(),
        InvalidStoreError::Multigraph,
    );
    let plain = FlaggedStore::misreporting(true, false, false);
    assert!(PathTree::with_store(plain).is_ok());
}

#[test]
fn hierarchies_survive_store_extraction() {
    let tree = sample();
    let store = tree.into_store();
    let node_count = store.node_count();

    let mut resumed = PathTree::with_store(store).unwrap();
    assert!(resumed.is_root());
    assert_eq!(resumed.store().node_count(), node_count);
    assert_eq!(resumed.path("/a/c").unwrap().value(), Some(&33));
    assert_eq!(resumed.root().children(), ["a", "b"]);
}

#[test]
fn leaves_and_descendants() {
    let mut tree = sample();
    assert_eq!(tree.leaves(), ["/a/c", "/b"]);

    let all = tree.descendants().collect::<Vec<_>>();
    assert_eq!(all, ["/", "/a", "/a/c", "/b"]);

    tree.path("a").unwrap();
    let below = tree.descendants().collect::<Vec<_>>();
    assert_eq!(below, ["/a", "/a/c"]);
}

#[test]
fn fresh_trees_are_their_own_leaf() {
    let tree = PathTree::<u32>::new();
    assert_eq!(tree.leaves(), ["/"]);
    assert_eq!(tree.children(), Vec::<String>::new());
    assert_eq!(tree.descendants().collect::<Vec<_>>(), ["/"]);
}

#[test]
fn children_are_local_names_not_paths() {
    let mut tree = sample();
    tree.path("a").unwrap();
    assert_eq!(tree.children(), ["c"]);
    assert_eq!(tree.store().successors("/a"), ["/a/c"]);
}

#[test]
fn nodes_know_their_local_name() {
    let mut tree = sample();
    tree.path("/a/c").unwrap();
    assert_eq!(tree.name(), "c");
    assert_eq!(tree.store().node("/a/c").unwrap().local_name(), "c");
    assert_eq!(tree.root().name(), "/");
}

#[test]
fn payloads_are_opaque() {
    struct Blob(Vec<u8>);
    let mut tree = PathTree::new();
    tree.set_child_value("raw", Some(Blob(vec![1, 2, 3]))).unwrap();
    tree.path("raw").unwrap();
    assert_eq!(
        tree.value().map(|blob| blob.0.as_slice()),
        Some(&[1_u8, 2, 3][..]),
    );
}
