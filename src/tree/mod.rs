//! Path-addressed trees, where every node is identified by its canonical path and worked with through a stateful cursor.
//!
//! # Overview
//! A path tree stores named, value-carrying nodes and addresses them the way a filesystem does: the node `b`, child of `a`, child of the root, answers to the canonical path `/a/b`. A tree handle keeps a *cursor*, the canonical path of its current node, and every operation is expressed relative to it: accessors describe the node at the cursor, mutators create and remove children under it, and navigation re-points it using [path expressions] such as `../sibling` or `/a/b`.
//!
//! The hierarchy itself lives in a [graph store], a directed graph of string-identified nodes which the tree owns and keeps tree-shaped. The graph view is deliberately kept reachable: [`store`] exposes it read-only for inspection, and [`into_store`]/[`with_store`] move a finished hierarchy between tree handles.
//!
//! # Example
//! ```rust
//! use kindling::PathTree;
//!
//! let mut tree = PathTree::new();
//! // Build /colors/warm and /colors/cold, with values at the leaves.
//! tree.set_child("colors").unwrap();
//! tree.path("colors").unwrap()
//!     .set_child_value("warm", Some(0xFF_AA_00_u32)).unwrap()
//!     .set_child_value("cold", Some(0x00_55_FF_u32)).unwrap();
//!
//! assert_eq!(tree.context(), "/colors");
//! assert_eq!(tree.children(), ["warm", "cold"]);
//!
//! tree.path("warm").unwrap();
//! assert_eq!(tree.value(), Some(&0xFF_AA_00));
//! assert!(tree.is_leaf());
//!
//! // Navigation is expressed relative to the cursor.
//! tree.path("../cold").unwrap();
//! assert_eq!(tree.name(), "cold");
//! ```
//!
//! [path expressions]: ../path/index.html " "
//! [graph store]: ../store/index.html " "
//! [`store`]: struct.PathTree.html#method.store " "
//! [`into_store`]: struct.PathTree.html#method.into_store " "
//! [`with_store`]: struct.PathTree.html#method.with_store " "

mod iter;
mod node;
#[cfg(test)]
mod tests;

pub use iter::Descendants;
pub use node::Node;

use core::mem;
use alloc::{string::String, vec::Vec};
use crate::{
    path::{self, InvalidNameError, PARENT_TOKEN, ROOT_PATH},
    store::{DefaultStore, GraphStore},
    InvalidStoreError, PathNotFoundError, RemoveChildError, RemoveSubtreeError,
};

/// A path-addressed tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PathTree<T, S = DefaultStore<Node<T>>>
where
    S: GraphStore<Node = Node<T>>,
{
    store: S,
    context: String,
}

impl<T> PathTree<T> {
    /// Creates a tree over the default store, containing only the root node, with the cursor at the root.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// // The turbofish is required here, since nothing else in the snippet
    /// // would pin down the payload type.
    /// let tree = PathTree::<u128>::new();
    /// assert!(tree.is_root() && tree.is_leaf());
    /// assert_eq!(tree.context(), "/");
    /// assert_eq!(tree.name(), "/");
    /// assert_eq!(tree.value(), None);
    /// ```
    #[inline]
    pub fn new() -> Self {
        let mut store = DefaultStore::new();
        store.add_node(ROOT_PATH, Node::root());
        Self {
            store,
            context: String::from(ROOT_PATH),
        }
    }
}
impl<T> Default for PathTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> PathTree<T, S>
where
    S: GraphStore<Node = Node<T>>,
{
    /// Creates a tree over the provided store, with the cursor at the root.
    ///
    /// The store has to be able to uphold the tree invariant, meaning it has to be directed, cannot be compound and cannot be a multigraph; a store which misreports any of those three capabilities is rejected. An empty store gets a root node seeded into it, while a store which already holds tree content, usually obtained from [`into_store`], passes through untouched and is trusted to be tree-shaped.
    ///
    /// # Example
    /// ```rust
    /// use kindling::{GraphStore, PathTree, store::DirectedGraph};
    ///
    /// let tree = PathTree::<u64, _>::with_store(DirectedGraph::new()).unwrap();
    /// assert!(tree.is_root());
    /// assert_eq!(tree.store().node_count(), 1); // the seeded root
    /// ```
    ///
    /// [`into_store`]: #method.into_store " "
    pub fn with_store(mut store: S) -> Result<Self, InvalidStoreError> {
        if !store.is_directed() {
            return Err(InvalidStoreError::Undirected);
        }
        if store.is_compound() {
            return Err(InvalidStoreError::Compound);
        }
        if store.is_multigraph() {
            return Err(InvalidStoreError::Multigraph);
        }
        if !store.has_node(ROOT_PATH) {
            store.add_node(ROOT_PATH, Node::root());
        }
        Ok(Self {
            store,
            context: String::from(ROOT_PATH),
        })
    }

    /// Returns the canonical path of the node the cursor is at.
    ///
    /// The cursor always names a node which exists: every method which moves it checks that first, and no mutator can remove the cursor's own node.
    #[inline(always)]
    pub fn context(&self) -> &str {
        &self.context
    }
    /// Returns a reference to the payload value of the node at the cursor, or `None` if it has no value assigned.
    ///
    /// The root never carries a value, since values are only ever written through [`set_child_value`], which writes to children.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::new();
    /// tree.set_child_value("leaf", Some(22)).unwrap();
    /// assert_eq!(tree.value(), None);
    /// assert_eq!(tree.path("leaf").unwrap().value(), Some(&22));
    /// ```
    ///
    /// [`set_child_value`]: #method.set_child_value " "
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.store.node(&self.context).and_then(Node::value)
    }
    /// Returns the local name of the node at the cursor, which is the last segment of its canonical path. The root is named by the separator itself.
    #[inline]
    pub fn name(&self) -> &str {
        path::leaf_name(&self.context)
    }
    /// Returns the local names of the children of the node at the cursor, in the successor enumeration order of the store.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("usr").unwrap().set_child("etc").unwrap();
    /// assert_eq!(tree.children(), ["usr", "etc"]);
    /// ```
    pub fn children(&self) -> Vec<String> {
        self.store
            .successors(&self.context)
            .into_iter()
            .map(|child_path| String::from(path::leaf_name(&child_path)))
            .collect()
    }
    /// Returns `true` if the node at the cursor has no children, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.store.successors(&self.context).is_empty()
    }
    /// Returns `true` if the cursor is at the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.context == ROOT_PATH
    }
    /// Returns `true` if a node exists at the path the expression resolves to, `false` otherwise. The cursor does not move.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("a").unwrap();
    /// assert!(tree.has("a"));
    /// assert!(tree.has("/a"));
    /// assert!(!tree.has("a/b"));
    /// ```
    #[inline]
    pub fn has(&self, expr: &str) -> bool {
        self.store.has_node(&path::normalize(expr, &self.context))
    }
    /// Returns the canonical paths of every leaf node of the tree, no matter where the cursor is, in the sink enumeration order of the store.
    ///
    /// A freshly created tree reports its root here, since a childless root is a leaf too.
    #[inline]
    pub fn leaves(&self) -> Vec<String> {
        self.store.sinks()
    }
    /// Returns an iterator over the canonical paths of the node at the cursor and every node below it, in depth-first preorder.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("a").unwrap().set_child("b").unwrap();
    /// tree.path("a").unwrap().set_child("c").unwrap();
    ///
    /// tree.root();
    /// let paths = tree.descendants().collect::<Vec<_>>();
    /// assert_eq!(paths, ["/", "/a", "/a/c", "/b"]);
    /// ```
    #[inline]
    pub fn descendants(&self) -> Descendants<'_, T, S> {
        Descendants::new(self)
    }

    /// Ensures that a child with the specified name exists under the node at the cursor, creating a valueless one if it does not.
    ///
    /// A child which already exists keeps whatever value it has; only [`set_child_value`] writes values. The parent-to-child edge is asserted either way. The cursor does not move: creating a child is not entering it, and navigating into one is [`path`]'s job.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::new();
    /// tree.set_child_value("a", Some(7)).unwrap();
    ///
    /// // Re-asserting the child does not disturb the value it already carries.
    /// tree.set_child("a").unwrap();
    /// assert_eq!(tree.context(), "/");
    /// assert_eq!(tree.path("a").unwrap().value(), Some(&7));
    /// ```
    ///
    /// [`set_child_value`]: #method.set_child_value " "
    /// [`path`]: #method.path " "
    pub fn set_child(&mut self, name: &str) -> Result<&mut Self, InvalidNameError> {
        path::validate_name(name)?;
        let child_path = path::join(&self.context, name);
        if !self.store.has_node(&child_path) {
            self.store
                .add_node(&child_path, Node::new(String::from(name), None));
        }
        self.store.add_edge(&self.context, &child_path);
        Ok(self)
    }
    /// Creates a child with the specified name and payload value under the node at the cursor, or overwrites the content of the existing one.
    ///
    /// Passing `None` is an explicit reset to valuelessness, not a skip; [`set_child`] is the method which leaves existing values alone. The cursor does not move.
    ///
    /// # Example
    /// ```rust
    /// use kindling::{GraphStore, PathTree};
    ///
    /// let mut tree = PathTree::new();
    /// tree.set_child_value("a", Some(1)).unwrap();
    /// tree.set_child_value("a", Some(2)).unwrap();
    /// assert_eq!(tree.store().node("/a").unwrap().value(), Some(&2));
    ///
    /// tree.set_child_value("a", None).unwrap();
    /// assert_eq!(tree.path("a").unwrap().value(), None);
    /// ```
    ///
    /// [`set_child`]: #method.set_child " "
    pub fn set_child_value(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Result<&mut Self, InvalidNameError> {
        path::validate_name(name)?;
        let child_path = path::join(&self.context, name);
        self.store
            .add_node(&child_path, Node::new(String::from(name), value));
        self.store.add_edge(&self.context, &child_path);
        Ok(self)
    }
    /// Removes the child with the specified name from under the node at the cursor, requiring it to be a leaf.
    ///
    /// Refusing to remove a populated child is what makes this method safe to reach for by default; cutting off a whole branch is reserved for the more explicit [`remove_subtree`]. The cursor does not move.
    ///
    /// # Example
    /// ```rust
    /// use kindling::{PathTree, RemoveChildError};
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("dir").unwrap()
    ///     .path("dir").unwrap()
    ///     .set_child("file").unwrap();
    ///
    /// // A populated child is not removable one node at a time.
    /// tree.root();
    /// assert_eq!(tree.remove_child("dir").unwrap_err(), RemoveChildError::NotALeaf);
    ///
    /// tree.path("dir").unwrap().remove_child("file").unwrap();
    /// tree.root().remove_child("dir").unwrap();
    /// assert!(tree.is_leaf());
    /// ```
    ///
    /// [`remove_subtree`]: #method.remove_subtree " "
    pub fn remove_child(&mut self, name: &str) -> Result<&mut Self, RemoveChildError> {
        path::validate_name(name)?;
        let child_path = path::join(&self.context, name);
        if !self.store.has_edge(&self.context, &child_path) {
            return Err(RemoveChildError::NoSuchChild);
        }
        if !self.store.successors(&child_path).is_empty() {
            return Err(RemoveChildError::NotALeaf);
        }
        self.store.remove_node(&child_path);
        Ok(self)
    }
    /// Removes the child with the specified name from under the node at the cursor, together with every node below it.
    ///
    /// The subtree is identified by canonical path prefix, so a sibling whose name merely starts with the child's name survives: removing `a` does not touch `ab`. The cursor does not move, and since removal only ever happens below it, it also cannot be left naming a removed node. A store implementation which shares one graph between several handles brings that possibility back for the *other* handles; a cursor invalidated that way is detected with `has(".")` and recovered from with [`root`].
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("a").unwrap();
    /// tree.path("a").unwrap().set_child("b").unwrap();
    /// tree.path("b").unwrap().set_child("c").unwrap();
    ///
    /// // Back at the root, the whole branch goes at once.
    /// tree.root().remove_subtree("a").unwrap();
    /// assert!(!tree.has("/a") && !tree.has("/a/b") && !tree.has("/a/b/c"));
    /// assert!(tree.is_leaf() && tree.is_root());
    /// ```
    ///
    /// [`root`]: #method.root " "
    pub fn remove_subtree(&mut self, name: &str) -> Result<&mut Self, RemoveSubtreeError> {
        path::validate_name(name)?;
        let child_path = path::join(&self.context, name);
        if !self.store.has_edge(&self.context, &child_path) {
            return Err(RemoveSubtreeError::NoSuchChild);
        }
        let mut prefix = child_path.clone();
        prefix.push(path::SEPARATOR);
        let store = mem::replace(&mut self.store, S::new());
        self.store = store
            .filter_nodes(|id| id != child_path.as_str() && !id.starts_with(prefix.as_str()));
        Ok(self)
    }

    /// Moves the cursor to the node the expression resolves to.
    ///
    /// Resolution is all or nothing: when no node exists at the resolved path, the cursor stays exactly where it was, rather than landing on the nearest existing ancestor of the target. The returned error carries the canonical path which failed to resolve.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("a").unwrap()
    ///     .path("a").unwrap()
    ///     .set_child("b").unwrap();
    ///
    /// tree.path("/a/b").unwrap();
    /// assert_eq!(tree.context(), "/a/b");
    ///
    /// // A failed resolution reports the path it tried and leaves the cursor alone.
    /// let error = tree.path("../missing").unwrap_err();
    /// assert_eq!(error.path, "/a/missing");
    /// assert_eq!(tree.context(), "/a/b");
    /// ```
    pub fn path(&mut self, expr: &str) -> Result<&mut Self, PathNotFoundError> {
        let target = path::normalize(expr, &self.context);
        if self.store.has_node(&target) {
            self.context = target;
            Ok(self)
        } else {
            Err(PathNotFoundError { path: target })
        }
    }
    /// Moves the cursor to the node the expression resolves to, treating an unresolvable expression as an instruction to stay put.
    ///
    /// This is the variant of [`path`] for speculative navigation in call chains: the failed hop dissolves and the chain continues from wherever the cursor already was.
    ///
    /// # Example
    /// ```rust
    /// use kindling::PathTree;
    ///
    /// let mut tree = PathTree::<()>::new();
    /// tree.set_child("a").unwrap();
    ///
    /// tree.path_silent("missing").path_silent("a");
    /// assert_eq!(tree.context(), "/a");
    /// ```
    ///
    /// [`path`]: #method.path " "
    #[inline]
    pub fn path_silent(&mut self, expr: &str) -> &mut Self {
        let _ = self.path(expr);
        self
    }
    /// Moves the cursor back to the root node, which always exists.
    #[inline]
    pub fn root(&mut self) -> &mut Self {
        self.context = String::from(ROOT_PATH);
        self
    }
    /// Moves the cursor to the parent of the current node, staying put when already at the root.
    #[inline]
    pub fn parent(&mut self) -> &mut Self {
        self.path_silent(PARENT_TOKEN)
    }

    /// Returns a reference to the backing store.
    ///
    /// This is a read-only window into the whole hierarchy; the tree's own methods are the only way to write, which is what keeps the edge set tree-shaped.
    #[inline(always)]
    pub fn store(&self) -> &S {
        &self.store
    }
    /// Consumes the tree and returns the backing store.
    ///
    /// Together with [`with_store`], this is how a finished hierarchy moves between tree handles.
    ///
    /// # Example
    /// ```rust
    /// use kindling::{GraphStore, PathTree};
    ///
    /// let mut tree = PathTree::new();
    /// tree.set_child_value("kept", Some(3)).unwrap();
    ///
    /// let store = tree.into_store();
    /// let resumed = PathTree::<i32, _>::with_store(store).unwrap();
    /// assert_eq!(resumed.store().node("/kept").unwrap().value(), Some(&3));
    /// ```
    ///
    /// [`with_store`]: #method.with_store " "
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_store(self) -> S {
        self.store
    }
}
