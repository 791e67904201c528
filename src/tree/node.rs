use alloc::string::String;
use crate::path::ROOT_PATH;

/// The content of a single node of a path tree: its local name together with its optional payload value.
///
/// Trees create node content themselves as their methods are called; the type is public so that store types can be named (a tree over the default store carries its nodes as `DirectedGraph<Node<T>>`) and so that content read back directly from a store, through [`store`] or [`into_store`], can be examined.
///
/// [`store`]: struct.PathTree.html#method.store " "
/// [`into_store`]: struct.PathTree.html#method.into_store " "
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Node<T> {
    local_name: String,
    value: Option<T>,
}
impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(local_name: String, value: Option<T>) -> Self {
        Self { local_name, value }
    }
    #[inline]
    pub(crate) fn root() -> Self {
        Self::new(String::from(ROOT_PATH), None)
    }
    /// Returns the local name of the node, which is the last segment of its canonical path.
    #[inline(always)]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }
    /// Returns a reference to the payload value of the node, or `None` if the node has no value assigned.
    #[inline(always)]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
    /// Extracts the payload value of the node, or `None` if the node has no value assigned.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}
