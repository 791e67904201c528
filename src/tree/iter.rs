use core::iter::FusedIterator;
use alloc::{string::String, vec, vec::Vec};
use crate::store::{DefaultStore, GraphStore};
use super::{Node, PathTree};

/// An iterator over the canonical paths of a subtree, in depth-first preorder.
///
/// Returned by the [`descendants`] method on trees; see its documentation for more.
///
/// [`descendants`]: struct.PathTree.html#method.descendants " "
#[derive(Clone, Debug)]
pub struct Descendants<'a, T, S = DefaultStore<Node<T>>>
where
    S: GraphStore<Node = Node<T>>,
{
    tree: &'a PathTree<T, S>,
    stack: Vec<String>,
}
impl<'a, T, S> Descendants<'a, T, S>
where
    S: GraphStore<Node = Node<T>>,
{
    #[inline]
    pub(super) fn new(tree: &'a PathTree<T, S>) -> Self {
        Self {
            tree,
            stack: vec![String::from(tree.context())],
        }
    }
}
impl<T, S> Iterator for Descendants<'_, T, S>
where
    S: GraphStore<Node = Node<T>>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.stack.pop()?;
        let mut children = self.tree.store().successors(&path);
        // Reversed so that the first child comes off the stack first.
        children.reverse();
        self.stack.append(&mut children);
        Some(path)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() {
            (0, Some(0))
        } else {
            (self.stack.len(), None)
        }
    }
}
impl<T, S> FusedIterator for Descendants<'_, T, S> where S: GraphStore<Node = Node<T>> {}
