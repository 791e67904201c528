//! Canonical paths and the expressions which resolve into them.
//!
//! Every node of a path tree is identified by its *canonical path*: the local names of the nodes leading from the root to it, each prefixed by the [separator]. The root is identified by the lone separator. Canonical paths are absolute, never end with the separator (the root aside) and never contain empty, [current-node][current] or [parent][parent] segments. Those forms are only meaningful in *path expressions*, the looser strings which [`normalize`] resolves into canonical form against a cursor position.
//!
//! [separator]: constant.SEPARATOR.html " "
//! [current]: constant.CURRENT_TOKEN.html " "
//! [parent]: constant.PARENT_TOKEN.html " "
//! [`normalize`]: fn.normalize.html " "

use core::fmt::{self, Formatter, Display};
use alloc::{string::String, vec::Vec};

/// The character which separates the segments of a path.
pub const SEPARATOR: char = '/';
/// The canonical path of the root node of a tree, which is the lone separator.
pub const ROOT_PATH: &str = "/";
/// The path expression segment which names the node the expression is being resolved against.
pub const CURRENT_TOKEN: &str = ".";
/// The path expression segment which names the parent of the node the expression is being resolved against.
pub const PARENT_TOKEN: &str = "..";

/// Checks whether the given string can be used as the local name of a node.
///
/// Local names become path segments, which restricts them to strings which survive a round trip through [`normalize`]: a name cannot be empty, cannot contain the [separator] and cannot be one of the two reserved tokens, [`CURRENT_TOKEN`] and [`PARENT_TOKEN`]. Names which merely *contain* dots, such as `..config` or `a.out`, are ordinary names.
///
/// # Example
/// ```rust
/// use kindling::path::{self, InvalidNameError};
///
/// assert_eq!(path::validate_name("a.out"), Ok(()));
/// assert_eq!(path::validate_name(""), Err(InvalidNameError::Empty));
/// assert_eq!(path::validate_name("a/b"), Err(InvalidNameError::ContainsSeparator));
/// assert_eq!(path::validate_name("."), Err(InvalidNameError::CurrentToken));
/// assert_eq!(path::validate_name(".."), Err(InvalidNameError::ParentToken));
/// ```
///
/// [`normalize`]: fn.normalize.html " "
/// [separator]: constant.SEPARATOR.html " "
/// [`CURRENT_TOKEN`]: constant.CURRENT_TOKEN.html " "
/// [`PARENT_TOKEN`]: constant.PARENT_TOKEN.html " "
#[inline]
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    if name.is_empty() {
        Err(InvalidNameError::Empty)
    } else if name.contains(SEPARATOR) {
        Err(InvalidNameError::ContainsSeparator)
    } else if name == CURRENT_TOKEN {
        Err(InvalidNameError::CurrentToken)
    } else if name == PARENT_TOKEN {
        Err(InvalidNameError::ParentToken)
    } else {
        Ok(())
    }
}

/// Resolves a path expression into a canonical path, using `context` as the position which relative expressions and parent tokens are resolved against.
///
/// Expressions starting with the [separator] are absolute and ignore the context entirely; any other expression, the empty one included, is resolved starting at the context. Resolution walks the segments left to right: empty segments and [`CURRENT_TOKEN`]s are skipped, a [`PARENT_TOKEN`] pops the last segment collected so far if there is one to pop (walking above the root silently stays at the root, the same way `cd /..` does), and every other segment is appended verbatim.
///
/// The context is required to be a canonical path itself. Trees uphold that invariant for their cursor automatically; call sites which pass arbitrary strings as the context get garbage-in, garbage-out results, though never a panic.
///
/// The function is pure and idempotent: normalizing an already canonical path returns it unchanged, no matter the context.
///
/// # Example
/// ```rust
/// use kindling::path;
///
/// assert_eq!(path::normalize("b/c", "/a"), "/a/b/c");
/// assert_eq!(path::normalize("/x/y", "/a"), "/x/y");
/// assert_eq!(path::normalize("../sibling", "/a/b"), "/a/sibling");
/// assert_eq!(path::normalize("b//.//c", "/a"), "/a/b/c");
/// assert_eq!(path::normalize("../../../..", "/a"), "/");
/// assert_eq!(path::normalize("", "/a"), "/a");
/// ```
///
/// [separator]: constant.SEPARATOR.html " "
/// [`CURRENT_TOKEN`]: constant.CURRENT_TOKEN.html " "
/// [`PARENT_TOKEN`]: constant.PARENT_TOKEN.html " "
pub fn normalize(expr: &str, context: &str) -> String {
    let base = if expr.starts_with(SEPARATOR) { "" } else { context };
    let mut stack = Vec::new();
    for segment in base.split(SEPARATOR).chain(expr.split(SEPARATOR)) {
        match segment {
            "" | CURRENT_TOKEN => {}
            PARENT_TOKEN => {
                stack.pop();
            }
            _ => stack.push(segment),
        }
    }
    if stack.is_empty() {
        String::from(ROOT_PATH)
    } else {
        let mut path = String::with_capacity(base.len() + expr.len() + 1);
        for segment in stack {
            path.push(SEPARATOR);
            path.push_str(segment);
        }
        path
    }
}

/// Joins the canonical path of a parent node and the local name of its child into the canonical path of the child.
///
/// This is cheaper than [`normalize`] and sidesteps its token handling, so the name is expected to have passed [`validate_name`] first.
///
/// # Example
/// ```rust
/// use kindling::path;
///
/// assert_eq!(path::join("/", "etc"), "/etc");
/// assert_eq!(path::join("/etc", "fstab"), "/etc/fstab");
/// ```
///
/// [`normalize`]: fn.normalize.html " "
/// [`validate_name`]: fn.validate_name.html " "
#[inline]
pub fn join(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + name.len() + 1);
    if parent != ROOT_PATH {
        path.push_str(parent);
    }
    path.push(SEPARATOR);
    path.push_str(name);
    path
}

/// Extracts the last segment of a canonical path, which is the local name of the node the path identifies. The root path is its own name.
///
/// # Example
/// ```rust
/// use kindling::path;
///
/// assert_eq!(path::leaf_name("/etc/fstab"), "fstab");
/// assert_eq!(path::leaf_name("/etc"), "etc");
/// assert_eq!(path::leaf_name("/"), "/");
/// ```
#[inline]
pub fn leaf_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(at) if path.len() > 1 => &path[at + 1..],
        _ => path,
    }
}

/// The error type returned when a string cannot be used as the local name of a node.
///
/// Returned by [`validate_name`] and by every tree method which takes a name argument.
///
/// [`validate_name`]: fn.validate_name.html " "
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum InvalidNameError {
    /// The name was empty. An empty name would vanish during normalization, leaving its node unaddressable.
    Empty,
    /// The name contained the [separator], which would make it parse as several path segments.
    ///
    /// [separator]: constant.SEPARATOR.html " "
    ContainsSeparator,
    /// The name was the reserved [current-node token][`CURRENT_TOKEN`].
    ///
    /// [`CURRENT_TOKEN`]: constant.CURRENT_TOKEN.html " "
    CurrentToken,
    /// The name was the reserved [parent token][`PARENT_TOKEN`].
    ///
    /// [`PARENT_TOKEN`]: constant.PARENT_TOKEN.html " "
    ParentToken,
}
impl Display for InvalidNameError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Empty => "node names cannot be empty",
            Self::ContainsSeparator => "node names cannot contain the path separator",
            Self::CurrentToken => "node names cannot be the current-node token",
            Self::ParentToken => "node names cannot be the parent token",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidNameError {}
