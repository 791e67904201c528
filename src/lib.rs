//! Implements a path-addressed tree data structure and interfaces to work with it.
//!
//! # Overview
//! Kindling implements a tree of named, value-carrying nodes in which every node is identified by its *canonical path*, a filesystem-like string such as `/a/b/c`. A tree handle keeps a cursor and is worked with the way a shell session is: navigation re-points the cursor using POSIX-style path expressions (absolute, relative, `.` and `..`), accessors describe the node at the cursor, and mutators edit the hierarchy directly under it. Data shaped like this shows up in configuration namespaces, device trees, mountpoint registries and similar places, and the crate aims to be the tidy in-memory representation for all of them.
//!
//! # Store
//! The trait used for defining the backing graph type used is [`GraphStore`]. A tree keeps its hierarchy as a node-labelled directed graph, with canonical paths for node ids and an edge going from every parent to each of its children, so any type which can store such a graph can back a tree. The crate ships a single implementation, [`DirectedGraph`], which is also the default; [`with_store`] and [`into_store`] move finished hierarchies into and out of caller-provided stores.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. An allocator is required either way, since canonical paths are heap-allocated strings.
//!
//! [`GraphStore`]: store/trait.GraphStore.html " "
//! [`DirectedGraph`]: store/struct.DirectedGraph.html " "
//! [`with_store`]: struct.PathTree.html#method.with_store " "
//! [`into_store`]: struct.PathTree.html#method.into_store " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    // Broken, will display warnings even for undocumented items, including trait impls
    //missing_doc_code_examples,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::await_holding_lock,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map,
    clippy::filter_map_next,
    clippy::find_map,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::pub_enum_variant_names,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    // also sick of this one, gives too much false positives inherent to its design
    // clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unsafe_derive_deserialize,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::filetype_is_file,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
    clippy::wrong_pub_self_convention,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod path;
#[doc(no_inline)]
pub use path::InvalidNameError;

pub mod store;
#[doc(no_inline)]
pub use store::{GraphStore, DirectedGraph, DefaultStore};

pub mod tree;
pub use tree::{PathTree, Node};

/// A prelude for using Kindling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::store::{
        GraphStore as TreeStore,
        DirectedGraph as DirectedTreeStore,
        DefaultStore as DefaultTreeStore,
    };
    #[doc(no_inline)]
    pub use crate::tree::{
        PathTree,
        Node as TreeNode,
        Descendants as TreeDescendants,
    };
}

use core::fmt::{self, Formatter, Display};
use alloc::{format, string::String};

/// The error type returned by tree constructors when the provided store cannot uphold the tree invariant.
///
/// The three capability methods on `GraphStore` have defaults which report exactly what trees need, so this error only ever comes up with stores which override them.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum InvalidStoreError {
    /// The store reported its edges as undirected. Without edge direction there is no way to tell a parent from a child.
    Undirected,
    /// The store reported itself as compound. Nesting nodes inside each other would introduce a second parent relation next to the edges.
    Compound,
    /// The store reported itself as a multigraph. Parallel edges would make a child enumerate under its parent several times.
    Multigraph,
}
impl Display for InvalidStoreError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Undirected => "the supplied store is not a directed graph",
            Self::Compound => "the supplied store is a compound graph",
            Self::Multigraph => "the supplied store is a multigraph",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidStoreError {}

/// The error type returned by the method on trees which removes individual leaf children.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum RemoveChildError {
    /// The specified name cannot be the local name of a node to begin with.
    InvalidName(InvalidNameError),
    /// No child with the specified name exists under the node at the cursor.
    NoSuchChild,
    /// The child has children of its own and should be removed with `remove_subtree` instead.
    NotALeaf,
}
impl Display for RemoveChildError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::InvalidName(error) => return Display::fmt(error, f),
            Self::NoSuchChild => "no child with such a name exists under the cursor",
            Self::NotALeaf => "the child has children of its own and cannot be removed as a leaf",
        })
    }
}
impl From<InvalidNameError> for RemoveChildError {
    #[inline(always)]
    fn from(error: InvalidNameError) -> Self {
        Self::InvalidName(error)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for RemoveChildError {}

/// The error type returned by the method on trees which removes whole subtrees.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum RemoveSubtreeError {
    /// The specified name cannot be the local name of a node to begin with.
    InvalidName(InvalidNameError),
    /// No child with the specified name exists under the node at the cursor.
    NoSuchChild,
}
impl Display for RemoveSubtreeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::InvalidName(error) => return Display::fmt(error, f),
            Self::NoSuchChild => "no child with such a name exists under the cursor",
        })
    }
}
impl From<InvalidNameError> for RemoveSubtreeError {
    #[inline(always)]
    fn from(error: InvalidNameError) -> Self {
        Self::InvalidName(error)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for RemoveSubtreeError {}

/// The error type returned by the navigation method on trees when an expression resolves to a path no node answers to.
///
/// The cursor of the tree which returned this is guaranteed to be exactly where it was before the call, rather than at the deepest ancestor of the target which does exist.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PathNotFoundError {
    /// The canonical path the expression resolved to.
    pub path: String,
}
impl Display for PathNotFoundError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!("no node exists at `{}`", self.path))
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for PathNotFoundError {}
