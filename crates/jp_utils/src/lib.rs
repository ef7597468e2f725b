//! Shared containers for the `jp_*` crates.
//!
//! - [`hash`]: hash containers with a fixed, seed-stable hasher.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId), the backing
//!   store of every type-keyed cache in the workspace.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
