#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

mod boilerplate;
mod distance;
mod mutate;
mod node;
mod tree;
mod verify;

pub use distance::divergence_depth;
pub use node::Node;
pub use tree::{Csmt, Opening};
