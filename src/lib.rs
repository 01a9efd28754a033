#![cfg_attr(false, no_std)]

extern crate alloc;

mod groups;
mod union_find;

pub use crate::union_find::{Forest, OutOfRangeError};
