//! A growable, order-preserving container with O(1) swap removal.
//!
//! [`Container`] appends elements at the end and addresses them by index.
//! Removing an element moves the last live element into the vacated slot
//! instead of shifting the tail, so removal is constant time but may change
//! the order of the remaining elements. Lookups are linear scans.
//!
//! ```
//! use swap_container::Container;
//!
//! let mut c = Container::new();
//! c.add("Hello");
//! c.add("world");
//! c.add("this");
//! c.add_all(["is", "a", "test", "!"]);
//! assert_eq!(c.to_string(), "[Hello, world, this, is, a, test, !]");
//!
//! c.remove_element("Hello");
//! assert_eq!(c.to_string(), "[!, world, this, is, a, test]");
//! ```

mod capacity;
mod container;
mod error;
pub mod iterators;
#[cfg(feature = "serde")]
mod serde_impl;

pub use crate::capacity::DEFAULT_CAPACITY;
pub use crate::container::{Container, NOT_FOUND};
pub use crate::error::{ContainerError, Result};
