//! Hierarchical list model
//!
//! Items are either sites (leaves pointing at an address) or folders that
//! own a fixed list of child items.

mod item;

pub use item::{Folder, FolderItem, Site, Walk};
