//! Deterministic page synthesis
//!
//! Index `i` always produces the same item:
//! - `i % 3 == 0`: site "Google {i}"
//! - `i % 3 == 1`: site "MSN {i}"
//! - `i % 3 == 2`: folder "Folder {i}" holding an MSN and a Google site

use std::ops::Range;
use std::sync::LazyLock;

use url::Url;

use crate::model::{Folder, FolderItem, Site};

pub static GOOGLE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://google.com").expect("literal URL parses"));

pub static MSN_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://msn.com").expect("literal URL parses"));

/// Top-level id for index `i`
pub fn item_id(index: usize) -> String {
    format!("item_{}", index)
}

/// Synthesize the item shown at `index`
pub fn synthesize_item(index: usize) -> FolderItem {
    let id = item_id(index);
    match index % 3 {
        0 => Site::new(GOOGLE_URL.clone(), id, format!("Google {}", index)).into(),
        1 => Site::new(MSN_URL.clone(), id, format!("MSN {}", index)).into(),
        _ => {
            // Child ids extend the parent id so they stay unique tree-wide
            let items: Vec<FolderItem> = vec![
                Site::new(MSN_URL.clone(), format!("{}_msn", id), "MSN").into(),
                Site::new(GOOGLE_URL.clone(), format!("{}_google", id), "Google").into(),
            ];
            let description = format!("Folder {}", index);
            Folder::new(items, id, description).into()
        }
    }
}

/// Synthesize every item in `indices`, in order
pub fn synthesize_page(indices: Range<usize>) -> Vec<FolderItem> {
    indices.map(synthesize_item).collect()
}
