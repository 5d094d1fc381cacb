//! Site and folder items

use url::Url;

/// A leaf entry that opens an address in a web view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    url: Url,
    id: String,
    description: String,
}

impl Site {
    /// Create a new site
    pub fn new(url: Url, id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url,
            id: id.into(),
            description: description.into(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A container of child items, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    items: Vec<FolderItem>,
    id: String,
    description: String,
}

impl Folder {
    /// Create a new folder owning `items`
    pub fn new(
        items: Vec<FolderItem>,
        id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            items,
            id: id.into(),
            description: description.into(),
        }
    }

    pub fn items(&self) -> &[FolderItem] {
        &self.items
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A node in the displayed hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderItem {
    Site(Site),
    Folder(Folder),
}

impl FolderItem {
    /// Stable id, unique across the whole tree
    pub fn id(&self) -> &str {
        match self {
            FolderItem::Site(site) => site.id(),
            FolderItem::Folder(folder) => folder.id(),
        }
    }

    /// Human-readable label
    pub fn description(&self) -> &str {
        match self {
            FolderItem::Site(site) => site.description(),
            FolderItem::Folder(folder) => folder.description(),
        }
    }

    /// Child items, `None` for sites so list views can tell leaves from
    /// empty folders
    pub fn children(&self) -> Option<&[FolderItem]> {
        match self {
            FolderItem::Site(_) => None,
            FolderItem::Folder(folder) => Some(folder.items()),
        }
    }

    pub fn as_site(&self) -> Option<&Site> {
        match self {
            FolderItem::Site(site) => Some(site),
            FolderItem::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            FolderItem::Folder(folder) => Some(folder),
            FolderItem::Site(_) => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FolderItem::Folder(_))
    }

    /// Depth-first, pre-order walk over this item and all descendants
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

impl From<Site> for FolderItem {
    fn from(site: Site) -> Self {
        FolderItem::Site(site)
    }
}

impl From<Folder> for FolderItem {
    fn from(folder: Folder) -> Self {
        FolderItem::Folder(folder)
    }
}

/// Iterator returned by [`FolderItem::walk`]
pub struct Walk<'a> {
    stack: Vec<&'a FolderItem>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a FolderItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        if let Some(children) = item.children() {
            // Reversed so the first child is visited next
            self.stack.extend(children.iter().rev());
        }
        Some(item)
    }
}
