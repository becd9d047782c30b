//! Static catalog tables
//!
//! The category table maps canonical category names to catalog browse nodes,
//! and the alias table maps informal spoken names to canonical categories.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Canonical category name to browse node id, in declaration order
pub const BROWSE_NODES: &[(&str, &str)] = &[
    ("Apparel", "1036592"),
    ("Appliances", "2619526011"),
    ("ArtsAndCrafts", "2617942011"),
    ("Automotive", "15690151"),
    ("Baby", "165797011"),
    ("Beauty", "11055981"),
    ("Books", "1000"),
    ("Classical", "301668"),
    ("Collectibles", "4991426011"),
    ("DVD", "2625374011"),
    ("DigitalMusic", "624868011"),
    ("Electronics", "493964"),
    ("GiftCards", "2864120011"),
    ("GourmetFood", "16310211"),
    ("Grocery", "16310211"),
    ("HealthPersonalCare", "3760931"),
    ("HomeGarden", "1063498"),
    ("Industrial", "16310161"),
    ("Jewelry", "2516784011"),
    ("KindleStore", "133141011"),
    ("Kitchen", "284507"),
    ("LawnAndGarden", "3238155011"),
    ("MP3Downloads", "624868011"),
    ("Magazines", "599872"),
    ("Miscellaneous", "10304191"),
    ("MobileApps", "2350150011"),
    ("Music", "301668"),
    ("MusicalInstruments", "11965861"),
    ("OfficeProducts", "1084128"),
    ("OutdoorLiving", "2972638011"),
    ("PCHardware", "541966"),
    ("PetSupplies", "2619534011"),
    ("Photo", "502394"),
    ("Shoes", "672124011"),
    ("Software", "409488"),
    ("SportingGoods", "3375301"),
    ("Tools", "468240"),
    ("Toys", "165795011"),
    ("UnboxVideo", "2858778011"),
    ("VHS", "2625374011"),
    ("Video", "404276"),
    ("VideoGames", "11846801"),
    ("Watches", "378516011"),
    ("Wireless", "2335753011"),
    ("WirelessAccessories", "13900851"),
];

/// Informal spoken names and the category they stand for
pub const SPOKEN_ALIASES: &[(&str, &str)] = &[
    ("movies", "DVD"),
    ("movie", "DVD"),
    ("novels", "Books"),
    ("novel", "Books"),
];

/// A canonical catalog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    pub browse_node: String,
}

impl CatalogCategory {
    pub fn new(name: impl Into<String>, browse_node: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            browse_node: browse_node.into(),
        }
    }
}

/// Read-only category table, kept in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<CatalogCategory>,
}

impl CategoryTable {
    /// Build a table from (name, browse node) pairs
    pub fn new<N, B>(entries: impl IntoIterator<Item = (N, B)>) -> Self
    where
        N: Into<String>,
        B: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, node)| CatalogCategory::new(name, node))
                .collect(),
        }
    }

    /// The built-in catalog categories
    pub fn builtin() -> Self {
        Self::new(BROWSE_NODES.iter().copied())
    }

    /// Look up a category by its exact canonical name
    pub fn get(&self, name: &str) -> Option<&CatalogCategory> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Look up a category ignoring case
    pub fn find_ignore_case(&self, name: &str) -> Option<&CatalogCategory> {
        self.entries.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogCategory> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only alias table; keys are stored lower-case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Build a table from (spoken alias, canonical name) pairs
    pub fn new<A, C>(aliases: impl IntoIterator<Item = (A, C)>) -> Self
    where
        A: AsRef<str>,
        C: Into<String>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(alias, category)| (alias.as_ref().to_lowercase(), category.into()))
                .collect(),
        }
    }

    /// The built-in spoken aliases
    pub fn builtin() -> Self {
        Self::new(SPOKEN_ALIASES.iter().copied())
    }

    /// Canonical category name for a lower-cased alias
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
