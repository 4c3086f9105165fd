//! Token catalog: the static registry of known token types.
//!
//! The catalog maps a token type identifier to its display name and icon
//! asset, for the palette and for rendering placed tokens. It is purely
//! cosmetic: the model and the codec accept and preserve token types that
//! are not in the catalog — only their icon lookup comes up empty.
//!
//! A default catalog ships embedded in the library; a host page can
//! supply its own fleet via [`TokenCatalog::load_from`].

use crate::constants::ICON_DIR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One known token type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenType {
    /// Type identifier as it appears on the wire (e.g., "loco")
    pub id: String,
    /// Display name (e.g., "Locomotive")
    pub name: String,
    /// Optional description for the palette tooltip
    #[serde(default)]
    pub description: Option<String>,
}

/// Catalog schema from tokens.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    tokens: Vec<TokenType>,
}

/// Static registry of token types with O(1) lookup by identifier.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    tokens: Vec<TokenType>,
    lookup: HashMap<String, usize>,
}

impl TokenCatalog {
    /// Loads the catalog embedded in the library.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("tokens.json");
        Self::from_json(json_data).context("Failed to parse embedded tokens.json")
    }

    /// Loads a host-supplied catalog file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json_data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read token catalog: {}", path.display()))?;
        Self::from_json(&json_data)
            .with_context(|| format!("Failed to parse token catalog: {}", path.display()))
    }

    /// Parses a catalog from its JSON representation.
    fn from_json(json_data: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json_data)?;

        let mut lookup = HashMap::new();
        for (idx, token) in file.tokens.iter().enumerate() {
            lookup.insert(token.id.clone(), idx);
        }

        Ok(Self {
            tokens: file.tokens,
            lookup,
        })
    }

    /// Whether the given token type is in the catalog.
    #[must_use]
    pub fn is_known(&self, token_type: &str) -> bool {
        self.lookup.contains_key(token_type)
    }

    /// Gets a token type definition by identifier.
    #[must_use]
    pub fn get(&self, token_type: &str) -> Option<&TokenType> {
        let idx = self.lookup.get(token_type)?;
        self.tokens.get(*idx)
    }

    /// Icon asset path for a token type, following the dashboard's
    /// `static/assets/icons/<id>.png` scheme. `None` for unknown types —
    /// the token still renders, just without its icon.
    #[must_use]
    pub fn icon_path(&self, token_type: &str) -> Option<String> {
        if self.is_known(token_type) {
            Some(format!("{ICON_DIR}/{token_type}.png"))
        } else {
            None
        }
    }

    /// All token types in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenType> {
        self.tokens.iter()
    }

    /// Number of known token types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
