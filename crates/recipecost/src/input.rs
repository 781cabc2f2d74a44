//! JSON input documents read by the CLI tools.

use anyhow::{Context, Result};
use recipecost_core::Recipe;
use recipecost_engine::RecipeCostOptions;
use recipecost_menu::{MenuEngineeringConfig, RecipeSalesData};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// One recipe or a list of recipes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Recipes {
    /// A list of recipes
    Many(Vec<Recipe>),
    /// A single recipe object
    One(Box<Recipe>),
}

impl Recipes {
    /// Flatten into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Recipe> {
        match self {
            Self::Many(recipes) => recipes,
            Self::One(recipe) => vec![*recipe],
        }
    }
}

impl Default for Recipes {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// Input for `recipecost-cost`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDocument {
    /// Recipes to cost
    pub recipes: Recipes,
    /// Pipeline options
    #[serde(default)]
    pub options: RecipeCostOptions,
}

/// A cost document, or a bare recipe object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CostFile {
    Document(CostDocument),
    Recipe(Box<Recipe>),
}

impl From<CostFile> for CostDocument {
    fn from(file: CostFile) -> Self {
        match file {
            CostFile::Document(doc) => doc,
            CostFile::Recipe(recipe) => Self {
                recipes: Recipes::One(recipe),
                options: RecipeCostOptions::default(),
            },
        }
    }
}

/// Input for `recipecost-menu`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    /// Recipes to cost
    pub recipes: Recipes,
    /// Sales per menu item
    pub sales: Vec<RecipeSalesData>,
    /// Pipeline options used to cost the recipes
    #[serde(default)]
    pub options: RecipeCostOptions,
    /// Classifier settings
    #[serde(default)]
    pub config: MenuEngineeringConfig,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load a cost document from `path`.
pub fn load_cost_document(path: &Path) -> Result<CostDocument> {
    read_json::<CostFile>(path).map(CostDocument::from)
}

/// Load a menu document from `path`.
pub fn load_menu_document(path: &Path) -> Result<MenuDocument> {
    read_json(path)
}
