/*!
 * Page recipes.
 *
 * A recipe is a JSON description of a page form and the sections typed into
 * it. Replaying it runs every section through the same handlers the
 * interactive builder uses, so both paths yield identical sessions.
 */

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::PageError;
use crate::file_utils::FileManager;
use crate::renderer::PageMeta;
use crate::section::ContentType;
use crate::session::Session;

/// One section as typed into the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSection {
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Raw input, exactly as it would be typed
    #[serde(default)]
    pub text: String,
}

/// Page form values plus the ordered sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecipe {
    pub page_name: String,

    #[serde(default)]
    pub header1: String,

    #[serde(default)]
    pub header2: String,

    #[serde(default)]
    pub sections: Vec<RecipeSection>,
}

impl PageRecipe {
    /// Parse a recipe from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse page recipe")
    }

    /// Load a recipe from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            return Err(PageError::InvalidRecipe(format!("recipe file not found: {:?}", path)).into());
        }

        let content = FileManager::read_to_string(path)?;
        Self::from_json(&content).with_context(|| format!("Invalid recipe file: {:?}", path))
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta::new(&self.page_name, &self.header1, &self.header2)
    }

    /// Replay every section into a fresh session
    pub fn replay(&self) -> Session {
        self.sections.iter().fold(Session::new(), |session, section| {
            let (session, outcome) = session
                .handle_select_type(section.content_type)
                .handle_input(section.text.as_str())
                .handle_submit_fragment();

            if !outcome.appended {
                debug!("Recipe section {} produced no content", outcome.cleared_key);
            }

            session
        })
    }
}
