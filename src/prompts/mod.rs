//! Prompt Loader
//!
//! Loads prompt templates from the repo's `prompts/` directory or falls
//! back to embedded defaults, then renders them with Handlebars.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

mod embedded;

/// Context for rendering the flashcard prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    /// Requested number of cards (advisory to the model only)
    pub count: u32,
    /// Source text the cards should be generated from
    pub content: String,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// Repo prompt directory (e.g. `prompts/`), if present
    repo_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    ///
    /// Templates in `<root>/prompts/` override the embedded defaults.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let repo_dir = root.as_ref().join("prompts");
        let repo_dir_exists = repo_dir.exists();
        debug!(?repo_dir, %repo_dir_exists, "PromptLoader::new: called");

        Self {
            hbs: Handlebars::new(),
            repo_dir: if repo_dir_exists { Some(repo_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Handlebars::new(),
            repo_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks the repo `prompts/{name}.pmt` first, then the embedded
    /// fallback.
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "load_template: called");
        if let Some(ref repo_dir) = self.repo_dir {
            let path = repo_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "load_template: found in repo");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
            debug!(?path, "load_template: not found in repo");
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "load_template: found in embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        debug!(%template_name, count = context.count, content_len = context.content.len(), "render: called");
        let template = self.load_template(template_name)?;

        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }
}
