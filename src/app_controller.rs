use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::PageError;
use crate::file_utils::FileManager;
use crate::renderer::{self, PageMeta, PageRenderer, RenderedPage, TemplateEscaping};
use crate::session::Session;

// @module: Application controller for page generation

/// What a generate request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The session had no sections, nothing was written
    Skipped,
    /// The page was written to `path`
    Written { path: PathBuf, banner_index: u32 },
}

/// Main application controller for page generation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Renderer built from the configuration
    renderer: PageRenderer,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let renderer = config.renderer();
        Ok(Self { config, renderer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path the page named `page_name` is written to
    pub fn output_path(&self, page_name: &str) -> PathBuf {
        Path::new(&self.config.output_dir)
            .join(page_name)
            .join(&self.config.output_file_name)
    }

    /// Render and write the page, picking the banner from `rng`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        session: &Session,
        meta: &PageMeta,
        rng: &mut R,
    ) -> Result<GenerateOutcome> {
        self.warn_on_fragile_name(meta);
        match session.handle_generate(&self.renderer, meta, rng) {
            Some(page) => self.write_page(meta, &page),
            None => Ok(Self::skipped()),
        }
    }

    /// Render and write the page with a pinned banner index
    pub fn generate_with_banner(
        &self,
        session: &Session,
        meta: &PageMeta,
        banner_index: u32,
    ) -> Result<GenerateOutcome> {
        self.check_banner_index(banner_index)?;
        self.warn_on_fragile_name(meta);
        match session.handle_generate_with_banner(&self.renderer, meta, banner_index) {
            Some(page) => self.write_page(meta, &page),
            None => Ok(Self::skipped()),
        }
    }

    /// Render without writing anything
    pub fn preview<R: Rng + ?Sized>(
        &self,
        session: &Session,
        meta: &PageMeta,
        banner_index: Option<u32>,
        rng: &mut R,
    ) -> Result<Option<RenderedPage>> {
        match banner_index {
            Some(index) => {
                self.check_banner_index(index)?;
                Ok(session.handle_generate_with_banner(&self.renderer, meta, index))
            }
            None => Ok(session.handle_generate(&self.renderer, meta, rng)),
        }
    }

    /// All page files found under the output directory
    pub fn list_generated_pages(&self) -> Result<Vec<PathBuf>> {
        FileManager::find_files_named(&self.config.output_dir, &self.config.output_file_name)
            .with_context(|| format!("Failed to list pages in {}", self.config.output_dir))
    }

    fn write_page(&self, meta: &PageMeta, page: &RenderedPage) -> Result<GenerateOutcome> {
        let path = self.output_path(&self.directory_name(meta));

        debug!(
            "Rendering '{}' with banner {} ({} bytes)",
            meta.page_name,
            page.banner.path,
            page.document.len()
        );

        FileManager::write_to_file(&path, &page.document)
            .with_context(|| format!("Failed to generate page '{}'", meta.page_name))?;

        info!("Page generated successfully at {}", path.display());

        Ok(GenerateOutcome::Written {
            path,
            banner_index: page.banner.index,
        })
    }

    // @returns: Folder name for the page, sanitized when escaping is on
    fn directory_name(&self, meta: &PageMeta) -> String {
        match self.renderer.escaping() {
            TemplateEscaping::Verbatim => meta.page_name.clone(),
            TemplateEscaping::Escaped => renderer::sanitize_identifier(&meta.page_name),
        }
    }

    fn check_banner_index(&self, index: u32) -> Result<(), PageError> {
        let banner = &self.config.banner;
        if banner.contains(index) {
            Ok(())
        } else {
            Err(PageError::BannerOutOfRange {
                index,
                min: banner.min_index,
                max: banner.max_index,
            })
        }
    }

    fn warn_on_fragile_name(&self, meta: &PageMeta) {
        if self.renderer.escaping() == TemplateEscaping::Verbatim
            && !renderer::is_valid_identifier(&meta.page_name)
        {
            warn!(
                "Page name '{}' is not a valid component identifier; the generated page will not compile",
                meta.page_name
            );
        }
    }

    fn skipped() -> GenerateOutcome {
        warn!("No sections added yet, nothing to generate");
        GenerateOutcome::Skipped
    }
}
