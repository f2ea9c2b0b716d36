/*!
 * Page template rendering.
 *
 * Fills the fixed Next.js page skeleton with the page name, the two banner
 * headers, a randomly picked banner image and the accumulated fragments.
 * The random source is always supplied by the caller so output can be pinned.
 */

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::section::Fragment;

/// Placeholder replaced by the banner index in a banner path pattern
pub const BANNER_INDEX_PLACEHOLDER: &str = "{n}";

/// Separator placed between fragments in the content block
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

static PAGE_DECLARATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^const (\S+) = \(\) => \{$").expect("page declaration pattern is valid")
});

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Values typed into the page form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Component name, also used as the output directory name
    pub page_name: String,
    pub header1: String,
    pub header2: String,
}

impl PageMeta {
    pub fn new(
        page_name: impl Into<String>,
        header1: impl Into<String>,
        header2: impl Into<String>,
    ) -> Self {
        Self {
            page_name: page_name.into(),
            header1: header1.into(),
            header2: header2.into(),
        }
    }
}

/// How form values are substituted into the template
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateEscaping {
    /// Values are inserted as typed; quotes or braces in them corrupt the page
    #[default]
    Verbatim,
    /// Header values are entity-escaped and the page name is made a valid identifier
    Escaped,
}

/// Banner picked for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerChoice {
    pub index: u32,
    pub path: String,
}

/// Picks the banner image referenced by a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSelector {
    /// Smallest banner index, inclusive
    #[serde(default = "default_min_banner_index")]
    pub min_index: u32,

    /// Largest banner index, inclusive
    #[serde(default = "default_max_banner_index")]
    pub max_index: u32,

    /// Asset path with `{n}` standing for the index
    #[serde(default = "default_banner_path_pattern")]
    pub path_pattern: String,
}

impl Default for BannerSelector {
    fn default() -> Self {
        Self {
            min_index: default_min_banner_index(),
            max_index: default_max_banner_index(),
            path_pattern: default_banner_path_pattern(),
        }
    }
}

impl BannerSelector {
    /// Sample a banner uniformly from the inclusive index range
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> BannerChoice {
        let index = rng.random_range(self.min_index..=self.max_index);
        self.choice(index)
    }

    /// Build the banner for a fixed index, without range checks
    pub fn choice(&self, index: u32) -> BannerChoice {
        BannerChoice {
            index,
            path: self.path_for(index),
        }
    }

    pub fn path_for(&self, index: u32) -> String {
        self.path_pattern
            .replace(BANNER_INDEX_PLACEHOLDER, &index.to_string())
    }

    pub fn contains(&self, index: u32) -> bool {
        (self.min_index..=self.max_index).contains(&index)
    }
}

fn default_min_banner_index() -> u32 {
    2
}

fn default_max_banner_index() -> u32 {
    10
}

fn default_banner_path_pattern() -> String {
    "/images/banners/Banner-{n}.webp".to_string()
}

/// Output of a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Full document text
    pub document: String,
    pub banner: BannerChoice,
    /// Fragments joined as they appear inside the container
    pub content_block: String,
}

/// Renders page documents from fragments
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    banner: BannerSelector,
    escaping: TemplateEscaping,
}

impl PageRenderer {
    pub fn new(banner: BannerSelector, escaping: TemplateEscaping) -> Self {
        Self { banner, escaping }
    }

    pub fn escaping(&self) -> TemplateEscaping {
        self.escaping
    }

    /// Render a page, drawing the banner from `rng`
    pub fn render<R: Rng + ?Sized>(
        &self,
        meta: &PageMeta,
        fragments: &[Fragment],
        rng: &mut R,
    ) -> RenderedPage {
        let banner = self.banner.choose(rng);
        self.fill(meta, fragments, banner)
    }

    /// Render a page with a pinned banner index
    pub fn render_with_banner(
        &self,
        meta: &PageMeta,
        fragments: &[Fragment],
        banner_index: u32,
    ) -> RenderedPage {
        let banner = self.banner.choice(banner_index);
        self.fill(meta, fragments, banner)
    }

    fn fill(&self, meta: &PageMeta, fragments: &[Fragment], banner: BannerChoice) -> RenderedPage {
        let content_block = join_fragments(fragments);

        let (page_name, header1, header2) = match self.escaping {
            TemplateEscaping::Verbatim => (
                meta.page_name.clone(),
                meta.header1.clone(),
                meta.header2.clone(),
            ),
            TemplateEscaping::Escaped => (
                sanitize_identifier(&meta.page_name),
                escape_attribute(&meta.header1),
                escape_attribute(&meta.header2),
            ),
        };

        let document = format!(
            r#"
"use client"
import Header from "@/components/Header";
import Footer from "@/components/Footer";
import Banner from '@/components/Common/Banner';

const {page_name} = () => {{
    return (
        <>
        <Header/>
        <Banner backgroundimage='{banner_path}'
        header1="{header1}"
        header2="{header2}" />

        <div className="container mx-auto p-4">
        {content_block}
        </div>

        <Footer/>
        </>
    );
}};

export default {page_name};
"#,
            page_name = page_name,
            banner_path = banner.path,
            header1 = header1,
            header2 = header2,
            content_block = content_block,
        );

        RenderedPage {
            document,
            banner,
            content_block,
        }
    }
}

/// Join fragments in order, separated by one blank line
pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(Fragment::as_str)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Read the component name back out of a rendered document
pub fn extract_page_name(document: &str) -> Option<String> {
    PAGE_DECLARATION_REGEX
        .captures(document)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether `name` can be used as a component name as-is
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// Reduce a name to a valid identifier
pub fn sanitize_identifier(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();

    if sanitized.is_empty() || sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        sanitized.insert(0, '_');
    }

    sanitized
}

/// Escape a value placed inside a double-quoted JSX attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
