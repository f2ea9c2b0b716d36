/*!
 * Content sections for generated pages.
 *
 * A section starts as raw text typed into a form field and is turned into a
 * pre-rendered markup fragment by the producer rule of its content type.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const SUBHEADING_CLASSES: &str =
    "mb-4 text-xl font-bold text-black dark:text-white sm:text-2xl lg:text-xl xl:text-2xl";
const SUB_SUBHEADING_CLASSES: &str =
    "mb-2 text-lg font-bold text-black dark:text-white sm:text-xl lg:text-lg xl:text-xl";
const PARAGRAPH_CLASSES: &str =
    "text-justify text-base font-medium leading-relaxed text-body-color sm:text-lg sm:leading-relaxed";
const LIST_CLASSES: &str =
    "list-disc pl-5 mb-4 text-base font-medium leading-relaxed text-body-color sm:text-lg sm:leading-relaxed";
const CODE_CLASSES: &str =
    "max-w-3xl mx-auto overflow-auto p-5 border border-gray-200 rounded-lg shadow-lg bg-gray-50 font-mono text-sm";

/// Kind of content a section holds
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Level three heading
    #[default]
    Subheading,
    /// Level four heading
    SubSubheading,
    Paragraph,
    /// Unordered list, one item per input line
    BulletList,
    /// Preformatted code, `\n` escapes become line breaks
    CodeBlock,
}

impl ContentType {
    /// All content types in the order they are offered for selection
    pub const ALL: [ContentType; 5] = [
        ContentType::Subheading,
        ContentType::SubSubheading,
        ContentType::Paragraph,
        ContentType::BulletList,
        ContentType::CodeBlock,
    ];

    // @returns: Label shown in the content type selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subheading => "h3 (Subheading)",
            Self::SubSubheading => "h4 (Sub-subheading)",
            Self::Paragraph => "Paragraph",
            Self::BulletList => "Unordered List (Bullet points)",
            Self::CodeBlock => "Code Chunk",
        }
    }

    // @returns: Prefix of the pending input key
    pub fn input_prefix(&self) -> &'static str {
        match self {
            Self::Subheading => "h3",
            Self::SubSubheading => "h4",
            Self::Paragraph => "para",
            Self::BulletList => "list",
            Self::CodeBlock => "code",
        }
    }

    // @returns: Prompt shown when asking for raw input
    pub fn input_prompt(&self) -> &'static str {
        match self {
            Self::Subheading => "Enter the text for h3",
            Self::SubSubheading => "Enter the text for h4",
            Self::Paragraph => "Enter the paragraph text",
            Self::BulletList => "Enter bullet points (one per line)",
            Self::CodeBlock => "Enter the code block (use \\n for new lines)",
        }
    }

    /// Whether the raw input for this type spans several lines
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Paragraph | Self::BulletList)
    }

    // @returns: Kebab-case identifier used in recipes and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subheading => "subheading",
            Self::SubSubheading => "sub-subheading",
            Self::Paragraph => "paragraph",
            Self::BulletList => "bullet-list",
            Self::CodeBlock => "code-block",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|ct| ct.as_str() == wanted || ct.input_prefix() == wanted)
            .ok_or_else(|| anyhow!("Invalid content type: {}", s))
    }
}

/// One pre-rendered unit of page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn raw input into a fragment according to the content type.
///
/// Returns `None` when the input is empty for every type except
/// `BulletList`, which always yields a list (an empty input becomes a
/// single empty item).
pub fn produce(content_type: ContentType, raw: &str) -> Option<Fragment> {
    let markup = match content_type {
        ContentType::Subheading => non_empty(raw)
            .map(|text| format!(r#"<h3 className="{}">{}</h3>"#, SUBHEADING_CLASSES, text)),
        ContentType::SubSubheading => non_empty(raw)
            .map(|text| format!(r#"<h4 className="{}">{}</h4>"#, SUB_SUBHEADING_CLASSES, text)),
        ContentType::Paragraph => {
            non_empty(raw).map(|text| format!(r#"<p className="{}">{}</p>"#, PARAGRAPH_CLASSES, text))
        }
        ContentType::BulletList => Some(bullet_list(raw)),
        ContentType::CodeBlock => {
            let code = unescape_newlines(raw);
            non_empty(&code).map(|code| {
                format!("<pre className=\"{}\">\n{{`{}`}}\n</pre>", CODE_CLASSES, code)
            })
        }
    };
    markup.map(Fragment)
}

fn non_empty(raw: &str) -> Option<&str> {
    if raw.is_empty() { None } else { Some(raw) }
}

fn bullet_list(raw: &str) -> String {
    // Splitting never yields zero items, so the list is never skipped
    let items = raw
        .split('\n')
        .map(|item| format!("<li><strong>{}</strong></li>", item))
        .collect::<Vec<_>>()
        .join("\n    ");
    format!("<ul className=\"{}\">\n    {}\n</ul>", LIST_CLASSES, items)
}

/// Replace every literal backslash-n pair with a newline
pub fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
