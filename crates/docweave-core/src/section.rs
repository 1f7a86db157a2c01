use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::figure::Figure;
use crate::frame::DataFrame;

/// Which formatter handles a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Table,
    #[serde(alias = "plot")]
    Chart,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Text, ContentType::Table, ContentType::Chart];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Table => "table",
            ContentType::Chart => "chart",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentType::Text),
            "table" => Ok(ContentType::Table),
            "chart" | "plot" => Ok(ContentType::Chart),
            other => Err(CoreError::InvalidContentType {
                given: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Per-section formatting options.
///
/// `include_index` applies to tables and `width` (inches) to charts; any
/// other keys are carried in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub include_index: bool,
    pub width: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            include_index: true,
            width: 6.0,
            extra: BTreeMap::new(),
        }
    }
}

impl StyleOptions {
    pub fn include_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }

    pub fn width(mut self, inches: f64) -> Self {
        self.width = inches;
        self
    }
}

/// The payload of a section.
#[derive(Debug, Clone)]
pub enum Content {
    Text(String),
    Table(DataFrame),
    Chart(Arc<dyn Figure>),
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Text(_) => ContentType::Text,
            Content::Table(_) => ContentType::Table,
            Content::Chart(_) => ContentType::Chart,
        }
    }

    /// Infer the content kind of untyped data.
    ///
    /// Strings become text and `{"columns", "data"}` objects become tables.
    /// Charts can't be described by plain data, so nothing infers to one.
    pub fn infer(value: Value) -> Result<Content, CoreError> {
        match value {
            Value::String(s) => Ok(Content::Text(s)),
            ref v if DataFrame::looks_like_json_table(v) => {
                Ok(Content::Table(DataFrame::from_json(v)?))
            }
            _ => Err(CoreError::UndeterminedContentType),
        }
    }

    /// Interpret untyped data as the given content kind.
    pub fn coerce(value: Value, content_type: ContentType) -> Result<Content, CoreError> {
        match (content_type, value) {
            (ContentType::Text, Value::String(s)) => Ok(Content::Text(s)),
            (ContentType::Text, other) => Err(CoreError::PayloadMismatch {
                expected: "text",
                reason: format!("expected a string, got {}", json_kind(&other)),
            }),
            (ContentType::Table, v) => DataFrame::from_json(&v)
                .map(Content::Table)
                .map_err(|e| CoreError::PayloadMismatch {
                    expected: "table",
                    reason: e.to_string(),
                }),
            (ContentType::Chart, _) => Err(CoreError::PayloadMismatch {
                expected: "chart",
                reason: "charts must be supplied as a rendered figure".to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<DataFrame> for Content {
    fn from(frame: DataFrame) -> Self {
        Content::Table(frame)
    }
}

impl From<Arc<dyn Figure>> for Content {
    fn from(figure: Arc<dyn Figure>) -> Self {
        Content::Chart(figure)
    }
}

/// One unit of content appended to a document, with its heading and layout hints.
#[derive(Debug, Clone)]
pub struct SectionDescriptor {
    content: Content,
    header: Option<String>,
    description: String,
    style_options: StyleOptions,
    page_break_before: bool,
    orientation: Orientation,
}

impl SectionDescriptor {
    /// Content type follows from the payload variant.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            header: None,
            description: String::new(),
            style_options: StyleOptions::default(),
            page_break_before: false,
            orientation: Orientation::default(),
        }
    }

    /// Build from untyped data with an optional explicit content type.
    ///
    /// The type string is validated first; when absent the type is inferred
    /// from the shape of `value`.
    pub fn from_value(value: Value, content_type: Option<&str>) -> Result<Self, CoreError> {
        let content = match content_type {
            Some(tag) => Content::coerce(value, tag.parse()?)?,
            None => Content::infer(value)?,
        };
        Ok(Self::new(content))
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn style_options(mut self, options: StyleOptions) -> Self {
        self.style_options = options;
        self
    }

    pub fn page_break_before(mut self, page_break: bool) -> Self {
        self.page_break_before = page_break;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn description_text(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &StyleOptions {
        &self.style_options
    }

    pub fn breaks_page(&self) -> bool {
        self.page_break_before
    }

    pub fn page_orientation(&self) -> Orientation {
        self.orientation
    }
}

pub fn text_section(text: impl Into<String>) -> SectionDescriptor {
    SectionDescriptor::new(Content::Text(text.into()))
}

pub fn table_section(frame: DataFrame) -> SectionDescriptor {
    SectionDescriptor::new(Content::Table(frame))
}

pub fn chart_section(figure: impl Figure + 'static) -> SectionDescriptor {
    SectionDescriptor::new(Content::Chart(Arc::new(figure)))
}
