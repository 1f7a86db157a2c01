//! Inline previews of sections as they are written.
//!
//! A notebook front end, a terminal, or a log can all act as a
//! [`DisplaySurface`]. The generator hands each section over as a short
//! sequence of [`DisplayBlock`]s.

use std::io::Write;
use std::sync::Arc;

use docweave_core::{Content, Figure, SectionDescriptor};
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::format::{table_grid, TableGrid};

/// Caption shown above previewed tables.
pub const TABLE_CAPTION: &str = "Data Table";

/// One renderable piece of a preview.
#[derive(Debug, Clone)]
pub enum DisplayBlock {
    Markdown(String),
    Html(String),
    Table { caption: String, grid: TableGrid },
    Figure(Arc<dyn Figure>),
}

/// Somewhere previews can be shown.
pub trait DisplaySurface {
    fn show(&mut self, block: &DisplayBlock) -> Result<(), ExportError>;
}

/// Blocks shown for a section: header, description, spacer, content, separator.
pub fn section_blocks(section: &SectionDescriptor) -> Vec<DisplayBlock> {
    let mut blocks = Vec::with_capacity(5);

    if let Some(header) = section.header_text() {
        blocks.push(DisplayBlock::Markdown(format!("## {header}")));
    }
    if !section.description_text().is_empty() {
        blocks.push(DisplayBlock::Markdown(format!("*{}*", section.description_text())));
    }
    blocks.push(DisplayBlock::Html("<br>".to_string()));

    blocks.push(match section.content() {
        Content::Text(text) => DisplayBlock::Markdown(text.clone()),
        Content::Table(frame) => DisplayBlock::Table {
            caption: TABLE_CAPTION.to_string(),
            grid: table_grid(frame, section.options().include_index),
        },
        Content::Chart(figure) => DisplayBlock::Figure(Arc::clone(figure)),
    });

    blocks.push(DisplayBlock::Html("<br><hr><br>".to_string()));
    blocks
}

const BLOCK_TEMPLATE_NAME: &str = "block.md";

const BLOCK_TEMPLATE: &str = r#"{% if kind == "table" -%}
**{{ caption }}**

| {{ header | join(sep=" | ") }} |
|{% for h in header %} --- |{% endfor %}
{% for row in rows -%}
| {{ row | join(sep=" | ") }} |
{% endfor -%}
{% elif kind == "figure" -%}
[figure: {{ title | default(value="untitled") }}]
{% else -%}
{{ text }}
{% endif -%}
"#;

/// Writes previews as Markdown to any writer.
pub struct MarkdownPreview<W: Write> {
    tera: Tera,
    out: W,
}

impl<W: Write> MarkdownPreview<W> {
    pub fn new(out: W) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(BLOCK_TEMPLATE_NAME, BLOCK_TEMPLATE)?;
        Ok(Self { tera, out })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, block: &DisplayBlock) -> Result<String, ExportError> {
        let mut context = Context::new();
        match block {
            DisplayBlock::Markdown(text) | DisplayBlock::Html(text) => {
                context.insert("kind", "text");
                context.insert("text", text);
            }
            DisplayBlock::Table { caption, grid } => {
                let escape = |cells: &[String]| -> Vec<String> {
                    cells.iter().map(|c| c.replace('|', "\\|")).collect()
                };
                let rows: Vec<Vec<String>> = grid.rows.iter().map(|r| escape(r.as_slice())).collect();
                context.insert("kind", "table");
                context.insert("caption", caption);
                context.insert("header", &escape(grid.header.as_slice()));
                context.insert("rows", &rows);
            }
            DisplayBlock::Figure(figure) => {
                context.insert("kind", "figure");
                if let Some(title) = figure.title() {
                    context.insert("title", title);
                }
            }
        }
        Ok(self.tera.render(BLOCK_TEMPLATE_NAME, &context)?)
    }
}

impl<W: Write> DisplaySurface for MarkdownPreview<W> {
    fn show(&mut self, block: &DisplayBlock) -> Result<(), ExportError> {
        let rendered = self.render(block)?;
        self.out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}
