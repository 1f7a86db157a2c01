use std::io::Cursor;
use std::path::Path;

use docweave_core::RenderedImage;
use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, Paragraph, Pic, Run, RunFonts, Style, StyleType,
    Table, TableCell, TableRow,
};

use crate::error::ExportError;
use crate::format::TableGrid;
use crate::styles::DocumentStyles;

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

pub const HEADING1_STYLE: &str = "Heading1";

/// Title, author and creation time stamped on new documents.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: Option<String>,
    pub created: jiff::Timestamp,
}

/// An in-memory DOCX being assembled.
///
/// Content is appended in call order; nothing touches disk until
/// [`DocxDocument::save`].
pub struct DocxDocument {
    docx: Docx,
    styles: DocumentStyles,
}

impl DocxDocument {
    /// An empty document with the heading style registered, created now.
    pub fn new(styles: DocumentStyles) -> Self {
        let docx = Docx::new()
            .created_at(&w3c_datetime(jiff::Timestamp::now()))
            .add_style(heading_style(HEADING1_STYLE, "heading 1", styles.heading1_size, &styles));
        Self { docx, styles }
    }

    /// Load an existing document for extension.
    ///
    /// `read_docx` does not parse `docProps/core.xml`, so the original
    /// creation time is not carried over.
    pub fn open(path: &Path, styles: DocumentStyles) -> Result<Self, ExportError> {
        let bytes = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| ExportError::DocxRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { docx, styles })
    }

    fn update(&mut self, f: impl FnOnce(Docx) -> Docx) {
        self.docx = f(std::mem::take(&mut self.docx));
    }

    pub fn set_metadata(&mut self, meta: &DocumentMetadata) {
        let created = w3c_datetime(meta.created);
        let title = meta.title.clone();
        let author = meta.author.clone();
        self.update(|docx| {
            let docx = docx
                .created_at(&created)
                .updated_at(&created)
                .custom_property("title", title);
            match author {
                Some(author) => docx.custom_property("author", author),
                None => docx,
            }
        });
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.update(|docx| docx.add_paragraph(paragraph));
    }

    /// A body-styled paragraph holding `text` verbatim.
    pub fn add_text(&mut self, text: &str) {
        let paragraph = self.body_paragraph(AlignmentType::Left).add_run(self.body_run(text));
        self.add_paragraph(paragraph);
    }

    /// A centered line of body text; `bold_size` makes it a bold title at that point size.
    pub fn add_centered(&mut self, text: &str, bold_size: Option<usize>) {
        let run = match bold_size {
            Some(size) => self.body_run(text).size(size * 2).bold(),
            None => self.body_run(text),
        };
        let paragraph = self.body_paragraph(AlignmentType::Center).add_run(run);
        self.add_paragraph(paragraph);
    }

    pub fn add_heading(&mut self, text: &str, style_id: &str) {
        let paragraph = Paragraph::new().style(style_id).add_run(
            Run::new()
                .add_text(text)
                .fonts(RunFonts::new().ascii(&self.styles.heading_font)),
        );
        self.add_paragraph(paragraph);
    }

    pub fn add_page_break(&mut self) {
        self.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
    }

    /// A grid with a bold header row; every cell centered.
    pub fn add_table(&mut self, grid: &TableGrid) {
        let header = TableRow::new(
            grid.header
                .iter()
                .map(|name| self.centered_cell(self.body_run(name).bold()))
                .collect(),
        );

        let mut rows = Vec::with_capacity(grid.rows.len() + 1);
        rows.push(header);
        rows.extend(grid.rows.iter().map(|row| {
            TableRow::new(
                row.iter()
                    .map(|text| self.centered_cell(self.body_run(text)))
                    .collect(),
            )
        }));

        let table = Table::new(rows);
        self.update(|docx| docx.add_table(table));
    }

    /// Embed a PNG scaled to `width_in` inches, keeping its aspect ratio.
    pub fn add_picture(&mut self, image: &RenderedImage, width_in: f64) {
        let width_emu = (width_in * EMU_PER_INCH).round() as u32;
        let height_emu = (width_in * image.aspect_ratio() * EMU_PER_INCH).round() as u32;

        let pic = Pic::new(&image.png).size(width_emu, height_emu);
        let paragraph = Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_image(pic));
        self.add_paragraph(paragraph);
    }

    /// Pack the document, stamping the modification time.
    pub fn to_bytes(mut self) -> Result<Vec<u8>, ExportError> {
        let modified = w3c_datetime(jiff::Timestamp::now());
        self.update(|docx| docx.updated_at(&modified));

        let mut buf = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut buf)
            .map_err(|e| ExportError::Docx(e.to_string()))?;
        Ok(buf.into_inner())
    }

    pub fn save(self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn body_run(&self, text: &str) -> Run {
        Run::new()
            .add_text(text)
            .size(self.styles.body_size * 2) // OOXML uses half-points
            .color(&self.styles.color)
            .fonts(RunFonts::new().ascii(&self.styles.body_font))
    }

    fn body_paragraph(&self, align: AlignmentType) -> Paragraph {
        Paragraph::new().align(align).line_spacing(
            LineSpacing::new()
                .after(self.styles.space_after)
                .line(self.styles.line as _),
        )
    }

    fn centered_cell(&self, run: Run) -> TableCell {
        TableCell::new().add_paragraph(Paragraph::new().align(AlignmentType::Center).add_run(run))
    }
}

/// `2024-05-01T09:30:00Z`, the form `dcterms:created` and `dcterms:modified` carry.
fn w3c_datetime(ts: jiff::Timestamp) -> String {
    ts.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
        .bold()
        .color(&styles.color)
        .fonts(RunFonts::new().ascii(&styles.heading_font))
}
