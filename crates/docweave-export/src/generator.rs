use std::path::{Path, PathBuf};

use docweave_core::{Content, Figure, RenderRequest, SectionDescriptor, Theme, VisualizationSettings};

use crate::config::GeneratorConfig;
use crate::display::{section_blocks, DisplaySurface};
use crate::docx::{DocumentMetadata, DocxDocument, HEADING1_STYLE};
use crate::error::ExportError;
use crate::format::table_grid;
use crate::styles::DocumentStyles;

/// Per-call settings for [`DocumentGenerator::generate_document`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Falls back to the generator's default filename.
    pub output_filename: Option<String>,
    /// Falls back to the generator's default subdirectory, then the base directory.
    pub subdirectory: Option<String>,
    /// Only used when a new document is created.
    pub title: Option<String>,
    pub author: Option<String>,
    /// Start from an empty document even if the target file exists.
    pub create_new: bool,
}

impl GenerateOptions {
    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.output_filename = Some(name.into());
        self
    }

    pub fn subdirectory(mut self, dir: impl Into<String>) -> Self {
        self.subdirectory = Some(dir.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn create_new(mut self, create_new: bool) -> Self {
        self.create_new = create_new;
        self
    }
}

/// Turns ordered sections into a DOCX file.
///
/// Each call to [`generate_document`](Self::generate_document) is independent:
/// the target file is either created or loaded, extended, and written back.
/// Concurrent calls against the same file are not coordinated.
pub struct DocumentGenerator {
    theme: Theme,
    viz_settings: VisualizationSettings,
    output_dir: PathBuf,
    default_subdirectory: Option<String>,
    default_filename: Option<String>,
    display_output: bool,
    display: Option<Box<dyn DisplaySurface>>,
}

impl DocumentGenerator {
    /// Resolves the output directory and creates it (and the default
    /// subdirectory, if any) immediately.
    pub fn new(config: GeneratorConfig) -> Result<Self, ExportError> {
        let cwd = std::env::current_dir()?;
        let output_dir = match config.output_dir {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => cwd.join(dir),
            None => cwd,
        };

        std::fs::create_dir_all(&output_dir)?;
        if let Some(sub) = &config.default_subdirectory {
            std::fs::create_dir_all(output_dir.join(sub))?;
        }

        Ok(Self {
            theme: config.theme,
            viz_settings: config.viz_settings,
            output_dir,
            default_subdirectory: config.default_subdirectory,
            default_filename: config.default_filename,
            display_output: config.display_output,
            display: None,
        })
    }

    /// Attach a surface that sections are mirrored to while generating.
    pub fn with_display(mut self, surface: impl DisplaySurface + 'static) -> Self {
        self.display = Some(Box::new(surface));
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn viz_settings(&self) -> &VisualizationSettings {
        &self.viz_settings
    }

    /// Write `sections` to the resolved target, creating or extending it.
    ///
    /// Returns the path of the saved document. Errors are logged and
    /// returned as-is; a failure before the final save leaves any existing
    /// file untouched.
    pub fn generate_document(
        &mut self,
        sections: &[SectionDescriptor],
        options: &GenerateOptions,
    ) -> Result<PathBuf, ExportError> {
        self.try_generate(sections, options).inspect_err(|e| {
            tracing::error!(error = %e, "error generating document");
        })
    }

    fn try_generate(
        &mut self,
        sections: &[SectionDescriptor],
        options: &GenerateOptions,
    ) -> Result<PathBuf, ExportError> {
        let filename = options
            .output_filename
            .as_deref()
            .or(self.default_filename.as_deref())
            .ok_or(ExportError::MissingFilename)?;

        let final_dir = match options
            .subdirectory
            .as_deref()
            .or(self.default_subdirectory.as_deref())
        {
            Some(sub) => {
                let dir = self.output_dir.join(sub);
                std::fs::create_dir_all(&dir)?;
                dir
            }
            None => self.output_dir.clone(),
        };
        let output_path = final_dir.join(filename);

        let styles = DocumentStyles::from_theme(&self.theme);
        let mut doc = if options.create_new || !output_path.exists() {
            tracing::info!(path = %output_path.display(), "creating new document");
            let mut doc = DocxDocument::new(styles);
            if let Some(title) = &options.title {
                self.write_title_block(&mut doc, title, options.author.as_deref());
            }
            doc
        } else {
            tracing::info!(path = %output_path.display(), "updating existing document");
            DocxDocument::open(&output_path, styles)?
        };

        if self.display_output && self.display.is_none() && !sections.is_empty() {
            tracing::warn!("display surface not available - skipping display");
        }

        for section in sections {
            self.add_section(&mut doc, section)?;
        }

        doc.save(&output_path)?;
        tracing::info!(path = %output_path.display(), sections = sections.len(), "document saved");

        Ok(output_path)
    }

    fn write_title_block(&self, doc: &mut DocxDocument, title: &str, author: Option<&str>) {
        let now = jiff::Zoned::now();
        doc.set_metadata(&DocumentMetadata {
            title: title.to_string(),
            author: author.map(str::to_string),
            created: now.timestamp(),
        });

        doc.add_centered(title, Some(self.theme.heading1_size()));
        doc.add_centered(&format!("Generated on: {}", now.strftime("%B %d, %Y")), None);
        if let Some(author) = author {
            doc.add_centered(&format!("Author: {author}"), None);
        }
        doc.add_page_break();
    }

    fn add_section(
        &mut self,
        doc: &mut DocxDocument,
        section: &SectionDescriptor,
    ) -> Result<(), ExportError> {
        if self.display_output {
            if let Some(surface) = self.display.as_mut() {
                for block in section_blocks(section) {
                    surface.show(&block)?;
                }
            }
        }

        if section.breaks_page() {
            doc.add_page_break();
        }
        if let Some(header) = section.header_text() {
            doc.add_heading(header, HEADING1_STYLE);
        }
        if !section.description_text().is_empty() {
            doc.add_text(section.description_text());
        }

        match section.content() {
            Content::Text(text) => doc.add_text(text),
            Content::Table(frame) => {
                doc.add_table(&table_grid(frame, section.options().include_index));
            }
            Content::Chart(figure) => self.add_chart(doc, figure.as_ref(), section.options().width)?,
        }

        Ok(())
    }

    fn add_chart(
        &self,
        doc: &mut DocxDocument,
        figure: &dyn Figure,
        width_in: f64,
    ) -> Result<(), ExportError> {
        let size = figure.size_inches().unwrap_or(self.viz_settings.figure_size);
        let request = RenderRequest {
            tight: true,
            ..RenderRequest::new(size, self.viz_settings.dpi)
        };

        let image = figure.render_png(&request).inspect_err(|e| {
            tracing::error!(error = %e, "error adding chart to document");
        })?;
        tracing::debug!(
            width_px = image.width_px,
            height_px = image.height_px,
            width_in,
            "embedding chart"
        );
        doc.add_picture(&image, width_in);

        Ok(())
    }
}
