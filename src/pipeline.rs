//! Snapshot-to-library import.
//!
//! Text recognition, citation extraction and the library upload are external
//! services. They are reached through the traits below, and [`Pipeline`] runs them
//! in order for a single captured image:
//!
//! 1. recognize text in the image
//! 2. extract a [`BibRecord`] from the text
//! 3. map the record to a [`ZoteroItem`]
//! 4. create the item in the library
//!
//! A failure in any step stops the run and is reported as
//! [`CitationError::Collaborator`] tagged with the step.

use crate::error::{CitationError, Stage};
use crate::record::BibRecord;
use crate::zotero::{CreateItemsResponse, ImportSummary, ZoteroItem, ZoteroMapper};
use crate::ItemMapper;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Turns an image into text.
pub trait TextRecognizer<Image> {
    type Error: Display;

    fn recognize(&self, image: &Image) -> Result<String, Self::Error>;
}

/// Finds the citation described by free text.
pub trait CitationExtractor {
    type Error: Display;

    fn extract(&self, text: &str) -> Result<BibRecord, Self::Error>;
}

/// Writes items to a reference library.
pub trait LibraryClient {
    type Error: Display;

    fn create_items(&self, items: &[ZoteroItem]) -> Result<CreateItemsResponse, Self::Error>;
}

/// Everything produced by one import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub record: BibRecord,
    pub item: ZoteroItem,
    pub summary: ImportSummary,
}

/// Sequential image → library import.
#[derive(Debug, Clone)]
pub struct Pipeline<R, E, C> {
    recognizer: R,
    extractor: E,
    client: C,
    mapper: ZoteroMapper,
}

impl<R, E, C> Pipeline<R, E, C>
where
    E: CitationExtractor,
    C: LibraryClient,
{
    pub fn new(recognizer: R, extractor: E, client: C) -> Self {
        Self {
            recognizer,
            extractor,
            client,
            mapper: ZoteroMapper::new(),
        }
    }

    /// Import the citation shown in `image`.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::Collaborator`] if a collaborator fails or the image
    /// contains no text.
    pub fn run<I>(&self, image: &I) -> Result<ImportReport, CitationError>
    where
        R: TextRecognizer<I>,
    {
        let text = self
            .recognizer
            .recognize(image)
            .map_err(|e| CitationError::collaborator(Stage::Recognition, e))?;
        if text.trim().is_empty() {
            return Err(CitationError::collaborator(
                Stage::Recognition,
                "no text found in image",
            ));
        }
        debug!(chars = text.len(), "recognized text");

        self.import_text(&text)
    }

    /// Like [`Pipeline::run`], for a capture that may have been cancelled.
    ///
    /// `None` (no region selected) is not an error and produces no report.
    pub fn run_capture<I>(&self, image: Option<I>) -> Result<Option<ImportReport>, CitationError>
    where
        R: TextRecognizer<I>,
    {
        match image {
            Some(image) => self.run(&image).map(Some),
            None => {
                info!("no region selected, nothing to import");
                Ok(None)
            }
        }
    }

    /// Run the steps after recognition on already available text.
    pub fn import_text(&self, text: &str) -> Result<ImportReport, CitationError> {
        let record = self
            .extractor
            .extract(text)
            .map_err(|e| CitationError::collaborator(Stage::Extraction, e))?;
        info!(cite_key = record.cite_key(), "extracted citation\n{}", record);

        let item = self.mapper.map(&record);
        let response = self
            .client
            .create_items(std::slice::from_ref(&item))
            .map_err(|e| CitationError::collaborator(Stage::Upload, e))?;

        let summary = response.summary();
        info!(
            created = summary.created,
            unchanged = summary.unchanged,
            failed = summary.failures.len(),
            "library write finished"
        );
        for failure in &summary.failures {
            warn!("{}", failure);
        }

        Ok(ImportReport {
            record,
            item,
            summary,
        })
    }
}
