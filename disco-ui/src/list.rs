//! List binding for the album list
//!
//! The rendering widget reads rows through [`ListDataSource`] and reports
//! interaction through [`ListDelegate`]. The list is flat: one section.

use crate::display_types::AlbumDisplay;
use crate::strings;

/// Row access for a single-section list widget
pub trait ListDataSource {
    fn number_of_sections(&self) -> usize {
        1
    }

    fn count(&self) -> usize;

    /// Record for row `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.count()`. The widget asked for a row the
    /// data source never reported, which is a bug on one side or the other.
    fn record_at(&self, index: usize) -> &AlbumDisplay;

    fn section_title(&self) -> &str;
}

/// Interaction callbacks from the list widget
pub trait ListDelegate {
    fn did_select_row(&mut self, index: usize);
}

/// Ordered albums currently shown by the screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlbumList {
    records: Vec<AlbumDisplay>,
}

impl AlbumList {
    pub fn new(records: Vec<AlbumDisplay>) -> Self {
        Self { records }
    }

    /// Replace every row. The list is never partially updated.
    pub fn replace(&mut self, records: Vec<AlbumDisplay>) {
        self.records = records;
    }
}

impl ListDataSource for AlbumList {
    fn count(&self) -> usize {
        self.records.len()
    }

    fn record_at(&self, index: usize) -> &AlbumDisplay {
        match self.records.get(index) {
            Some(record) => record,
            None => panic!(
                "album row {} requested but the list has {} rows",
                index,
                self.records.len()
            ),
        }
    }

    fn section_title(&self) -> &str {
        strings::ALBUMS_SECTION_TITLE
    }
}
