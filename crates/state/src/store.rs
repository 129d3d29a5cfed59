use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use printpanel_ticket::{AppState, Margins, MarginsType};
use thiserror::Error;

use crate::saved::SavedTicket;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read ticket state {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse ticket state {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize ticket state {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write ticket state {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// JSON-file-backed implementation of [`AppState`].
///
/// The ticket store's persist calls mutate the in-memory copy and mark it
/// dirty; the host decides when to [`flush`](Self::flush) and owns any I/O
/// error, so a failing disk never surfaces inside an update call.
#[derive(Debug)]
pub struct TicketStateStore {
    path: PathBuf,
    data: SavedTicket,
    dirty: bool,
}

impl TicketStateStore {
    /// Loads saved ticket state, falling back to defaults when the file does
    /// not exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: SavedTicket::default(),
                dirty: false,
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| StateError::Read {
            path: path.clone(),
            source,
        })?;
        let mut data: SavedTicket =
            serde_json::from_str(&contents).map_err(|source| StateError::Parse {
                path: path.clone(),
                source,
            })?;
        data.sanitize();
        Ok(Self {
            path,
            data,
            dirty: false,
        })
    }

    pub fn saved(&self) -> &SavedTicket {
        &self.data
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether persisted values changed since the last successful write.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes buffered changes, if any.
    pub fn flush(&mut self) -> Result<(), StateError> {
        if self.dirty {
            self.save()?;
            self.dirty = false;
        }
        Ok(())
    }

    /// Serializes the state to disk through a temp file and rename.
    pub fn save(&self) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StateError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload =
            serde_json::to_string_pretty(&self.data).map_err(|source| StateError::Serialize {
                path: self.path.clone(),
                source,
            })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| StateError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StateError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn record<F: FnOnce(&mut SavedTicket)>(&mut self, op: F) {
        op(&mut self.data);
        self.dirty = true;
    }
}

impl AppState for TicketStateStore {
    fn margins_type(&self) -> MarginsType {
        self.data.margins_type.unwrap_or_default()
    }

    fn custom_margins(&self) -> Option<Margins> {
        self.data.custom_margins
    }

    fn is_color_enabled(&self) -> Option<bool> {
        self.data.is_color_enabled
    }

    fn is_duplex_enabled(&self) -> Option<bool> {
        self.data.is_duplex_enabled
    }

    fn is_collate_enabled(&self) -> Option<bool> {
        self.data.is_collate_enabled
    }

    fn is_header_footer_enabled(&self) -> bool {
        self.data.is_header_footer_enabled.unwrap_or(true)
    }

    fn is_landscape_enabled(&self) -> bool {
        self.data.is_landscape_enabled.unwrap_or(false)
    }

    fn is_css_background_enabled(&self) -> bool {
        self.data.is_css_background_enabled.unwrap_or(false)
    }

    fn persist_margins_type(&mut self, margins_type: MarginsType) {
        self.record(|data| data.margins_type = Some(margins_type));
    }

    fn persist_custom_margins(&mut self, margins: Option<Margins>) {
        self.record(|data| data.custom_margins = margins);
    }

    fn persist_is_color_enabled(&mut self, enabled: bool) {
        self.record(|data| data.is_color_enabled = Some(enabled));
    }

    fn persist_is_duplex_enabled(&mut self, enabled: bool) {
        self.record(|data| data.is_duplex_enabled = Some(enabled));
    }

    fn persist_is_collate_enabled(&mut self, enabled: bool) {
        self.record(|data| data.is_collate_enabled = Some(enabled));
    }

    fn persist_is_header_footer_enabled(&mut self, enabled: bool) {
        self.record(|data| data.is_header_footer_enabled = Some(enabled));
    }

    fn persist_is_landscape_enabled(&mut self, enabled: bool) {
        self.record(|data| data.is_landscape_enabled = Some(enabled));
    }

    fn persist_is_css_background_enabled(&mut self, enabled: bool) {
        self.record(|data| data.is_css_background_enabled = Some(enabled));
    }
}
