//! The attract mode effect list and the device mode commands.
//!
//! The effect list is read once from the `luminescenceAttractCommands`
//! resource. A resource that is missing or can't be decoded is logged and
//! results in an empty catalog, so the mode commands stay usable whatever the
//! state of the effect list.

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::commands::{to_payload, CommandEntry, CommandPayload, ModeCommand};
use crate::error::{Error, Result};

/// Logical name of the effect list resource, without extension
pub const RESOURCE_NAME: &str = "luminescenceAttractCommands";
/// Extensions tried, in order, when resolving [`RESOURCE_NAME`] in a directory
pub const RESOURCE_EXTENSIONS: [&str; 2] = ["ron", "json"];

const BUNDLED_RESOURCE: &str = include_str!("../data/luminescenceAttractCommands.ron");

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    entries: Vec<CommandEntry>,
    /// Kept in step with `entries`
    names: Vec<String>,
}

impl CommandCatalog {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        let names = entries.iter().map(|e| e.name.clone()).collect();
        Self { entries, names }
    }

    /// The effect list compiled in to this crate
    pub fn bundled() -> Self {
        Self::from_ron(BUNDLED_RESOURCE)
    }

    /// Find [`RESOURCE_NAME`] in `dir` and load it. If no file with a known
    /// extension exists the catalog is empty.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        for ext in RESOURCE_EXTENSIONS {
            let path = dir.join(RESOURCE_NAME).with_extension(ext);
            if path.exists() {
                debug!("Resolved {RESOURCE_NAME} to {path:?}");
                return Self::from_path(path);
            }
        }
        error!("{RESOURCE_NAME} not found in {dir:?}, no effects loaded");
        Self::default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::try_from_path(path).unwrap_or_else(|e| {
            error!("Could not load effect list: {e}");
            Self::default()
        })
    }

    pub fn from_ron(text: &str) -> Self {
        Self::try_from_ron(text).unwrap_or_else(|e| {
            error!("Could not load effect list: {e}");
            Self::default()
        })
    }

    pub fn from_json(text: &str) -> Self {
        Self::try_from_json(text).unwrap_or_else(|e| {
            error!("Could not load effect list: {e}");
            Self::default()
        })
    }

    /// Read and decode a file, picking the format by extension. Files with
    /// any other extension are tried as RON and then as JSON.
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let buf = std::fs::read_to_string(path)
            .map_err(|e| Error::IoPath(path.to_string_lossy().to_string(), e))?;
        if buf.trim().is_empty() {
            warn!("File is empty {path:?}");
        }

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::try_from_ron(&buf)?,
            Some("json") => Self::try_from_json(&buf)?,
            _ => match Self::try_from_ron(&buf) {
                Ok(data) => data,
                Err(ron_err) => {
                    debug!("{path:?} is not RON ({ron_err}), trying JSON");
                    Self::try_from_json(&buf)?
                }
            },
        };
        info!("Loaded {} effects from {path:?}", catalog.count());
        Ok(catalog)
    }

    pub fn try_from_ron(text: &str) -> Result<Self> {
        let entries: Vec<CommandEntry> = ron::from_str(text)?;
        Ok(Self::new(entries))
    }

    pub fn try_from_json(text: &str) -> Result<Self> {
        let entries: Vec<CommandEntry> = serde_json::from_str(text)?;
        Ok(Self::new(entries))
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effect names in load order
    pub fn all_names(&self) -> &[String] {
        &self.names
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandEntry> {
        self.entries.iter()
    }

    pub fn entry_at(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.name.as_str())
    }

    pub fn code_at(&self, index: usize) -> Option<u8> {
        self.entries.get(index).map(|e| e.code)
    }

    /// Exact match on the effect name. Names aren't required to be unique, the
    /// first entry wins.
    pub fn code_for_name(&self, name: &str) -> Option<u8> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.code)
    }

    pub fn payload_at(&self, index: usize) -> Option<CommandPayload> {
        self.code_at(index).map(to_payload)
    }

    pub fn payload_for_name(&self, name: &str) -> Option<CommandPayload> {
        self.code_for_name(name).map(to_payload)
    }

    /// Hold the white LEDs on for use as a flash
    #[inline]
    pub const fn flash_on_command() -> u8 {
        ModeCommand::FlashOn.code()
    }

    #[inline]
    pub const fn start_interact_command() -> u8 {
        ModeCommand::StartInteract.code()
    }

    /// Stays in effect until the next command, usually a return to attract
    /// mode
    #[inline]
    pub const fn start_data_collect_command() -> u8 {
        ModeCommand::StartDataCollect.code()
    }
}

impl<'a> IntoIterator for &'a CommandCatalog {
    type IntoIter = std::slice::Iter<'a, CommandEntry>;
    type Item = &'a CommandEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<CommandEntry>> for CommandCatalog {
    fn from(entries: Vec<CommandEntry>) -> Self {
        Self::new(entries)
    }
}

/// Path that [`CommandCatalog::load`] would try first for `dir`
pub fn resource_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref()
        .join(RESOURCE_NAME)
        .with_extension(RESOURCE_EXTENSIONS[0])
}
