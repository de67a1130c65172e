use crate::slot::{DraftSlot, Result};
use pardoc_record::{default_record, ParPatch, ParRecord};
use pardoc_types::Locale;
use serde::{Deserialize, Serialize};

/// UI preferences riding along with the draft. Not persisted with the
/// record; the front end owns their lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Prefs {
    pub locale: Locale,
    pub dark_mode: bool,
}

/// The process-wide draft state: current record, dirty flag, preferences.
pub struct DraftStore<S: DraftSlot> {
    record: ParRecord,
    dirty: bool,
    prefs: Prefs,
    slot: S,
}

impl<S: DraftSlot> DraftStore<S> {
    /// Starts from the seeded default record.
    pub fn new(slot: S) -> Self {
        Self { record: default_record(), dirty: false, prefs: Prefs::default(), slot }
    }

    pub fn record(&self) -> &ParRecord {
        &self.record
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn prefs(&self) -> Prefs {
        self.prefs
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.prefs.locale = locale;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
    }

    /// Applies one typed field update and marks the draft dirty.
    pub fn apply(&mut self, patch: ParPatch) {
        patch.apply(&mut self.record);
        self.dirty = true;
    }

    /// Replaces the whole record (a successful import). The new record
    /// has not been saved yet, so the draft becomes dirty.
    pub fn replace(&mut self, record: ParRecord) {
        self.record = record;
        self.dirty = true;
    }

    /// Persists the full record into the slot and clears the dirty flag.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.record)?;
        self.slot.write(&json)?;
        self.dirty = false;
        Ok(())
    }

    /// Loads the persisted draft, replacing the in-memory record when the
    /// slot holds a parseable one. An absent or corrupt slot leaves the
    /// current record in place and reports `false`.
    pub fn load(&mut self) -> Result<bool> {
        let Some(contents) = self.slot.read()? else {
            return Ok(false);
        };
        match serde_json::from_str::<ParRecord>(&contents) {
            Ok(record) => {
                self.record = record;
                self.dirty = false;
                Ok(true)
            }
            Err(e) => {
                log::warn!("ignoring corrupt draft: {e}");
                Ok(false)
            }
        }
    }

    /// Removes the persisted slot. The in-memory record stays.
    pub fn clear(&mut self) -> Result<()> {
        self.slot.clear()?;
        self.dirty = false;
        Ok(())
    }

    /// Back to the seeded defaults, with the persisted slot removed.
    pub fn reset(&mut self) -> Result<()> {
        self.record = default_record();
        self.clear()
    }
}
