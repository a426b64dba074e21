//! Persisted reader settings abstraction.
//!
//! Reading position and preferences survive restarts through whatever
//! store the platform provides; the engine itself never touches
//! persistence.

/// User-tunable pacing settings that should survive restarts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderSettings {
    pub wpm: u16,
    pub autostart: bool,
}

impl ReaderSettings {
    pub const fn new(wpm: u16, autostart: bool) -> Self {
        Self { wpm, autostart }
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<ReaderSettings>, Self::Error>;
    fn save(&mut self, settings: &ReaderSettings) -> Result<(), Self::Error>;
}

/// Volatile store for tests and host demos.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    current: Option<ReaderSettings>,
}

impl SettingsStore for MemorySettingsStore {
    type Error = core::convert::Infallible;

    fn load(&mut self) -> Result<Option<ReaderSettings>, Self::Error> {
        Ok(self.current)
    }

    fn save(&mut self, settings: &ReaderSettings) -> Result<(), Self::Error> {
        self.current = Some(*settings);
        Ok(())
    }
}
