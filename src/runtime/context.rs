use std::path::Path;

use crate::display::DisplayConfig;
use crate::model::LoadedImage;

use super::{
    CommandReport, CommandStep, Dispatcher, ImageStore, ParamPrompt, PendingCommand, Result,
};

/// One editing session: its image store plus the dispatcher acting on it.
#[derive(Debug, Default)]
pub struct AppContext {
    store: ImageStore,
    dispatcher: Dispatcher,
    display: DisplayConfig,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ImageStore {
        &mut self.store
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<&LoadedImage> {
        self.store.load_primary(path)
    }

    pub fn open_second(&mut self, path: impl AsRef<Path>) -> Result<&LoadedImage> {
        self.store.load_second(path)
    }

    pub fn start_command(&mut self, id: &str) -> Result<CommandStep> {
        self.dispatcher.start(&mut self.store, id)
    }

    pub fn resume_command(
        &mut self,
        pending: PendingCommand,
        answer: Option<&str>,
    ) -> Result<CommandReport> {
        self.dispatcher.resume(&mut self.store, pending, answer)
    }

    pub fn run_command(&mut self, id: &str, prompt: &mut dyn ParamPrompt) -> Result<CommandReport> {
        self.dispatcher.run(&mut self.store, id, prompt)
    }
}
