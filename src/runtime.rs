mod context;
mod dispatcher;
mod error;
mod ops_service;
mod store;
mod table;


pub use context::AppContext;
pub use dispatcher::{
    CommandEffect, CommandReport, CommandStep, Dispatcher, ParamPrompt, PendingCommand,
    PresetAnswer,
};
pub use error::{AppError, PreconditionError, Result};
pub use ops_service::OpsService;
pub use store::{ImageStore, Slot, StoreState};
pub use table::{COMMANDS, CommandGroup, CommandInput, CommandSpec, find_command};
