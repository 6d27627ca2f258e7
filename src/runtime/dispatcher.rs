use crate::commands::{
    Histogram, InvalidParameter, OpInputs, OpOutput, OpsError, ParamSpec,
};
use serde_json::{Map, Value};

use super::{
    AppError, COMMANDS, CommandInput, CommandSpec, ImageStore, OpsService, Result, find_command,
};

/// Source of answers for parameter prompts.
pub trait ParamPrompt {
    /// Returns the raw text entered for `param`, or `None` when cancelled.
    fn ask(&mut self, command: &CommandSpec, param: &ParamSpec) -> Option<String>;
}

/// Answers every prompt with the same text, or with the parameter default.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswer(pub Option<String>);

impl ParamPrompt for PresetAnswer {
    fn ask(&mut self, _command: &CommandSpec, param: &ParamSpec) -> Option<String> {
        Some(
            self.0
                .clone()
                .unwrap_or_else(|| param.default.to_string()),
        )
    }
}

/// A command whose preconditions held and which now waits for its parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommand {
    command: &'static CommandSpec,
    param: ParamSpec,
}

impl PendingCommand {
    pub fn command(&self) -> &'static CommandSpec {
        self.command
    }

    pub fn param(&self) -> &ParamSpec {
        &self.param
    }

    pub fn prompt_text(&self) -> String {
        format!(
            "{} [{}-{}, default {}]",
            self.param.description, self.param.min, self.param.max, self.param.default
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandEffect {
    /// `processed` was replaced.
    Processed,
    /// Nothing was stored; the histogram is for display only.
    Histogram(Histogram),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandReport {
    pub command: &'static str,
    pub status: String,
    pub warnings: Vec<InvalidParameter>,
    pub effect: CommandEffect,
}

#[derive(Debug, Clone)]
pub enum CommandStep {
    NeedsParameter(PendingCommand),
    Finished(CommandReport),
}

/// Runs table-driven commands against an [`ImageStore`].
///
/// A command either fails before touching the store or ends with exactly one
/// operation call whose image result replaces `processed`.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    ops: OpsService,
}

impl Dispatcher {
    pub fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    /// Checks preconditions, then either runs the command or asks for its
    /// parameter.
    pub fn start(&self, store: &mut ImageStore, id: &str) -> Result<CommandStep> {
        let command = find_command(id).ok_or_else(|| AppError::UnknownCommand(id.to_string()))?;
        check_input(store, command)?;
        match self.prompt_param(command)? {
            Some(param) => Ok(CommandStep::NeedsParameter(PendingCommand { command, param })),
            None => self
                .execute(store, command, None, Vec::new())
                .map(CommandStep::Finished),
        }
    }

    /// Completes a pending command; `None` means the prompt was cancelled.
    pub fn resume(
        &self,
        store: &mut ImageStore,
        pending: PendingCommand,
        answer: Option<&str>,
    ) -> Result<CommandReport> {
        let PendingCommand { command, param } = pending;
        let Some(answer) = answer else {
            log::info!("{} cancelled at prompt", command.id);
            return Ok(CommandReport {
                command: command.id,
                status: format!("{} cancelled", command.label),
                warnings: Vec::new(),
                effect: CommandEffect::Cancelled,
            });
        };

        check_input(store, command)?;
        let (value, warning) = param.resolve_text(answer);
        if let Some(warning) = &warning {
            log::warn!("{}: {warning}", command.id);
        }
        self.execute(
            store,
            command,
            Some((param.name.as_str(), value)),
            warning.into_iter().collect(),
        )
    }

    /// `start` and `resume` in one call, for prompts that answer synchronously.
    pub fn run(
        &self,
        store: &mut ImageStore,
        id: &str,
        prompt: &mut dyn ParamPrompt,
    ) -> Result<CommandReport> {
        match self.start(store, id)? {
            CommandStep::Finished(report) => Ok(report),
            CommandStep::NeedsParameter(pending) => {
                let answer = prompt.ask(pending.command(), pending.param());
                self.resume(store, pending, answer.as_deref())
            }
        }
    }

    pub fn prompt_param(&self, command: &CommandSpec) -> Result<Option<ParamSpec>> {
        let Some(name) = command.prompt else {
            return Ok(None);
        };
        let schema = self
            .ops
            .schema(command.op)
            .ok_or_else(|| OpsError::UnknownOperation(command.op.to_string()))?;
        let param = schema
            .params
            .into_iter()
            .find(|param| param.name == name)
            .ok_or_else(|| {
                OpsError::InvalidParams(format!(
                    "operation `{}` has no parameter `{name}`",
                    command.op
                ))
            })?;
        Ok(Some(param))
    }

    fn execute(
        &self,
        store: &mut ImageStore,
        command: &'static CommandSpec,
        param: Option<(&str, i64)>,
        warnings: Vec<InvalidParameter>,
    ) -> Result<CommandReport> {
        let mut params = Map::new();
        if let Some((name, value)) = param {
            params.insert(name.to_string(), Value::from(value));
        }
        let params = Value::Object(params);

        let output = match command.input {
            CommandInput::Primary => {
                let original = store.require_primary()?;
                self.ops
                    .execute(command.op, OpInputs::Single(original), &params)?
            }
            CommandInput::Pair => {
                let (original, second) = store.require_pair()?;
                self.ops
                    .execute(command.op, OpInputs::Pair(original, second), &params)?
            }
        };

        let effect = match output {
            OpOutput::Image(image) => {
                store.set_processed(image);
                CommandEffect::Processed
            }
            OpOutput::Histogram(histogram) => CommandEffect::Histogram(histogram),
        };
        let status = command.status_message(param.map(|(_, value)| value));
        log::info!("{}: {status}", command.id);
        Ok(CommandReport {
            command: command.id,
            status,
            warnings,
            effect,
        })
    }
}

fn check_input(store: &ImageStore, command: &CommandSpec) -> Result<()> {
    match command.input {
        CommandInput::Primary => {
            store.require_primary()?;
        }
        CommandInput::Pair => {
            store.require_pair()?;
        }
    }
    Ok(())
}
