use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::commands::list_operations;
use crate::formats::read_image;
use crate::runtime::{self, AppContext, CommandEffect, Dispatcher, PresetAnswer};

use super::types::{ApplyReport, Cli, CommandEntry, Commands, ImageInfo, OpsCommand};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => {
            let image = read_image(&input).map_err(|error| error.to_string())?;
            let info = ImageInfo {
                width: image.width(),
                height: image.height(),
                planes: image.plane_count().count(),
                source: image.source().map(|path| path.display().to_string()),
            };
            print_json(&info)?;
        }
        Commands::Ops { command } => match command {
            OpsCommand::List { raw: true } => print_json(&list_operations())?,
            OpsCommand::List { raw: false } => {
                let app = AppContext::new();
                print_json(&command_entries(app.dispatcher()).map_err(|error| error.to_string())?)?;
            }
        },
        Commands::Apply {
            input,
            second,
            command,
            param,
            output,
        } => {
            let report = apply(input, second, &command, param, output)?;
            print_json(&report)?;
        }
        Commands::View { input } => {
            crate::ui::run(input)?;
        }
    }

    Ok(())
}

pub(super) fn command_entries(dispatcher: &Dispatcher) -> runtime::Result<Vec<CommandEntry>> {
    dispatcher
        .commands()
        .iter()
        .map(|command| {
            Ok(CommandEntry {
                command,
                parameter: dispatcher.prompt_param(command)?,
            })
        })
        .collect()
}

fn apply(
    input: PathBuf,
    second: Option<PathBuf>,
    command: &str,
    param: Option<String>,
    output: Option<PathBuf>,
) -> Result<ApplyReport, String> {
    let mut app = AppContext::new();
    app.open(&input).map_err(|error| error.to_string())?;
    if let Some(second) = second {
        app.open_second(&second)
            .map_err(|error| error.to_string())?;
    }

    let report = app
        .run_command(command, &mut PresetAnswer(param))
        .map_err(|error| error.to_string())?;

    let histogram = match report.effect {
        CommandEffect::Histogram(histogram) => Some(histogram),
        CommandEffect::Processed | CommandEffect::Cancelled => None,
    };
    let output = match output {
        Some(path) if histogram.is_none() => {
            app.store()
                .save_processed(&path)
                .map_err(|error| error.to_string())?;
            Some(path.display().to_string())
        }
        Some(path) => {
            log::warn!(
                "{} produces no image; not writing {}",
                report.command,
                path.display()
            );
            None
        }
        None => None,
    };

    Ok(ApplyReport {
        command: report.command,
        status: report.status,
        warnings: report
            .warnings
            .iter()
            .map(|warning| warning.to_string())
            .collect(),
        histogram,
        output,
    })
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}
