use clap::Parser;

use super::runner::command_entries;
use super::types::{Cli, Commands, OpsCommand};
use crate::runtime::Dispatcher;

#[test]
fn ops_list_accepts_raw_flag() {
    let cli = Cli::try_parse_from(["citra", "ops", "list", "--raw"]).expect("parse");
    assert!(matches!(
        cli.command,
        Commands::Ops {
            command: OpsCommand::List { raw: true }
        }
    ));

    let cli = Cli::try_parse_from(["citra", "ops", "list"]).expect("parse");
    assert!(matches!(
        cli.command,
        Commands::Ops {
            command: OpsCommand::List { raw: false }
        }
    ));
}

#[test]
fn command_listing_carries_prompt_parameters() {
    let dispatcher = Dispatcher::default();
    let entries = command_entries(&dispatcher).expect("entries");
    assert_eq!(entries.len(), dispatcher.commands().len());

    let edges = entries
        .iter()
        .find(|entry| entry.command.id == "edges")
        .expect("edges entry");
    let parameter = edges.parameter.as_ref().expect("edges prompts");
    assert_eq!(parameter.name, "low");
    assert_eq!(parameter.default, 100);

    let grayscale = entries
        .iter()
        .find(|entry| entry.command.id == "grayscale")
        .expect("grayscale entry");
    assert!(grayscale.parameter.is_none());
}
