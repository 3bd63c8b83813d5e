use adrz::api::{AdrzApi, CmdMessage, MessageLevel};
use adrz::error::{AdrzError, Result};
use adrz::paths::AdrPaths;
use clap::Parser;
use colored::*;

mod args;
use args::{Cli, Commands};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    let api = match AdrPaths::resolve() {
        Ok(paths) => AdrzApi::new(paths),
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return 1;
        }
    };

    let outcome = match cli.command {
        // Words are concatenated with no separator to form the record name.
        Some(Commands::Create { name }) => api.create_record(&name.concat()),
        Some(Commands::Regen) => api.regen(),
        Some(Commands::External(raw)) => {
            let token = raw.first().map(String::as_str).unwrap_or("");
            return unknown_command(&api, token);
        }
        None => return unknown_command(&api, ""),
    };

    report(outcome)
}

fn report(outcome: Result<adrz::api::CmdResult>) -> i32 {
    match outcome {
        Ok(result) => {
            print_messages(&result.messages);
            0
        }
        Err(AdrzError::Usage(msg)) => {
            eprintln!("{}", msg);
            1
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            1
        }
    }
}

fn unknown_command(api: &AdrzApi, token: &str) -> i32 {
    eprintln!("Unknown command '{}'.", token);
    match api.help_text() {
        Ok(help) => eprint!("{}", help),
        Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
    }
    1
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
