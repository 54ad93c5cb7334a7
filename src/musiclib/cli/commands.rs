use super::print::{print_messages, print_search_results, print_stats};
use super::repl::ReplCommand;
use super::setup::{init_logging, Cli};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use musiclib::api::MusicLibraryApi;
use musiclib::config::LibraryConfig;
use musiclib::error::Result;
use musiclib::store::memory::InMemoryStore;
use std::io::{self, BufRead};
use std::path::PathBuf;

struct AppContext {
    api: MusicLibraryApi<InMemoryStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    run_session(&mut ctx, stdin.lock(), &cli.files)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let config = match &config_dir {
        Some(dir) => LibraryConfig::load(dir)?,
        None => LibraryConfig::default(),
    };
    tracing::debug!("Config dir {:?}: {:?}", config_dir, config);

    Ok(AppContext {
        api: MusicLibraryApi::new(InMemoryStore::new(), config),
    })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "musiclib", "musiclib").map(|dirs| dirs.config_dir().to_path_buf())
}

fn run_session<R: BufRead>(ctx: &mut AppContext, mut input: R, preload: &[String]) -> Result<()> {
    println!("Welcome to the Music Library App");
    println!("--------------------------------");

    for file in preload {
        report(handle_load(ctx, file));
    }

    loop {
        println!();
        println!("Enter a command (help for help): ");

        // Bytes, not read_line: a stray non-UTF-8 byte must not end the session.
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        println!();

        let line = String::from_utf8_lossy(&buf);
        let command = ReplCommand::parse(&line);
        if command == ReplCommand::Exit {
            break;
        }
        report(dispatch(ctx, command));
    }

    println!("Thank you for using the Music Library App");
    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: ReplCommand) -> Result<()> {
    match command {
        ReplCommand::Help => handle_help(ctx),
        ReplCommand::Clear => handle_clear(ctx),
        ReplCommand::Export(filename) => handle_export(ctx, &filename),
        ReplCommand::Load(filename) => handle_load(ctx, &filename),
        ReplCommand::Stats { detailed } => handle_stats(ctx, detailed),
        ReplCommand::Search(query) => handle_search(ctx, &query),
        ReplCommand::Unknown(word) => {
            tracing::debug!("Ignoring unknown command '{}'", word);
            Ok(())
        }
        ReplCommand::Exit => Ok(()),
    }
}

// A failed command never ends the session.
fn report(outcome: Result<()>) {
    if let Err(e) = outcome {
        tracing::debug!("Command failed: {:?}", e);
        println!("{}", format!("Error: {}", e).red());
    }
}

fn handle_help(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.help()?;
    if let Some(text) = &result.help_text {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, filename: &str) -> Result<()> {
    let result = ctx.api.export(filename)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_load(ctx: &mut AppContext, filename: &str) -> Result<()> {
    let result = ctx.api.load(filename)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext, detailed: bool) -> Result<()> {
    let result = ctx.api.stats(detailed)?;
    if let Some(stats) = &result.stats {
        print_stats(stats, &result.listed_albums, detailed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    print_messages(&result.messages);
    match &result.search_results {
        Some(titles) => print_search_results(titles),
        None => println!(),
    }
    Ok(())
}
