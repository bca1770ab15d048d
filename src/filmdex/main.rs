use clap::Parser;
use directories::ProjectDirs;
use filmdex::commands::{CmdMessage, ResultSet};
use filmdex::config::{FilmdexConfig, CONFIG_KEYS};
use filmdex::display::Renderer;
use filmdex::engine::CatalogEngine;
use filmdex::error::{FilmdexError, Result};
use filmdex::logging;
use filmdex::model::Attribute;
use filmdex::store::bundled::BundledSource;
use filmdex::store::fs::FileSource;
use filmdex::store::CatalogSource;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::info;

mod args;
mod render;
mod shell;

use args::{Cli, Commands, QueryArgs};
use render::{print_messages, TerminalRenderer};
use shell::{parse_line, ShellCommand, HELP};

const HOME_ENV: &str = "FILMDEX_HOME";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = resolve_config_dir()?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&config_dir, key, value),
        Some(Commands::List(query)) => handle_list(&mut init_engine(cli.data, &config_dir)?, query),
        Some(Commands::Search { term, mut query }) => {
            query.search = Some(term);
            handle_list(&mut init_engine(cli.data, &config_dir)?, query)
        }
        Some(Commands::Options { attribute }) => {
            handle_options(&mut init_engine(cli.data, &config_dir)?, &attribute)
        }
        Some(Commands::Shell) => handle_shell(&mut init_engine(cli.data, &config_dir)?),
        None => handle_list(
            &mut init_engine(cli.data, &config_dir)?,
            QueryArgs::default(),
        ),
    }
}

fn resolve_config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "filmdex", "filmdex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FilmdexError::Config("Could not determine config dir".into()))
}

fn init_engine(data: Option<PathBuf>, config_dir: &Path) -> Result<CatalogEngine> {
    let config = FilmdexConfig::load(config_dir)?;

    let source: Box<dyn CatalogSource> = match data.or_else(|| config.dataset.clone()) {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    };
    let movies = source.load()?;
    info!(source = %source.describe(), count = movies.len(), "catalog ready");

    Ok(CatalogEngine::with_config(movies, &config))
}

fn handle_list(engine: &mut CatalogEngine, query: QueryArgs) -> Result<()> {
    let mut messages: Vec<CmdMessage> = Vec::new();

    if let Some(view) = query.view {
        engine.set_view_mode(view);
    }
    if let Some(sort) = &query.sort {
        messages.extend(engine.apply_sort(sort).messages);
    }
    for director in &query.director {
        messages.extend(engine.toggle(Attribute::Director, director, true).messages);
    }
    for producer in &query.producer {
        messages.extend(engine.toggle(Attribute::Producer, producer, true).messages);
    }
    for spec in &query.filter {
        let Some((attribute, value)) = spec.split_once('=') else {
            return Err(FilmdexError::Api(format!(
                "Invalid filter '{}', expected ATTRIBUTE=VALUE",
                spec
            )));
        };
        messages.extend(engine.toggle_named(attribute.trim(), value.trim(), true).messages);
    }
    if let Some(term) = &query.search {
        messages.extend(engine.set_search_term(term).messages);
    }

    engine.publish(&mut TerminalRenderer);
    print_messages(&messages);
    Ok(())
}

fn handle_options(engine: &mut CatalogEngine, attribute: &str) -> Result<()> {
    let attribute: Attribute = attribute.parse().map_err(FilmdexError::Api)?;
    let control = engine.create_filter(attribute).control();
    TerminalRenderer.display_filter(&control);
    Ok(())
}

fn handle_shell(engine: &mut CatalogEngine) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut renderer = TerminalRenderer;

    engine.publish(&mut renderer);
    prompt(interactive)?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(msg) => {
                print_messages(&[CmdMessage::warning(msg)]);
                prompt(interactive)?;
                continue;
            }
        };

        let result: Option<ResultSet> = match command {
            ShellCommand::Search(term) => Some(engine.set_search_term(&term)),
            ShellCommand::Clear => Some(engine.clear_search()),
            ShellCommand::Sort(Some(key)) => Some(engine.apply_sort(&key)),
            ShellCommand::Sort(None) => Some(engine.set_sort_key(None)),
            ShellCommand::Toggle {
                attribute,
                value,
                checked,
            } => Some(engine.toggle_named(&attribute, &value, checked)),
            ShellCommand::View(mode) => {
                engine.set_view_mode(mode);
                Some(engine.current_result())
            }
            ShellCommand::Options(None) => {
                engine.publish_filters(&mut renderer);
                None
            }
            ShellCommand::Options(Some(name)) => {
                match name.parse::<Attribute>() {
                    Ok(attribute) => match engine.filter_control(attribute) {
                        Some(control) => renderer.display_filter(&control),
                        None => print_messages(&[CmdMessage::info(format!(
                            "No filter for '{}'",
                            attribute
                        ))]),
                    },
                    Err(msg) => print_messages(&[CmdMessage::warning(msg)]),
                }
                None
            }
            ShellCommand::Show => Some(engine.current_result()),
            ShellCommand::Help => {
                print!("{}", HELP);
                None
            }
            ShellCommand::Quit => break,
            ShellCommand::Empty => None,
        };

        if let Some(result) = result {
            renderer.display_result(&result, engine.view_mode());
            print_messages(&result.messages);
        }
        prompt(interactive)?;
    }

    Ok(())
}

fn prompt(interactive: bool) -> Result<()> {
    if interactive {
        print!("filmdex> ");
        std::io::stdout().flush()?;
    }
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = FilmdexConfig::load(config_dir)?;

    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get_key(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get_key(&key)?),
        (Some(key), Some(value)) => {
            config.set_key(&key, &value)?;
            config.save(config_dir)?;
            println!("{} = {}", key, config.get_key(&key)?);
        }
    }
    Ok(())
}
