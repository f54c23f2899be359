mod cli;
mod commands;
mod paths;
mod render;

use std::process::ExitCode;

use clap::Parser;
use morty_lib::CharacterClient;
use morty_lib::api::load_all_with_cancel;
use morty_lib::table::TableConfig;
use morty_lib::table::TableView;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use cli::Args;
use commands::Command;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Load(#[from] morty_lib::error::Error),
    #[error("{0}")]
    Input(#[from] morty_lib::error::InputError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sends log output to the cache directory; logging is skipped if that fails.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };

    match paths::create_log_file(&path) {
        Ok(file) => {
            if WriteLogger::init(level, Config::default(), file).is_err() {
                eprintln!("Logger already initialised");
            }
        }
        Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let client = CharacterClient::builder()
        .start_url(&args.url)
        .timeout(args.timeout())
        .connect_timeout(args.connect_timeout())
        .retry(args.retry())
        .build()?;
    let mut view = TableView::new(TableConfig::characters()).with_page_size(args.page_size)?;

    log::info!("Loading characters from {}", client.start_url());
    println!("Loading...");

    let cancel = CancellationToken::new();
    // Ctrl-C abandons the load, or ends the session once loaded.
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let records = load_all_with_cancel(&client, client.start_url(), cancel.clone()).await?;
    view.finish_load(Ok(records));

    println!("{}\n", render::frame(&view.snapshot()));
    println!("Type 'help' for commands.");

    let mut lines = spawn_stdin_reader();
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => line,
        };
        let Some(line) = line else { break };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        log::debug!("Command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", commands::HELP);
                continue;
            }
            command => {
                if let Err(e) = command.apply(&mut view) {
                    println!("{}", e);
                }
            }
        }
        println!("{}\n", render::frame(&view.snapshot()));
    }

    Ok(())
}

/// Reads stdin on a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
