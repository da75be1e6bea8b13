mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crossbeam_channel::{Receiver, Sender, unbounded};
use message_search::{
    ChannelMatcher, CompilerConfig, DirectorySnapshot, Filter, InMemoryDirectory, QueryCompiler,
    ReadySignal, SearchMessageOptions, SearchSession, Term, ready_gate, to_iso_string,
};
use std::{io::Write, path::PathBuf, sync::Arc, thread, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
enum Mode {
    Params,
    Explain,
    Channels,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.tz {
        Some(tz) => CompilerConfig::with_time_zone_name(tz),
        None => CompilerConfig::from_env(),
    };
    let mode = if cli.explain {
        Mode::Explain
    } else if cli.channels {
        Mode::Channels
    } else {
        Mode::Params
    };
    let options = SearchMessageOptions {
        limit: cli.limit,
        offset: cli.offset,
        sort: cli.sort,
    };

    let directory = Arc::new(InMemoryDirectory::new());
    let (signal, gate) = ready_gate();
    spawn_directory_loader(cli.directory, directory.clone(), signal);
    let session = SearchSession::new(QueryCompiler::with_config(directory, gate, config));

    let (search_tx, search_rx) = unbounded::<String>();
    let (search_result_tx, search_result_rx) = unbounded::<Result<Vec<String>>>();
    let worker = spawn_search_worker(session, mode, options, search_rx, search_result_tx);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        if stdin.read_line(&mut line).context("Failed to read stdin")? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        } else if line == "/bye" {
            break;
        }

        search_tx
            .send(line.to_string())
            .context("search_tx is closed")?;
        let search_result = search_result_rx
            .recv()
            .context("search_result_rx is closed")?;
        match search_result {
            Ok(lines) if lines.is_empty() => println!("(nothing)"),
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(e) => {
                eprintln!("Failed to search: {e:?}");
            }
        }
    }

    drop(search_tx);
    if worker.join().is_err() {
        error!("Search worker panicked");
    }
    Ok(())
}

/// Loads the snapshot off the prompt thread. Queries typed meanwhile wait on
/// the readiness gate.
fn spawn_directory_loader(path: PathBuf, directory: Arc<InMemoryDirectory>, signal: ReadySignal) {
    thread::spawn(move || {
        let load_time = Instant::now();
        match DirectorySnapshot::read_from_file(&path) {
            Ok(snapshot) => {
                directory.load_snapshot(snapshot);
                info!("Directory ready in {:?}", load_time.elapsed());
            }
            Err(e) => error!("{e:?}, references will not resolve"),
        }
        signal.mark_ready();
    });
}

fn spawn_search_worker(
    session: SearchSession,
    mode: Mode,
    options: SearchMessageOptions,
    search_rx: Receiver<String>,
    search_result_tx: Sender<Result<Vec<String>>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                let _ = search_result_tx.send(Err(e).context("Failed to start search runtime"));
                return;
            }
        };
        for query in search_rx {
            let result = runtime.block_on(answer(&session, mode, options, &query));
            if search_result_tx.send(result).is_err() {
                break;
            }
        }
    })
}

async fn answer(
    session: &SearchSession,
    mode: Mode,
    options: SearchMessageOptions,
    query: &str,
) -> Result<Vec<String>> {
    match mode {
        Mode::Params => match session.search(query, options).await {
            Some(params) => Ok(vec![serde_json::to_string(&params)?]),
            None => Ok(Vec::new()),
        },
        Mode::Explain => {
            let terms = session.compiler().parse_terms(query).await;
            Ok(terms
                .iter()
                .enumerate()
                .map(|(i, term)| format!("[{i}] {}", describe(term)))
                .collect())
        }
        Mode::Channels => {
            let tree = session.compiler().channels().await;
            let matched = ChannelMatcher::new(&tree).resolve(query);
            Ok(matched
                .into_iter()
                .enumerate()
                .map(|(i, id)| {
                    let path = tree.full_path(id).unwrap_or_else(|| id.to_string());
                    format!("[{i}] {path}")
                })
                .collect())
        }
    }
}

fn describe(term: &Term) -> String {
    let Term::Filter(filter) = term else {
        return format!("{:<10} {}", "word", term.as_word().unwrap_or_default());
    };
    let value = match filter {
        Filter::After { value, .. } | Filter::Before { value, .. } => to_iso_string(*value),
        Filter::In { value, .. } => value.to_string(),
        Filter::To { value, .. } | Filter::From { value, .. } => value.to_string(),
        Filter::Citation { value, .. } => value.to_string(),
        Filter::AttrFlag { value, negate, .. } => flag(value, *negate),
        Filter::MediaFlag { value, negate, .. } => flag(value, *negate),
    };
    format!("{:<10} {} -> {}", filter.kind().as_str(), filter.raw(), value)
}

fn flag(value: &impl std::fmt::Display, negate: bool) -> String {
    if negate {
        format!("not {value}")
    } else {
        value.to_string()
    }
}
