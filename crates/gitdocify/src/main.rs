use anyhow::Context;
use clap::Parser;
use docify_client::{OctocrabMetaClient, ReqwestDocsClient, WebSocketChannel};
use docify_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event as TermEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::runtime::Runtime;

mod actions;
mod background;
mod capabilities;
mod cli;
mod command_id;
mod dispatcher;
mod enrich;
mod headless;
mod highlight;
mod keybindings;
mod live_listener;
mod logger;
mod middleware;
mod orchestrator;
mod reducers;
mod state;
mod view_models;
mod views;

use actions::{Action, DocsAction, Event, GlobalAction};
use background::{spawn_background_worker, SharedState};
use cli::{Cli, Command};
use dispatcher::Dispatcher;
use enrich::IdentityEnricher;
use middleware::{
    DocsMiddleware, KeyboardMiddleware, LiveUpdateMiddleware, Middleware, NavigationMiddleware,
    RepoInputMiddleware, TextInputMiddleware, ViewContextMiddleware,
};
use orchestrator::FetchOrchestrator;
use state::AppState;

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting gitdocify, logging to {}", log_file.display());
    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No .env file loaded: {}", e),
    }

    let mut config = AppConfig::load();
    cli.apply(&mut config);
    log::debug!("Effective config: {:?}", config);

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    // The GitHub client needs a runtime context to build
    let _guard = runtime.enter();
    let orchestrator = Arc::new(build_orchestrator(&config)?);

    let result = match cli.command {
        Some(Command::Export {
            repo_url, output, ..
        }) => {
            let output = output.unwrap_or_else(|| config.pdf_path());
            let written = runtime.block_on(headless::export(
                &orchestrator,
                &repo_url,
                config.max_commits(),
                output,
            ))?;
            println!("{}", written.display());
            Ok(())
        }
        None => {
            let initial = cli.repo.map(|repo| (repo, config.max_commits()));
            run_tui(&runtime, orchestrator, config, initial)
        }
    };

    log::info!("Exiting gitdocify");
    result
}

fn build_orchestrator(config: &AppConfig) -> anyhow::Result<FetchOrchestrator> {
    let backend = ReqwestDocsClient::new(&config.backend_url, config.request_timeout())?;
    let meta = OctocrabMetaClient::from_env(&config.github_api_url)?;
    Ok(FetchOrchestrator::new(
        Arc::new(backend),
        Arc::new(meta),
        Arc::new(IdentityEnricher),
        config.enrich_limit(),
    ))
}

fn run_tui(
    runtime: &Runtime,
    orchestrator: Arc<FetchOrchestrator>,
    config: AppConfig,
    initial: Option<(String, u32)>,
) -> anyhow::Result<()> {
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let state: SharedState = Arc::new(RwLock::new(AppState::new(config.clone())));

    // Middleware run in this order
    let channel = Arc::new(WebSocketChannel::new(config.live_updates_url.clone()));
    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(ViewContextMiddleware::new()),
        Box::new(RepoInputMiddleware::new()),
        Box::new(DocsMiddleware::new(
            runtime.handle().clone(),
            Arc::clone(&orchestrator),
        )),
        Box::new(LiveUpdateMiddleware::new(
            runtime.handle().clone(),
            channel,
            orchestrator,
        )),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&state),
        middleware,
    );
    let dispatcher = Dispatcher::new(action_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &state, &result_rx, &dispatcher, initial);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The loop ended on an error; the worker is still waiting for Quit
    if !worker.is_finished() {
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
    }
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &SharedState,
    result_rx: &Receiver<Action>,
    dispatcher: &Dispatcher,
    initial: Option<(String, u32)>,
) -> anyhow::Result<()> {
    let mut started = false;

    loop {
        // Reducers run here, on the UI thread only
        for action in result_rx.try_iter() {
            let mut guard = state.write().unwrap_or_else(|p| p.into_inner());
            let current = std::mem::take(&mut *guard);
            *guard = reducers::reduce(current, &action);
        }

        {
            let snapshot = state.read().unwrap_or_else(|p| p.into_inner());
            if !snapshot.running {
                break;
            }
            terminal.draw(|frame| views::render(&snapshot, frame.area(), frame))?;
        }

        if !started {
            started = true;
            dispatcher.dispatch(Action::event(Event::Started));
            if let Some((repo_url, max_commits)) = &initial {
                dispatcher.dispatch(Action::Docs(DocsAction::Generate {
                    repo_url: repo_url.clone(),
                    max_commits: *max_commits,
                }));
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dispatcher.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
