//! Macho entrypoint.
//!
//! Startup: parse arguments, install logging and the panic hook, load the
//! configuration and the optional file, then enter raw mode. The control
//! loop is synchronous: refresh the screen, block on one input event, apply
//! it, repeat until a quit is dispatched.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Dispatcher, open_file};
use core_config::{Config, load_from};
use core_events::InputEvent;
use core_render::RenderEngine;
use core_state::{EditorState, Viewport};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard};
use core_text::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";
const LOG_FILE: &str = "macho.log";

#[derive(Parser, Debug)]
#[command(name = "macho", version, about = "Macho text editor")]
struct Args {
    /// Optional file to open at startup. If omitted an empty unnamed document is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `macho.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    editor: Editor,
    terminal_guard: TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run<'a>(&'a mut self, args: Args) -> Result<RuntimeContext<'a>> {
        self.configure_logging();
        Self::install_panic_hook();
        info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

        let config = load_from(args.config.clone())?;
        let document = Self::load_document(args.path.as_deref())?;

        self.backend.set_title("Macho")?;
        let guard = self.backend.enter_guard()?;
        let (cols, rows) = guard.backend().size()?;

        let state = Self::initial_state(document, args.path, cols, rows);
        info!(
            target: "runtime.startup",
            path = state.file_name().map(|p| p.display().to_string()).as_deref(),
            rows = state.document.num_rows(),
            profile = state.document.profile().map(|p| p.name),
            config_override = args.config.is_some(),
            cols,
            screen_rows = rows,
            "bootstrap_complete"
        );

        Ok(RuntimeContext {
            editor: Editor::new(state, &config),
            terminal_guard: guard,
        })
    }

    fn configure_logging(&mut self) {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn initial_state(
        document: Document,
        path: Option<PathBuf>,
        cols: u16,
        rows: u16,
    ) -> EditorState {
        let mut state = EditorState::new(document, Viewport::for_terminal(cols, rows));
        if let Some(path) = path {
            state.set_file_name(path);
        }
        state.set_status_message(HELP_MESSAGE);
        state
    }

    /// A requested file that cannot be read is fatal.
    fn load_document(path: Option<&Path>) -> Result<Document> {
        match path {
            Some(p) => open_file(p).with_context(|| format!("cannot open {}", p.display())),
            None => Ok(Document::new(None)),
        }
    }
}

/// Editor core driven by the control loop: state, key dispatcher, compositor.
struct Editor {
    state: EditorState,
    dispatcher: Dispatcher,
    engine: RenderEngine,
}

impl Editor {
    fn new(state: EditorState, config: &Config) -> Self {
        Self {
            state,
            dispatcher: Dispatcher::new(config.quit_times()),
            engine: RenderEngine::new(config.message_timeout()),
        }
    }

    fn refresh<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.engine.refresh(&mut self.state, out)
    }

    /// Apply one input event. Returns true when the editor should exit.
    fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Resize(cols, rows) => {
                self.state.viewport.resize(cols, rows);
                false
            }
            InputEvent::Key(key) => self.dispatcher.handle_key(&mut self.state, &key).quit,
        }
    }
}

struct EditorRuntime<'a> {
    context: RuntimeContext<'a>,
}

impl<'a> EditorRuntime<'a> {
    fn new(context: RuntimeContext<'a>) -> Self {
        Self { context }
    }

    fn run(&mut self) -> Result<()> {
        let mut out = std::io::stdout();
        loop {
            self.context.editor.refresh(&mut out)?;
            let event = core_input::read_event()?;
            if self.context.editor.handle_event(event) {
                break;
            }
        }
        info!(
            target: "runtime",
            frames = self.context.editor.engine.frames(),
            unsaved = self.context.editor.state.document.is_dirty(),
            "shutdown"
        );
        self.context.terminal_guard.backend_mut().leave()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let context = startup.run(args)?;
    let mut runtime = EditorRuntime::new(context);
    runtime.run()
}
