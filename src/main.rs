//! # Landing CLI Entry Point
//!
//! This is the main entry point for the landing page builder TUI.
//!
//! ## Overview
//!
//! Type a short description of a product, press Enter, and the generation
//! service answers with landing-page copy: a hero title and subtitle, a list
//! of features and a call-to-action. Every piece of that copy can then be
//! edited in place.
//!
//! ## Usage
//!
//! ```bash
//! # Use the configured (or default) generation service
//! landing
//!
//! # Point at another service and pre-fill the description
//! landing --server http://localhost:5173 --description "AI-based fitness app"
//!
//! # Write tracing output to a file (filter with LANDING_LOG)
//! LANDING_LOG=debug landing --log-file landing.log
//! ```
//!
//! ## Architecture
//!
//! 1. **Form**: the description draft and the generate button
//! 2. **Request**: a spawned task posts to `/api/generate`; its outcome comes
//!    back over a channel and is applied on the UI loop
//! 3. **Preview**: the generated content, each field editable in place
//!
//! See [`landing::ui::keys`] for the key bindings.

use landing::content::GeneratedContent;
use landing::generate::{GenerateError, GenerateRequest, GenerationService, HttpGenerator};
use landing::logging;
use landing::ui::config::Config;
use landing::ui::keys::{self, Action};
use landing::ui::theme::Theme;
use landing::ui::{self, App};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Landing - generate and edit landing page copy from a short description
#[derive(Parser, Debug)]
#[command(name = "landing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate landing page copy from a description and edit it in place", long_about = None)]
struct Args {
    /// Base URL of the generation service (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    server: Option<String>,

    /// Pre-fill the product description
    #[arg(short, long, value_name = "TEXT")]
    description: Option<String>,

    /// Color theme to use for this run
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Append tracing output to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

type Outcome = Result<GeneratedContent, GenerateError>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

/// Resolve CLI arguments and config into a ready-to-run [`App`].
fn build_app(args: &Args, config: &Config) -> Result<App> {
    let theme = match &args.theme {
        Some(name) => match Theme::by_name(name) {
            Some(theme) => theme,
            None => {
                let known: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
                bail!("Unknown theme '{}'. Available: {}", name, known.join(", "));
            }
        },
        None => Theme::by_name(&config.theme).unwrap_or_else(Theme::default_theme),
    };

    let server_url = args
        .server
        .clone()
        .unwrap_or_else(|| config.server_url.clone());

    let mut app = App::new(theme.clone(), server_url);
    if let Some(description) = &args.description {
        app.description.clone_from(description);
    }
    Ok(app)
}

async fn run_application(args: Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        logging::init_file_logging(path)?;
    }

    let mut config = Config::load();
    let mut app = build_app(&args, &config)?;
    let service: Arc<dyn GenerationService> = Arc::new(HttpGenerator::new(app.server_url.clone()));
    tracing::info!(server = %app.server_url, theme = app.theme.name, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        service,
        &mut event_reader,
        &mut config,
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Start a generation attempt in the background; its outcome is delivered
/// on `tx` and applied by the UI loop.
fn spawn_generate(
    service: &Arc<dyn GenerationService>,
    request: GenerateRequest,
    tx: &mpsc::UnboundedSender<Outcome>,
) {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = service.generate(request).await;
        // The receiver only goes away when the UI has quit
        let _ = tx.send(outcome);
    });
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: Arc<dyn GenerationService>,
    event_reader: &mut dyn EventReader,
    config: &mut Config,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    loop {
        // Apply finished requests before drawing
        while let Ok(outcome) = rx.try_recv() {
            app.finish_submit(outcome);
        }

        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| anyhow!("Failed to draw terminal UI: {e}"))?;

        // Poll faster while a request is in flight so its result shows promptly
        let poll_timeout = if app.is_loading() {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(100)
        };

        let event = match event_reader.read_event(poll_timeout)? {
            Some(e) => e,
            None => {
                tokio::task::yield_now().await;
                continue;
            }
        };

        if let Event::Key(key) = event {
            match keys::handle_key(app, key) {
                Action::None => {}
                Action::Submit(request) => spawn_generate(&service, request, &tx),
                Action::ThemeChanged(name) => {
                    config.theme = name.to_string();
                    if let Err(e) = config.save() {
                        tracing::warn!("config: failed to save theme: {e:#}");
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock event reader for testing that returns a predetermined sequence of
    /// events; `None` entries simulate an idle poll.
    struct MockEventReader {
        events: VecDeque<Option<Event>>,
    }

    impl MockEventReader {
        fn new(events: Vec<Option<Event>>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
            match self.events.pop_front() {
                Some(Some(event)) => Ok(Some(event)),
                Some(None) => {
                    std::thread::sleep(timeout);
                    Ok(None)
                }
                None => Ok(Some(ctrl('c'))),
            }
        }
    }

    struct FixedService {
        outcome: fn() -> Outcome,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl GenerationService for FixedService {
        async fn generate(&self, request: GenerateRequest) -> Outcome {
            self.requests.lock().expect("lock").push(request);
            (self.outcome)()
        }
    }

    fn key_event(code: KeyCode) -> Option<Event> {
        Some(Event::Key(KeyEvent::new(code, KeyModifiers::empty())))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(text: &str) -> Vec<Option<Event>> {
        text.chars().map(|c| key_event(KeyCode::Char(c))).collect()
    }

    fn test_args() -> Args {
        Args {
            server: None,
            description: None,
            theme: None,
            log_file: None,
        }
    }

    async fn drive(events: Vec<Option<Event>>, service: Arc<FixedService>) -> App {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        let mut app = App::new(Theme::default_theme().clone(), "http://test");
        let mut reader = MockEventReader::new(events);
        let mut config = Config::default();
        run_app(&mut terminal, &mut app, service, &mut reader, &mut config)
            .await
            .expect("run_app");
        app
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![key_event(KeyCode::Char('a')), None]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(1)).expect("read"),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(1))
            .expect("read")
            .is_none());
        // Exhausted readers ask to quit
        assert!(matches!(
            reader.read_event(Duration::from_millis(1)).expect("read"),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }))
        ));
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_build_app_defaults_from_config() {
        let config = Config {
            theme: "Nord".to_string(),
            server_url: "http://gen.local".to_string(),
        };
        let app = build_app(&test_args(), &config).expect("build");
        assert_eq!(app.theme.name, "Nord");
        assert_eq!(app.server_url, "http://gen.local");
        assert!(app.description.is_empty());
    }

    #[test]
    fn test_build_app_args_override_config() {
        let args = Args {
            server: Some("http://localhost:5173".to_string()),
            description: Some("AI-based fitness app".to_string()),
            theme: Some("dracula".to_string()),
            log_file: None,
        };
        let app = build_app(&args, &Config::default()).expect("build");
        assert_eq!(app.theme.name, "Dracula");
        assert_eq!(app.server_url, "http://localhost:5173");
        assert_eq!(app.description, "AI-based fitness app");
    }

    #[test]
    fn test_build_app_unknown_theme() {
        let args = Args {
            theme: Some("Vaporwave".to_string()),
            ..test_args()
        };
        let err = build_app(&args, &Config::default())
            .err()
            .expect("unknown theme should fail");
        assert!(err.to_string().contains("Unknown theme 'Vaporwave'"));
    }

    #[test]
    fn test_build_app_unknown_config_theme_falls_back() {
        let config = Config {
            theme: "Removed Theme".to_string(),
            ..Config::default()
        };
        let app = build_app(&test_args(), &config).expect("build");
        assert_eq!(app.theme.name, Theme::default_theme().name);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_app_submit_and_edit() {
        let service = Arc::new(FixedService {
            outcome: || {
                Ok(GeneratedContent {
                    hero_title: "Get Fit, Stay Busy".to_string(),
                    hero_subtitle: "Fitness for professionals".to_string(),
                    cta_text: "Start Now".to_string(),
                    features: vec!["Quick workouts".to_string(), "Smart scheduling".to_string()],
                })
            },
            requests: Mutex::new(Vec::new()),
        });

        let mut events = type_text("AI-based fitness app for busy professionals");
        events.push(key_event(KeyCode::Enter));
        events.extend(std::iter::repeat_with(|| None).take(20));
        // Description -> button -> title -> subtitle -> feature 0, then down to feature 1
        events.extend([
            key_event(KeyCode::Tab),
            key_event(KeyCode::Tab),
            key_event(KeyCode::Tab),
            key_event(KeyCode::Tab),
            key_event(KeyCode::Char('j')),
            key_event(KeyCode::Enter),
            key_event(KeyCode::Home),
        ]);
        events.extend(std::iter::repeat_with(|| key_event(KeyCode::Delete)).take(5));
        events.extend(type_text("Adaptive"));
        events.push(key_event(KeyCode::Tab));

        let app = drive(events, Arc::clone(&service)).await;

        let requests = service.requests.lock().expect("lock");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].description,
            "AI-based fitness app for busy professionals"
        );

        let content = app.content().expect("content rendered");
        assert_eq!(content.features, vec!["Quick workouts", "Adaptive scheduling"]);
        assert_eq!(content.hero_title, "Get Fit, Stay Busy");
        assert!(!app.is_loading());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_app_empty_submit_never_calls_service() {
        let service = Arc::new(FixedService {
            outcome: || Err(GenerateError::from_response(500, "unreachable")),
            requests: Mutex::new(Vec::new()),
        });

        let mut events = type_text("   ");
        events.push(key_event(KeyCode::Enter));

        let app = drive(events, Arc::clone(&service)).await;

        assert!(service.requests.lock().expect("lock").is_empty());
        assert_eq!(app.error_message(), Some(ui::app::VALIDATION_MESSAGE));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_app_service_error_is_displayed() {
        let service = Arc::new(FixedService {
            outcome: || Err(GenerateError::from_response(500, "Service unavailable")),
            requests: Mutex::new(Vec::new()),
        });

        let mut events = type_text("fitness");
        events.push(key_event(KeyCode::Enter));
        events.extend(std::iter::repeat_with(|| None).take(20));

        let app = drive(events, service).await;

        assert_eq!(app.error_message(), Some("Service unavailable"));
        assert!(app.content().is_none());
    }
}
