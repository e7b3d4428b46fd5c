mod input;
mod rendering;
mod shell_state;

pub use shell_state::{ShellState, SubmissionStatus, View};

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folio_core::{AssetCatalog, ChatBridge, ContactRelay, Portfolio};

const DEFAULT_STATUS_RESET: Duration = Duration::from_secs(5);
const DEFAULT_TRANSCRIPT_LINE_LIMIT: usize = 200;
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(250);
const ANIMATED_POLL_TIMEOUT: Duration = Duration::from_millis(50);

pub struct Ui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    chat_bridge: Option<Arc<ChatBridge>>,
    contact_relay: Option<Arc<dyn ContactRelay>>,
    status_reset: Duration,
    transcript_line_limit: usize,
}

impl Ui {
    pub fn init() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            chat_bridge: None,
            contact_relay: None,
            status_reset: DEFAULT_STATUS_RESET,
            transcript_line_limit: DEFAULT_TRANSCRIPT_LINE_LIMIT,
        })
    }

    pub fn with_chat_bridge(mut self, bridge: Arc<ChatBridge>) -> Self {
        self.chat_bridge = Some(bridge);
        self
    }

    pub fn with_contact_relay(mut self, relay: Arc<dyn ContactRelay>) -> Self {
        self.contact_relay = Some(relay);
        self
    }

    pub fn with_status_reset(mut self, delay: Duration) -> Self {
        self.status_reset = delay;
        self
    }

    pub fn with_transcript_line_limit(mut self, limit: usize) -> Self {
        self.transcript_line_limit = limit;
        self
    }

    pub fn run(
        &mut self,
        status: &str,
        portfolio: &Portfolio,
        assets: &AssetCatalog,
    ) -> io::Result<()> {
        let mut shell = ShellState::new_with_integrations(
            status.to_owned(),
            portfolio.clone(),
            assets.clone(),
            self.chat_bridge.clone(),
            self.contact_relay.clone(),
            self.status_reset,
            self.transcript_line_limit,
        );

        let mut force_draw = true;
        loop {
            let mut changed = false;
            changed |= shell.tick_chat_and_report();
            changed |= shell.tick_contact_and_report();

            let should_draw = force_draw || changed || shell.has_active_animated_indicator();
            if should_draw {
                self.terminal
                    .draw(|frame| rendering::draw(frame, &mut shell))?;
            }
            force_draw = false;

            let poll_timeout = if shell.has_active_animated_indicator() {
                ANIMATED_POLL_TIMEOUT
            } else {
                IDLE_POLL_TIMEOUT
            };
            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && input::handle_key_press(&mut shell, key)
                    {
                        break;
                    }
                    force_draw = true;
                }
            }
        }

        Ok(())
    }
}

impl Drop for Ui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}
