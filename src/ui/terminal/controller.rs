use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::TerminalConfig;
use crate::session::Session;
use crate::ui::{Scheduler, UIAction, UIEvent, UIState};

pub struct TerminalUI {
    pub(super) config: TerminalConfig,
    pub(super) session: Session,
    pub(super) state: UIState,
    pub(super) scheduler: Scheduler,
    pub(super) event_rx: mpsc::UnboundedReceiver<UIEvent>,
    pub(super) terminal_active: bool,
}

impl TerminalUI {
    pub fn new(
        config: TerminalConfig,
        event_tx: mpsc::UnboundedSender<UIEvent>,
        event_rx: mpsc::UnboundedReceiver<UIEvent>,
    ) -> Self {
        Self {
            session: Session::new(config.clone(), 1),
            config,
            state: UIState::new(),
            scheduler: Scheduler::new(event_tx),
            event_rx,
            terminal_active: false,
        }
    }

    /// Starts the boot script of the current session.
    pub fn start(&mut self) {
        let directives = self.session.start();
        self.scheduler.apply(self.session.epoch(), directives);
    }

    /// Drops every pending timer and boots a fresh session.
    pub fn restart(&mut self) {
        self.scheduler.cancel_all();
        let epoch = self.session.epoch() + 1;
        self.session = Session::new(self.config.clone(), epoch);
        self.state.jump_to_bottom();
        info!("Restarting session (epoch {})", epoch);
        self.start();
    }

    pub async fn run(&mut self) -> Result<()> {
        self.initialize_terminal()?;
        self.start();
        self.render()?;

        debug!("Starting terminal UI loop");

        while let Some(event) = self.event_rx.recv().await {
            match self.handle_event(event) {
                Ok(Some(UIAction::Exit)) => break,
                Ok(Some(UIAction::Restart)) => self.restart(),
                Ok(None) => {}
                Err(e) => error!("Error handling UI event: {}", e),
            }

            self.render()?;
        }

        self.scheduler.cancel_all();
        self.cleanup()
    }
}
