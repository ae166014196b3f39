//! The terminal session state machine.
//!
//! A `Session` owns the phase, the displayed lines, the command history and
//! the input field. It never sleeps or spawns anything itself: operations
//! that need to wait return [`Directive`]s, and the host feeds the resulting
//! [`TimerFired`] events back through [`Session::on_timer`].
pub mod command;
pub mod history;
pub mod input;
pub mod line;
pub mod phase;
pub mod scenes;
pub mod timer;

use std::time::Duration;

use tracing::debug;

use crate::config::TerminalConfig;

pub use command::{Command, Scene, UnknownCommand};
pub use history::{CommandHistory, Recall};
pub use input::InputLine;
pub use line::{Line, LineKind};
pub use phase::Phase;
pub use timer::{Directive, Timer, TimerFired};

/// Whether sparkles are drawn over the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sparkles {
    Off,
    /// Temporary burst; only the matching expiry timer turns it off.
    Burst(u64),
    /// Stays on for the rest of the session.
    Steady,
}

pub struct Session {
    config: TerminalConfig,
    epoch: u64,
    phase: Phase,
    lines: Vec<Line>,
    history: CommandHistory,
    input: InputLine,
    boot_script: Vec<String>,
    boot_cursor: usize,
    pending_scene: Option<Scene>,
    sparkles: Sparkles,
    bursts: u64,
}

impl Session {
    /// Creates a session in the `Boot` phase. `epoch` identifies this session
    /// instance; timers carrying another epoch are ignored.
    pub fn new(config: TerminalConfig, epoch: u64) -> Self {
        let boot_script = scenes::boot_script(&config.name);
        Self {
            config,
            epoch,
            phase: Phase::Boot,
            lines: Vec::new(),
            history: CommandHistory::new(),
            input: InputLine::new(),
            boot_script,
            boot_cursor: 0,
            pending_scene: None,
            sparkles: Sparkles::Off,
            bursts: 0,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn sparkles(&self) -> Sparkles {
        self.sparkles
    }

    /// A scene is processing; the prompt is disabled until it renders.
    pub fn is_busy(&self) -> bool {
        self.pending_scene.is_some()
    }

    pub fn accepts_input(&self) -> bool {
        self.phase.accepts_input() && !self.is_busy()
    }

    /// Mutable access to the input field, only while input is accepted.
    pub fn input_mut(&mut self) -> Option<&mut InputLine> {
        if self.accepts_input() {
            Some(&mut self.input)
        } else {
            None
        }
    }

    /// Kicks off the boot script.
    pub fn start(&mut self) -> Vec<Directive> {
        debug!(epoch = self.epoch, "Booting session");
        vec![self.schedule(self.boot_interval(), Timer::BootTick)]
    }

    /// Applies a fired timer. Timers from another epoch, or ones that no
    /// longer match the session state, are dropped.
    pub fn on_timer(&mut self, fired: TimerFired) -> Vec<Directive> {
        if fired.epoch != self.epoch {
            debug!(
                "Dropping stale timer {:?} from epoch {} (current {})",
                fired.timer, fired.epoch, self.epoch
            );
            return Vec::new();
        }

        match fired.timer {
            Timer::BootTick if self.phase == Phase::Boot => self.boot_tick(),
            Timer::BootSettled
                if self.phase == Phase::Boot && self.boot_cursor >= self.boot_script.len() =>
            {
                self.advance();
                self.enter_login();
                Vec::new()
            }
            Timer::SceneReady(scene) if self.pending_scene == Some(scene) => {
                self.complete_scene(scene)
            }
            Timer::SparklesExpired(burst) => {
                if self.sparkles == Sparkles::Burst(burst) {
                    self.sparkles = Sparkles::Off;
                }
                Vec::new()
            }
            timer => {
                debug!("Ignoring out-of-phase timer {:?} in {:?}", timer, self.phase);
                Vec::new()
            }
        }
    }

    /// Submits whatever is in the input field.
    pub fn submit(&mut self) -> Vec<Directive> {
        if !self.accepts_input() {
            return Vec::new();
        }
        let raw = self.input.take();
        self.dispatch(&raw)
    }

    /// Echoes, records and executes one submission.
    pub fn dispatch(&mut self, raw: &str) -> Vec<Directive> {
        if !self.accepts_input() {
            debug!("Input rejected in {:?} (busy: {})", self.phase, self.is_busy());
            return Vec::new();
        }

        let trimmed = raw.trim();
        self.history.record(trimmed);
        self.push(Line::stamped(
            LineKind::Input,
            format!("{}{}", scenes::PROMPT, trimmed),
        ));

        let directives = match trimmed.parse::<Command>() {
            Ok(Command::Scene(scene)) => {
                debug!("Dispatching scene {:?}", scene);
                self.pending_scene = Some(scene);
                vec![self.schedule(scene.render_delay(&self.config.timings), Timer::SceneReady(scene))]
            }
            Ok(Command::Help) => {
                self.show_help();
                Vec::new()
            }
            Ok(Command::Clear) => {
                self.clear();
                Vec::new()
            }
            Ok(Command::Blank) => Vec::new(),
            Err(unknown) => {
                debug!("{}", unknown);
                self.push(Line::stamped(LineKind::Error, unknown.to_string()));
                self.push(Line::stamped(LineKind::System, UnknownCommand::HINT));
                Vec::new()
            }
        };

        self.input.clear();
        self.history.reset_cursor();
        directives
    }

    /// Appends the help block without echoing anything.
    pub fn show_help(&mut self) {
        for text in scenes::HELP {
            self.push(Line::stamped(LineKind::Output, *text));
        }
    }

    /// The help button: same block as typing `help`, available once the
    /// prompt is live.
    pub fn press_help(&mut self) {
        if self.phase == Phase::Terminal {
            self.show_help();
        }
    }

    /// Empties the displayed log. History is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Up arrow: recall an older command.
    pub fn recall_older(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if let Recall::Entry(entry) = self.history.older() {
            self.input.set(entry);
        }
    }

    /// Down arrow: recall a newer command, or clear past the newest.
    pub fn recall_newer(&mut self) {
        if !self.accepts_input() {
            return;
        }
        match self.history.newer() {
            Recall::Entry(entry) => self.input.set(entry),
            Recall::Cleared => self.input.clear(),
            Recall::Unchanged => {}
        }
    }

    fn boot_tick(&mut self) -> Vec<Directive> {
        match self.boot_script.get(self.boot_cursor).cloned() {
            Some(text) => {
                self.push(Line::stamped(LineKind::System, text));
                self.boot_cursor += 1;
                vec![self.schedule(self.boot_interval(), Timer::BootTick)]
            }
            None => {
                let settle = Duration::from_millis(self.config.timings.boot_settle_ms);
                vec![self.schedule(settle, Timer::BootSettled)]
            }
        }
    }

    fn enter_login(&mut self) {
        for line in scenes::login_block() {
            self.push(line);
        }
        self.advance();
        debug!("Session is live");
    }

    fn complete_scene(&mut self, scene: Scene) -> Vec<Directive> {
        let output = scenes::render(scene, &self.config.name, &self.config.short_message);
        for text in output {
            self.push(Line::stamped(LineKind::Output, text));
        }
        self.pending_scene = None;

        match scene {
            Scene::Cake => {
                self.bursts += 1;
                let burst = self.bursts;
                if self.sparkles != Sparkles::Steady {
                    self.sparkles = Sparkles::Burst(burst);
                }
                let after = Duration::from_millis(self.config.timings.sparkle_ms);
                vec![self.schedule(after, Timer::SparklesExpired(burst))]
            }
            Scene::Commit => {
                self.sparkles = Sparkles::Steady;
                Vec::new()
            }
            Scene::Wishes => Vec::new(),
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.phase.next() {
            self.phase = next;
        }
    }

    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.config.timings.boot_interval_ms)
    }

    fn schedule(&self, after: Duration, timer: Timer) -> Directive {
        Directive::Schedule { after, timer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs every directive immediately, in order, until none are left.
    fn drain(session: &mut Session, mut directives: Vec<Directive>) {
        while let Some(Directive::Schedule { timer, .. }) = directives.first().copied() {
            directives.remove(0);
            let epoch = session.epoch();
            directives.extend(session.on_timer(TimerFired { epoch, timer }));
        }
    }

    fn live_session() -> Session {
        let mut session = Session::new(TerminalConfig::default(), 1);
        let directives = session.start();
        drain(&mut session, directives);
        assert_eq!(session.phase(), Phase::Terminal);
        session
    }

    fn texts(session: &Session) -> Vec<&str> {
        session.lines().iter().map(|line| line.text.as_str()).collect()
    }

    fn fire(session: &mut Session, timer: Timer) -> Vec<Directive> {
        let epoch = session.epoch();
        session.on_timer(TimerFired { epoch, timer })
    }

    #[test]
    fn boot_prints_script_then_login_block() {
        let session = live_session();
        let lines = session.lines();
        assert_eq!(lines.len(), 7 + 4);
        assert!(lines[..7].iter().all(|l| l.kind == LineKind::System));
        assert_eq!(lines[4].text, "DB://BIRTHDAY_CODY READY");
        assert_eq!(lines[6].text, "SYSTEM ONLINE - ENTER LOGIN CREDENTIALS");
        assert_eq!(lines[8].text, "> IT'S YOUR BIRTHDAY!");
        assert_eq!(lines[10], Line::bare(LineKind::Input, scenes::PROMPT));
        assert_eq!(lines[7].timestamp, None);
    }

    #[test]
    fn boot_ticks_are_paced_by_interval_then_settle() {
        let mut session = Session::new(TerminalConfig::default(), 1);
        let interval = Duration::from_millis(500);
        assert_eq!(
            session.start(),
            vec![Directive::Schedule { after: interval, timer: Timer::BootTick }]
        );

        for emitted in 1..=7 {
            let next = fire(&mut session, Timer::BootTick);
            assert_eq!(session.lines().len(), emitted);
            assert_eq!(next, vec![Directive::Schedule { after: interval, timer: Timer::BootTick }]);
        }

        let settle = fire(&mut session, Timer::BootTick);
        assert_eq!(
            settle,
            vec![Directive::Schedule {
                after: Duration::from_millis(1000),
                timer: Timer::BootSettled
            }]
        );
        assert_eq!(session.phase(), Phase::Boot);
        fire(&mut session, Timer::BootSettled);
        assert_eq!(session.phase(), Phase::Terminal);
    }

    #[test]
    fn premature_settle_is_ignored() {
        let mut session = Session::new(TerminalConfig::default(), 1);
        session.start();
        fire(&mut session, Timer::BootTick);
        fire(&mut session, Timer::BootSettled);
        assert_eq!(session.phase(), Phase::Boot);
    }

    #[test]
    fn input_is_rejected_before_terminal_phase() {
        let mut session = Session::new(TerminalConfig::default(), 1);
        session.start();
        assert!(session.input_mut().is_none());
        assert!(session.dispatch("help").is_empty());
        assert!(session.lines().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn stale_epoch_timers_are_dropped() {
        let mut session = Session::new(TerminalConfig::default(), 2);
        session.start();
        let directives = session.on_timer(TimerFired { epoch: 1, timer: Timer::BootTick });
        assert!(directives.is_empty());
        assert!(session.lines().is_empty());
    }

    #[test]
    fn help_is_synchronous_and_identical_in_any_case() {
        let mut session = live_session();
        let mut blocks = Vec::new();
        for input in ["help", "HELP", "  Help "] {
            session.clear();
            assert!(session.dispatch(input).is_empty());
            let lines = texts(&session);
            assert_eq!(lines[0], format!("{}{}", scenes::PROMPT, input.trim()));
            blocks.push(lines[1..].iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }
        assert_eq!(blocks[0], scenes::HELP);
        assert!(blocks.iter().all(|block| block == &blocks[0]));
    }

    #[test]
    fn help_button_skips_echo() {
        let mut session = live_session();
        session.clear();
        session.press_help();
        assert_eq!(texts(&session), scenes::HELP);
        assert!(session.history().is_empty());
    }

    #[test]
    fn clear_empties_log_but_keeps_history() {
        let mut session = live_session();
        session.dispatch("help");
        session.dispatch("CLEAR");
        assert!(session.lines().is_empty());
        assert_eq!(session.history().entries(), ["help", "CLEAR"]);
    }

    #[test]
    fn unknown_command_yields_error_and_hint() {
        let mut session = live_session();
        session.clear();
        session.dispatch("  DROP TABLE cake; ");
        let lines = session.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "birthday_db> DROP TABLE cake;");
        assert_eq!(lines[1].kind, LineKind::Error);
        assert_eq!(lines[1].text, "ERROR: Unknown command \"DROP TABLE cake;\"");
        assert_eq!(lines[2].kind, LineKind::System);
        assert_eq!(lines[2].text, "Type \"help\" for available commands");
    }

    #[test]
    fn blank_submission_only_echoes() {
        let mut session = live_session();
        session.clear();
        assert!(session.dispatch("   ").is_empty());
        assert_eq!(texts(&session), vec![scenes::PROMPT]);
        assert!(session.history().is_empty());
    }

    #[test]
    fn wishes_scene_renders_after_delay_and_blocks_input() {
        let mut session = live_session();
        session.clear();
        let directives = session.dispatch("SELECT * FROM wishes;");
        assert_eq!(
            directives,
            vec![Directive::Schedule {
                after: Duration::from_millis(1000),
                timer: Timer::SceneReady(Scene::Wishes)
            }]
        );
        assert!(session.is_busy());
        assert!(!session.accepts_input());
        assert!(session.dispatch("help").is_empty());
        assert_eq!(session.lines().len(), 1);

        fire(&mut session, Timer::SceneReady(Scene::Wishes));
        assert!(!session.is_busy());
        let lines = texts(&session);
        assert_eq!(lines.len(), 1 + 11);
        for wish in [
            "Happy Birthday!",
            "May all your dreams come true",
            "Another year of awesome!",
            "Celebrate like there's no tomorrow",
        ] {
            assert!(lines.iter().any(|line| line.contains(wish)));
        }
        assert_eq!(*lines.last().unwrap(), "✨ 4 rows returned");
    }

    #[test]
    fn cake_scene_starts_temporary_sparkles() {
        let mut session = live_session();
        session.dispatch("SELECT * FROM cake;");
        assert!(session.is_busy());
        assert!(!session.accepts_input());
        let directives = fire(&mut session, Timer::SceneReady(Scene::Cake));
        assert_eq!(session.sparkles(), Sparkles::Burst(1));
        assert_eq!(
            directives,
            vec![Directive::Schedule {
                after: Duration::from_millis(3000),
                timer: Timer::SparklesExpired(1)
            }]
        );
        assert!(texts(&session).contains(&"🎉 MEGA CAKE DEPLOYED! Size: ENORMOUS!"));

        fire(&mut session, Timer::SparklesExpired(1));
        assert_eq!(session.sparkles(), Sparkles::Off);
    }

    #[test]
    fn earlier_burst_expiry_does_not_cut_a_later_burst() {
        let mut session = live_session();
        session.dispatch("SELECT * FROM cake;");
        fire(&mut session, Timer::SceneReady(Scene::Cake));
        session.dispatch("SELECT * FROM cake;");
        fire(&mut session, Timer::SceneReady(Scene::Cake));
        fire(&mut session, Timer::SparklesExpired(1));
        assert_eq!(session.sparkles(), Sparkles::Burst(2));
    }

    #[test]
    fn commit_scene_personalises_banner() {
        let config = TerminalConfig {
            name: "ada".to_string(),
            short_message: "Many happy returns!".to_string(),
            ..TerminalConfig::default()
        };
        let mut session = Session::new(config, 1);
        let directives = session.start();
        drain(&mut session, directives);

        let directives = session.dispatch("COMMIT;");
        assert_eq!(
            directives,
            vec![Directive::Schedule {
                after: Duration::from_millis(1500),
                timer: Timer::SceneReady(Scene::Commit)
            }]
        );
        fire(&mut session, Timer::SceneReady(Scene::Commit));

        let lines = texts(&session);
        assert!(lines.contains(&"🚀 COMMITTING BIRTHDAY TRANSACTION..."));
        assert!(lines.contains(&"🎉 ADA! 🎉"));
        assert_eq!(*lines.last().unwrap(), "💝 Many happy returns!");
        assert_eq!(session.sparkles(), Sparkles::Steady);
    }

    #[test]
    fn mismatched_scene_timer_is_ignored() {
        let mut session = live_session();
        let before = session.lines().len();
        fire(&mut session, Timer::SceneReady(Scene::Commit));
        assert_eq!(session.lines().len(), before);
    }

    #[test]
    fn submit_records_history_once_and_clears_input() {
        let mut session = live_session();
        for _ in 0..2 {
            for c in "help".chars() {
                session.input_mut().expect("input accepted").insert_char(c);
            }
            session.submit();
            assert!(session.input().is_empty());
        }
        assert_eq!(session.history().entries(), ["help"]);
    }

    #[test]
    fn arrows_recall_history_into_input() {
        let mut session = live_session();
        session.dispatch("help");
        session.dispatch("clear");

        session.recall_older();
        assert_eq!(session.input().as_str(), "clear");
        session.recall_older();
        session.recall_older();
        assert_eq!(session.input().as_str(), "help");
        assert_eq!(session.history().cursor(), Some(0));

        session.recall_newer();
        assert_eq!(session.input().as_str(), "clear");
        session.recall_newer();
        assert!(session.input().is_empty());
        assert_eq!(session.history().cursor(), None);
    }

    #[test]
    fn submitting_resets_history_cursor() {
        let mut session = live_session();
        session.dispatch("help");
        session.recall_older();
        session.submit();
        assert_eq!(session.history().cursor(), None);
    }
}
