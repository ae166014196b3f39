use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::ui::{UIAction, UIEvent};

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Result<Option<UIAction>> {
        let before = self.session.lines().len();

        let action = match event {
            UIEvent::KeyPress(key_event) => self.handle_key_event(key_event)?,
            UIEvent::Resize(width, height) => {
                self.state.terminal_size = (width, height);
                None
            }
            UIEvent::Timer(fired) => {
                let directives = self.session.on_timer(fired);
                self.scheduler.apply(self.session.epoch(), directives);
                None
            }
            UIEvent::Tick => {
                self.state.tick();
                None
            }
        };

        self.state.lines_changed(before, self.session.lines().len());
        Ok(action)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<UIAction>> {
        if key.kind == KeyEventKind::Release {
            return Ok(None);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(Some(UIAction::Exit)),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => return Ok(Some(UIAction::Restart)),
            (KeyCode::F(1), _) => {
                self.session.press_help();
                return Ok(None);
            }
            (KeyCode::PageUp, _) => {
                self.state.page_up(self.session.lines().len());
                return Ok(None);
            }
            (KeyCode::PageDown, _) => {
                self.state.page_down(self.session.lines().len());
                return Ok(None);
            }
            (KeyCode::Esc, _) => {
                self.state.jump_to_bottom();
                return Ok(None);
            }
            _ => {}
        }

        if !self.session.accepts_input() {
            debug!("Ignoring {:?} while the prompt is disabled", key.code);
            return Ok(None);
        }

        match key.code {
            KeyCode::Enter => {
                let directives = self.session.submit();
                self.scheduler.apply(self.session.epoch(), directives);
                self.state.jump_to_bottom();
            }
            KeyCode::Up => self.session.recall_older(),
            KeyCode::Down => self.session.recall_newer(),
            code => {
                if let Some(input) = self.session.input_mut() {
                    match code {
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            input.insert_char(c);
                        }
                        KeyCode::Backspace => {
                            input.remove_char_before();
                        }
                        KeyCode::Delete => {
                            input.remove_char_at();
                        }
                        KeyCode::Left => input.cursor_left(),
                        KeyCode::Right => input.cursor_right(),
                        KeyCode::Home => input.cursor_home(),
                        KeyCode::End => input.cursor_end(),
                        _ => {}
                    }
                }
            }
        }

        Ok(None)
    }
}
