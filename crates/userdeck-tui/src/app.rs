//! Application core — event loop, input routing, action dispatch.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc;
use tracing::{debug, info};

use userdeck_config::UiSettings;
use userdeck_core::{Controller, LoadState, UserSource};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::UsersScreen;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::DetailOverlay;

/// Top-level application state and event loop.
pub struct App {
    /// Sole owner of the records, load state, and selection.
    controller: Controller,
    /// List view.
    users: UsersScreen,
    /// Detail view, drawn over everything while a record is selected.
    detail: DetailOverlay,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Loading spinner frame.
    throbber_state: ThrobberState,
    ui: UiSettings,
    /// Action sender — the fetch task reports back through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(ui: UiSettings) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            controller: Controller::new(),
            users: UsersScreen::new(),
            detail: DetailOverlay::new(),
            running: true,
            help_visible: false,
            throbber_state: ThrobberState::default(),
            ui,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run<S>(&mut self, source: S) -> Result<()>
    where
        S: UserSource + 'static,
    {
        let mut tui = Tui::new(self.ui.mouse)?;
        tui.enter()?;

        self.start_load(source);

        let mut events = EventReader::new(self.ui.tick_rate(), self.ui.frame_rate());

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Click { column, row } => {
                    if let Some(action) = self.handle_click(column, row)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize => {
                    self.action_tx.send(Action::Resize)?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if action.needs_redraw() {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Kick off the one-shot initial fetch on its own task. The outcome
    /// comes back as [`Action::UsersFetched`].
    fn start_load<S>(&mut self, source: S)
    where
        S: UserSource + 'static,
    {
        if !self.controller.begin_initialize() {
            return;
        }
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = source.load_users().await;
            if tx.send(Action::UsersFetched(result)).is_err() {
                debug!("app exited before the fetch finished");
            }
        });
    }

    /// Map a key event to an action. Global keys are handled here; the
    /// detail overlay captures the rest while open, otherwise the list does.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            });
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        let state = self.controller.state();
        if state.selected().is_some() {
            return self.detail.handle_key_event(key, state);
        }
        if matches!(state.load_state(), LoadState::Ready(_)) {
            return self.users.handle_key_event(key, state);
        }
        Ok(None)
    }

    /// Route a click to whichever view is on top.
    fn handle_click(&mut self, column: u16, row: u16) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(None);
        }
        let state = self.controller.state();
        if state.selected().is_some() {
            return self.detail.handle_click(column, row, state);
        }
        if matches!(state.load_state(), LoadState::Ready(_)) {
            return self.users.handle_click(column, row, state);
        }
        Ok(None)
    }

    /// Apply an action to the controller, then let the views catch up.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                info!("quit requested");
                self.running = false;
            }
            Action::Tick => {
                if self.controller.state().is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::Render | Action::Resize => {}
            Action::UsersFetched(result) => {
                self.controller.complete_initialize(result.clone());
            }
            Action::SelectUser(id) => self.controller.select_user(*id),
            Action::CloseDetail => self.controller.close_detail(),
            Action::DeleteUser(id) => {
                if let Some(removed) = self.controller.delete_user(*id) {
                    info!(id = %removed.id, name = %removed.name, "user removed from list");
                }
            }
            Action::ToggleHelp => self.help_visible = !self.help_visible,
        }

        let state = self.controller.state();
        self.users.update(action, state)?;
        self.detail.update(action, state)?;
        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [title] [content] [status bar]
        let [title_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(" Users", theme::title_style()))),
            title_area,
        );

        let state = self.controller.state();
        match state.load_state() {
            LoadState::Pending => self.render_loading(frame, content_area),
            LoadState::Failed { message } => render_error(frame, content_area, message),
            LoadState::Ready(_) => self.users.render(frame, content_area, state),
        }

        self.render_status_bar(frame, status_area);

        // Overlays on top (last = topmost)
        self.detail.render(frame, area, state);

        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let [_, spinner_area, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        let [_, spinner_area, _] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .areas(spinner_area);

        let throbber = Throbber::default()
            .label("Loading users...")
            .style(Style::default().fg(theme::NEON_CYAN))
            .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));

        frame.render_stateful_widget(throbber, spinner_area, &mut self.throbber_state.clone());
    }

    /// Render the bottom status bar with the record count and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let state = self.controller.state();

        let summary = match state.load_state() {
            LoadState::Pending => Span::styled(" loading", theme::key_hint()),
            LoadState::Failed { .. } => {
                Span::styled(" fetch failed", Style::default().fg(theme::ERROR_RED))
            }
            LoadState::Ready(users) => Span::styled(
                format!(" {} users", users.len()),
                Style::default().fg(theme::DIM_WHITE),
            ),
        };

        let hints = if state.selected().is_some() {
            " │ Esc close  ? help  q quit"
        } else {
            " │ j/k move  Enter details  d delete  ? help  q quit"
        };

        let line = Line::from(vec![summary, Span::styled(hints, theme::key_hint())]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let [_, message_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            message.to_owned(),
            Style::default().fg(theme::ERROR_RED),
        ))
        .centered(),
        message_area,
    );
}

/// Render the help overlay centered on screen.
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_width = 48u16.min(area.width.saturating_sub(4));
    let help_height = 16u16.min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), theme::key_hint_key()),
            Span::styled(what, theme::key_hint()),
        ])
    };

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  List", theme::section_heading())),
        key("j/k ↑/↓", "Move up/down"),
        key("g/G", "Top / bottom"),
        key("Enter", "Open details"),
        key("d Del", "Delete from list"),
        key("click", "Open details / ✕ deletes"),
        Line::from(""),
        Line::from(Span::styled("  Details", theme::section_heading())),
        key("Esc Enter x", "Close"),
        key("click", "[×] or outside closes"),
        Line::from(""),
        key("?", "This help"),
        key("q Ctrl+C", "Quit"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}
