//! Detail overlay — a centered panel over the list showing every field of
//! the selected record. Modal: while open it receives all input.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use userdeck_core::{ApplicationState, UserRecord};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

const PANEL_WIDTH: u16 = 72;
const PANEL_HEIGHT: u16 = 25;
const CLOSE_LABEL: &str = "[×]";
const CLOSE_WIDTH: u16 = 3;

/// Where a click landed relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    /// The `[×]` control on the panel's top border.
    CloseButton,
    /// Inside the panel, anywhere but the close control.
    Panel,
    /// Anywhere outside the panel.
    Outside,
}

impl OverlayHit {
    /// Background and close control both dismiss; the panel swallows clicks.
    pub fn intent(self) -> Option<Action> {
        match self {
            Self::CloseButton | Self::Outside => Some(Action::CloseDetail),
            Self::Panel => None,
        }
    }
}

/// Centered panel rect inside `area`.
pub fn panel_rect(area: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width.saturating_sub(4));
    let height = PANEL_HEIGHT.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// The close control, drawn on the top border just left of the corner.
pub fn close_button_rect(panel: Rect) -> Rect {
    Rect::new(
        panel.right().saturating_sub(CLOSE_WIDTH + 2),
        panel.y,
        CLOSE_WIDTH,
        1,
    )
}

/// Classify a click against the panel geometry.
pub fn hit_test(panel: Rect, column: u16, row: u16) -> OverlayHit {
    let pos = Position::new(column, row);
    if close_button_rect(panel).contains(pos) {
        OverlayHit::CloseButton
    } else if panel.contains(pos) {
        OverlayHit::Panel
    } else {
        OverlayHit::Outside
    }
}

/// Body text of the panel for one record.
fn detail_lines(user: &UserRecord) -> Vec<Line<'static>> {
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {label:<14}"), theme::key_hint()),
            Span::styled(value, Style::default().fg(theme::DIM_WHITE)),
        ])
    };
    let heading = |text: &'static str| Line::from(Span::styled(text, theme::section_heading()));
    let geo = &user.address.geo;

    vec![
        Line::from(Span::styled(
            user.name.clone(),
            theme::title_style().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(user.handle(), theme::key_hint())),
        Line::from(""),
        heading("Contact Information"),
        field("Email", user.email.clone()),
        field("Phone", user.phone.clone()),
        Line::from(vec![
            Span::styled(format!("  {:<14}", "Website"), theme::key_hint()),
            Span::styled(user.website_url(), theme::link()),
        ]),
        Line::from(""),
        heading("Address"),
        field("Street", user.address.street.clone()),
        field("Suite", user.address.suite.clone()),
        field("City", user.address.city.clone()),
        field("Zipcode", user.address.zipcode.clone()),
        field("Location", format!("View on Map ({}, {})", geo.lat, geo.lng)),
        Line::from(vec![
            Span::raw(format!("  {:<14}", "")),
            Span::styled(geo.map_url(), theme::link()),
        ]),
        Line::from(""),
        heading("Company"),
        field("Name", user.company.name.clone()),
        field("Catch Phrase", user.company.catch_phrase.clone()),
        field("BS", user.company.bs.clone()),
    ]
}

pub struct DetailOverlay {
    /// Panel rect of the last render, for click hit testing.
    last_panel: Cell<Option<Rect>>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self {
            last_panel: Cell::new(None),
        }
    }
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DetailOverlay {
    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        _state: &ApplicationState,
    ) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => Some(Action::CloseDetail),
            _ => None,
        })
    }

    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        _state: &ApplicationState,
    ) -> Result<Option<Action>> {
        let Some(panel) = self.last_panel.get() else {
            return Ok(None);
        };
        Ok(hit_test(panel, column, row).intent())
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &ApplicationState) {
        let Some(user) = state.selected() else {
            self.last_panel.set(None);
            return;
        };

        let panel = panel_rect(area);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .title(" User Details ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, theme::delete_control())),
            close_button_rect(panel),
        );

        frame.render_widget(
            Paragraph::new(detail_lines(user)).wrap(Wrap { trim: false }),
            inner,
        );

        self.last_panel.set(Some(panel));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn panel_is_centered_and_clamped() {
        let panel = panel_rect(SCREEN);
        assert_eq!(panel, Rect::new(24, 7, 72, 25));

        let small = panel_rect(Rect::new(0, 0, 40, 10));
        assert_eq!(small, Rect::new(2, 1, 36, 8));
    }

    #[test]
    fn close_control_sits_on_top_border() {
        let panel = panel_rect(SCREEN);
        let close = close_button_rect(panel);
        assert_eq!(close.y, panel.y);
        assert_eq!(close.right(), panel.right() - 2);
        assert_eq!(hit_test(panel, close.x, close.y), OverlayHit::CloseButton);
        assert_eq!(hit_test(panel, close.x + 2, close.y), OverlayHit::CloseButton);
    }

    #[test]
    fn clicks_inside_panel_never_close() {
        let panel = panel_rect(SCREEN);
        for (col, row) in [
            (panel.x, panel.y),
            (panel.x + 5, panel.y + 5),
            (panel.right() - 1, panel.bottom() - 1),
            (panel.x + 1, panel.y),
        ] {
            let hit = hit_test(panel, col, row);
            assert_eq!(hit, OverlayHit::Panel, "({col}, {row})");
            assert_eq!(hit.intent(), None);
        }
    }

    #[test]
    fn clicks_outside_panel_always_close() {
        let panel = panel_rect(SCREEN);
        for (col, row) in [
            (0, 0),
            (panel.x - 1, panel.y),
            (panel.right(), panel.y + 3),
            (panel.x, panel.bottom()),
            (119, 39),
        ] {
            let hit = hit_test(panel, col, row);
            assert_eq!(hit, OverlayHit::Outside, "({col}, {row})");
            assert_eq!(hit.intent(), Some(Action::CloseDetail));
        }
    }
}
