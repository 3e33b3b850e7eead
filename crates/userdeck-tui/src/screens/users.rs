//! Users screen — the list view: one two-line row per record, with a
//! delete control in the trailing ACTION column.

use std::cell::{Cell, RefCell};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Cell as TableCell, Row, Table, TableState};

use userdeck_core::{ApplicationState, UserId, UserRecord};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

/// Every data row spans two terminal lines.
pub const ROW_HEIGHT: u16 = 2;
const HEADER_HEIGHT: u16 = 1;
/// Width of the trailing ACTION column.
const ACTION_WIDTH: u16 = 8;
const DELETE_ICON: &str = "✕";

const HEADERS: [&str; 6] = ["NAME/EMAIL", "ADDRESS", "PHONE", "WEBSITE", "COMPANY", "ACTION"];

/// What a click or key press on the list asks for. Exactly one per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    Select(UserId),
    Delete(UserId),
}

impl ListIntent {
    pub fn id(self) -> UserId {
        match self {
            Self::Select(id) | Self::Delete(id) => id,
        }
    }
}

impl From<ListIntent> for Action {
    fn from(intent: ListIntent) -> Self {
        match intent {
            ListIntent::Select(id) => Self::SelectUser(id),
            ListIntent::Delete(id) => Self::DeleteUser(id),
        }
    }
}

/// Map a click to a list intent.
///
/// `table` is the area the table was drawn into (header row included),
/// `offset` the index of the first visible record and `ids` the records in
/// the order they were drawn. Clicks in the ACTION column delete; anywhere
/// else on a row selects. The header, the gap below the last row, and
/// everything outside `table` yield nothing.
pub fn hit_test(
    table: Rect,
    offset: usize,
    ids: &[UserId],
    column: u16,
    row: u16,
) -> Option<ListIntent> {
    let first_row_y = table.y.saturating_add(HEADER_HEIGHT);
    if column < table.x || column >= table.right() || row < first_row_y || row >= table.bottom() {
        return None;
    }

    let index = offset + usize::from((row - first_row_y) / ROW_HEIGHT);
    let id = *ids.get(index)?;

    if column >= table.right().saturating_sub(ACTION_WIDTH) {
        Some(ListIntent::Delete(id))
    } else {
        Some(ListIntent::Select(id))
    }
}

pub struct UsersScreen {
    table_state: TableState,
    /// Table area of the last render, for click hit testing.
    last_table_area: Cell<Option<Rect>>,
    /// Scroll offset of the last render.
    last_offset: Cell<usize>,
    /// Record ids in the order the last render drew them.
    last_rendered_ids: RefCell<Vec<UserId>>,
}

impl UsersScreen {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            last_table_area: Cell::new(None),
            last_offset: Cell::new(0),
            last_rendered_ids: RefCell::new(Vec::new()),
        }
    }

    /// Record under the cursor.
    fn cursor_user<'a>(&self, state: &'a ApplicationState) -> Option<&'a UserRecord> {
        self.table_state
            .selected()
            .and_then(|idx| state.users().get(idx))
    }

    /// Keep the cursor on a live row after the list changed.
    fn clamp_cursor(&mut self, len: usize) {
        match (self.table_state.selected(), len) {
            (_, 0) => self.table_state.select(None),
            (None, _) => self.table_state.select(Some(0)),
            (Some(idx), _) if idx >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    fn build_row(user: &UserRecord) -> Row<'static> {
        let name = Text::from(vec![
            Line::styled(user.name.clone(), theme::title_style()),
            Line::from(user.email.clone()),
        ]);
        let address = Text::from(vec![
            Line::from(user.address.street_line()),
            Line::from(user.address.city_line()),
        ]);

        Row::new(vec![
            TableCell::from(name),
            TableCell::from(address),
            TableCell::from(user.phone.clone()),
            TableCell::from(user.website.clone()),
            TableCell::from(user.company.name.clone()),
            TableCell::from(Span::styled(DELETE_ICON, theme::delete_control())),
        ])
        .height(ROW_HEIGHT)
        .style(theme::table_row())
    }
}

impl Default for UsersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for UsersScreen {
    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        state: &ApplicationState,
    ) -> Result<Option<Action>> {
        let len = state.users().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, len),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, len),
            KeyCode::Char('g') | KeyCode::Home => self.move_cursor(isize::MIN, len),
            KeyCode::Char('G') | KeyCode::End => self.move_cursor(isize::MAX, len),
            KeyCode::Enter => {
                return Ok(self
                    .cursor_user(state)
                    .map(|u| ListIntent::Select(u.id).into()));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return Ok(self
                    .cursor_user(state)
                    .map(|u| ListIntent::Delete(u.id).into()));
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        state: &ApplicationState,
    ) -> Result<Option<Action>> {
        let Some(table) = self.last_table_area.get() else {
            return Ok(None);
        };
        let drawn = self.last_rendered_ids.borrow();
        // A drawn row may have been deleted before the next frame
        let intent = hit_test(table, self.last_offset.get(), &drawn, column, row)
            .filter(|intent| state.user(intent.id()).is_some());

        if let Some(ListIntent::Select(id)) = intent {
            let idx = state.users().iter().position(|u| u.id == id);
            self.table_state.select(idx);
        }
        Ok(intent.map(Action::from))
    }

    fn update(&mut self, action: &Action, state: &ApplicationState) -> Result<()> {
        if matches!(action, Action::UsersFetched(_) | Action::DeleteUser(_)) {
            self.clamp_cursor(state.users().len());
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &ApplicationState) {
        let users = state.users();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Row::new(
            HEADERS
                .iter()
                .map(|h| TableCell::from(*h).style(theme::table_header())),
        )
        .height(HEADER_HEIGHT);

        let rows: Vec<Row> = users.iter().map(Self::build_row).collect();

        // Flexible columns absorb the slack so ACTION stays flush right
        let widths = [
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(ACTION_WIDTH),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(theme::table_selected());

        let mut table_state = self.table_state;
        frame.render_stateful_widget(table, inner, &mut table_state);

        self.last_table_area.set(Some(inner));
        self.last_offset.set(table_state.offset());
        *self.last_rendered_ids.borrow_mut() = users.iter().map(|u| u.id).collect();
    }
}
