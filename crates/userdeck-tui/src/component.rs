//! Component trait — the building block for every UI element.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use userdeck_core::ApplicationState;

use crate::action::Action;

/// Every UI element implements Component.
///
/// Components never own application data. They render from the
/// controller's [`ApplicationState`] and turn input into [`Action`]s;
/// the app loop applies those to the controller.
///
/// Lifecycle: (`handle_key_event` | `handle_click` | `update` | `render`)*
pub trait Component: Send {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(
        &mut self,
        _key: KeyEvent,
        _state: &ApplicationState,
    ) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Handle a left click at a terminal cell. Hit testing runs against the
    /// geometry of the last rendered frame.
    fn handle_click(
        &mut self,
        _column: u16,
        _row: u16,
        _state: &ApplicationState,
    ) -> Result<Option<Action>> {
        Ok(None)
    }

    /// React to an action that has already been applied to `state`.
    fn update(&mut self, _action: &Action, _state: &ApplicationState) -> Result<()> {
        Ok(())
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect, state: &ApplicationState);
}
