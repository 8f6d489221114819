//! Component system for the terminal host.
//!
//! Components own a region of the screen: they draw into a `Rect` and turn
//! the input they receive into `Effect`s that the runtime executes.

use crossterm::event::{KeyEvent, MouseEvent};
use pagenav_types::Effect;
use ratatui::{Frame, layout::Rect};

use crate::app::App;

/// A UI component with its own rendering and input handling.
///
/// Handlers report side effects as `Effect`s instead of performing them.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land on this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

/// Index of the area in `areas` containing the point, if the point is inside
/// `container` at all.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !container.contains((x, y).into()) {
        return None;
    }
    areas.iter().position(|area| area.contains((x, y).into()))
}
