use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use pagenav_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::components::{Component, HintBarComponent, NavListComponent};
use crate::app::App;

/// Root view: the page list above a one-line status/hint strip.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_list_view: NavListComponent,
    pub hint_bar_view: HintBarComponent,
}

impl MainView {
    /// Routes application messages to `App`.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(msg)
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Char('r') => vec![Effect::Reload],
            _ => self.nav_list_view.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.nav_list_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [list_area, hint_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(rect);
        self.nav_list_view.render(frame, list_area, app);
        self.hint_bar_view.render(frame, hint_area, app);
    }
}
