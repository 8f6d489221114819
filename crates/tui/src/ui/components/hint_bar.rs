//! Single-line strip under the list: the latest status message when there is
//! one, key hints otherwise.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

const HINTS: &[(&str, &str)] = &[
    (" ↑/↓", " Navigate"),
    (" Enter", " Open"),
    (" r", " Reload"),
    (" q", " Quit"),
];

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let line = match app.status() {
            Some(status) => {
                let style = if status.is_error {
                    theme.status_error()
                } else {
                    theme.status_info()
                };
                Line::styled(format!(" {}", status.message), style)
            }
            None => Line::from(th::build_hint_spans(theme, HINTS)),
        };
        frame.render_widget(Paragraph::new(line).style(th::panel_style(theme)), rect);
    }
}
