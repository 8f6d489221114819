use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use pagenav_engine::LinkEntry;
use pagenav_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::{Theme, theme_helpers as th};

const BRANCH_MARKER: &str = "▾ ";
const LEAF_MARKER: &str = "• ";
const ELLIPSIS: char = '…';

/// Renders the page list and turns clicks and Enter into activations.
#[derive(Debug, Default)]
pub struct NavListComponent;

impl NavListComponent {
    fn push_activate_effect(effects: &mut Vec<Effect>, entry: &LinkEntry) {
        effects.push(Effect::Activate(entry.page_id.clone()));
    }
}

impl Component for NavListComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = vec![];
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.nav.cycle(true),
            KeyCode::Up | KeyCode::Char('k') => app.nav.cycle(false),
            KeyCode::PageDown => app.nav.step(page_rows(app)),
            KeyCode::PageUp => app.nav.step(-page_rows(app)),
            KeyCode::Home => app.nav.first(),
            KeyCode::End => app.nav.last(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = app.cursor_entry() {
                    Self::push_activate_effect(&mut effects, entry);
                }
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = vec![];
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = find_target_index_by_mouse_position(
                    &app.nav.last_area,
                    &app.nav.per_item_areas,
                    mouse.column,
                    mouse.row,
                );
                if let Some(row) = target {
                    let index = app.nav.offset() + row;
                    app.nav.set_cursor(index);
                    if let Some(entry) = app.visual().and_then(|visual| visual.entries.get(index)) {
                        Self::push_activate_effect(&mut effects, entry);
                    }
                }
            }
            MouseEventKind::ScrollDown => app.nav.step(1),
            MouseEventKind::ScrollUp => app.nav.step(-1),
            _ => {}
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(visual) = app.visual().cloned() else {
            return;
        };
        let theme = &*app.theme;
        let block = th::block(theme, Some(visual.title.as_str()), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let indent_width = usize::from(app.adapter().settings().indent_width);
        let height = usize::from(inner.height);
        app.nav.ensure_visible(height);

        let mut per_item_areas = Vec::with_capacity(height.min(visual.len()));
        for (row, entry) in visual.entries.iter().skip(app.nav.offset()).take(height).enumerate() {
            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let is_cursor = app.nav.offset() + row == app.nav.cursor();
            let line = entry_line(theme, entry, indent_width, usize::from(inner.width), is_cursor);
            frame.render_widget(Paragraph::new(line), row_area);
            per_item_areas.push(row_area);
        }
        app.nav.last_area = inner;
        app.nav.per_item_areas = per_item_areas;
    }
}

fn page_rows(app: &App) -> isize {
    isize::try_from(app.nav.last_area.height.max(1)).unwrap_or(1)
}

/// Builds one row: indentation, marker, then the label clipped to `width`.
fn entry_line<T: Theme + ?Sized>(
    theme: &T,
    entry: &LinkEntry,
    indent_width: usize,
    width: usize,
    is_cursor: bool,
) -> Line<'static> {
    let indent = " ".repeat(entry.depth.saturating_mul(indent_width));
    let marker = if entry.expandable { BRANCH_MARKER } else { LEAF_MARKER };
    let prefix = truncate_to_width(&format!("{indent}{marker}"), width);
    let label = truncate_to_width(&entry.label, width.saturating_sub(prefix.width()));

    let label_style = if entry.selected {
        theme.accent_emphasis_style()
    } else {
        theme.text_primary_style()
    };
    let line = Line::from(vec![
        Span::styled(prefix, theme.text_muted_style()),
        Span::styled(label, label_style),
    ]);
    if is_cursor {
        line.style(theme.selection_style())
    } else {
        line.style(Style::default())
    }
}

/// Clips `text` to `max_width` columns, ending in an ellipsis when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut clipped = String::new();
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        clipped.push(character);
    }
    clipped.push(ELLIPSIS);
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Reports", 10), "Reports");
        assert_eq!(truncate_to_width("Reports", 7), "Reports");
        assert_eq!(truncate_to_width("Reports", 5), "Repo…");
        assert_eq!(truncate_to_width("報告書類", 5), "報告…");
        assert_eq!(truncate_to_width("Reports", 0), "");
    }

    #[test]
    fn entry_line_indents_by_depth() {
        let theme = crate::ui::theme::DraculaTheme::new();
        let entry = LinkEntry {
            page_id: "sales".into(),
            label: "Sales".into(),
            url: "https://example.com/sales".into(),
            depth: 2,
            selected: false,
            expandable: false,
        };
        let line = entry_line(&theme, &entry, 3, 40, false);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "      • Sales");
    }
}
