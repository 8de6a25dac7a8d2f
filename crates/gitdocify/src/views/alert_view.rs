//! Alert View
//!
//! Modal notification; input goes nowhere else until it is dismissed.

use crate::actions::{Action, AlertAction, ContextAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{centered, View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct AlertView;

impl AlertView {
    pub fn new() -> Self {
        Self
    }
}

impl View for AlertView {
    fn view_id(&self) -> ViewId {
        ViewId::Alert
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let Some(message) = state.alert.current() else {
            return;
        };
        let theme = &state.theme;

        let width = (area.width * 60 / 100).clamp(40, 90);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let text_lines = message.chars().count().div_ceil(text_width).max(1) as u16;
        let popup = centered(area, width, text_lines + 4);

        let pending = state.alert.pending();
        let title = if pending > 0 {
            format!(" Notice (+{} more) ", pending)
        } else {
            " Notice ".to_string()
        };
        let footer = Line::from(vec![
            Span::styled(" Enter", theme.key_hint()),
            Span::styled("/", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" dismiss ", theme.muted()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.warning())
            .title_bottom(footer)
            .title_alignment(Alignment::Center)
            .border_style(theme.warning().add_modifier(Modifier::BOLD))
            .style(theme.panel_background());

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(message.to_string())
                .style(theme.text())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block.padding(ratatui::widgets::Padding::new(1, 1, 1, 0))),
            popup,
        );
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::ToggleSelect => Some(Action::Alert(AlertAction::Dismiss)),
            ContextAction::ExpandAll | ContextAction::CollapseAll => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::ViewContext(_) | Action::Global(_))
    }
}
