//! Commit List View
//!
//! The base view: project header and the collapsible commit list.

use crate::actions::{Action, CommitListAction, ContextAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::CommitListViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct CommitListView;

impl CommitListView {
    pub fn new() -> Self {
        Self
    }
}

impl View for CommitListView {
    fn view_id(&self) -> ViewId {
        ViewId::CommitList
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = CommitListViewModel::from_state(state);
        let theme = &state.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(vm.title.clone())
            .title_style(theme.panel_title())
            .title_bottom(vm.hints.clone())
            .border_style(theme.panel_border())
            .style(ratatui::style::Style::default().bg(theme.bg_secondary));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let header_height = if vm.header.is_empty() {
            0
        } else {
            vm.header.len() as u16 + 1
        };
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(inner);

        if header_height > 0 {
            f.render_widget(Paragraph::new(vm.header.clone()), header_area);
        }

        let offset = vm.scroll_offset(list_area.height as usize);
        let list = Paragraph::new(vm.lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
        f.render_widget(list, list_area);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CommitListAction::NavigateNext,
            NavigationAction::Previous => CommitListAction::NavigatePrevious,
            NavigationAction::ToTop => CommitListAction::NavigateToTop,
            NavigationAction::ToBottom => CommitListAction::NavigateToBottom,
        };
        Some(Action::CommitList(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        let action = match action {
            ContextAction::ToggleSelect => CommitListAction::Toggle,
            ContextAction::ExpandAll => CommitListAction::ExpandAll,
            ContextAction::CollapseAll => CommitListAction::CollapseAll,
        };
        Some(Action::CommitList(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Navigate(_)
                | Action::ViewContext(_)
                | Action::RepoInput(_)
                | Action::Docs(_)
                | Action::Global(_)
        )
    }
}
