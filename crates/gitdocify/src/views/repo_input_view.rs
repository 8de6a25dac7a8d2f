//! Repository Input View
//!
//! Floating form for the repository URL and the commit limit. Up/Down walk
//! through recently documented repositories.

use crate::actions::{Action, NavigationAction, RepoInputAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, RepoInputField, RepoInputState};
use crate::views::{centered, View, ViewId};
use docify_theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct RepoInputView;

impl RepoInputView {
    pub fn new() -> Self {
        Self
    }
}

impl View for RepoInputView {
    fn view_id(&self) -> ViewId {
        ViewId::RepoInput
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.repo_input, state.config.max_commits(), &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Previous => RepoInputAction::HistoryOlder,
            NavigationAction::Next => RepoInputAction::HistoryNewer,
            NavigationAction::ToTop | NavigationAction::ToBottom => return None,
        };
        Some(Action::RepoInput(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => RepoInputAction::Char(c),
            TextInputAction::Backspace => RepoInputAction::Backspace,
            TextInputAction::ClearLine => RepoInputAction::ClearField,
            TextInputAction::NextField => RepoInputAction::NextField,
            TextInputAction::PreviousField => RepoInputAction::PrevField,
            TextInputAction::Escape => RepoInputAction::Close,
            TextInputAction::Confirm => RepoInputAction::Submit,
        };
        Some(Action::RepoInput(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::RepoInput(_)
                | Action::ViewContext(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

fn render(form: &RepoInputState, default_max_commits: u32, theme: &Theme, area: Rect, f: &mut Frame) {
    let overlay = Block::default().style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    let width = (area.width * 65 / 100).clamp(55, 90);
    let popup = centered(area, width, 10);
    f.render_widget(Clear, popup);

    let footer = Line::from(vec![
        Span::styled(" Tab", theme.key_hint()),
        Span::styled(" field  ", theme.muted()),
        Span::styled("↑/↓", theme.key_hint()),
        Span::styled(" recent  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" generate  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Document Repository ")
        .title_style(theme.panel_title())
        .title_bottom(footer)
        .title_alignment(ratatui::layout::Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup);

    let inner = popup.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [instructions, _, url, commits, _, recent] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter a GitHub repository URL to generate its documentation:",
            theme.key_description(),
        )),
        instructions,
    );

    render_field(
        f,
        url,
        "Repository",
        &form.url,
        form.focused_field == RepoInputField::Url,
        theme,
        "https://github.com/owner/repo",
    );

    let commits_placeholder = format!("{} ({})", default_max_commits, RepoInputState::max_commits_hint());
    render_field(
        f,
        commits,
        "Commits",
        &form.max_commits,
        form.focused_field == RepoInputField::MaxCommits,
        theme,
        &commits_placeholder,
    );

    let recent_text = match form.history_index {
        Some(i) => format!("recent {}/{}", i + 1, form.recent.len()),
        None if form.recent.is_empty() => String::new(),
        None => format!("{} recent repositories", form.recent.len()),
    };
    f.render_widget(Paragraph::new(Span::styled(recent_text, theme.muted())), recent);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    placeholder: &str,
) {
    let label_width = 12;
    let indicator = if focused { "> " } else { "  " };
    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(indicator, theme.key_hint()),
        Span::styled(format!("{:width$}", format!("{}:", label), width = label_width), label_style),
    ];

    if value.is_empty() {
        if focused {
            spans.push(Span::styled("▌", theme.key_hint()));
        }
        spans.push(Span::styled(placeholder.to_string(), theme.placeholder().dim()));
    } else {
        let value_style = if focused { theme.selected() } else { theme.text() };
        spans.push(Span::styled(value.to_string(), value_style));
        if focused {
            spans.push(Span::styled("▌", theme.key_hint()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
