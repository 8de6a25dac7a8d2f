//! View model for the commit list
//!
//! Flattens the commit list into display lines: a header per commit, the
//! body of expanded commits, a header per file and the highlighted
//! before/after panes of expanded files. Rendering never mutates state, so
//! the scroll position is derived from the cursor on every frame.

use crate::command_id::CommandId;
use crate::highlight::highlight_block;
use crate::state::{AppState, ListTarget};
use docify_client::{Commit, FileDiff, NO_NOTES};
use docify_theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const NO_PREVIOUS_VERSION: &str = "// No previous version";
pub const NO_NEW_CODE: &str = "// No new code";

const BODY_INDENT: &str = "    ";
const CODE_INDENT: &str = "        ";

#[derive(Debug, Clone)]
pub struct CommitListViewModel {
    /// Block title
    pub title: String,
    /// Description and commit count; empty until commits exist
    pub header: Vec<Line<'static>>,
    pub lines: Vec<Line<'static>>,
    /// Line index of the row under the cursor
    pub cursor_line: Option<usize>,
    /// Key hints for the bottom border
    pub hints: Line<'static>,
}

impl CommitListViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let list = &state.commit_list;

        let mut title = match &list.project {
            Some(project) if !list.is_empty() => format!(" {} ", project.title),
            _ => " GitDocify ".to_string(),
        };
        if state.session.is_loading() && !list.is_empty() {
            title.push_str("· regenerating ");
        }
        if state.session.exporting {
            title.push_str("· exporting PDF ");
        }

        let mut header = match &list.project {
            Some(project) if !list.is_empty() => vec![
                Line::from(vec![
                    Span::styled("Description: ", theme.muted()),
                    Span::styled(project.description.clone(), theme.text()),
                ]),
                Line::from(vec![
                    Span::styled("Total Commits: ", theme.muted()),
                    Span::styled(list.commits.len().to_string(), theme.text()),
                ]),
            ],
            _ => Vec::new(),
        };
        if let (Some(path), false) = (&state.session.last_export, header.is_empty()) {
            header.push(Line::from(vec![
                Span::styled("Last export: ", theme.muted()),
                Span::styled(path.display().to_string(), theme.success()),
            ]));
        }

        let selected = list.selected();
        let mut lines = Vec::new();
        let mut cursor_line = None;

        if list.is_empty() {
            lines.push(empty_message(state));
        }

        for (i, commit) in list.commits.iter().enumerate() {
            let expanded = list.is_commit_expanded(&commit.sha);
            if selected == Some(ListTarget::Commit(i)) {
                cursor_line = Some(lines.len());
            }
            lines.push(commit_header(
                commit,
                expanded,
                selected == Some(ListTarget::Commit(i)),
                theme,
            ));

            if !expanded {
                continue;
            }

            push_commit_body(&mut lines, commit, theme);

            for (j, file) in commit.files.iter().enumerate() {
                let file_expanded = list.is_file_expanded(&commit.sha, j);
                let is_cursor = selected == Some(ListTarget::File(i, j));
                if is_cursor {
                    cursor_line = Some(lines.len());
                }
                lines.push(file_header(file, file_expanded, is_cursor, theme));
                if file_expanded {
                    push_file_panes(&mut lines, file, theme);
                }
            }
        }

        Self {
            title,
            header,
            lines,
            cursor_line,
            hints: hints(state),
        }
    }

    /// First line to show in a viewport of `height` lines
    ///
    /// The cursor row is kept in the upper third so the content it opens
    /// is visible below it.
    pub fn scroll_offset(&self, height: usize) -> usize {
        let Some(cursor) = self.cursor_line else {
            return 0;
        };
        let max_offset = self.lines.len().saturating_sub(height);
        cursor.saturating_sub(height / 3).min(max_offset)
    }
}

fn empty_message(state: &AppState) -> Line<'static> {
    let theme = &state.theme;
    match &state.session.loading {
        Some(url) => Line::from(Span::styled(
            format!("⏳ Generating documentation for {} ...", url),
            theme.warning(),
        )),
        None => Line::from(vec![
            Span::styled("No documentation yet. Press ", theme.muted()),
            Span::styled("n", theme.key_hint()),
            Span::styled(" to enter a repository URL.", theme.muted()),
        ]),
    }
}

fn commit_header(commit: &Commit, expanded: bool, is_cursor: bool, theme: &Theme) -> Line<'static> {
    let arrow = if expanded { "▾ " } else { "▸ " };
    let line = Line::from(vec![
        Span::styled(arrow, theme.muted()),
        Span::styled(commit.sha.clone(), theme.commit_sha()),
        Span::styled(" — ", theme.muted()),
        Span::styled(commit.summary.clone(), theme.text()),
    ]);
    highlight_cursor(line, is_cursor, theme)
}

fn push_commit_body(lines: &mut Vec<Line<'static>>, commit: &Commit, theme: &Theme) {
    lines.push(labelled("Author: ", format!("{} <{}>", commit.author, commit.email), theme));
    lines.push(labelled("Date: ", commit.date.clone(), theme));

    lines.push(label_line("Message:", theme));
    for text in commit.message.lines() {
        lines.push(indented(CODE_INDENT, Span::styled(text.to_string(), theme.text())));
    }

    lines.push(label_line("Code Notes:", theme));
    match commit.notes() {
        Some(notes) => {
            for text in notes.lines() {
                lines.push(indented(CODE_INDENT, Span::styled(text.to_string(), theme.text())));
            }
        }
        None => lines.push(indented(CODE_INDENT, Span::styled(NO_NOTES, theme.placeholder()))),
    }

    lines.push(indented(
        BODY_INDENT,
        Span::styled("Files Changed:", theme.section_header()),
    ));
}

fn file_header(file: &FileDiff, expanded: bool, is_cursor: bool, theme: &Theme) -> Line<'static> {
    let arrow = if expanded { "▾ " } else { "▸ " };
    let line = Line::from(vec![
        Span::raw(BODY_INDENT),
        Span::styled(arrow, theme.muted()),
        Span::styled(file.file.clone(), theme.file_header()),
    ]);
    highlight_cursor(line, is_cursor, theme)
}

fn push_file_panes(lines: &mut Vec<Line<'static>>, file: &FileDiff, theme: &Theme) {
    push_pane(lines, "Before:", theme.before_label(), &file.file, file.before_text(), NO_PREVIOUS_VERSION, theme);
    push_pane(lines, "After:", theme.after_label(), &file.file, file.after_text(), NO_NEW_CODE, theme);
}

fn push_pane(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    label_style: Style,
    path: &str,
    code: Option<&str>,
    placeholder: &'static str,
    theme: &Theme,
) {
    lines.push(indented(CODE_INDENT, Span::styled(label, label_style)));
    match code {
        Some(code) => {
            for line in highlight_block(path, code) {
                let mut spans = vec![Span::styled(format!("{}│ ", CODE_INDENT), theme.muted())];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
        }
        None => lines.push(indented(
            CODE_INDENT,
            Span::styled(format!("│ {}", placeholder), theme.placeholder()),
        )),
    }
}

fn labelled(label: &'static str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(BODY_INDENT),
        Span::styled(label, theme.muted().add_modifier(Modifier::BOLD)),
        Span::styled(value, theme.text()),
    ])
}

fn label_line(label: &'static str, theme: &Theme) -> Line<'static> {
    indented(BODY_INDENT, Span::styled(label, theme.muted().add_modifier(Modifier::BOLD)))
}

fn indented(indent: &'static str, span: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::raw(indent), span])
}

fn highlight_cursor(line: Line<'static>, is_cursor: bool, theme: &Theme) -> Line<'static> {
    if is_cursor {
        line.patch_style(theme.selected())
    } else {
        line
    }
}

fn hints(state: &AppState) -> Line<'static> {
    let theme = &state.theme;
    let commands = [
        CommandId::NavigateNext,
        CommandId::CommitToggle,
        CommandId::CommitExpandAll,
        CommandId::CommitCollapseAll,
        CommandId::RepositoryOpen,
        CommandId::DocsRefresh,
        CommandId::DocsExport,
        CommandId::GlobalQuit,
    ];

    let mut spans = vec![Span::raw(" ")];
    for command in commands {
        let Some(hint) = state.keymap.compact_hint_for_command(command) else {
            continue;
        };
        spans.push(Span::styled(hint, theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", command.description()), theme.key_description()));
    }
    Line::from(spans)
}
