//! Commit history document
//!
//! Lays out the project header followed by one section per commit.

use crate::layout::{DocumentLayout, Page};
use crate::style::{
    PageGeometry, TextStyle, ACCENT, BLACK, BODY, FILE, HEADING, MUTED, SHADE_AFTER, SHADE_BEFORE,
    SUCCESS, WARNING,
};
use docify_client::{Commit, FileDiff, ProjectMeta, NO_NOTES};

/// Space after each file block
const FILE_SPACING: f32 = 6.0;

/// Space after each commit section
const COMMIT_SPACING: f32 = 10.0;

/// Lay out the whole document
pub fn layout_document(
    project: &ProjectMeta,
    commits: &[Commit],
    geometry: PageGeometry,
) -> Vec<Page> {
    let mut layout = DocumentLayout::new(geometry);

    layout.add_text(
        &format!("Project: {}", project.title),
        TextStyle::bold(HEADING),
        0.0,
    );
    layout.add_text(
        &format!("Description: {}", project.description),
        TextStyle::regular(BODY),
        0.0,
    );
    layout.add_text(
        &format!("Total Commits: {}", commits.len()),
        TextStyle::regular(BODY),
        0.0,
    );
    layout.add_section_spacing();

    for commit in commits {
        add_commit(&mut layout, commit);
    }

    layout.into_pages()
}

fn add_commit(layout: &mut DocumentLayout, commit: &Commit) {
    let indent = layout.geometry().indent;

    layout.add_separator();
    layout.add_text(&format!("Commit: {}", commit.sha), TextStyle::bold(ACCENT), 0.0);
    layout.add_text(
        &format!("Author: {} <{}>", commit.author, commit.email),
        TextStyle::bold(MUTED),
        0.0,
    );
    layout.add_text(&format!("Date: {}", commit.date), TextStyle::bold(MUTED), 0.0);
    layout.add_text(&format!("Message: {}", commit.message), TextStyle::regular(BLACK), 0.0);
    layout.add_text(&format!("Summary: {}", commit.summary), TextStyle::regular(BLACK), 0.0);

    layout.add_text("Code Notes:", TextStyle::bold(BODY), 0.0);
    layout.add_text(
        commit.notes().unwrap_or(NO_NOTES),
        TextStyle::regular(BLACK),
        indent,
    );

    layout.add_text("Files Changed:", TextStyle::bold(HEADING), 0.0);
    for file in &commit.files {
        add_file(layout, file);
    }

    layout.add_space(COMMIT_SPACING);
}

fn add_file(layout: &mut DocumentLayout, file: &FileDiff) {
    let indent = layout.geometry().indent;

    layout.add_text(&format!("File: {}", file.file), TextStyle::bold(FILE), indent);

    if let Some(before) = file.before_text() {
        layout.add_shaded_block(
            "Before:",
            before,
            TextStyle::regular(WARNING),
            2.0 * indent,
            indent,
            SHADE_BEFORE,
        );
    }

    if let Some(after) = file.after_text() {
        layout.add_shaded_block(
            "After:",
            after,
            TextStyle::regular(SUCCESS),
            2.0 * indent,
            indent,
            SHADE_AFTER,
        );
    }

    layout.add_space(FILE_SPACING);
}

/// All text of the laid out pages in drawing order, one line per run
pub fn text_stream(pages: &[Page]) -> Vec<&str> {
    pages
        .iter()
        .flat_map(|page| page.texts.iter().map(|run| run.text.as_str()))
        .collect()
}
