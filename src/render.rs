//! Turning a finished word search into an HTML document.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use html::{
    content::Heading1,
    root::{Body, Html},
    tables::{Table, TableCell, TableRow},
    text_content::Paragraph,
};

use crate::{Error, WordSearch};

const PAGE_STYLE: &str = "font-family: 'Courier New', monospace; text-align: center";
const GRID_ROW_STYLE: &str = "white-space: pre";
const WORDS_TABLE_STYLE: &str = "border-spacing: 40px; margin-left: auto; margin-right: auto";
const WORDS_ROW_STYLE: &str = "text-align: center; vertical-align: middle";

const LETTER_SPACING: &str = "   ";
const DIVIDER_WIDTH: usize = 74;
const WORDS_PER_ROW: usize = 3;

/// Renders the grid, a divider and the word list under `title`.
pub fn render_html(search: &WordSearch, title: &str) -> String {
    let mut doc = Html::builder();
    let mut body = Body::builder();
    body.style(PAGE_STYLE);

    // Builder text goes out verbatim
    body.push(Heading1::builder().text(escape(title)).build());

    for row in search.grid().rows_iter() {
        let letters: String = row.map(|ch| format!("{ch}{LETTER_SPACING}")).collect();

        body.push(
            Paragraph::builder()
                .style(GRID_ROW_STYLE)
                .text(letters)
                .build(),
        );
    }

    body.push(
        Paragraph::builder()
            .text("-".repeat(DIVIDER_WIDTH))
            .build(),
    );

    let mut words_table = Table::builder();
    words_table.style(WORDS_TABLE_STYLE);
    for chunk in search.words().chunks(WORDS_PER_ROW) {
        let mut words_row = TableRow::builder();
        words_row.style(WORDS_ROW_STYLE);
        for word in chunk {
            words_row.push(TableCell::builder().text(word.to_uppercase()).build());
        }
        words_table.push(words_row.build());
    }
    body.push(words_table.build());

    doc.push(body.build());

    doc.build().to_string()
}

/// The name of a document created at `timestamp`.
pub fn output_file_name(timestamp: NaiveDateTime) -> String {
    format!("WORD_SEARCH-{}.html", timestamp.format("%Y%m%d%H%M%S%6f"))
}

/// Writes the document into `dest_dir` under a timestamped name and returns its path.
pub fn write_html(dest_dir: &Path, search: &WordSearch, title: &str) -> Result<PathBuf, Error> {
    let path = dest_dir.join(output_file_name(Local::now().naive_local()));

    fs::write(&path, render_html(search, title))?;

    Ok(path)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
