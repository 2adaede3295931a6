//! Plain-text rendering of the current table page

use crate::column::{Alignment, Column};
use crate::table::{SortDirection, TableView};

/// Pad `text` to `width` characters according to `alignment`
fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let len = text.chars().count();
    let fill = width.saturating_sub(len);
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

/// Footer line describing the current page
pub fn page_summary(view: &TableView) -> String {
    let page = view.page();
    format!(
        "Page {} of {} ({} rows, {} per page)",
        page.current_page,
        view.page_count().max(1),
        view.total_rows(),
        page.page_size
    )
}

/// Render the visible page as an aligned text table with a footer.
///
/// The active sort column is marked with `^` (ascending) or `v`
/// (descending) after its header.
pub fn render_page(view: &TableView) -> String {
    if view.is_empty() {
        return "No data".to_string();
    }

    let columns: &[Column] = view.columns();
    let sort = view.sort();
    let headers: Vec<String> = columns
        .iter()
        .map(|c| {
            if sort.field.as_deref() == Some(c.field.as_str()) {
                let marker = match sort.direction {
                    SortDirection::Asc => '^',
                    SortDirection::Desc => 'v',
                };
                format!("{} {marker}", c.display_name)
            } else {
                c.display_name.clone()
            }
        })
        .collect();

    let cells: Vec<Vec<String>> = view
        .page_rows()
        .into_iter()
        .map(|row| columns.iter().map(|c| c.format(row)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 3);
    lines.push(
        headers
            .iter()
            .zip(columns)
            .zip(&widths)
            .map(|((h, c), w)| pad(h, *w, c.alignment))
            .collect::<Vec<_>>()
            .join(" | "),
    );
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        lines.push(
            row.iter()
                .zip(columns)
                .zip(&widths)
                .map(|((text, c), w)| pad(text, *w, c.alignment))
                .collect::<Vec<_>>()
                .join(" | "),
        );
    }
    lines.push(page_summary(view));

    lines.join("\n")
}
