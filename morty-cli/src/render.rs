//! Terminal rendering of a view model snapshot.

use crossterm::style::Stylize;
use morty_lib::model::Character;
use morty_lib::table::Direction;
use morty_lib::table::FilterKind;
use morty_lib::table::FilterValue;
use morty_lib::table::HeaderMeta;
use morty_lib::table::PaginationSummary;
use morty_lib::table::ViewModel;

/// Widest a cell may get before it is cut.
const MAX_CELL_WIDTH: usize = 28;

/// Renders the whole frame: filters, table, footer and detail card.
pub fn frame(model: &ViewModel<'_>) -> String {
    let mut lines = filters(&model.headers);
    lines.push(String::new());
    lines.extend(table(model));
    if model.no_data {
        lines.push("No data matches your filters".yellow().to_string());
    }
    lines.push(String::new());
    lines.push(footer(&model.summary));
    if let Some((_, character)) = model.selected {
        lines.push(String::new());
        lines.extend(details(character));
    }
    lines.join("\n")
}

/// One line per filterable column showing its active value or options.
fn filters(headers: &[HeaderMeta]) -> Vec<String> {
    headers
        .iter()
        .filter_map(|header| {
            let kind = header.filter_kind.as_ref()?;
            let value = match kind {
                FilterKind::Substring => match &header.filter {
                    Some(FilterValue::Text(text)) => format!("\"{}\"", text).cyan().to_string(),
                    _ => "Search...".dark_grey().to_string(),
                },
                FilterKind::Inclusion { options } => options
                    .iter()
                    .map(|option| {
                        let on = header
                            .filter
                            .as_ref()
                            .is_some_and(|value| value.contains_option(option));
                        if on {
                            format!("[x] {}", option).cyan().to_string()
                        } else {
                            format!("[ ] {}", option)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
            };
            Some(format!("{:>9}: {}", header.label.clone().bold(), value))
        })
        .collect()
}

fn table(model: &ViewModel<'_>) -> Vec<String> {
    let cells: Vec<Vec<String>> = model
        .rows
        .iter()
        .map(|(_, record)| {
            model
                .headers
                .iter()
                .map(|header| fit(&header.column.value(record).to_string()))
                .collect()
        })
        .collect();

    let titles: Vec<String> = model
        .headers
        .iter()
        .map(|header| format!("{} {}", header.label, sort_indicator(header.sort)))
        .collect();

    let widths = column_widths(&titles, &cells);

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format!("   {}", join_padded(&titles, &widths)).bold().to_string());
    lines.push(format!("   {}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len())));

    for ((id, _), row) in model.rows.iter().zip(&cells) {
        let selected = model.selected.is_some_and(|(selected, _)| selected == *id);
        let line = join_padded(row, &widths);
        if selected {
            lines.push(format!(" > {}", line).reverse().to_string());
        } else {
            lines.push(format!("   {}", line));
        }
    }
    lines
}

fn footer(summary: &PaginationSummary) -> String {
    let control = |label: &str, enabled: bool| {
        if enabled {
            label.bold().to_string()
        } else {
            label.dark_grey().to_string()
        }
    };

    format!(
        "{} {} {} {}   Page {} of {}   ({} of {} records, {} per page)",
        control("<<", summary.can_previous),
        control("<", summary.can_previous),
        control(">", summary.can_next),
        control(">>", summary.can_next),
        summary.current_page.to_string().bold(),
        summary.total_pages.to_string().bold(),
        summary.total_filtered,
        summary.total_records,
        summary.page_size,
    )
}

/// The detail card for the selected character.
fn details(character: &Character) -> Vec<String> {
    vec![
        character.name.clone().bold().green().to_string(),
        format!("  Status:   {}", character.status),
        format!("  Species:  {}", character.species),
        format!("  Gender:   {}", character.gender),
        format!("  Origin:   {}", character.origin.name),
        format!("  Location: {}", character.location.name),
        format!("  Image:    {}", character.image).dark_grey().to_string(),
    ]
}

pub fn sort_indicator(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Asc) => "⬘",
        Some(Direction::Desc) => "⬙",
        None => "◇",
    }
}

/// Cuts a cell to `MAX_CELL_WIDTH` characters, marking the cut.
pub fn fit(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
    cut.push('…');
    cut
}

fn column_widths(titles: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .chain(std::iter::once(title))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
