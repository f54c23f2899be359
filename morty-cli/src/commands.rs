//! Typed commands, each mapped onto one table view operation.

use morty_lib::error::InputError;
use morty_lib::model::Column;
use morty_lib::table::PAGE_SIZE_OPTIONS;
use morty_lib::table::TableView;
use thiserror::Error;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    /// Free-text filter; empty text clears it.
    Filter { column: Column, text: String },
    /// Toggle one option of a multi-select filter.
    Toggle { column: Column, option: String },
    Clear { column: Column },
    Sort { column: Column },
    /// 1-based row on the visible page.
    Select { row: usize },
    Next,
    Previous,
    First,
    Last,
    /// Raw "go to page" input.
    Page { input: String },
    /// Page-size picker.
    Size { size: usize },
    /// Raw "custom size" input.
    Custom { input: String },
    Quit,
}

/// Command line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown column '{0}'.")]
    UnknownColumn(String),
    #[error("Page size must be one of 10, 250, 500 or 1000. Use 'custom' for other sizes.")]
    NotAPresetSize,
    #[error(transparent)]
    Input(#[from] InputError),
}

pub const HELP: &str = "\
Commands:
  show                      redraw the table
  filter <column> [text]    substring filter (no text clears it)
  toggle <column> <option>  toggle a multi-select option
  clear <column>            clear a column's filter
  sort <column>             cycle sort: ascending, descending, off
  select <row>              select/deselect a row on this page (1-based)
  next | prev | first | last
  page <n>                  go to page n
  size <n>                  rows per page: 10, 250, 500 or 1000
  custom <n>                any page size up to the record count
  quit";

impl Command {
    /// Parses one line of input. Blank lines redraw.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" | "show" => Self::Show,
            "help" | "?" => Self::Help,
            "filter" => {
                let (column, text) = split_column(rest, "filter <column> [text]")?;
                Self::Filter {
                    column,
                    text: text.to_string(),
                }
            }
            "toggle" => {
                let (column, option) = split_column(rest, "toggle <column> <option>")?;
                if option.is_empty() {
                    return Err(CommandError::Usage("toggle <column> <option>"));
                }
                Self::Toggle {
                    column,
                    option: option.to_string(),
                }
            }
            "clear" => Self::Clear {
                column: split_column(rest, "clear <column>")?.0,
            },
            "sort" => Self::Sort {
                column: split_column(rest, "sort <column>")?.0,
            },
            "select" => Self::Select {
                row: rest
                    .parse::<usize>()
                    .ok()
                    .filter(|row| *row > 0)
                    .ok_or(CommandError::Usage("select <row>"))?,
            },
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Previous,
            "first" => Self::First,
            "last" => Self::Last,
            "page" => Self::Page {
                input: rest.to_string(),
            },
            "size" => {
                let size = rest
                    .parse::<usize>()
                    .map_err(|_| CommandError::Usage("size <n>"))?;
                if !PAGE_SIZE_OPTIONS.contains(&size) {
                    return Err(CommandError::NotAPresetSize);
                }
                Self::Size { size }
            }
            "custom" => Self::Custom {
                input: rest.to_string(),
            },
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    /// Applies this command to the view.
    ///
    /// `Help`, `Show` and `Quit` leave the view untouched.
    pub fn apply(self, view: &mut TableView) -> Result<(), CommandError> {
        match self {
            Self::Help | Self::Show | Self::Quit => {}
            Self::Filter { column, text } => view.set_text_filter(column, &text)?,
            Self::Toggle { column, option } => view.toggle_filter_option(column, &option)?,
            Self::Clear { column } => view.clear_filter(column),
            Self::Sort { column } => view.toggle_sort(column)?,
            Self::Select { row } => {
                view.click_row(row - 1)?;
            }
            Self::Next => view.next_page(),
            Self::Previous => view.previous_page(),
            Self::First => view.first_page(),
            Self::Last => view.last_page(),
            Self::Page { input } => {
                view.page_input_mut().set(input);
                view.submit_page_number()?;
            }
            Self::Size { size } => view.select_page_size(size)?,
            Self::Custom { input } => {
                view.page_size_input_mut().set(input);
                view.submit_custom_page_size()?;
            }
        }
        Ok(())
    }
}

/// Splits `<column> <rest>` and resolves the column identifier.
fn split_column<'a>(args: &'a str, usage: &'static str) -> Result<(Column, &'a str), CommandError> {
    let (name, rest) = match args.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (args, ""),
    };
    if name.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    let column = Column::from_id(&name.to_lowercase())
        .ok_or_else(|| CommandError::UnknownColumn(name.to_string()))?;
    Ok((column, rest))
}

#[cfg(test)]
mod tests {
    use morty_lib::model::Character;
    use morty_lib::model::Gender;
    use morty_lib::model::Records;
    use morty_lib::model::Status;
    use morty_lib::table::TableConfig;

    use super::*;

    fn view() -> TableView {
        let records: Records = (1..=30)
            .map(|id| Character::new(id, format!("Rick {}", id), Status::Alive, "Human", Gender::Male))
            .collect::<Vec<_>>()
            .into();
        TableView::loaded(TableConfig::characters(), records)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert_eq!(Command::parse("n"), Ok(Command::Next));
        assert_eq!(
            Command::parse("filter name Rick Sanchez"),
            Ok(Command::Filter {
                column: Column::Name,
                text: "Rick Sanchez".into()
            })
        );
        assert_eq!(
            Command::parse("toggle Species Mythological Creature"),
            Ok(Command::Toggle {
                column: Column::Species,
                option: "Mythological Creature".into()
            })
        );
        assert_eq!(
            Command::parse("filter name"),
            Ok(Command::Filter {
                column: Column::Name,
                text: String::new()
            })
        );
        assert_eq!(Command::parse("select 3"), Ok(Command::Select { row: 3 }));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::Unknown("dance".into()))
        );
        assert_eq!(
            Command::parse("sort planet"),
            Err(CommandError::UnknownColumn("planet".into()))
        );
        assert_eq!(Command::parse("size 20"), Err(CommandError::NotAPresetSize));
        assert!(Command::parse("select 0").is_err());
        assert!(Command::parse("toggle status").is_err());
    }

    #[test]
    fn test_apply_navigation_and_input_errors() {
        let mut view = view();

        Command::parse("last").unwrap().apply(&mut view).unwrap();
        assert_eq!(view.snapshot().summary.current_page, 3);

        let err = Command::parse("page 9").unwrap().apply(&mut view).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid page number. Please enter a number between 1 and 3."
        );

        let err = Command::parse("custom 31").unwrap().apply(&mut view).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid custom page size. Please enter a number between 1 and 30."
        );

        Command::parse("select 1").unwrap().apply(&mut view).unwrap();
        assert_eq!(view.snapshot().selected.map(|(_, c)| c.id), Some(21));
    }
}
