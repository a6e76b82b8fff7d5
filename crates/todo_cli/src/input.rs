//! Typed command parsing: one input line becomes one view event or host action.

use todo_core::{Todo, TodoId, ViewEvent};

pub const HELP: &str = "\
commands:
  add <title>          create an item
  edit <n>             enter edit mode for row n
  save <n> <title>     save an edit (blank title deletes)
  cancel <n>           leave edit mode unchanged
  done <n> | undone <n>
  rm <n>               delete row n
  clear                delete all completed items
  all | active | completed | route <#/fragment>
  list                 re-render the current filter
  reset                delete every item
  help | quit";

/// What the host should do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(ViewEvent),
    /// Navigate to a route fragment, e.g. `#/active`.
    Route(String),
    List,
    Reset,
    Help,
    Quit,
    Empty,
}

/// Parses one line against the rows currently on screen.
pub fn parse_input(line: &str, entries: &[Todo]) -> Result<Input, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command {
        "" => Input::Empty,
        "add" | "a" => Input::Event(ViewEvent::NewTodo(rest.to_string())),
        "edit" | "e" => Input::Event(ViewEvent::ItemEdit {
            id: row_id(rest, entries)?,
        }),
        "save" | "s" => {
            let (row, title) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Input::Event(ViewEvent::ItemEditDone {
                id: row_id(row, entries)?,
                title: title.to_string(),
            })
        }
        "cancel" => Input::Event(ViewEvent::ItemEditCancel {
            id: row_id(rest, entries)?,
        }),
        "rm" | "remove" => Input::Event(ViewEvent::ItemRemove {
            id: row_id(rest, entries)?,
        }),
        "done" | "x" => Input::Event(ViewEvent::SetAsDone {
            id: row_id(rest, entries)?,
            checked: true,
        }),
        "undone" => Input::Event(ViewEvent::SetAsDone {
            id: row_id(rest, entries)?,
            checked: false,
        }),
        "clear" => Input::Event(ViewEvent::ClearCompleted),
        "all" => Input::Route("#/".to_string()),
        "active" => Input::Route("#/active".to_string()),
        "completed" => Input::Route("#/completed".to_string()),
        "route" => Input::Route(rest.to_string()),
        "list" | "ls" => Input::List,
        "reset" => Input::Reset,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(input)
}

fn row_id(value: &str, entries: &[Todo]) -> Result<TodoId, String> {
    let position: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("expected a row number, got `{value}`"))?;
    position
        .checked_sub(1)
        .and_then(|index| entries.get(index))
        .map(|todo| todo.id)
        .ok_or_else(|| format!("no row {position} in the current list"))
}

#[cfg(test)]
mod tests {
    use super::{parse_input, Input};
    use todo_core::{Todo, ViewEvent};

    fn rows() -> Vec<Todo> {
        vec![Todo::new("first"), Todo::new("second")]
    }

    #[test]
    fn add_keeps_title_text() {
        assert_eq!(
            parse_input("add   walk the dog ", &[]),
            Ok(Input::Event(ViewEvent::NewTodo("walk the dog".to_string())))
        );
        assert_eq!(
            parse_input("add", &[]),
            Ok(Input::Event(ViewEvent::NewTodo(String::new())))
        );
    }

    #[test]
    fn row_commands_resolve_one_based_positions() {
        let rows = rows();
        assert_eq!(
            parse_input("done 2", &rows),
            Ok(Input::Event(ViewEvent::SetAsDone {
                id: rows[1].id,
                checked: true,
            }))
        );
        assert_eq!(
            parse_input("rm 1", &rows),
            Ok(Input::Event(ViewEvent::ItemRemove { id: rows[0].id }))
        );
        assert_eq!(
            parse_input("save 1 new title here", &rows),
            Ok(Input::Event(ViewEvent::ItemEditDone {
                id: rows[0].id,
                title: "new title here".to_string(),
            }))
        );
    }

    #[test]
    fn save_without_title_is_an_empty_edit() {
        let rows = rows();
        assert_eq!(
            parse_input("save 2", &rows),
            Ok(Input::Event(ViewEvent::ItemEditDone {
                id: rows[1].id,
                title: String::new(),
            }))
        );
    }

    #[test]
    fn bad_rows_and_commands_are_reported() {
        let rows = rows();
        assert!(parse_input("done 0", &rows).unwrap_err().contains("no row 0"));
        assert!(parse_input("done 3", &rows).unwrap_err().contains("no row 3"));
        assert!(parse_input("edit x", &rows)
            .unwrap_err()
            .contains("expected a row number"));
        assert!(parse_input("frobnicate", &rows)
            .unwrap_err()
            .contains("unknown command"));
    }

    #[test]
    fn navigation_and_host_commands() {
        assert_eq!(
            parse_input("active", &[]),
            Ok(Input::Route("#/active".to_string()))
        );
        assert_eq!(
            parse_input("route #/completed", &[]),
            Ok(Input::Route("#/completed".to_string()))
        );
        assert_eq!(parse_input("  ", &[]), Ok(Input::Empty));
        assert_eq!(parse_input("clear", &[]), Ok(Input::Event(ViewEvent::ClearCompleted)));
        assert_eq!(parse_input("q", &[]), Ok(Input::Quit));
    }
}
