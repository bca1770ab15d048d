//! Line-oriented session: each input line is one user action.

use filmdex::model::ViewMode;

pub const HELP: &str = "\
Actions:
  search <text>             show movies matching <text>
  clear                     clear the search
  sort <key>|none           titleAsc, titleDesc, yearAsc, yearDesc
  check <filter> <value>    check a filter option
  uncheck <filter> <value>  uncheck a filter option
  view grid|list            change the layout
  options [filter]          show filter options
  show                      show the current result
  help                      show this help
  quit                      leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Clear,
    Sort(Option<String>),
    Toggle {
        attribute: String,
        value: String,
        checked: bool,
    },
    View(ViewMode),
    Options(Option<String>),
    Show,
    Help,
    Quit,
    Empty,
}

/// Parse one input line. Words after the filter name form the value, so
/// `check director Hayao Miyazaki` checks "Hayao Miyazaki".
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ShellCommand::Empty);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "search" | "s" => Ok(ShellCommand::Search(rest.to_string())),
        "clear" | "reset" => Ok(ShellCommand::Clear),
        "sort" => match rest {
            "" => Err("sort needs a key".to_string()),
            "none" => Ok(ShellCommand::Sort(None)),
            key => Ok(ShellCommand::Sort(Some(key.to_string()))),
        },
        "check" | "uncheck" => {
            let Some((attribute, value)) = rest.split_once(char::is_whitespace) else {
                return Err(format!("usage: {} <filter> <value>", verb));
            };
            Ok(ShellCommand::Toggle {
                attribute: attribute.to_string(),
                value: value.trim().to_string(),
                checked: verb.eq_ignore_ascii_case("check"),
            })
        }
        "view" => rest.parse().map(ShellCommand::View),
        "options" => Ok(ShellCommand::Options(
            Some(rest).filter(|r| !r.is_empty()).map(String::from),
        )),
        "show" | "ls" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown action: {} (try 'help')", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_spaces() {
        assert_eq!(
            parse_line("search  castle in the sky "),
            Ok(ShellCommand::Search("castle in the sky".into()))
        );
        assert_eq!(parse_line("search"), Ok(ShellCommand::Search(String::new())));
    }

    #[test]
    fn parses_toggles() {
        assert_eq!(
            parse_line("check director Hayao Miyazaki"),
            Ok(ShellCommand::Toggle {
                attribute: "director".into(),
                value: "Hayao Miyazaki".into(),
                checked: true,
            })
        );
        assert_eq!(
            parse_line("UNCHECK producer P1"),
            Ok(ShellCommand::Toggle {
                attribute: "producer".into(),
                value: "P1".into(),
                checked: false,
            })
        );
        assert!(parse_line("check director").is_err());
    }

    #[test]
    fn parses_sort_and_view() {
        assert_eq!(
            parse_line("sort yearDesc"),
            Ok(ShellCommand::Sort(Some("yearDesc".into())))
        );
        assert_eq!(parse_line("sort none"), Ok(ShellCommand::Sort(None)));
        assert_eq!(parse_line("view list"), Ok(ShellCommand::View(ViewMode::List)));
        assert!(parse_line("view table").is_err());
    }

    #[test]
    fn blank_and_comment_lines_are_empty() {
        assert_eq!(parse_line("   "), Ok(ShellCommand::Empty));
        assert_eq!(parse_line("# setup"), Ok(ShellCommand::Empty));
    }

    #[test]
    fn unknown_action_is_an_error() {
        assert!(parse_line("dance").is_err());
        assert_eq!(parse_line("options"), Ok(ShellCommand::Options(None)));
        assert_eq!(parse_line("quit"), Ok(ShellCommand::Quit));
    }
}
