//! Console command parser
//!
//! Parses admin commands like "edit 3", "set name Ada", "move 4 1".

use testimonial_admin::{Field, TestimonialId};

use crate::error::ParseError;

/// Commands the admin console understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Admin list (every testimonial)
    List,

    /// Public list (active testimonials only)
    Active,

    /// Open the dialog for a new testimonial
    New,

    /// Open the dialog for an existing testimonial
    Edit { id: TestimonialId },

    /// Set a form field
    Set { field: Field, value: String },

    /// Print the form behind the open dialog
    Show,

    /// Submit the open dialog
    Save,

    /// Cancel the open dialog
    Close,

    /// Answer the discard prompt
    Confirm { discard: bool },

    /// Delete a testimonial
    Delete { id: TestimonialId },

    /// Drag `dragged` and drop it over `over` (or outside the list)
    Move {
        dragged: TestimonialId,
        over: Option<TestimonialId>,
    },

    /// Flip a testimonial's public visibility
    Toggle { id: TestimonialId },

    /// Refetch the list from the store
    Reload,

    Help,

    Quit,
}

fn parse_id(command: &str, arg: Option<&&str>) -> Result<TestimonialId, ParseError> {
    let arg = arg.ok_or_else(|| ParseError::MissingArgument(command.to_string()))?;
    arg.parse().map_err(ParseError::InvalidArgument)
}

/// Parse a console command from a line of input
pub fn parse_command(input: &str) -> Result<ConsoleCommand, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();

    match command.as_str() {
        "list" | "ls" | "all" => Ok(ConsoleCommand::List),

        "active" | "public" => Ok(ConsoleCommand::Active),

        "new" | "add" | "create" => Ok(ConsoleCommand::New),

        "edit" | "open" => Ok(ConsoleCommand::Edit {
            id: parse_id("edit", parts.get(1))?,
        }),

        "set" => {
            // keep the value's inner spacing intact
            let rest = input[parts[0].len()..].trim_start();
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(ParseError::MissingArgument(
                    "set (usage: set <field> <value>)".to_string(),
                ));
            }
            let field: Field = field.parse().map_err(|e: String| {
                ParseError::InvalidArgument(format!(
                    "{} (valid: name, service, testimonial, gender, rating, active, order, photo)",
                    e
                ))
            })?;
            Ok(ConsoleCommand::Set {
                field,
                value: value.trim().to_string(),
            })
        }

        "show" | "form" => Ok(ConsoleCommand::Show),

        "save" | "submit" => Ok(ConsoleCommand::Save),

        "close" | "cancel" => Ok(ConsoleCommand::Close),

        "yes" | "y" | "discard" => Ok(ConsoleCommand::Confirm { discard: true }),

        "no" | "n" | "keep" => Ok(ConsoleCommand::Confirm { discard: false }),

        "delete" | "rm" | "remove" => Ok(ConsoleCommand::Delete {
            id: parse_id("delete", parts.get(1))?,
        }),

        "move" | "mv" | "drag" => {
            if parts.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "move (usage: move <id> <over-id|none>)".to_string(),
                ));
            }
            let dragged = parse_id("move", parts.get(1))?;
            let over = match parts[2].to_lowercase().as_str() {
                "none" | "outside" | "-" => None,
                _ => Some(parse_id("move", parts.get(2))?),
            };
            Ok(ConsoleCommand::Move { dragged, over })
        }

        "toggle" => Ok(ConsoleCommand::Toggle {
            id: parse_id("toggle", parts.get(1))?,
        }),

        "reload" | "refresh" => Ok(ConsoleCommand::Reload),

        "help" | "?" => Ok(ConsoleCommand::Help),

        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

/// Generate help text for available commands
pub fn help_text() -> String {
    r#"Testimonial admin commands

  list                      Show every testimonial (admin list)
  active                    Show active testimonials (public list)
  new                       Start a new testimonial
  edit <id>                 Edit a testimonial
  set <field> <value>       Set a form field (name, service, testimonial,
                            gender, rating, active, order, photo)
  show                      Show the form
  save                      Save the form
  close                     Close the form
  yes / no                  Answer "discard changes?"
  delete <id>               Delete a testimonial
  move <id> <over-id|none>  Drag a testimonial onto another one
  toggle <id>               Show or hide a testimonial publicly
  reload                    Fetch the list again
  quit                      Leave the console
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        assert_eq!(parse_command("list").unwrap(), ConsoleCommand::List);
        assert_eq!(parse_command("  LS ").unwrap(), ConsoleCommand::List);
        assert_eq!(parse_command("active").unwrap(), ConsoleCommand::Active);
    }

    #[test]
    fn test_parse_edit_and_delete() {
        assert_eq!(
            parse_command("edit 3").unwrap(),
            ConsoleCommand::Edit {
                id: TestimonialId(3)
            }
        );
        assert_eq!(
            parse_command("delete #7").unwrap(),
            ConsoleCommand::Delete {
                id: TestimonialId(7)
            }
        );
    }

    #[test]
    fn test_parse_set_keeps_value_spacing() {
        assert_eq!(
            parse_command("set testimonial Best  team, ever").unwrap(),
            ConsoleCommand::Set {
                field: Field::Testimonial,
                value: "Best  team, ever".to_string(),
            }
        );
        assert_eq!(
            parse_command("set photo").unwrap(),
            ConsoleCommand::Set {
                field: Field::Photo,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_command("move 4 1").unwrap(),
            ConsoleCommand::Move {
                dragged: TestimonialId(4),
                over: Some(TestimonialId(1)),
            }
        );
        assert_eq!(
            parse_command("drag 4 none").unwrap(),
            ConsoleCommand::Move {
                dragged: TestimonialId(4),
                over: None,
            }
        );
    }

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(
            parse_command("yes").unwrap(),
            ConsoleCommand::Confirm { discard: true }
        );
        assert_eq!(
            parse_command("n").unwrap(),
            ConsoleCommand::Confirm { discard: false }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("new").unwrap(), ConsoleCommand::New);
        assert_eq!(parse_command("save").unwrap(), ConsoleCommand::Save);
        assert_eq!(parse_command("cancel").unwrap(), ConsoleCommand::Close);
        assert_eq!(parse_command("show").unwrap(), ConsoleCommand::Show);
        assert_eq!(parse_command("reload").unwrap(), ConsoleCommand::Reload);
        assert_eq!(parse_command("help").unwrap(), ConsoleCommand::Help);
        assert_eq!(parse_command("exit").unwrap(), ConsoleCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("edit").is_err()); // Missing id
        assert!(parse_command("edit abc").is_err()); // Invalid id
        assert!(parse_command("set").is_err()); // Missing field
        assert!(parse_command("set colour red").is_err()); // Unknown field
        assert!(parse_command("move 1").is_err()); // Missing target
        assert!(parse_command("move 1 x").is_err()); // Invalid target
        assert_eq!(
            parse_command("frobnicate"),
            Err(ParseError::UnknownCommand("frobnicate".to_string()))
        );
    }
}
