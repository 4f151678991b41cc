//! Command grammar for the line-oriented board interface.
//!
//! Tokens are whitespace separated. Parsing only checks the shape of the
//! line; placement and selection rules are enforced by [`crate::Board`].

use std::path::PathBuf;

use blackboard_core::{CommandError, Position};

use crate::figure::Figure;
use crate::model::{FillMode, Shape, ShapeType};

const ADD_USAGE: &str = "add <fill|frame> <color> <circle|rectangle|line|triangle> <x> <y> <params...>";
const SELECT_USAGE: &str = "select <id> | select <x> <y>";
const MOVE_USAGE: &str = "move <x> <y>";
const PAINT_USAGE: &str = "paint <color>";
const EDIT_USAGE: &str = "edit <params...>";
const SAVE_USAGE: &str = "save <path>";
const LOAD_USAGE: &str = "load <path>";

/// Help text listing every command.
pub const HELP_TEXT: &str = "\
Available commands:
  add <fill|frame> <color> circle <x> <y> <radius>             - Add a circle
  add <fill|frame> <color> rectangle <x> <y> <width> <height>  - Add a rectangle
  add <fill|frame> <color> line <x> <y> <length> <H|V>         - Add a line
  add <fill|frame> <color> triangle <x> <y> <height>           - Add a triangle
  select <id> | select <x> <y>  - Select a shape by id or by the cell it covers
  deselect                      - Clear the selection
  remove                        - Remove the selected shape
  undo                          - Remove the most recently drawn shape
  move <x> <y>                  - Move the selected shape and bring it to the front
  paint <color>                 - Change the color of the selected shape
  edit <params...>              - Edit the selected shape (circle: radius, rectangle: width height,
                                  line: length H|V, triangle: height)
  draw                          - Draw the blackboard
  list                          - List all shapes
  clear                         - Remove all shapes
  save <path>                   - Save shapes to a file (.json for JSON)
  load <path>                   - Load shapes from a file, replacing the board
  help                          - Show this help message
  exit                          - Exit the application";

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Add(Figure),
    SelectId(u64),
    SelectAt { x: i32, y: i32 },
    Deselect,
    Remove,
    Undo,
    Move { x: i32, y: i32 },
    Paint(String),
    Edit(Vec<String>),
    Draw,
    List,
    Clear,
    Save(PathBuf),
    Load(PathBuf),
    Help,
    Exit,
}

impl BoardCommand {
    /// Parses a command line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add" => BoardCommand::Add(parse_add(args)?),
            "select" => parse_select(args)?,
            "deselect" => no_args(args, "deselect", BoardCommand::Deselect)?,
            "remove" => no_args(args, "remove", BoardCommand::Remove)?,
            "undo" => no_args(args, "undo", BoardCommand::Undo)?,
            "move" => {
                let [x, y] = exact::<2>(args, "move", MOVE_USAGE)?;
                BoardCommand::Move {
                    x: coordinate("move", x)?,
                    y: coordinate("move", y)?,
                }
            }
            "paint" => {
                let [color] = exact::<1>(args, "paint", PAINT_USAGE)?;
                BoardCommand::Paint(color.to_string())
            }
            "edit" => {
                if args.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "edit",
                        usage: EDIT_USAGE,
                    });
                }
                BoardCommand::Edit(args.iter().map(|s| s.to_string()).collect())
            }
            "draw" => no_args(args, "draw", BoardCommand::Draw)?,
            "list" => no_args(args, "list", BoardCommand::List)?,
            "clear" => no_args(args, "clear", BoardCommand::Clear)?,
            "save" => {
                let [path] = exact::<1>(args, "save", SAVE_USAGE)?;
                BoardCommand::Save(PathBuf::from(path))
            }
            "load" => {
                let [path] = exact::<1>(args, "load", LOAD_USAGE)?;
                BoardCommand::Load(PathBuf::from(path))
            }
            "help" => BoardCommand::Help,
            "exit" | "quit" => BoardCommand::Exit,
            _ => return Err(CommandError::UnknownCommand(keyword.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_add(args: &[&str]) -> Result<Figure, CommandError> {
    let missing = || CommandError::MissingArgument {
        command: "add",
        usage: ADD_USAGE,
    };
    if args.len() < 5 {
        return Err(missing());
    }

    let fill: FillMode = args[0].parse().map_err(CommandError::UnknownFillMode)?;
    let color = args[1];
    let shape_type =
        ShapeType::from_keyword(args[2]).ok_or_else(|| CommandError::UnknownShape(args[2].to_string()))?;
    let x = coordinate("add", args[3])?;
    let y = coordinate("add", args[4])?;

    let params = &args[5..];
    if params.len() < shape_type.param_count() {
        return Err(missing());
    }
    let shape = Shape::from_params(shape_type, params)?;
    Ok(Figure::new(shape, Position::new(x, y), color, fill))
}

fn parse_select(args: &[&str]) -> Result<BoardCommand, CommandError> {
    match args {
        [id] => id
            .parse::<u64>()
            .map(BoardCommand::SelectId)
            .map_err(|_| CommandError::InvalidArgument {
                command: "select",
                value: id.to_string(),
            }),
        [x, y] => Ok(BoardCommand::SelectAt {
            x: coordinate("select", x)?,
            y: coordinate("select", y)?,
        }),
        [] => Err(CommandError::MissingArgument {
            command: "select",
            usage: SELECT_USAGE,
        }),
        _ => Err(CommandError::TooManyArguments {
            command: "select",
            usage: SELECT_USAGE,
        }),
    }
}

fn coordinate(command: &'static str, token: &str) -> Result<i32, CommandError> {
    token
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidArgument {
            command,
            value: token.to_string(),
        })
}

fn exact<'a, const N: usize>(
    args: &[&'a str],
    command: &'static str,
    usage: &'static str,
) -> Result<[&'a str; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArgument { command, usage });
    }
    <[&str; N]>::try_from(args).map_err(|_| CommandError::TooManyArguments { command, usage })
}

fn no_args(
    args: &[&str],
    command: &'static str,
    parsed: BoardCommand,
) -> Result<BoardCommand, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::TooManyArguments {
            command,
            usage: command,
        })
    }
}
