//! Command-line arguments.

use std::path::PathBuf;

use crate::CliError;

pub const USAGE: &str = "\
Usage: scilex [OPTIONS] <FILE>

Lex FILE and print it with syntax colours and a fold gutter.

Options:
  -l, --lang <NAME>        Language to use instead of guessing from the file name
  -k, --keywords <FILE>    YAML keyword configuration merged over the built-in lists
      --color <WHEN>       auto, always or never [default: auto]
      --regions            Print fold regions instead of the text
      --list               List the built-in languages
  -h, --help               Print this help";

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    pub path: PathBuf,
    pub language: Option<String>,
    pub keywords: Option<PathBuf>,
    pub color: ColorChoice,
    pub regions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Render(RenderArgs),
}

fn value(flag: &str, next: Option<String>) -> Result<String, CliError> {
    next.ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

/// Parse the arguments after the program name.
pub fn parse<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut path = None;
    let mut language = None;
    let mut keywords = None;
    let mut color = ColorChoice::Auto;
    let mut regions = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--list" => return Ok(Command::List),
            "-l" | "--lang" => language = Some(value(&arg, args.next())?),
            "-k" | "--keywords" => keywords = Some(PathBuf::from(value(&arg, args.next())?)),
            "--regions" => regions = true,
            "--color" => {
                color = match value(&arg, args.next())?.as_str() {
                    "auto" => ColorChoice::Auto,
                    "always" => ColorChoice::Always,
                    "never" => ColorChoice::Never,
                    other => {
                        return Err(CliError::Usage(format!("invalid --color value '{other}'")));
                    }
                }
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            _ if path.is_some() => {
                return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
            }
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("missing <FILE>".to_string()))?;
    Ok(Command::Render(RenderArgs {
        path,
        language,
        keywords,
        color,
        regions,
    }))
}
