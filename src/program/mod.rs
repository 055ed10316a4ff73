use crate::interpreter::{Interpreter, Value};

use anyhow::{bail, Context};

/// A single stack script command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push a value onto the stack.
    Push(Value),
    /// Discard the top of the stack; does nothing when the stack is empty.
    Pop,
    /// Write the top of the stack to stdout.
    Top,
    /// Write every live element to stdout, bottom of the stack first.
    Print,
    /// Write whether the stack is empty to stdout.
    Empty,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Program {
    commands: Vec<Command>,
}

impl Program {
    /// Parses a stack script: one command per line, `#` starts a comment
    /// that runs to the end of the line.
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut commands = vec![];

        for (line_no, line) in source.lines().enumerate() {
            let line_no = line_no + 1;
            let line = line.find('#').map_or(line, |i| &line[..i]).trim();

            if line.is_empty() {
                continue;
            }

            let mut words = line.split_whitespace();
            let command = match (words.next(), words.next()) {
                (Some("push"), Some(arg)) => {
                    let value = arg
                        .parse()
                        .with_context(|| format!("line {}: invalid value {:?}", line_no, arg))?;
                    Command::Push(value)
                }
                (Some("pop"), None) => Command::Pop,
                (Some("top"), None) => Command::Top,
                (Some("print"), None) => Command::Print,
                (Some("empty"), None) => Command::Empty,
                _ => bail!("line {}: unknown command {:?}", line_no, line),
            };

            if words.next().is_some() {
                bail!("line {}: trailing input after command", line_no);
            }

            commands.push(command);
        }

        Ok(Self { commands })
    }

    /// The command at `index` in program order, if the program is that long.
    pub fn command(&self, index: usize) -> Option<Command> {
        self.commands.get(index).copied()
    }

    pub fn into_interpreter(self) -> Interpreter {
        Interpreter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let program = Program::parse("push 42\npop\ntop\nprint\nempty\n").unwrap();

        let commands: Vec<_> = (0..5).filter_map(|i| program.command(i)).collect();
        assert_eq!(
            commands,
            vec![
                Command::Push(42),
                Command::Pop,
                Command::Top,
                Command::Print,
                Command::Empty,
            ]
        );
        assert_eq!(program.command(5), None);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let source = "\n# a comment\npush 1   # trailing comment\n\n   \npop\n";
        let program = Program::parse(source).unwrap();

        assert_eq!(program.command(0), Some(Command::Push(1)));
        assert_eq!(program.command(1), Some(Command::Pop));
        assert_eq!(program.command(2), None);
    }

    #[test]
    fn parses_negative_values() {
        let program = Program::parse("push -17\n").unwrap();

        assert_eq!(program.command(0), Some(Command::Push(-17)));
    }

    #[test]
    fn rejects_unknown_commands() {
        let err = Program::parse("push 1\nswap\n").unwrap_err();

        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_malformed_values() {
        let err = Program::parse("push one\n").unwrap_err();

        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(Program::parse("pop 3\n").is_err());
        assert!(Program::parse("push 1 2\n").is_err());
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        let program = Program::parse("").unwrap();

        assert_eq!(program.command(0), None);
    }
}
