use crate::program::{Command, Program};

use std::io::{self, prelude::*};

mod queue;
mod stack;

pub use queue::Value;
use stack::Stack;

use anyhow::bail;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Executes a parsed stack script command by command.
#[derive(Debug)]
pub struct Interpreter {
    program: Program,
    stack: Stack,
    step_no: usize,
}

impl Interpreter {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            stack: Stack::new(),
            step_no: 0,
        }
    }

    /// Executes the next command of the program. Returns `false` once the
    /// program is exhausted.
    pub fn step(&mut self) -> anyhow::Result<bool> {
        let command = match self.program.command(self.step_no) {
            Some(c) => c,
            None => return Ok(false),
        };

        match command {
            Command::Push(v) => self.push(v),
            Command::Pop => self.pop(),
            Command::Top => self.top()?,
            Command::Print => self.print()?,
            Command::Empty => self.empty()?,
        }

        self.step_no += 1;

        Ok(true)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step()? {}

        Ok(())
    }

    fn push(&mut self, v: Value) {
        trace!("action: push, value {:?}", v);

        self.stack.push(v);
    }

    fn pop(&mut self) {
        trace!("action: pop");

        if self.stack.pop().is_none() {
            warn!("step {}: pop of an empty stack ignored", self.step_no);
        }
    }

    fn top(&mut self) -> anyhow::Result<()> {
        trace!("action: top");

        let v = match self.stack.top() {
            Some(v) => v,
            None => bail!("step {}: `top` of an empty stack", self.step_no),
        };

        let stdout = io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "{}", v)?;
        handle.flush()?;

        Ok(())
    }

    fn empty(&mut self) -> anyhow::Result<()> {
        trace!("action: empty");

        let stdout = io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "{}", self.stack.is_empty())?;
        handle.flush()?;

        Ok(())
    }

    /// Writes the live elements to stdout in FIFO order of the active queue,
    /// bottom of the stack first.
    fn print(&mut self) -> anyhow::Result<()> {
        trace!("action: print");

        let stdout = io::stdout();
        let mut handle = stdout.lock();

        write!(handle, "[")?;
        for (i, v) in self.stack.iter().enumerate() {
            if i > 0 {
                write!(handle, ", ")?;
            }
            write!(handle, "{}", v)?;
        }
        writeln!(handle, "]")?;
        handle.flush()?;

        Ok(())
    }
}
