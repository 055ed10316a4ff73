use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;

mod program;
use program::Program;

mod interpreter;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "stack machine",
    about = "Runs stack scripts against a LIFO stack simulated by two FIFO queues."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,

    /// The name of the stack script to run
    #[structopt(parse(from_os_str))]
    file_name: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let source = fs::read_to_string(&opt.file_name)?;

    let program = Program::parse(&source)?;

    let mut interpreter = program.into_interpreter();

    interpreter.run()
}
