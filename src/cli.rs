use {
    crate::common::{debug_println, DEBUG},
    clap::{Parser, Subcommand, ValueEnum},
    session::ReverseOptions,
    std::{num::NonZeroUsize, sync::atomic::Ordering},
    textbuf::Strategy,
};

#[derive(Debug, Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a word and print it reversed
    Reverse {
        #[command(flatten)]
        args: ReverseArgs,
    },
    /// Read a character and print its numeric code
    Code,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    TwoCursor,
    Recursive,
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::TwoCursor => Strategy::TwoCursor,
            StrategyArg::Recursive => Strategy::Recursive,
        }
    }
}

#[derive(Debug, Parser)]
struct ReverseArgs {
    /// How to walk the buffer [recursive uses one stack frame per swapped pair]
    #[arg(long, default_value = "two-cursor")]
    strategy: StrategyArg,

    /// Buffer capacity, including the terminator slot
    #[arg(long, default_value = "150")]
    capacity: NonZeroUsize,
}

impl From<&ReverseArgs> for ReverseOptions {
    fn from(args: &ReverseArgs) -> Self {
        ReverseOptions {
            capacity: args.capacity.get(),
            strategy: args.strategy.into(),
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_println!("{cli:#?}");
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Reverse { args } => {
            let options = ReverseOptions::from(&args);
            let buffer = session::reverse_session(&mut stdin, &mut stdout, &options)?;
            debug_println!("{buffer:?}");
        }
        Command::Code => {
            let c = session::code_session(&mut stdin, &mut stdout)?;
            debug_println!("{c:?} = {:#x}", u32::from(c));
        }
    }
    Ok(())
}
