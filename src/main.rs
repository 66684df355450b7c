use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error, info};

use galois_lfsr::config::{parse_register, Config};
use galois_lfsr::lfsr::{self, Lfsr};
use galois_lfsr::plot::{Plot, PlotError, RawBits, TextPlot, DEFAULT_CHART_WIDTH, TITLE};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Output {
    /// Marker chart in the terminal
    Chart,
    /// Plain string of 0/1 digits
    Bits,
    /// SDL2 window, needs the `window` feature
    Window,
}

/// 32-bit Galois LFSR bit sequence generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial register value (decimal, or 0x/0b/0o prefixed)
    #[arg(short, long, default_value = "1", value_parser = parse_register)]
    seed: u32,

    /// Feedback tap mask (decimal, or 0x/0b/0o prefixed)
    #[arg(short, long, default_value = "0x80200003", value_parser = parse_register)]
    taps: u32,

    /// Number of output bits
    #[arg(short, long, default_value_t = lfsr::DEFAULT_CYCLES)]
    cycles: usize,

    /// How to present the sequence
    #[arg(short, long, value_enum, default_value_t = Output::Chart)]
    output: Output,

    /// Run even with a zero seed, producing only zeros
    #[arg(long)]
    allow_zero_seed: bool,

    /// Chart width in points before wrapping
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: usize,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            seed: self.seed,
            taps: self.taps,
            cycles: self.cycles,
        }
    }
}

fn plotter(args: &Args) -> Result<Box<dyn Plot>, PlotError> {
    match args.output {
        Output::Chart => Ok(Box::new(TextPlot::with_width(io::stdout(), args.width))),
        Output::Bits => Ok(Box::new(RawBits::new(io::stdout()))),
        #[cfg(feature = "window")]
        Output::Window => Ok(Box::new(galois_lfsr::window::WindowPlot::new())),
        #[cfg(not(feature = "window"))]
        Output::Window => Err(PlotError::WindowUnavailable),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();
    config.validate(args.allow_zero_seed)?;
    debug!("{:?}", config);

    let mut plot = plotter(args)?;

    let mut register = Lfsr::new(config.seed, config.taps);
    let bits = register.run(config.cycles);
    info!(
        "generated {} bits from a {}-bit register, final state {:#010x} (taps {:#010x})",
        bits.len(),
        lfsr::REGISTER_WIDTH,
        register.state(),
        register.taps()
    );

    plot.plot(TITLE, &bits)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
