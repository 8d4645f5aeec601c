use clap::{ArgAction, Args, Parser};
use doodletone::sonify::SonifierOptions;

/// Command-Line arguments as a well formatted struct, parsed using clap.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct CliOpts {
    /// width of the canvas
    #[arg(short = 'x', long = "width", default_value = "800")]
    pub width: usize,

    /// height of the canvas
    #[arg(short = 'y', long = "height", default_value = "600")]
    pub height: usize,

    /// Title of the drawing window
    #[arg(long = "title", default_value = "doodletone")]
    pub title: String,

    #[command(flatten)]
    pub sonifier_opts: SonifierCliOpts,

    /// Increase program verbosity
    ///
    /// The default verbosity level is INFO.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, default_value = "0")]
    pub verbose: u8,

    /// Decrease program verbosity
    ///
    /// The default verbosity level is INFO.
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, default_value = "0")]
    pub quiet: u8,
}

/// Specific options for tuning how the canvas is turned into sound
#[derive(Args, Debug, Clone)]
pub(crate) struct SonifierCliOpts {
    /// Channel value above which a pixel counts as background instead of ink
    #[arg(long = "ink-threshold", default_value = "240")]
    pub ink_threshold: u8,

    /// Alpha value a pixel must exceed to be considered visible
    #[arg(long = "alpha-threshold", default_value = "50")]
    pub alpha_threshold: u8,

    /// Frequency in Hz for ink at the bottom edge of the canvas
    #[arg(long = "min-freq", default_value = "100")]
    pub min_freq: f64,

    /// Frequency in Hz for ink at the top edge of the canvas
    #[arg(long = "max-freq", default_value = "1000")]
    pub max_freq: f64,

    /// Playback time in seconds allotted to each pixel column
    #[arg(long = "column-duration", default_value = "0.02")]
    pub column_duration: f64,

    /// Fraction of the column duration that each tone actually sounds
    #[arg(long = "gate", default_value = "0.9")]
    pub gate: f64,

    /// Linear amplitude of each tone
    #[arg(long = "amplitude", default_value = "0.3")]
    pub amplitude: f32,
}

impl From<&SonifierCliOpts> for SonifierOptions {
    fn from(opts: &SonifierCliOpts) -> Self {
        Self {
            ink_threshold: opts.ink_threshold,
            alpha_threshold: opts.alpha_threshold,
            min_freq: opts.min_freq,
            max_freq: opts.max_freq,
            column_duration: opts.column_duration,
            gate: opts.gate,
            amplitude: opts.amplitude,
        }
    }
}
