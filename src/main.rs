mod cli;

use crate::cli::CliOpts;
use clap::Parser;
use doodletone::session::Session;
use doodletone::sinks::audio::AudioSink;
use doodletone::sinks::window::{WindowSink, WindowSinkOptions};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let opts = CliOpts::parse();
    init_logger(&opts);

    let mut session = Session::new(opts.width, opts.height, (&opts.sonifier_opts).into())?;
    match AudioSink::new() {
        Ok(sink) => session.attach_audio(sink),
        Err(e) => {
            tracing::error!("Audio output is unavailable, the doodle will stay silent: {}", e)
        }
    }

    // the window title carries a permanent marker while audio is unavailable
    let title = if session.has_audio() {
        opts.title.clone()
    } else {
        format!("{} [no audio]", opts.title)
    };

    let window = WindowSink::new(&session, WindowSinkOptions { title })?;
    window.run(&mut session)?;
    Ok(())
}

/// Configure the tracing subscriber according to the -v and -q flags
fn init_logger(opts: &CliOpts) {
    let level = match 2 + opts.verbose as i16 - opts.quiet as i16 {
        i16::MIN..=0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        4..=i16::MAX => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}
