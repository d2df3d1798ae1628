use aircraft_hunt::prelude::*;
use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

fn main() -> Result<()> {
    let options = ReplOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level_or_default().as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            _ => AdaptiveFormat::Default,
        })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    let mut repl = match Repl::new(&options) {
        Ok(repl) => repl,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = repl.run() {
        log::error!("fatal error: {err}");
        return Err(err);
    }
    Ok(())
}
