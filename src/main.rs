// Code Blocks: live character-class block grid

use std::fs::File;

use log::info;

use code_blocks::ui::{session::TerminalSession, App};

/// Log file in the system temp directory; the terminal itself belongs to the UI
const LOG_FILE: &str = "code-blocks.log";

fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(&path) {
        Ok(file) => {
            builder
                .format_timestamp_micros()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
            info!("logging to {}", path.display());
        }
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            // Stderr would scribble over the alternate screen, so stay quiet
            builder.filter_level(log::LevelFilter::Off).init();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    info!("starting code-blocks {}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new();
    let res = {
        let mut session = TerminalSession::enter()?;
        app.run(session.terminal())
    };
    // The session is dropped here, so errors print to a restored terminal
    res?;

    info!("exiting");
    Ok(())
}
