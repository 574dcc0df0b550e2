#![forbid(unsafe_code)]

//! Veneer showcase binary entry point.

use veneer_showcase::app::{AppModel, ScreenId};
use veneer_showcase::cli;
use veneer_style::{Theme, ThemeMode};

fn main() {
    let opts = cli::Opts::parse();
    init_tracing();

    let mode = match opts.theme.as_str() {
        "dark" => ThemeMode::Dark,
        "light" => ThemeMode::Light,
        _ => ThemeMode::detect(),
    };

    let mut model = AppModel::new(Theme::for_mode(mode));
    if opts.start_screen >= 1 {
        let idx = (opts.start_screen as usize).saturating_sub(1);
        model.current_screen = ScreenId::ALL
            .get(idx)
            .copied()
            .unwrap_or(ScreenId::Buttons);
    }
    model.exit_after_ms = opts.exit_after_ms;

    if let Err(e) = veneer_runtime::Program::new(model).run() {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

/// Route tracing to a log file when `VENEER_LOG` is set. Writing to
/// stderr would corrupt the raw-mode terminal.
fn init_tracing() {
    let Ok(filter) = std::env::var("VENEER_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create("veneer-showcase.log") else {
        return;
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
