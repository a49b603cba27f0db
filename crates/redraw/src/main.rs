use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;

use redraw::color;
use redraw::color::Colors;
use redraw::commands::Cli;
use redraw::commands::Commands;
use redraw::demo;
use redraw::error::CliError;
use redraw::handlers;
use redraw::telemetry;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", Colors::error("Error:"), e);
        eprintln!("{} {}", Colors::dim("Suggestion:"), e.suggestion());
        if e.is_retryable() {
            eprintln!(
                "{}",
                Colors::dim("(This error may be transient - retry may succeed)")
            );
        }
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    color::init(cli.no_color);
    let _telemetry = telemetry::init_tracing("warn");

    match cli.command {
        Commands::ClearLines { count } => handlers::handle_clear_lines(count),
        Commands::ClearScreen => handlers::handle_clear_screen(),
        Commands::CursorUp { count } => handlers::handle_cursor_up(count),
        Commands::ClearEnd => handlers::handle_clear_end(),
        Commands::Demo { lines } => demo::run_demo(lines),
        Commands::Env => handlers::handle_env(cli.format),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "redraw", &mut std::io::stdout());
            Ok(())
        }
    }
}
