use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"redraw rewrites a terminal status region in place.

The subcommands map one-to-one onto the erase and cursor-movement
sequences a status-printing CLI needs: erase the lines it just printed,
move the cursor back up, or wipe the screen. Counts are taken at face
value; redraw does not know how many lines are actually on screen.

EXAMPLES:
    # Print three status lines, then replace them
    printf 'one\ntwo\nthree\n'
    redraw clear-lines 3

    # Start over with an empty screen
    redraw clear-screen

    # Watch the interactive status region respond to stdin commands
    redraw demo"#;

#[derive(Parser)]
#[command(name = "redraw")]
#[command(author, version)]
#[command(about = "Rewrite a terminal status region in place")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Erase the last COUNT terminal lines
    #[command(long_about = r#"Erase the last COUNT terminal lines.

Erases COUNT lines counted from the cursor's line upward and leaves the
cursor at column 0 of the topmost erased line, ready for a reprint.
Pass the number of lines you actually printed; nothing is checked
against the real screen.

EXAMPLES:
    redraw clear-lines 3
    redraw clear-lines 0    # writes nothing"#)]
    ClearLines {
        /// Number of lines to erase
        count: u16,
    },

    /// Clear the full screen and home the cursor
    ClearScreen,

    /// Move the cursor up COUNT rows without erasing
    #[command(long_about = r#"Move the cursor up COUNT rows without erasing.

EXAMPLES:
    redraw cursor-up 2
    redraw cursor-up 0    # writes nothing"#)]
    CursorUp {
        /// Number of rows to move up
        count: u16,
    },

    /// Erase from the cursor to the end of the screen
    ClearEnd,

    /// Run the interactive status-region demo
    #[command(long_about = r#"Run the interactive status-region demo.

Prints a readiness marker to stdout, then reads commands from stdin and
redraws a fixed-height status region in place:

    tick        advance the tick counter
    say <text>  push a message into the history
    clear       wipe the screen and reprint the region
    quit        exit

The demo exits cleanly on stdin EOF, SIGINT, or SIGTERM, so it can be
driven by a harness that scans stdout and writes scripted input.

EXAMPLES:
    redraw demo
    redraw demo --lines 5"#)]
    Demo {
        /// Message history lines in the status region
        #[arg(long, default_value = "3")]
        lines: u16,
    },

    /// Show the effective environment configuration
    Env,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
