// piko: PIKOlang interpreter with pointer-trace visualization

mod grid;
mod interpreter;
mod ui;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use grid::Grid;
use interpreter::Interpreter;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [flags] <file.piko>", program_name);
    eprintln!();
    eprintln!("[file.piko] The program to execute");
    eprintln!();
    eprintln!("Flags: (optional)");
    eprintln!("  -t, --trace      Step through the program in the trace UI");
    eprintln!("  -v, --version    Print the current version and exit");
    eprintln!("  -h, --help       Print this help message and exit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("piko");

    let mut trace = false;
    let mut file: Option<&str> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--version" => {
                println!("PIKOlang version {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "-h" | "--help" | "help" => {
                print_usage(program_name);
                return Ok(());
            }
            "-t" | "--trace" => trace = true,
            other => file = Some(other),
        }
    }

    let Some(file) = file else {
        eprintln!("Error: No input file provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    };

    if !file.ends_with(".piko") {
        eprintln!("Unsupported file. Files must have .piko extension");
        std::process::exit(1);
    }

    if !Path::new(file).exists() {
        eprintln!("File does not exist: {}", file);
        std::process::exit(1);
    }

    // Read source code and build the token grid; a malformed program aborts
    // before any step runs
    let source = fs::read_to_string(file)?;
    let program = match Grid::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Malformed program: {}", e);
            std::process::exit(1);
        }
    };

    let mut interpreter = Interpreter::new(program);

    if !trace {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        interpreter.run(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
