//! Twisty Puzzle CLI
//!
//! Applies move sequences to a 3x3x3 puzzle and prints the resulting faces,
//! either as colored blocks or as plain color letters.

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use cubie::render::{render_face, render_net, Style};
use cubie::{Algorithm, CubeError, Face, Puzzle};

/// Applies moves to a 3x3x3 twisty puzzle and shows the result.
#[derive(Parser)]
#[command(name = "cubie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply moves to a solved puzzle and print the unfolded net.
    Show {
        /// The move sequence to apply, e.g. "R U R' U'".
        #[arg(default_value = "")]
        algorithm: String,
        /// Print color letters instead of colored blocks.
        #[arg(long)]
        plain: bool,
    },
    /// Apply moves to a solved puzzle and print one face.
    Face {
        /// Face letter or name, e.g. "U" or "front".
        face: String,
        /// The move sequence to apply.
        #[arg(default_value = "")]
        algorithm: String,
        /// Print color letters instead of colored blocks.
        #[arg(long)]
        plain: bool,
    },
    /// Count how many repetitions of a sequence return to the start.
    Order {
        /// The move sequence to repeat.
        algorithm: String,
    },
    /// List every piece, in fixed location order.
    Pieces {
        /// The move sequence to apply first.
        #[arg(default_value = "")]
        algorithm: String,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let result = match cli.command {
        Some(Command::Show { algorithm, plain }) => run_show(&algorithm, style(plain)),
        Some(Command::Face {
            face,
            algorithm,
            plain,
        }) => run_face(&face, &algorithm, style(plain)),
        Some(Command::Order { algorithm }) => run_order(&algorithm),
        Some(Command::Pieces { algorithm }) => run_pieces(&algorithm),
        // default: show the solved puzzle
        None => run_show("", Style::Ansi),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn style(plain: bool) -> Style {
    if plain {
        Style::Plain
    } else {
        Style::Ansi
    }
}

/// Returns a solved puzzle with `algorithm` applied.
fn scrambled(algorithm: &str) -> Result<Puzzle, CubeError> {
    let algorithm: Algorithm = algorithm.parse()?;
    info!("applying {} moves", algorithm.len());
    let mut cube = Puzzle::new();
    cube.apply_algorithm(&algorithm)?;
    Ok(cube)
}

fn run_show(algorithm: &str, style: Style) -> Result<(), CubeError> {
    let cube = scrambled(algorithm)?;
    print!("{}", render_net(&cube, style));
    Ok(())
}

fn run_face(face: &str, algorithm: &str, style: Style) -> Result<(), CubeError> {
    let face: Face = face.parse()?;
    let cube = scrambled(algorithm)?;
    print!("{}", render_face(&cube.face_grid(face), style));
    Ok(())
}

fn run_order(algorithm: &str) -> Result<(), CubeError> {
    let algorithm: Algorithm = algorithm.parse()?;
    println!("{}", cubie::order(&algorithm)?);
    Ok(())
}

fn run_pieces(algorithm: &str) -> Result<(), CubeError> {
    let cube = scrambled(algorithm)?;
    for (location, piece) in cube.iter() {
        println!("{location:<3} {piece:?}");
    }
    Ok(())
}
