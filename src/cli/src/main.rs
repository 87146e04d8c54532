use std::fmt::Write;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use itertools::Itertools;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;
use rubik::{
    Color, Cube, Rotation, Scramble,
    geometry::{EDGE_LENGTH, FACE_COUNT},
};

/// Turns the layers of a 3x3x3 cube and prints the result
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print facelets with terminal colors
    #[arg(long, global = true)]
    color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an assembled cube
    Show,
    /// Apply rotations to an assembled cube and print it
    Twist {
        /// Rotations written as `<face>.<layer>[x<turns>][']`, e.g. `0.1 2.0x2 3.0'`
        #[arg(required = true)]
        rotations: Vec<String>,
    },
    /// Apply a random scramble to an assembled cube
    Scramble {
        /// How many rotations to generate
        #[arg(short, long, default_value_t = 25)]
        length: usize,
        /// Seed for the random number generator; random if omitted
        #[arg(short, long)]
        seed: Option<u64>,
        /// Undo the scramble afterwards
        #[arg(short, long)]
        undo: bool,
    },
    /// Turn the middle layer behind face 0 once, then three more times
    Demo,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let mut cube = Cube::new();

    match cli.command {
        Commands::Show => print!("{}", render(&cube, cli.color)),
        Commands::Twist { rotations } => {
            let scramble: Scramble = rotations
                .iter()
                .map(|text| {
                    text.parse::<Rotation>()
                        .wrap_err_with(|| format!("Could not read rotation `{text}`"))
                })
                .collect::<color_eyre::Result<_>>()?;

            info!("Applying {scramble}");
            scramble.apply_to(&mut cube);

            print!("{}", render(&cube, cli.color));
            println!("\nAssembled: {}", cube.is_assembled());
        }
        Commands::Scramble { length, seed, undo } => {
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            info!("Scrambling with seed {seed}");

            let scramble = Scramble::random(&mut fastrand::Rng::with_seed(seed), length);
            scramble.apply_to(&mut cube);

            println!("Scramble: {scramble}\n");
            print!("{}", render(&cube, cli.color));

            if undo {
                let inverse = scramble.inverse();
                inverse.apply_to(&mut cube);

                println!("\nUndo: {inverse}\n");
                print!("{}", render(&cube, cli.color));
                println!("\nAssembled: {}", cube.is_assembled());
            }
        }
        Commands::Demo => {
            print!("{}", render(&cube, cli.color));
            cube.rotate(0, 1, 1, true)?;
            println!("\nAfter 1st rotation:\n");
            print!("{}", render(&cube, cli.color));
            cube.rotate(0, 1, 3, true)?;
            println!("\nAfter 2nd rotation:\n");
            print!("{}", render(&cube, cli.color));
            println!("\n{}", cube.is_assembled());
        }
    }

    Ok(())
}

/// The cube's `Display` output, optionally with each facelet painted its
/// color.
fn render(cube: &Cube, color: bool) -> String {
    if !color {
        return cube.to_string();
    }

    let mut out = String::new();
    for face in 0..FACE_COUNT {
        let Some(cells) = cube.face(face) else {
            continue;
        };
        if face != 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{face}:");
        for row in cells.chunks(EDGE_LENGTH) {
            let _ = writeln!(out, "{}", row.iter().map(|&c| paint(c)).join(" "));
        }
    }
    out
}

fn paint(color: Color) -> String {
    let letter = color.letter();
    match color {
        Color::Red => letter.black().on_red().to_string(),
        Color::Green => letter.black().on_green().to_string(),
        Color::Blue => letter.white().on_blue().to_string(),
        Color::White => letter.black().on_white().to_string(),
        Color::Orange => letter.black().on_truecolor(255, 140, 0).to_string(),
        Color::Yellow => letter.black().on_yellow().to_string(),
    }
}
