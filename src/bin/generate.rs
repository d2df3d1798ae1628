use aircraft_hunt::prelude::*;
use clap::Parser;
use colored::Colorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Produces and prints one random ground-truth board (§6).
#[derive(Parser)]
struct Options {
    #[arg(short, long)]
    rows: usize,

    #[arg(short, long)]
    cols: usize,

    #[arg(short = 'n', long = "aircraft")]
    aircraft: usize,

    /// Seeds the generator for a reproducible board; otherwise seeds from
    /// the system clock.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let options = Options::parse();
    let generator = match Generator::new(options.rows, options.cols, options.aircraft) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let seed = options.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = generator.generate(&mut rng);

    print!("    ");
    for col in 0..board.cols() {
        print!("{:>2}", (b'A' + (col % 26) as u8) as char);
    }
    println!();
    for row in 0..board.rows() {
        print!("{:>2}: ", row + 1);
        for col in 0..board.cols() {
            let color = board.color(Coord::new(row, col));
            let cell = match color {
                Color::Red => "AA".red(),
                Color::Blue => "AA".blue(),
                _ => "  ".normal(),
            };
            print!("{cell}");
        }
        println!();
    }

    Ok(())
}
