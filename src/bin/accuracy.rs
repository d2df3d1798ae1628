use aircraft_hunt::prelude::*;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Measures how many guesses the engine needs to find every aircraft head
/// against randomly generated boards, over a number of independent trials
/// (§6).
#[derive(Parser)]
struct Options {
    #[arg(short, long)]
    rows: usize,

    #[arg(short, long)]
    cols: usize,

    #[arg(short = 'n', long = "aircraft")]
    aircraft: usize,

    #[arg(short, long, default_value_t = 100)]
    trials: usize,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,
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

    let mut rng = SmallRng::seed_from_u64(options.seed);
    let mut histogram: Vec<usize> = Vec::new();

    for trial in 0..options.trials {
        let board = generator.generate(&mut rng);
        let mut engine = Engine::new(options.rows, options.cols, options.aircraft)?;

        let mut remaining_heads = options.aircraft;
        let mut guesses = 0;
        while remaining_heads > 0 {
            guesses += 1;
            let (row, col) = engine.get_cell_to_bomb()?;
            let color = board.color(Coord::new(row, col));
            eprintln!("trial {trial}: ({row}, {col}) -> {color}");
            engine.set_color(row, col, color)?;
            if color == Color::Red {
                remaining_heads -= 1;
            }
        }

        if histogram.len() <= guesses {
            histogram.resize(guesses + 1, 0);
        }
        histogram[guesses] += 1;
    }

    println!("guesses,trials");
    for (guesses, count) in histogram.into_iter().enumerate() {
        if count > 0 {
            println!("{guesses},{count}");
        }
    }

    Ok(())
}
