use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use holdem_equity::cards::{Board, Card, Hole, Street};
use holdem_equity::simulation::Engine;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of Monte Carlo trials per scenario
    #[arg(long, default_value_t = 1_000_000)]
    trials: usize,
    /// Seed for reproducible runs; defaults to OS entropy
    #[arg(long)]
    seed: Option<u64>,
    /// Hole cards for a one-shot run, e.g. "Ah Kd"
    #[arg(long)]
    hand: Option<String>,
    /// Board cards for a one-shot run, e.g. "2c 7s Jh"
    #[arg(long, default_value = "")]
    board: String,
}

fn main() -> anyhow::Result<()> {
    holdem_equity::log();
    let args = Args::parse();
    match args.hand {
        Some(ref hand) => oneshot(&args, hand),
        None => session(&args),
    }
}

/// non-interactive run from --hand / --board flags
fn oneshot(args: &Args, hand: &str) -> anyhow::Result<()> {
    let hole = Hole::try_from(hand).map_err(anyhow::Error::msg)?;
    let board = Board::try_from(args.board.as_str()).map_err(anyhow::Error::msg)?;
    anyhow::ensure!(
        hole.cards().iter().all(|c| !board.contains(c)),
        "board repeats a hole card"
    );
    simulate(args, hole, board);
    Ok(())
}

/// interactive validate-and-retry loop, one scenario at a time
fn session(args: &Args) -> anyhow::Result<()> {
    anyhow::ensure!(args.board.is_empty(), "--board requires --hand");
    loop {
        let mut known = Vec::new();
        let a = prompt("Hole card 1", &known);
        known.push(a);
        let b = prompt("Hole card 2", &known);
        known.push(b);
        let hole = Hole::from((a, b));
        let streets = Street::all();
        let street = Select::new()
            .with_prompt("Street")
            .items(streets)
            .default(0)
            .interact()?;
        let mut board = Board::empty();
        for i in 0..streets[street].n_observed() {
            let card = prompt(&format!("Board card {}", i + 1), &known);
            known.push(card);
            board.push(card);
        }
        simulate(args, hole, board);
        match Confirm::new()
            .with_prompt("Another scenario?")
            .default(true)
            .interact()?
        {
            true => continue,
            false => return Ok(()),
        }
    }
}

/// re-prompt until the input parses and collides with no known card
fn prompt(name: &str, known: &[Card]) -> Card {
    Input::<String>::new()
        .with_prompt(format!("{} (e.g. As, Td, 9h)", name))
        .validate_with(|s: &String| -> Result<(), String> {
            let card = Card::try_from(s.as_str())?;
            match known.contains(&card) {
                true => Err(format!("{} is already in play", card)),
                false => Ok(()),
            }
        })
        .interact()
        .map(|s| Card::try_from(s.as_str()).expect("validated input"))
        .expect("readable terminal")
}

fn simulate(args: &Args, hole: Hole, board: Board) {
    let mut engine = match args.seed {
        Some(seed) => Engine::seeded(hole, board, seed),
        None => Engine::new(hole, board),
    };
    let summary = engine.run(args.trials);
    println!();
    println!(
        "{} {}  {} {}",
        "HAND".bold(),
        engine.hole(),
        "BOARD".bold(),
        engine.board(),
    );
    print!("{}", summary);
    println!();
}
