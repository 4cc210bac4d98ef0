//! CLI bank dice example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bankdice::{Game, GameOptions, GameState, RollEffect, RollOutcome, RoundResult};

fn main() {
    println!("Bank CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    println!("Enter player names, one per line. Leave empty to start.");
    loop {
        let Some(name) = prompt_line("Name: ") else {
            return;
        };
        if name.is_empty() {
            match game.start() {
                Ok(()) => break,
                Err(err) => println!("Start error: {err}"),
            }
            continue;
        }
        if name == "q" {
            return;
        }
        if let Err(err) = game.register_player(&name) {
            println!("Cannot add {name:?}: {err}");
        }
    }

    while game.state() == GameState::Playing {
        print!("\n{}", game.inspect());
        println!("Actions: r=roll, 2-12=enter total, d=doubles, b <name>=bank, e=end round");

        let Some(input) = prompt_line("Action: ") else {
            return;
        };
        let mut parts = input.splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().unwrap_or_default().trim();

        match command {
            "r" | "roll" => match game.roll_dice() {
                Ok(report) => {
                    println!(
                        "Rolled {} and {} ({:?})",
                        report.dice.first, report.dice.second, report.outcome
                    );
                    print_effect(&game, &report.effect);
                }
                Err(err) => println!("Roll error: {err}"),
            },
            "d" | "doubles" => resolve(&mut game, RollOutcome::Doubles),
            "b" | "bank" => {
                let found = game
                    .players()
                    .iter()
                    .position(|player| player.name() == argument);
                match found {
                    Some(player_id) => match game.bank(player_id) {
                        Ok(()) => println!("{argument} banked at {}", game.bank_score()),
                        Err(err) => println!("Bank error: {err}"),
                    },
                    None => println!("No player named {argument:?}"),
                }
            }
            "e" | "end" => match game.end_round() {
                Ok(result) => print_round(&game, &result),
                Err(err) => println!("End round error: {err}"),
            },
            "q" | "quit" => return,
            other => match other.parse::<u8>().ok().and_then(RollOutcome::from_total) {
                Some(outcome) => resolve(&mut game, outcome),
                None => println!("Unknown action."),
            },
        }
    }

    print!("\n{}", game.inspect());
}

fn resolve(game: &mut Game, outcome: RollOutcome) {
    match game.resolve_roll(outcome) {
        Ok(effect) => print_effect(game, &effect),
        Err(err) => println!("Roll error: {err}"),
    }
}

fn print_effect(game: &Game, effect: &RollEffect) {
    match effect {
        RollEffect::Added(points) => println!("+{points} to the bank"),
        RollEffect::Doubled { from, to } => println!("Bank doubled from {from} to {to}"),
        RollEffect::RoundEnded(result) => {
            println!("Seven! The round is over.");
            print_round(game, result);
        }
    }
}

fn print_round(game: &Game, result: &RoundResult) {
    println!("Round {} paid out {}.", result.round + 1, result.bank);
    for payout in &result.payouts {
        let name = game.player(payout.player_id).map_or("?", |player| player.name());
        println!("  {name}: +{} (now {})", payout.amount, payout.score);
    }
    if result.game_over {
        println!("Game over.");
    }
}

/// Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}
