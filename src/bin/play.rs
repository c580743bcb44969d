//! Interactive Rock-Paper-Scissors-Plus against the uniform random bot.
//!
//! Plays exactly three rounds; invalid input forfeits the round for the
//! submitting player. Set RUST_LOG=debug to surface the bot seed and
//! per-round resolution.

use colored::Colorize;
use dialoguer::Input;

use rps_plus::{Referee, RoundReport, UniformPolicy, Winner};

fn main() {
    env_logger::init();

    let policy = UniformPolicy::from_entropy();
    log::debug!("bot policy seed: {}", policy.seed());

    let mut referee = Referee::new(policy);
    let mut state = referee.new_game();

    println!("{}", "Rock-Paper-Scissors-Plus".bold());
    println!(
        "Exactly {} rounds. Valid moves: rock, paper, scissors, bomb (r/p/s shorthand).",
        state.max_rounds()
    );
    println!("Bomb beats everything, bomb vs bomb draws; one bomb per player per game.");
    println!("Invalid input forfeits the round; the game always runs its full length.");

    while !state.is_over() {
        let raw: String = Input::new()
            .with_prompt(format!("\nround {} move", state.round_number + 1))
            .allow_empty(true)
            .interact_text()
            .expect("terminal input");

        let (next, report) = referee.play_round(state, &raw);
        state = next;
        print_report(&report);
    }

    println!();
    let score = format!("you {}, bot {}", state.user_score, state.bot_score);
    match referee.final_result(&state) {
        Winner::User => println!("{} Final score: {score}", "You win!".green().bold()),
        Winner::Bot => println!("{} Final score: {score}", "Bot wins.".red().bold()),
        Winner::Draw => println!("{} Final score: {score}", "Draw.".yellow().bold()),
    }
}

fn print_report(report: &RoundReport) {
    if let Some(rejection) = &report.rejection {
        println!("{} {rejection}; this wastes the round", "note:".yellow());
    }

    let user = report
        .user_move
        .map_or_else(|| "INVALID".red().to_string(), |m| m.to_string());

    println!(
        "Round {}: you played {}, bot played {}",
        report.round_number, user, report.bot_move
    );

    let verdict = match report.outcome.winner {
        Winner::User => "you take the round".green(),
        Winner::Bot => "bot takes the round".red(),
        Winner::Draw => "round drawn".yellow(),
    };
    println!("  {verdict} ({})", report.outcome.explanation);
    println!("  score: you {}, bot {}", report.user_score, report.bot_score);
}
