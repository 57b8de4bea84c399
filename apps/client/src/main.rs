use std::time::{Duration, Instant};

use rand::rngs::OsRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use client::api::{ApiClient, ScoreEntry};
use client::machine::{roll_wait, ClickOutcome, ReactionMachine, TimerEffect, TimerToken};

struct ArmedTimer {
    token: TimerToken,
    deadline: tokio::time::Instant,
}

fn init_tracing() {
    // Logs go to stderr so the game stays readable on stdout
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render_board(board: &[ScoreEntry]) {
    println!();
    println!("🏆 Leaderboard (Top 10)");
    if board.is_empty() {
        println!("   No scores yet — be the first!");
    }
    for (i, entry) in board.iter().enumerate() {
        println!("  {:>2}. {} — {} ms", i + 1, entry.name, entry.score);
    }
    println!();
}

fn print_help() {
    println!("Press Enter to click. Commands: 'submit <name>', 'board', 'quit'.");
}

fn handle_click(machine: &mut ReactionMachine, armed: &mut Option<ArmedTimer>) {
    let mut rng = OsRng;
    let delay = roll_wait(&mut rng);
    let (outcome, effect) = machine.click(Instant::now(), delay);

    match effect {
        TimerEffect::Schedule { token, delay } => {
            *armed = Some(ArmedTimer {
                token,
                deadline: tokio::time::Instant::now() + delay,
            });
        }
        TimerEffect::Disarm(_) => {
            *armed = None;
        }
        TimerEffect::None => {}
    }

    match outcome {
        ClickOutcome::Armed => println!("🟡 Wait for green…"),
        ClickOutcome::TooSoon => println!("⚠ Too soon! Wait for green."),
        ClickOutcome::Reacted { reaction_ms } => {
            println!("Your reaction: {reaction_ms} ms (Enter to retry, or submit <name>)");
        }
    }
}

async fn handle_submit(
    api: &ApiClient,
    machine: &ReactionMachine,
    board: &mut Vec<ScoreEntry>,
    name: &str,
) {
    let Some(reaction_ms) = machine.reaction_ms() else {
        println!("⚠ Play a round first — no reaction to submit.");
        return;
    };
    if name.is_empty() {
        println!("⚠ Usage: submit <name>");
        return;
    }

    match api.submit_score(name, reaction_ms).await {
        Ok(fresh) => {
            *board = fresh;
            println!("✅ Submitted {reaction_ms} ms as {name}");
            render_board(board);
        }
        Err(err) => {
            tracing::warn!(error = %err, "score submission failed");
            // The pending reaction survives for a manual retry
            println!("⚠ Failed to submit score");
        }
    }
}

async fn refresh_board(api: &ApiClient, board: &mut Vec<ScoreEntry>) {
    match api.fetch_leaderboard().await {
        Ok(fresh) => {
            *board = fresh;
            render_board(board);
        }
        Err(err) => {
            tracing::warn!(error = %err, "leaderboard fetch failed");
            println!("⚠ Failed to load leaderboard");
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let api = ApiClient::from_env();
    let mut machine = ReactionMachine::new();
    let mut armed: Option<ArmedTimer> = None;

    println!("⚡ Reaction Time — click when it turns green. Lower is better!");
    print_help();

    let mut board = match api.fetch_leaderboard().await {
        Ok(board) => board,
        Err(err) => {
            tracing::warn!(error = %err, "initial leaderboard fetch failed");
            println!("⚠ Failed to load leaderboard");
            Vec::new()
        }
    };
    render_board(&board);
    println!("Press Enter to start.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Inactive branch still needs a deadline to evaluate against
        let deadline = armed
            .as_ref()
            .map(|timer| timer.deadline)
            .unwrap_or_else(|| tokio::time::Instant::now() + Duration::from_secs(86_400));

        tokio::select! {
            _ = tokio::time::sleep_until(deadline), if armed.is_some() => {
                if let Some(timer) = armed.take() {
                    if machine.timer_fired(timer.token, Instant::now()) {
                        println!("🟢 GO! Press Enter!");
                    }
                }
            }
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                let input = line.trim();

                if input.is_empty() {
                    handle_click(&mut machine, &mut armed);
                } else if input == "submit" || input.starts_with("submit ") {
                    let name = input.strip_prefix("submit").unwrap_or_default().trim();
                    handle_submit(&api, &machine, &mut board, name).await;
                } else if input == "board" {
                    refresh_board(&api, &mut board).await;
                } else if input == "quit" || input == "exit" {
                    break;
                } else {
                    print_help();
                }
            }
        }
    }
}
