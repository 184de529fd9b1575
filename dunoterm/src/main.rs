mod human;

use std::io;

use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use duno::{
    controller::{coin_flip, Controller, CpuController},
    player::{ParticipantKind, Side},
    session::Session,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::human::HumanController;

/// Play two-party UNO against the computer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling, coin flips and the computer's color choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Let two computer players play each other.
    #[arg(long)]
    autoplay: bool,

    /// The computer always starts.
    #[arg(long, conflicts_with = "human_first")]
    cpu_first: bool,

    /// You always start.
    #[arg(long)]
    human_first: bool,

    /// Give up after this many turns.
    #[arg(long, default_value_t = 10_000)]
    max_turns: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");

    let mut rng = StdRng::seed_from_u64(seed);
    let human_kind = if args.autoplay {
        ParticipantKind::Cpu
    } else {
        ParticipantKind::Human
    };
    let mut session = Session::builder()
        .with_seed(seed)
        .with_participants(human_kind, ParticipantKind::Cpu)
        .build()?;

    let mut a: Box<dyn Controller> = if args.autoplay {
        Box::new(CpuController::new(StdRng::seed_from_u64(seed ^ 0xA)))
    } else {
        Box::new(HumanController::new(io::stdin().lock()))
    };
    let mut b = CpuController::new(StdRng::seed_from_u64(seed ^ 0xB));

    let starter = if args.cpu_first {
        Side::B
    } else if args.human_first {
        Side::A
    } else {
        coin_flip(&mut rng)
    };
    println!("The coin says player {starter} starts.");

    let starter_controller: &mut dyn Controller = match starter {
        Side::A => a.as_mut(),
        Side::B => &mut b,
    };
    session.start(starter, starter_controller)?;
    print_events(&mut session);

    for _ in 0..args.max_turns {
        let Some(actor) = session.current_actor() else {
            break;
        };
        let controller: &mut dyn Controller = match actor {
            Side::A => a.as_mut(),
            Side::B => &mut b,
        };
        session.take_turn(controller)?;
        print_events(&mut session);
    }

    let winner = session
        .winner()
        .ok_or_else(|| eyre!("no winner after {} turns", args.max_turns))?;
    let label = match session.player(winner).kind {
        ParticipantKind::Human => "You win",
        ParticipantKind::Cpu => "The computer wins",
    };
    println!(
        "{label} after {} turns, scoring {} points.",
        session.turns_taken(),
        session.winner_score().unwrap_or_default()
    );

    Ok(())
}

fn print_events(session: &mut Session) {
    for event in session.drain_events() {
        println!("{event}");
    }
}
