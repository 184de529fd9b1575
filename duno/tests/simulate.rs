use duno::{
    card::Color,
    constants::TOTAL_CARDS_IN_DECK,
    controller::{coin_flip, CpuController},
    event::GameEvent,
    player::{ParticipantKind, Side},
    session::Session,
    turn::TurnState,
};
use rand::{rngs::StdRng, SeedableRng};

const MAX_TURNS: usize = 10_000;

#[test]
fn cpu_games_conserve_cards_and_terminate() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut a = CpuController::new(StdRng::seed_from_u64(seed + 1000));
        let mut b = CpuController::new(StdRng::seed_from_u64(seed + 2000));
        let mut session = Session::builder()
            .with_seed(seed)
            .with_participants(ParticipantKind::Cpu, ParticipantKind::Cpu)
            .build()
            .unwrap();

        let starter = coin_flip(&mut rng);
        let starter_controller = match starter {
            Side::A => &mut a,
            Side::B => &mut b,
        };
        session.start(starter, starter_controller).unwrap();
        assert_eq!(session.card_count(), TOTAL_CARDS_IN_DECK, "seed {seed}");

        let mut turns = 0;
        while session.winner().is_none() {
            assert!(turns < MAX_TURNS, "seed {seed} did not finish");
            let controller = match session.current_actor().unwrap() {
                Side::A => &mut a,
                Side::B => &mut b,
            };
            session.take_turn(controller).unwrap();
            turns += 1;

            assert_eq!(session.card_count(), TOTAL_CARDS_IN_DECK, "seed {seed}");
            assert_ne!(session.top_card().unwrap().color(), Color::Wild, "seed {seed}");
        }

        let winner = session.winner().unwrap();
        assert!(session.hand(winner).is_empty(), "seed {seed}");
        assert!(!session.hand(winner.other()).is_empty(), "seed {seed}");
        assert_eq!(session.state(), TurnState::Terminal(winner));
        assert_eq!(session.events().last(), Some(&GameEvent::GameWon(winner)));
    }
}

#[test]
fn run_drives_a_game_to_the_end() {
    let mut a = CpuController::new(StdRng::seed_from_u64(1));
    let mut b = CpuController::new(StdRng::seed_from_u64(2));
    let mut session = Session::builder().with_seed(99).build().unwrap();

    session.start(Side::A, &mut a).unwrap();
    let winner = session
        .run_with_limit(&mut a, &mut b, MAX_TURNS)
        .unwrap()
        .expect("game should finish");

    assert_eq!(session.winner(), Some(winner));
    assert!(session.winner_score().is_some());
    assert_eq!(session.run(&mut a, &mut b), Ok(winner));
}

#[test]
fn run_and_run_with_limit_play_the_same_game() {
    let play = |limited: bool| {
        let mut a = CpuController::new(StdRng::seed_from_u64(5));
        let mut b = CpuController::new(StdRng::seed_from_u64(6));
        let mut session = Session::builder().with_seed(41).build().unwrap();
        session.start(Side::B, &mut b).unwrap();
        let winner = if limited {
            session.run_with_limit(&mut a, &mut b, MAX_TURNS).unwrap()
        } else {
            Some(session.run(&mut a, &mut b).unwrap())
        };
        (winner, session.turns_taken(), session.drain_events())
    };

    let (winner, turns, events) = play(false);
    assert!(winner.is_some());
    assert_eq!(play(true), (winner, turns, events));
}
