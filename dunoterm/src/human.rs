use std::{
    io::{self, BufRead, Write},
    process,
};

use duno::{
    card::{Card, Color},
    controller::Controller,
    player::{Hand, Side},
    rules::is_playable,
    turn::{Decision, Disposition},
};

/// Asks a person at the terminal for every decision.
pub struct HumanController<I> {
    input: I,
}

impl<I: BufRead> HumanController<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    fn prompt(&mut self, message: &str) -> String {
        print!("{message}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                println!("\nInput closed, leaving the game.");
                process::exit(0);
            }
            Ok(_) => {}
            Err(err) => eprintln!("failed to read input: {err}"),
        }
        let line = line.trim().to_string();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            println!("Leaving the game.");
            process::exit(0);
        }
        line
    }
}

impl<I: BufRead> Controller for HumanController<I> {
    fn turn_decision(&mut self, _actor: Side, hand: &Hand, top: Card) -> Decision {
        loop {
            println!("\nTop card: {top}");
            println!("Your hand: {hand}");
            let answer = self.prompt("Card to play, 'd' to draw or 'q' to quit: ");
            if answer.eq_ignore_ascii_case("d") {
                return Decision::DrawCard;
            }
            let Ok(index) = answer.parse::<usize>() else {
                println!("'{answer}' is not a card number.");
                continue;
            };
            match hand.get(index) {
                Ok(card) if is_playable(&card, &top) => return Decision::PlayAt(index),
                Ok(card) => println!("{card} cannot be played on {top}."),
                Err(err) => println!("{err}."),
            }
        }
    }

    fn drawn_card_disposition(&mut self, _actor: Side, drawn: Card, _top: Card) -> Disposition {
        loop {
            let answer = self.prompt(&format!("You drew {drawn}. Play it now? [y/n]: "));
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Disposition::PlayImmediately,
                "n" | "no" => return Disposition::KeepInHand,
                _ => println!("Please answer 'y' or 'n'."),
            }
        }
    }

    fn color_choice(&mut self, _actor: Side) -> Color {
        let colors = Color::concrete().collect::<Vec<_>>();
        loop {
            for (index, color) in colors.iter().enumerate() {
                println!("  [{index}] {color}");
            }
            let answer = self.prompt("Choose a color: ");
            if let Some(color) = answer
                .parse::<usize>()
                .ok()
                .and_then(|index| colors.get(index).copied())
            {
                return color;
            }
            if let Some(color) = answer
                .parse::<Color>()
                .ok()
                .filter(|color| !color.is_wild())
            {
                return color;
            }
            println!("'{answer}' is not one of the colors above.");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use duno::card::Rank;

    use super::*;

    fn hand() -> Hand {
        Hand::new(vec![
            Card::number(Color::Red, 5),
            Card::new(Color::Blue, Rank::Skip),
        ])
    }

    #[test]
    fn skips_unplayable_and_invalid_answers() {
        let mut human = HumanController::new(Cursor::new("x\n1\n9\n0\n"));
        let decision = human.turn_decision(Side::A, &hand(), Card::number(Color::Red, 2));
        assert_eq!(decision, Decision::PlayAt(0));
    }

    #[test]
    fn d_draws_a_card() {
        let mut human = HumanController::new(Cursor::new("D\n"));
        let decision = human.turn_decision(Side::A, &hand(), Card::number(Color::Red, 2));
        assert_eq!(decision, Decision::DrawCard);
    }

    #[test]
    fn color_by_index_or_name() {
        let mut human = HumanController::new(Cursor::new("wild\n2\nblue\nteal\nYELLOW\n"));
        assert_eq!(human.color_choice(Side::A), Color::Green);
        assert_eq!(human.color_choice(Side::A), Color::Blue);
        assert_eq!(human.color_choice(Side::A), Color::Yellow);
    }

    #[test]
    fn disposition_accepts_yes_and_no() {
        let mut human = HumanController::new(Cursor::new("maybe\ny\nno\n"));
        let drawn = Card::number(Color::Red, 9);
        let top = Card::number(Color::Red, 2);
        assert_eq!(
            human.drawn_card_disposition(Side::A, drawn, top),
            Disposition::PlayImmediately
        );
        assert_eq!(
            human.drawn_card_disposition(Side::A, drawn, top),
            Disposition::KeepInHand
        );
    }
}
