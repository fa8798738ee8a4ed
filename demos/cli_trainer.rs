//! CLI trainer example.
//!
//! Run with `RUST_LOG=debug` to see reshuffles and settlements.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtrainer::{
    AnalysisRequest, Card, CountingSystemName, DealerHand, ExplainError, GameState, Hand,
    PlayerAction, Settings, Suit, Trainer,
};

fn main() {
    env_logger::init();

    println!("Blackjack trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let settings = prompt_settings();
    let mut trainer = match Trainer::new(settings, seed) {
        Ok(trainer) => trainer,
        Err(err) => {
            println!("Settings error: {err}");
            return;
        }
    };

    loop {
        match trainer.deal() {
            Ok(report) => {
                if report.reshuffled {
                    println!("Shoe reshuffled.");
                }
            }
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }

        while trainer.state() == GameState::PlayerTurn {
            print_table(&trainer);

            let action = match prompt_line("[h]it [s]tand [d]ouble s[p]lit [?]hint: ").as_str() {
                "h" | "hit" => PlayerAction::Hit,
                "s" | "stand" => PlayerAction::Stand,
                "d" | "double" => PlayerAction::Double,
                "p" | "split" => PlayerAction::Split,
                "?" | "hint" => {
                    print_hint(&trainer);
                    continue;
                }
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match trainer.act(action) {
                Ok(report) => {
                    if let Some(card) = report.card {
                        println!("You draw {}.", format_card(card));
                    }
                    if !report.correct {
                        println!(
                            "{} Recommended: {}.",
                            colorize("Mistake.", "31"),
                            report.recommended.action
                        );
                    }
                }
                Err(err) => println!("Action error: {err}"),
            }
        }

        print_table(&trainer);
        if let Some(result) = trainer.history().front() {
            println!("Result: {}", result.outcome);
        }
        if let Some(text) = trainer.explain_last_mistake(&offline_tutor) {
            println!("{text}");
        }

        let stats = trainer.stats();
        println!(
            "Hands {} | accuracy {:.1}% | running count {:+} | true count {:+.2}",
            stats.hands_played,
            stats.accuracy(),
            trainer.running_count(),
            trainer.true_count()
        );

        if prompt_line("Next hand? (y/n): ") == "n" {
            break;
        }
    }
}

/// Stands in for a hosted explanation service.
fn offline_tutor(request: &AnalysisRequest) -> Result<String, ExplainError> {
    if std::env::var_os("TRAINER_EXPLAIN").is_none() {
        return Err(ExplainError::MissingCredential);
    }
    Ok(request.prompt())
}

fn prompt_settings() -> Settings {
    let mut settings = Settings::default();

    let decks = prompt_line("Decks (1, 2, 4, 6, 8) [6]: ");
    if let Ok(decks) = decks.parse() {
        settings = settings.with_decks(decks);
    }

    let names = CountingSystemName::ALL.map(CountingSystemName::as_str).join(", ");
    let system = prompt_line(&format!("Counting system ({names}) [Hi-Lo]: "));
    if !system.is_empty() {
        match system.parse() {
            Ok(name) => settings = settings.with_counting_system(name),
            Err(err) => println!("{err}; using Hi-Lo."),
        }
    }

    settings
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_hint(trainer: &Trainer) {
    let Some(advice) = trainer.recommendation() else {
        return;
    };
    println!("{}", advice.decision.reason);
    println!(
        "Bust chance {:.0}% | EV hit {:+.2} | EV stand {:+.2}",
        advice.bust_probability * 100.0,
        advice.ev_hit,
        advice.ev_stand
    );
}

fn print_table(trainer: &Trainer) {
    println!("\nShoe: {} cards remaining", trainer.cards_remaining());

    let dealer = trainer.dealer_hand();
    println!(
        "Dealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_value()
    );

    let hand = trainer.player_hand();
    println!("You:    {} (value {})\n", format_hand(hand), hand.value());
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        return format_hand(dealer.hand());
    }

    let mut parts = Vec::new();
    if let Some(card) = dealer.up_card() {
        parts.push(format_card(card));
    }
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
