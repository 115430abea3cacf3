//! Terminal blackjack table.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    ActionError, Actions, Card, Chips, DealerView, HandView, Phase, RoundController,
    RoundSnapshot, TableOptions,
};

fn main() {
    env_logger::init();
    println!("Blackjack table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut table = match RoundController::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Cannot open table: {err}");
            return;
        }
    };

    let mut last_bet = 10;

    loop {
        let balance = table.balance();
        if balance < Chips::whole(table.options().min_bet) {
            println!("You are out of money. Game over.");
            break;
        }

        let prompt = format!("Bet amount (balance {balance}, enter for {last_bet}, q to quit): ");
        let Some(bet) = prompt_bet(&prompt, last_bet) else {
            println!("Goodbye.");
            break;
        };

        if let Err(err) = table.deal(bet) {
            report(err);
            continue;
        }
        last_bet = bet;

        while table.phase() == Phase::PlayerActing {
            let snapshot = table.snapshot();
            print_table(&snapshot);
            println!("{}", format_actions(snapshot.actions));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => table.hit().map(|_| ()),
                "s" | "stand" => table.stand(),
                "d" | "double" => table.double().map(|_| ()),
                "p" | "split" => table.split().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                report(err);
            }
        }

        let snapshot = table.snapshot();
        print_table(&snapshot);
        print_outcomes(&snapshot);

        if let Err(err) = table.start_new_round() {
            report(err);
        }
    }
}

fn report(err: ActionError) {
    println!("{}", colorize(&format!("Not allowed: {err}"), "33"));
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

fn prompt_bet(prompt: &str, default: u64) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        match input.as_str() {
            "q" | "quit" => return None,
            "" => return Some(default),
            _ => {}
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn print_table(snapshot: &RoundSnapshot) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);
    println!("Balance: {}", snapshot.balance);
    println!(
        "\nDealer: {} ({})",
        format_dealer(&snapshot.dealer),
        format_dealer_value(&snapshot.dealer)
    );

    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if snapshot.active_hand == Some(index) {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | {} | bet {}",
            marker,
            index + 1,
            format_cards(&hand.cards),
            format_value(hand),
            hand.bet
        );
    }
    println!();
}

fn print_outcomes(snapshot: &RoundSnapshot) {
    let Some(result) = &snapshot.result else {
        return;
    };

    for hand in &result.hands {
        let text = format!(
            "Hand {}: {} ({} vs {}), credited {}",
            hand.hand_index + 1,
            hand.outcome,
            hand.player_value,
            hand.dealer_value,
            hand.credited
        );
        let code = if hand.credited.is_zero() { "31" } else { "32" };
        println!("{}", colorize(&text, code));
    }
    println!("Balance: {}\n", snapshot.balance);
}

fn format_actions(actions: Actions) -> String {
    let parts = [
        format_action("hit", "h", actions.hit),
        format_action("stand", "s", actions.stand),
        format_action("double", "d", actions.double),
        format_action("split", "p", actions.split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerView) -> String {
    if dealer.cards.is_empty() {
        return "(no cards)".to_string();
    }

    dealer
        .visible_cards()
        .into_iter()
        .map(|card| card.map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_dealer_value(dealer: &DealerView) -> String {
    if dealer.hole_concealed {
        format!("showing {}", dealer.visible_value())
    } else if dealer.is_soft {
        format!("value {} soft", dealer.value)
    } else {
        format!("value {}", dealer.value)
    }
}

fn format_value(hand: &HandView) -> String {
    let mut text = format!("value {}", hand.value);
    if hand.is_soft {
        text.push_str(" soft");
    }
    if hand.doubled {
        text.push_str(", doubled");
    }
    text
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .copied()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
