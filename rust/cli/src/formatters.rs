//! Card and hand formatters for terminal display.
//!
//! Pure functions for rendering game elements. Suit symbols use Unicode
//! with an ASCII fallback for terminals that can't render them.
//!
//! ## Unicode vs ASCII Fallback
//!
//! On Windows, modern-terminal environment variables (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION) decide; Unix-like systems are assumed
//! capable.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters

use twentyone_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// # use twentyone_cli::formatters::format_card;
///
/// let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
/// let formatted = format_card(&ace_spades);
/// assert!(formatted == "A♠" || formatted == "As");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a hand as a string in bracket notation, e.g. "[A♠ K♥]".
pub fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// Format the dealer's hand, masking everything but the first card while
/// the hole card is hidden.
///
/// # Example
///
/// ```rust
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// # use twentyone_cli::formatters::format_dealer_hand;
///
/// let cards = vec![
///     Card { rank: Rank::King, suit: Suit::Spades },
///     Card { rank: Rank::Nine, suit: Suit::Hearts },
/// ];
/// let formatted = format_dealer_hand(&cards, true);
/// assert!(formatted.ends_with("??]"));
/// ```
pub fn format_dealer_hand(cards: &[Card], hole_hidden: bool) -> String {
    if !hole_hidden {
        return format_hand(cards);
    }
    let shown: Vec<String> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                format_card(c)
            } else {
                "??".to_string()
            }
        })
        .collect();
    format!("[{}]", shown.join(" "))
}
