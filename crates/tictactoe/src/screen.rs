//! Full console screens, built as plain text.

use crate::board::Board;
use crate::game::{Outcome, Scoreboard, Seat};
use crate::player::Player;
use strum::IntoEnumIterator;

/// Prompt shown when asking for a move.
pub const MOVE_PROMPT: &str = "Input: ";

/// Prompt shown after a round ends.
pub const REPLAY_PROMPT: &str = "Play again? (Y/N): ";

/// Alert shown after a rejected move, whatever the reason.
pub fn invalid_move_alert(move_text: &str) -> String {
    format!("Slot {move_text} is either taken or invalid.")
}

/// Screen shown while waiting for `player`'s move: the guide, the playing
/// field, the last alert and whose turn it is.
pub fn playing(board: &Board, alert: &str, player: &Player) -> String {
    format!(
        "Guide\n\n{}\n\n\n\nPlaying Field\n\n{}\n{}\nTurn of {} [{}]\n\n",
        board.draw(false),
        board.draw(true),
        alert,
        player.name(),
        player.token(),
    )
}

/// Screen shown when a round ends. `player` is the active player, who is
/// the winner when `outcome` is [`Outcome::Won`].
pub fn round_over(board: &Board, outcome: Outcome, player: &Player) -> String {
    let message = match outcome {
        Outcome::Won => format!("{} has won!", player.name()),
        Outcome::Draw => "Draw!".to_string(),
    };
    format!("{}\n{}\n\n\n\n", board.draw(true), message)
}

/// Per-player results shown when the loop ends. Empty if no round finished.
pub fn final_tally(scoreboard: &Scoreboard, players: &[Player; 2]) -> String {
    if scoreboard.rounds() == 0 {
        return String::new();
    }

    let mut tally = String::from("Final tally\n");
    for seat in Seat::iter() {
        let player = &players[seat.index()];
        tally.push_str(&format!(
            "{} [{}]: {}\n",
            player.name(),
            player.token(),
            scoreboard.wins(seat)
        ));
    }
    tally.push_str(&format!("Draws: {}\n", scoreboard.draws()));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_screen_layout() {
        let board = Board::new(3, 3);
        let player = Player::new("O", "Player 1");
        let screen = playing(&board, "", &player);

        assert!(screen.starts_with("Guide\n\n 1 | 2 | 3\n"));
        assert!(screen.contains(" 7 | 8 | 9\n\n\n\n\nPlaying Field\n\n   |   |  \n"));
        assert!(screen.ends_with("   |   |  \n\n\nTurn of Player 1 [O]\n\n"));
    }

    #[test]
    fn test_playing_screen_shows_alert() {
        let board = Board::new(3, 3);
        let player = Player::new("X", "Player 2");
        let screen = playing(&board, &invalid_move_alert("42"), &player);
        assert!(screen.contains("\nSlot 42 is either taken or invalid.\nTurn of Player 2 [X]"));
    }

    #[test]
    fn test_round_over_messages() {
        let board = Board::new(3, 3);
        let player = Player::new("O", "Player 1");
        assert!(round_over(&board, Outcome::Won, &player).ends_with("\nPlayer 1 has won!\n\n\n\n"));
        assert!(round_over(&board, Outcome::Draw, &player).ends_with("\nDraw!\n\n\n\n"));
    }

    #[test]
    fn test_final_tally() {
        let players = [Player::new("O", "Player 1"), Player::new("X", "Player 2")];
        let mut scoreboard = Scoreboard::new();
        assert_eq!(final_tally(&scoreboard, &players), "");

        scoreboard.record_win(Seat::First);
        scoreboard.record_draw();
        assert_eq!(
            final_tally(&scoreboard, &players),
            "Final tally\nPlayer 1 [O]: 1\nPlayer 2 [X]: 0\nDraws: 1\n"
        );
    }
}
