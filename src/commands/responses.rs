//! Reply formatters for bot commands.
//!
//! Every user-facing sentence lives here so handlers only decide which one to
//! send.

use crate::{commands::HandlerError, roster::Player};

/// Confirms a sign-up, `count` being the game's roster size afterwards.
pub fn format_would_play(player: &Player, game: &str, count: usize) -> String {
    format!("{} would play {} (that's {})", player.display_name, game, count)
}

/// Confirms a sign-up made through `same`.
pub fn format_would_also_play(player: &Player, game: &str, count: usize) -> String {
    format!(
        "{} would also play {} (that's {})",
        player.display_name, game, count
    )
}

/// Reports a game name matching nothing in the catalog.
///
/// # Examples
///
/// ```
/// assert_eq!(format_unknown_game("tetris"), "I don't know a game called 'tetris'");
/// ```
pub fn format_unknown_game(game_name: &str) -> String {
    format!("I don't know a game called '{}'", game_name)
}

/// Builds the status reply.
///
/// `rosters` holds the games with at least one player and their roster size.
/// Readiness announcements follow the roster lines.
pub fn format_status(rosters: &[(&str, usize)], ready_messages: &[String]) -> String {
    let mut lines = vec!["Bot alive".to_owned()];

    lines.extend(
        rosters
            .iter()
            .map(|(game, count)| format!("{} has {}", game, count)),
    );
    lines.extend(ready_messages.iter().cloned());

    lines.join("\n")
}

pub fn format_cleared(game: &str) -> String {
    format!("Cleared {}", game)
}

pub fn format_no_game_specified() -> String {
    "No game specified!".to_owned()
}

pub fn format_cancelled(player: &Player) -> String {
    format!("Cancelled all play requests from {}", player.display_name)
}

/// Mentions the players of the next session.
pub fn format_ping(players: &[Player], game: &str) -> String {
    let mentions = players
        .iter()
        .map(Player::mention)
        .collect::<Vec<String>>()
        .join(",");

    format!("{} - ready to play {}.", mentions, game)
}

pub fn format_nobody_would_play(game: &str) -> String {
    format!("Nobody would play {} yet", game)
}

pub fn format_accidental_role_mention() -> String {
    "It looks like you tried to @ me but might have accidentally selected the role instead"
        .to_owned()
}

/// Lists game names, one per line.
pub fn format_game_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<&str>>().join("\n")
}

pub fn format_property(attribute: &str, value: &str) -> String {
    format!("{}: {}", attribute, value)
}

/// Converts a handler error into a reply.
pub fn format_handler_error(error: &HandlerError) -> String {
    match error {
        HandlerError::MalformedCommand(usage) => {
            format!("Sorry, I didn't understand that. Usage: `{}`", usage)
        }
        HandlerError::UnknownGame(game_name) => format_unknown_game(game_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_would_play() {
        let player = Player::new("1", "Alice");
        assert_eq!(
            format_would_play(&player, "Chess", 1),
            "Alice would play Chess (that's 1)"
        );
        assert_eq!(
            format_would_also_play(&player, "Chess", 2),
            "Alice would also play Chess (that's 2)"
        );
    }

    #[test]
    fn test_format_status_without_players() {
        assert_eq!(format_status(&[], &[]), "Bot alive");
    }

    #[test]
    fn test_format_status() {
        let ready = vec!["Chess is ready to play! (2 players)".to_string()];
        assert_eq!(
            format_status(&[("Chess", 2), ("Go", 1)], &ready),
            "Bot alive\nChess has 2\nGo has 1\nChess is ready to play! (2 players)"
        );
    }

    #[test]
    fn test_format_ping() {
        let players = vec![Player::new("1", "Alice"), Player::new("2", "Bob")];
        assert_eq!(
            format_ping(&players, "Chess"),
            "<@!1>,<@!2> - ready to play Chess."
        );
    }

    #[test]
    fn test_format_game_names() {
        assert_eq!(
            format_game_names(["Chess", "Go"].into_iter()),
            "Chess\nGo"
        );
    }

    #[test]
    fn test_format_handler_error() {
        assert_eq!(
            format_handler_error(&HandlerError::UnknownGame("tetris".to_string())),
            "I don't know a game called 'tetris'"
        );
        assert!(
            format_handler_error(&HandlerError::MalformedCommand("query <attribute> <game>"))
                .contains("query <attribute> <game>")
        );
    }
}
