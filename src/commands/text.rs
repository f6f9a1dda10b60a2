//! Text extraction helpers.
//!
//! Pure functions turning chat text into command parts: the leading mention,
//! the trigger fragment or keyword, and the list of game names.

/// Prefix of every user or role mention.
const MENTION_PREFIX: &str = "<@";
/// Prefix of a nickname user mention.
const NICKNAME_MENTION_PREFIX: &str = "<@!";
/// Prefix of a role mention.
pub const ROLE_MENTION_PREFIX: &str = "<@&";
/// Delimiter between several game names, as in `I'd play chess/go`.
pub const MULTI_GAME_DELIMITER: char = '/';

/// Splits a leading mention from the rest of the text.
///
/// Returns the mention through its closing `>` and the trimmed remainder. Text
/// not starting with a mention is returned untouched with an empty mention.
/// Only the first mention is consumed.
///
/// # Examples
///
/// ```
/// assert_eq!(split_by_first_mention("<@!123> ping"), ("<@!123>", "ping"));
/// assert_eq!(split_by_first_mention("hello"), ("", "hello"));
/// ```
pub fn split_by_first_mention(text: &str) -> (&str, &str) {
    if !text.starts_with(MENTION_PREFIX) {
        return ("", text);
    }

    match text.find('>') {
        Some(index) => {
            let (mention, remainder) = text.split_at(index + 1);
            (mention, remainder.trim())
        }
        None => ("", text),
    }
}

/// Whether `mention` is a user mention of the bot with id `client_id`.
///
/// Role mentions and empty input never match.
pub fn is_bot_mention(mention: &str, client_id: &str) -> bool {
    let inner = mention
        .strip_prefix(NICKNAME_MENTION_PREFIX)
        .or_else(|| mention.strip_prefix(MENTION_PREFIX))
        .and_then(|inner| inner.strip_suffix('>'));

    match inner {
        Some(id) => !id.is_empty() && id == client_id,
        None => false,
    }
}

/// Strips `prefix` from the start of `text`, ignoring case.
///
/// Characters are compared one by one so the returned slice always starts on a
/// character boundary of `text`.
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();

    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }

    let offset = chars.next().map_or(text.len(), |(index, _)| index);
    text.get(offset..)
}

/// Returns the longest fragment `content` starts with, ignoring case.
pub fn find_starting_fragment<'f>(fragments: &[&'f str], content: &str) -> Option<&'f str> {
    fragments
        .iter()
        .filter(|fragment| strip_prefix_ignore_case(content, fragment).is_some())
        .max_by_key(|fragment| fragment.chars().count())
        .copied()
}

/// Removes the trigger fragment `content` starts with.
///
/// When several fragments match, the longest one is removed (`same to` wins
/// over `same`). Content starting with no fragment is returned unchanged.
pub fn extract_remainder_after_fragments<'a>(fragments: &[&str], content: &'a str) -> &'a str {
    find_starting_fragment(fragments, content)
        .and_then(|fragment| strip_prefix_ignore_case(content, fragment))
        .map_or(content, str::trim)
}

/// Splits the first keyword found anywhere in `text` from the rest.
///
/// Keywords are tried in order and matched literally, ignoring case like
/// [`find_starting_fragment`]. Only the first occurrence of the winning keyword
/// is removed, then the rest is trimmed.
pub fn split_string_by_keywords<'k>(
    keywords: &[&'k str],
    text: &str,
) -> (Option<&'k str>, String) {
    for keyword in keywords.iter().filter(|keyword| !keyword.is_empty()) {
        let found = text.char_indices().find_map(|(start, _)| {
            strip_prefix_ignore_case(&text[start..], keyword).map(|rest| (start, rest))
        });

        if let Some((start, rest)) = found {
            let removed = format!("{}{}", &text[..start], rest);
            return (Some(*keyword), removed.trim().to_owned());
        }
    }

    (None, text.to_owned())
}

/// Splits a game list on [`MULTI_GAME_DELIMITER`], dropping blank names.
pub fn split_game_names(remainder: &str) -> Vec<&str> {
    remainder
        .split(MULTI_GAME_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
