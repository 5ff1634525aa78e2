//! IGDB query-language bodies

/// Resource searched by storefront identifier
pub const EXTERNAL_GAMES_ENDPOINT: &str = "external_games";

/// Resource holding completion estimates
pub const TIME_TO_BEAT_ENDPOINT: &str = "game_time_to_beats";

/// IGDB external-game category for Steam
pub const STEAM_CATEGORY: u8 = 1;

const GAME_FIELDS: &str =
    "game.name, game.summary, game.aggregated_rating, game.rating, game.platforms.name, game.id";

/// Query matching a Steam external id
///
/// `"` and `\` in `uid` are escaped so the value stays inside its string
/// literal.
pub fn external_game_query(uid: &str) -> String {
    format!(
        "fields {GAME_FIELDS}; where category = {STEAM_CATEGORY} & uid = \"{}\";",
        escape_string_literal(uid)
    )
}

/// Query for the completion estimates of one game
pub fn time_to_beat_query(game_id: u64) -> String {
    format!("fields hastily,normally,completely; where game_id = ({game_id});")
}

fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
