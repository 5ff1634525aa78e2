//! IGDB payload → [`GameRecord`]

use gameshelf_domain::{GameRecord, TimeToBeat};

use super::types::IgdbGame;

/// Build a [`GameRecord`] from a game object and its completion estimates
///
/// Only the first estimate is used. Performs no I/O.
pub fn to_game_record(game: &IgdbGame, time_to_beat: &[TimeToBeat]) -> GameRecord {
    let estimate = time_to_beat.first();

    GameRecord {
        title: game.name.clone(),
        description: game.summary.clone(),
        external_id: game.id,
        critic_score: game.aggregated_rating.and_then(round_score),
        user_score: game.rating.and_then(round_score),
        main_story_completion_time: estimate.and_then(|t| t.hastily),
        completionist_time: estimate.and_then(|t| t.completely),
        platforms: game
            .platforms
            .iter()
            .flatten()
            .filter_map(|platform| platform.name.clone())
            .collect(),
    }
}

/// Round a rating to the nearest integer, halves away from zero
///
/// NaN and infinities have no integer value and yield `None`.
#[allow(clippy::cast_possible_truncation)]
pub fn round_score(rating: f64) -> Option<i64> {
    rating.is_finite().then(|| rating.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::super::types::IgdbPlatform;
    use super::*;

    fn platform(name: Option<&str>) -> IgdbPlatform {
        IgdbPlatform { name: name.map(str::to_string) }
    }

    #[test]
    fn maps_full_payload() {
        let game = IgdbGame {
            id: Some(42),
            name: Some("Foo".into()),
            summary: Some("A game".into()),
            aggregated_rating: Some(87.4),
            rating: Some(87.5),
            platforms: Some(vec![
                platform(Some("PC (Microsoft Windows)")),
                platform(Some("Xbox One")),
            ]),
        };
        let ttb = [TimeToBeat {
            hastily: Some(36_000),
            normally: Some(50_000),
            completely: Some(72_000),
        }];

        let record = to_game_record(&game, &ttb);

        assert_eq!(
            record,
            GameRecord {
                title: Some("Foo".into()),
                description: Some("A game".into()),
                external_id: Some(42),
                critic_score: Some(87),
                user_score: Some(88),
                main_story_completion_time: Some(36_000),
                completionist_time: Some(72_000),
                platforms: vec!["PC (Microsoft Windows)".into(), "Xbox One".into()],
            }
        );
    }

    #[test]
    fn maps_decoded_payload_with_null_rating() {
        let game: IgdbGame = serde_json::from_str(
            r#"{"id": 42, "name": "X", "summary": "Y", "aggregated_rating": 87.4,
                "rating": null, "platforms": [{"name": "PC"}, {"name": "XboxOne"}]}"#,
        )
        .unwrap();
        let ttb: Vec<TimeToBeat> =
            serde_json::from_str(r#"[{"hastily": 18000, "completely": 90000}]"#).unwrap();

        let record = to_game_record(&game, &ttb);

        assert_eq!(
            record,
            GameRecord {
                title: Some("X".into()),
                description: Some("Y".into()),
                external_id: Some(42),
                critic_score: Some(87),
                user_score: None,
                main_story_completion_time: Some(18_000),
                completionist_time: Some(90_000),
                platforms: vec!["PC".into(), "XboxOne".into()],
            }
        );
    }

    #[test]
    fn missing_fields_stay_null() {
        let record = to_game_record(&IgdbGame { id: Some(1), ..IgdbGame::default() }, &[]);

        assert_eq!(record, GameRecord { external_id: Some(1), ..GameRecord::default() });
    }

    #[test]
    fn uses_first_estimate_only() {
        let ttb = [
            TimeToBeat { hastily: None, normally: Some(1), completely: Some(9) },
            TimeToBeat { hastily: Some(5), normally: Some(6), completely: Some(7) },
        ];

        let record = to_game_record(&IgdbGame::default(), &ttb);

        assert_eq!(record.main_story_completion_time, None);
        assert_eq!(record.completionist_time, Some(9));
    }

    #[test]
    fn skips_unnamed_platforms() {
        let game = IgdbGame {
            platforms: Some(vec![platform(None), platform(Some("Nintendo Switch"))]),
            ..IgdbGame::default()
        };

        assert_eq!(to_game_record(&game, &[]).platforms, vec!["Nintendo Switch".to_string()]);
    }

    #[test]
    fn same_input_same_output() {
        let game = IgdbGame { name: Some("Foo".into()), rating: Some(70.0), ..IgdbGame::default() };
        assert_eq!(to_game_record(&game, &[]), to_game_record(&game, &[]));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_score(87.4), Some(87));
        assert_eq!(round_score(87.5), Some(88));
        assert_eq!(round_score(0.5), Some(1));
        assert_eq!(round_score(100.0), Some(100));
        assert_eq!(round_score(f64::NAN), None);
        assert_eq!(round_score(f64::INFINITY), None);
    }
}
