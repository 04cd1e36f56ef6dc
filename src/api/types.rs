use serde::Deserialize;

use crate::db::MovieFields;

/// Request body for create and update. Unknown fields are rejected,
/// absent text fields decode to the empty string, and a supplied `id`
/// is accepted but always discarded (the backend mints keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviePayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub genre: String,
}

impl MoviePayload {
    pub fn into_fields(self) -> MovieFields {
        MovieFields {
            name: self.name,
            director: self.director,
            genre: self.genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let payload: MoviePayload =
            serde_json::from_str(r#"{"name": "Alien", "director": "Ridley Scott", "genre": "Horror"}"#)
                .unwrap();
        assert_eq!(payload.name, "Alien");
        assert_eq!(payload.director, "Ridley Scott");
        assert_eq!(payload.genre, "Horror");
        assert_eq!(payload.id, None);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload: MoviePayload = serde_json::from_str(r#"{"name": "Alien"}"#).unwrap();
        assert_eq!(payload.name, "Alien");
        assert_eq!(payload.director, "");
        assert_eq!(payload.genre, "");
    }

    #[test]
    fn test_supplied_id_is_carried_but_separate() {
        let payload: MoviePayload =
            serde_json::from_str(r#"{"id": "65f2a1b3c4d5e6f708192a3b", "name": "Alien"}"#).unwrap();
        assert_eq!(payload.id.as_deref(), Some("65f2a1b3c4d5e6f708192a3b"));

        let fields = payload.into_fields();
        assert_eq!(fields.name, "Alien");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<MoviePayload, _> =
            serde_json::from_str(r#"{"name": "Alien", "rating": 9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result: Result<MoviePayload, _> = serde_json::from_str(r#"{"name": 42}"#);
        assert!(result.is_err());
    }
}
