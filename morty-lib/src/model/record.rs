//! Character records as returned by the listing endpoint.

use serde::Deserialize;

/// Life status of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    Alive,
    Dead,
    Unknown,
}

impl Status {
    /// Returns the string the API uses for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Alive" => Self::Alive,
            "Dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    Female,
    Male,
    Genderless,
    Unknown,
}

impl Gender {
    /// Returns the string the API uses for this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Female" => Self::Female,
            "Male" => Self::Male,
            "Genderless" => Self::Genderless,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named link to another resource (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Place {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// One character entity.
///
/// Records are immutable once fetched; the table only ever reads them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub species: String,
    /// Sub-species or variant, often empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: Gender,
    pub origin: Place,
    pub location: Place,
    /// Avatar image URL.
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// Creates a character with the fields the table displays.
    ///
    /// Link fields are left empty.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        status: Status,
        species: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            species: species.into(),
            kind: String::new(),
            gender,
            origin: Place::new("unknown"),
            location: Place::new("unknown"),
            image: String::new(),
            episode: Vec::new(),
            url: String::new(),
            created: String::new(),
        }
    }

    /// Sets the origin name.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Place::new(origin);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_api_character() {
        let json = r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": { "name": "Earth (C-137)", "url": "https://example.test/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "https://example.test/location/3" },
            "image": "https://example.test/avatar/1.jpeg",
            "episode": ["https://example.test/episode/1"],
            "url": "https://example.test/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        }"#;

        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.status, Status::Alive);
        assert_eq!(character.gender, Gender::Male);
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(character.episode.len(), 1);
    }

    #[test]
    fn test_unrecognised_enum_values_decode_as_unknown() {
        assert_eq!(Status::from("Presumed dead".to_string()), Status::Unknown);
        assert_eq!(Gender::from("".to_string()), Gender::Unknown);
        assert_eq!(Status::Unknown.as_str(), "unknown");
    }
}
