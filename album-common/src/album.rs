//! Album record and seed data

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single record album
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Parse an album from a raw request body
    ///
    /// A bare `null` body yields an all-zero album.
    pub fn from_json(body: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice::<Option<Album>>(body)
            .map(Option::unwrap_or_default)
            .map_err(|e| crate::Error::InvalidInput(e.to_string()))
    }
}

const FIELDS: &[&str] = &["id", "title", "artist", "price"];

enum AlbumField {
    Id,
    Title,
    Artist,
    Price,
}

impl AlbumField {
    /// Keys match field names ignoring ASCII case
    fn from_key(key: &str) -> Option<Self> {
        let field = FIELDS.iter().position(|name| name.eq_ignore_ascii_case(key))?;
        Some(match field {
            0 => AlbumField::Id,
            1 => AlbumField::Title,
            2 => AlbumField::Artist,
            _ => AlbumField::Price,
        })
    }
}

/// Lenient object decoding for request bodies
///
/// - missing fields keep their zero value (`""` or `0.0`)
/// - a `null` field value leaves the field untouched
/// - keys match case-insensitively; a repeated key overwrites the earlier one
/// - unknown keys are ignored
///
/// Anything but a JSON object, or a field of the wrong type, is an error.
impl<'de> Deserialize<'de> for Album {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AlbumVisitor;

        impl<'de> Visitor<'de> for AlbumVisitor {
            type Value = Album;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an album object")
            }

            fn visit_seq<A>(self, _seq: A) -> Result<Album, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Album, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut album = Album::default();
                while let Some(key) = map.next_key::<String>()? {
                    match AlbumField::from_key(&key) {
                        Some(AlbumField::Id) => {
                            if let Some(id) = map.next_value::<Option<String>>()? {
                                album.id = id;
                            }
                        }
                        Some(AlbumField::Title) => {
                            if let Some(title) = map.next_value::<Option<String>>()? {
                                album.title = title;
                            }
                        }
                        Some(AlbumField::Artist) => {
                            if let Some(artist) = map.next_value::<Option<String>>()? {
                                album.artist = artist;
                            }
                        }
                        Some(AlbumField::Price) => {
                            if let Some(price) = map.next_value::<Option<f64>>()? {
                                album.price = price;
                            }
                        }
                        None => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(album)
            }
        }

        deserializer.deserialize_struct("Album", FIELDS, AlbumVisitor)
    }
}

/// Albums installed at startup, in display order
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}
