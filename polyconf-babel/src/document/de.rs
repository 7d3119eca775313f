use super::{Document, Mapping, Number};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any configuration value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Document, E> {
        Ok(Document::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Document, E> {
        Ok(Document::Number(Number::from(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Document, E> {
        Ok(Document::Number(Number::PosInt(value)))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Document, E> {
        Ok(Document::Number(Number::Float(value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Document, E> {
        Ok(Document::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Document, E> {
        Ok(Document::String(value))
    }

    fn visit_none<E>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_unit<E>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Document, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Document::Sequence(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Document, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_key::<MapKey>()? {
            let value = access.next_value()?;
            map.insert(key.0, value);
        }
        Ok(Document::Mapping(map))
    }
}

/// Mapping keys must be strings; scalar keys are stringified, collections rejected.
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D>(deserializer: D) -> Result<MapKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MapKeyVisitor)
    }
}

struct MapKeyVisitor;

impl<'de> Visitor<'de> for MapKeyVisitor {
    type Value = MapKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string mapping key")
    }

    fn visit_str<E>(self, value: &str) -> Result<MapKey, E> {
        Ok(MapKey(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<MapKey, E> {
        Ok(MapKey(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<MapKey, E> {
        Ok(MapKey(value.to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<MapKey, E> {
        Ok(MapKey(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<MapKey, E> {
        Ok(MapKey(value.to_string()))
    }

    fn visit_f64<E>(self, value: f64) -> Result<MapKey, E> {
        Ok(MapKey(value.to_string()))
    }

    fn visit_unit<E>(self) -> Result<MapKey, E> {
        Ok(MapKey("null".to_string()))
    }

    fn visit_seq<A>(self, _seq: A) -> Result<MapKey, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Err(de::Error::custom("sequence used as a mapping key"))
    }

    fn visit_map<A>(self, _map: A) -> Result<MapKey, A::Error>
    where
        A: MapAccess<'de>,
    {
        Err(de::Error::custom("mapping used as a mapping key"))
    }
}
