use serde_json::Value;

use super::ObjectId;

pub const UNTITLED: &str = "(untitled)";
pub const UNKNOWN_ARTIST: &str = "(unknown artist)";

/// One fetched collection object, normalized for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub id: ObjectId,
    pub title: String,
    pub artist: String,
    /// Free-form dating, e.g. "ca. 1840". May be empty.
    pub date: String,
    /// Small primary image. Never empty.
    pub image_url: String,
}

impl DetailRecord {
    /// Parse an object detail response.
    ///
    /// Returns `None` if the response is not an object or carries no usable
    /// primary image. `requested_id` is used when `objectID` is missing.
    pub fn from_json(requested_id: ObjectId, json: &Value) -> Option<Self> {
        if !json.is_object() {
            return None;
        }

        let image_url = json["primaryImageSmall"].as_str().unwrap_or_default().trim();
        if image_url.is_empty() {
            return None;
        }

        let id = json["objectID"].as_u64().unwrap_or(requested_id);
        let title = non_blank(&json["title"]).unwrap_or(UNTITLED).to_string();
        let artist = non_blank(&json["artistDisplayName"]).unwrap_or(UNKNOWN_ARTIST).to_string();
        let date = json["objectDate"].as_str().unwrap_or_default().trim().to_string();

        Some(Self {
            id,
            title,
            artist,
            date,
            image_url: image_url.to_string(),
        })
    }

    /// "title, date" or just the title if undated
    pub fn caption(&self) -> String {
        if self.date.is_empty() {
            self.title.clone()
        } else {
            format!("{}, {}", self.title, self.date)
        }
    }
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Extract candidate ids from a search response (`objectIDs` may be null or missing)
pub fn parse_object_ids(json: &Value) -> Vec<ObjectId> {
    json["objectIDs"]
        .as_array()
        .map(|ids| ids.iter().filter_map(Value::as_u64).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let json = json!({
            "objectID": 45734,
            "title": "Quail and Millet",
            "artistDisplayName": "Kiyohara Yukinobu",
            "objectDate": "late 17th century",
            "primaryImageSmall": "https://images.metmuseum.org/CRDImages/as/web-large/DP251139.jpg"
        });
        let record = DetailRecord::from_json(1, &json).unwrap();
        assert_eq!(record.id, 45734);
        assert_eq!(record.title, "Quail and Millet");
        assert_eq!(record.artist, "Kiyohara Yukinobu");
        assert_eq!(record.date, "late 17th century");
        assert_eq!(record.caption(), "Quail and Millet, late 17th century");
    }

    #[test]
    fn test_defaults() {
        let json = json!({
            "title": "",
            "artistDisplayName": "   ",
            "primaryImageSmall": "https://example.org/a.jpg"
        });
        let record = DetailRecord::from_json(12, &json).unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(record.title, UNTITLED);
        assert_eq!(record.artist, UNKNOWN_ARTIST);
        assert_eq!(record.date, "");
        assert_eq!(record.caption(), UNTITLED);
    }

    #[test]
    fn test_without_image_is_rejected() {
        assert!(DetailRecord::from_json(1, &json!({ "objectID": 1, "title": "x" })).is_none());
        assert!(DetailRecord::from_json(1, &json!({ "objectID": 1, "primaryImageSmall": "" })).is_none());
        assert!(DetailRecord::from_json(1, &json!({ "objectID": 1, "primaryImageSmall": " " })).is_none());
        assert!(DetailRecord::from_json(1, &json!({ "message": "Not a valid object" })).is_none());
        assert!(DetailRecord::from_json(1, &json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_parse_object_ids() {
        assert_eq!(parse_object_ids(&json!({ "total": 3, "objectIDs": [3, 1, 2] })), vec![3, 1, 2]);
        assert!(parse_object_ids(&json!({ "total": 0, "objectIDs": null })).is_empty());
        assert!(parse_object_ids(&json!({})).is_empty());
    }
}
