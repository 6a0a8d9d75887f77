//! User record shape as the backend serializes it. All display fields are
//! opaque strings; only the identifier has client-side meaning (list key and
//! deletion target).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::UserRecord;

    #[test]
    fn decodes_backend_field_names() {
        let record: UserRecord = serde_json::from_str(
            r#"{
                "_id": "u1",
                "Name": "Ada",
                "email": "ada@example.com",
                "address": "1 Analytical Way",
                "phone": "555-0100",
                "role": "admin",
                "image": "https://cdn.example.com/u1.png"
            }"#,
        )
        .expect("record should decode");

        assert_eq!(record.id, "u1");
        assert_eq!(record.name, "Ada");
        assert_eq!(record.role, "admin");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record: UserRecord =
            serde_json::from_str(r#"{"email": "ada@example.com"}"#).expect("record should decode");
        assert!(record.id.is_empty());
        assert!(record.name.is_empty());
        assert_eq!(record.email, "ada@example.com");
    }
}
