//! Trust (organization) record shape as the backend serializes it. The
//! backend prefixes most fields with `trust`; the client normalizes them to
//! the same display names the user record uses.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "trustName", default)]
    pub name: String,
    #[serde(rename = "trustEmail", default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "trustPhoneNumber", default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::TrustRecord;

    #[test]
    fn decodes_trust_prefixed_field_names() {
        let record: TrustRecord = serde_json::from_str(
            r#"{
                "_id": "t1",
                "trustName": "Acme Relief",
                "trustEmail": "contact@acme-relief.org",
                "address": "42 Charity Road",
                "trustPhoneNumber": "555-0111",
                "role": "trust",
                "image": ""
            }"#,
        )
        .expect("record should decode");

        assert_eq!(record.id, "t1");
        assert_eq!(record.name, "Acme Relief");
        assert_eq!(record.email, "contact@acme-relief.org");
        assert_eq!(record.phone, "555-0111");
    }
}
