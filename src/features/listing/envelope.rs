//! Conventional JSON envelope for listing and search responses. The length of
//! the `data` array is the only page-boundary signal the backend provides.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RecordEnvelope<T> {
    /// Missing or null `data` is treated as an empty page.
    #[serde(default)]
    data: Option<Vec<T>>,
}

impl<T> RecordEnvelope<T> {
    pub fn into_records(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::RecordEnvelope;

    #[test]
    fn decodes_data_array() {
        let envelope: RecordEnvelope<u32> =
            serde_json::from_str(r#"{"data": [1, 2, 3]}"#).expect("envelope should decode");
        assert_eq!(envelope.into_records(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let envelope: RecordEnvelope<u32> =
            serde_json::from_str(r#"{"success": true}"#).expect("envelope should decode");
        assert!(envelope.into_records().is_empty());
    }

    #[test]
    fn null_data_defaults_to_empty() {
        let envelope: RecordEnvelope<u32> =
            serde_json::from_str(r#"{"data": null}"#).expect("envelope should decode");
        assert!(envelope.into_records().is_empty());
    }
}
