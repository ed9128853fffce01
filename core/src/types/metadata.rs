use serde::{Deserialize, Serialize};

/// A metadata-service property: one key with any number of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataProperty {
    pub key: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl MetadataProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: vec![value.into()],
        }
    }

    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_accumulate_in_order() {
        let mut property = MetadataProperty::new("mysql.host", "10.0.0.5");
        property.add_value("10.0.0.6");
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["key"], "mysql.host");
        assert_eq!(json["values"], serde_json::json!(["10.0.0.5", "10.0.0.6"]));
    }
}
