use std::collections::BTreeMap;

use convert_case::{Case, Casing};

/// What every unspecified ARN field renders as.
pub const WILDCARD: &str = "*";

const PARTITION: &str = "partition";
const REGION: &str = "region";
const ACCOUNT: &str = "account";

/// Canonical key of an ARN template field: `FunctionName`, `function_name`
/// and `functionName` all become `functionName`.
pub fn field_key(name: &str) -> String {
    name.to_case(Case::Camel)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// The fields of an ARN a caller wants to pin down. Everything is optional;
/// an empty string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArnOptions {
    pub partition: Option<String>,
    pub region: Option<String>,
    pub account: Option<String>,
    fields: BTreeMap<String, String>,
}

impl ArnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets a resource-specific field such as `functionName`. The common
    /// fields are accepted here too.
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field_key(name).as_str() {
            PARTITION => self.partition = value,
            REGION => self.region = value,
            ACCOUNT => self.account = value,
            _ => {
                if let Some(value) = value {
                    self.fields.insert(field_key(name), value);
                }
            }
        }
        self
    }

    /// The value supplied for `name`, or `None` when it is missing or empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = field_key(name);
        let value = match key.as_str() {
            PARTITION => self.partition.as_deref(),
            REGION => self.region.as_deref(),
            ACCOUNT => self.account.as_deref(),
            other => self.fields.get(other).map(String::as_str),
        };
        non_empty(value)
    }

    /// The value to render for `name`.
    pub fn value_or_wildcard(&self, name: &str) -> &str {
        self.get(name).unwrap_or(WILDCARD)
    }

    /// Keys of the resource-specific fields that were set.
    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Layers `defaults` underneath these options. A value set here wins
    /// unless it is empty.
    pub fn merge(&self, defaults: &ArnOptions) -> ArnOptions {
        let pick = |mine: &Option<String>, theirs: &Option<String>| {
            non_empty(mine.as_deref())
                .or(non_empty(theirs.as_deref()))
                .map(String::from)
        };
        let mut fields = defaults.fields.clone();
        for (key, value) in &self.fields {
            if !value.is_empty() {
                fields.insert(key.clone(), value.clone());
            }
        }
        ArnOptions {
            partition: pick(&self.partition, &defaults.partition),
            region: pick(&self.region, &defaults.region),
            account: pick(&self.account, &defaults.account),
            fields,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{field_key, ArnOptions};

    #[test]
    fn field_keys_are_camel_case() {
        assert_eq!(field_key("FunctionName"), "functionName");
        assert_eq!(field_key("function_name"), "functionName");
        assert_eq!(field_key("functionName"), "functionName");
        assert_eq!(field_key("Partition"), "partition");
    }

    #[test]
    fn common_fields_through_field() {
        let options = ArnOptions::new().field("Region", "eu-west-1").field("account", "111122223333");
        assert_eq!(options.region.as_deref(), Some("eu-west-1"));
        assert_eq!(options.get("Account"), Some("111122223333"));
        assert_eq!(options.field_keys().count(), 0);
    }

    #[test]
    fn empty_values_are_absent() {
        let options = ArnOptions::new().region("").field("queueName", "");
        assert_eq!(options.get("region"), None);
        assert_eq!(options.get("queueName"), None);
        assert_eq!(options.value_or_wildcard("queueName"), "*");
    }

    #[test]
    fn lookup_ignores_casing() {
        let options = ArnOptions::new().field("TableName", "Books");
        assert_eq!(options.get("tableName"), Some("Books"));
        assert_eq!(options.get("table_name"), Some("Books"));
    }

    #[test]
    fn merge_prefers_explicit_values() {
        let defaults = ArnOptions::new()
            .partition("aws-cn")
            .account("111122223333")
            .field("tableName", "Default");
        let options = ArnOptions::new().account("").region("cn-north-1").field("tableName", "Books");
        let merged = options.merge(&defaults);
        assert_eq!(merged.get("partition"), Some("aws-cn"));
        assert_eq!(merged.get("account"), Some("111122223333"));
        assert_eq!(merged.get("region"), Some("cn-north-1"));
        assert_eq!(merged.get("tableName"), Some("Books"));
    }
}
