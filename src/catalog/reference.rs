use json::JsonValue;

use super::Service;
use crate::iam::{ActionDef, ResourceType};

/*
Documents follow the shape of the AWS service reference files:
{
    "Name": "lambda",
    "ApiReference": "https://docs.aws.amazon.com/lambda/latest/api/",
    "Actions": [{"Name": "InvokeFunction", "Resources": [{"Name": "function"}], ...}],
    "Resources": [{"Name": "function", "ARNFormats": ["arn:${Partition}:lambda:..."]}],
    "ConditionKeys": [...]
}
 */

fn strings(values: &[&str]) -> JsonValue {
    JsonValue::Array(values.iter().map(|value| JsonValue::from(*value)).collect())
}

fn action_json(action: &ActionDef) -> JsonValue {
    let mut value = JsonValue::new_object();
    value["Name"] = action.name.into();
    value["AccessLevel"] = action.access_level.as_str().into();
    value["Documentation"] = action.docs.into();
    value["ActionConditionKeys"] = strings(action.condition_keys);
    value["Resources"] = JsonValue::Array(action.resource_types.iter().map(|resource_type| {
        let mut resource = JsonValue::new_object();
        resource["Name"] = resource_type.name.into();
        resource
    }).collect());
    value
}

fn resource_json(resource_type: &ResourceType) -> JsonValue {
    let mut value = JsonValue::new_object();
    value["Name"] = resource_type.name.into();
    value["Key"] = resource_type.key().into();
    value["ARNFormats"] = strings(&[resource_type.arn]);
    value["ConditionKeys"] = strings(resource_type.condition_keys);
    value
}

impl Service {
    pub fn to_json(&self) -> JsonValue {
        let mut value = JsonValue::new_object();
        value["Name"] = self.prefix.into();
        value["DisplayName"] = self.name.into();
        value["ApiReference"] = self.api_reference.into();
        value["Actions"] = JsonValue::Array(self.actions.iter().map(action_json).collect());
        value["Resources"] = JsonValue::Array(self.resource_types.iter().map(|resource_type| resource_json(resource_type)).collect());
        value["ConditionKeys"] = strings(self.condition_keys);
        value
    }
}

#[cfg(test)]
mod test {
    use crate::services::sqs;

    #[test]
    fn service_document() {
        let doc = sqs::SERVICE.to_json();
        assert_eq!(doc["Name"].as_str(), Some("sqs"));
        assert_eq!(
            doc["ApiReference"].as_str(),
            Some("https://docs.aws.amazon.com/AWSSimpleQueueService/latest/APIReference/"),
        );
        assert_eq!(doc["Resources"].len(), 1);
        assert_eq!(doc["Resources"][0]["Name"].as_str(), Some("queue"));
        assert_eq!(doc["Resources"][0]["ARNFormats"][0].as_str(), Some("arn:${Partition}:sqs:${Region}:${Account}:${QueueName}"));

        let send = doc["Actions"].members()
            .find(|action| action["Name"] == "SendMessage")
            .expect("SendMessage should be exported");
        assert_eq!(send["AccessLevel"].as_str(), Some("Write"));
        assert_eq!(send["Resources"][0]["Name"].as_str(), Some("queue"));
        assert_eq!(
            send["Documentation"].as_str(),
            Some("https://docs.aws.amazon.com/AWSSimpleQueueService/latest/APIReference/API_SendMessage.html"),
        );
    }

    #[test]
    fn document_survives_serialization() {
        let doc = sqs::SERVICE.to_json();
        let parsed = json::parse(&doc.dump()).expect("exported JSON should parse");
        assert_eq!(parsed, doc);
    }

    #[test]
    fn catalog_document_lists_every_service() {
        let doc = crate::catalog::to_json();
        assert_eq!(doc.len(), crate::catalog::services().len());
        assert!(doc.members().any(|service| service["Name"] == "s3-object-lambda"));
    }
}
