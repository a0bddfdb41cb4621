use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArnParseError {
    #[error("expected six colon-separated parts")]
    InvalidFormat,
    #[error("missing \"arn:\" prefix")]
    MissingPrefix,
}

/// A parsed ARN, `arn:partition:service:region:account:resource`.
///
/// The resource part may itself contain colons; only the first five
/// separators are significant.
#[derive(Clone)]
pub struct Arn {
    value: String,
    separators: [usize; 5],
}

impl Arn {
    pub fn new(partition: &str, service: &str, region: &str, account: &str, resource: &str) -> Self {
        let sep0 = 3;
        let sep1 = sep0 + 1 + partition.len();
        let sep2 = sep1 + 1 + service.len();
        let sep3 = sep2 + 1 + region.len();
        let sep4 = sep3 + 1 + account.len();
        let mut value = String::with_capacity(sep4 + 1 + resource.len());
        for part in ["arn", partition, service, region, account] {
            value.push_str(part);
            value.push(':');
        }
        value.push_str(resource);
        Arn { value, separators: [sep0, sep1, sep2, sep3, sep4] }
    }

    pub fn partition(&self) -> &str {
        &self.value[self.separators[0] + 1 .. self.separators[1]]
    }

    pub fn service(&self) -> &str {
        &self.value[self.separators[1] + 1 .. self.separators[2]]
    }

    pub fn region(&self) -> &str {
        &self.value[self.separators[2] + 1 .. self.separators[3]]
    }

    pub fn account(&self) -> &str {
        &self.value[self.separators[3] + 1 .. self.separators[4]]
    }

    pub fn resource(&self) -> &str {
        &self.value[self.separators[4] + 1 ..]
    }

    pub fn raw(&self) -> &str {
        &self.value
    }
}

impl PartialEq for Arn {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Arn {}

impl std::hash::Hash for Arn {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl std::fmt::Debug for Arn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::fmt::Display for Arn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Arn {
    type Err = ArnParseError;

    // Rendered ARNs substitute "*" rather than variables, so colons inside
    // the partition, service, region or account are never expected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !value.starts_with("arn:") {
            return Err(ArnParseError::MissingPrefix);
        }
        let mut separators = [0; 5];
        let mut found = 0;
        for (i, _) in value.char_indices().filter(|&(_, c)| c == ':').take(5) {
            separators[found] = i;
            found += 1;
        }
        if found < 5 {
            return Err(ArnParseError::InvalidFormat);
        }
        Ok(Arn { value: value.into(), separators })
    }
}

impl TryFrom<&str> for Arn {
    type Error = ArnParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod test {
    use super::{Arn, ArnParseError};

    #[test]
    fn parse_fully_specified() {
        let result: Arn = "arn:aws:lambda:us-east-1:123456789012:function:my-function"
            .parse().expect("The input should have parsed successfully");
        assert_eq!(result.partition(), "aws");
        assert_eq!(result.service(), "lambda");
        assert_eq!(result.region(), "us-east-1");
        assert_eq!(result.account(), "123456789012");
        assert_eq!(result.resource(), "function:my-function");
    }

    #[test]
    fn parse_empty_portions() {
        let result: Arn = "arn:aws:sqs:::queue"
            .parse().expect("The input should have parsed successfully");
        assert_eq!(result.service(), "sqs");
        assert!(result.region().is_empty());
        assert!(result.account().is_empty());
        assert_eq!(result.resource(), "queue");
    }

    #[test]
    fn parse_wildcards() {
        let result: Arn = "arn:*:lambda:*:*:function:*"
            .parse().expect("The input should have parsed successfully");
        assert_eq!(result.partition(), "*");
        assert_eq!(result.region(), "*");
        assert_eq!(result.account(), "*");
        assert_eq!(result.resource(), "function:*");
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        assert_eq!("aws:lambda:::function".parse::<Arn>(), Err(ArnParseError::MissingPrefix));
    }

    #[test]
    fn parse_rejects_short_input() {
        assert_eq!("arn:aws:lambda:us-east-1".parse::<Arn>(), Err(ArnParseError::InvalidFormat));
    }

    #[test]
    fn new_matches_parse() {
        let built = Arn::new("aws-cn", "logs", "cn-north-1", "123456789012", "log-group:/app:log-stream:main");
        let parsed: Arn = built.raw().parse().expect("The built ARN should parse");
        assert_eq!(built, parsed);
        assert_eq!(parsed.partition(), "aws-cn");
        assert_eq!(parsed.resource(), "log-group:/app:log-stream:main");
    }
}
