use regex::{escape, Regex};

use super::options::{field_key, ArnOptions};

// Template fields never span an ARN separator.
const FIELD_PATTERN: &str = "[^:]*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    // The placeholder name as written, e.g. "FunctionName" for ${FunctionName}
    Field(&'a str),
}

/// An ARN template in the form AWS documents them, e.g.
/// `arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArnTemplate<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> ArnTemplate<'a> {
    /// Splits `source` into literal text and `${...}` placeholders. An
    /// unterminated `${` is kept as literal text.
    pub fn parse(source: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut rest = source;
        while let Some(start) = rest.find("${") {
            let name_start = start + 2;
            let Some(len) = rest[name_start..].find('}') else {
                break;
            };
            if start > 0 {
                segments.push(Segment::Literal(&rest[..start]));
            }
            segments.push(Segment::Field(&rest[name_start..name_start + len]));
            rest = &rest[name_start + len + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }
        ArnTemplate { source, segments }
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Canonical keys of the template's fields, in template order.
    pub fn fields(&self) -> Vec<String> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(field_key(name)),
            Segment::Literal(_) => None,
        }).collect()
    }

    fn literal_len(&self) -> usize {
        self.segments.iter().map(|segment| match segment {
            Segment::Literal(text) => text.len(),
            Segment::Field(_) => 0,
        }).sum()
    }

    /// Orders templates so that the one that pins down more of an ARN
    /// compares greater.
    pub fn specificity(&self) -> (usize, usize) {
        (self.fields().len(), self.literal_len())
    }

    /// Fills in the template. Every field missing from `options`, or set to
    /// an empty string, renders as `*`.
    pub fn render(&self, options: &ArnOptions) -> String {
        let mut arn = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match *segment {
                Segment::Literal(text) => arn.push_str(text),
                Segment::Field(name) => arn.push_str(options.value_or_wildcard(name)),
            }
        }
        if log::log_enabled!(log::Level::Trace) {
            let fields = self.fields();
            for key in options.field_keys().filter(|key| !fields.iter().any(|field| field == key)) {
                log::trace!("Ignoring field {} not present in {}", key, self.source);
            }
            log::trace!("Rendered {} as {}", self.source, arn);
        }
        arn
    }

    fn pattern(&self) -> String {
        let mut pattern = String::from('^');
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => pattern.push_str(&escape(text)),
                Segment::Field(_) => pattern.push_str(FIELD_PATTERN),
            }
        }
        pattern.push('$');
        pattern
    }

    /// Whether `arn` has the shape of this template, with any field values.
    pub fn matches(&self, arn: &str) -> bool {
        match Regex::new(&self.pattern()) {
            Ok(re) => re.is_match(arn),
            Err(err) => {
                log::debug!("Template {} did not compile: {}", self.source, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ArnTemplate, Segment};
    use crate::aws::ArnOptions;

    const FUNCTION: &str = "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}";

    #[test]
    fn parse_segments() {
        let template = ArnTemplate::parse("arn:${Partition}:sqs:${Region}:${Account}:${QueueName}");
        assert_eq!(template.segments(), &[
            Segment::Literal("arn:"),
            Segment::Field("Partition"),
            Segment::Literal(":sqs:"),
            Segment::Field("Region"),
            Segment::Literal(":"),
            Segment::Field("Account"),
            Segment::Literal(":"),
            Segment::Field("QueueName"),
        ]);
    }

    #[test]
    fn parse_unterminated_placeholder() {
        let template = ArnTemplate::parse("arn:${Partition}:x:${Region");
        assert_eq!(template.segments(), &[
            Segment::Literal("arn:"),
            Segment::Field("Partition"),
            Segment::Literal(":x:${Region"),
        ]);
    }

    #[test]
    fn fields_in_template_order() {
        let template = ArnTemplate::parse(FUNCTION);
        assert_eq!(template.fields(), vec!["partition", "region", "account", "functionName"]);
    }

    #[test]
    fn render_defaults_to_wildcards() {
        let template = ArnTemplate::parse(FUNCTION);
        assert_eq!(template.render(&ArnOptions::default()), "arn:*:lambda:*:*:function:*");
    }

    #[test]
    fn render_ignores_unknown_fields() {
        let template = ArnTemplate::parse(FUNCTION);
        let options = ArnOptions::new().field("queueName", "jobs");
        assert_eq!(template.render(&options), "arn:*:lambda:*:*:function:*");
    }

    #[test]
    fn matches_concrete_arns() {
        let template = ArnTemplate::parse(FUNCTION);
        assert!(template.matches("arn:aws:lambda:us-east-1:123456789012:function:myFn"));
        assert!(template.matches("arn:*:lambda:*:*:function:*"));
        assert!(! template.matches("arn:aws:lambda:us-east-1:123456789012:function:myFn:prod"));
        assert!(! template.matches("arn:aws:lambda:us-east-1:123456789012:layer:myLayer"));
    }

    #[test]
    fn specificity_counts_fields_then_literals() {
        let function = ArnTemplate::parse(FUNCTION);
        let alias = ArnTemplate::parse("arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}:${Alias}");
        assert!(alias.specificity() > function.specificity());
    }
}
