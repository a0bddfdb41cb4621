//! IAM-style wildcards: `*` matches any run of characters, `?` matches
//! exactly one. There is no escape syntax.

use regex::{escape, Regex, RegexBuilder};

fn pattern_from_glob(glob: &str) -> String {
    let mut pattern = String::from('^');
    let mut literal_start = 0;
    for (i, c) in glob.char_indices() {
        let wildcard = match c {
            '?' => ".",
            '*' => ".*",
            _ => continue,
        };
        pattern.push_str(&escape(&glob[literal_start..i]));
        pattern.push_str(wildcard);
        literal_start = i + c.len_utf8();
    }
    pattern.push_str(&escape(&glob[literal_start..]));
    pattern.push('$');
    pattern
}

pub fn try_regex_from_glob(glob: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&pattern_from_glob(glob))
        .case_insensitive(ignore_case)
        .build()
}

fn is_literal(glob: &str) -> bool {
    !glob.contains(['?', '*'])
}

pub fn glob_matches(glob: &str, target: &str, ignore_case: bool) -> bool {
    if is_literal(glob) {
        return if ignore_case { glob.eq_ignore_ascii_case(target) } else { glob == target };
    }
    match try_regex_from_glob(glob, ignore_case) {
        Ok(re) => re.is_match(target),
        Err(err) => {
            log::debug!("Glob {:?} did not compile: {}", glob, err);
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::{glob_matches, pattern_from_glob};

    #[test]
    fn literal_pattern() {
        assert_eq!(pattern_from_glob(""), "^$");
        assert_eq!(pattern_from_glob("GetFunction"), "^GetFunction$");
        assert_eq!(pattern_from_glob("a.b"), r"^a\.b$");
    }

    #[test]
    fn single_wildcard_pattern() {
        assert_eq!(pattern_from_glob("?"), "^.$");
        assert_eq!(pattern_from_glob("a?c"), "^a.c$");
    }

    #[test]
    fn multi_wildcard_pattern() {
        assert_eq!(pattern_from_glob("*"), "^.*$");
        assert_eq!(pattern_from_glob("Get*"), "^Get.*$");
        assert_eq!(pattern_from_glob("*Tag*"), "^.*Tag.*$");
    }

    #[test]
    fn literal_match() {
        assert!(glob_matches("", "", false));
        assert!(glob_matches("Invoke", "Invoke", false));
        assert!(! glob_matches("Invoke", "invoke", false));
        assert!(glob_matches("Invoke", "invoke", true));
        assert!(! glob_matches("Invoke", "InvokeFunction", false));
    }

    #[test]
    fn wildcard_match() {
        assert!(glob_matches("Get*", "Get", false));
        assert!(glob_matches("Get*", "GetFunction", false));
        assert!(! glob_matches("Get*", "ListFunctions", false));
        assert!(glob_matches("get*", "GetFunction", true));
        assert!(glob_matches("a?c", "abc", false));
        assert!(! glob_matches("a?c", "ac", false));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(glob_matches("loadbalancer/app/*", "loadbalancer/app/my-lb/50dc6c495c0c9188", false));
        assert!(! glob_matches("a.c*", "abc", false));
    }
}
