//! `%{name}` string variables.

use std::collections::BTreeMap;

/// Variable values keyed by their bracketed name, e.g. `%{date}`.
pub type Variables = BTreeMap<String, String>;

pub const PAGE_NUMBER: &str = "%{pagenumber}";
pub const TOTAL_PAGES: &str = "%{totalpages}";
pub const DATE: &str = "%{date}";
pub const RESOURCE_PATH: &str = "%{resourcepath}";

/// `name` → `%{name}`.
pub fn bracket(name: &str) -> String {
    format!("%{{{name}}}")
}

/// Replace every `%{name}` occurrence that has a value in `variables`.
///
/// Single pass: values are not scanned again, and unknown names stay as written.
pub fn substitute(text: &str, variables: &Variables) -> String {
    if variables.is_empty() || !text.contains("%{") {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match candidate.find('}') {
            Some(end) => {
                // The innermost `%{` before the brace opens the name.
                let open = candidate[..end].rfind("%{").unwrap_or(0);
                out.push_str(&candidate[..open]);
                let key = &candidate[open..=end];
                match variables.get(key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(key),
                }
                rest = &candidate[end + 1..];
            }
            None => {
                out.push_str(candidate);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Variables {
        pairs.iter().map(|(k, v)| (bracket(k), v.to_string())).collect()
    }

    #[test]
    fn test_bracket() {
        assert_eq!(bracket("date"), DATE);
    }

    #[test]
    fn test_substitute() {
        let variables = vars(&[("pagenumber", "3"), ("name", "%{pagenumber}")]);
        assert_eq!(substitute("Page %{pagenumber}!", &variables), "Page 3!");
        assert_eq!(substitute("%{name}", &variables), "%{pagenumber}");
        assert_eq!(substitute("%{unknown} and %{pagenumber", &variables), "%{unknown} and %{pagenumber");
        assert_eq!(substitute("no vars", &variables), "no vars");
    }

    #[test]
    fn test_substitute_unterminated_opener_before_name() {
        let variables = vars(&[("b", "B")]);
        assert_eq!(substitute("x %{a %{b} y", &variables), "x %{a B y");
        assert_eq!(substitute("%{%{b}}", &variables), "%{B}");
    }
}
