use super::parse::{DELIMITER, parse_value};
use super::{Frontmatter, FrontmatterValue};

/// Characters that always force a value to be quoted.
const SPECIAL: [char; 6] = [':', '\n', '"', '[', ']', ','];

/// Renders a record as a complete `---` delimited header, trailing newline included.
///
/// Empty strings are omitted. Everything else is emitted so that
/// [`super::parse`] returns an identical record.
pub fn serialize(frontmatter: &Frontmatter) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (key, value) in frontmatter.iter() {
        let Some(rendered) = render_value(value) else {
            continue;
        };
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&rendered);
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out
}

/// Prepends the serialised header to `body`.
pub fn serialize_document(frontmatter: &Frontmatter, body: &str) -> String {
    let mut out = serialize(frontmatter);
    out.push_str(body);
    out
}

fn render_value(value: &FrontmatterValue) -> Option<String> {
    match value {
        FrontmatterValue::String(s) if s.is_empty() => None,
        FrontmatterValue::String(s) => Some(render_string(s)),
        FrontmatterValue::Bool(b) => Some(b.to_string()),
        FrontmatterValue::Number(n) => Some(render_number(*n)),
        FrontmatterValue::List(items) => {
            let rendered: Vec<String> = items.iter().map(|item| render_item(item)).collect();
            Some(format!("[{}]", rendered.join(", ")))
        }
    }
}

fn render_string(s: &str) -> String {
    let ambiguous = !matches!(parse_value(s), FrontmatterValue::String(ref parsed) if parsed == s);
    if ambiguous || s.contains(SPECIAL) || s.trim() != s {
        quote(s)
    } else {
        s.to_string()
    }
}

fn render_item(item: &str) -> String {
    if item.is_empty() || item.contains(SPECIAL) || item.contains('\'') || item.trim() != item {
        quote(item)
    } else {
        item.to_string()
    }
}

fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn round_trip(fm: &Frontmatter) -> Frontmatter {
        parse(&serialize(fm)).frontmatter
    }

    #[test]
    fn quotes_values_with_colons_and_quotes() {
        let fm = Frontmatter::new().with("meta_description", "A: \"B\"");
        let text = serialize(&fm);

        assert!(text.contains(r#""A: \"B\"""#), "got {text}");
        assert_eq!(round_trip(&fm), fm);
    }

    #[test]
    fn multiline_strings_and_tricky_arrays_round_trip() {
        let fm = Frontmatter::new()
            .with("summary", "Line1\nLine2")
            .with("secondary_keywords", vec!["alpha", "two, three", "x:y"]);

        assert_eq!(round_trip(&fm), fm);
    }

    #[test]
    fn scalar_values_render_bare() {
        let fm = Frontmatter::new()
            .with("title", "Hello")
            .with("draft", true)
            .with("order", 3.0)
            .with("weight", 1.5);

        assert_eq!(
            serialize(&fm),
            "---\ntitle: Hello\ndraft: true\norder: 3\nweight: 1.5\n---\n"
        );
    }

    #[test]
    fn empty_strings_are_omitted() {
        let fm = Frontmatter::new().with("title", "T").with("excerpt", "");
        assert_eq!(serialize(&fm), "---\ntitle: T\n---\n");
    }

    #[rstest]
    #[case("true")]
    #[case("42")]
    #[case("-1.25")]
    #[case("  padded  ")]
    #[case("'looks quoted'")]
    #[case("[not a list]")]
    #[case("back\\slash")]
    #[case("it's fine")]
    fn ambiguous_strings_round_trip(#[case] value: &str) {
        let fm = Frontmatter::new().with("key", value);
        assert_eq!(round_trip(&fm), fm);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["it's", "plain"])]
    #[case(vec!["", " x "])]
    #[case(vec!["say \"hi\"", "a\\b"])]
    fn list_items_round_trip(#[case] items: Vec<&str>) {
        let fm = Frontmatter::new().with("tags", items);
        assert_eq!(round_trip(&fm), fm);
    }

    #[test]
    fn serialize_document_prepends_header() {
        let fm = Frontmatter::new().with("title", "T");
        let doc = serialize_document(&fm, "# Body\n");
        let parsed = parse(&doc);

        assert_eq!(parsed.frontmatter, fm);
        assert_eq!(parsed.body, "# Body\n");
    }
}
