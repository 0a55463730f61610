use super::kinds::{
    BlockQuote, CodeFence, Directive, Heading, HorizontalRule, ImageLine, footnote, list, table,
};

/// What a single line could open, judged without looking at its neighbours.
///
/// This is phase 1 of block parsing. Variants are checked in precedence order
/// (the order they are declared), so a `> CTA:` line is a `Directive`, never a
/// `Quote`, and `###` is a level-3 heading, never level 1. Definition lists
/// need the following line and are resolved by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    FootnoteDefinition,
    Fence,
    Directive(Directive),
    Image,
    Heading,
    ListItem,
    Rule,
    TableRow,
    Quote,
    Text,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier {
    /// Inside a blockquote: footnote definitions are plain text there.
    pub nested: bool,
    /// At the nesting cap: further `>` lines are plain text.
    pub quote_limit_reached: bool,
}

impl MarkdownLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        if line.trim().is_empty() {
            LineClass::Blank
        } else if !self.nested && footnote::is_definition(line) {
            LineClass::FootnoteDefinition
        } else if CodeFence::is_fence(line) {
            LineClass::Fence
        } else if let Some((directive, _)) = Directive::parse(line) {
            LineClass::Directive(directive)
        } else if ImageLine::parse(line).is_some() {
            LineClass::Image
        } else if Heading::parse(line).is_some() {
            LineClass::Heading
        } else if list::is_list_line(line) {
            LineClass::ListItem
        } else if HorizontalRule::matches(line) {
            LineClass::Rule
        } else if table::is_table_line(line) {
            LineClass::TableRow
        } else if BlockQuote::is_quote(line) && !self.quote_limit_reached {
            LineClass::Quote
        } else {
            LineClass::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("   ", LineClass::Blank)]
    #[case("[^1]: note", LineClass::FootnoteDefinition)]
    #[case("```rust", LineClass::Fence)]
    #[case("> BREAKOUT: wow", LineClass::Directive(Directive::Breakout))]
    #[case("> CTA: Buy", LineClass::Directive(Directive::Cta))]
    #[case("![x](/x.png)", LineClass::Image)]
    #[case("## Title", LineClass::Heading)]
    #[case("- item", LineClass::ListItem)]
    #[case("1. item", LineClass::ListItem)]
    #[case("***", LineClass::Rule)]
    #[case("| a | b |", LineClass::TableRow)]
    #[case("> quoted", LineClass::Quote)]
    #[case("just words", LineClass::Text)]
    #[case("#hashtag", LineClass::Text)]
    fn classifies_top_level_lines(#[case] line: &str, #[case] expected: LineClass) {
        assert_eq!(MarkdownLineClassifier::default().classify(line), expected);
    }

    #[test]
    fn nested_classifier_treats_footnotes_as_text() {
        let classifier = MarkdownLineClassifier {
            nested: true,
            ..Default::default()
        };
        assert_eq!(classifier.classify("[^1]: note"), LineClass::Text);
    }

    #[test]
    fn quote_limit_turns_quotes_into_text() {
        let classifier = MarkdownLineClassifier {
            nested: true,
            quote_limit_reached: true,
        };
        assert_eq!(classifier.classify("> deeper"), LineClass::Text);
    }
}
