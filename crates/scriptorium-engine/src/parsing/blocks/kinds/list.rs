//! List item recognition and nesting.
//!
//! Items are gathered flat as [`ListLine`]s and then folded into a tree with
//! an explicit stack of `(indent, siblings)` frames, so nesting depth never
//! turns into call-stack depth.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::{List, ListItem, ListMarker, TaskState};
use crate::parsing::inline::Inline;

static LIST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)([-*]|\d+\.)[ \t]+(.*)$").expect("list pattern is valid")
});

/// Columns a tab counts for when measuring indentation.
pub const TAB_WIDTH: usize = 2;

/// One recognised list line before nesting is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub indent: usize,
    pub marker: ListMarker,
    pub task: Option<TaskState>,
    pub text: &'a str,
}

impl<'a> ListLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = LIST_LINE.captures(line)?;
        let indent = indent_width(caps.get(1)?.as_str());
        let marker = match caps.get(2)?.as_str() {
            "-" | "*" => ListMarker::Bullet,
            numbered => ListMarker::Ordered(numbered.trim_end_matches('.').parse().unwrap_or(1)),
        };
        let (task, text) = split_task(caps.get(3)?.as_str());
        Some(Self {
            indent,
            marker,
            task,
            text: text.trim_end(),
        })
    }
}

pub fn is_list_line(line: &str) -> bool {
    LIST_LINE.is_match(line)
}

/// Indentation in columns, tabs counting as [`TAB_WIDTH`].
pub fn indent_width(prefix: &str) -> usize {
    prefix
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

fn split_task(text: &str) -> (Option<TaskState>, &str) {
    let checked = if text.starts_with("[ ]") {
        false
    } else if text.starts_with("[x]") || text.starts_with("[X]") {
        true
    } else {
        return (None, text);
    };
    let rest = &text[3..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return (None, text);
    }
    (Some(TaskState { checked }), rest.trim_start())
}

struct Frame {
    indent: usize,
    items: Vec<ListItem>,
}

/// Folds a run of list lines into a nested [`List`].
///
/// A line indented deeper than the current frame becomes a child of that
/// frame's last item. A shallower line closes frames until one at or above
/// its indentation is on top.
pub fn build_list<'a>(
    lines: &[ListLine<'a>],
    mut content: impl FnMut(&'a str) -> Vec<Inline>,
) -> List {
    let first = lines.first();
    let base_indent = first.map_or(0, |l| l.indent);
    let mut stack = vec![Frame {
        indent: base_indent,
        items: vec![],
    }];

    for line in lines {
        while stack.len() > 1 && stack.last().is_some_and(|top| line.indent < top.indent) {
            close_frame(&mut stack);
        }

        let item = ListItem {
            marker: line.marker,
            task: line.task,
            content: content(line.text),
            children: vec![],
        };

        let Some(top) = stack.last_mut() else {
            break;
        };
        if line.indent > top.indent && !top.items.is_empty() {
            stack.push(Frame {
                indent: line.indent,
                items: vec![item],
            });
        } else {
            top.items.push(item);
        }
    }

    while stack.len() > 1 {
        close_frame(&mut stack);
    }

    let items = stack.pop().map(|f| f.items).unwrap_or_default();
    let (ordered, start) = match first.map(|l| l.marker) {
        Some(ListMarker::Ordered(n)) => (true, Some(n)),
        _ => (false, None),
    };
    List {
        ordered,
        start,
        items,
    }
}

/// Pops the top frame and attaches its items to the parent's last item.
fn close_frame(stack: &mut Vec<Frame>) {
    let Some(frame) = stack.pop() else {
        return;
    };
    if let Some(parent) = stack.last_mut().and_then(|f| f.items.last_mut()) {
        parent.children.extend(frame.items);
    }
}
