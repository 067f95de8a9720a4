//! Plain-text line rendering of an element tree.
//!
//! Column containers stack their children vertically, row containers join
//! their children on a single line separated by one space. Height limits clip
//! the output, and `Overflow::Scroll` elements skip their scroll offset first.

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::{Direction, Overflow, Style};

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// A run of text sharing one style and click target.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    /// Id of the clickable element this span belongs to.
    pub target: Option<String>,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }
}

pub fn render_lines(elements: &[Element]) -> Vec<Line> {
    let root = Style::default();
    elements
        .iter()
        .flat_map(|el| render_element(el, &root))
        .collect()
}

/// Number of lines an element's content occupies before clipping.
pub fn content_height(element: &Element) -> usize {
    unclipped_lines(element, &Style::default()).len()
}

fn render_element(element: &Element, parent: &Style) -> Vec<Line> {
    let lines = unclipped_lines(element, parent);

    let Some(height) = element.max_height else {
        return lines;
    };

    let skip = match element.overflow_y {
        Overflow::Scroll => element.scroll_offset.1 as usize,
        Overflow::Visible | Overflow::Hidden => 0,
    };
    lines.into_iter().skip(skip).take(height as usize).collect()
}

fn unclipped_lines(element: &Element, parent: &Style) -> Vec<Line> {
    let style = element.style.inherit(parent);

    match &element.content {
        Content::None => Vec::new(),
        Content::Text(text) => vec![Line {
            spans: vec![Span {
                text: text.clone(),
                target: element.clickable.then(|| element.id.clone()),
                style,
            }],
        }],
        Content::Children(children) => match element.direction {
            Direction::Column => children
                .iter()
                .flat_map(|child| render_element(child, &style))
                .collect(),
            Direction::Row => {
                let mut line = Line::default();
                for child in children {
                    for child_line in render_element(child, &style) {
                        if !line.spans.is_empty() {
                            line.spans.push(Span::raw(" "));
                        }
                        line.spans.extend(child_line.spans);
                    }
                }
                if line.spans.is_empty() {
                    Vec::new()
                } else {
                    vec![line]
                }
            }
        },
    }
}
