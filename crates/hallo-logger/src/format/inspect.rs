use super::colors::Colorizer;
use colored::Color;
use serde_json::{Map, Value};

/// Containers nested deeper than this are collapsed to a placeholder
pub const DEFAULT_DEPTH: usize = 8;
/// Single-line renderings wider than this are broken across lines
pub const DEFAULT_BREAK_WIDTH: usize = 72;

const INDENT_STEP: usize = 2;

/// Human-readable dump of a structured value.
///
/// `serde_json::Value` is an owned tree, so there are no cycles to guard
/// against; the depth cap keeps the output of large values bounded.
#[derive(Debug, Clone, Copy)]
pub struct Inspector {
    depth: usize,
    break_width: usize,
    colors: Colorizer,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(Colorizer::default())
    }
}

/// A rendered fragment together with its visible width
struct Rendered {
    text: String,
    width: usize,
    multiline: bool,
}

impl Rendered {
    fn single(text: String, width: usize) -> Self {
        Self {
            text,
            width,
            multiline: false,
        }
    }
}

impl Inspector {
    pub fn new(colors: Colorizer) -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            break_width: DEFAULT_BREAK_WIDTH,
            colors,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_break_width(mut self, break_width: usize) -> Self {
        self.break_width = break_width;
        self
    }

    pub fn with_colors(mut self, colors: Colorizer) -> Self {
        self.colors = colors;
        self
    }

    /// Renders `value`; nested lines are indented relative to column 0
    pub fn inspect(&self, value: &Value) -> String {
        self.render(value, 0, 0).text
    }

    fn render(&self, value: &Value, level: usize, indent: usize) -> Rendered {
        match value {
            Value::Null => Rendered::single(self.colors.bold("null"), 4),
            Value::Bool(flag) => self.scalar(&flag.to_string(), Color::Yellow),
            Value::Number(number) => self.scalar(&number.to_string(), Color::Yellow),
            Value::String(text) => {
                let quoted = quote(text);
                let width = quoted.chars().count();
                Rendered::single(self.colors.paint(&quoted, Color::Green), width)
            }
            Value::Array(items) => self.render_array(items, level, indent),
            Value::Object(fields) => self.render_object(fields, level, indent),
        }
    }

    fn scalar(&self, text: &str, color: Color) -> Rendered {
        Rendered::single(self.colors.paint(text, color), text.chars().count())
    }

    fn placeholder(&self, name: &str) -> Rendered {
        let text = format!("[{}]", name);
        let width = text.chars().count();
        Rendered::single(self.colors.paint(&text, Color::Cyan), width)
    }

    fn render_array(&self, items: &[Value], level: usize, indent: usize) -> Rendered {
        if items.is_empty() {
            return Rendered::single("[]".to_string(), 2);
        }
        if level > self.depth {
            return self.placeholder("Array");
        }

        let entries = items
            .iter()
            .map(|item| self.render(item, level + 1, indent + INDENT_STEP))
            .collect();
        self.join(entries, ('[', ']'), indent)
    }

    fn render_object(&self, fields: &Map<String, Value>, level: usize, indent: usize) -> Rendered {
        if fields.is_empty() {
            return Rendered::single("{}".to_string(), 2);
        }
        if level > self.depth {
            return self.placeholder("Object");
        }

        let entries = fields
            .iter()
            .map(|(key, value)| {
                let key = render_key(key);
                let value = self.render(value, level + 1, indent + INDENT_STEP);
                Rendered {
                    width: key.chars().count() + 2 + value.width,
                    text: format!("{}: {}", key, value.text),
                    multiline: value.multiline,
                }
            })
            .collect();
        self.join(entries, ('{', '}'), indent)
    }

    fn join(&self, entries: Vec<Rendered>, (open, close): (char, char), indent: usize) -> Rendered {
        // "{ " + entries joined by ", " + " }"
        let inline_width =
            entries.iter().map(|entry| entry.width).sum::<usize>() + 2 * (entries.len() - 1) + 4;
        let needs_break = entries.iter().any(|entry| entry.multiline)
            || indent + inline_width > self.break_width;

        if !needs_break {
            let body = entries
                .into_iter()
                .map(|entry| entry.text)
                .collect::<Vec<_>>()
                .join(", ");
            return Rendered::single(format!("{} {} {}", open, body, close), inline_width);
        }

        let inner_pad = " ".repeat(indent + INDENT_STEP);
        let body = entries
            .into_iter()
            .map(|entry| format!("{}{}", inner_pad, entry.text))
            .collect::<Vec<_>>()
            .join(",\n");
        Rendered {
            text: format!("{}\n{}\n{}{}", open, body, " ".repeat(indent), close),
            width: inline_width,
            multiline: true,
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn render_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> Inspector {
        Inspector::new(Colorizer::plain())
    }

    #[test]
    fn test_short_object_stays_on_one_line() {
        let value = json!({ "name": "api", "port": 8080, "tls": false, "root": null });
        assert_eq!(
            plain().inspect(&value),
            "{ name: 'api', port: 8080, tls: false, root: null }"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(plain().inspect(&json!({})), "{}");
        assert_eq!(plain().inspect(&json!([])), "[]");
        assert_eq!(plain().inspect(&json!({ "list": [] })), "{ list: [] }");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let value = json!({ "content-type": "json", "it's": 1 });
        assert_eq!(
            plain().inspect(&value),
            "{ 'content-type': 'json', 'it\\'s': 1 }"
        );
    }

    #[test]
    fn test_default_depth_keeps_deep_values() {
        let value = json!({ "a": { "b": { "c": { "d": { "e": 1 } } } } });
        assert_eq!(
            plain().inspect(&value),
            "{ a: { b: { c: { d: { e: 1 } } } } }"
        );
    }

    #[test]
    fn test_depth_cap_collapses_nested_containers() {
        let value = json!({ "a": { "b": { "c": { "d": 1 } } }, "list": [[[[1]]]] });
        assert_eq!(
            plain().with_depth(2).inspect(&value),
            "{ a: { b: { c: [Object] } }, list: [ [ [Array] ] ] }"
        );
    }

    #[test]
    fn test_custom_depth() {
        let value = json!({ "a": { "b": 1 } });
        assert_eq!(plain().with_depth(0).inspect(&value), "{ a: [Object] }");
    }

    #[test]
    fn test_wide_object_breaks_across_lines() {
        let value = json!({
            "service": "billing",
            "endpoint": "https://billing.internal.example.com/v1/invoices",
            "nested": { "retries": 3 }
        });
        let expected = "{\n  service: 'billing',\n  endpoint: 'https://billing.internal.example.com/v1/invoices',\n  nested: { retries: 3 }\n}";
        assert_eq!(plain().inspect(&value), expected);
    }

    #[test]
    fn test_multiline_child_indents_relative_to_parent() {
        let value = json!({ "outer": { "a": "x", "b": "y" } });
        let rendered = plain().with_break_width(10).inspect(&value);
        assert_eq!(rendered, "{\n  outer: {\n    a: 'x',\n    b: 'y'\n  }\n}");
    }

    #[test]
    fn test_colors_wrap_scalars() {
        colored::control::set_override(true);
        let rendered = Inspector::new(Colorizer::new(true)).inspect(&json!({ "n": 1 }));
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("n: "));
    }
}
