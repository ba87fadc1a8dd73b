//! Document tree to LaTeX emitter.
//!
//! Walks the tree depth-first in document order and appends LaTeX for each
//! node to a single output buffer. Elements are dispatched through a static
//! tag table; tags missing from the table are passed through with a warning.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::ConversionConfig;
use crate::converters::text::{collapse_paragraph_breaks, push_text};
use crate::tree::{Element, Node};
use crate::types::{Conversion, Diagnostics, Warning};

/// Tag of the KaTeX math widget.
pub const MATH_WIDGET_TAG: &str = "ms-katex";

/// `encoding` of the annotation holding the TeX source.
pub const TEX_ENCODING: &str = "application/x-tex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Paragraph,
    Span,
    Math,
    LineBreak,
    OrderedList,
    ListItem,
    Division,
    Transparent,
}

static HANDLERS: Lazy<HashMap<&'static str, Handler>> = Lazy::new(|| {
    HashMap::from([
        ("p", Handler::Paragraph),
        ("span", Handler::Span),
        (MATH_WIDGET_TAG, Handler::Math),
        ("br", Handler::LineBreak),
        ("ol", Handler::OrderedList),
        ("li", Handler::ListItem),
        ("div", Handler::Division),
        ("ms-text-chunk", Handler::Transparent),
        ("ms-cmark-node", Handler::Transparent),
        ("pre", Handler::Transparent),
        ("code", Handler::Transparent),
        ("math", Handler::Transparent),
        ("semantics", Handler::Transparent),
    ])
});

/// HTML tree to LaTeX emitter
pub struct LatexEmitter<'a> {
    config: &'a ConversionConfig,
    diagnostics: Diagnostics,
}

impl<'a> LatexEmitter<'a> {
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Append the LaTeX for `node` and its subtree to `out`.
    pub fn emit(&mut self, node: &Node, out: &mut String) {
        self.emit_node(node, 0, out);
    }

    /// Append the LaTeX for an element used as the root of the walk.
    pub fn emit_element(&mut self, element: &Element, out: &mut String) {
        self.emit_element_at(element, 0, out);
    }

    /// Consume the emitter, returning the warnings collected so far.
    pub fn finish(self) -> Diagnostics {
        self.diagnostics
    }

    fn emit_node(&mut self, node: &Node, depth: usize, out: &mut String) {
        match node {
            Node::Text(text) => push_text(out, text),
            Node::Element(element) => self.emit_element_at(element, depth, out),
            Node::Comment(_) => {}
        }
    }

    fn emit_children(&mut self, element: &Element, depth: usize, out: &mut String) {
        for child in &element.children {
            self.emit_node(child, depth + 1, out);
        }
    }

    fn children_to_string(&mut self, element: &Element, depth: usize) -> String {
        let mut inner = String::new();
        self.emit_children(element, depth, &mut inner);
        inner
    }

    fn emit_element_at(&mut self, element: &Element, depth: usize, out: &mut String) {
        if depth >= self.config.max_depth {
            self.diagnostics.push(Warning::DepthLimit {
                tag: element.name.clone(),
                depth,
            });
            return;
        }

        let Some(handler) = HANDLERS.get(element.name.as_str()) else {
            self.diagnostics.push(Warning::UnhandledTag {
                tag: element.name.clone(),
            });
            self.emit_children(element, depth, out);
            return;
        };

        match handler {
            Handler::Paragraph => {
                let inner = self.children_to_string(element, depth);
                out.push_str(inner.trim());
                out.push_str("\n\n");
            }
            Handler::Math => self.emit_math(element, out),
            Handler::LineBreak => out.push('\n'),
            Handler::OrderedList => {
                let inner = self.children_to_string(element, depth);
                out.push_str("\\begin{enumerate}\n");
                out.push_str(inner.trim_end());
                out.push_str("\n\\end{enumerate}\n\n");
            }
            Handler::ListItem => {
                let inner = self.children_to_string(element, depth);
                out.push_str("  \\item ");
                out.push_str(&collapse_paragraph_breaks(inner.trim()));
                out.push('\n');
            }
            Handler::Division => {
                if element.has_class(&self.config.container_class) {
                    tracing::trace!("entering content container {}", element);
                }
                self.emit_children(element, depth, out);
            }
            Handler::Span | Handler::Transparent => self.emit_children(element, depth, out),
        }
    }

    fn emit_math(&mut self, widget: &Element, out: &mut String) {
        let annotation = widget
            .find(|e| e.name == "annotation" && e.attr("encoding") == Some(TEX_ENCODING))
            .and_then(Element::string_content)
            .map(str::trim)
            .filter(|tex| !tex.is_empty());

        if let Some(tex) = annotation {
            if widget.has_class(&self.config.inline_class) {
                out.push_str(&format!("${tex}$ "));
            } else {
                out.push_str(&format!("\\[\n{tex}\n\\]\n\n"));
            }
            return;
        }

        // Fallback: first code block in document order, always inline.
        let code = widget
            .find(|e| e.name == "code")
            .and_then(Element::string_content)
            .map(str::trim)
            .filter(|tex| !tex.is_empty());

        match code {
            Some(tex) => out.push_str(&format!("${tex}$ ")),
            None => self.diagnostics.push(Warning::UnconvertibleMath {
                element: widget.to_string(),
            }),
        }
    }
}

/// Emit raw (uncleaned) LaTeX for a subtree.
pub fn emit_latex(node: &Node, config: &ConversionConfig) -> Conversion {
    let mut emitter = LatexEmitter::new(config);
    let mut latex = String::new();
    emitter.emit(node, &mut latex);
    Conversion::new(latex, emitter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(node: impl Into<Node>) -> Conversion {
        emit_latex(&node.into(), &ConversionConfig::default())
    }

    fn widget(class: Option<&str>) -> Element {
        let widget = Element::new(MATH_WIDGET_TAG);
        match class {
            Some(class) => widget.with_attr("class", class),
            None => widget,
        }
    }

    fn tex_annotation(tex: &str) -> Element {
        Element::new("math").with_child(
            Element::new("semantics")
                .with_child(Element::new("mrow").with_text("rendered"))
                .with_child(
                    Element::new("annotation")
                        .with_attr("encoding", TEX_ENCODING)
                        .with_text(tex),
                ),
        )
    }

    #[test]
    fn test_whitespace_only_text() {
        let result = emit(Node::text(" \n\t  "));
        assert_eq!(result.latex, "");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_text_is_escaped() {
        let result = emit(Node::text("100% & #5_a $x$"));
        assert_eq!(result.latex, r"100\% \& \#5\_a \$x\$ ");
    }

    #[test]
    fn test_comment_emits_nothing() {
        let result = emit(Node::Comment("ignored".to_string()));
        assert_eq!(result.latex, "");
    }

    #[test]
    fn test_paragraph() {
        let p = Element::new("p")
            .with_text("  Hello ")
            .with_child(Element::new("span").with_text("world"));
        assert_eq!(emit(p).latex, "Hello world\n\n");
    }

    #[test]
    fn test_span_is_transparent() {
        let span = Element::new("span").with_text("a");
        assert_eq!(emit(span).latex, "a ");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(emit(Element::new("br")).latex, "\n");
    }

    #[test]
    fn test_ordered_list() {
        let list = Element::new("ol")
            .with_text("\n  ")
            .with_child(Element::new("li").with_text("A"))
            .with_text("\n  ")
            .with_child(Element::new("li").with_text("B"))
            .with_text("\n");
        let result = emit(list);
        assert_eq!(
            result.latex,
            "\\begin{enumerate}\n  \\item A\n  \\item B\n\\end{enumerate}\n\n"
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_list_item_drops_paragraph_breaks() {
        let item = Element::new("li")
            .with_child(Element::new("p").with_text("first"))
            .with_child(Element::new("p").with_text("second"));
        assert_eq!(emit(item).latex, "  \\item first\nsecond\n");
    }

    #[test]
    fn test_inline_math() {
        let math = widget(Some("inline")).with_child(tex_annotation(" x+y "));
        let result = emit(math);
        assert_eq!(result.latex, "$x+y$ ");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_display_math() {
        let math = widget(Some("katex-display")).with_child(tex_annotation("E=mc^2"));
        assert_eq!(emit(math).latex, "\\[\nE=mc^2\n\\]\n\n");

        let math = widget(None).with_child(tex_annotation("E=mc^2"));
        assert_eq!(emit(math).latex, "\\[\nE=mc^2\n\\]\n\n");
    }

    #[test]
    fn test_inline_needs_whole_class_token() {
        let math = widget(Some("inline-ish")).with_child(tex_annotation("x"));
        assert_eq!(emit(math).latex, "\\[\nx\n\\]\n\n");
    }

    #[test]
    fn test_annotation_must_be_tex() {
        let math = widget(Some("inline"))
            .with_child(
                Element::new("annotation")
                    .with_attr("encoding", "application/mathml")
                    .with_text("<mi>x</mi>"),
            )
            .with_child(Element::new("code").with_text("x"));
        assert_eq!(emit(math).latex, "$x$ ");
    }

    #[test]
    fn test_code_fallback() {
        let math = widget(None).with_child(
            Element::new("pre")
                .with_child(Element::new("code").with_text("a^2"))
                .with_child(Element::new("code").with_text("b^2")),
        );
        let result = emit(math);
        assert_eq!(result.latex, "$a^2$ ");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_annotation_falls_back_to_code() {
        let math = widget(Some("inline"))
            .with_child(tex_annotation("   "))
            .with_child(Element::new("code").with_text("z"));
        assert_eq!(emit(math).latex, "$z$ ");
    }

    #[test]
    fn test_unconvertible_math() {
        let math = widget(Some("inline"))
            .with_child(Element::new("span").with_text("rendered only"));
        let result = emit(math);
        assert_eq!(result.latex, "");
        assert_eq!(
            result.warnings,
            vec![Warning::UnconvertibleMath {
                element: r#"<ms-katex class="inline">"#.to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_tag_passthrough() {
        let result = emit(Element::new("blink").with_text("hello"));
        assert_eq!(result.latex, "hello ");
        assert_eq!(
            result.warnings,
            vec![Warning::UnhandledTag {
                tag: "blink".to_string()
            }]
        );
    }

    #[test]
    fn test_structural_tags_are_silent() {
        for tag in ["ms-text-chunk", "ms-cmark-node", "div", "pre", "code", "math", "semantics"] {
            let result = emit(Element::new(tag).with_text("x"));
            assert_eq!(result.latex, "x ", "tag {tag}");
            assert!(result.warnings.is_empty(), "tag {tag}");
        }
    }

    #[test]
    fn test_container_passthrough() {
        let panel = Element::new("div")
            .with_attr("class", "mat-expansion-panel-body")
            .with_child(Element::new("p").with_text("Body"));
        let result = emit(panel);
        assert_eq!(result.latex, "Body\n\n");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_depth_limit_skips_subtree() {
        let config = ConversionConfig::default().with_max_depth(2);
        let tree = Element::new("div").with_child(
            Element::new("span")
                .with_text("kept")
                .with_child(Element::new("span").with_text("dropped")),
        );
        let result = emit_latex(&tree.into(), &config);
        assert_eq!(result.latex, "kept ");
        assert_eq!(
            result.warnings,
            vec![Warning::DepthLimit {
                tag: "span".to_string(),
                depth: 2
            }]
        );
    }

    #[test]
    fn test_document_order_of_mixed_content() {
        let p = Element::new("p")
            .with_text("Let")
            .with_child(widget(Some("inline")).with_child(tex_annotation("n")))
            .with_text("be even.");
        assert_eq!(emit(p).latex, "Let $n$ be even.\n\n");
    }
}
