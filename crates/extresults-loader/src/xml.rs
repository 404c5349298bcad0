use crate::LoadError;
use extresults_types::{Element, Node};

/// Deepest element nesting accepted. Results documents are a handful of levels deep.
pub const MAX_DEPTH: usize = 256;

/// Parse XML text into an owned [`Element`] tree rooted at the document element.
///
/// Comments and processing instructions are dropped; CDATA sections and
/// resolved entities become text. Names are local names (namespace prefixes
/// are not part of the match). Nesting beyond [`MAX_DEPTH`] is rejected with
/// [`LoadError::TooDeep`] before the text reaches `roxmltree`.
pub fn parse_xml_str(text: &str) -> Result<Element, LoadError> {
    check_depth(text.as_bytes())?;
    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(text, options).map_err(LoadError::from_syntax)?;
    convert(doc.root_element(), 1)
}

// Entity expansion can still nest past the markup scan, so convert re-checks.
fn convert(node: roxmltree::Node<'_, '_>, depth: usize) -> Result<Element, LoadError> {
    if depth > MAX_DEPTH {
        return Err(LoadError::TooDeep { limit: MAX_DEPTH });
    }
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element.set_attribute(attr.name(), attr.value());
    }
    for child in node.children() {
        if child.is_element() {
            element.push_child(Node::Element(convert(child, depth + 1)?));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.push_child(Node::Text(text.to_string()));
            }
        }
    }
    Ok(element)
}

/// Count open elements over the raw markup.
///
/// Malformed markup is left for `roxmltree` to report; this only has to be right
/// for text that could parse.
fn check_depth(bytes: &[u8]) -> Result<(), LoadError> {
    let mut depth = 0usize;
    let mut i = 0;
    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'<') {
        i += offset + 1;
        let rest = &bytes[i..];
        if rest.starts_with(b"!--") {
            i += skip_past(rest, b"-->");
        } else if rest.starts_with(b"![CDATA[") {
            i += skip_past(rest, b"]]>");
        } else if rest.starts_with(b"?") {
            i += skip_past(rest, b"?>");
        } else if rest.starts_with(b"!") {
            i += skip_declaration(rest);
        } else if rest.starts_with(b"/") {
            depth = depth.saturating_sub(1);
            i += skip_tag(rest).0;
        } else {
            let (len, self_closing) = skip_tag(rest);
            i += len;
            if !self_closing {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(LoadError::TooDeep { limit: MAX_DEPTH });
                }
            }
        }
    }
    Ok(())
}

/// Offset just past the first `pattern` in `rest`, or the end of input.
fn skip_past(rest: &[u8], pattern: &[u8]) -> usize {
    rest.windows(pattern.len())
        .position(|w| w == pattern)
        .map_or(rest.len(), |p| p + pattern.len())
}

/// Offset just past the closing `>` of a tag, and whether it ended in `/>`.
fn skip_tag(rest: &[u8]) -> (usize, bool) {
    let mut quote = None;
    for (idx, &b) in rest.iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return (idx + 1, idx > 0 && rest[idx - 1] == b'/'),
            _ => {}
        }
    }
    (rest.len(), false)
}

/// Offset just past a `<!DOCTYPE ...>` style declaration, internal subset included.
fn skip_declaration(rest: &[u8]) -> usize {
    let mut brackets = 0usize;
    let mut quote = None;
    let mut idx = 0;
    while idx < rest.len() {
        let b = rest[idx];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if rest[idx..].starts_with(b"<!--") => {
                idx += skip_past(&rest[idx..], b"-->");
                continue;
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'[' => brackets += 1,
                b']' => brackets = brackets.saturating_sub(1),
                b'>' if brackets == 0 => return idx + 1,
                _ => {}
            },
        }
        idx += 1;
    }
    rest.len()
}
