//! ROBODoc function header blocks written at the top of generated sources.

use crate::error::Result;
use crate::naming::NameAllocator;
use crate::renderer::TemplateRenderer;
use rand::Rng;

/// Opening marker of a function header
pub const HEADER_START: &str = "/****f* ";

/// Closing marker of a header block
pub const HEADER_END: &str = " *****/";

/// The header layout. `namespace` and `name` carry the same identifier.
pub const HEADER_TEMPLATE: &str = "/****f* {{ namespace }}/{{ secondary }}
 * NAME
 *    {{ name }}
 * FUNCTION
 *    vla flip too
 *    horton hears a who
 *****/

";

/// The substitution values of one header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    pub namespace: String,
    pub secondary: String,
    pub name: String,
}

impl HeaderBlock {
    /// Draws a primary and a secondary identifier of `length` characters.
    pub fn random<R: Rng>(allocator: &mut NameAllocator<R>, length: usize) -> Result<Self> {
        let primary = allocator.random_name(length)?;
        let secondary = allocator.random_name(length)?;
        Ok(Self {
            namespace: primary.clone(),
            secondary,
            name: primary,
        })
    }

    pub fn render(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
        let context = serde_json::json!({
            "namespace": self.namespace,
            "secondary": self.secondary,
            "name": self.name,
        });
        renderer.render(HEADER_TEMPLATE, &context)
    }
}

/// Produces header text for generated sources.
pub struct HeaderSynthesizer<'a> {
    renderer: &'a dyn TemplateRenderer,
    name_length: usize,
}

impl<'a> HeaderSynthesizer<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, name_length: usize) -> Self {
        Self {
            renderer,
            name_length,
        }
    }

    /// Renders one header block with freshly drawn identifiers.
    pub fn generate_header<R: Rng>(&self, allocator: &mut NameAllocator<R>) -> Result<String> {
        HeaderBlock::random(allocator, self.name_length)?.render(self.renderer)
    }
}

/// Checks `text` against the header grammar: it starts with the function
/// marker, has exactly one `NAME` item and the block is closed by the end
/// marker followed by an empty line.
pub fn is_header_block(text: &str) -> bool {
    check_header(text).is_ok()
}

/// Like [`is_header_block`] but names the first violated rule.
pub fn check_header(text: &str) -> std::result::Result<(), &'static str> {
    if !text.starts_with(HEADER_START) {
        return Err("missing '/****f* ' marker");
    }
    let first_line = text.lines().next().unwrap_or_default();
    let label = &first_line[HEADER_START.len()..];
    match label.split_once('/') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {}
        _ => return Err("marker is not followed by NAMESPACE/NAME"),
    }
    let end = match text.find(&format!("\n{HEADER_END}\n")) {
        Some(pos) => pos + HEADER_END.len() + 2,
        None => return Err("missing '*****/' terminator"),
    };
    let block = &text[..end];
    if block.lines().filter(|line| line.trim() == "* NAME").count() != 1 {
        return Err("expected exactly one NAME item");
    }
    if !text[end..].starts_with('\n') {
        return Err("terminator is not followed by an empty line");
    }
    Ok(())
}
