/// Inline `display` value. Elements without an inline value fall back to
/// whatever the page stylesheet gives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}
