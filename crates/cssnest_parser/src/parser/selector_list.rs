use crate::token::Token;

/// Splits the tokens in front of a block into trimmed selectors, one per comma separated
/// part. Delimiters become a single space. Returns `None` for an at-rule header, those tokens
/// are left to the caller.
pub fn parse_selector_list(tokens: &[Token]) -> Option<Vec<String>> {
    log::trace!("parse_selector_list");

    if tokens.first().is_some_and(|t| t.is_at()) {
        return None;
    }

    let mut selectors = vec![];
    let mut selector = String::new();

    for t in tokens {
        if t.is_comma() {
            selectors.push(selector.trim().to_string());
            selector.clear();
        } else if t.is_delimiter() {
            selector.push(' ');
        } else {
            selector.push_str(&t.source);
        }
    }
    selectors.push(selector.trim().to_string());

    Some(selectors)
}
