// Joining fasta identifiers and descriptions back into header lines.

fn first_token(text: &[u8]) -> &[u8] {
    text.split(u8::is_ascii_whitespace)
        .find(|token| !token.is_empty())
        .unwrap_or(&[])
}

/// The whole header of a parsed record: the identifier, then the rest of the
/// line if there was any.
pub fn full_description(id: &str, desc: Option<&str>) -> String {
    match desc {
        Some(desc) if !desc.is_empty() => format!("{} {}", id, desc),
        _ => id.to_owned(),
    }
}

/// Builds the text that goes after '>' for a record.
pub fn title(id: &[u8], description: &[u8]) -> Vec<u8> {
    if description.is_empty() {
        id.to_vec()
    } else if first_token(description) == id {
        description.to_vec()
    } else {
        let mut title = Vec::with_capacity(id.len() + 1 + description.len());
        title.extend_from_slice(id);
        title.push(b' ');
        title.extend_from_slice(description);
        title
    }
}
