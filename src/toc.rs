//! GitHub-flavored markdown anchor/slug generation.

/// Generate a TOC list item linking to a function's heading.
pub fn render_toc_item(name: &str) -> String {
    format!("* [{}](#{})", name, github_slug(name))
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - drop everything that isn't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
