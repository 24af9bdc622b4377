/// Returns the selector for a same-page link, e.g. `#products`.
/// A bare `#` and links that leave the page give `None`.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_same_page_fragments() {
        assert_eq!(fragment_selector("#products"), Some("#products"));
        assert_eq!(fragment_selector("#a"), Some("#a"));
    }

    #[test]
    fn ignores_bare_hash_and_other_links() {
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector(""), None);
        assert_eq!(fragment_selector("/pricing#faq"), None);
        assert_eq!(fragment_selector("https://wa.me/1"), None);
    }
}
