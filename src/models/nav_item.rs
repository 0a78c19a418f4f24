pub struct NavLink {
    pub label: &'static str,
    pub url: &'static str,
    pub is_active: bool,
}

const HEADER_LINKS: [(&str, &str); 5] = [
    ("Fonctionnalités", "/#features"),
    ("Prix", "/#pricing"),
    ("Témoignages", "/#testimonials"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Header navigation with the entry for `current_path` marked active.
/// Anchor links on the landing page are never marked.
pub fn find_navigation(current_path: &str) -> Vec<NavLink> {
    HEADER_LINKS
        .iter()
        .map(|&(label, url)| NavLink {
            label,
            url,
            is_active: !url.contains('#')
                && (current_path == url || current_path.starts_with(&format!("{url}/"))),
        })
        .collect()
}
