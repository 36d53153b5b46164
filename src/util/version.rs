pub const APP_NAME: &str = "FSAE Tools";
pub const APP_TAGLINE: &str = "Gestão de Estoque";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, crate version otherwise.
pub fn version_label() -> String {
    format_version(GIT_TAG, APP_VERSION)
}

fn format_version(tag: Option<&str>, fallback: &str) -> String {
    match tag {
        Some(tag) if tag.starts_with(['v', 'V']) => tag.to_string(),
        Some(tag) => format!("v{tag}"),
        None => format!("v{fallback}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_git_tag() {
        assert_eq!(format_version(Some("v1.2.0"), "0.1.0"), "v1.2.0");
        assert_eq!(format_version(Some("1.2.0"), "0.1.0"), "v1.2.0");
        assert_eq!(format_version(None, "0.1.0"), "v0.1.0");
    }
}
