use std::path::Path;

/// Path as text, with the home directory shown as `~` when `tilde` is set.
pub fn display_path(p: &Path, tilde: bool) -> String {
    let s = p.display().to_string();
    if !tilde {
        return s;
    }
    match dirs::home_dir() {
        Some(home) => tilde_home(&s, &home),
        None => s,
    }
}

fn tilde_home(s: &str, home: &Path) -> String {
    let home = home.display().to_string();
    let home = home.trim_end_matches(['/', '\\']);
    if home.is_empty() {
        return s.to_string();
    }
    match s.strip_prefix(home) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with(['/', '\\']) => format!("~{rest}"),
        _ => s.to_string(),
    }
}

/// Keeps the tail of `s`, marking the cut with `…`, so the result fits `max_chars`.
pub fn elide_head(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let tail = s.chars().skip(count - keep).collect::<String>();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_becomes_tilde() {
        let home = Path::new("/home/ada");
        assert_eq!(tilde_home("/home/ada", home), "~");
        assert_eq!(tilde_home("/home/ada/src/x.rs", home), "~/src/x.rs");
        assert_eq!(tilde_home("/home/adam/x.rs", home), "/home/adam/x.rs");
        assert_eq!(tilde_home("/etc/hosts", home), "/etc/hosts");
        assert_eq!(tilde_home("/home/ada/x.rs", Path::new("/home/ada/")), "~/x.rs");
    }

    #[test]
    fn root_home_is_ignored() {
        assert_eq!(tilde_home("/etc/hosts", Path::new("/")), "/etc/hosts");
    }

    #[test]
    fn elides_from_the_front() {
        assert_eq!(elide_head("short", 10), "short");
        assert_eq!(elide_head("/very/long/path.rs", 8), "…path.rs");
        assert_eq!(elide_head("/very/long/path.rs", 8).chars().count(), 8);
    }
}
