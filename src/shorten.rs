use std::collections::HashMap;

use tracing::{debug, trace};

use crate::lcs::{PATH_SEPARATORS, aligned_spans};
use crate::prefix::common_prefix;
use crate::window::Limit;

/// Replaces a run of directories shared by every path.
pub const ELLIPSIS: &str = "...";

/// Shared runs shorter than this (separators included) are left alone. They are
/// mostly noise like `/src/` or `/./`.
const MIN_ELIDED_CHARS: usize = 7;

/// Short labels for a list of paths, one per path, in the same order.
///
/// Leading directories shared by all paths are stripped, then the longest run of
/// whole directories still shared by all of them is replaced with [`ELLIPSIS`]:
///
/// ```
/// let labels = pathlabel::shorten(&[
///     "/home/user1/src/geany/src/stash.c",
///     "/home/user2/src/geany/src/sidebar.c",
/// ]);
/// assert_eq!(labels, ["user1/.../stash.c", "user2/.../sidebar.c"]);
/// ```
///
/// Distinct paths always get distinct labels.
pub fn shorten<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    shorten_window(paths, Limit::All)
}

/// Like [`shorten`], but only for the leading `limit` paths.
pub fn shorten_window<S: AsRef<str>>(paths: &[S], limit: Limit) -> Vec<String> {
    let names = limit
        .window(paths)
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>();
    if names.is_empty() {
        return Vec::new();
    }

    let rests = strip_shared_head(&names);
    let Some(shared) = interior_run(&rests) else {
        return rests.iter().map(|s| s.to_string()).collect();
    };
    trace!(shared, "eliding shared directories");

    let labels = rests
        .iter()
        .map(|rest| elide(rest, shared))
        .collect::<Vec<_>>();
    if collides(&names, &labels) {
        debug!(shared, "elided labels collide, keeping full remainders");
        return rests.iter().map(|s| s.to_string()).collect();
    }
    labels
}

/// Drops the leading directories all names share. The head ends on the last shared
/// separator that still leaves every name non-empty; a bare root is never stripped.
fn strip_shared_head<'a>(names: &[&'a str]) -> Vec<&'a str> {
    let shortest = names.iter().map(|name| name.len()).min().unwrap_or(0);
    let head_len = common_prefix(names, Limit::All)
        .and_then(|prefix| {
            prefix
                .char_indices()
                .filter(|&(i, c)| i > 0 && PATH_SEPARATORS.contains(&c))
                .map(|(i, c)| i + c.len_utf8())
                .filter(|&len| len < shortest)
                .last()
        })
        .unwrap_or(0);

    if head_len > 0 {
        trace!(head = &names[0][..head_len], "stripping shared head");
    }
    names.iter().map(|name| &name[head_len..]).collect()
}

/// Longest separator-bounded run shared by all names that sits strictly inside
/// each of them, leaving something on both sides.
fn interior_run<'a>(names: &[&'a str]) -> Option<&'a str> {
    let first = *names.first()?;
    aligned_spans(first, PATH_SEPARATORS)
        .into_iter()
        .map(|span| &first[span])
        .take_while(|run| run.chars().count() >= MIN_ELIDED_CHARS)
        .find(|run| {
            names.iter().all(|name| {
                name.find(*run)
                    .is_some_and(|at| at > 0 && at + run.len() < name.len())
            })
        })
}

/// Replaces the first occurrence of `run` in `name`, keeping its enclosing separators.
fn elide(name: &str, run: &str) -> String {
    let Some(at) = name.find(run) else {
        return name.to_string();
    };
    let lead = run.chars().next().map_or(0, char::len_utf8);
    let trail = run.chars().next_back().map_or(0, char::len_utf8);
    format!(
        "{}{ELLIPSIS}{}",
        &name[..at + lead],
        &name[at + run.len() - trail..]
    )
}

fn collides(names: &[&str], labels: &[String]) -> bool {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    names.iter().zip(labels).any(|(name, label)| {
        match seen.insert(label.as_str(), *name) {
            Some(other) => other != *name,
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEANY: [&str; 6] = [
        "/home/user/src/geany/src/stash.c",
        "/home/user/src/geany/src/sidebar.c",
        "/home/user/src/geany/src/sidebar.h",
        "/home/user/src/geany/src/sidebar.h",
        "/home/user/src/geany/src/main.c",
        "/home/user/src/geany-plugins/addons/src/addons.c",
    ];

    #[test]
    fn empty_input() {
        let none: [&str; 0] = [];
        assert!(shorten(&none).is_empty());
        assert!(shorten_window(&["a/b"], Limit::First(0)).is_empty());
    }

    #[test]
    fn without_separators_nothing_changes() {
        for data in [
            vec![""],
            vec!["1", "2", "3"],
            vec!["abc", "amn", "axy"],
            vec!["abc", "", "axy"],
        ] {
            assert_eq!(shorten(&data), data);
        }
    }

    #[test]
    fn window_sets_output_length() {
        let data = ["22", "23", "33"];
        assert_eq!(shorten_window(&data, Limit::First(1)), ["22"]);
        assert_eq!(shorten_window(&data, Limit::First(2)), ["22", "23"]);
        assert_eq!(shorten_window(&data, Limit::First(3)), ["22", "23", "33"]);
    }

    #[test]
    fn strips_shared_directories() {
        assert_eq!(
            shorten_window(&GEANY, Limit::First(4)),
            ["stash.c", "sidebar.c", "sidebar.h", "sidebar.h"]
        );
        assert_eq!(
            shorten_window(&GEANY, Limit::First(5)),
            ["stash.c", "sidebar.c", "sidebar.h", "sidebar.h", "main.c"]
        );
        assert_eq!(
            shorten(&GEANY),
            [
                "geany/src/stash.c",
                "geany/src/sidebar.c",
                "geany/src/sidebar.h",
                "geany/src/sidebar.h",
                "geany/src/main.c",
                "geany-plugins/addons/src/addons.c",
            ]
        );
    }

    #[test]
    fn elides_shared_interior() {
        let data = [
            "/home/user1/src/geany/src/stash.c",
            "/home/user2/src/geany/src/sidebar.c",
            "/home/user3/src/geany/src/sidebar.h",
            "/home/user4/src/geany/src/sidebar.h",
            "/home/user5/src/geany/src/main.c",
        ];
        assert_eq!(
            shorten(&data),
            [
                "user1/.../stash.c",
                "user2/.../sidebar.c",
                "user3/.../sidebar.h",
                "user4/.../sidebar.h",
                "user5/.../main.c",
            ]
        );

        let data = ["/aaa/bbb/cc/ccccc/ddddd", "/aaa/bbb/xxx/yyy/cc/ccccc/ddddd"];
        assert_eq!(shorten(&data), ["cc/.../ddddd", "xxx/yyy/cc/.../ddddd"]);

        let data = [
            "/src/a/app-1.2.3/src/lib/module/source.c",
            "/src/b/app-2.2.3/src/module/source.c",
        ];
        assert_eq!(
            shorten(&data),
            ["a/app-1.2.3/src/lib/.../source.c", "b/app-2.2.3/src/.../source.c"]
        );
    }

    #[test]
    fn root_alone_is_kept() {
        let data = ["/usr/share/a.txt", "/opt/b.txt"];
        assert_eq!(shorten(&data), data);
    }

    #[test]
    fn never_empties_a_path() {
        let data = ["/data/logs/", "/data/logs/app.log"];
        assert_eq!(shorten(&data), ["logs/", "logs/app.log"]);

        let data = ["/data/logs/", "/data/logs/"];
        assert_eq!(shorten(&data), ["logs/", "logs/"]);
    }

    #[test]
    fn keeps_trailing_segment() {
        let data = ["x/library/module/", "y/library/module/"];
        assert_eq!(shorten(&data), ["x/.../module/", "y/.../module/"]);
    }

    #[test]
    fn keeps_leading_segment() {
        let data = ["/library/module/a.c", "z/library/module/b.c"];
        assert_eq!(shorten(&data), ["/library/.../a.c", "z/library/.../b.c"]);

        let data = ["library/module/a.c", "z/library/module/b.c"];
        assert_eq!(shorten(&data), ["library/.../a.c", "z/library/.../b.c"]);
    }

    #[test]
    fn single_path_keeps_its_file_name() {
        assert_eq!(shorten(&["/home/user/notes.md"]), ["notes.md"]);
        assert_eq!(shorten(&["notes.md"]), ["notes.md"]);
    }

    #[test]
    fn backslash_paths() {
        let data = [
            "C:\\work\\alpha\\vendor\\lib\\x.c",
            "C:\\work\\beta\\vendor\\lib\\y.c",
        ];
        assert_eq!(shorten(&data), ["alpha\\...\\x.c", "beta\\...\\y.c"]);
    }

    #[test]
    fn distinct_inputs_get_distinct_labels() {
        let lists: [&[&str]; 5] = [
            &GEANY,
            &["a/.../b/shared/c", "a/shared/b/.../c"],
            &["/a/b/c/d/e/f.rs", "/a/b/x/d/e/f.rs", "/a/b/c/d/e/g.rs"],
            &["/srv/www/site/index.html", "/srv/www/site/", "/srv/www/site/a/index.html"],
            &["one/two/three/four", "one/two/three/four/five", "six/two/three/four"],
        ];
        for list in lists {
            let labels = shorten(list);
            assert_eq!(labels.len(), list.len());
            for i in 0..list.len() {
                for j in i + 1..list.len() {
                    if list[i] != list[j] {
                        assert_ne!(labels[i], labels[j], "{list:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn shortened_labels_are_stable() {
        let once = shorten(&["/aaa/bbb/cc/ccccc/ddddd", "/aaa/bbb/xxx/yyy/cc/ccccc/ddddd"]);
        assert_eq!(shorten(&once), once);

        let once = shorten_window(&GEANY, Limit::First(5));
        assert_eq!(shorten(&once), once);
    }

    #[test]
    fn collision_check() {
        let names = ["a", "b", "a"];
        let same = vec!["x".to_string(), "y".to_string(), "x".to_string()];
        assert!(!collides(&names, &same));
        let clash = vec!["x".to_string(), "x".to_string(), "z".to_string()];
        assert!(collides(&names, &clash));
    }
}
