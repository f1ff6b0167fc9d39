//! Request path parsing.
//!
//! A path is `<base>/<operation>/<arg1>/<arg2>`. The operation picks the
//! page; the arguments identify what to show on it.

/// A parsed page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Landing,
    /// `/game/<instance>`
    Instance {
        /// Public identifier of the instance.
        instance_id: String,
    },
    /// `/player/<instance>/<player>`
    Player {
        /// Public identifier of the instance.
        instance_id: String,
        /// Player identifier within the instance.
        player_id: i64,
    },
    /// `/rawplayer/<instance>/<player>`
    RawPlayer {
        /// Public identifier of the instance.
        instance_id: String,
        /// Player identifier within the instance.
        player_id: i64,
    },
    /// Anything else.
    NotFound {
        /// Instance whose summary is the closest existing page, when the
        /// request named one.
        nearest_instance: Option<String>,
    },
}

impl Route {
    /// Parses `path`, which must live under `base_path` (empty, or `/x`
    /// without a trailing slash).
    #[must_use]
    pub fn parse(path: &str, base_path: &str) -> Self {
        let Some(rest) = strip_base(path, base_path) else {
            return Self::not_found();
        };

        let mut segments = rest.trim_matches('/').split('/');
        let operation = segments.next().unwrap_or_default();
        let first = argument(segments.next());
        let second = argument(segments.next());

        match (operation, first, second) {
            ("", _, _) => Self::Landing,
            ("game", Some(instance_id), _) => Self::Instance { instance_id },
            ("player", Some(instance_id), Some(player)) => match player.parse() {
                Ok(player_id) => Self::Player {
                    instance_id,
                    player_id,
                },
                Err(_) => Self::not_found(),
            },
            ("rawplayer", Some(instance_id), Some(player)) => match player.parse() {
                Ok(player_id) => Self::RawPlayer {
                    instance_id,
                    player_id,
                },
                Err(_) => Self::not_found(),
            },
            ("player" | "rawplayer", Some(instance_id), None) => Self::NotFound {
                nearest_instance: Some(instance_id),
            },
            _ => Self::not_found(),
        }
    }

    fn not_found() -> Self {
        Self::NotFound {
            nearest_instance: None,
        }
    }
}

fn strip_base<'a>(path: &'a str, base_path: &str) -> Option<&'a str> {
    if base_path.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base_path)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

/// An argument is present iff it is non-empty after trimming.
fn argument(segment: Option<&str>) -> Option<String> {
    segment
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
