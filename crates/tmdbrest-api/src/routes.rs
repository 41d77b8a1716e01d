//! Endpoint route table and URL builder.

/// Root URL for TMDB API v3.
pub const API_ROOT: &str = "https://api.themoviedb.org/3/";

/// Symbolic action name mapped to a path template with positional `{}`
/// placeholders.
const ROUTES: &[(&str, &str)] = &[
    ("config", "configuration"),
    ("new_session", "authentication/session/new"),
    ("find", "search/{}"),
    ("genres", "genre/{}/list"),
    ("person", "person/{}"),
    ("item", "{}/{}"),
    ("episode", "tv/{}/season/{}/episode/{}"),
    ("season", "tv/{}/season/{}"),
    ("airing_today", "tv/airing_today"),
];

/// Substitutes `params` positionally into the template for `action`.
///
/// Returns `None` for an unknown action; callers must check before
/// using the result as a network target. The returned path is relative
/// to the API root so sessions can join it onto an overridden base.
///
/// # Panics
///
/// Panics when `params` supplies fewer values than the template has
/// placeholders. A count mismatch is a caller error, not a recoverable
/// condition.
#[must_use]
#[allow(clippy::panic)]
pub fn route_path(action: &str, params: &[&str]) -> Option<String> {
    let template = ROUTES
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, template)| *template)?;

    let mut values = params.iter();
    let mut pieces = template.split("{}");
    let mut path = String::from(pieces.next().unwrap_or_default());
    for piece in pieces {
        let Some(value) = values.next() else {
            panic!("route {action:?} takes more than {} parameters", params.len());
        };
        path.push_str(value);
        path.push_str(piece);
    }
    Some(path)
}

/// Fully qualified URL for `action` under the fixed API root.
///
/// `None` for an unknown action, like [`route_path`].
///
/// # Panics
///
/// Panics on a placeholder-count mismatch, like [`route_path`].
#[must_use]
pub fn build_url(action: &str, params: &[&str]) -> Option<String> {
    route_path(action, params).map(|path| format!("{API_ROOT}{path}"))
}
