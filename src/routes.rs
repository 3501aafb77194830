//! Route table for the application shell.
//!
//! Only two paths are served: `/` and `/detail`. The detail page takes the
//! question id from the `id` query parameter so links stay shareable.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const DETAIL_PATH: &str = "/detail";
pub const QUESTION_ID_PARAM: &str = "id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Detail,
}

impl AppRoute {
    /// Match a pathname for display purposes (the header's `aria-current`).
    ///
    /// Page selection belongs to the `<Routes>` table in `app.rs`, which is
    /// built from [`AppRoute::segment`]. This helper is looser: it also
    /// accepts `""`, one trailing slash, and `?`/`#` suffixes.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        match trimmed {
            "" | HOME_PATH => Some(AppRoute::Home),
            DETAIL_PATH => Some(AppRoute::Detail),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => HOME_PATH,
            AppRoute::Detail => DETAIL_PATH,
        }
    }

    /// Path segment used by the router (`""` for the root).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

/// Link to the detail page for one question.
pub fn detail_href(question_id: &str) -> String {
    format!("{DETAIL_PATH}?{QUESTION_ID_PARAM}={}", urlencoding::encode(question_id))
}

/// Normalize a raw `id` query value: blank means "no question selected".
pub fn question_id_from_query(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}
