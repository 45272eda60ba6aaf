//! Route table and guest gating

/// Views the router can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Chat,
    Terms,
    Privacy,
    NotFound,
}

/// What to do for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(&'static str),
}

pub const ROOT_PATH: &str = "/";
pub const CHAT_PATH: &str = "/chat";
pub const TERMS_PATH: &str = "/terms";
pub const PRIVACY_PATH: &str = "/privacy";

/// Decide the view for `path` given the guest flag.
///
/// Guests skip the login view; everyone else is kept out of the chat.
/// The legal pages ignore the flag. Unknown paths render the 404 view.
pub fn resolve(path: &str, is_guest: bool) -> RouteDecision {
    match path {
        ROOT_PATH if is_guest => RouteDecision::Redirect(CHAT_PATH),
        ROOT_PATH => RouteDecision::Render(AppRoute::Login),
        CHAT_PATH if is_guest => RouteDecision::Render(AppRoute::Chat),
        CHAT_PATH => RouteDecision::Redirect(ROOT_PATH),
        TERMS_PATH => RouteDecision::Render(AppRoute::Terms),
        PRIVACY_PATH => RouteDecision::Render(AppRoute::Privacy),
        _ => RouteDecision::Render(AppRoute::NotFound),
    }
}
