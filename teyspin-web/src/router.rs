use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bosses")]
    Bosses,
    #[at("/custom")]
    Custom,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Nav label for the routed pages; `None` keeps a route out of the nav.
    #[must_use]
    pub const fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Character Roulette"),
            Self::Bosses => Some("Boss Directory"),
            Self::Custom => Some("Custom Wheel"),
            Self::NotFound => None,
        }
    }
}
