//! Comandas Frontend App
//!
//! Picks the view from the page path: the kitchen panel is served under
//! `/cocina`, everything else is the order composer.

use leptos::prelude::*;

use crate::components::{KitchenPanel, OrderComposer};
use crate::config::Config;
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Composer,
    Kitchen,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with("/cocina") {
            Route::Kitchen
        } else {
            Route::Composer
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = Config::from_window();
    web_sys::console::log_1(&format!("[APP] API at {}", config.api_base).into());
    provide_context(AppContext::new(config));

    let path = window().location().pathname().unwrap_or_default();
    match Route::from_path(&path) {
        Route::Kitchen => view! { <KitchenPanel /> }.into_any(),
        Route::Composer => view! { <OrderComposer /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/cocina"), Route::Kitchen);
        assert_eq!(Route::from_path("/cocina/"), Route::Kitchen);
        assert_eq!(Route::from_path("/restaurante/cocina"), Route::Kitchen);
        assert_eq!(Route::from_path("/"), Route::Composer);
        assert_eq!(Route::from_path(""), Route::Composer);
        assert_eq!(Route::from_path("/cocinas"), Route::Composer);
    }
}
