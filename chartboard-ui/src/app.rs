//! App Root Component
//!
//! Routing: the root path forwards to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::pages::Dashboard;

/// Path of the dashboard page
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=RootRedirect />
                    <Route path=DASHBOARD_PATH view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// Forwards `/` to the dashboard, replacing the history entry. Renders nothing.
#[component]
fn RootRedirect() -> impl IntoView {
    view! {
        <Redirect
            path=DASHBOARD_PATH
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h1>"Page Not Found"</h1>
            <A href=DASHBOARD_PATH>"Go to Dashboard"</A>
        </div>
    }
}
