mod cleaning;
mod clients;
mod employees;
mod health;
mod login;
mod not_found;
pub mod paths;
mod register;
mod report;
mod rooms;
mod stats;

pub use cleaning::CleaningPage;
pub use clients::ClientsPage;
pub use employees::EmployeesPage;
pub use health::HealthPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use report::ReportPage;
pub use rooms::RoomsPage;
pub use stats::StatsPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Landing route: the rooms overview is the app's home.
#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=paths::ROOMS /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomeRedirect />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/rooms") view=RoomsPage />
            <Route path=path!("/clients") view=ClientsPage />
            <Route path=path!("/employees") view=EmployeesPage />
            <Route path=path!("/cleaning") view=CleaningPage />
            <Route path=path!("/report") view=ReportPage />
            <Route path=path!("/stats") view=StatsPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
