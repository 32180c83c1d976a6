use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::{MasterStatsDashboard, OverviewDashboard};
use crate::domain::a001_atm::ui::list::AtmList;
use crate::domain::a002_college_dunia::ui::list::CollegeDuniaList;
use crate::domain::a003_bank::ui::list::BankList;
use crate::domain::a004_heyplaces::ui::list::PlacesList;
use crate::layout::Shell;
use crate::routes::paths;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::sign_in::SignInPage;

#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

/// `/dashboard/*` behind the auth guard, `/auth/sign-in` public,
/// anything else redirected to sign-in
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=paths::SIGN_IN /> }>
                <Route path=path!("/auth/sign-in") view=SignInPage />
                <ParentRoute path=path!("/dashboard") view=ProtectedLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=paths::HOME /> } />
                    <Route path=path!("home") view=OverviewDashboard />
                    <Route path=path!("reports") view=MasterStatsDashboard />
                    <Route path=path!("atm") view=AtmList />
                    <Route path=path!("college-dunia") view=CollegeDuniaList />
                    <Route path=path!("bank") view=BankList />
                    <Route path=path!("heyplaces") view=PlacesList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
