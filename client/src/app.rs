//! Root application component with routing and context providers.

use booking::session::RouteAccess;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::components::protected::Protected;
use crate::pages::about::AboutPage;
use crate::pages::admin_bookings::AdminBookingsPage;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_fleet::AdminFleetPage;
use crate::pages::admin_staff::AdminStaffPage;
use crate::pages::booking::BookingPage;
use crate::pages::car_select::CarSelectPage;
use crate::pages::customer_care::CustomerCarePage;
use crate::pages::explore::ExplorePage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::hub_select::HubSelectPage;
use crate::pages::login::LoginPage;
use crate::pages::manage_booking::ManageBookingPage;
use crate::pages::my_bookings::MyBookingsPage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::staff_dashboard::{StaffDashboardPage, StaffTab};
use crate::state::{auth::AuthState, booking::BookingFlow, ui::UiState};
use crate::util::theme::provide_theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the tab's session once the
/// browser is live, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let flow = RwSignal::new(BookingFlow::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(flow);
    provide_theme();

    // Storage is only readable in the browser; guards wait for `loaded`.
    Effect::new(move || {
        auth.update(|a| a.restore(&crate::util::storage::BrowserStore::session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/indiadrive.css"/>
        <Title text="IndiaDrive"/>

        <Router>
            <NavBar/>
            <NoticeBanner/>
            <main class="app-main">
                <Routes fallback=|| view! { <div class="page page--missing">"Page not found."</div> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("explore-vehicles") view=ExplorePage/>
                    <Route path=StaticSegment("customer-care") view=CustomerCarePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>

                    <Route path=StaticSegment("booking") view=BookingPage/>
                    <Route path=StaticSegment("select-hub") view=HubSelectPage/>
                    <Route path=StaticSegment("select-car") view=CarSelectPage/>

                    <Route
                        path=StaticSegment("my-bookings")
                        view=|| view! { <Protected access=RouteAccess::SignedIn><MyBookingsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("manage-booking")
                        view=|| view! { <Protected access=RouteAccess::SignedIn><ManageBookingPage/></Protected> }
                    />

                    <Route
                        path=(StaticSegment("staff"), StaticSegment("dashboard"))
                        view=|| staff_view(StaffTab::HubBookings)
                    />
                    <Route path=(StaticSegment("staff"), StaticSegment("handover")) view=|| staff_view(StaffTab::Handover)/>
                    <Route path=(StaticSegment("staff"), StaticSegment("return")) view=|| staff_view(StaffTab::Return)/>
                    <Route path=(StaticSegment("staff"), StaticSegment("on-spot")) view=|| staff_view(StaffTab::OnSpot)/>

                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <Protected access=RouteAccess::AdminOnly><AdminDashboardPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("bookings"))
                        view=|| view! { <Protected access=RouteAccess::AdminOnly><AdminBookingsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("fleet"))
                        view=|| view! { <Protected access=RouteAccess::AdminOnly><AdminFleetPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("staff"))
                        view=|| view! { <Protected access=RouteAccess::AdminOnly><AdminStaffPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

fn staff_view(tab: StaffTab) -> impl IntoView {
    view! {
        <Protected access=RouteAccess::StaffOrAdmin>
            <StaffDashboardPage tab=tab/>
        </Protected>
    }
}
