//! Root application component and the shared application context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::controller::Controller;
use crate::state::effects::{Command, dispatch};
use crate::state::session::BrowserStore;
use crate::state::view::View;
use crate::util::dom::current_location;

pub type AppController = Controller<BrowserStore>;

/// Everything components need to drive the app, provided once via context.
#[derive(Clone)]
pub struct AppContext {
    pub controller: RwSignal<AppController>,
    pub api: HttpAuthApi,
}

impl AppContext {
    pub fn new(config: &ClientConfig) -> Self {
        let controller = Controller::new(BrowserStore).with_message_ttl(config.message_ttl);
        Self {
            controller: RwSignal::new(controller),
            api: HttpAuthApi::new(config.api_base.clone()),
        }
    }

    /// Run a controller operation and execute the commands it returns.
    pub fn apply<F>(&self, op: F)
    where
        F: FnOnce(&mut AppController) -> Vec<Command>,
    {
        let commands = self.controller.try_update(op).unwrap_or_default();
        dispatch(self, commands);
    }
}

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
/// The server renders the not-yet-started shell; the controller starts in a
/// browser-only effect once hydration is done, since session storage and the
/// callback URL only exist there.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(&ClientConfig::from_build_env());
    provide_context(ctx.clone());

    Effect::new(move || {
        ctx.apply(|c| c.start(&current_location()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/authpage.css"/>
        <Title text="Authpage"/>

        <Router>
            <div class="container">
                <header class="header">
                    <h1>"Authpage"</h1>
                    <NavBar/>
                </header>
                <main class="content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ActiveView/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Renders whichever view the controller has active.
#[component]
fn ActiveView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let controller = ctx.controller;

    // Memoized so unrelated controller changes (messages, busy flag) do not
    // remount the page and wipe its form inputs.
    let active = Memo::new(move |_| controller.with(|c| c.is_started().then(|| c.view())));

    move || match active.get() {
        None => view! { <div class="loading">"Loading"</div> }.into_any(),
        Some(View::Home) => view! { <HomePage/> }.into_any(),
        Some(View::Login) => view! { <LoginPage/> }.into_any(),
        Some(View::Register) => view! { <RegisterPage/> }.into_any(),
        Some(View::Profile) => view! { <ProfilePage/> }.into_any(),
    }
}
