use crate::pages::bosses::BossDirectoryPage;
use crate::pages::characters::CharacterRoulettePage;
use crate::pages::custom::CustomWheelPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <CharacterRoulettePage /> },
        Route::Bosses => html! { <BossDirectoryPage /> },
        Route::Custom => html! { <CustomWheelPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h2>{ "Page not found" }</h2>
                <Link<Route> to={Route::Home} classes="nav-link">{ "Back to the roulette" }</Link<Route>>
            </div>
        },
    }
}

#[function_component(SiteNav)]
fn site_nav() -> Html {
    let current = use_route::<Route>();
    let entries = [Route::Home, Route::Bosses, Route::Custom];
    html! {
        <nav class="site-nav">
            { for entries.into_iter().filter_map(|route| {
                let label = route.nav_label()?;
                let active = current.as_ref() == Some(&route);
                Some(html! {
                    <Link<Route>
                        to={route.clone()}
                        classes={classes!("nav-link", active.then_some("active"))}
                    >
                        { label }
                    </Link<Route>>
                })
            }) }
        </nav>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <header class="site-hero">
                    <h1>{ "Teyvat Companion Hub" }</h1>
                    <p>{ "Spin for heroes or browse every boss across the regions of Teyvat." }</p>
                    <SiteNav />
                </header>
                <main class="page-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
