use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::auth::AuthProvider;
use crate::components::article_writer::ArticleWriter;
use crate::components::bookmark_list::BookmarkList;
use crate::components::company_search::CompanySearch;
use crate::components::login_form::LoginForm;
use crate::components::navbar::Navbar;
use crate::components::news_feed::NewsFeed;
use crate::components::protected::Protected;
use crate::components::tracker::BigTechTracker;
use crate::config::ClientConfig;

/// HTML document rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="min-h-screen bg-base-100">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::compiled();
    config.validate();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/signal7.css"/>
        <Title text="Signal7 - Tech News"/>

        <AuthProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <p class="p-8">"Page not found."</p> }.into_view()>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/bookmarks") view=BookmarksPage/>
                        <Route path=path!("/writer") view=WriterPage/>
                        <Route path=path!("/companies") view=CompaniesPage/>
                        <Route path=path!("/big-tech") view=BigTechTracker/>
                        <Route path=path!("/login") view=LoginForm/>
                    </Routes>
                </main>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Protected return_to="/">
            <NewsFeed/>
        </Protected>
    }
}

#[component]
fn BookmarksPage() -> impl IntoView {
    view! {
        <Protected return_to="/bookmarks">
            <BookmarkList/>
        </Protected>
    }
}

#[component]
fn WriterPage() -> impl IntoView {
    view! {
        <Protected return_to="/writer">
            <ArticleWriter/>
        </Protected>
    }
}

#[component]
fn CompaniesPage() -> impl IntoView {
    view! {
        <Protected return_to="/companies">
            <CompanySearch/>
        </Protected>
    }
}
