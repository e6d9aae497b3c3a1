#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod login;
use login::Login;

mod share;
use share::SharedLinkView;

mod jobs;
use jobs::Jobs;

mod profile;
use profile::Profile;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/share/:share_key")]
        SharedLinkView { share_key: String },
        #[route("/jobs")]
        Jobs {},
        #[route("/profile")]
        Profile {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::APP_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
