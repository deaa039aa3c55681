use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::Route;
use crate::config;
use crate::menu::{MenuState, BAR_CLASS};
use crate::site::{nav_destinations, Destination};

fn scroll_to_anchor(anchor: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(anchor));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("no element with id {} on this page", anchor),
    }
}

/// Move the view to `destination`: switch routes if needed, then jump to its anchor.
fn follow(navigator: Option<&Navigator>, current: Option<&Route>, destination: &Destination) {
    info!("Navigating to {}", destination.href());
    if let (Some(route), Some(navigator)) = (destination.route.as_ref(), navigator) {
        if current != Some(route) {
            navigator.push(route);
        }
    }
    if let Some(anchor) = destination.anchor {
        // Wait for the target page to render before looking the anchor up.
        Timeout::new(config::ANCHOR_SCROLL_DELAY_MS, move || scroll_to_anchor(anchor)).forget();
    }
}

fn focus_first_link(overlay: &NodeRef) {
    let first_link = overlay
        .cast::<Element>()
        .and_then(|nav| nav.query_selector("a").ok().flatten())
        .and_then(|link| link.dyn_into::<HtmlElement>().ok());
    if let Some(link) = first_link {
        let _ = link.focus();
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    destination: Destination,
    class: &'static str,
    on_select: Callback<Destination>,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let destination = props.destination.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(destination.clone());
        })
    };

    html! {
        <a href={props.destination.href()} class={props.class} {onclick}>
            {props.destination.label}
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MenuState::default);
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let overlay = use_node_ref();
    let destinations = nav_destinations();

    {
        let overlay = overlay.clone();
        use_effect_with_deps(move |menu: &MenuState| {
            if menu.is_open() {
                focus_first_link(&overlay);
            }
            || ()
        }, *menu);
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    let select = {
        let menu = menu.clone();
        Callback::from(move |destination: Destination| {
            let selection = menu.select(destination);
            menu.set(selection.state);
            follow(navigator.as_ref(), current.as_ref(), &selection.navigate_to);
        })
    };

    let glyph = menu.glyph();
    let open = menu.is_open();

    let desktop_class = |destination: &Destination| {
        if destination.emphasized {
            "bg-[#D36D47] text-white font-bold py-3 px-6 rounded-full hover:opacity-90 transition shadow-lg"
        } else {
            "text-[#2C4A3F] font-semibold hover:text-[#D36D47] transition"
        }
    };
    let overlay_class = |destination: &Destination| {
        if destination.emphasized {
            "bg-[#D36D47] text-white font-bold py-4 px-8 rounded-full hover:opacity-90 transition shadow-lg"
        } else {
            "text-[#2C4A3F] font-semibold hover:text-[#D36D47] transition"
        }
    };

    html! {
        <>
            <header class="sticky top-0 left-0 w-full z-30 p-3 bg-[#F9F6F0]/80 backdrop-blur-md shadow-sm">
                <div class="container mx-auto flex justify-between items-center">
                    <Link<Route> to={Route::Home} classes="font-serif text-3xl font-bold text-[#2C4A3F]">
                        {config::BRAND_NAME}
                    </Link<Route>>

                    <nav class="hidden md:flex items-center space-x-8">
                        { for destinations.iter().map(|destination| html! {
                            <NavLink
                                destination={destination.clone()}
                                class={desktop_class(destination)}
                                on_select={select.clone()}
                            />
                        }) }
                    </nav>

                    <button
                        class="md:hidden z-50"
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                        aria-expanded={open.to_string()}
                    >
                        <div class="w-6 h-6 flex flex-col justify-around">
                            <span class={classes!(BAR_CLASS, glyph.top)}></span>
                            <span class={classes!(BAR_CLASS, glyph.middle)}></span>
                            <span class={classes!(BAR_CLASS, glyph.bottom)}></span>
                        </div>
                    </button>
                </div>
            </header>

            <div
                class={classes!(
                    "fixed", "inset-0", "bg-[#F9F6F0]", "z-20", "transform",
                    "transition-transform", "duration-500", "ease-in-out",
                    menu.overlay_class()
                )}
                aria-hidden={(!open).to_string()}
            >
                <nav ref={overlay} class="flex flex-col items-center justify-center h-full space-y-8 text-2xl">
                    { for destinations.iter().map(|destination| html! {
                        <NavLink
                            destination={destination.clone()}
                            class={overlay_class(destination)}
                            on_select={select.clone()}
                        />
                    }) }
                </nav>
            </div>
        </>
    }
}
