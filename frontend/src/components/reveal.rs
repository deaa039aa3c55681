use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;

use crate::config;
use crate::motion::{Motion, Offset, RevealConfig, RevealController, DEFAULT_DURATION_SECS, DEFAULT_THRESHOLD};
use crate::viewport::ViewportObserver;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Slides its children into place the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let controller = {
        let config = RevealConfig::scroll(props.delay, props.threshold);
        use_mut_ref(move || RevealController::new(config))
    };
    // Bumped on reveal so the new style gets rendered.
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let controller = controller.clone();
        let revealed = revealed.setter();
        use_effect_with_deps(move |_| {
            let threshold = controller.borrow().config().threshold();
            let on_sighting = {
                let controller = controller.clone();
                let revealed = revealed.clone();
                move |ratio: f64| {
                    // Release the borrow before set(), which may render synchronously.
                    let (started, done) = {
                        let mut controller = controller.borrow_mut();
                        (controller.observe(ratio).is_some(), !controller.is_watching())
                    };
                    if started {
                        revealed.set(true);
                    }
                    done
                }
            };

            let observer = match ViewportObserver::watch(&node, threshold, on_sighting) {
                Ok(observer) => Some(observer),
                Err(err) => {
                    debug!("scroll reveal unavailable: {}", err);
                    if controller.borrow_mut().fail_open() {
                        revealed.set(true);
                    }
                    None
                }
            };

            move || drop(observer)
        }, ());
    }

    let style = controller.borrow().style();

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EntranceProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(Offset::Y(40.0))]
    pub offset: Offset,
    #[prop_or(DEFAULT_DURATION_SECS)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Same one-shot reveal, started on mount instead of on scroll.
#[function_component(Entrance)]
pub fn entrance(props: &EntranceProps) -> Html {
    let controller = {
        let motion = Motion::new(props.offset, props.duration, props.delay);
        use_mut_ref(move || RevealController::new(RevealConfig::new(motion, DEFAULT_THRESHOLD)))
    };
    let revealed = use_state(|| false);

    {
        let controller = controller.clone();
        let revealed = revealed.setter();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::ENTRANCE_KICKOFF_MS, move || {
                if controller.borrow_mut().trigger().is_some() {
                    revealed.set(true);
                }
            });
            move || drop(timeout)
        }, ());
    }

    let style = controller.borrow().style();

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
