use yew::prelude::*;

use crate::components::reveal::AnimatedSection;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    #[prop_or_default]
    pub class: Classes,
    /// Reveal on scroll; the pricing page shows it statically.
    #[prop_or(true)]
    pub animated: bool,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let body = html! {
        <>
            <h3 class="font-serif text-4xl md:text-5xl font-bold mb-4">{"Ready to get serious?"}</h3>
            <p class="text-lg md:text-xl text-[#6E8C7D] mb-8">
                {"We'd love to hear about your property. Drop us a line, and let's see if we're a good fit. No pressure, just a conversation."}
            </p>
            <a href={config::contact_href()} class="inline-block bg-[#D36D47] text-white font-bold py-4 px-10 rounded-full hover:opacity-90 transition shadow-lg text-lg">
                {config::CONTACT_EMAIL}
            </a>
        </>
    };

    html! {
        <section id="contact" class={classes!("py-20", "md:py-32", props.class.clone())}>
            <div class="container mx-auto text-center max-w-3xl px-4">
                {
                    if props.animated {
                        html! { <AnimatedSection>{body}</AnimatedSection> }
                    } else {
                        body
                    }
                }
            </div>
        </section>
    }
}
