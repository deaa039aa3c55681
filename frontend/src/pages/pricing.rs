use yew::prelude::*;

use crate::components::{
    contact::ContactSection,
    footer::Footer,
    icons::CheckItem,
    reveal::Entrance,
};
use crate::site::{Plan, PLANS, PLAN_DELAYS};

fn plan_card(plan: &Plan) -> Html {
    let (card, muted) = if plan.featured {
        ("bg-[#2C4A3F] text-white p-8 rounded-lg shadow-xl ring-4 ring-[#D36D47] flex flex-col h-full", "text-[#DDE5DB]")
    } else {
        ("bg-white p-8 rounded-lg shadow-sm border border-gray-200 flex flex-col h-full", "text-[#6E8C7D]")
    };

    html! {
        <div id={plan.id} class={card}>
            <h3 class="font-serif text-3xl font-bold mb-2">{plan.name}</h3>
            <p class={classes!(muted, "mb-6")}>{plan.audience}</p>
            <p class="font-serif text-4xl font-bold mb-2">{plan.price}</p>
            <p class={classes!(muted, "mb-8")}>{plan.billing}</p>
            <ul class="space-y-4 flex-grow">
                { for plan.features.iter().map(|feature| html! {
                    <CheckItem><strong>{*feature}</strong></CheckItem>
                }) }
            </ul>
            <a href="#contact" class="mt-8 w-full text-center bg-[#D36D47] text-white font-bold py-4 px-6 rounded-full hover:opacity-90 transition shadow-lg">
                {plan.cta}
            </a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="bg-[#F9F6F0] text-[#2C4A3F]">
            <main>
                <section id="pricing" class="py-20 md:py-32">
                    <div class="container mx-auto text-center px-4">
                        <Entrance>
                            <h2 class="font-serif text-4xl md:text-6xl font-bold mb-4">{"Clear pricing for ambitious hosts."}</h2>
                            <p class="text-lg md:text-xl text-[#6E8C7D] max-w-3xl mx-auto mb-16">
                                {"Our packages are designed as strategic investments in your property's success. No hidden fees, no jargon. Just results."}
                            </p>
                        </Entrance>

                        <div class="grid lg:grid-cols-3 gap-8 max-w-7xl mx-auto text-left">
                            { for PLANS.iter().zip(PLAN_DELAYS).map(|(plan, delay)| html! {
                                <Entrance {delay}>{plan_card(plan)}</Entrance>
                            }) }
                        </div>
                    </div>
                </section>

                <ContactSection class="bg-[#DDE5DB]" animated={false} />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="bg-[#F9F6F0] text-[#2C4A3F]">
            <main class="container mx-auto text-center px-4 py-32">
                <Entrance>
                    <h2 class="font-serif text-4xl md:text-6xl font-bold mb-4">{"Nothing to see here."}</h2>
                    <p class="text-lg md:text-xl text-[#6E8C7D]">{"The page you were looking for has moved or never existed."}</p>
                </Entrance>
            </main>
            <Footer />
        </div>
    }
}
