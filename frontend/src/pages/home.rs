use yew::prelude::*;

use crate::components::{
    contact::ContactSection,
    footer::Footer,
    icons::CheckItem,
    reveal::{AnimatedSection, Entrance},
};
use crate::motion::Offset;
use crate::site::{ServicePackage, Project, CARD_DELAYS, PROJECTS, SERVICE_PACKAGES};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1616046229478-9901c5536a45?auto=format&fit=crop&w=1000&q=80";
const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&fit=crop&w=1200&q=80";

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="relative h-screen min-h-[800px] flex items-center">
            <div class="container mx-auto flex h-full">
                <div class="w-full md:w-7/12 flex flex-col justify-center pt-24">
                    <div class="md:pr-12">
                        <Entrance delay={0.2}>
                            <h2 class="font-serif text-5xl md:text-7xl font-bold leading-tight mb-6">
                                {"Your property has potential."}<br/>{"We have a plan."}
                            </h2>
                        </Entrance>
                        <Entrance delay={0.4}>
                            <p class="text-xl md:text-2xl max-w-xl text-[#6E8C7D] mb-8">
                                {"A creative consultancy for short-term rental owners who think like investors. We turn good listings into great businesses."}
                            </p>
                        </Entrance>
                        <Entrance delay={0.6}>
                            <a href="#contact" class="inline-block bg-[#D36D47] text-white font-bold py-4 px-10 rounded-full hover:opacity-90 transition shadow-lg text-lg">
                                {"Start the Conversation"}
                            </a>
                        </Entrance>
                    </div>
                </div>
            </div>
            <div class="hidden md:block absolute top-0 right-0 w-5/12 h-full">
                <Entrance class="w-full h-full" offset={Offset::X(100.0)} duration={1.2}>
                    <img src={HERO_IMAGE} alt="Beautifully designed modern living room" class="w-full h-full object-cover"/>
                </Entrance>
            </div>
        </section>
    }
}

fn service_card(package: &ServicePackage) -> Html {
    let (card, pitch) = if package.featured {
        (
            "bg-[#2C4A3F] text-white p-8 rounded-lg shadow-xl h-full hover:-translate-y-2 transition-all duration-300 ring-4 ring-[#D36D47]",
            "text-[#DDE5DB] mb-6",
        )
    } else {
        (
            "bg-white p-8 rounded-lg shadow-sm h-full hover:shadow-2xl hover:-translate-y-2 transition-all duration-300",
            "text-[#6E8C7D] mb-6",
        )
    };

    html! {
        <div class={card}>
            <h4 class="font-serif text-3xl font-bold mb-3">{package.title}</h4>
            <p class={pitch}>{package.pitch}</p>
            <ul class="space-y-3">
                { for package.highlights.iter().map(|item| html! { <CheckItem>{*item}</CheckItem> }) }
            </ul>
        </div>
    }
}

fn project_tile(project: &Project) -> Html {
    html! {
        <div class="group relative overflow-hidden rounded-lg">
            <img src={project.image} alt={project.alt} class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"/>
            <div class="absolute inset-0 bg-black bg-opacity-40 flex items-end p-6">
                <h4 class="text-white font-bold text-xl">{project.name}</h4>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="bg-[#F9F6F0] text-[#2C4A3F]">
            <main>
                <Hero />

                <section id="services" class="py-20 md:py-32 bg-[#DDE5DB]">
                    <div class="container mx-auto text-center px-4">
                        <AnimatedSection>
                            <h3 class="font-serif text-4xl md:text-5xl font-bold mb-4">{"It’s a journey. We’re your guide."}</h3>
                            <p class="text-lg md:text-xl text-[#6E8C7D] max-w-2xl mx-auto mb-16">
                                {"Whether you're starting from scratch or know there's another gear, we have a playbook for your next move."}
                            </p>
                        </AnimatedSection>
                        <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto text-left">
                            { for SERVICE_PACKAGES.iter().zip(CARD_DELAYS).map(|(package, delay)| html! {
                                <AnimatedSection {delay}>{service_card(package)}</AnimatedSection>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="about" class="py-20 md:py-32">
                    <div class="container mx-auto grid md:grid-cols-2 gap-12 items-center px-4">
                        <AnimatedSection>
                            <div class="text-left">
                                <h3 class="font-serif text-4xl md:text-5xl font-bold mb-6">
                                    {"The right brain and the left brain. In the same room."}
                                </h3>
                                <p class="text-lg text-[#6E8C7D] mb-4">
                                    {"Most consultants are either creatives who don't get the numbers, or data nerds who miss the magic. We think that's a false choice."}
                                </p>
                                <p class="text-lg">
                                    {"YiMera was founded on a simple idea: what if you combined an "}
                                    <span class="font-bold text-[#D36D47]">{"Airbnb Lux inspector's eye for detail"}</span>
                                    {" with an "}
                                    <span class="font-bold text-[#D36D47]">{"NYU marketing professor's strategic mind?"}</span>
                                    {" You get us. Tom handles the pixels and the property. Junmian handles the plan and the profit."}
                                </p>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection delay={0.2}>
                            <img src={ABOUT_IMAGE} alt="Two founders collaborating" class="rounded-lg shadow-xl w-full h-full object-cover"/>
                        </AnimatedSection>
                    </div>
                </section>

                <section id="portfolio" class="py-20 md:py-32 bg-[#F9F6F0]">
                    <div class="container mx-auto text-center px-4">
                        <AnimatedSection>
                            <h3 class="font-serif text-4xl md:text-5xl font-bold mb-4">{"Spaces transformed. Stories told."}</h3>
                            <p class="text-lg md:text-xl text-[#6E8C7D] max-w-2xl mx-auto mb-16">
                                {"A few of our favorite projects that went from 'nice' to 'booked solid'."}
                            </p>
                        </AnimatedSection>
                        <div class="grid md:grid-cols-3 gap-4">
                            { for PROJECTS.iter().zip(CARD_DELAYS).map(|(project, delay)| html! {
                                <AnimatedSection {delay}>{project_tile(project)}</AnimatedSection>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="py-20 md:py-32 bg-[#DDE5DB]">
                    <div class="container mx-auto text-center max-w-3xl px-4">
                        <AnimatedSection>
                            <h3 class="font-serif text-4xl md:text-5xl font-bold mb-8">
                                {"\"Working with YiMera was the single best investment we've made for our rental.\""}
                            </h3>
                            <p class="text-lg font-semibold">{"- Sarah L., Host in Montauk, NY"}</p>
                        </AnimatedSection>
                    </div>
                </section>

                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
