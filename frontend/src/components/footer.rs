use yew::prelude::*;
use chrono::Datelike;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="bg-[#2C4A3F] text-white py-12">
            <div class="container mx-auto text-center">
                <h3 class="font-serif text-3xl font-bold mb-4">{config::BRAND_NAME}</h3>
                <p class="text-[#DDE5DB]">{config::TAGLINE}</p>
                <p class="text-[#88A096] text-sm mt-8">
                    {format!("© {} {}. All Rights Reserved. | {}", year, config::BRAND_NAME, config::SERVICE_AREA)}
                </p>
            </div>
        </footer>
    }
}
