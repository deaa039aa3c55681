use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CheckIcon)]
pub fn check_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckItemProps {
    #[prop_or_default]
    pub children: Children,
}

/// List row with a leading check mark.
#[function_component(CheckItem)]
pub fn check_item(props: &CheckItemProps) -> Html {
    html! {
        <li class="flex items-start">
            <CheckIcon class="w-6 h-6 text-[#88A096] mr-3 flex-shrink-0" />
            { for props.children.iter() }
        </li>
    }
}
