use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::navigation::section::SectionRegistry;

#[derive(Properties, PartialEq)]
pub struct BottomDockProps {
    pub registry: Rc<SectionRegistry>,
    pub active: &'static str,
    pub visible: bool,
    pub on_navigate: Callback<&'static str>,
}

/// Floating bottom navigation, shown once the page has been scrolled a bit.
#[function_component(BottomDock)]
pub fn bottom_dock(props: &BottomDockProps) -> Html {
    html! {
        <div class={classes!("bottom-dock", props.visible.then_some("shown"))}>
            {
                props.registry.sections().iter().map(|section| {
                    let id = section.id;
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(id))
                    };
                    html! {
                        <button
                            key={id}
                            type="button"
                            class={classes!("dock-item", (props.active == id).then_some("active"))}
                            {onclick}
                        >
                            {section.label}
                        </button>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .bottom-dock {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    z-index: 50;
                    display: flex;
                    gap: 0.5rem;
                    max-width: 92vw;
                    overflow-x: auto;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
                    opacity: 0;
                    transform: translateX(-50%) translateY(16px);
                    pointer-events: none;
                    transition: opacity 220ms ease, transform 220ms ease;
                }
                .bottom-dock.shown {
                    opacity: 1;
                    transform: translateX(-50%) translateY(0);
                    pointer-events: auto;
                }
                .dock-item {
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .dock-item:hover {
                    color: #a3e635;
                }
                .dock-item.active {
                    background: #a3e635;
                    color: #000000;
                }
                "#}
            </style>
        </div>
    }
}
