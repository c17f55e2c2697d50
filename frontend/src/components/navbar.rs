use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::navigation::section::{SectionRegistry, CTA, HERO};

#[derive(Properties, PartialEq)]
pub struct TopNavProps {
    pub registry: Rc<SectionRegistry>,
    pub active: &'static str,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(TopNav)]
pub fn top_nav(props: &TopNavProps) -> Html {
    let TopNavProps {
        registry,
        active,
        scrolled,
        menu_open,
        on_navigate,
        on_toggle_menu,
    } = props;

    let go_to = |id: &'static str| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(id);
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <a href="#" class="nav-logo" onclick={go_to(HERO)}>
                {"Skill"}<span class="accent">{"Swap"}</span>
                <span class="nav-logo-dot"></span>
            </a>

            <div class="nav-links">
                {
                    registry.navbar_links().iter().map(|section| {
                        let is_active = *active == section.id;
                        html! {
                            <button
                                key={section.id}
                                class={classes!("nav-link", is_active.then_some("active"))}
                                onclick={go_to(section.id)}
                            >
                                {section.label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="nav-actions">
                <button class="nav-login">{"Log in"}</button>
                <button class="nav-cta" onclick={go_to(CTA)}>{"Get started"}</button>
            </div>

            <button
                class={classes!("burger-menu", menu_open.then_some("open"))}
                aria-label="Toggle menu"
                onclick={toggle_menu}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            {
                                registry.navbar_links().iter().map(|section| {
                                    let is_active = *active == section.id;
                                    html! {
                                        <button
                                            key={section.id}
                                            class={classes!("mobile-link", is_active.then_some("active"))}
                                            onclick={go_to(section.id)}
                                        >
                                            {section.label}
                                        </button>
                                    }
                                }).collect::<Html>()
                            }
                            <div class="mobile-actions">
                                <button class="nav-login">{"Log in"}</button>
                                <button class="nav-cta" onclick={go_to(CTA)}>{"Get started"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 4rem;
                    background: transparent;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    background: rgba(15, 17, 23, 0.85);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.28);
                }
                .nav-logo {
                    font-family: 'Syne', sans-serif;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #ffffff;
                    text-decoration: none;
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                }
                .nav-logo-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #a3e635;
                    opacity: 0.6;
                    margin-bottom: 0.9rem;
                }
                .nav-links {
                    display: flex;
                    gap: 0.125rem;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    padding: 0.375rem 0.5rem;
                }
                .nav-link, .mobile-link {
                    background: none;
                    border: none;
                    color: #d4d4d4;
                    font-size: 13.5px;
                    padding: 0.375rem 1.25rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .nav-link.active {
                    background: #a3e635;
                    color: #000000;
                    font-weight: 600;
                    box-shadow: 0 0 14px rgba(163, 230, 53, 0.5);
                }
                .nav-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .nav-login {
                    background: none;
                    border: none;
                    color: #d4d4d4;
                    cursor: pointer;
                    padding: 0.375rem 1.25rem;
                }
                .nav-cta {
                    font-family: 'Syne', sans-serif;
                    font-weight: 600;
                    color: #000000;
                    background: #a3e635;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.625rem 1.25rem;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 6px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                    transition: all 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(8px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-8px) rotate(-45deg);
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1.5rem 2rem;
                    background: rgba(15, 17, 23, 0.95);
                    backdrop-filter: blur(24px);
                }
                .mobile-link {
                    text-align: left;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                }
                .mobile-link.active {
                    background: rgba(163, 230, 53, 0.2);
                    color: #a3e635;
                    font-weight: 600;
                    border: 1px solid rgba(163, 230, 53, 0.3);
                }
                .mobile-actions {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }
                .mobile-actions button {
                    flex: 1;
                }
                @media (max-width: 768px) {
                    .top-nav {
                        padding: 0 2rem;
                    }
                    .nav-links, .nav-actions {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
