use log::warn;
use yew::prelude::*;

use crate::components::countries::GlobalLearners;
use crate::components::dock::BottomDock;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::learn::Learn;
use crate::components::mission::OurMission;
use crate::components::navbar::TopNav;
use crate::config::NavConfig;
use crate::navigation::controller::{NavigationController, NavigationState};
use crate::navigation::dom::DomViewport;
use crate::navigation::section::SectionRegistry;

#[function_component(Landing)]
pub fn landing() -> Html {
    let registry = use_memo(|_| SectionRegistry::landing(), ());
    let nav = {
        let registry = registry.clone();
        use_state(move || NavigationState::initial(&registry))
    };
    let controller = use_mut_ref(|| None::<NavigationController<DomViewport>>);

    // Mount the controller once; the destructor releases every listener.
    {
        let controller = controller.clone();
        let registry = registry.clone();
        let nav = nav.setter();
        use_effect_with_deps(
            move |_| {
                match DomViewport::new() {
                    Ok(viewport) => {
                        let mounted = NavigationController::mount(
                            viewport,
                            (*registry).clone(),
                            NavConfig::default(),
                            move |state: &NavigationState| nav.set(state.clone()),
                        );
                        *controller.borrow_mut() = Some(mounted);
                    }
                    Err(err) => warn!("Section navigation disabled: {}", err),
                }
                move || {
                    let mounted = controller.borrow_mut().take();
                    if let Some(mounted) = mounted {
                        mounted.teardown();
                    }
                }
            },
            (),
        );
    }

    let on_navigate = {
        let controller = controller.clone();
        Callback::from(move |id: &'static str| {
            if let Some(controller) = controller.borrow().as_ref() {
                controller.navigate_to(id);
            }
        })
    };

    let on_toggle_menu = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            if let Some(controller) = controller.borrow().as_ref() {
                controller.toggle_mobile_menu();
            }
        })
    };

    html! {
        <div class="landing-page">
            <div class="landing-background"></div>
            <div class="landing-content">
                <TopNav
                    registry={registry.clone()}
                    active={nav.navbar_section}
                    scrolled={nav.navbar_scrolled}
                    menu_open={nav.mobile_menu_open}
                    on_navigate={on_navigate.clone()}
                    on_toggle_menu={on_toggle_menu}
                />
                <Hero />
                <Learn />
                <GlobalLearners />
                <OurMission />
                <Footer />
            </div>
            <BottomDock
                registry={registry}
                active={nav.dock_section}
                visible={nav.chrome_visible}
                on_navigate={on_navigate}
            />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1a1d29;
                    color: #ffffff;
                    position: relative;
                    overflow: hidden;
                    font-family: 'DM Sans', sans-serif;
                }
                .landing-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #252a3a 0%, #1e2230 50%, #1a1d29 100%);
                    pointer-events: none;
                }
                .landing-content {
                    position: relative;
                    z-index: 10;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .accent {
                    color: #a3e635;
                }
                "#}
            </style>
        </div>
    }
}
