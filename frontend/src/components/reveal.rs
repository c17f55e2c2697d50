use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::navigation::dom::observe_element;

/// Returns a node ref to attach to a section and whether that section has
/// been on screen yet. Once revealed it stays revealed.
/// Reveals immediately when the element cannot be observed.
#[hook]
pub fn use_in_view(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = match node.cast::<Element>() {
                    Some(element) => {
                        let on_enter = {
                            let revealed = revealed.clone();
                            Box::new(move || revealed.set(true))
                        };
                        match observe_element(&element, threshold, on_enter) {
                            Ok(subscription) => Some(subscription),
                            Err(err) => {
                                warn!("Revealing section without animation: {}", err);
                                revealed.set(true);
                                None
                            }
                        }
                    }
                    None => {
                        revealed.set(true);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    (node, *revealed)
}

pub fn reveal_class(revealed: bool) -> Classes {
    classes!("reveal", revealed.then_some("revealed"))
}
