use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// True once the element's top edge has scrolled `REVEAL_OFFSET_PX` into
/// the viewport.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - config::REVEAL_OFFSET_PX
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view and leaves
/// them visible afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let check = move || {
                        let (Some(element), Some(win)) = (node.cast::<Element>(), web_sys::window()) else {
                            return;
                        };
                        let viewport_height = win
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or_default();
                        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
                            revealed.set(true);
                        }
                    };
                    // Initial call
                    check();
                    let callback = Closure::<dyn Fn()>::new(check);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let style = format!(
        "transition: opacity {0}ms ease, transform {0}ms ease; transition-delay: {1}ms;",
        config::REVEAL_DURATION_MS,
        props.delay_ms
    );

    html! {
        <div ref={node} class={classes!("reveal", (*revealed).then(|| "revealed"))} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_the_fold_stays_hidden() {
        assert!(!should_reveal(900.0, 800.0));
        assert!(!should_reveal(700.0, 800.0));
    }

    #[test]
    fn element_past_the_offset_is_revealed() {
        assert!(should_reveal(679.0, 800.0));
        assert!(should_reveal(-200.0, 800.0));
    }

    #[test]
    fn offset_boundary_is_exclusive() {
        assert!(!should_reveal(800.0 - config::REVEAL_OFFSET_PX, 800.0));
    }
}
