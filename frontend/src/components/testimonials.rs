use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Index of the visible testimonial. Always in range while `len > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

pub enum RotationAction {
    Advance,
    /// The item list changed length; start over from the first item.
    Resize(usize),
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// A single (or missing) testimonial never rotates.
    pub fn is_enabled(&self) -> bool {
        self.len > 1
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.len > 0 && i == self.index
    }

    pub fn advance(&self) -> Self {
        if self.len == 0 {
            return self.clone();
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RotationAction::Advance => Rc::new(self.advance()),
            RotationAction::Resize(len) if len == self.len => self,
            RotationAction::Resize(len) => Rc::new(Rotation::new(len)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let len = props.items.len();
    let rotation = use_reducer(move || Rotation::new(len));
    {
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |len| {
                rotation.dispatch(RotationAction::Resize(*len));
                || ()
            },
            len,
        );
    }

    // 0 ms keeps the interval unset.
    let millis = if rotation.is_enabled() {
        config::TESTIMONIAL_INTERVAL_MS
    } else {
        0
    };
    {
        let rotation = rotation.clone();
        use_interval(move || rotation.dispatch(RotationAction::Advance), millis);
    }

    html! {
        <div class="testimonial-slider">
            { for props.items.iter().enumerate().map(|(i, item)| html! {
                <div class={classes!("testimonial", rotation.is_active(i).then(|| "active"))}>
                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", item.quote)}</p>
                    <div class="testimonial-author">
                        <strong>{item.author}</strong>
                        <span>{item.role}</span>
                    </div>
                </div>
            }) }
            if rotation.is_enabled() {
                <div class="testimonial-dots">
                    { for (0..len).map(|i| html! {
                        <span class={classes!("dot", rotation.is_active(i).then(|| "active"))}></span>
                    }) }
                </div>
            }
        </div>
    }
}
