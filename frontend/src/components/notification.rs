use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Banners currently on screen, oldest first. Every banner lives for the
/// same fixed delay, so the oldest one is always the next to expire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Acknowledgments {
    shown: VecDeque<u32>,
    next_id: u32,
}

pub enum AckAction {
    Show,
    Expire,
}

impl Acknowledgments {
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.shown.iter().copied()
    }
}

impl Reducible for Acknowledgments {
    type Action = AckAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AckAction::Show => {
                next.shown.push_back(next.next_id);
                next.next_id = next.next_id.wrapping_add(1);
            }
            AckAction::Expire => {
                next.shown.pop_front();
            }
        }
        Rc::new(next)
    }
}

/// Shows a banner and schedules its removal.
pub fn acknowledge(acks: &UseReducerHandle<Acknowledgments>) {
    acks.dispatch(AckAction::Show);
    let acks = acks.clone();
    let timeout = Timeout::new(config::ACKNOWLEDGMENT_DISMISS_MS, move || {
        acks.dispatch(AckAction::Expire);
    });
    timeout.forget();
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: AttrValue,
    /// Position in the stack, so overlapping banners don't cover each other.
    #[prop_or_default]
    pub slot: usize,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let top = 20 + props.slot * 70;
    html! {
        <div
            class="notification-banner"
            role="status"
            style={format!("position: fixed; top: {}px; left: 50%; transform: translateX(-50%); padding: 1rem 2rem; background-color: var(--primary); color: white; border-radius: 5px; box-shadow: 0 4px 15px rgba(0,0,0,0.2); z-index: 1000;", top)}
        >
            {props.message.clone()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(acks: Acknowledgments, action: AckAction) -> Acknowledgments {
        (*Rc::new(acks).reduce(action)).clone()
    }

    #[test]
    fn show_then_expire_leaves_nothing() {
        let acks = apply(Acknowledgments::default(), AckAction::Show);
        assert_eq!(acks.ids().count(), 1);
        let acks = apply(acks, AckAction::Expire);
        assert_eq!(acks.ids().count(), 0);
    }

    #[test]
    fn overlapping_banners_expire_oldest_first() {
        let mut acks = Acknowledgments::default();
        for _ in 0..3 {
            acks = apply(acks, AckAction::Show);
        }
        assert_eq!(acks.ids().collect::<Vec<_>>(), vec![0, 1, 2]);

        acks = apply(acks, AckAction::Expire);
        assert_eq!(acks.ids().collect::<Vec<_>>(), vec![1, 2]);

        acks = apply(acks, AckAction::Show);
        assert_eq!(acks.ids().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn banners_are_dismissed_after_three_seconds() {
        assert_eq!(config::ACKNOWLEDGMENT_DISMISS_MS, 3_000);
    }

    #[test]
    fn expire_on_empty_is_a_no_op() {
        let acks = apply(Acknowledgments::default(), AckAction::Expire);
        assert_eq!(acks, Acknowledgments::default());
    }
}
