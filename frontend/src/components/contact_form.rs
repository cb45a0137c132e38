use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::assist::client::GeminiClient;
use crate::assist::flow::{self, AssistAction};
use crate::assist::prompts;
use crate::components::notification::{acknowledge, Acknowledgments, Notification};
use crate::config;

const THANK_YOU_MESSAGE: &str = "Thank you for your message!";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub enum FieldAction {
    Name(String),
    Email(String),
    Message(String),
    Reset,
}

impl Reducible for ContactFields {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FieldAction::Name(name) => next.name = name,
            FieldAction::Email(email) => next.email = email,
            FieldAction::Message(message) => next.message = message,
            FieldAction::Reset => next = ContactFields::default(),
        }
        Rc::new(next)
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let client = use_context::<GeminiClient>().unwrap_or_else(GeminiClient::from_config);
    let fields = use_reducer(ContactFields::default);
    let rewriting = use_state(|| false);
    let acks = use_reducer(Acknowledgments::default);

    // Nothing is sent anywhere; the form only acknowledges and resets.
    let onsubmit = {
        let fields = fields.clone();
        let acks = acks.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Contact form submitted");
            acknowledge(&acks);
            fields.dispatch(FieldAction::Reset);
        })
    };

    let on_rewrite = {
        let fields = fields.clone();
        let rewriting = rewriting.clone();
        Callback::from(move |_: MouseEvent| {
            let prompt = prompts::rewrite(&fields.message, config::DEVELOPER_NAME);
            let client = client.clone();
            let fields = fields.clone();
            let rewriting = rewriting.clone();
            spawn_local(async move {
                flow::run(&client, prompt, prompts::EMPTY_DRAFT_MESSAGE, |action| match action {
                    AssistAction::Rejected(message) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(message);
                        }
                    }
                    AssistAction::Started => rewriting.set(true),
                    AssistAction::Finished(text) => {
                        fields.dispatch(FieldAction::Message(text));
                        rewriting.set(false);
                    }
                })
                .await;
            });
        })
    };

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::Name(input.value()));
        })
    };
    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::Email(input.value()));
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::Message(input.value()));
        })
    };

    html! {
        <>
            <form id="contactForm" class="contact-form" {onsubmit}>
                <input
                    type="text"
                    placeholder="Your Name"
                    value={fields.name.clone()}
                    oninput={on_name}
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    value={fields.email.clone()}
                    oninput={on_email}
                />
                <textarea
                    id="contactMessage"
                    rows="6"
                    placeholder="Your Message"
                    value={fields.message.clone()}
                    oninput={on_message}
                />
                <div class="contact-assist">
                    <button
                        type="button"
                        id="contact-ai-btn"
                        class="btn btn-secondary"
                        onclick={on_rewrite}
                        disabled={*rewriting}
                    >
                        {"\u{2728} Help me write this"}
                    </button>
                    <div
                        id="contact-loader"
                        class="loader"
                        style={if *rewriting { "display: block;" } else { "display: none;" }}
                    ></div>
                </div>
                <button type="submit" class="btn btn-primary">{"Send Message"}</button>
            </form>
            { for acks.ids().enumerate().map(|(slot, id)| html! {
                <Notification key={id} message={THANK_YOU_MESSAGE} {slot} />
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(fields: ContactFields, action: FieldAction) -> ContactFields {
        (*Rc::new(fields).reduce(action)).clone()
    }

    #[test]
    fn edits_update_only_their_field() {
        let fields = apply(ContactFields::default(), FieldAction::Name("Ada".to_string()));
        let fields = apply(fields, FieldAction::Message("Hello".to_string()));
        assert_eq!(fields, ContactFields {
            name: "Ada".to_string(),
            email: String::new(),
            message: "Hello".to_string(),
        });
    }

    #[test]
    fn reset_clears_every_field() {
        let filled = ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Can you build me a site?".to_string(),
        };
        assert_eq!(apply(filled, FieldAction::Reset), ContactFields::default());
    }

    #[test]
    fn rewritten_text_replaces_the_draft() {
        let draft = ContactFields {
            message: "hey can u help".to_string(),
            ..ContactFields::default()
        };
        let fields = apply(draft, FieldAction::Message("Hi Som, could you help?".to_string()));
        assert_eq!(fields.message, "Hi Som, could you help?");
    }
}
