use std::rc::Rc;

use yew::prelude::*;

use crate::assist::client::GeminiClient;

/// Loader flag and result text shared by an assist button and its output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssistState {
    pub loading: bool,
    /// `None` keeps the result panel hidden.
    pub output: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssistAction {
    /// Blank input; carries the message shown instead of calling out.
    Rejected(&'static str),
    Started,
    Finished(String),
}

impl Reducible for AssistState {
    type Action = AssistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            AssistAction::Rejected(message) => AssistState {
                loading: self.loading,
                output: Some(message.to_string()),
            },
            AssistAction::Started => AssistState {
                loading: true,
                output: None,
            },
            AssistAction::Finished(text) => AssistState {
                loading: false,
                output: Some(text),
            },
        };
        Rc::new(next)
    }
}

/// One click of an assist button. A `None` prompt is rejected without a
/// request; otherwise `Started` is always followed by `Finished`, whatever
/// the endpoint does.
pub async fn run<F>(client: &GeminiClient, prompt: Option<String>, empty_message: &'static str, dispatch: F)
where
    F: Fn(AssistAction),
{
    let Some(prompt) = prompt else {
        dispatch(AssistAction::Rejected(empty_message));
        return;
    };
    dispatch(AssistAction::Started);
    let text = client.generate(&prompt).await;
    dispatch(AssistAction::Finished(text));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::assist::client::mock::{MockTransport, Reply};
    use crate::assist::client::ERROR_FALLBACK;
    use crate::assist::prompts;

    fn click(reply: Reply, input: &str) -> (Vec<AssistAction>, AssistState, usize) {
        let transport = MockTransport::new(reply);
        let client = GeminiClient::new("https://example.test/generate".to_string(), transport.clone());
        let actions = RefCell::new(Vec::new());

        block_on(run(&client, prompts::brainstorm(input), prompts::EMPTY_IDEA_MESSAGE, |action| {
            actions.borrow_mut().push(action)
        }));

        let actions = actions.into_inner();
        let state = actions
            .iter()
            .cloned()
            .fold(Rc::new(AssistState::default()), |state, action| state.reduce(action));
        let calls = transport.calls.borrow().len();
        (actions, (*state).clone(), calls)
    }

    #[test]
    fn blank_idea_never_reaches_the_network() {
        let (actions, state, calls) = click(Reply::Respond(200, "{}"), "   ");
        assert_eq!(calls, 0);
        assert_eq!(actions, vec![AssistAction::Rejected(prompts::EMPTY_IDEA_MESSAGE)]);
        assert_eq!(state, AssistState {
            loading: false,
            output: Some(prompts::EMPTY_IDEA_MESSAGE.to_string()),
        });
    }

    #[test]
    fn failed_call_still_clears_the_loader() {
        let (actions, state, calls) = click(Reply::Fail, "a plant watering app");
        assert_eq!(calls, 1);
        assert_eq!(actions[0], AssistAction::Started);
        assert!(!state.loading);
        assert_eq!(state.output.as_deref(), Some(ERROR_FALLBACK));
    }

    #[test]
    fn successful_call_shows_generated_text() {
        let (_, state, calls) = click(
            Reply::Respond(200, r#"{"candidates":[{"content":{"parts":[{"text":"Concept: ..."}]}}]}"#),
            "a plant watering app",
        );
        assert_eq!(calls, 1);
        assert_eq!(state, AssistState {
            loading: false,
            output: Some("Concept: ...".to_string()),
        });
    }

    #[test]
    fn starting_shows_loader_and_hides_previous_result() {
        let state = Rc::new(AssistState {
            loading: false,
            output: Some("old".to_string()),
        });
        let state = state.reduce(AssistAction::Started);
        assert!(state.loading);
        assert_eq!(state.output, None);
    }

    #[test]
    fn overlapping_calls_keep_the_last_result() {
        let state = [
            AssistAction::Started,
            AssistAction::Started,
            AssistAction::Finished("first".to_string()),
            AssistAction::Finished("second".to_string()),
        ]
        .into_iter()
        .fold(Rc::new(AssistState::default()), |state, action| state.reduce(action));
        assert!(!state.loading);
        assert_eq!(state.output.as_deref(), Some("second"));
    }
}
