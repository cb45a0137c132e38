use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::assist::client::GeminiClient;
use crate::assist::flow::{self, AssistState};
use crate::assist::prompts;

#[function_component(Brainstormer)]
pub fn brainstormer() -> Html {
    let client = use_context::<GeminiClient>().unwrap_or_else(GeminiClient::from_config);
    let idea = use_state(String::new);
    let state = use_reducer(AssistState::default);

    let on_generate = {
        let idea = idea.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let prompt = prompts::brainstorm(&idea);
            let client = client.clone();
            let state = state.clone();
            spawn_local(async move {
                flow::run(&client, prompt, prompts::EMPTY_IDEA_MESSAGE, |action| {
                    state.dispatch(action)
                })
                .await;
            });
        })
    };

    let on_input = {
        let idea = idea.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            idea.set(input.value());
        })
    };

    html! {
        <div class="ai-brainstormer">
            <div class="ai-input-row">
                <input
                    type="text"
                    id="ai-idea-input"
                    placeholder="e.g. an app that helps neighbours share tools"
                    value={(*idea).clone()}
                    oninput={on_input}
                />
                <button
                    id="ai-idea-btn"
                    class="btn btn-primary"
                    onclick={on_generate}
                    disabled={state.loading}
                >
                    {"\u{2728} Brainstorm"}
                </button>
            </div>
            <div
                id="ai-loader"
                class="loader"
                style={if state.loading { "display: block;" } else { "display: none;" }}
            ></div>
            <div
                id="ai-results-container"
                class="ai-results-container"
                style={if state.output.is_some() { "display: block;" } else { "display: none;" }}
            >
                <div id="ai-results" class="ai-results">
                    {state.output.clone().unwrap_or_default()}
                </div>
            </div>
        </div>
    }
}
