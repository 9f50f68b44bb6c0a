//! Custom wheel: predefined name toggles plus temporary names.

use crate::components::wheel::Wheel;
use crate::dom;
use teyspin_engine::{CustomWheelSession, PickOutcome};
use web_sys::HtmlInputElement;
use yew::events::{Event, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[function_component(CustomWheelPage)]
pub fn custom_wheel_page() -> Html {
    let session = use_state(|| CustomWheelSession::new(dom::entropy()));
    let name_input = use_state(String::new);
    let show_popup = use_state(|| false);

    let entries = session.entries();
    let active_count = entries.len();

    let add_name = {
        let session = session.clone();
        let name_input = name_input.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            // Empty and duplicate names are silent no-ops; the input is
            // only cleared when the add goes through.
            if next.add_name(&name_input).is_ok() {
                session.set(next);
                name_input.set(String::new());
            }
        })
    };

    let on_add_click = {
        let add_name = add_name.clone();
        Callback::from(move |_: MouseEvent| add_name.emit(()))
    };
    let on_input_key = {
        let add_name = add_name.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                add_name.emit(());
            }
        })
    };
    let on_input = {
        let name_input = name_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name_input.set(input.value());
            }
        })
    };
    let on_spin = {
        let session = session.clone();
        let show_popup = show_popup.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            if next.request_pick() == PickOutcome::Disclosed {
                session.set(next);
                show_popup.set(true);
            }
        })
    };
    let on_close_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_: MouseEvent| show_popup.set(false))
    };

    html! {
        <div class="roulette-page">
            <div class="header">
                <h1>{ "🎰 Custom Wheel" }</h1>
                <p>{ "Spin the wheel to randomly select a person!" }</p>
            </div>

            <div class="main-content">
                <div class="custom-wheel-controls">
                    <div class="predefined-options">
                        <h3>{ "Select People for Wheel:" }</h3>
                        <div class="checkbox-group">
                            { for session.pool().predefined().map(|(name, enabled)| {
                                let name = name.to_string();
                                let onchange = {
                                    let session = session.clone();
                                    let name = name.clone();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*session).clone();
                                        next.toggle_name(&name);
                                        session.set(next);
                                    })
                                };
                                html! {
                                    <label key={name.clone()} class="checkbox-label">
                                        <input type="checkbox" checked={enabled} onchange={onchange} />
                                        <span>{ name }</span>
                                    </label>
                                }
                            }).collect::<Vec<_>>() }
                        </div>
                    </div>

                    <div class="temp-people-section">
                        <h3>{ "Add Temporary People:" }</h3>
                        <div class="add-person-form">
                            <input
                                type="text"
                                value={(*name_input).clone()}
                                oninput={on_input}
                                onkeypress={on_input_key}
                                placeholder="Enter name..."
                            />
                            <button onclick={on_add_click}>{ "Add" }</button>
                        </div>

                        { if session.pool().temporary().is_empty() {
                            Html::default()
                        } else {
                            html! {
                                <div class="temp-people-list">
                                    <h4>{ "Temporary People:" }</h4>
                                    { for session.pool().temporary().iter().map(|person| {
                                        let onclick = {
                                            let session = session.clone();
                                            let person = person.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                let mut next = (*session).clone();
                                                next.remove_name(&person);
                                                session.set(next);
                                            })
                                        };
                                        html! {
                                            <div key={person.clone()} class="temp-person-item">
                                                <span>{ person }</span>
                                                <button class="remove-btn" {onclick}>{ "×" }</button>
                                            </div>
                                        }
                                    }).collect::<Vec<_>>() }
                                </div>
                            }
                        } }
                    </div>

                    <div class="wheel-status">
                        <strong>{ active_count }</strong>
                        { if active_count == 1 { " person in wheel" } else { " persons in wheel" } }
                    </div>
                </div>

                <div class="wheel-container">
                    <Wheel
                        items={entries}
                        selected={session.selection().map(str::to_string)}
                        empty_message={"No people selected for the wheel".to_string()}
                    />
                    <button class="spin-button" onclick={on_spin} disabled={!session.can_pick()}>
                        { if active_count == 0 { "No People Available" } else { "Spin the Wheel!" } }
                    </button>
                </div>
            </div>

            { if let (true, Some(person)) = (*show_popup, session.selection()) {
                html! {
                    <div class="popup-overlay" onclick={on_close_popup.clone()}>
                        <div
                            class="popup-content"
                            onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                        >
                            <button class="popup-close" onclick={on_close_popup.clone()}>{ "×" }</button>
                            <h2>{ "🎉 Selected Person!" }</h2>
                            <div class="character-info">
                                <h3>{ person }</h3>
                            </div>
                            <button class="popup-close-btn" onclick={on_close_popup.clone()}>
                                { "Close" }
                            </button>
                        </div>
                    </div>
                }
            } else {
                Html::default()
            } }
        </div>
    }
}
