//! Character roulette: multi-select filters and a deferred-reveal spin.

use crate::components::wheel::Wheel;
use crate::dom;
use teyspin_engine::{
    AttrValue, Character, PickOutcome, SPIN_BASE_TURNS, SPIN_DURATION_MS, SPIN_EXTRA_TURNS,
    WheelSession,
};
use yew::events::MouseEvent;
use yew::prelude::*;

const FILTER_GROUPS: [(&str, &str); 5] = [
    ("weapon_type", "Weapon Type"),
    ("element", "Element"),
    ("nation", "Nation"),
    ("rarity", "Rarity"),
    ("roles", "Roles"),
];

/// Rarity tiers render as star runs, everything else as-is.
fn value_label(value: &AttrValue) -> String {
    match value.as_tier() {
        Some(tier) => "⭐".repeat(tier as usize),
        None => value.to_string(),
    }
}

fn filter_group(
    session: &UseStateHandle<WheelSession<Character>>,
    attribute: &'static str,
    label: &'static str,
) -> Html {
    let domain = session.domain_of(attribute);
    html! {
        <div class="filter-group">
            <label>{ label }</label>
            <div class="filter-buttons">
                { for domain.into_iter().map(|value| {
                    let active = session.filters().is_selected(attribute, &value);
                    let text = value_label(&value);
                    let onclick = {
                        let session = session.clone();
                        Callback::from(move |_| {
                            let mut next = (*session).clone();
                            next.toggle_filter(attribute, value.clone());
                            session.set(next);
                        })
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", active.then_some("active"))}
                            {onclick}
                        >
                            { text }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(CharacterRoulettePage)]
pub fn character_roulette_page() -> Html {
    let session = use_state(|| teyspin_engine::character_session(dom::entropy()));
    let rotation = use_state(|| 0.0_f64);
    let show_filters = use_state(|| false);
    let show_popup = use_state(|| false);

    // Page scrolling is suspended while the filter panel is open and
    // restored on close and on teardown.
    {
        let open = *show_filters;
        use_effect_with(open, move |open: &bool| {
            dom::set_body_scroll_locked(*open);
            move || dom::set_body_scroll_locked(false)
        });
    }

    let eligible_names: Vec<String> = session
        .eligible()
        .into_iter()
        .map(|character| character.name.clone())
        .collect();
    let eligible_count = eligible_names.len();
    let active_filters = session.filters().active_count();
    let spinning = session.is_spinning();

    let on_toggle_panel = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(!*show_filters))
    };
    let on_close_panel = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(false))
    };
    let on_clear_filters = {
        let session = session.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            next.clear_filters();
            session.set(next);
        })
    };
    let on_close_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_| show_popup.set(false))
    };

    let on_spin = {
        let session = session.clone();
        let rotation = rotation.clone();
        let show_popup = show_popup.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            show_popup.set(false);
            match next.request_pick() {
                PickOutcome::Started => {
                    // Cosmetic only: the winner is already committed above.
                    let turns = f64::from(SPIN_BASE_TURNS)
                        + js_sys::Math::random() * f64::from(SPIN_EXTRA_TURNS);
                    rotation.set(*rotation + 360.0 * turns + js_sys::Math::random() * 360.0);
                    let delay = next.spin_delay_ms().unwrap_or(SPIN_DURATION_MS);
                    session.set(next.clone());

                    // The committed session travels with the timer; the
                    // handle only ever sees render-time snapshots.
                    let session = session.clone();
                    let show_popup = show_popup.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(err) = dom::sleep_ms(delay as i32).await {
                            log::error!(
                                "spin timer failed: {}",
                                dom::js_error_message(&err)
                            );
                        }
                        let mut settled = next;
                        settled.complete_spin();
                        session.set(settled);
                        show_popup.set(true);
                    });
                }
                PickOutcome::Disclosed => {
                    session.set(next);
                    show_popup.set(true);
                }
                PickOutcome::EmptyPool | PickOutcome::Busy => {}
            }
        })
    };

    let spin_label = if spinning {
        "Spinning..."
    } else if eligible_count == 0 {
        "No Characters Available"
    } else {
        "Spin the Wheel!"
    };

    html! {
        <div class="roulette-page">
            <div class="header">
                <h1>{ "🎰 Teyvat Character Roulette" }</h1>
                <p>{ "Spin the wheel to randomly select a character!" }</p>
                <button class="toggle-filters-btn" onclick={on_toggle_panel}>
                    { if *show_filters { "▼ Hide Filters" } else { "▶ Show Filters" } }
                    { if active_filters > 0 {
                        html! { <span class="filter-badge">{ active_filters }</span> }
                    } else {
                        Html::default()
                    } }
                </button>
            </div>

            <div class="main-content">
                { if *show_filters {
                    html! {
                        <>
                            <div class="filters-overlay" onclick={on_close_panel.clone()}></div>
                            <div class="filters-panel">
                                <div class="filters-header">
                                    <h2>{ "Filters" }</h2>
                                    <div class="filters-header-actions">
                                        { if active_filters > 0 {
                                            html! {
                                                <button class="clear-filters-btn" onclick={on_clear_filters.clone()}>
                                                    { format!("Clear All ({active_filters})") }
                                                </button>
                                            }
                                        } else {
                                            Html::default()
                                        } }
                                        <button class="close-filters-btn" onclick={on_close_panel.clone()}>
                                            { "×" }
                                        </button>
                                    </div>
                                </div>
                                { for FILTER_GROUPS.into_iter().map(|(attribute, label)| {
                                    filter_group(&session, attribute, label)
                                }) }
                                <div class="character-count">
                                    <strong>{ eligible_count }</strong>
                                    { if eligible_count == 1 { " character available" } else { " characters available" } }
                                </div>
                            </div>
                        </>
                    }
                } else {
                    Html::default()
                } }

                <div class="wheel-container">
                    <Wheel
                        items={eligible_names}
                        spinning={spinning}
                        rotation={*rotation}
                        selected={session.selection().map(|character| character.name.clone())}
                        empty_message={"No characters match the selected filters".to_string()}
                    />
                    <button class="spin-button" onclick={on_spin} disabled={!session.can_pick()}>
                        { spin_label }
                    </button>
                </div>
            </div>

            { if let (true, Some(chosen)) = (*show_popup, session.selection()) {
                let rarity_stars = "⭐".repeat(chosen.rarity as usize);
                html! {
                    <div class="popup-overlay" onclick={on_close_popup.clone()}>
                        <div
                            class="popup-content"
                            onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                        >
                            <button class="popup-close" onclick={on_close_popup.clone()}>{ "×" }</button>
                            <h2>{ "🎉 Selected Character!" }</h2>
                            <div class="character-info">
                                <h3>{ &chosen.name }</h3>
                                <div class="character-details">
                                    <span class="badge element-badge">{ &chosen.element }</span>
                                    <span class="badge weapon-badge">{ &chosen.weapon_type }</span>
                                    <span class="badge nation-badge">{ &chosen.nation }</span>
                                    <span class="badge rarity-badge">{ rarity_stars }</span>
                                </div>
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
