//! Boss directory: select-based filters, instant reveal, card grid.

use crate::components::wheel::Wheel;
use crate::dom;
use teyspin_engine::{AttrValue, Boss, PickOutcome, WheelSession};
use web_sys::HtmlSelectElement;
use yew::events::{Event, MouseEvent};
use yew::prelude::*;

/// Sentinel option meaning "no constraint" in a select control.
const ALL: &str = "all";

/// Capitalize each word of a lowercase data label ("world boss" -> "World Boss").
fn format_label(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace an attribute's whole selection through the engine's toggle op:
/// drop what is selected, then select the new value unless it is the
/// "all" sentinel.
fn replace_selection(session: &mut WheelSession<Boss>, attribute: &str, value: &str) {
    let current: Vec<AttrValue> = session
        .filters()
        .selected(attribute)
        .map(|selection| selection.iter().cloned().collect())
        .unwrap_or_default();
    for selected in current {
        session.toggle_filter(attribute, selected);
    }
    if value != ALL {
        session.toggle_filter(attribute, AttrValue::text(value));
    }
}

fn selected_option(session: &WheelSession<Boss>, attribute: &str) -> String {
    session
        .filters()
        .selected(attribute)
        .and_then(|selection| selection.iter().next())
        .map_or_else(|| ALL.to_string(), ToString::to_string)
}

fn select_group(
    session: &UseStateHandle<WheelSession<Boss>>,
    attribute: &'static str,
    label: &'static str,
    all_label: &'static str,
) -> Html {
    let current = selected_option(session, attribute);
    let onchange = {
        let session = session.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target_dyn_into::<HtmlSelectElement>()
            else {
                return;
            };
            let mut next = (*session).clone();
            replace_selection(&mut next, attribute, &select.value());
            session.set(next);
        })
    };
    let select_id = format!("{attribute}-select");
    html! {
        <div class="select-group">
            <label for={select_id.clone()}>{ label }</label>
            <select id={select_id} name={attribute} onchange={onchange}>
                <option value={ALL} selected={current == ALL}>{ all_label }</option>
                { for session.domain_of(attribute).into_iter().map(|value| {
                    let text = value.to_string();
                    html! {
                        <option value={text.clone()} selected={current == text}>
                            { format_label(&text) }
                        </option>
                    }
                }) }
            </select>
        </div>
    }
}

#[function_component(BossDirectoryPage)]
pub fn boss_directory_page() -> Html {
    let session = use_state(|| teyspin_engine::boss_session(dom::entropy()));
    let show_popup = use_state(|| false);

    let eligible: Vec<Boss> = session.eligible().into_iter().cloned().collect();
    let eligible_names: Vec<String> = eligible.iter().map(|boss| boss.name.clone()).collect();
    let eligible_count = eligible.len();
    let unconstrained = session.filters().is_unconstrained();

    let on_clear = {
        let session = session.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            next.clear_filters();
            session.set(next);
        })
    };
    let on_spin = {
        let session = session.clone();
        let show_popup = show_popup.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            if next.request_pick() == PickOutcome::Disclosed {
                session.set(next);
                show_popup.set(true);
            }
        })
    };
    let on_close_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_| show_popup.set(false))
    };

    html! {
        <div class="bosses-page">
            <header class="bosses-header">
                <h1>{ "🗺️ Teyvat Boss Tracker" }</h1>
                <p>{ "Browse world bosses, weekly encounters, and local legends with quick filters for region and type." }</p>
            </header>

            <section class="bosses-tools">
                <div class="bosses-controls">
                    { select_group(&session, "region", "Region", "All Regions") }
                    { select_group(&session, "type", "Type", "All Types") }
                    <button class="bosses-clear" onclick={on_clear} disabled={unconstrained}>
                        { "Reset Filters" }
                    </button>
                </div>

                <div class="bosses-wheel">
                    <Wheel
                        items={eligible_names}
                        selected={session.selection().map(|boss| boss.name.clone())}
                        empty_message={"No bosses match the selected filters".to_string()}
                    />
                    <button
                        class="spin-button"
                        onclick={on_spin}
                        disabled={!session.can_pick()}
                    >
                        { if eligible_count == 0 { "No Bosses Available" } else { "Spin the Boss Roulette" } }
                    </button>

                    { if let Some(boss) = session.selection() {
                        html! {
                            <div class="bosses-selection">
                                <p>{ "Next target" }</p>
                                <h3>{ &boss.name }</h3>
                                <div class="bosses-selection-meta">
                                    <span>{ &boss.region }</span>
                                    <span>{ format_label(&boss.kind) }</span>
                                </div>
                            </div>
                        }
                    } else {
                        Html::default()
                    } }
                </div>
            </section>

            <p class="bosses-count">
                { "Showing " }<strong>{ eligible_count }</strong>
                { if eligible_count == 1 { " boss" } else { " bosses" } }
            </p>

            <section class="bosses-grid">
                { for eligible.iter().map(|boss| {
                    html! {
                        <article key={boss.name.clone()} class="boss-card">
                            <h3>{ &boss.name }</h3>
                            <div class="boss-badges">
                                <span class="badge boss-region">{ &boss.region }</span>
                                <span class="badge boss-type">{ format_label(&boss.kind) }</span>
                            </div>
                        </article>
                    }
                }) }
            </section>

            { if let (true, Some(boss)) = (*show_popup, session.selection()) {
                html! {
                    <div class="popup-overlay" onclick={on_close_popup.clone()}>
                        <div
                            class="popup-content"
                            onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                        >
                            <button class="popup-close" onclick={on_close_popup.clone()}>{ "×" }</button>
                            <h2>{ "🎯 Selected Boss" }</h2>
                            <div class="character-info">
                                <h3>{ &boss.name }</h3>
                                <div class="character-details">
                                    <span class="badge boss-region">{ &boss.region }</span>
                                    <span class="badge boss-type">{ format_label(&boss.kind) }</span>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_label_capitalizes_each_word() {
        assert_eq!(format_label("world boss"), "World Boss");
        assert_eq!(format_label("local legend"), "Local Legend");
        assert_eq!(format_label("Liyue"), "Liyue");
    }

    #[test]
    fn replace_selection_swaps_single_select_values() {
        let mut session = teyspin_engine::boss_session(1);
        replace_selection(&mut session, "region", "Liyue");
        assert_eq!(selected_option(&session, "region"), "Liyue");
        replace_selection(&mut session, "region", "Inazuma");
        assert_eq!(selected_option(&session, "region"), "Inazuma");
        assert_eq!(session.filters().active_count(), 1);
        replace_selection(&mut session, "region", ALL);
        assert_eq!(selected_option(&session, "region"), ALL);
        assert!(session.filters().is_unconstrained());
    }
}
