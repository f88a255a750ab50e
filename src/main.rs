//! Main module for the Buckshot Roulette shot tracker using Yew.
//! Wires UI components, state hooks, and the rebuild effect.

use log::info;
use shot_tracker::{defaults::MAX_SHOTS, mark_shot, rebuild_shots, ShotState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{render_shot_grid, CountCard, ShotSlider};
use config::*;
use utils::parse_shot_count;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let live_shots = use_state(|| DEFAULT_LIVE_SHOTS);
    let blank_shots = use_state(|| DEFAULT_BLANK_SHOTS);
    let shots = use_state(Vec::<ShotState>::new);
    // Index of the indicator whose marking menu is open; None = all closed
    let open_menu = use_state(|| None::<usize>);

    // Rebuild the indicator list whenever either counter changes. Full
    // recompute, no diffing: every shell resets to Unmarked at the new
    // length, and any open menu may now point at a removed shell.
    {
        let shots = shots.clone();
        let open_menu = open_menu.clone();
        use_effect_with((*live_shots, *blank_shots), move |&(live, blank)| {
            shots.set(rebuild_shots(live, blank));
            open_menu.set(None);
            || ()
        });
    }

    let live_oninput = {
        let live_setter = live_shots.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(val) = parse_shot_count(&input.value()) {
                live_setter.set(val);
            }
        })
    };

    let blank_oninput = {
        let blank_setter = blank_shots.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(val) = parse_shot_count(&input.value()) {
                blank_setter.set(val);
            }
        })
    };

    // Clicking an indicator toggles its menu; clicking the one that is
    // already open closes it.
    let ontoggle = {
        let open_menu = open_menu.clone();
        Callback::from(move |index: usize| {
            if *open_menu == Some(index) {
                open_menu.set(None);
            } else {
                open_menu.set(Some(index));
            }
        })
    };

    let onmark = {
        let shots = shots.clone();
        let open_menu = open_menu.clone();
        Callback::from(move |(index, state): (usize, ShotState)| {
            shots.set(mark_shot(&shots, index, state));
            open_menu.set(None);
        })
    };

    let reset_all = {
        let live_shots = live_shots.clone();
        let blank_shots = blank_shots.clone();
        let shots = shots.clone();
        let open_menu = open_menu.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Reset all: clearing both counters and the shot list");
            live_shots.set(0);
            blank_shots.set(0);
            shots.set(Vec::new());
            open_menu.set(None);
        })
    };

    html! {
        <div class="container">
            <div class="tracker-card">
                <h1>{ APP_TITLE }</h1>

                <div class="count-grid">
                    <CountCard title={LIVE_CARD_TITLE} count={*live_shots} accent="count-live" />
                    <CountCard title={BLANK_CARD_TITLE} count={*blank_shots} accent="count-blank" />
                </div>

                <div class="slider-section">
                    <ShotSlider
                        id="live-shots"
                        label="LIVE SHOTS"
                        max={MAX_SHOTS}
                        value={*live_shots}
                        oninput={live_oninput}
                    />
                    <ShotSlider
                        id="blank-shots"
                        label="BLANK SHOTS"
                        max={MAX_SHOTS}
                        value={*blank_shots}
                        oninput={blank_oninput}
                    />
                </div>

                { render_shot_grid(&shots, *open_menu, ontoggle, onmark) }

                <button class="btn-reset" onclick={reset_all}>
                    { "Reset All" }
                </button>
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
