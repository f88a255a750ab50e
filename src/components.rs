//! Pure Yew view components for the shot tracker UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use shot_tracker::ShotState;
use yew::prelude::*;

/// Card displaying one category's current count in large type.
#[derive(Properties, PartialEq)]
pub struct CountCardProps {
    pub title: &'static str,
    pub count: usize,
    /// Extra class selecting the accent color ("count-live" or "count-blank").
    pub accent: &'static str,
}

#[function_component(CountCard)]
pub fn count_card(props: &CountCardProps) -> Html {
    html! {
        <div class="count-card">
            <h2 class="count-title">{ props.title }</h2>
            <p class={classes!("count-value", props.accent)}>{ props.count }</p>
        </div>
    }
}

/// Bounded slider for selecting a shell count.
#[derive(Properties, PartialEq)]
pub struct ShotSliderProps {
    pub id: &'static str,
    pub label: &'static str,
    pub max: usize,
    pub value: usize,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ShotSlider)]
pub fn shot_slider(props: &ShotSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id}>{ props.label }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={props.id}
                    min="0"
                    max={props.max.to_string()}
                    step="1"
                    value={props.value.to_string()}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{ format!("{}/{}", props.value, props.max) }</span>
            </div>
        </div>
    }
}

/// One clickable shell indicator with its marking menu.
///
/// The marker shows the tracked state by color. Clicking it toggles a small
/// popover with LIVE / BLANK / RESET buttons; each button marks exactly this
/// shell and closes the popover.
#[derive(Properties, PartialEq)]
pub struct ShotIndicatorProps {
    pub index: usize,
    pub state: ShotState,
    pub menu_open: bool,
    /// Emits the indicator's index when its marker is clicked.
    pub ontoggle: Callback<usize>,
    /// Emits `(index, new_state)` when a menu button is clicked.
    pub onmark: Callback<(usize, ShotState)>,
}

#[function_component(ShotIndicator)]
pub fn shot_indicator(props: &ShotIndicatorProps) -> Html {
    let index = props.index;

    let toggle = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |_: MouseEvent| ontoggle.emit(index))
    };

    let menu_button = |state: ShotState, class: &'static str| {
        let onmark = props.onmark.clone();
        let onclick = Callback::from(move |_: MouseEvent| onmark.emit((index, state)));
        let caption = match state {
            ShotState::Unmarked => "RESET",
            _ => state.label(),
        };
        html! {
            <button class={classes!("menu-button", class)} {onclick}>{ caption }</button>
        }
    };

    html! {
        <div class="shot-slot">
            <div
                class={classes!("shot-indicator", props.state.css_class())}
                role="button"
                aria-label={format!("Shot {}: {}", index + 1, props.state)}
                onclick={toggle}
            />
            if props.menu_open {
                <div class="shot-menu">
                    { menu_button(ShotState::Live, "menu-live") }
                    { menu_button(ShotState::Blank, "menu-blank") }
                    { menu_button(ShotState::Unmarked, "menu-reset") }
                </div>
            }
        </div>
    }
}

/// Renders the flex-wrapped row of shell indicators.
///
/// `open_menu` holds the index whose popover is currently open, if any.
pub fn render_shot_grid(
    shots: &[ShotState],
    open_menu: Option<usize>,
    ontoggle: Callback<usize>,
    onmark: Callback<(usize, ShotState)>,
) -> Html {
    html! {
        <div class="shot-grid">
            { shots.iter().enumerate().map(|(index, &state)| {
                html! {
                    <ShotIndicator
                        key={index}
                        {index}
                        {state}
                        menu_open={open_menu == Some(index)}
                        ontoggle={ontoggle.clone()}
                        onmark={onmark.clone()}
                    />
                }
            }).collect::<Html>() }
        </div>
    }
}
