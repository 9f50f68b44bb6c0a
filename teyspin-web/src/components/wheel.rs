//! SVG roulette wheel shared by all three pages.

use std::f64::consts::PI;
use yew::prelude::*;

const CENTER: f64 = 300.0;
const RADIUS: f64 = 290.0;
const LABEL_RADIUS: f64 = 150.0;

#[derive(Properties, PartialEq, Clone)]
pub struct WheelProps {
    /// Segment labels in pool order.
    pub items: Vec<String>,
    #[prop_or_default]
    pub spinning: bool,
    /// Accumulated rotation in degrees.
    #[prop_or_default]
    pub rotation: f64,
    /// Name of the segment to highlight, if a result is disclosed.
    #[prop_or_default]
    pub selected: Option<String>,
    pub empty_message: String,
}

fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (CENTER + radius * rad.cos(), CENTER + radius * rad.sin())
}

/// Pie-slice path for segment `index` of `count`.
fn segment_path(index: usize, count: usize) -> String {
    let angle_per_item = 360.0 / count as f64;
    let start = index as f64 * angle_per_item - 90.0;
    let end = (index as f64 + 1.0) * angle_per_item - 90.0;
    let large_arc = u8::from(angle_per_item > 180.0);
    let (start_x, start_y) = polar(start, RADIUS);
    let (end_x, end_y) = polar(end, RADIUS);
    format!(
        "M {CENTER} {CENTER} L {start_x} {start_y} A {RADIUS} {RADIUS} 0 {large_arc} 1 {end_x} {end_y} Z"
    )
}

fn segment_color(index: usize, count: usize) -> String {
    format!("hsl({}, 70%, 60%)", index * 360 / count)
}

/// Label size steps down as the wheel gets crowded.
const fn label_font_size(count: usize) -> u32 {
    if count > 30 {
        14
    } else if count > 20 {
        16
    } else {
        18
    }
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let count = props.items.len();
    if count == 0 {
        return html! {
            <div class="wheel empty-wheel">
                <p>{ &props.empty_message }</p>
            </div>
        };
    }

    let angle_per_item = 360.0 / count as f64;
    let transition = if props.spinning {
        "transform 3s cubic-bezier(0.17, 0.67, 0.12, 0.99)"
    } else {
        "none"
    };
    let style = format!(
        "transform: rotate({}deg); transition: {transition};",
        props.rotation
    );
    let font_size = label_font_size(count).to_string();

    html! {
        <div class="wheel-wrapper">
            <div class="wheel-pointer"></div>
            <svg
                class={classes!("wheel", props.spinning.then_some("spinning"))}
                viewBox="0 0 600 600"
                style={style}
            >
                <circle cx="300" cy="300" r="290" fill="none" stroke="#333" stroke-width="3" />
                { for props.items.iter().enumerate().map(|(index, name)| {
                    let mid = (index as f64 + 0.5) * angle_per_item - 90.0;
                    let (label_x, label_y) = polar(mid, LABEL_RADIUS);
                    let is_selected = props.selected.as_deref() == Some(name.as_str());
                    let fill = if is_selected {
                        "#ff6b6b".to_string()
                    } else {
                        segment_color(index, count)
                    };
                    html! {
                        <g key={name.clone()}>
                            <path
                                d={segment_path(index, count)}
                                fill={fill}
                                stroke="#fff"
                                stroke-width="3"
                                class={is_selected.then_some("selected-segment")}
                            />
                            <text
                                x={label_x.to_string()}
                                y={label_y.to_string()}
                                text-anchor="middle"
                                dominant-baseline="middle"
                                fill="#fff"
                                font-size={font_size.clone()}
                                font-weight="bold"
                                class="wheel-label"
                            >
                                { name }
                            </text>
                        </g>
                    }
                }) }
            </svg>
        </div>
    }
}
