//! Win Rate Chart
//!
//! Hero win rates as an SVG bar chart. Stateless: a pure function of the
//! input data to rendered markup, re-run whenever the data signal changes.

use leptos::*;

/// One bar of chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct WinRateDatum {
    pub name: String,
    pub win_rate: f64,
}

/// Fill for bars at or above even odds.
const WIN_FILL: &str = "#4CAF50";
/// Fill for bars below it.
const LOSS_FILL: &str = "#F44336";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 60.0;

const INNER_WIDTH: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const INNER_HEIGHT: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Band-scale padding, as a fraction of the step.
const BAND_PADDING: f64 = 0.1;

/// Computed geometry for a single bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub label: String,
}

/// Lay the data out as bars: ordinal X over the datum names, linear Y over
/// the fixed [0, 1] win-rate domain (inverted, SVG y grows downward).
/// Win rates outside [0, 1] are clamped.
pub fn layout_bars(data: &[WinRateDatum], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }

    let step = width / (data.len() as f64 + BAND_PADDING);
    let band = step * (1.0 - BAND_PADDING);

    data.iter()
        .enumerate()
        .map(|(i, datum)| {
            let rate = datum.win_rate.clamp(0.0, 1.0);
            let y = height * (1.0 - rate);
            Bar {
                name: datum.name.clone(),
                x: step * BAND_PADDING + i as f64 * step,
                y,
                width: band,
                height: height - y,
                fill: if rate >= 0.5 { WIN_FILL } else { LOSS_FILL },
                label: format!("{:.1}%", rate * 100.0),
            }
        })
        .collect()
}

/// Win-rate bar chart component
#[component]
pub fn WinRateChart(#[prop(into)] data: Signal<Vec<WinRateDatum>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            {move || {
                let data = data.get();
                if data.is_empty() {
                    return view! {
                        <div class="h-64 flex items-center justify-center text-gray-500">
                            "No win rate data"
                        </div>
                    }
                    .into_view();
                }

                let bars = layout_bars(&data, INNER_WIDTH, INNER_HEIGHT);

                view! {
                    <svg
                        viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                        class="w-full h-auto rounded-lg bg-gray-800"
                    >
                        <g transform=format!("translate({},{})", MARGIN_LEFT, MARGIN_TOP)>
                            // Gridlines and y-axis tick labels, 0% to 100%
                            {(0..=4)
                                .map(|tick| {
                                    let frac = tick as f64 / 4.0;
                                    let y = INNER_HEIGHT * (1.0 - frac);
                                    view! {
                                        <g>
                                            <line
                                                x1={0.0}
                                                y1={y}
                                                x2={INNER_WIDTH}
                                                y2={y}
                                                stroke="#374151"
                                                stroke-width={1.0}
                                            />
                                            <text
                                                x={-10.0}
                                                y={y + 4.0}
                                                fill="#9ca3af"
                                                font-size="12"
                                                text-anchor="end"
                                            >
                                                {format!("{:.0}%", frac * 100.0)}
                                            </text>
                                        </g>
                                    }
                                })
                                .collect_view()}

                            // Y-axis label
                            <text
                                transform="rotate(-90)"
                                x={-(INNER_HEIGHT / 2.0)}
                                y={-40.0}
                                fill="#9ca3af"
                                font-size="13"
                                text-anchor="middle"
                            >
                                "Win Rate"
                            </text>

                            // Bars with value labels and rotated x-axis labels
                            {bars
                                .into_iter()
                                .map(|bar| {
                                    let center = bar.x + bar.width / 2.0;
                                    view! {
                                        <g>
                                            <rect
                                                x={bar.x}
                                                y={bar.y}
                                                width={bar.width}
                                                height={bar.height}
                                                fill=bar.fill
                                            />
                                            <text
                                                x={center}
                                                y={bar.y - 5.0}
                                                fill="#e5e7eb"
                                                font-size="12"
                                                text-anchor="middle"
                                            >
                                                {bar.label.clone()}
                                            </text>
                                            <text
                                                transform=format!(
                                                    "translate({},{}) rotate(-45)",
                                                    center,
                                                    INNER_HEIGHT + 14.0
                                                )
                                                fill="#9ca3af"
                                                font-size="12"
                                                text-anchor="end"
                                            >
                                                {bar.name.clone()}
                                            </text>
                                        </g>
                                    }
                                })
                                .collect_view()}
                        </g>
                    </svg>
                }
                .into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(name: &str, win_rate: f64) -> WinRateDatum {
        WinRateDatum {
            name: name.to_string(),
            win_rate,
        }
    }

    #[test]
    fn threshold_colors_and_percentage_labels() {
        let bars = layout_bars(&[datum("A", 0.6), datum("B", 0.3)], 710.0, 340.0);
        assert_eq!(bars[0].fill, WIN_FILL);
        assert_eq!(bars[0].label, "60.0%");
        assert_eq!(bars[1].fill, LOSS_FILL);
        assert_eq!(bars[1].label, "30.0%");
    }

    #[test]
    fn even_odds_counts_as_winning() {
        let bars = layout_bars(&[datum("A", 0.5)], 710.0, 340.0);
        assert_eq!(bars[0].fill, WIN_FILL);
    }

    #[test]
    fn bands_are_ordered_and_do_not_overlap() {
        let data: Vec<_> = (0..5).map(|i| datum(&format!("H{}", i), 0.5)).collect();
        let bars = layout_bars(&data, 710.0, 340.0);
        for pair in bars.windows(2) {
            assert!(pair[0].x + pair[0].width < pair[1].x + 1e-9);
        }
    }

    #[test]
    fn extremes_span_the_full_and_empty_height() {
        let bars = layout_bars(&[datum("sure", 1.0), datum("never", 0.0)], 710.0, 340.0);
        assert!(bars[0].y.abs() < 1e-9);
        assert!((bars[0].height - 340.0).abs() < 1e-9);
        assert!(bars[1].height.abs() < 1e-9);
    }

    #[test]
    fn out_of_range_rates_are_clamped() {
        let bars = layout_bars(&[datum("hot", 1.4)], 710.0, 340.0);
        assert_eq!(bars[0].label, "100.0%");
        assert!((bars[0].height - 340.0).abs() < 1e-9);
    }

    #[test]
    fn empty_data_lays_out_nothing() {
        assert!(layout_bars(&[], 710.0, 340.0).is_empty());
    }
}
