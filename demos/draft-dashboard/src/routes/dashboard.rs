use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::response::Html;
use draft_analysis::config::{KEYWORD_TOP_N, KEYWORD_TOP_N_DENSE};
use draft_analysis::filter::{rarity_options, ManaSlider};
use draft_analysis::{render_dashboard, ColorLabel, NormalizedCard};
use maud::{html, Markup, DOCTYPE};

use crate::error::AppError;
use crate::params::{DashboardParams, SUBMITTED_KEY};
use crate::state::AppState;
use crate::surface::HtmlSurface;

const STYLE: &str = "
body { font-family: sans-serif; display: flex; gap: 2rem; margin: 1rem; }
aside { min-width: 14rem; }
fieldset { margin-bottom: 0.75rem; }
.caption { color: #666; font-size: 0.85em; }
.notice { background: #eef4fb; padding: 0.5rem 0.75rem; border-radius: 4px; }
.chart { margin: 0 0 1.5rem 0; max-width: 36rem; }
.bar-row { display: flex; align-items: center; gap: 0.5rem; }
.bar-label { width: 9rem; text-align: right; }
.bar { background: #524ed2; height: 0.9rem; display: inline-block; }
.cards { border-collapse: collapse; font-size: 0.85em; }
.cards td, .cards th { border: 1px solid #ddd; padding: 2px 6px; vertical-align: top; }
.cards .text { white-space: pre-line; }
";

/// GET /?rarity=common&color=Blue&type=creature&show_table=on
///
/// The filter form next to the rendered dashboard.
pub async fn page(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, AppError> {
    let table = state.session.table().await?;
    let params = DashboardParams::parse(query.as_deref(), &table, state.settings.keyword_top_n)?;

    let dashboard = state
        .session
        .dashboard(params.criteria.clone(), params.top_n)
        .await?;
    let rows = if params.show_table {
        Some(state.session.rows(params.criteria.clone()).await?)
    } else {
        None
    };

    let title = format!("Draft analysis: {}", state.settings.set_code.to_uppercase());
    let mut surface = HtmlSurface::default();
    render_dashboard(&mut surface, &title, &dashboard, rows.as_deref());

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                aside { (filter_form(&table, &params)) }
                main {
                    p { (dashboard.total_cards) " cards match." }
                    @for part in surface.into_parts() { (part) }
                }
            }
        }
    };
    Ok(Html(markup.into_string()))
}

fn filter_form(table: &[NormalizedCard], params: &DashboardParams) -> Markup {
    let criteria = &params.criteria;
    let slider = ManaSlider::for_table(table);
    let range = params.mana_range();

    html! {
        form method="get" action="/" {
            input type="hidden" name=(SUBMITTED_KEY) value="1";
            h2 { "Filters" }

            fieldset {
                legend { "Rarity" }
                @for rarity in rarity_options(table) {
                    label {
                        input type="checkbox" name="rarity" value=(rarity)
                            checked[criteria.rarities.contains(&rarity)];
                        " " (rarity)
                    }
                    br;
                }
            }

            fieldset {
                legend { "Colors" }
                @for label in ColorLabel::ALL {
                    label {
                        input type="checkbox" name="color" value=(label)
                            checked[criteria.colors.contains(&label)];
                        " " (label)
                    }
                    br;
                }
            }

            fieldset {
                legend { "Type contains" }
                input type="text" name="type" value=(criteria.type_contains);
            }

            fieldset {
                legend { "Name or text" }
                input type="text" name="text" value=(criteria.text_contains);
            }

            fieldset {
                legend { "Mana value" }
                input type="number" name="mv_min" min=(slider.min) max=(slider.max) step="1" value=(range.lo);
                " to "
                input type="number" name="mv_max" min=(slider.min) max=(slider.max) step="1" value=(range.hi);
            }

            fieldset {
                legend { "Layout" }
                label {
                    input type="checkbox" name="show_table" value="on" checked[params.show_table];
                    " Show filtered cards"
                }
                br;
                label {
                    input type="checkbox" name="top_n" value=(KEYWORD_TOP_N_DENSE)
                        checked[params.top_n == KEYWORD_TOP_N_DENSE];
                    " Top " (KEYWORD_TOP_N_DENSE) " keywords (default " (KEYWORD_TOP_N) ")"
                }
            }

            button type="submit" { "Apply" }
        }
    }
}
