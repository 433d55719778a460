//! HTML rendering surface: collects maud fragments in call order.

use draft_analysis::{CardRow, CountSeries, Surface};
use maud::{html, Markup};

#[derive(Default)]
pub struct HtmlSurface {
    parts: Vec<Markup>,
}

impl HtmlSurface {
    pub fn into_parts(self) -> Vec<Markup> {
        self.parts
    }
}

impl Surface for HtmlSurface {
    fn heading(&mut self, text: &str) {
        self.parts.push(html! { h2 { (text) } });
    }

    fn caption(&mut self, text: &str) {
        self.parts.push(html! { p class="caption" { (text) } });
    }

    fn notice(&mut self, text: &str) {
        self.parts.push(html! { p class="notice" { (text) } });
    }

    fn bar_chart(&mut self, series: &CountSeries) {
        let max = series.max_count().max(1);
        self.parts.push(html! {
            figure class="chart" {
                figcaption { (series.x_label) " / " (series.y_label) }
                @for point in &series.points {
                    div class="bar-row" {
                        span class="bar-label" { (point.label) }
                        span class="bar" style=(format!("width: {}%", point.count * 100 / max)) {}
                        span class="bar-count" { (point.count) }
                    }
                }
            }
        });
    }

    fn card_table(&mut self, rows: &[CardRow]) {
        self.parts.push(html! {
            table class="cards" {
                thead {
                    tr {
                        th { "Name" } th { "Cost" } th { "MV" } th { "Color" } th { "Type" }
                        th { "Rarity" } th { "P" } th { "T" } th { "Text" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.name) }
                            td { (row.mana_cost.as_deref().unwrap_or("")) }
                            td { @if let Some(mv) = row.mana_value { (mv) } }
                            td { (row.color_label) }
                            td { (row.type_line.as_deref().unwrap_or("")) }
                            td { (row.rarity.as_deref().unwrap_or("")) }
                            td { (row.power.as_deref().unwrap_or("")) }
                            td { (row.toughness.as_deref().unwrap_or("")) }
                            td class="text" { (row.rules_text) }
                        }
                    }
                }
            }
        });
    }
}
