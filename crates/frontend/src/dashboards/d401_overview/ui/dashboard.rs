use contracts::dashboards::d401_overview::{OverviewCounts, ARCHIVED_RECORD_BASELINE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::dashboards::d401_overview::api;
use crate::routes::paths;
use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use crate::shared::page_frame::{PageCategory, PageFrame};

/// `"..."` until loaded
fn counter_text(value: Option<u64>) -> String {
    value.map(format_count).unwrap_or_else(|| "...".to_string())
}

/// Landing page: headline totals derived from the live product list
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let counts = RwSignal::new(None::<OverviewCounts>);

    spawn_local(async move {
        let loaded = match api::get_overview_counts().await {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Overview counts unavailable, showing zeros: {}", e);
                OverviewCounts::default()
            }
        };
        counts.try_set(Some(loaded));
    });

    let field = move |f: fn(&OverviewCounts) -> u64| {
        Signal::derive(move || counts.with(|c| c.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d401_overview--dashboard" category=PageCategory::Dashboard>
            <div class="page__content">
                <div class="overview-hero">
                    <div class="overview-hero__icon">{icon("database")}</div>
                    <div class="overview-hero__value">
                        {move || counter_text(field(OverviewCounts::aggregated_total).get())}
                    </div>
                    <div class="overview-hero__label">"total aggregated data"</div>
                </div>

                <div class="dashboard-grid">
                    <OverviewCard
                        title="Citywise Data Count"
                        icon_name="map-pin"
                        value=field(|c| c.city_count)
                        link=paths::REPORTS
                    />
                    <OverviewCard
                        title="Categorywise Data Count"
                        icon_name="tag"
                        value=field(|c| c.category_count)
                        link=paths::REPORTS
                    />
                    <OverviewCard
                        title="City wise Category data count"
                        icon_name="layers"
                        value=field(|c| c.city_category_count)
                        subtitle="unique intersections"
                        link=paths::REPORTS
                    />
                </div>

                <div class="dashboard-grid">
                    <OverviewCard
                        title="Historical Product Data"
                        icon_name="book"
                        value=Signal::derive(|| Some(ARCHIVED_RECORD_BASELINE))
                        subtitle="global historical records"
                    />
                    <OverviewCard
                        title="Live Listing Data"
                        icon_name="bar-chart"
                        value=field(|c| c.product_count)
                        subtitle="live google maps api"
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn OverviewCard(
    title: &'static str,
    icon_name: &'static str,
    value: Signal<Option<u64>>,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    #[prop(optional)]
    link: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{title}</div>
                <div class="stat-card__value">{move || counter_text(value.get())}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
                {link.map(|href| view! {
                    <A href=href attr:class="stat-card__link">"View report"</A>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_text() {
        assert_eq!(counter_text(None), "...");
        assert_eq!(counter_text(Some(0)), "0");
        assert_eq!(counter_text(Some(1_200_042)), "1,200,042");
    }
}
