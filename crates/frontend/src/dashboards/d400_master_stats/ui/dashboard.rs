use contracts::dashboards::d400_master_stats::AggregatedStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use thaw::*;

use crate::dashboards::d400_master_stats::api;
use crate::dashboards::d400_master_stats::state::{
    quality_label, ranked_rows, LoadStatus, StatsView,
};
use crate::shared::components::notice_banner::NoticeBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ranked_table::RankedTable;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, percentage};
use crate::shared::page_frame::{PageCategory, PageFrame};

fn load(state: RwSignal<StatsView>, task_id: Option<String>) {
    let Some(seq) = state.try_update(|s| s.begin_load()) else {
        return;
    };
    spawn_local(async move {
        let result = api::get_master_stats(task_id.as_deref()).await;
        state.try_update(|s| s.complete(seq, result));
    });
}

/// Master data statistics, optionally scoped by `?task_id=`
#[component]
pub fn MasterStatsDashboard() -> impl IntoView {
    let query = use_query_map();
    let task_id = Memo::new(move |_| query.with(|q| q.get("task_id")));
    let state = RwSignal::new(StatsView::default());

    Effect::new(move |_| {
        load(state, task_id.get());
    });

    on_cleanup(move || {
        state.try_update_untracked(|s| s.teardown());
    });

    let stats = Memo::new(move |_| state.with(|s| s.display_stats()));
    let stale = Signal::derive(move || state.with(|s| s.status() == LoadStatus::Failed));
    let loading = Signal::derive(move || state.with(|s| s.status() == LoadStatus::Loading));

    let subtitle = Signal::derive(move || {
        task_id
            .get()
            .map(|t| format!("Scrape task {}", t))
            .or_else(|| Some("All sources".to_string()))
    });

    view! {
        <PageFrame page_id="d400_master_stats--dashboard" category=PageCategory::Dashboard>
            <PageHeader title="Master Data Report" subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load(state, task_id.get_untracked())
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || {
                    if state.with(|s| s.is_initial_load()) {
                        view! {
                            <div class="dashboard-loading">
                                <Spinner />
                                <h2>"Loading Live Data..."</h2>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <StatsBody stats=stats stale=stale state=state /> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn StatsBody(
    stats: Memo<AggregatedStats>,
    stale: Signal<bool>,
    state: RwSignal<StatsView>,
) -> impl IntoView {
    let count = move |f: fn(&AggregatedStats) -> u64| Signal::derive(move || stats.with(f));

    let sources = move || {
        let items = stats.with(|s| s.source_stats.clone());
        if items.is_empty() {
            return view! {
                <p class="dashboard-card__empty">"No source data available (0)."</p>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|s| {
                view! {
                    <div class="source-tile">
                        <div class="source-tile__label">{s.source.unwrap_or_else(|| "Unknown".to_string())}</div>
                        <div class="source-tile__value">{format_count(s.count)}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let city_rows = Signal::derive(move || {
        stats.with(|s| ranked_rows(s.city_counts.iter().map(|c| (c.city.as_deref(), c.count))))
    });
    let category_rows = Signal::derive(move || {
        stats.with(|s| {
            ranked_rows(
                s.category_counts
                    .iter()
                    .map(|c| (c.category.as_deref(), c.count)),
            )
        })
    });
    let city_category_rows = Signal::derive(move || {
        stats.with(|s| {
            s.top_city_categories
                .iter()
                .map(|r| {
                    vec![
                        r.city.clone().unwrap_or_else(|| "Unknown".to_string()),
                        r.category.clone().unwrap_or_else(|| "Unknown".to_string()),
                        format_count(r.count),
                    ]
                })
                .collect::<Vec<_>>()
        })
    });

    let total = count(|s| s.total_records);

    view! {
        <NoticeBanner
            title="Data Connection Issue"
            message=Signal::derive(move || state.with(|s| s.banner_message()))
        />

        <div class="dashboard-grid dashboard-grid--hero">
            <StatCard label="Total Master Records" icon_name="database" value=total stale=stale />
            <StatCard label="Unique Categories" icon_name="tag" value=count(|s| s.total_categories) stale=stale />
        </div>

        <div class="dashboard-grid">
            <StatCard
                label="Matched Cities"
                icon_name="check-circle"
                tone=CardTone::Success
                value=count(|s| s.city_match_status.matched)
                stale=stale
            />
            <StatCard
                label="Unmatched Cities"
                icon_name="x-circle"
                tone=CardTone::Error
                value=count(|s| s.city_match_status.unmatched)
                stale=stale
            />
            <StatCard label="Total Cities" icon_name="building" value=count(|s| s.total_cities) stale=stale />
            <StatCard label="Total Areas" icon_name="map-pin" value=count(|s| s.total_areas) stale=stale />
        </div>

        <div class="dashboard-card">
            <h3 class="dashboard-card__title">{icon("layers")} "Source Wise Breakdown"</h3>
            <div class="source-grid">{sources}</div>
        </div>

        <div class="dashboard-grid dashboard-grid--tables">
            <RankedTable title="Top Cities" headers=vec!["City", "Count"] rows=city_rows />
            <RankedTable title="Top Categories" headers=vec!["Category", "Count"] rows=category_rows />
            <RankedTable
                title="Top City + Category"
                headers=vec!["City", "Cat", "Count"]
                rows=city_category_rows
            />
        </div>

        <div class="dashboard-card">
            <h3 class="dashboard-card__title">{icon("alert-triangle")} "Missing Data Points"</h3>
            <QualityRow label="Records Missing Phone" count=count(|s| s.missing_values.missing_phone) total=total />
            <QualityRow label="Records Missing Email" count=count(|s| s.missing_values.missing_email) total=total />
            <QualityRow label="Records Missing Address" count=count(|s| s.missing_values.missing_address) total=total />
        </div>
    }
}

#[component]
fn QualityRow(
    label: &'static str,
    count: Signal<u64>,
    total: Signal<u64>,
) -> impl IntoView {
    let width = move || format!("width: {}%;", percentage(count.get(), total.get()));

    view! {
        <div class="quality-row">
            <div class="quality-row__header">
                <span class="quality-row__label">{label}</span>
                <span class="quality-row__value">{move || quality_label(count.get(), total.get())}</span>
            </div>
            <div class="quality-row__track">
                <div class="quality-row__bar" style=width></div>
            </div>
        </div>
    }
}
