//! Leptos binding for [`ListController`]: one page component shared by every
//! listed entity.

use contracts::shared::list::{ListQuery, ListResponse, ListResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::controller::{Completion, FetchState, ListController};
use super::entity::{ListEntity, ListRow};
use crate::shared::api_client::{get_json, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::{export_current_page, ExportOutcome};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};

pub async fn fetch_page<E: ListEntity>(query: &ListQuery) -> Result<ListResult<E::Row>, ApiError> {
    get_json::<ListResponse<E::Row>, ListQuery>(E::ENDPOINT, Some(query))
        .await
        .map(ListResponse::into_result)
}

/// Issues a request for the controller's current query.
///
/// The completion goes through `try_update`, so a response arriving after the
/// page was disposed is dropped without touching the signal.
fn refresh<E: ListEntity>(state: RwSignal<ListController<E::Row>>) {
    let Some(ticket) = state.try_update(|c| c.begin_refresh()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch_page::<E>(&ticket.query).await;
        if state.try_update(|c| c.complete(&ticket, result)) == Some(Completion::Clamped) {
            refresh::<E>(state);
        }
    });
}

/// Applies `change` and refreshes only when it reports a modified query.
fn change_query<E: ListEntity>(
    state: RwSignal<ListController<E::Row>>,
    change: impl FnOnce(&mut ListController<E::Row>) -> bool,
) {
    if state.try_update(change).unwrap_or(false) {
        refresh::<E>(state);
    }
}

/// Text and class of the single-cell row shown in place of data, if any.
fn placeholder_for<E: ListEntity>(state: &FetchState<E::Row>) -> Option<(String, &'static str)> {
    match state {
        FetchState::Failed(msg) => Some((
            msg.clone(),
            "table__placeholder table__placeholder--error",
        )),
        FetchState::Ready(result) if result.is_empty() => {
            Some((E::EMPTY_MESSAGE.to_string(), "table__placeholder"))
        }
        _ => None,
    }
}

pub fn remote_list_page<E: ListEntity>() -> impl IntoView {
    let state = RwSignal::new(ListController::<E::Row>::new(E::PAGE_SIZE, E::MESSAGES));
    let (export_error, set_export_error) = signal::<Option<String>>(None);

    refresh::<E>(state);

    on_cleanup(move || {
        state.try_update_untracked(|c| c.teardown());
    });

    let loading = Signal::derive(move || state.with(|c| c.is_loading()));

    let subtitle = Signal::derive(move || {
        state.with(|c| match c.state() {
            FetchState::Failed(msg) => Some(msg.clone()),
            FetchState::Loading => Some(E::LOADING_MESSAGE.to_string()),
            FetchState::Ready(_) => Some(E::subtitle(c.total_count())),
        })
    });
    let subtitle_is_error = Signal::derive(move || state.with(|c| c.error().is_some()));

    let on_export = move |_| {
        let outcome = state.with_untracked(|c| {
            export_current_page(c.rows(), E::EXPORT_TAG, E::SHEET_NAME, c.page())
        });
        match outcome {
            Ok(ExportOutcome::Downloaded(_)) | Ok(ExportOutcome::Skipped) => {
                set_export_error.set(None)
            }
            Err(e) => {
                log::error!("Export of {} failed: {}", E::EXPORT_TAG, e);
                set_export_error.set(Some(e));
            }
        }
    };

    let columns = <E::Row as ListRow>::COLUMNS;
    let column_count = columns.len();

    let body = move || {
        let snapshot = state.with(|c| c.state().clone());
        if let Some((text, class)) = placeholder_for::<E>(&snapshot) {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <TableCellLayout>
                            <span class=class>{text}</span>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        match snapshot {
            FetchState::Ready(result) => result
                .rows
                .into_iter()
                .map(|row| {
                    view! {
                        <TableRow>
                            {row
                                .display_row()
                                .into_iter()
                                .map(|value| view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>{value}</TableCellLayout>
                                    </TableCell>
                                })
                                .collect_view()}
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any(),
            _ => view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <div class="table__loading">
                            <Spinner />
                            <span>{E::LOADING_MESSAGE}</span>
                        </div>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
        }
    };

    view! {
        <PageFrame page_id=E::PAGE_ID category=PageCategory::List>
            <PageHeader
                title=E::TITLE
                subtitle=subtitle
                subtitle_is_error=subtitle_is_error
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| { refresh::<E>(state) }
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_export
                    disabled=loading
                >
                    {icon("download")}
                    " Export Page"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || export_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <label class="filter-panel__field">
                            {icon("search")}
                            <input
                                type="text"
                                class="form__input"
                                placeholder=E::SEARCH_PLACEHOLDER
                                prop:value=move || state.with(|c| c.query().search.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    change_query::<E>(state, |c| c.set_search(text));
                                }
                            />
                        </label>
                        <label class="filter-panel__field">
                            {icon("map-pin")}
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Filter by city..."
                                prop:value=move || state.with(|c| c.query().city.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    change_query::<E>(state, |c| c.set_city(text));
                                }
                            />
                        </label>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {columns
                                    .iter()
                                    .map(|col| view! {
                                        <TableHeaderCell resizable=false min_width=col.min_width>
                                            {col.label}
                                        </TableHeaderCell>
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>{body}</TableBody>
                    </Table>
                </div>

                <PaginationControls
                    label=Signal::derive(move || state.with(|c| c.page_label()))
                    can_prev=Signal::derive(move || state.with(|c| c.can_prev()))
                    can_next=Signal::derive(move || state.with(|c| c.can_next()))
                    on_prev=Callback::new(move |_| { change_query::<E>(state, |c| c.prev_page()) })
                    on_next=Callback::new(move |_| { change_query::<E>(state, |c| c.next_page()) })
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_bank::ui::list::BankListEntity;
    use contracts::domain::a003_bank::aggregate::BankRecord;

    fn ready(rows: Vec<BankRecord>) -> FetchState<BankRecord> {
        FetchState::Ready(ListResult {
            rows,
            total_pages: 1,
            total_count: 0,
        })
    }

    #[test]
    fn test_placeholder_for_failed_and_empty_pages() {
        assert_eq!(
            placeholder_for::<BankListEntity>(&FetchState::Failed("Backend offline.".into())),
            Some((
                "Backend offline.".to_string(),
                "table__placeholder table__placeholder--error"
            ))
        );
        assert_eq!(
            placeholder_for::<BankListEntity>(&ready(Vec::new())),
            Some(("No bank records found.".to_string(), "table__placeholder"))
        );
    }

    #[test]
    fn test_no_placeholder_while_loading_or_with_rows() {
        assert_eq!(placeholder_for::<BankListEntity>(&FetchState::Loading), None);
        assert_eq!(
            placeholder_for::<BankListEntity>(&ready(vec![BankRecord::default()])),
            None
        );
    }
}
