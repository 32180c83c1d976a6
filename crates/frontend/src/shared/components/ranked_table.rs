use leptos::prelude::*;
use thaw::*;

/// Card with a small read-only table, e.g. "Top cities by records".
///
/// Each row is pre-formatted text aligned with `headers`.
#[component]
pub fn RankedTable(
    #[prop(into)]
    title: String,
    headers: Vec<&'static str>,
    #[prop(into)]
    rows: Signal<Vec<Vec<String>>>,
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or_else(|| "No data available".to_string());
    let column_count = headers.len();

    view! {
        <div class="dashboard-card">
            <h3 class="dashboard-card__title">{title}</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {headers
                            .into_iter()
                            .map(|h| view! { <TableHeaderCell>{h}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            let text = empty_text.clone();
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan=column_count.to_string()>
                                        <TableCellLayout>
                                            <span class="table__placeholder">{text}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|cells| {
                                    view! {
                                        <TableRow>
                                            {cells
                                                .into_iter()
                                                .map(|c| view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{c}</TableCellLayout>
                                                    </TableCell>
                                                })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
