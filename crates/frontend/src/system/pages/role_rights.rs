use contracts::shared::table_view::{export::to_csv, ColumnDef, Record};
use contracts::system::role_rights::{Capabilities, PermissionRecord};
use leptos::prelude::*;
use serde_json::{json, Value};

use crate::shared::components::data_table::{DataTable, TableColumn};
use crate::shared::export::download_csv;
use crate::system::rights::{use_page_capabilities, use_rights, RequirePageAccess};

/// Menu label the rights matrix itself is guarded by
pub const PAGE_LABEL: &str = "Role Rights";

/// One row per (role, page) pair
fn flatten(rights: &[PermissionRecord]) -> Vec<Record> {
    rights
        .iter()
        .flat_map(|record| {
            record.permissions.iter().map(move |p| {
                let row = json!({
                    "role": record.role,
                    "page": p.page,
                    "read": p.read,
                    "write": p.write,
                    "delete": p.delete,
                });
                match row {
                    Value::Object(map) => map,
                    _ => Record::new(),
                }
            })
        })
        .collect()
}

/// CSV of the selected rows, in record order
fn selection_csv(
    records: &[Record],
    rows: &[usize],
    columns: &[ColumnDef],
) -> Result<String, String> {
    if rows.is_empty() {
        return Err("Nothing selected".to_string());
    }
    Ok(to_csv(records, rows, columns))
}

fn flag(key: &'static str) -> impl Fn(&Record) -> AnyView + Send + Sync + 'static {
    move |record: &Record| {
        let on = record.get(key).and_then(Value::as_bool).unwrap_or(false);
        view! {
            <span class="badge" class:badge--on=on>{if on { "yes" } else { "no" }}</span>
        }
        .into_any()
    }
}

#[component]
pub fn RoleRightsPage() -> impl IntoView {
    view! {
        <RequirePageAccess page=PAGE_LABEL>
            <RoleRightsList />
        </RequirePageAccess>
    }
}

#[component]
fn RoleRightsList() -> impl IntoView {
    let rights = use_rights();
    let caps = use_page_capabilities(PAGE_LABEL);
    let records = Signal::derive(move || rights.state.with(|s| flatten(&s.rights)));

    let columns = vec![
        TableColumn::new("role", "Role"),
        TableColumn::new("page", "Page"),
        TableColumn::new("read", "Read").render(flag("read")),
        TableColumn::new("write", "Write").render(flag("write")),
        TableColumn::new("delete", "Delete").render(flag("delete")),
    ];
    let defs: Vec<ColumnDef> = columns.iter().map(TableColumn::def).collect();
    let defs = StoredValue::new(defs);

    let selected: RwSignal<Vec<usize>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let export_selected = move |_| {
        set_error.set(None);
        let csv = records.with_untracked(|rs| {
            selected.with_untracked(|rows| defs.with_value(|d| selection_csv(rs, rows, d)))
        });
        let filename = format!(
            "role_rights_selected_{}.csv",
            chrono::Local::now().format("%Y%m%d_%H%M")
        );
        let result = csv.and_then(|csv| download_csv(&csv, &filename));
        if let Err(e) = result {
            log::error!("export of selected rights failed: {}", e);
            set_error.set(Some(e));
        }
    };

    let on_selection = Callback::new(move |rows: Vec<usize>| selected.set(rows));

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Role Rights"</h2>
                <CapabilityNote caps=caps />
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <DataTable
                table_id="role_rights"
                records=records
                columns=columns
                show_checkbox=true
                on_selection_change=on_selection
            />
            <div class="page__footer">
                {move || format!("{} selected", selected.with(Vec::len))}
                " "
                <button
                    class="button"
                    disabled=move || selected.with(Vec::is_empty)
                    on:click=export_selected
                >
                    "Export selected"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CapabilityNote(caps: Signal<Capabilities>) -> impl IntoView {
    move || {
        let caps = caps.get();
        let text = match (caps.can_write, caps.can_delete) {
            (true, true) => "You can edit and delete entries.",
            (true, false) => "You can edit entries.",
            (false, true) => "You can delete entries.",
            (false, false) => "Read only.",
        };
        view! { <span class="page__caps">{text}</span> }
    }
}
