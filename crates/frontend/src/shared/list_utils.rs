//! Small helpers shared by list screens (sort indicators, search boxes)
use contracts::shared::table_view::SortSpec;
use leptos::prelude::*;

/// Indicator next to a column header: ▲/▼ for the sorted column, ⇅ otherwise
pub fn get_sort_indicator(sort: &SortSpec, key: &str) -> &'static str {
    if sort.active_key() == Some(key) {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortSpec, key: &str) -> &'static str {
    if sort.active_key() == Some(key) {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

/// Plain text input reporting every keystroke
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <input
            type="search"
            class=format!("search-input {}", class)
            placeholder=placeholder
            prop:value=move || value.get()
            class:search-input--active=move || !value.get().is_empty()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table_view::SortDirection;

    #[test]
    fn test_sort_indicator() {
        let asc = SortSpec::by("name", SortDirection::Ascending);
        let desc = SortSpec::by("name", SortDirection::Descending);
        assert_eq!(get_sort_indicator(&asc, "name"), " ▲");
        assert_eq!(get_sort_indicator(&desc, "name"), " ▼");
        assert_eq!(get_sort_indicator(&asc, "city"), " ⇅");
        assert_eq!(get_sort_indicator(&SortSpec::default(), "name"), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        let asc = SortSpec::by("name", SortDirection::Ascending);
        assert_eq!(get_sort_class(&asc, "name"), "sort-icon sort-icon--active");
        assert_eq!(get_sort_class(&asc, "city"), "sort-icon");
    }
}
