use contracts::shared::table_view::Collator;
use std::cmp::Ordering;

/// Sorts with the browser's `String.prototype.localeCompare` in the
/// user's default locale
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCollator;

impl Collator for BrowserCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        js_sys::JsString::from(a)
            .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
            .cmp(&0)
    }
}
