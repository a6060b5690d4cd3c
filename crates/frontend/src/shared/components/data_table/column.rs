use contracts::shared::table_view::{cell_text, ColumnDef, Record};
use leptos::prelude::*;
use std::sync::Arc;

/// Custom cell view built from the whole record
pub type CellRenderer = Arc<dyn Fn(&Record) -> AnyView + Send + Sync>;

/// Column descriptor: field key, header label and an optional renderer.
///
/// The renderer only changes what is displayed; searching and sorting keep
/// using the raw value at `key`.
#[derive(Clone)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub render: Option<CellRenderer>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: None,
        }
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record) -> AnyView + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn def(&self) -> ColumnDef {
        ColumnDef::new(self.key.clone(), self.label.clone())
    }

    pub fn cell(&self, record: &Record) -> AnyView {
        match &self.render {
            Some(render) => render(record),
            None => cell_text(record, &self.key).into_any(),
        }
    }
}
