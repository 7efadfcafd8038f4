//! Fields table of a service

use super::{Action, BatchAction, Column, DeleteKind, LinkAction, PanelContext, Table, UrlArg};
use crate::urls::Route;
use hashmap_core::models::Field;

pub fn create_field() -> Action {
    Action::Navigate(LinkAction {
        name: "createfield",
        verbose_name: "Create new Field",
        icon: "create",
        route: Route::FieldCreate,
        arg: UrlArg::Service,
    })
}

pub fn delete_field() -> BatchAction {
    BatchAction::delete("deletefield", "Delete Field", "Field", "Fields", DeleteKind::Field)
}

pub fn fields_table(context: PanelContext) -> Table<Field> {
    Table {
        name: "fields",
        verbose_name: "Fields",
        columns: vec![
            Column::new("name", "Name", |f: &Field| Some(f.name.clone())).link(Route::Field),
        ],
        row_actions: vec![Action::BatchMutate(delete_field())],
        table_actions: vec![create_field()],
        multi_select: false,
        context,
    }
}
