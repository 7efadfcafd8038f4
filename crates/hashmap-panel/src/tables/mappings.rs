//! Mapping tables
//!
//! Service and field mappings share their columns and delete action; field
//! mappings add the leading `value` column.

use super::{Action, BatchAction, Column, DeleteKind, LinkAction, PanelContext, Table, UrlArg};
use crate::forms::MappingTarget;
use crate::urls::Route;
use hashmap_core::models::Mapping;

pub fn delete_mapping() -> BatchAction {
    BatchAction::delete(
        "deletemapping",
        "Delete Mapping",
        "Mapping",
        "Mappings",
        DeleteKind::Mapping,
    )
}

fn create_mapping(target: MappingTarget) -> Action {
    let (name, route, arg) = match target {
        MappingTarget::Service => (
            "createservicemapping",
            Route::ServiceMappingCreate,
            UrlArg::Service,
        ),
        MappingTarget::Field => (
            "createfieldmapping",
            Route::FieldMappingCreate,
            UrlArg::Field,
        ),
    };

    Action::Navigate(LinkAction {
        name,
        verbose_name: "Create new Mapping",
        icon: "create",
        route,
        arg,
    })
}

fn edit_mapping(target: MappingTarget) -> Action {
    let (name, route) = match target {
        MappingTarget::Service => ("editservicemapping", Route::ServiceMappingEdit),
        MappingTarget::Field => ("editfieldmapping", Route::FieldMappingEdit),
    };

    Action::Navigate(LinkAction {
        name,
        verbose_name: "Edit Mapping",
        icon: "edit",
        route,
        arg: UrlArg::Row,
    })
}

fn mappings_table(target: MappingTarget, context: PanelContext) -> Table<Mapping> {
    let mut columns = Vec::with_capacity(4);
    if target == MappingTarget::Field {
        columns.push(Column::new("value", "Value", |m: &Mapping| m.value.clone()));
    }
    columns.push(Column::new("cost", "Cost", |m: &Mapping| Some(m.cost.to_string())));
    columns.push(Column::new("type", "Type", |m: &Mapping| {
        Some(m.mapping_type.as_str().to_string())
    }));
    columns.push(Column::new("group_id", "Group", |m: &Mapping| m.group_id.clone()));

    Table {
        name: "mappings",
        verbose_name: "Mappings",
        columns,
        row_actions: vec![edit_mapping(target), Action::BatchMutate(delete_mapping())],
        table_actions: vec![create_mapping(target)],
        multi_select: true,
        context,
    }
}

pub fn service_mappings_table(context: PanelContext) -> Table<Mapping> {
    mappings_table(MappingTarget::Service, context)
}

pub fn field_mappings_table(context: PanelContext) -> Table<Mapping> {
    mappings_table(MappingTarget::Field, context)
}
