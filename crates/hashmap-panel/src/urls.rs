//! Named panel routes
//!
//! Route patterns are declared once here and used both to register the
//! actix resources and to build links, so a link can never drift from the
//! route it points at.

/// Every named route of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Service,
    ServiceCreate,
    ServiceDelete,
    Field,
    FieldCreate,
    FieldDelete,
    ServiceMappingCreate,
    ServiceMappingEdit,
    FieldMappingCreate,
    FieldMappingEdit,
    MappingDelete,
}

impl Route {
    /// Path pattern relative to the panel base path
    pub fn pattern(&self) -> &'static str {
        match self {
            Route::Index => "",
            Route::Service => "/services/{service_id}",
            Route::ServiceCreate => "/services/create",
            Route::ServiceDelete => "/services/delete",
            Route::Field => "/fields/{field_id}",
            Route::FieldCreate => "/services/{service_id}/fields/create",
            Route::FieldDelete => "/fields/delete",
            Route::ServiceMappingCreate => "/services/{service_id}/mappings/create",
            Route::ServiceMappingEdit => "/service_mappings/{mapping_id}/edit",
            Route::FieldMappingCreate => "/fields/{field_id}/mappings/create",
            Route::FieldMappingEdit => "/field_mappings/{mapping_id}/edit",
            Route::MappingDelete => "/mappings/delete",
        }
    }

    /// Name of the single path argument, if the route takes one
    pub fn arg_name(&self) -> Option<&'static str> {
        let pattern = self.pattern();
        let start = pattern.find('{')?;
        let end = pattern[start..].find('}')? + start;
        Some(&pattern[start + 1..end])
    }
}

/// Route reverser bound to the panel base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Urls {
    base_path: String,
}

impl Urls {
    /// Creates a reverser; `base_path` is either empty or `/segment[/...]`
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Base path every route lives under
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Builds the URL of a route
    ///
    /// Returns `None` when the route needs an argument and none was given.
    pub fn reverse(&self, route: Route, arg: Option<&str>) -> Option<String> {
        let pattern = route.pattern();

        let path = match route.arg_name() {
            Some(name) => {
                let arg = arg.filter(|a| !a.is_empty())?;
                pattern.replace(&format!("{{{}}}", name), &urlencoding::encode(arg))
            }
            None => pattern.to_string(),
        };

        if path.is_empty() {
            Some(format!("{}/", self.base_path))
        } else {
            Some(format!("{}{}", self.base_path, path))
        }
    }

    /// URL of the services index
    pub fn index(&self) -> String {
        format!("{}/", self.base_path)
    }
}
