use crate::remote::Resource;
use crate::views::form::{optional_to_text, parse_number, FieldKind, FormBuffer, FormField};
use crate::views::{Listed, Wording};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub categoria_id: i64,
}

/// Partially filled producto. Unset attributes are left out of the request body.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriaDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

impl Resource for Producto {
    type Draft = ProductoDraft;

    const COLLECTION: &'static str = "productos";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: &ProductoDraft) -> Self {
        Self {
            id,
            nombre: draft.nombre.clone().unwrap_or_default(),
            descripcion: draft.descripcion.clone().unwrap_or_default(),
            precio: draft.precio.unwrap_or_default(),
            categoria_id: draft.categoria_id.unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> ProductoDraft {
        ProductoDraft {
            nombre: Some(self.nombre.clone()),
            descripcion: Some(self.descripcion.clone()),
            precio: Some(self.precio),
            categoria_id: Some(self.categoria_id),
        }
    }
}

impl Resource for Categoria {
    type Draft = CategoriaDraft;

    const COLLECTION: &'static str = "categorias";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: &CategoriaDraft) -> Self {
        Self {
            id,
            nombre: draft.nombre.clone().unwrap_or_default(),
            descripcion: draft.descripcion.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> CategoriaDraft {
        CategoriaDraft {
            nombre: Some(self.nombre.clone()),
            descripcion: Some(self.descripcion.clone()),
        }
    }
}

impl FormBuffer for ProductoDraft {
    const FIELDS: &'static [FormField] = &[
        FormField {
            name: "nombre",
            label: "Nombre",
            kind: FieldKind::Text,
        },
        FormField {
            name: "descripcion",
            label: "Descripción",
            kind: FieldKind::Text,
        },
        FormField {
            name: "precio",
            label: "Precio",
            kind: FieldKind::Number,
        },
        FormField {
            name: "categoria_id",
            label: "Categoría ID",
            kind: FieldKind::Number,
        },
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "nombre" => optional_to_text(&self.nombre),
            "descripcion" => optional_to_text(&self.descripcion),
            "precio" => optional_to_text(&self.precio),
            "categoria_id" => optional_to_text(&self.categoria_id),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, text: &str) {
        match name {
            "nombre" => self.nombre = Some(text.to_string()),
            "descripcion" => self.descripcion = Some(text.to_string()),
            "precio" => self.precio = parse_number(name, text),
            "categoria_id" => self.categoria_id = parse_number(name, text),
            _ => {}
        }
    }
}

impl FormBuffer for CategoriaDraft {
    const FIELDS: &'static [FormField] = &[
        FormField {
            name: "nombre",
            label: "Nombre",
            kind: FieldKind::Text,
        },
        FormField {
            name: "descripcion",
            label: "Descripción",
            kind: FieldKind::Text,
        },
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "nombre" => optional_to_text(&self.nombre),
            "descripcion" => optional_to_text(&self.descripcion),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, text: &str) {
        match name {
            "nombre" => self.nombre = Some(text.to_string()),
            "descripcion" => self.descripcion = Some(text.to_string()),
            _ => {}
        }
    }
}

impl Listed for Producto {
    const WORDING: Wording = Wording {
        title: "Gestión de Productos",
        add_button: "Agregar Producto",
        add_header: "Agregar Nuevo Producto",
        edit_header: "Actualizar Producto",
        confirm_delete: "¿Estás seguro de que quieres eliminar este producto?",
        created: "Producto agregado exitosamente",
        updated: "Producto actualizado exitosamente",
        removed: "Producto eliminado exitosamente",
        fetch_failed: "Error fetching productos",
        create_failed: "Error agregando producto",
        update_failed: "Error actualizando producto",
        remove_failed: "Error eliminando producto",
    };
    const HEADERS: &'static [&'static str] =
        &["ID", "Nombre", "Descripción", "Precio", "Categoría ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            self.descripcion.clone(),
            self.precio.to_string(),
            self.categoria_id.to_string(),
        ]
    }
}

impl Listed for Categoria {
    const WORDING: Wording = Wording {
        title: "Gestión de Categorías",
        add_button: "Agregar Categoría",
        add_header: "Agregar Categoría",
        edit_header: "Actualizar Categoría",
        confirm_delete: "¿Estás seguro de que quieres eliminar esta categoría?",
        created: "Categoría agregada exitosamente",
        updated: "Categoría actualizada exitosamente",
        removed: "Categoría eliminada exitosamente",
        fetch_failed: "Error fetching categorias",
        create_failed: "Error agregando categoría",
        update_failed: "Error actualizando categoría",
        remove_failed: "Error eliminando categoría",
    };
    const HEADERS: &'static [&'static str] = &["ID", "Nombre", "Descripción"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            self.descripcion.clone(),
        ]
    }
}
